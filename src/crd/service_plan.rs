//! ClusterServicePlan and ServicePlan Custom Resource Definitions.
//!
//! Both plan kinds own a `CommonServicePlanSpec` carrying the fields the
//! broker reports for every plan, and add their own class reference and
//! broker name. The cluster kind is cluster-scoped, the other is namespaced.

use kube::CustomResource;
use schemars::JsonSchema;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use serde::{Deserialize, Serialize};

/// Fields shared by ClusterServicePlan and ServicePlan.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonServicePlanSpec {
    /// Human-readable name of the plan as reported by the broker.
    #[serde(default)]
    pub external_name: String,

    /// Opaque identifier assigned by the broker. Cannot change once set.
    #[serde(rename = "externalID", default)]
    pub external_id: String,

    /// Description of the plan.
    #[serde(default)]
    pub description: String,

    /// Whether instances of this plan can be bound. Falls back to the class when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindable: Option<bool>,

    /// Whether the plan is free of charge.
    #[serde(default)]
    pub free: bool,

    /// Opaque broker-provided metadata for display purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_object")]
    pub external_metadata: Option<serde_json::Value>,
}

/// Free-form object schema; the API server keeps every field as sent.
fn preserve_unknown_object(_: &mut schemars::r#gen::SchemaGenerator) -> Schema {
    let mut schema = SchemaObject {
        instance_type: Some(InstanceType::Object.into()),
        ..Default::default()
    };
    schema.extensions.insert(
        "x-kubernetes-preserve-unknown-fields".to_string(),
        serde_json::Value::Bool(true),
    );
    Schema::Object(schema)
}

/// Reference to a cluster-scoped object by name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ClusterObjectReference {
    /// Name of the referent.
    #[serde(default)]
    pub name: String,
}

/// Reference to an object in the same namespace by name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct LocalObjectReference {
    /// Name of the referent.
    #[serde(default)]
    pub name: String,
}

/// ClusterServicePlan is a cluster-wide service tier offered by a ClusterServiceBroker.
///
/// Example:
/// ```yaml
/// apiVersion: servicecatalog.k8s.io/v1beta1
/// kind: ClusterServicePlan
/// metadata:
///   name: 40d-0983-1b89
/// spec:
///   externalName: default
///   externalID: 40d-0983-1b89
///   description: The default plan
///   clusterServiceBrokerName: ups-broker
///   clusterServiceClassRef:
///     name: 4f6e6cf6-ffdd-425f-a2c7-3c9258ad2468
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ClusterServicePlan",
    plural = "clusterserviceplans",
    status = "ServicePlanStatus",
    printcolumn = r#"{"name":"External-Name", "type":"string", "jsonPath":".spec.externalName"}"#,
    printcolumn = r#"{"name":"Broker", "type":"string", "jsonPath":".spec.clusterServiceBrokerName"}"#,
    printcolumn = r#"{"name":"Class", "type":"string", "jsonPath":".spec.clusterServiceClassRef.name"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServicePlanSpec {
    /// Fields shared with ServicePlan.
    #[serde(flatten)]
    pub common: CommonServicePlanSpec,

    /// Name of the ClusterServiceBroker that offers this plan.
    #[serde(default)]
    pub cluster_service_broker_name: String,

    /// The ClusterServiceClass this plan belongs to.
    #[serde(default)]
    pub cluster_service_class_ref: ClusterObjectReference,
}

/// ServicePlan is a namespaced service tier offered by a ServiceBroker.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ServicePlan",
    plural = "serviceplans",
    status = "ServicePlanStatus",
    namespaced,
    printcolumn = r#"{"name":"External-Name", "type":"string", "jsonPath":".spec.externalName"}"#,
    printcolumn = r#"{"name":"Broker", "type":"string", "jsonPath":".spec.serviceBrokerName"}"#,
    printcolumn = r#"{"name":"Class", "type":"string", "jsonPath":".spec.serviceClassRef.name"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlanSpec {
    /// Fields shared with ClusterServicePlan.
    #[serde(flatten)]
    pub common: CommonServicePlanSpec,

    /// Name of the ServiceBroker that offers this plan.
    #[serde(default)]
    pub service_broker_name: String,

    /// The ServiceClass this plan belongs to.
    #[serde(default)]
    pub service_class_ref: LocalObjectReference,
}

/// Status shared by both plan kinds.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlanStatus {
    /// Set when the broker no longer lists this plan in its catalog.
    #[serde(default)]
    pub removed_from_broker_catalog: bool,
}
