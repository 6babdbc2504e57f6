//! ClusterServiceClass Custom Resource Definition.
//!
//! Plans refer to their class by name only; the class itself is cached so the
//! webhook can warn about dangling references.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ClusterServiceClass is a service offering that plans are grouped under.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ClusterServiceClass",
    plural = "clusterserviceclasses",
    printcolumn = r#"{"name":"External-Name", "type":"string", "jsonPath":".spec.externalName"}"#,
    printcolumn = r#"{"name":"Broker", "type":"string", "jsonPath":".spec.clusterServiceBrokerName"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceClassSpec {
    /// Name of the ClusterServiceBroker that offers this class.
    #[serde(default)]
    pub cluster_service_broker_name: String,

    /// Human-readable name of the class as reported by the broker.
    #[serde(default)]
    pub external_name: String,

    /// Opaque identifier assigned by the broker.
    #[serde(rename = "externalID", default)]
    pub external_id: String,

    /// Description of the class.
    #[serde(default)]
    pub description: String,

    /// Whether instances of plans in this class can be bound by default.
    #[serde(default)]
    pub bindable: bool,
}
