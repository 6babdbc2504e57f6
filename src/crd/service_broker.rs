//! ClusterServiceBroker Custom Resource Definition.
//!
//! Brokers are never validated here; they are cached by the informers and
//! rendered by the `output` module.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// ClusterServiceBroker is an external endpoint that offers classes and plans.
///
/// Example:
/// ```yaml
/// apiVersion: servicecatalog.k8s.io/v1beta1
/// kind: ClusterServiceBroker
/// metadata:
///   name: ups-broker
/// spec:
///   url: http://ups-broker.ups-broker.svc.cluster.local
/// ```
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ClusterServiceBroker",
    plural = "clusterservicebrokers",
    status = "ClusterServiceBrokerStatus",
    printcolumn = r#"{"name":"URL", "type":"string", "jsonPath":".spec.url"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceBrokerSpec {
    /// URL of the broker's service endpoint.
    #[serde(default)]
    pub url: String,

    /// Skip TLS verification when talking to the broker.
    #[serde(default)]
    pub insecure_skip_tls_verify: bool,

    /// How often the broker catalog is relisted (e.g. "15m").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relist_duration: Option<String>,
}

/// Status of a ClusterServiceBroker.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceBrokerStatus {
    /// Condition history, most recent last.
    #[serde(default)]
    pub conditions: Vec<ServiceBrokerCondition>,

    /// The generation the catalog was last fetched for.
    #[serde(default)]
    pub reconciled_generation: i64,

    /// When the catalog was last retrieved from the broker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_catalog_retrieval_time: Option<String>,
}

/// A timestamped condition observed on a broker.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBrokerCondition {
    /// Type of condition ("Ready", "Failed").
    pub r#type: String,
    /// Status of the condition ("True", "False", "Unknown").
    pub status: String,
    /// Machine-readable reason for the condition's last transition.
    #[serde(default)]
    pub reason: String,
    /// Human-readable message indicating details about last transition.
    #[serde(default)]
    pub message: String,
    /// Last time the condition transitioned from one status to another.
    #[serde(default)]
    pub last_transition_time: String,
}
