//! Custom Resource Definitions (CRDs) for the service catalog.
//!
//! - `ClusterServicePlan` / `ServicePlan`: purchasable service tiers, validated on admission
//! - `ClusterServiceClass`: the offering plans are grouped under
//! - `ClusterServiceBroker`: the endpoint that offers classes and plans

mod service_broker;
mod service_class;
mod service_plan;

pub use service_broker::*;
pub use service_class::*;
pub use service_plan::*;

/// API group shared by every service-catalog resource.
pub const API_GROUP: &str = "servicecatalog.k8s.io";

/// API version shared by every service-catalog resource.
pub const API_VERSION: &str = "v1beta1";
