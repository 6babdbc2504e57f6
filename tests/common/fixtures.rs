//! Test fixtures and builder patterns for catalog resources.

#![allow(dead_code)]

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use service_catalog::crd::{
    ClusterObjectReference, ClusterServiceBroker, ClusterServiceBrokerSpec,
    ClusterServiceBrokerStatus, ClusterServicePlan, ClusterServicePlanSpec, CommonServicePlanSpec,
    LocalObjectReference, ServiceBrokerCondition, ServicePlan, ServicePlanSpec,
};

/// Builder for plan test fixtures. Starts from a plan that passes
/// validation; each setter breaks or changes exactly one field.
///
/// # Example
/// ```
/// let plan = PlanBuilder::new("gold")
///     .external_id("")
///     .build_cluster();
/// ```
#[derive(Clone, Debug)]
pub struct PlanBuilder {
    name: Option<String>,
    generate_name: Option<String>,
    namespace: Option<String>,
    external_name: String,
    external_id: String,
    description: String,
    broker_name: String,
    class_name: String,
}

impl PlanBuilder {
    /// Create a new builder with the given plan name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            external_name: name.clone(),
            name: Some(name),
            generate_name: None,
            namespace: None,
            external_id: "40d-0983-1b89".to_string(),
            description: "plan description".to_string(),
            broker_name: "test-broker".to_string(),
            class_name: "test-service-class".to_string(),
        }
    }

    /// Set or clear metadata.name.
    pub fn name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    /// Set metadata.generateName.
    pub fn generate_name(mut self, prefix: impl Into<String>) -> Self {
        self.generate_name = Some(prefix.into());
        self
    }

    /// Set the namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set spec.externalName.
    pub fn external_name(mut self, value: impl Into<String>) -> Self {
        self.external_name = value.into();
        self
    }

    /// Set spec.externalID.
    pub fn external_id(mut self, value: impl Into<String>) -> Self {
        self.external_id = value.into();
        self
    }

    /// Set spec.description.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = value.into();
        self
    }

    /// Set the broker name.
    pub fn broker(mut self, value: impl Into<String>) -> Self {
        self.broker_name = value.into();
        self
    }

    /// Set the class reference name.
    pub fn class(mut self, value: impl Into<String>) -> Self {
        self.class_name = value.into();
        self
    }

    fn metadata(&self) -> ObjectMeta {
        ObjectMeta {
            name: self.name.clone(),
            generate_name: self.generate_name.clone(),
            namespace: self.namespace.clone(),
            ..Default::default()
        }
    }

    fn common(&self) -> CommonServicePlanSpec {
        CommonServicePlanSpec {
            external_name: self.external_name.clone(),
            external_id: self.external_id.clone(),
            description: self.description.clone(),
            ..Default::default()
        }
    }

    /// Build a ClusterServicePlan.
    pub fn build_cluster(self) -> ClusterServicePlan {
        ClusterServicePlan {
            metadata: self.metadata(),
            spec: ClusterServicePlanSpec {
                common: self.common(),
                cluster_service_broker_name: self.broker_name,
                cluster_service_class_ref: ClusterObjectReference {
                    name: self.class_name,
                },
            },
            status: None,
        }
    }

    /// Build a ServicePlan. Defaults the namespace to `test` when unset.
    pub fn build_namespaced(mut self) -> ServicePlan {
        if self.namespace.is_none() {
            self.namespace = Some("test".to_string());
        }
        ServicePlan {
            metadata: self.metadata(),
            spec: ServicePlanSpec {
                common: self.common(),
                service_broker_name: self.broker_name,
                service_class_ref: LocalObjectReference {
                    name: self.class_name,
                },
            },
            status: None,
        }
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new("test-plan")
    }
}

/// Builder for broker fixtures used by the rendering tests.
#[derive(Clone, Debug)]
pub struct BrokerBuilder {
    name: String,
    url: String,
    conditions: Vec<ServiceBrokerCondition>,
}

impl BrokerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            url: format!("http://{}.example.com", name),
            name,
            conditions: Vec::new(),
        }
    }

    /// Set the broker URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Append a status condition.
    pub fn condition(
        mut self,
        type_: &str,
        status: &str,
        reason: &str,
        message: &str,
        timestamp: &str,
    ) -> Self {
        self.conditions.push(ServiceBrokerCondition {
            r#type: type_.to_string(),
            status: status.to_string(),
            reason: reason.to_string(),
            message: message.to_string(),
            last_transition_time: timestamp.to_string(),
        });
        self
    }

    pub fn build(self) -> ClusterServiceBroker {
        let mut broker = ClusterServiceBroker::new(
            &self.name,
            ClusterServiceBrokerSpec {
                url: self.url,
                ..Default::default()
            },
        );
        if !self.conditions.is_empty() {
            broker.status = Some(ClusterServiceBrokerStatus {
                conditions: self.conditions,
                ..Default::default()
            });
        }
        broker
    }
}

/// A valid ClusterServicePlan with the default fixture values.
pub fn valid_cluster_plan() -> ClusterServicePlan {
    PlanBuilder::default().build_cluster()
}

/// A valid ServicePlan in namespace `test`.
pub fn valid_service_plan() -> ServicePlan {
    PlanBuilder::default().build_namespaced()
}
