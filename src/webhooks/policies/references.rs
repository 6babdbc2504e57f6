//! Reference warning policy.
//!
//! Classes and brokers can legitimately appear after the plans that point at
//! them (brokers publish whole catalogs at once), so dangling references are
//! reported as warnings and never deny. Lookups are skipped until the cache
//! has completed its initial list; an empty cache proves nothing.

use super::ValidationContext;
use crate::crd::{ClusterServiceBroker, ClusterServiceClass};
use crate::informers::{Informer, SharedInformerFactory};
use crate::validation::PlanValidation;

/// Read-only catalog caches consulted by the webhook
#[derive(Clone)]
pub struct CatalogCache {
    classes: Informer<ClusterServiceClass>,
    brokers: Informer<ClusterServiceBroker>,
}

impl CatalogCache {
    pub fn new(
        classes: Informer<ClusterServiceClass>,
        brokers: Informer<ClusterServiceBroker>,
    ) -> Self {
        Self { classes, brokers }
    }

    /// Register (or reuse) the class and broker informers of `factory`.
    pub fn from_factory(factory: &SharedInformerFactory) -> Self {
        Self::new(
            factory.cluster_service_classes(),
            factory.cluster_service_brokers(),
        )
    }
}

fn missing<K>(informer: &Informer<K>, name: &str) -> bool
where
    K: kube::Resource<DynamicType = ()> + Clone + 'static,
{
    !name.is_empty() && informer.has_synced() && informer.get(name, None).is_none()
}

/// Warnings for references the catalog does not know about
pub fn warnings<K: PlanValidation>(ctx: &ValidationContext<'_, K>) -> Vec<String> {
    // Only the cluster-scoped kinds are cached.
    if !K::CLUSTER_SCOPED {
        return Vec::new();
    }
    let Some(catalog) = ctx.catalog else {
        return Vec::new();
    };

    let mut warnings = Vec::new();

    let class = ctx.resource.class_name();
    if missing(&catalog.classes, class) {
        warnings.push(format!(
            "ClusterServiceClass \"{}\" does not exist yet",
            class
        ));
    }

    let broker = ctx.resource.broker_name();
    if missing(&catalog.brokers, broker) {
        warnings.push(format!(
            "ClusterServiceBroker \"{}\" does not exist yet",
            broker
        ));
    }

    warnings
}
