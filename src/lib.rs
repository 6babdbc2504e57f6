//! service-catalog library crate
//!
//! This module exports the plan validators, CRD definitions, broker
//! rendering, the shared informer factory and the admission webhook.

pub mod config;
pub mod crd;
pub mod error;
pub mod health;
pub mod informers;
pub mod output;
pub mod validation;
pub mod webhooks;

pub use config::Config;
pub use error::{Error, Result};
pub use health::HealthState;
pub use informers::{Informer, ResourceKind, SharedInformerFactory};
pub use validation::{ErrorList, FieldError, PlanValidation, ValidationLimits};
pub use webhooks::{
    WEBHOOK_CERT_PATH, WEBHOOK_KEY_PATH, WEBHOOK_PORT, WebhookError, run_webhook_server,
};

use kube::runtime::watcher::Config as WatcherConfig;
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;

/// Create namespaced or cluster-wide API based on scope
pub fn scoped_api<T>(client: Client, namespace: Option<&str>) -> Api<T>
where
    T: Resource<Scope = k8s_openapi::NamespaceResourceScope>,
    <T as Resource>::DynamicType: Default,
    T: Clone + DeserializeOwned + std::fmt::Debug,
{
    match namespace {
        Some(ns) => Api::namespaced(client, ns),
        None => Api::all(client),
    }
}

/// Watcher configuration shared by every informer.
///
/// `any_semantic()` lets the API server answer the initial list from its
/// watch cache.
pub(crate) fn default_watcher_config() -> WatcherConfig {
    WatcherConfig::default().any_semantic()
}
