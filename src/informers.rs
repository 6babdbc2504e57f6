//! Shared informer factory for service-catalog resources.
//!
//! One reflector-backed cache per resource kind, shared by every consumer in
//! the process. Accessors only register an informer; nothing talks to the
//! API server until `start` is called. Consumers get read-only views.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use kube::runtime::reflector::{ObjectRef, Store};
use kube::runtime::{WatchStreamExt, reflector, watcher};
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::crd::{ClusterServiceBroker, ClusterServiceClass, ClusterServicePlan, ServicePlan};
use crate::{default_watcher_config, scoped_api};

/// Resource kinds the factory can hand out informers for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    ClusterServiceBroker,
    ClusterServiceClass,
    ClusterServicePlan,
    ServicePlan,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::ClusterServiceBroker => write!(f, "ClusterServiceBroker"),
            ResourceKind::ClusterServiceClass => write!(f, "ClusterServiceClass"),
            ResourceKind::ClusterServicePlan => write!(f, "ClusterServicePlan"),
            ResourceKind::ServicePlan => write!(f, "ServicePlan"),
        }
    }
}

/// Read-only view of a shared cache.
pub struct Informer<K>
where
    K: Resource<DynamicType = ()> + Clone + 'static,
{
    store: Store<K>,
    synced: Arc<AtomicBool>,
}

impl<K> Clone for Informer<K>
where
    K: Resource<DynamicType = ()> + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            synced: self.synced.clone(),
        }
    }
}

impl<K> Informer<K>
where
    K: Resource<DynamicType = ()> + Clone + 'static,
{
    /// Wrap a store that is fed elsewhere, e.g. by a test writer.
    pub fn from_store(store: Store<K>, synced: bool) -> Self {
        Self {
            store,
            synced: Arc::new(AtomicBool::new(synced)),
        }
    }

    /// The underlying reflector store.
    pub fn store(&self) -> &Store<K> {
        &self.store
    }

    /// Whether the initial list has been loaded into the cache.
    pub fn has_synced(&self) -> bool {
        self.synced.load(Ordering::Acquire)
    }

    /// Look up an object by name (and namespace for namespaced kinds).
    pub fn get(&self, name: &str, namespace: Option<&str>) -> Option<Arc<K>> {
        let obj_ref = match namespace {
            Some(ns) => ObjectRef::new(name).within(ns),
            None => ObjectRef::new(name),
        };
        self.store.get(&obj_ref)
    }

    /// Snapshot of every cached object.
    pub fn list(&self) -> Vec<Arc<K>> {
        self.store.state()
    }
}

type Starter = Box<dyn FnOnce(Client, Option<String>) -> BoxFuture<'static, ()> + Send>;

#[derive(Default)]
struct FactoryState {
    informers: HashMap<ResourceKind, Box<dyn Any + Send + Sync>>,
    pending: Vec<(ResourceKind, Starter)>,
    started: HashSet<ResourceKind>,
}

/// Registry of shared informers, constructed once per process.
pub struct SharedInformerFactory {
    namespace: Option<String>,
    state: Mutex<FactoryState>,
}

impl SharedInformerFactory {
    /// `namespace` restricts namespaced kinds; cluster-scoped kinds ignore it.
    pub fn new(namespace: Option<String>) -> Self {
        Self {
            namespace,
            state: Mutex::new(FactoryState::default()),
        }
    }

    /// Namespace the namespaced informers are restricted to.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn cluster_service_brokers(&self) -> Informer<ClusterServiceBroker> {
        self.informer_for(ResourceKind::ClusterServiceBroker, |client, _| Api::all(client))
    }

    pub fn cluster_service_classes(&self) -> Informer<ClusterServiceClass> {
        self.informer_for(ResourceKind::ClusterServiceClass, |client, _| Api::all(client))
    }

    pub fn cluster_service_plans(&self) -> Informer<ClusterServicePlan> {
        self.informer_for(ResourceKind::ClusterServicePlan, |client, _| Api::all(client))
    }

    pub fn service_plans(&self) -> Informer<ServicePlan> {
        self.informer_for(ResourceKind::ServicePlan, scoped_api)
    }

    /// Kinds registered so far, in a stable order.
    pub fn registered(&self) -> Vec<ResourceKind> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut kinds: Vec<ResourceKind> = state.informers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Return the shared informer for `kind`, registering it on first use.
    fn informer_for<K>(
        &self,
        kind: ResourceKind,
        make_api: fn(Client, Option<&str>) -> Api<K>,
    ) -> Informer<K>
    where
        K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug + Send + Sync + 'static,
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = state
            .informers
            .get(&kind)
            .and_then(|entry| entry.downcast_ref::<Informer<K>>())
        {
            return existing.clone();
        }

        let (reader, writer) = reflector::store();
        let informer = Informer {
            store: reader,
            synced: Arc::new(AtomicBool::new(false)),
        };

        let synced = informer.synced.clone();
        let starter: Starter = Box::new(move |client: Client, namespace: Option<String>| {
            let api = make_api(client, namespace.as_deref());
            async move {
                reflector(writer, watcher(api, default_watcher_config()))
                    .default_backoff()
                    .for_each(|event| {
                        match event {
                            Ok(watcher::Event::InitDone) => {
                                if !synced.swap(true, Ordering::AcqRel) {
                                    info!(kind = %kind, "Informer cache synced");
                                }
                            }
                            Ok(_) => {}
                            Err(e) => warn!(kind = %kind, error = %e, "Informer watch error"),
                        }
                        futures::future::ready(())
                    })
                    .await;
                warn!(kind = %kind, "Informer stream ended");
            }
            .boxed()
        });

        debug!(kind = %kind, "Registered informer");
        state.informers.insert(kind, Box::new(informer.clone()));
        state.pending.push((kind, starter));
        informer
    }

    /// Start every registered informer that is not running yet.
    pub fn start(&self, client: Client) -> Vec<JoinHandle<()>> {
        let pending = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            let pending = std::mem::take(&mut state.pending);
            for (kind, _) in &pending {
                state.started.insert(*kind);
            }
            pending
        };

        pending
            .into_iter()
            .map(|(kind, starter)| {
                info!(kind = %kind, namespace = ?self.namespace, "Starting informer");
                tokio::spawn(starter(client.clone(), self.namespace.clone()))
            })
            .collect()
    }

    /// Whether `start` has launched the informer for `kind`.
    pub fn is_started(&self, kind: ResourceKind) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.started.contains(&kind)
    }
}
