//! svcat-webhook - admission webhook for service-catalog plans.
//!
//! This is the main entry point that:
//! - Initializes structured logging
//! - Reads configuration from the environment
//! - Creates the Kubernetes client and starts the shared informers
//! - Starts the health server, and the webhook server when certificates exist

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use kube::Client;
use tokio::signal;
use tracing::{error, info};

use service_catalog::health::{HealthState, run_health_server};
use service_catalog::webhooks::{CatalogCache, WebhookState};
use service_catalog::{Config, SharedInformerFactory, run_webhook_server};

/// Grace period for in-flight admission requests during shutdown
const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("service_catalog=info".parse()?)
                .add_directive("svcat_webhook=info".parse()?)
                .add_directive("kube=info".parse()?),
        )
        .json()
        .init();

    info!("Starting svcat-webhook");

    let config = Config::from_env()?;
    info!(
        watch_namespace = ?config.watch_namespace,
        name_max_length = config.limits.name_max_length,
        external_id_max_length = config.limits.external_id_max_length,
        "Loaded configuration"
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let health_state = Arc::new(HealthState::new());

    // Probes should answer before informers sync
    let health_handle = {
        let health_state = health_state.clone();
        tokio::spawn(async move {
            if let Err(e) = run_health_server(health_state).await {
                error!("Health server error: {}", e);
            }
        })
    };

    // Register everything the webhook reads before starting
    let factory = SharedInformerFactory::new(config.watch_namespace.clone());
    let catalog = CatalogCache::from_factory(&factory);
    let informer_handles = factory.start(client);
    info!(informers = informer_handles.len(), "Started shared informers");

    let webhook_handle = if Path::new(&config.webhook_cert_path).exists()
        && Path::new(&config.webhook_key_path).exists()
    {
        info!("TLS certificates found, starting webhook server");
        let state = Arc::new(
            WebhookState::new(config.limits)
                .with_health(health_state.clone())
                .with_catalog(catalog),
        );
        let cert_path = config.webhook_cert_path.clone();
        let key_path = config.webhook_key_path.clone();
        Some(tokio::spawn(async move {
            if let Err(e) = run_webhook_server(state, &cert_path, &key_path).await {
                error!("Webhook server error: {}", e);
            }
        }))
    } else {
        info!("Webhook certificates not found, webhook server disabled");
        None
    };

    health_state.set_ready(true).await;

    tokio::select! {
        result = health_handle => {
            if let Err(e) = result {
                error!("Health server task panicked: {}", e);
            }
        }
        result = async {
            match webhook_handle {
                Some(handle) => handle.await,
                None => std::future::pending().await,
            }
        } => {
            if let Err(e) = result {
                error!("Webhook server task panicked: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Received shutdown signal, initiating graceful shutdown...");

            health_state.set_ready(false).await;
            info!("Marked webhook as not ready");

            info!(
                "Waiting {}s for in-flight admission requests to complete...",
                SHUTDOWN_GRACE_PERIOD_SECS
            );
            tokio::time::sleep(Duration::from_secs(SHUTDOWN_GRACE_PERIOD_SECS)).await;

            info!("Grace period complete, shutting down");
        }
    }

    for handle in informer_handles {
        handle.abort();
    }

    info!("svcat-webhook stopped");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
///
/// Signal handler setup failures are fatal; there is no graceful path
/// without them.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
