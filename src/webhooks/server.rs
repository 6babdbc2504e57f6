//! Admission webhook server.
//!
//! Provides HTTP endpoints for Kubernetes admission webhooks:
//! - `/validate-clusterserviceplan`
//! - `/validate-serviceplan`
//!
//! To enable webhooks:
//! 1. Deploy cert-manager for TLS certificates
//! 2. Create a ValidatingWebhookConfiguration for both paths
//! 3. Mount the TLS certificate secret to the pod at /etc/webhook/certs/
//!
//! The webhook server starts automatically when certificates are present.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use kube::core::DynamicObject;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::crd::{ClusterServicePlan, ServicePlan};
use crate::health::HealthState;
use crate::validation::{FieldError, PlanValidation, ValidationLimits};
use crate::webhooks::policies::{CatalogCache, ValidationContext, validate_all};

/// Default path to webhook TLS certificate
pub const WEBHOOK_CERT_PATH: &str = "/etc/webhook/certs/tls.crt";
/// Default path to webhook TLS private key
pub const WEBHOOK_KEY_PATH: &str = "/etc/webhook/certs/tls.key";
/// Default webhook server port
pub const WEBHOOK_PORT: u16 = 9443;

/// Denial reason for malformed requests
pub const REASON_INVALID_REQUEST: &str = "InvalidRequest";

/// Shared state for webhook handlers
pub struct WebhookState {
    pub limits: ValidationLimits,
    pub health: Option<Arc<HealthState>>,
    pub catalog: Option<CatalogCache>,
}

impl WebhookState {
    pub fn new(limits: ValidationLimits) -> Self {
        Self {
            limits,
            health: None,
            catalog: None,
        }
    }

    /// Record admission metrics into `health`.
    pub fn with_health(mut self, health: Arc<HealthState>) -> Self {
        self.health = Some(health);
        self
    }

    /// Warn about references missing from `catalog`.
    pub fn with_catalog(mut self, catalog: CatalogCache) -> Self {
        self.catalog = Some(catalog);
        self
    }

    fn record(
        &self,
        resource: &str,
        operation: &str,
        allowed: bool,
        started: Instant,
        violations: &[FieldError],
    ) {
        if let Some(health) = &self.health {
            health.metrics.record_admission(
                resource,
                operation,
                allowed,
                started.elapsed().as_secs_f64(),
                violations,
            );
            let now = jiff::Timestamp::now().as_second().max(0) as u64;
            health.last_admission.store(now, Ordering::Relaxed);
        }
    }
}

/// Create a denial response with reason embedded in message.
/// kube-rs deny() only sets status.message, so we format as "[reason] message"
fn deny_with_reason<T: kube::Resource<DynamicType = ()>>(
    request: &AdmissionRequest<T>,
    message: &str,
    reason: &str,
) -> AdmissionResponse {
    let full_message = format!("[{}] {}", reason, message);
    AdmissionResponse::from(request).deny(full_message)
}

fn operation_label(operation: &Operation) -> &'static str {
    match operation {
        Operation::Create => "CREATE",
        Operation::Update => "UPDATE",
        Operation::Delete => "DELETE",
        Operation::Connect => "CONNECT",
    }
}

/// Decide one admission request.
///
/// DELETE is always allowed. Every other operation validates the incoming
/// object, against the old object when the request is an UPDATE.
pub fn admit<K: PlanValidation>(state: &WebhookState, request: &AdmissionRequest<K>) -> AdmissionResponse {
    let started = Instant::now();
    let resource = K::plural(&()).to_string();
    let operation = operation_label(&request.operation);
    let uid = &request.uid;

    debug!(
        uid = %uid,
        resource = %resource,
        operation = operation,
        namespace = ?request.namespace,
        name = %request.name,
        "Processing admission request"
    );

    if request.operation == Operation::Delete {
        info!(uid = %uid, resource = %resource, "Admission request allowed (DELETE)");
        state.record(&resource, operation, true, started, &[]);
        return AdmissionResponse::from(request);
    }

    let Some(object) = request.object.as_ref() else {
        error!(uid = %uid, resource = %resource, "Missing object in request");
        state.record(&resource, operation, false, started, &[]);
        return deny_with_reason(request, "Missing object in request", REASON_INVALID_REQUEST);
    };

    let old_object = match request.operation {
        Operation::Update => request.old_object.as_ref(),
        _ => None,
    };

    let ctx = ValidationContext {
        resource: object,
        old_resource: old_object,
        limits: &state.limits,
        catalog: state.catalog.as_ref(),
    };

    let result = validate_all(&ctx);
    state.record(&resource, operation, result.allowed, started, &result.violations);

    if !result.allowed {
        let reason = result
            .reason
            .unwrap_or_else(|| "ValidationFailed".to_string());
        let message = result
            .message
            .unwrap_or_else(|| "Validation failed".to_string());
        warn!(
            uid = %uid,
            resource = %resource,
            reason = %reason,
            violations = result.violations.len(),
            message = %message,
            "Admission request denied"
        );
        return deny_with_reason(request, &message, &reason);
    }

    let mut response = AdmissionResponse::from(request);
    if !result.warnings.is_empty() {
        for warning in &result.warnings {
            warn!(uid = %uid, resource = %resource, warning = %warning, "Admission warning");
        }
        response.warnings = Some(result.warnings);
    }

    info!(uid = %uid, resource = %resource, operation = operation, "Admission request allowed");
    response
}

/// Create the webhook router
pub fn create_webhook_router(state: Arc<WebhookState>) -> Router {
    Router::new()
        .route(
            "/validate-clusterserviceplan",
            post(validate_plan::<ClusterServicePlan>),
        )
        .route("/validate-serviceplan", post(validate_plan::<ServicePlan>))
        .with_state(state)
}

/// Admission handler shared by both plan kinds
async fn validate_plan<K>(
    State(state): State<Arc<WebhookState>>,
    Json(review): Json<AdmissionReview<K>>,
) -> (StatusCode, Json<AdmissionReview<DynamicObject>>)
where
    K: PlanValidation + Clone + DeserializeOwned + Send + Sync + 'static,
{
    let request: AdmissionRequest<K> = match review.try_into() {
        Ok(req) => req,
        Err(e) => {
            error!(error = %e, "Failed to extract admission request");
            return (
                StatusCode::BAD_REQUEST,
                Json(
                    AdmissionResponse::invalid(format!("Invalid AdmissionReview: {}", e))
                        .into_review(),
                ),
            );
        }
    };

    (StatusCode::OK, Json(admit(&state, &request).into_review()))
}

/// Errors that can occur when running the webhook server
#[derive(Error, Debug)]
pub enum WebhookError {
    /// TLS configuration error
    #[error("TLS configuration error: {0}")]
    TlsConfig(String),
    /// Server error
    #[error("Webhook server error: {0}")]
    Server(String),
}

/// Run the webhook server with TLS on 0.0.0.0:9443.
///
/// TLS certificates are loaded from the paths specified (PEM format).
pub async fn run_webhook_server(
    state: Arc<WebhookState>,
    cert_path: &str,
    key_path: &str,
) -> Result<(), WebhookError> {
    use axum_server::tls_rustls::RustlsConfig;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let app = create_webhook_router(state);

    let config = RustlsConfig::from_pem_file(PathBuf::from(cert_path), PathBuf::from(key_path))
        .await
        .map_err(|e| WebhookError::TlsConfig(e.to_string()))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], WEBHOOK_PORT));
    info!(port = WEBHOOK_PORT, "Webhook server listening with TLS");

    axum_server::bind_rustls(addr, config)
        .serve(app.into_make_service())
        .await
        .map_err(|e| WebhookError::Server(e.to_string()))?;

    Ok(())
}
