//! Webhook module for validating admission requests.
//!
//! This module provides ValidatingAdmissionWebhooks for both plan kinds:
//! - Field validation (always enforced, denies on any violation)
//! - Reference lookups against the catalog caches (warnings only)

pub mod policies;
mod server;

pub use policies::{CatalogCache, ValidationContext, ValidationResult};
pub use server::{
    REASON_INVALID_REQUEST, WEBHOOK_CERT_PATH, WEBHOOK_KEY_PATH, WEBHOOK_PORT, WebhookError,
    WebhookState, admit, create_webhook_router, run_webhook_server,
};

// Re-export kube-rs admission types for contract testing
pub use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview, Operation};
