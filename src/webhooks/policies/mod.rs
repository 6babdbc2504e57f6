//! Admission policies for service plans.
//!
//! Policies run in order:
//! - `plan`: field validation (create) or field validation plus the
//!   immutability checks against the old object (update). Violations deny.
//! - `references`: catalog lookups for the referenced class and broker.
//!   Only ever adds warnings.

pub mod plan;
pub mod references;

pub use references::CatalogCache;

use crate::validation::{ErrorList, PlanValidation, ValidationLimits};

/// Result of running the admission policies
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Reason for denial (if not allowed)
    pub reason: Option<String>,
    /// Detailed message (if not allowed)
    pub message: Option<String>,
    /// Violations behind a denial, in report order
    pub violations: ErrorList,
    /// Non-blocking warnings returned to the client
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create an allowed result
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            ..Default::default()
        }
    }

    /// Create a denied result
    pub fn denied(reason: &str, message: &str) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.to_string()),
            message: Some(message.to_string()),
            ..Default::default()
        }
    }
}

/// Context for validation
pub struct ValidationContext<'a, K> {
    /// The resource being validated
    pub resource: &'a K,
    /// The old resource (for UPDATE operations)
    pub old_resource: Option<&'a K>,
    /// Length ceilings for names and identifiers
    pub limits: &'a ValidationLimits,
    /// Catalog caches used for reference warnings, when informers run
    pub catalog: Option<&'a CatalogCache>,
}

/// Run all admission policies
pub fn validate_all<K: PlanValidation>(ctx: &ValidationContext<'_, K>) -> ValidationResult {
    let result = plan::validate(ctx);
    if !result.allowed {
        return result;
    }

    ValidationResult {
        warnings: references::warnings(ctx),
        ..result
    }
}
