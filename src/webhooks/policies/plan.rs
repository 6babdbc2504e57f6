//! Field validation policy.
//!
//! CREATE runs the full validator; UPDATE additionally compares against the
//! stored object. Any violation denies the request.

use super::{ValidationContext, ValidationResult};
use crate::validation::{PlanValidation, aggregate_message};

/// Denial reason for plans with field violations
pub const REASON_PLAN_VALIDATION_FAILED: &str = "PlanValidationFailed";

/// Validate the plan carried by the request
pub fn validate<K: PlanValidation>(ctx: &ValidationContext<'_, K>) -> ValidationResult {
    let violations = match ctx.old_resource {
        Some(old) => ctx.resource.validate_update(old, ctx.limits),
        None => ctx.resource.validate(ctx.limits),
    };

    if violations.is_empty() {
        return ValidationResult::allowed();
    }

    let message = aggregate_message(&violations);
    ValidationResult {
        violations,
        ..ValidationResult::denied(REASON_PLAN_VALIDATION_FAILED, &message)
    }
}
