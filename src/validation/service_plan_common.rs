//! Rules shared by ClusterServicePlan and ServicePlan validation.
//!
//! The scoped validators hand the embedded `CommonServicePlanSpec` to these
//! functions together with the path it lives at, so every message points at
//! the right field for either kind.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::ValidationLimits;
use super::field::{ErrorList, FieldError, FieldPath, max_len_error, regex_error};
use crate::crd::CommonServicePlanSpec;

/// Format plan names, external names and class references must match.
pub const COMMON_SERVICE_PLAN_NAME_FMT: &str = "[-.a-zA-Z0-9]+";

/// Default upper bound for plan names and class references.
pub const COMMON_SERVICE_PLAN_NAME_MAX_LENGTH: usize = 63;

/// Default upper bound for external IDs. This comes from the platform's
/// label-value limit, not from the broker API.
pub const EXTERNAL_ID_MAX_LENGTH: usize = 63;

fn matches_plan_name_fmt(value: &str) -> bool {
    static PLAN_NAME_RE: LazyLock<Option<Regex>> =
        LazyLock::new(|| Regex::new(&format!("^{}$", COMMON_SERVICE_PLAN_NAME_FMT)).ok());
    PLAN_NAME_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Name check for both plan kinds and for class references.
///
/// With `prefix` set the value is a `generateName` prefix and is checked as
/// if a generated suffix had been appended to it. Returns one message per
/// failed rule; an empty vector means the value is acceptable.
pub fn validate_common_service_plan_name(
    value: &str,
    prefix: bool,
    limits: &ValidationLimits,
) -> Vec<String> {
    let mut errs = Vec::new();

    if value.len() > limits.name_max_length {
        errs.push(max_len_error(limits.name_max_length));
    }

    let candidate: Cow<'_, str> = if prefix {
        Cow::Owned(format!("{}x", value))
    } else {
        Cow::Borrowed(value)
    };
    if !matches_plan_name_fmt(&candidate) {
        errs.push(regex_error(
            COMMON_SERVICE_PLAN_NAME_FMT,
            &["plan-name-40d-0983-1b89"],
        ));
    }

    errs
}

/// External IDs are opaque, only their length is bounded.
pub fn validate_external_id(value: &str, limits: &ValidationLimits) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > limits.external_id_max_length {
        errs.push(max_len_error(limits.external_id_max_length));
    }
    errs
}

/// Validate the fields every plan carries. All checks run.
pub fn validate_common_service_plan_spec(
    spec: &CommonServicePlanSpec,
    fld_path: &FieldPath,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = ErrorList::new();

    if spec.external_id.is_empty() {
        all_errs.push(FieldError::required(
            &fld_path.child("externalID"),
            "externalID is required",
        ));
    }

    if spec.description.is_empty() {
        all_errs.push(FieldError::required(
            &fld_path.child("description"),
            "description is required",
        ));
    }

    if spec.external_name.is_empty() {
        all_errs.push(FieldError::required(
            &fld_path.child("externalName"),
            "externalName is required",
        ));
    } else {
        for msg in validate_common_service_plan_name(&spec.external_name, false, limits) {
            all_errs.push(FieldError::invalid(
                &fld_path.child("externalName"),
                spec.external_name.as_str(),
                msg,
            ));
        }
    }

    for msg in validate_external_id(&spec.external_id, limits) {
        all_errs.push(FieldError::invalid(
            &fld_path.child("externalID"),
            spec.external_id.as_str(),
            msg,
        ));
    }

    all_errs
}

/// The external ID is the correlation key with the broker and may never be rebound.
pub fn validate_external_id_unchanged(
    new: &CommonServicePlanSpec,
    old: &CommonServicePlanSpec,
    kind: &str,
) -> Option<FieldError> {
    (new.external_id != old.external_id).then(|| {
        FieldError::invalid(
            &FieldPath::new("spec").child("externalID"),
            new.external_id.as_str(),
            format!("externalID cannot change when updating a {}", kind),
        )
    })
}
