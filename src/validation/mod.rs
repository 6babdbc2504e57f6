//! Admission validation for service plans.
//!
//! Validation is a pure function from a resource (and, on update, its
//! previous version) to an ordered list of violations:
//! - `field`: field paths, violation types and message helpers
//! - `meta`: generic object metadata checks
//! - `service_plan_common`: rules shared by both plan kinds
//! - `cluster_service_plan` / `service_plan`: the two scoped validators

pub mod cluster_service_plan;
pub mod field;
pub mod meta;
pub mod service_plan;
pub mod service_plan_common;

pub use cluster_service_plan::{
    validate_cluster_service_plan, validate_cluster_service_plan_update,
    validate_cluster_service_plan_update_with_limits, validate_cluster_service_plan_with_limits,
};
pub use field::{ErrorList, ErrorType, FieldError, FieldPath, aggregate_message};
pub use service_plan::{
    validate_service_plan, validate_service_plan_update, validate_service_plan_update_with_limits,
    validate_service_plan_with_limits,
};
pub use service_plan_common::{
    COMMON_SERVICE_PLAN_NAME_MAX_LENGTH, EXTERNAL_ID_MAX_LENGTH, validate_common_service_plan_name,
    validate_common_service_plan_spec, validate_external_id,
};

use kube::Resource;

/// Length ceilings applied by the shared rules.
///
/// The defaults follow the platform's object naming limits; clusters with
/// different limits override them through `Config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum length of plan names, external names and class references.
    pub name_max_length: usize,
    /// Maximum length of external IDs.
    pub external_id_max_length: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            name_max_length: COMMON_SERVICE_PLAN_NAME_MAX_LENGTH,
            external_id_max_length: EXTERNAL_ID_MAX_LENGTH,
        }
    }
}

/// A plan kind that can be validated on create and update.
pub trait PlanValidation: Resource<DynamicType = ()> {
    /// Cluster-scoped plans reference cluster-scoped classes and brokers.
    const CLUSTER_SCOPED: bool;

    /// Full validation of this object.
    fn validate(&self, limits: &ValidationLimits) -> ErrorList;

    /// Full validation of this object plus the checks against `old`.
    fn validate_update(&self, old: &Self, limits: &ValidationLimits) -> ErrorList;

    /// Name of the class this plan belongs to.
    fn class_name(&self) -> &str;

    /// Name of the broker offering this plan.
    fn broker_name(&self) -> &str;
}
