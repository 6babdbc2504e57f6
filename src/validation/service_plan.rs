//! Validation for the namespaced ServicePlan.

use super::field::{ErrorList, FieldError, FieldPath};
use super::meta::validate_object_meta;
use super::service_plan_common::{
    validate_common_service_plan_name, validate_common_service_plan_spec,
    validate_external_id_unchanged,
};
use super::{PlanValidation, ValidationLimits};
use crate::crd::{ServicePlan, ServicePlanSpec};

/// Validate a ServicePlan with the default limits.
pub fn validate_service_plan(plan: &ServicePlan) -> ErrorList {
    validate_service_plan_with_limits(plan, &ValidationLimits::default())
}

/// Validate a ServicePlan and return every violation found.
pub fn validate_service_plan_with_limits(
    plan: &ServicePlan,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = validate_object_meta(
        &plan.metadata,
        true,
        validate_common_service_plan_name,
        &FieldPath::new("metadata"),
        limits,
    );
    all_errs.extend(validate_service_plan_spec(
        &plan.spec,
        &FieldPath::new("spec"),
        limits,
    ));
    all_errs
}

fn validate_service_plan_spec(
    spec: &ServicePlanSpec,
    fld_path: &FieldPath,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = ErrorList::new();
    let class_ref_path = fld_path.child("serviceClassRef").child("name");
    let class_name = &spec.service_class_ref.name;

    if !class_name.is_empty() {
        for msg in validate_common_service_plan_name(class_name, false, limits) {
            all_errs.push(FieldError::invalid(&class_ref_path, class_name.as_str(), msg));
        }
    }

    if spec.service_broker_name.is_empty() {
        all_errs.push(FieldError::required(
            &fld_path.child("serviceBrokerName"),
            "serviceBrokerName is required",
        ));
    }

    if class_name.is_empty() {
        all_errs.push(FieldError::required(
            &class_ref_path,
            "an owning ServiceClass is required",
        ));
    }

    all_errs.extend(validate_common_service_plan_spec(
        &spec.common,
        fld_path,
        limits,
    ));
    all_errs
}

/// Validate an update with the default limits.
pub fn validate_service_plan_update(new: &ServicePlan, old: &ServicePlan) -> ErrorList {
    validate_service_plan_update_with_limits(new, old, &ValidationLimits::default())
}

/// Validate `new` from scratch, then reject a changed external ID.
pub fn validate_service_plan_update_with_limits(
    new: &ServicePlan,
    old: &ServicePlan,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = validate_service_plan_with_limits(new, limits);
    all_errs.extend(validate_external_id_unchanged(
        &new.spec.common,
        &old.spec.common,
        "ServicePlan",
    ));
    all_errs
}

impl PlanValidation for ServicePlan {
    const CLUSTER_SCOPED: bool = false;

    fn validate(&self, limits: &ValidationLimits) -> ErrorList {
        validate_service_plan_with_limits(self, limits)
    }

    fn validate_update(&self, old: &Self, limits: &ValidationLimits) -> ErrorList {
        validate_service_plan_update_with_limits(self, old, limits)
    }

    fn class_name(&self) -> &str {
        &self.spec.service_class_ref.name
    }

    fn broker_name(&self) -> &str {
        &self.spec.service_broker_name
    }
}
