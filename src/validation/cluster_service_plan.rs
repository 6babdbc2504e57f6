//! Validation for the cluster-scoped ClusterServicePlan.

use super::field::{ErrorList, FieldError, FieldPath};
use super::meta::validate_object_meta;
use super::service_plan_common::{
    validate_common_service_plan_name, validate_common_service_plan_spec,
    validate_external_id_unchanged,
};
use super::{PlanValidation, ValidationLimits};
use crate::crd::{ClusterServicePlan, ClusterServicePlanSpec};

/// Validate a ClusterServicePlan with the default limits.
pub fn validate_cluster_service_plan(plan: &ClusterServicePlan) -> ErrorList {
    validate_cluster_service_plan_with_limits(plan, &ValidationLimits::default())
}

/// Validate a ClusterServicePlan and return every violation found.
pub fn validate_cluster_service_plan_with_limits(
    plan: &ClusterServicePlan,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = validate_object_meta(
        &plan.metadata,
        false,
        validate_common_service_plan_name,
        &FieldPath::new("metadata"),
        limits,
    );
    all_errs.extend(validate_cluster_service_plan_spec(
        &plan.spec,
        &FieldPath::new("spec"),
        limits,
    ));
    all_errs
}

fn validate_cluster_service_plan_spec(
    spec: &ClusterServicePlanSpec,
    fld_path: &FieldPath,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = ErrorList::new();
    let class_ref_path = fld_path.child("clusterServiceClassRef").child("name");
    let class_name = &spec.cluster_service_class_ref.name;

    if !class_name.is_empty() {
        for msg in validate_common_service_plan_name(class_name, false, limits) {
            all_errs.push(FieldError::invalid(&class_ref_path, class_name.as_str(), msg));
        }
    }

    if spec.cluster_service_broker_name.is_empty() {
        all_errs.push(FieldError::required(
            &fld_path.child("clusterServiceBrokerName"),
            "clusterServiceBrokerName is required",
        ));
    }

    if class_name.is_empty() {
        all_errs.push(FieldError::required(
            &class_ref_path,
            "an owning ClusterServiceClass is required",
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
pub fn validate_cluster_service_plan_update(
    new: &ClusterServicePlan,
    old: &ClusterServicePlan,
) -> ErrorList {
    validate_cluster_service_plan_update_with_limits(new, old, &ValidationLimits::default())
}

/// Validate `new` from scratch, then reject a changed external ID.
pub fn validate_cluster_service_plan_update_with_limits(
    new: &ClusterServicePlan,
    old: &ClusterServicePlan,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = validate_cluster_service_plan_with_limits(new, limits);
    all_errs.extend(validate_external_id_unchanged(
        &new.spec.common,
        &old.spec.common,
        "ClusterServicePlan",
    ));
    all_errs
}

impl PlanValidation for ClusterServicePlan {
    const CLUSTER_SCOPED: bool = true;

    fn validate(&self, limits: &ValidationLimits) -> ErrorList {
        validate_cluster_service_plan_with_limits(self, limits)
    }

    fn validate_update(&self, old: &Self, limits: &ValidationLimits) -> ErrorList {
        validate_cluster_service_plan_update_with_limits(self, old, limits)
    }

    fn class_name(&self) -> &str {
        &self.spec.cluster_service_class_ref.name
    }

    fn broker_name(&self) -> &str {
        &self.spec.cluster_service_broker_name
    }
}
