// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::string_slice
)]

//! Property-based tests for service-catalog.
//!
//! Uses proptest to generate random plans and verify the validation
//! invariants for both plan kinds.

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use common::fixtures::PlanBuilder;
use service_catalog::validation::{
    ErrorType, validate_cluster_service_plan, validate_cluster_service_plan_update,
    validate_service_plan, validate_service_plan_update,
};

/// Strategy for names that satisfy the plan name pattern and length.
fn valid_name() -> impl Strategy<Value = String> {
    "[-.a-zA-Z0-9]{1,63}"
}

/// Strategy for names containing at least one character outside the pattern.
fn name_with_bad_char() -> impl Strategy<Value = String> {
    ("[a-z0-9]{0,20}", "[#%/_ !@:]", "[a-z0-9]{0,20}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

/// Strategy for pattern-valid names that are too long.
fn too_long_name() -> impl Strategy<Value = String> {
    "[a-z0-9]{64,100}"
}

/// Strategy for opaque external IDs within the length ceiling.
fn valid_external_id() -> impl Strategy<Value = String> {
    "[ -~]{1,63}"
}

/// Index of the required field to blank out.
fn required_field() -> impl Strategy<Value = usize> {
    0..5usize
}

fn blank_one(builder: PlanBuilder, field: usize) -> (PlanBuilder, &'static str, &'static str) {
    match field {
        0 => (builder.external_name(""), "spec.externalName", "spec.externalName"),
        1 => (builder.external_id(""), "spec.externalID", "spec.externalID"),
        2 => (builder.description(""), "spec.description", "spec.description"),
        3 => (
            builder.broker(""),
            "spec.clusterServiceBrokerName",
            "spec.serviceBrokerName",
        ),
        _ => (
            builder.class(""),
            "spec.clusterServiceClassRef.name",
            "spec.serviceClassRef.name",
        ),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Plans with every field present and well-formed are accepted.
    #[test]
    fn test_well_formed_plans_accepted(
        external_name in valid_name(),
        class in valid_name(),
        external_id in valid_external_id(),
        description in ".{1,40}",
        broker in "[a-z]{1,20}",
    ) {
        let builder = PlanBuilder::default()
            .external_name(external_name)
            .class(class)
            .external_id(external_id)
            .description(description)
            .broker(broker);

        prop_assert!(validate_cluster_service_plan(&builder.clone().build_cluster()).is_empty());
        prop_assert!(validate_service_plan(&builder.build_namespaced()).is_empty());
    }

    /// Blanking any one required field yields a Required violation at its path.
    #[test]
    fn test_missing_field_is_required(field in required_field()) {
        let (builder, cluster_path, namespaced_path) = blank_one(PlanBuilder::default(), field);

        let errs = validate_cluster_service_plan(&builder.clone().build_cluster());
        prop_assert!(errs
            .iter()
            .any(|e| e.field == cluster_path && e.error_type == ErrorType::Required));

        let errs = validate_service_plan(&builder.build_namespaced());
        prop_assert!(errs
            .iter()
            .any(|e| e.field == namespaced_path && e.error_type == ErrorType::Required));
    }

    /// A character outside the pattern makes externalName or the class reference Invalid.
    #[test]
    fn test_bad_characters_are_invalid(bad in name_with_bad_char(), in_class in any::<bool>()) {
        let (builder, path) = if in_class {
            (PlanBuilder::default().class(bad), "spec.clusterServiceClassRef.name")
        } else {
            (PlanBuilder::default().external_name(bad), "spec.externalName")
        };

        let errs = validate_cluster_service_plan(&builder.build_cluster());
        prop_assert!(!errs.is_empty());
        prop_assert!(errs
            .iter()
            .all(|e| e.field == path && e.error_type == ErrorType::Invalid));
    }

    /// Names over the ceiling are Invalid even when the pattern matches.
    #[test]
    fn test_long_names_are_invalid(long in too_long_name(), in_class in any::<bool>()) {
        let (builder, path) = if in_class {
            (PlanBuilder::default().class(long), "spec.serviceClassRef.name")
        } else {
            (PlanBuilder::default().external_name(long), "spec.externalName")
        };
        let errs = validate_service_plan(&builder.build_namespaced());

        prop_assert_eq!(errs.len(), 1);
        prop_assert_eq!(errs[0].field.as_str(), path);
        prop_assert_eq!(errs[0].error_type, ErrorType::Invalid);
    }

    /// Validating the same plan twice gives the same answer.
    #[test]
    fn test_validation_idempotent(
        external_name in "[-.a-zA-Z0-9#%]{0,70}",
        external_id in ".{0,70}",
        description in ".{0,5}",
    ) {
        let plan = PlanBuilder::default()
            .external_name(external_name)
            .external_id(external_id)
            .description(description)
            .build_cluster();

        prop_assert_eq!(
            validate_cluster_service_plan(&plan),
            validate_cluster_service_plan(&plan)
        );
    }

    /// Updates of valid plans are rejected exactly when the external ID changes.
    #[test]
    fn test_update_rejected_iff_external_id_changes(
        old_id in valid_external_id(),
        new_id in valid_external_id(),
        description in ".{1,40}",
    ) {
        let old = PlanBuilder::default().external_id(old_id.clone()).build_cluster();
        let new = PlanBuilder::default()
            .external_id(new_id.clone())
            .description(description.clone())
            .build_cluster();

        let errs = validate_cluster_service_plan_update(&new, &old);
        prop_assert_eq!(errs.is_empty(), old_id == new_id);

        let old = PlanBuilder::default().external_id(old_id.clone()).build_namespaced();
        let new = PlanBuilder::default()
            .external_id(new_id.clone())
            .description(description)
            .build_namespaced();

        let errs = validate_service_plan_update(&new, &old);
        prop_assert_eq!(errs.is_empty(), old_id == new_id);
    }
}
