// Test code is allowed to panic on failure
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

//! Unit tests for service-catalog.
//!
//! These tests run without a Kubernetes cluster and exercise the public API
//! the way the webhook and the CLI use it.

#[path = "../common/mod.rs"]
mod common;

mod plan_validation_tests {
    use super::common::fixtures::{PlanBuilder, valid_cluster_plan, valid_service_plan};
    use service_catalog::validation::{
        ErrorType, validate_cluster_service_plan, validate_cluster_service_plan_update,
        validate_service_plan, validate_service_plan_update,
    };

    #[test]
    fn test_valid_plan_has_no_violations() {
        assert!(validate_cluster_service_plan(&valid_cluster_plan()).is_empty());
        assert!(validate_service_plan(&valid_service_plan()).is_empty());
    }

    #[test]
    fn test_empty_external_id_is_required() {
        let plan = PlanBuilder::default().external_id("").build_cluster();
        let errs = validate_cluster_service_plan(&plan);

        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_type, ErrorType::Required);
        assert_eq!(errs[0].field, "spec.externalID");
        assert_eq!(errs[0].bad_value, "");
    }

    #[test]
    fn test_bad_external_name_is_invalid() {
        let plan = PlanBuilder::default().external_name("#").build_cluster();
        let errs = validate_cluster_service_plan(&plan);

        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_type, ErrorType::Invalid);
        assert_eq!(errs[0].field, "spec.externalName");
        assert_eq!(errs[0].bad_value, "#");
    }

    #[test]
    fn test_long_external_id_is_invalid() {
        let id = "a".repeat(66);
        let plan = PlanBuilder::default().external_id(&id).build_cluster();
        let errs = validate_cluster_service_plan(&plan);

        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_type, ErrorType::Invalid);
        assert_eq!(errs[0].field, "spec.externalID");
        assert_eq!(errs[0].detail, "must be no more than 63 characters");
    }

    #[test]
    fn test_long_class_reference_is_invalid() {
        let plan = PlanBuilder::default().class("c".repeat(64)).build_cluster();
        let errs = validate_cluster_service_plan(&plan);

        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_type, ErrorType::Invalid);
        assert_eq!(errs[0].field, "spec.clusterServiceClassRef.name");
        assert_eq!(errs[0].detail, "must be no more than 63 characters");
    }

    #[test]
    fn test_changed_external_id_on_update() {
        let old = valid_cluster_plan();
        let new = PlanBuilder::default()
            .external_id("something-else")
            .build_cluster();

        let errs = validate_cluster_service_plan_update(&new, &old);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].error_type, ErrorType::Invalid);
        assert_eq!(errs[0].field, "spec.externalID");
        assert_eq!(errs[0].bad_value, "something-else");
        assert!(errs[0].detail.contains("cannot change"));
    }

    #[test]
    fn test_description_change_on_update_is_allowed() {
        let old = valid_service_plan();
        let new = PlanBuilder::default()
            .description("a new description")
            .build_namespaced();
        assert!(validate_service_plan_update(&new, &old).is_empty());
    }

    #[test]
    fn test_namespace_rules_differ_by_scope() {
        let cluster = PlanBuilder::default().namespace("test").build_cluster();
        let errs = validate_cluster_service_plan(&cluster);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "metadata.namespace");
        assert_eq!(errs[0].error_type, ErrorType::Invalid);

        let namespaced = PlanBuilder::default().namespace("Not_A_Namespace").build_namespaced();
        let errs = validate_service_plan(&namespaced);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "metadata.namespace");
    }

    #[test]
    fn test_generate_name_prefix_may_end_in_separator() {
        let plan = PlanBuilder::default()
            .generate_name("gold-")
            .build_cluster();
        assert!(validate_cluster_service_plan(&plan).is_empty());

        let plan = PlanBuilder::default()
            .name(None)
            .generate_name("gold-")
            .build_cluster();
        let errs = validate_cluster_service_plan(&plan);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, "metadata.name");
        assert_eq!(errs[0].error_type, ErrorType::Required);
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let plan = PlanBuilder::default()
            .external_name("")
            .external_id("")
            .description("")
            .broker("")
            .class("")
            .build_namespaced();

        let fields: Vec<String> = validate_service_plan(&plan)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "spec.serviceBrokerName",
                "spec.serviceClassRef.name",
                "spec.externalID",
                "spec.description",
                "spec.externalName",
            ]
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let plan = PlanBuilder::default()
            .external_name("#")
            .description("")
            .build_cluster();
        assert_eq!(
            validate_cluster_service_plan(&plan),
            validate_cluster_service_plan(&plan)
        );
    }
}

mod limits_tests {
    use super::common::fixtures::PlanBuilder;
    use service_catalog::validation::{
        ValidationLimits, validate_cluster_service_plan, validate_cluster_service_plan_with_limits,
    };

    #[test]
    fn test_limits_are_configurable() {
        let plan = PlanBuilder::default()
            .external_id("a".repeat(80))
            .build_cluster();
        assert_eq!(validate_cluster_service_plan(&plan).len(), 1);

        let limits = ValidationLimits {
            name_max_length: 63,
            external_id_max_length: 128,
        };
        assert!(validate_cluster_service_plan_with_limits(&plan, &limits).is_empty());
    }

    #[test]
    fn test_name_limit_applies_to_all_name_fields() {
        let name = "n".repeat(20);
        let plan = PlanBuilder::new(name.as_str()).class(name.as_str()).build_cluster();
        let limits = ValidationLimits {
            name_max_length: 10,
            external_id_max_length: 63,
        };

        let fields: Vec<String> = validate_cluster_service_plan_with_limits(&plan, &limits)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "metadata.name",
                "spec.clusterServiceClassRef.name",
                "spec.externalName",
            ]
        );
    }
}

mod config_tests {
    use service_catalog::config::{ENV_EXTERNAL_ID_MAX_LENGTH, ENV_WATCH_NAMESPACE};
    use service_catalog::{Config, WEBHOOK_CERT_PATH};

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.webhook_cert_path, WEBHOOK_CERT_PATH);
        assert_eq!(config.limits.external_id_max_length, 63);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(|key: &str| match key {
            k if k == ENV_WATCH_NAMESPACE => Some("catalog".to_string()),
            k if k == ENV_EXTERNAL_ID_MAX_LENGTH => Some("100".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.watch_namespace.as_deref(), Some("catalog"));
        assert_eq!(config.limits.external_id_max_length, 100);
    }
}

mod rendering_tests {
    use super::common::fixtures::BrokerBuilder;
    use service_catalog::output::{OutputFormat, write_broker_list, write_parent_broker};

    fn render_list(format: OutputFormat, brokers: &[service_catalog::crd::ClusterServiceBroker]) -> String {
        let mut out = Vec::new();
        write_broker_list(&mut out, format, brokers).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_row_without_conditions_has_empty_status() {
        let brokers = vec![BrokerBuilder::new("ups-broker").build()];
        let out = render_list(OutputFormat::Table, &brokers);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[0].ends_with("STATUS"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["ups-broker", "http://ups-broker.example.com"]
        );
    }

    #[test]
    fn test_json_document_has_items() {
        let brokers = vec![BrokerBuilder::new("ups-broker").build()];
        let out = render_list(OutputFormat::Json, &brokers);

        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = doc["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["metadata"]["name"], "ups-broker");
        assert!(out.contains("\n   \"apiVersion\""));
    }

    #[test]
    fn test_status_uses_last_condition() {
        let brokers = vec![
            BrokerBuilder::new("ups-broker")
                .condition("Ready", "False", "ErrorFetchingCatalog", "timeout", "2018-01-01T00:00:00Z")
                .condition("Ready", "True", "FetchedCatalog", "ok", "2018-01-02T00:00:00Z")
                .build(),
        ];
        let out = render_list(OutputFormat::Table, &brokers);
        assert!(out.lines().nth(1).unwrap().ends_with("Ready - FetchedCatalog"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parent_broker_header() {
        let broker = BrokerBuilder::new("ups-broker").url("http://localhost").build();
        let mut out = Vec::new();
        write_parent_broker(&mut out, &broker).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("\nBroker:\n"));
        assert!(out.contains("Name:"));
    }
}

mod error_tests {
    use service_catalog::Error;

    #[test]
    fn test_error_display() {
        let err = Error::Config("SVCAT_NAME_MAX_LENGTH must be a non-negative integer".to_string());
        assert!(err.to_string().contains("Configuration error"));

        let err = Error::UnknownOutputFormat("xml".to_string());
        assert!(err.to_string().contains("table, json, yaml"));
        assert!(!err.is_not_found());
    }
}
