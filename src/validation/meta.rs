//! Generic object metadata validation.
//!
//! Covers name, generateName and namespace. Label and annotation syntax are
//! left to the API server.

use std::sync::LazyLock;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use regex::Regex;

use super::ValidationLimits;
use super::field::{ErrorList, FieldError, FieldPath, max_len_error, regex_error};

/// Kind-specific name check: `(value, prefix, limits) -> messages`.
pub type ValidateNameFn = fn(&str, bool, &ValidationLimits) -> Vec<String>;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const DNS1123_LABEL_MAX_LENGTH: usize = 63;

/// Namespaces must be RFC 1123 labels.
pub fn validate_namespace_name(value: &str) -> Vec<String> {
    static LABEL_RE: LazyLock<Option<Regex>> =
        LazyLock::new(|| Regex::new(&format!("^{}$", DNS1123_LABEL_FMT)).ok());

    let mut errs = Vec::new();
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        errs.push(max_len_error(DNS1123_LABEL_MAX_LENGTH));
    }
    if !LABEL_RE.as_ref().is_some_and(|re| re.is_match(value)) {
        errs.push(format!(
            "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', \
             and must start and end with an alphanumeric character; {}",
            regex_error(DNS1123_LABEL_FMT, &["my-name", "123-abc"])
        ));
    }
    errs
}

/// Validate object metadata.
///
/// `requires_namespace` selects between namespaced kinds (namespace
/// mandatory) and cluster-scoped kinds (namespace forbidden).
pub fn validate_object_meta(
    meta: &ObjectMeta,
    requires_namespace: bool,
    name_fn: ValidateNameFn,
    fld_path: &FieldPath,
    limits: &ValidationLimits,
) -> ErrorList {
    let mut all_errs = ErrorList::new();

    let generate_name = meta.generate_name.as_deref().unwrap_or_default();
    if !generate_name.is_empty() {
        for msg in name_fn(generate_name, true, limits) {
            all_errs.push(FieldError::invalid(
                &fld_path.child("generateName"),
                generate_name,
                msg,
            ));
        }
    }

    // generateName is expanded into name before validation runs, so an
    // empty name is always an error here.
    let name = meta.name.as_deref().unwrap_or_default();
    if name.is_empty() {
        all_errs.push(FieldError::required(
            &fld_path.child("name"),
            "name or generateName is required",
        ));
    } else {
        for msg in name_fn(name, false, limits) {
            all_errs.push(FieldError::invalid(&fld_path.child("name"), name, msg));
        }
    }

    let namespace = meta.namespace.as_deref().unwrap_or_default();
    if requires_namespace {
        if namespace.is_empty() {
            all_errs.push(FieldError::required(&fld_path.child("namespace"), ""));
        } else {
            for msg in validate_namespace_name(namespace) {
                all_errs.push(FieldError::invalid(
                    &fld_path.child("namespace"),
                    namespace,
                    msg,
                ));
            }
        }
    } else if !namespace.is_empty() {
        all_errs.push(FieldError::invalid(
            &fld_path.child("namespace"),
            namespace,
            "not allowed on this type",
        ));
    }

    all_errs
}
