//! Field paths and field-scoped validation errors.
//!
//! Validators never fail; they return an `ErrorList` of every violation they
//! found, each pointing at the offending field.

use std::fmt;

use serde::Serialize;

/// Path to a field inside a resource, e.g. `spec.clusterServiceClassRef.name`.
///
/// Paths are values: `child` returns a new path and leaves `self` untouched,
/// so one parent path can be handed to several nested validators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Create a root path.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            segments: vec![root.into()],
        }
    }

    /// Return a path one level below this one.
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Segments from root to leaf.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Kind of violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorType {
    /// A mandatory field is empty.
    Required,
    /// A field is present but breaks a format, length or immutability rule.
    Invalid,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Required => write!(f, "Required value"),
            ErrorType::Invalid => write!(f, "Invalid value"),
        }
    }
}

/// A single violation: which field, what value, and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub error_type: ErrorType,
    /// Dotted field path.
    pub field: String,
    /// Offending value; empty for `Required`.
    pub bad_value: String,
    pub detail: String,
}

impl FieldError {
    /// A mandatory field is missing.
    pub fn required(path: &FieldPath, detail: impl Into<String>) -> Self {
        Self {
            error_type: ErrorType::Required,
            field: path.to_string(),
            bad_value: String::new(),
            detail: detail.into(),
        }
    }

    /// A field holds a value that fails a rule.
    pub fn invalid(path: &FieldPath, value: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error_type: ErrorType::Invalid,
            field: path.to_string(),
            bad_value: value.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_type {
            ErrorType::Required => write!(f, "{}: {}", self.field, self.error_type)?,
            ErrorType::Invalid => {
                write!(f, "{}: {}: {:?}", self.field, self.error_type, self.bad_value)?
            }
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered list of violations. Empty means the resource is accepted.
pub type ErrorList = Vec<FieldError>;

/// Render a list of violations as one message, e.g. for an admission denial.
pub fn aggregate_message(errors: &[FieldError]) -> String {
    match errors {
        [] => String::new(),
        [single] => single.to_string(),
        many => format!(
            "[{}]",
            many.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Message for a value longer than `max` characters.
pub fn max_len_error(max: usize) -> String {
    format!("must be no more than {} characters", max)
}

/// Message for a value that does not match `pattern`.
pub fn regex_error(pattern: &str, examples: &[&str]) -> String {
    let mut msg = format!("must match the regex {}", pattern);
    if !examples.is_empty() {
        let quoted: Vec<String> = examples.iter().map(|e| format!("'{}'", e)).collect();
        msg.push_str(&format!(" (e.g. {})", quoted.join(" or ")));
    }
    msg
}
