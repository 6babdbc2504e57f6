//! Error types for the service catalog crate.
//!
//! Validation never produces these: violations are data (see
//! `validation::ErrorList`). These cover the I/O around it.

use thiserror::Error;

/// Error type for operations outside the validation core
#[derive(Error, Debug)]
pub enum Error {
    /// Kubernetes API error
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing rendered output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// A named object does not exist
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: String, name: String },

    /// Unknown output format
    #[error("Unknown output format '{0}', expected one of: table, json, yaml")]
    UnknownOutputFormat(String),
}

impl Error {
    /// Check if this error indicates a not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
            || matches!(self, Error::Kube(kube::Error::Api(e)) if e.code == 404)
    }

    /// Name the missing object when the API server answered 404.
    pub fn or_not_found(self, kind: &str, name: &str) -> Self {
        if self.is_not_found() {
            Error::NotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            }
        } else {
            self
        }
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
