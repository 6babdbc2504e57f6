//! Process configuration read from the environment.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::validation::ValidationLimits;
use crate::webhooks::{WEBHOOK_CERT_PATH, WEBHOOK_KEY_PATH};

/// Namespace the namespaced informers are restricted to (unset = all namespaces)
pub const ENV_WATCH_NAMESPACE: &str = "WATCH_NAMESPACE";
/// Override for the webhook TLS certificate path
pub const ENV_WEBHOOK_CERT_PATH: &str = "WEBHOOK_CERT_PATH";
/// Override for the webhook TLS key path
pub const ENV_WEBHOOK_KEY_PATH: &str = "WEBHOOK_KEY_PATH";
/// Override for the plan name length ceiling
pub const ENV_NAME_MAX_LENGTH: &str = "SVCAT_NAME_MAX_LENGTH";
/// Override for the external ID length ceiling
pub const ENV_EXTERNAL_ID_MAX_LENGTH: &str = "SVCAT_EXTERNAL_ID_MAX_LENGTH";

/// Runtime configuration for the webhook process.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub watch_namespace: Option<String>,
    pub webhook_cert_path: String,
    pub webhook_key_path: String,
    pub limits: ValidationLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            watch_namespace: None,
            webhook_cert_path: WEBHOOK_CERT_PATH.to_string(),
            webhook_key_path: WEBHOOK_KEY_PATH.to_string(),
            limits: ValidationLimits::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Ok(Self {
            watch_namespace: get(ENV_WATCH_NAMESPACE),
            webhook_cert_path: get(ENV_WEBHOOK_CERT_PATH).unwrap_or(defaults.webhook_cert_path),
            webhook_key_path: get(ENV_WEBHOOK_KEY_PATH).unwrap_or(defaults.webhook_key_path),
            limits: ValidationLimits {
                name_max_length: parse_or(
                    ENV_NAME_MAX_LENGTH,
                    get(ENV_NAME_MAX_LENGTH),
                    defaults.limits.name_max_length,
                )?,
                external_id_max_length: parse_or(
                    ENV_EXTERNAL_ID_MAX_LENGTH,
                    get(ENV_EXTERNAL_ID_MAX_LENGTH),
                    defaults.limits.external_id_max_length,
                )?,
            },
        })
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{} must be a non-negative integer, got '{}'", key, raw))),
        None => Ok(default),
    }
}
