//! Runtime configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `BAKERY_SUBMIT_DELAY_MS` - Simulated order processing time (default: 1500)
//! - `BAKERY_CONFIRMATION_DISPLAY_MS` - How long the order confirmation stays up
//!   before returning to the catalog (default: 5000)

use std::env;
use std::time::Duration;

use thiserror::Error;

const SUBMIT_DELAY_VAR: &str = "BAKERY_SUBMIT_DELAY_MS";
const CONFIRMATION_DISPLAY_VAR: &str = "BAKERY_CONFIRMATION_DISPLAY_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub submit_delay: Duration,
    pub confirmation_display: Duration,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(1500),
            confirmation_display: Duration::from_millis(5000),
        }
    }
}

impl ShopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source. Unset variables keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            submit_delay: millis(&lookup, SUBMIT_DELAY_VAR)?.unwrap_or(defaults.submit_delay),
            confirmation_display: millis(&lookup, CONFIRMATION_DISPLAY_VAR)?
                .unwrap_or(defaults.confirmation_display),
        })
    }
}

fn millis(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<Duration>, ConfigError> {
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn unset_vars_use_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.submit_delay, Duration::from_millis(1500));
        assert_eq!(config.confirmation_display, Duration::from_millis(5000));
    }

    #[test]
    fn vars_override_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[
            ("BAKERY_SUBMIT_DELAY_MS", "0"),
            ("BAKERY_CONFIRMATION_DISPLAY_MS", " 250 "),
        ]))
        .unwrap();
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.confirmation_display, Duration::from_millis(250));
    }

    #[test]
    fn invalid_value_is_an_error() {
        let result = ShopConfig::from_lookup(lookup(&[("BAKERY_SUBMIT_DELAY_MS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar(name, _)) if name == "BAKERY_SUBMIT_DELAY_MS"
        ));
    }
}
