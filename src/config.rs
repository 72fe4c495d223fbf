//! # Configuration Module
//!
//! This module defines configuration structures for the cocktail shopping-list
//! application: catalog endpoint, request recovery settings and the display
//! measurement system. Values come from the environment (after `.env` is loaded
//! by the binary) and fall back to the defaults below.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;

use crate::measurement_types::{ConversionConfig, MeasurementSystem};

// Constants for catalog configuration
pub const DEFAULT_API_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Error raised when an environment variable holds an unusable value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Configuration error: invalid value '{value}' for {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Recovery configuration for catalog requests
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base delay between retries in milliseconds
    pub base_retry_delay_ms: u64,
    /// Maximum delay between retries in milliseconds
    pub max_retry_delay_ms: u64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_retry_delay_ms: 500,  // 0.5 seconds
            max_retry_delay_ms: 5000,  // 5 seconds
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the recipe catalog API (no trailing slash)
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Measurement system used when the session starts
    pub measurement_system: MeasurementSystem,
    /// Converter settings
    pub conversion: ConversionConfig,
    /// Retry settings for catalog requests
    pub recovery: RecoveryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            measurement_system: MeasurementSystem::default(),
            conversion: ConversionConfig::default(),
            recovery: RecoveryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = vars
            .get("COCKTAIL_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        Ok(Self {
            api_base_url,
            request_timeout_secs: parse_var(vars, "REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            measurement_system: parse_var(vars, "MEASUREMENT_SYSTEM")?
                .unwrap_or(defaults.measurement_system),
            conversion: ConversionConfig {
                use_centilitres: parse_var(vars, "USE_CENTILITRES")?
                    .unwrap_or(defaults.conversion.use_centilitres),
                ..defaults.conversion
            },
            recovery: RecoveryConfig {
                max_retries: parse_var(vars, "MAX_RETRIES")?
                    .unwrap_or(defaults.recovery.max_retries),
                base_retry_delay_ms: parse_var(vars, "BASE_RETRY_DELAY_MS")?
                    .unwrap_or(defaults.recovery.base_retry_delay_ms),
                max_retry_delay_ms: parse_var(vars, "MAX_RETRY_DELAY_MS")?
                    .unwrap_or(defaults.recovery.max_retry_delay_ms),
            },
        })
    }
}

fn parse_var<T: FromStr>(vars: &HashMap<String, String>, key: &str) -> Result<Option<T>, ConfigError> {
    match vars.get(key).map(|value| value.trim()) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.measurement_system, MeasurementSystem::Imperial);
        assert!(!config.conversion.use_centilitres);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_vars(&vars(&[
            ("COCKTAIL_API_URL", "http://localhost:8080/api/"),
            ("MEASUREMENT_SYSTEM", "Metric"),
            ("USE_CENTILITRES", "true"),
            ("MAX_RETRIES", "0"),
            ("REQUEST_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.measurement_system, MeasurementSystem::Metric);
        assert!(config.conversion.use_centilitres);
        assert_eq!(config.recovery.max_retries, 0);
        assert_eq!(config.request_timeout_secs, 2);
        assert_eq!(config.recovery.base_retry_delay_ms, 500);
    }

    #[test]
    fn test_invalid_value_names_the_variable() {
        let err = AppConfig::from_vars(&vars(&[("MAX_RETRIES", "many")])).unwrap_err();
        assert!(err.to_string().contains("MAX_RETRIES"));

        let err = AppConfig::from_vars(&vars(&[("MEASUREMENT_SYSTEM", "kelvin")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "MEASUREMENT_SYSTEM".to_string(),
                value: "kelvin".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid value 'kelvin' for MEASUREMENT_SYSTEM"
        );
    }

    #[test]
    fn test_recovery_defaults_are_reasonable() {
        let recovery = RecoveryConfig::default();
        assert!(recovery.max_retries <= 10);
        assert!(recovery.base_retry_delay_ms >= 100);
        assert!(recovery.base_retry_delay_ms <= recovery.max_retry_delay_ms);
    }
}
