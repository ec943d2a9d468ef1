//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `BOOKIT_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use bookit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric page size, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("BOOKIT_REJECT_PAST_DATES") {
            config.reject_past_dates = Some(Self::parse_bool("BOOKIT_REJECT_PAST_DATES", &val)?);
        }

        if let Ok(val) = env::var("BOOKIT_DEFAULT_PAGE_SIZE") {
            config.default_page_size = Some(val.trim().parse().map_err(|_| Error::Validation {
                field: "BOOKIT_DEFAULT_PAGE_SIZE".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(seconds) = env::var("BOOKIT_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "BOOKIT_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var("BOOKIT_OUTPUT_FORMAT") {
            config.output_format = Some(format.trim().parse()?);
        }

        if let Ok(val) = env::var("BOOKIT_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("BOOKIT_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean from an environment variable value.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
