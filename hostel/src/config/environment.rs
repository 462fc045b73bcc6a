//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `HOSTEL_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides `busy_timeout_seconds`.
pub const BUSY_TIMEOUT_ENV: &str = "HOSTEL_BUSY_TIMEOUT";
/// Overrides `disable_autoinit`.
pub const DISABLE_AUTOINIT_ENV: &str = "HOSTEL_DISABLE_AUTOINIT";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_ENV: &str = "HOSTEL_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hostel::config::{Config, EnvironmentConfig};
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
    /// Returns `Error::Validation` if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(seconds) = env::var(BUSY_TIMEOUT_ENV) {
            config.busy_timeout_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: BUSY_TIMEOUT_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::parse(&val).ok_or_else(|| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message: format!("Invalid output format: '{val}' (expected table/json/csv/tsv)"),
                })?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
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
