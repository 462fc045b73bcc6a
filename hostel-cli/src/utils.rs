//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading and opening
//! the store.

use std::path::PathBuf;

use hostel::{AllocationService, Config, ConfigBuilder, Database, DatabaseConfig};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir`, then `HOSTEL_DATA_DIR`, then
/// `~/.hostel`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    hostel::database::resolve_data_dir(global.data_dir.as_deref()).map_err(|e| {
        CliError::Config(format!("Could not determine data directory: {e}"))
    })
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `<data_dir>/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    let overrides = Config {
        busy_timeout_seconds: global.busy_timeout,
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| match e {
            hostel::Error::Configuration(yaml) => CliError::Config(yaml.to_string()),
            other => CliError::Config(other.to_string()),
        })
}

/// Build the store configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled.
pub fn database_config(global: &GlobalOptions, config: &Config) -> Result<DatabaseConfig, CliError> {
    let db_config = DatabaseConfig::in_data_dir(resolve_data_dir(global)?);

    if !db_config.path.exists() && config.autoinit_disabled() {
        return Err(CliError::NoDataDirectory);
    }

    Ok(db_config.with_busy_timeout(config.busy_timeout()))
}

/// Open the allocation service over the resolved database.
pub fn open_service(
    global: &GlobalOptions,
    config: &Config,
) -> Result<AllocationService<Database>, CliError> {
    let db = Database::open(database_config(global, config)?)?;
    Ok(AllocationService::new(db))
}

/// Parse a busy timeout given on the command line.
pub fn parse_busy_timeout(s: &str) -> Result<u64, String> {
    let seconds: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout: {s}"))?;
    if seconds == 0 {
        return Err("timeout must be greater than 0".to_string());
    }
    Ok(seconds)
}
