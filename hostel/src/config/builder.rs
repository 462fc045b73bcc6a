//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::database::resolve_data_dir;
use crate::error::Result;

/// Builds the effective configuration from all sources.
///
/// Sources, lowest to highest precedence: built-in defaults, the data
/// directory's `config.yaml`, `HOSTEL_*` environment variables, and
/// programmatic overrides added with [`with_config`](Self::with_config).
///
/// # Examples
///
/// ```
/// use hostel::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { busy_timeout_seconds: Some(2), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.busy_timeout_seconds, Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `dir` instead of the resolved data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `HOSTEL_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override layer. Later layers win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Merges all sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed, an
    /// environment variable is invalid, or the merged configuration fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::with_defaults();

        if !self.skip_files {
            let data_dir = resolve_data_dir(self.data_dir.as_deref())?;
            if let Some(source) = ConfigLoader::load_from_data_dir(&data_dir)? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::BUSY_TIMEOUT_ENV;
    use crate::config::loader::CONFIG_FILE_NAME;
    use crate::config::OutputFormat;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    #[serial]
    fn test_precedence_chain() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "busy_timeout_seconds: 7\noutput_format: csv\ndisable_autoinit: true\n",
        )
        .unwrap();

        std::env::set_var(BUSY_TIMEOUT_ENV, "9");
        let result = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .with_config(Config {
                output_format: Some(OutputFormat::Json),
                ..Default::default()
            })
            .build();
        std::env::remove_var(BUSY_TIMEOUT_ENV);

        let config = result.unwrap();
        assert_eq!(config.busy_timeout_seconds, Some(9));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.disable_autoinit, Some(true));
    }

    #[test]
    fn test_missing_data_dir_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigBuilder::new()
            .with_data_dir(dir.path().join("nope"))
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    fn test_invalid_file_fails_build() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "busy_timeout_seconds: 0\n").unwrap();

        let err = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }
}
