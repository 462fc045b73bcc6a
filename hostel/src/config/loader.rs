//! Configuration file discovery and loading.
//!
//! The only configuration file is `config.yaml` inside the data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A configuration file together with its parsed contents.
///
/// # Examples
///
/// ```
/// use hostel::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let source = ConfigSource {
///     path: PathBuf::from("/home/me/.hostel/config.yaml"),
///     config: Default::default(),
/// };
/// assert!(source.config.rooms.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `<data_dir>/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_data_dir(data_dir: &Path) -> Result<Option<ConfigSource>> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and
    /// `Error::Configuration` if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        let has_content = contents.lines().any(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        });
        if !has_content {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "\n").unwrap();

        assert_eq!(ConfigLoader::load_file(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_data_dir_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ConfigLoader::load_from_data_dir(temp_dir.path())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_load_from_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "busy_timeout_seconds: 9\n",
        )
        .unwrap();

        let source = ConfigLoader::load_from_data_dir(temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(source.config.busy_timeout_seconds, Some(9));
        assert_eq!(source.path, temp_dir.path().join(CONFIG_FILE_NAME));
    }
}
