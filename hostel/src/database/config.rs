//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "hostel.db";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "HOSTEL_DATA_DIR";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use hostel::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/hostel.db")
///     .with_busy_timeout(Duration::from_millis(10000));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
        }
    }

    /// Creates a configuration for the database inside `data_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostel::database::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::in_data_dir("/var/lib/hostel");
    /// assert!(config.path.ends_with("hostel.db"));
    /// ```
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Disables creation of a missing database file.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.hostel`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".hostel"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the data directory from an explicit override, the environment, or
/// the default.
///
/// # Errors
///
/// Returns an error if no override is given, `HOSTEL_DATA_DIR` is unset and
/// the home directory cannot be determined.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    default_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_new() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, Duration::from_millis(5000));
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_config_in_data_dir() {
        let config = DatabaseConfig::in_data_dir("/srv/hostel");
        assert_eq!(config.path, PathBuf::from("/srv/hostel/hostel.db"));
    }

    #[test]
    fn test_config_read_only() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    fn test_config_without_auto_create() {
        let config = DatabaseConfig::new("/tmp/test.db").without_auto_create();
        assert!(!config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_resolve_data_dir_explicit_wins() {
        let dir = resolve_data_dir(Some(Path::new("/explicit"))).unwrap();
        assert_eq!(dir, PathBuf::from("/explicit"));
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir_from_environment() {
        let saved = std::env::var(DATA_DIR_ENV).ok();

        std::env::set_var(DATA_DIR_ENV, "/custom/data");
        let dir = resolve_data_dir(None).unwrap();
        assert_eq!(dir, PathBuf::from("/custom/data"));
        assert_eq!(
            DatabaseConfig::in_data_dir(&dir).path,
            PathBuf::from("/custom/data/hostel.db")
        );

        std::env::remove_var(DATA_DIR_ENV);
        if home::home_dir().is_some() {
            let dir = resolve_data_dir(None).unwrap();
            assert!(dir.ends_with(".hostel"));
        }

        if let Some(val) = saved {
            std::env::set_var(DATA_DIR_ENV, val);
        }
    }
}
