//! Data directory initialization.
//!
//! Creates the data directory and database explicitly, optionally writing a
//! commented configuration template and seeding rooms.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::room::Room;
use crate::{Database, DatabaseConfig};

/// Options for data directory initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite an existing database.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
    /// Rooms to register in the new database.
    pub rooms: Vec<Room>,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            rooms: Vec::new(),
        }
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create the default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets the rooms to seed.
    #[must_use]
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Result of an initialization.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Number of rooms inserted.
    pub rooms_seeded: usize,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# Hostel configuration file

# Maximum time to wait for the database lock, in seconds (default: 5)
# busy_timeout_seconds: 5

# Refuse to create the database implicitly (default: false)
# disable_autoinit: false

# Output format for list commands: table, json, csv or tsv (default: table)
# output_format: table

# Rooms registered by `hostel init --seed-from-config`
# rooms:
#   - room_number: A1
#     capacity: 2
#   - room_number: A2
#     capacity: 3
";

/// Initializes the data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is false
/// - The database cannot be initialized or seeded
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use hostel::operations::{init_database, InitOptions};
/// use hostel::Room;
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/hostel-data"))
///     .with_create_config(true)
///     .with_rooms(vec![Room::new("A1", 2).unwrap()]);
///
/// let result = init_database(&options).unwrap();
/// println!("seeded {} rooms", result.rooms_seeded);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        rooms_seeded: 0,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "Database already exists at {}. Use --overwrite to replace it.",
                db_path.display()
            ),
        });
    }

    if db_exists {
        fs::remove_file(&db_path)?;
    }

    let mut db = Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;

    if !options.rooms.is_empty() {
        result.rooms_seeded = db.seed_rooms(&options.rooms)?;
        log::info!("seeded {} rooms", result.rooms_seeded);
    }

    if options.create_config {
        let config_path = options.data_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigLoader};
    use tempfile::TempDir;

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("hostel");

        let result = init_database(&InitOptions::new(data_dir.clone())).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert_eq!(result.rooms_seeded, 0);
        assert!(data_dir.join(DATABASE_FILE_NAME).exists());
    }

    #[test]
    fn test_init_existing_database_refused() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions::new(temp.path().to_path_buf());
        init_database(&options).unwrap();

        let err = init_database(&options).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_init_overwrite_discards_rooms() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions::new(temp.path().to_path_buf())
            .with_rooms(vec![Room::new("A1", 2).unwrap()]);
        init_database(&options).unwrap();

        let result = init_database(&InitOptions::new(temp.path().to_path_buf()).with_overwrite(true))
            .unwrap();
        assert!(result.database_created);

        let db = Database::open(DatabaseConfig::in_data_dir(temp.path())).unwrap();
        assert!(Database::list_rooms(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_init_seeds_rooms() {
        let temp = TempDir::new().unwrap();
        let rooms = vec![Room::new("A1", 2).unwrap(), Room::new("A2", 1).unwrap()];
        let result =
            init_database(&InitOptions::new(temp.path().to_path_buf()).with_rooms(rooms)).unwrap();
        assert_eq!(result.rooms_seeded, 2);

        let db = Database::open(DatabaseConfig::in_data_dir(temp.path())).unwrap();
        assert_eq!(Database::list_available_rooms(db.connection()).unwrap().len(), 2);
    }

    #[test]
    fn test_config_template_parses_to_empty_config() {
        let temp = TempDir::new().unwrap();
        let result = init_database(
            &InitOptions::new(temp.path().to_path_buf()).with_create_config(true),
        )
        .unwrap();
        assert!(result.config_created);

        let config = ConfigLoader::load_file(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_existing_config_not_replaced() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "output_format: json\n").unwrap();

        let result = init_database(
            &InitOptions::new(temp.path().to_path_buf()).with_create_config(true),
        )
        .unwrap();
        assert!(!result.config_created);
        assert_eq!(fs::read_to_string(config_path).unwrap(), "output_format: json\n");
    }
}
