//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for optimal `SQLite` configuration.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// Each `Database` owns exactly one `SQLite` connection. Several `Database`
/// values, in one process or many, may point at the same file; WAL mode and
/// the busy timeout let them share it.
///
/// # Examples
///
/// ```no_run
/// use hostel::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/hostel.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Refuse a missing file when `auto_create` is disabled
    /// - Create the parent directory if `auto_create` is enabled
    /// - Set WAL mode for concurrent access
    /// - Configure busy timeout and foreign key enforcement
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database file is missing and may not be created
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.auto_create && !config.path.exists() {
            return Err(Error::DataDirectoryNotFound {
                path: config
                    .path
                    .parent()
                    .map_or_else(|| config.path.clone(), std::path::Path::to_path_buf),
            });
        }

        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // Busy timeout first so the journal mode switch can wait on peers
        conn.busy_timeout(config.busy_timeout)?;
        if !config.read_only {
            // PRAGMA journal_mode returns a row
            let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        }
        conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON")?;

        super::migrations::check_schema_compatibility(&conn)?;

        log::debug!("opened hostel database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns a mutable reference to the underlying `SQLite` connection.
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Converts a driver error, reporting lock contention as a timeout.
    pub(super) fn map_err(&self, err: rusqlite::Error) -> Error {
        Error::from_sqlite(err, self.config.busy_timeout.as_secs())
    }
}
