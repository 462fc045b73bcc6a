//! Common test utilities for integration tests.
//!
//! This module provides fixtures for testing the hostel library against a
//! real `SQLite` file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use hostel::{AllocationService, Database, DatabaseConfig, Room};
use tempfile::TempDir;

/// A throwaway data directory holding one hostel database.
pub struct TestStore {
    /// Keeps the directory alive for the duration of the test.
    pub dir: TempDir,
}

impl TestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates a store with the given available rooms.
    pub fn with_rooms(rooms: &[(&str, u32)]) -> Self {
        let store = Self::new();
        let mut db = store.open();
        let rooms: Vec<Room> = rooms
            .iter()
            .map(|(number, capacity)| Room::new(number, *capacity).unwrap())
            .collect();
        db.seed_rooms(&rooms).unwrap();
        store
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join(hostel::database::DATABASE_FILE_NAME)
    }

    /// Data directory path.
    #[allow(dead_code)]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Configuration for a fresh connection to this store.
    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.db_path()).with_busy_timeout(Duration::from_secs(30))
    }

    /// Opens a new connection.
    pub fn open(&self) -> Database {
        Database::open(self.config()).unwrap()
    }

    /// Opens a new connection wrapped in a service.
    #[allow(dead_code)]
    pub fn service(&self) -> AllocationService {
        AllocationService::new(self.open())
    }
}
