//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::Room;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Inserts an available room.
///
/// # Panics
///
/// Panics if the room is invalid or the insert fails.
pub fn seed_room(db: &Database, number: &str, capacity: u32) {
    db.insert_room(&Room::new(number, capacity).unwrap())
        .unwrap();
}
