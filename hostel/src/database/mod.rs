//! Database layer for persistent storage of rooms and allocations.
//!
//! This module provides a SQLite-based store with connection management,
//! schema versioning, and the atomic allocation transaction.
//!
//! # Examples
//!
//! ```no_run
//! use chrono::Utc;
//! use hostel::database::{Database, DatabaseConfig};
//! use hostel::{Room, RoomNumber, StudentName};
//!
//! let config = DatabaseConfig::new("/tmp/hostel.db");
//! let mut db = Database::open(config).unwrap();
//!
//! db.insert_room(&Room::new("A1", 2).unwrap()).unwrap();
//! db.allocate_room(
//!     &StudentName::new("Asha").unwrap(),
//!     &RoomNumber::new("A1").unwrap(),
//!     Utc::now(),
//! )
//! .unwrap();
//!
//! for allocation in Database::list_allocations(db.connection()).unwrap() {
//!     println!("{:?}", allocation);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
