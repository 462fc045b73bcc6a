//! Error types for the hostel library.
//!
//! This module provides the error hierarchy for all room allocation
//! operations, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a hostel error.
///
/// # Examples
///
/// ```
/// use hostel::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hostel library.
///
/// Callers can treat every variant as recoverable: none of them leave the
/// store in a partially written state.
#[derive(Debug, Error)]
pub enum Error {
    /// Input was rejected before any store access took place.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The room already holds an allocation.
    #[error("room {room} is already occupied")]
    RoomOccupied {
        /// The room that was requested.
        room: String,
    },

    /// A room with the same number is already registered.
    #[error("room {room} already exists")]
    DuplicateRoom {
        /// The duplicated room number.
        room: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// The allocation worker thread is no longer running.
    #[error("allocation worker stopped")]
    WorkerStopped,
}

impl From<crate::room::ValidationError> for Error {
    fn from(err: crate::room::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error was raised by input validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostel::Error;
    ///
    /// let err = Error::Validation { field: "student_name".into(), message: "empty".into() };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error indicates a missing room or record.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostel::Error;
    ///
    /// let err = Error::NotFound { resource: "room Z9".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a conflict with existing state.
    ///
    /// # Examples
    ///
    /// ```
    /// use hostel::Error;
    ///
    /// let err = Error::RoomOccupied { room: "A1".into() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RoomOccupied { .. } | Self::DuplicateRoom { .. })
    }

    /// Convert a driver error, turning `SQLITE_BUSY` into a lock timeout.
    pub(crate) fn from_sqlite(err: rusqlite::Error, busy_timeout_secs: u64) -> Self {
        if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = err {
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ) {
                return Self::LockTimeout {
                    seconds: busy_timeout_secs,
                };
            }
        }
        Self::Database(err)
    }
}
