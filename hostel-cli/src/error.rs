//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use std::fmt;

use hostel::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (invalid input, unknown room, room occupied)
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(e) if e.is_validation() || e.is_not_found() || e.is_conflict() => 1,
            CliError::Library(_) => 6,
            CliError::Timeout => 2,
            CliError::NoDataDirectory => 3,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (run `hostel init` or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::LockTimeout { .. } => CliError::Timeout,
            LibError::DataDirectoryNotFound { .. } => CliError::NoDataDirectory,
            LibError::Configuration(e) => CliError::Config(e.to_string()),
            LibError::Io(e) => CliError::Io(e),
            e => CliError::Library(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_errors_exit_one() {
        let errors = [
            LibError::Validation {
                field: "student_name".into(),
                message: "empty".into(),
            },
            LibError::NotFound {
                resource: "room Z9".into(),
            },
            LibError::RoomOccupied { room: "A1".into() },
            LibError::DuplicateRoom { room: "A1".into() },
        ];
        for e in errors {
            assert_eq!(CliError::from(e).exit_code(), 1);
        }
    }

    #[test]
    fn test_special_library_errors() {
        assert_eq!(
            CliError::from(LibError::LockTimeout { seconds: 5 }).exit_code(),
            2
        );
        assert_eq!(
            CliError::from(LibError::DataDirectoryNotFound {
                path: "/nope".into()
            })
            .exit_code(),
            3
        );
        assert_eq!(CliError::from(LibError::WorkerStopped).exit_code(), 6);
    }

    #[test]
    fn test_io_and_config_exit_codes() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(CliError::from(LibError::Io(io)).exit_code(), 5);
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
    }
}
