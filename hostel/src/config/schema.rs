//! Configuration schema definitions.
//!
//! This module defines the configuration structure for hostel: store lock
//! behavior, auto-initialization, output format and the optional list of
//! rooms used to seed a fresh database.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::room::Room;

/// Default busy timeout in seconds.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; see
/// [`ConfigBuilder`](super::ConfigBuilder) for precedence.
///
/// # Examples
///
/// ```
/// use hostel::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("output_format: json\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert!(config.rooms.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the database write lock (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,

    /// Rooms to register when the database is initialized with seeding.
    pub rooms: Option<Vec<RoomSeed>>,
}

impl Config {
    /// The built-in defaults, the lowest-precedence configuration layer.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            busy_timeout_seconds: Some(DEFAULT_BUSY_TIMEOUT_SECONDS),
            disable_autoinit: Some(false),
            output_format: Some(OutputFormat::Table),
            rooms: None,
        }
    }

    /// The effective busy timeout.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.busy_timeout_seconds
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
        )
    }

    /// Whether automatic initialization is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }

    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Converts the configured seed list into validated rooms.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if any entry is invalid.
    pub fn seed_rooms(&self) -> Result<Vec<Room>> {
        self.rooms
            .iter()
            .flatten()
            .map(|seed| Room::new(&seed.room_number, seed.capacity).map_err(Into::into))
            .collect()
    }
}

/// A room listed in the configuration for seeding.
///
/// # Examples
///
/// ```
/// use hostel::config::RoomSeed;
///
/// let seed: RoomSeed = serde_yaml::from_str("room_number: A1\ncapacity: 2\n").unwrap();
/// assert_eq!(seed.capacity, 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomSeed {
    /// Room number.
    pub room_number: String,
    /// Number of beds.
    pub capacity: u32,
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use hostel::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable line format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "tsv" => Some(Self::Tsv),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
