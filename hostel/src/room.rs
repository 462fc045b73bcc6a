//! Room types for hostel occupancy tracking.
//!
//! This module provides the validated room number, the two-valued occupancy
//! status, and the `Room` record stored in the `rooms` table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A validated room number.
///
/// Room numbers are free-form identifiers ("A1", "204", "East-3") that must
/// be non-empty after trimming whitespace. The stored value is trimmed.
///
/// # Examples
///
/// ```
/// use hostel::RoomNumber;
///
/// let number = RoomNumber::new("  A1 ").unwrap();
/// assert_eq!(number.as_str(), "A1");
///
/// assert!(RoomNumber::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(String);

impl RoomNumber {
    /// Creates a room number from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "room_number".into(),
                message: "room number must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the room number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Occupancy status of a room.
///
/// A room starts `Available` and moves to `Occupied` exactly once, when it is
/// allocated. There is no transition back.
///
/// # Examples
///
/// ```
/// use hostel::RoomStatus;
///
/// assert_eq!(RoomStatus::parse("occupied").unwrap(), RoomStatus::Occupied);
/// assert_eq!(RoomStatus::Available.as_str(), "Available");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// The room has no allocation.
    Available,
    /// The room has been allocated to a student.
    Occupied,
}

impl RoomStatus {
    /// Returns the canonical text stored in the `status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
        }
    }

    /// Parses a status, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than "available" or "occupied".
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.trim().eq_ignore_ascii_case("available") {
            Ok(Self::Available)
        } else if s.trim().eq_ignore_ascii_case("occupied") {
            Ok(Self::Occupied)
        } else {
            Err(ValidationError {
                field: "status".into(),
                message: format!("unknown room status '{s}'"),
            })
        }
    }
}

impl FromStr for RoomStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of lodging with a capacity and an occupancy status.
///
/// # Examples
///
/// ```
/// use hostel::{Room, RoomStatus};
///
/// let room = Room::new("A1", 2).unwrap();
/// assert_eq!(room.number().as_str(), "A1");
/// assert_eq!(room.capacity(), 2);
/// assert_eq!(room.status(), RoomStatus::Available);
///
/// // Capacity must be at least one
/// assert!(Room::new("A2", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    capacity: u32,
    status: RoomStatus,
}

impl Room {
    /// Creates an available room.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is blank or the capacity is zero.
    pub fn new(number: impl AsRef<str>, capacity: u32) -> Result<Self, ValidationError> {
        let number = RoomNumber::new(number)?;
        if capacity == 0 {
            return Err(ValidationError {
                field: "capacity".into(),
                message: "capacity must be at least 1".into(),
            });
        }
        Ok(Self {
            number,
            capacity,
            status: RoomStatus::Available,
        })
    }

    /// Returns a copy of this room with the given status.
    #[must_use]
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> &RoomNumber {
        &self.number
    }

    /// Returns the number of beds in the room.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the occupancy status.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.status
    }

    /// Returns `true` if the room can still be allocated.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_number_trims() {
        let number = RoomNumber::new("\tB12  ").unwrap();
        assert_eq!(number.as_str(), "B12");
        assert_eq!(number.to_string(), "B12");
    }

    #[test]
    fn test_room_number_rejects_blank() {
        let err = RoomNumber::new("").unwrap_err();
        assert_eq!(err.field, "room_number");
        assert!(RoomNumber::new(" \n ").is_err());
    }

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(RoomStatus::parse("AVAILABLE").unwrap(), RoomStatus::Available);
        assert_eq!(RoomStatus::parse("Occupied").unwrap(), RoomStatus::Occupied);
        assert_eq!("oCcUpIeD".parse::<RoomStatus>().unwrap(), RoomStatus::Occupied);
    }

    #[test]
    fn test_status_parse_unknown() {
        let err = RoomStatus::parse("maintenance").unwrap_err();
        assert_eq!(err.field, "status");
        assert!(err.message.contains("maintenance"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", RoomStatus::Available), "Available");
        assert_eq!(format!("{}", RoomStatus::Occupied), "Occupied");
    }

    #[test]
    fn test_room_new_defaults_available() {
        let room = Room::new("C3", 4).unwrap();
        assert!(room.is_available());
        assert_eq!(room.capacity(), 4);
    }

    #[test]
    fn test_room_zero_capacity() {
        let err = Room::new("C3", 0).unwrap_err();
        assert_eq!(err.field, "capacity");
    }

    #[test]
    fn test_room_with_status() {
        let room = Room::new("C3", 1)
            .unwrap()
            .with_status(RoomStatus::Occupied);
        assert!(!room.is_available());
        assert_eq!(room.status(), RoomStatus::Occupied);
    }

    #[test]
    fn test_room_serializes_status_as_text() {
        let room = Room::new("A1", 2).unwrap();
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["number"], "A1");
        assert_eq!(json["capacity"], 2);
        assert_eq!(json["status"], "Available");
    }
}
