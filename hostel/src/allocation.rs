//! Allocation records linking a student to a room.
//!
//! Allocations are append-only: created by a successful allocation and never
//! updated or deleted afterwards.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::room::{RoomNumber, ValidationError};

/// Text format of the `allocation_date` column.
///
/// Fixed-width so that lexicographic order matches chronological order.
pub const ALLOCATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A validated student name.
///
/// # Examples
///
/// ```
/// use hostel::StudentName;
///
/// let name = StudentName::new(" Asha ").unwrap();
/// assert_eq!(name.as_str(), "Asha");
/// assert!(StudentName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentName(String);

impl StudentName {
    /// Creates a student name from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "student_name".into(),
                message: "student name must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A durable record of one student placed in one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    student_name: StudentName,
    room_number: RoomNumber,
    allocation_date: DateTime<Utc>,
}

impl Allocation {
    /// Creates an allocation record.
    ///
    /// The date is truncated to whole seconds, matching what the store keeps.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use hostel::{Allocation, RoomNumber, StudentName};
    ///
    /// let allocation = Allocation::new(
    ///     StudentName::new("Asha").unwrap(),
    ///     RoomNumber::new("A1").unwrap(),
    ///     Utc::now(),
    /// );
    /// assert_eq!(allocation.room_number().as_str(), "A1");
    /// ```
    #[must_use]
    pub fn new(
        student_name: StudentName,
        room_number: RoomNumber,
        allocation_date: DateTime<Utc>,
    ) -> Self {
        let allocation_date = truncate_to_seconds(allocation_date);
        Self {
            student_name,
            room_number,
            allocation_date,
        }
    }

    /// Returns the student's name.
    #[must_use]
    pub const fn student_name(&self) -> &StudentName {
        &self.student_name
    }

    /// Returns the allocated room.
    #[must_use]
    pub const fn room_number(&self) -> &RoomNumber {
        &self.room_number
    }

    /// Returns when the allocation was made.
    #[must_use]
    pub const fn allocation_date(&self) -> DateTime<Utc> {
        self.allocation_date
    }
}

/// Formats a timestamp for the `allocation_date` column.
#[must_use]
pub fn format_allocation_date(date: DateTime<Utc>) -> String {
    date.format(ALLOCATION_DATE_FORMAT).to_string()
}

/// Parses a value read from the `allocation_date` column.
///
/// # Errors
///
/// Returns an error if the text does not match [`ALLOCATION_DATE_FORMAT`].
pub fn parse_allocation_date(text: &str) -> Result<DateTime<Utc>, ValidationError> {
    NaiveDateTime::parse_from_str(text, ALLOCATION_DATE_FORMAT)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| ValidationError {
            field: "allocation_date".into(),
            message: format!("invalid timestamp '{text}': {e}"),
        })
}

fn truncate_to_seconds(date: DateTime<Utc>) -> DateTime<Utc> {
    Utc.timestamp_opt(date.timestamp(), 0)
        .single()
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_name_validation() {
        assert_eq!(StudentName::new("  Ravi ").unwrap().as_str(), "Ravi");
        let err = StudentName::new("\t").unwrap_err();
        assert_eq!(err.field, "student_name");
    }

    #[test]
    fn test_date_round_trip_through_column_text() {
        let date = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let text = format_allocation_date(date);
        assert_eq!(text, "2025-03-14 09:26:53");
        assert_eq!(parse_allocation_date(&text).unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_allocation_date("yesterday").unwrap_err();
        assert_eq!(err.field, "allocation_date");
    }

    #[test]
    fn test_new_truncates_subseconds() {
        let date = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let allocation = Allocation::new(
            StudentName::new("Asha").unwrap(),
            RoomNumber::new("A1").unwrap(),
            date,
        );
        assert_eq!(allocation.allocation_date().timestamp_subsec_nanos(), 0);
        assert_eq!(allocation.allocation_date().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_text_order_matches_time_order() {
        let earlier = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(format_allocation_date(earlier) < format_allocation_date(later));
    }
}
