//! Rendering of rooms and allocations.
//!
//! Every list command writes through these functions so that the table,
//! JSON, CSV and TSV forms stay consistent between commands and the shell.

use std::io::Write;

use clap::ValueEnum;
use hostel::allocation::format_allocation_date;
use hostel::{Allocation, OutputFormat, Room};

use crate::error::CliError;

/// Shown in table form when no room is available.
pub const NO_AVAILABLE_ROOMS: &str = "No available rooms found.";

/// Shown in table form when no room is registered at all.
pub const NO_ROOMS: &str = "No rooms found.";

/// Shown in table form when the allocation log is empty.
pub const NO_ALLOCATIONS: &str = "No allocations found.";

const ROOM_HEADERS: [&str; 3] = ["room_number", "capacity", "status"];
const ALLOCATION_HEADERS: [&str; 3] = ["student_name", "room_number", "allocation_date"];

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// One line per entry (human-readable)
    Table,
    /// JSON array
    Json,
    /// Comma-separated values with a header row
    Csv,
    /// Tab-separated values with a header row
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => Self::Table,
            FormatArg::Json => Self::Json,
            FormatArg::Csv => Self::Csv,
            FormatArg::Tsv => Self::Tsv,
        }
    }
}

/// Which rooms a listing holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomListing {
    /// Only rooms that can still be allocated.
    Available,
    /// Every registered room.
    All,
}

impl RoomListing {
    /// Table sentinel for an empty listing.
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Available => NO_AVAILABLE_ROOMS,
            Self::All => NO_ROOMS,
        }
    }
}

/// Table line for a room.
pub fn room_line(room: &Room) -> String {
    format!(
        "Room: {} | Capacity: {} | Status: {}",
        room.number(),
        room.capacity(),
        room.status()
    )
}

/// Table line for an allocation.
pub fn allocation_line(allocation: &Allocation) -> String {
    format!(
        "Student: {} | Room: {} | Date: {}",
        allocation.student_name(),
        allocation.room_number(),
        format_allocation_date(allocation.allocation_date())
    )
}

/// Write rooms in the requested format.
pub fn write_rooms(
    out: &mut dyn Write,
    rooms: &[Room],
    listing: RoomListing,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            if rooms.is_empty() {
                writeln!(out, "{}", listing.empty_message())?;
            }
            for room in rooms {
                writeln!(out, "{}", room_line(room))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = rooms
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "room_number": r.number().as_str(),
                        "capacity": r.capacity(),
                        "status": r.status().as_str(),
                    })
                })
                .collect();
            write_json(out, &json)
        }
        OutputFormat::Csv | OutputFormat::Tsv => write_delimited(
            out,
            delimiter(format),
            ROOM_HEADERS,
            rooms.iter().map(|r| {
                [
                    r.number().to_string(),
                    r.capacity().to_string(),
                    r.status().to_string(),
                ]
            }),
        ),
    }
}

/// Write allocations in the requested format.
pub fn write_allocations(
    out: &mut dyn Write,
    allocations: &[Allocation],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            if allocations.is_empty() {
                writeln!(out, "{NO_ALLOCATIONS}")?;
            }
            for allocation in allocations {
                writeln!(out, "{}", allocation_line(allocation))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let json: Vec<serde_json::Value> = allocations
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "student_name": a.student_name().as_str(),
                        "room_number": a.room_number().as_str(),
                        "allocation_date": format_allocation_date(a.allocation_date()),
                    })
                })
                .collect();
            write_json(out, &json)
        }
        OutputFormat::Csv | OutputFormat::Tsv => write_delimited(
            out,
            delimiter(format),
            ALLOCATION_HEADERS,
            allocations.iter().map(|a| {
                [
                    a.student_name().to_string(),
                    a.room_number().to_string(),
                    format_allocation_date(a.allocation_date()),
                ]
            }),
        ),
    }
}

fn delimiter(format: OutputFormat) -> u8 {
    if format == OutputFormat::Tsv {
        b'\t'
    } else {
        b','
    }
}

fn write_json(out: &mut dyn Write, values: &[serde_json::Value]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, values)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert `csv::Error` to `CliError`.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn write_delimited(
    out: &mut dyn Write,
    delimiter: u8,
    headers: [&str; 3],
    rows: impl Iterator<Item = [String; 3]>,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(&row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hostel::{RoomNumber, RoomStatus, StudentName};

    fn render_rooms(rooms: &[Room], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_rooms(&mut buf, rooms, RoomListing::Available, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn render_allocations(allocations: &[Allocation], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_allocations(&mut buf, allocations, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_allocation() -> Allocation {
        Allocation::new(
            StudentName::new("Asha").unwrap(),
            RoomNumber::new("A1").unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_room_table_line() {
        let room = Room::new("A1", 2).unwrap();
        assert_eq!(
            render_rooms(&[room], OutputFormat::Table),
            "Room: A1 | Capacity: 2 | Status: Available\n"
        );
    }

    #[test]
    fn test_empty_tables_show_sentinels() {
        assert_eq!(
            render_rooms(&[], OutputFormat::Table),
            format!("{NO_AVAILABLE_ROOMS}\n")
        );
        assert_eq!(
            render_allocations(&[], OutputFormat::Table),
            format!("{NO_ALLOCATIONS}\n")
        );
    }

    #[test]
    fn test_empty_full_listing_has_its_own_sentinel() {
        let mut buf = Vec::new();
        write_rooms(&mut buf, &[], RoomListing::All, OutputFormat::Table).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No rooms found.\n");
    }

    #[test]
    fn test_empty_json_is_empty_array() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render_rooms(&[], OutputFormat::Json)).unwrap();
        assert_eq!(parsed, serde_json::json!([]));
    }

    #[test]
    fn test_allocation_table_line() {
        assert_eq!(
            render_allocations(&[sample_allocation()], OutputFormat::Table),
            "Student: Asha | Room: A1 | Date: 2026-10-19 10:00:00\n"
        );
    }

    #[test]
    fn test_allocation_json() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render_allocations(&[sample_allocation()], OutputFormat::Json))
                .unwrap();
        assert_eq!(parsed[0]["student_name"], "Asha");
        assert_eq!(parsed[0]["allocation_date"], "2026-10-19 10:00:00");
    }

    #[test]
    fn test_room_csv_and_tsv() {
        let room = Room::new("B2", 3).unwrap().with_status(RoomStatus::Occupied);
        assert_eq!(
            render_rooms(&[room.clone()], OutputFormat::Csv),
            "room_number,capacity,status\nB2,3,Occupied\n"
        );
        assert_eq!(
            render_rooms(&[room], OutputFormat::Tsv),
            "room_number\tcapacity\tstatus\nB2\t3\tOccupied\n"
        );
    }

    #[test]
    fn test_csv_quotes_commas() {
        let allocation = Allocation::new(
            StudentName::new("Rao, Asha").unwrap(),
            RoomNumber::new("A1").unwrap(),
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        );
        let csv = render_allocations(&[allocation], OutputFormat::Csv);
        assert!(csv.contains("\"Rao, Asha\",A1,2026-01-02 03:04:05"));
    }
}
