//! Database read and write operations for rooms and allocations.
//!
//! Multi-statement operations that must be atomic live in the
//! `transaction` module.

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::allocation::{parse_allocation_date, Allocation, StudentName};
use crate::error::{Error, Result};
use crate::room::{Room, RoomNumber, RoomStatus};

use super::connection::Database;
use super::schema::INSERT_ROOM;

const SELECT_ROOM: &str = r"
    SELECT room_number, capacity, status
    FROM rooms
    WHERE room_number = ?
";

const LIST_ROOMS: &str = r"
    SELECT room_number, capacity, status
    FROM rooms
    ORDER BY room_number
";

// No ORDER BY: available rooms come back in store-native order
const LIST_AVAILABLE_ROOMS: &str = r"
    SELECT room_number, capacity, status
    FROM rooms
    WHERE status = 'Available' COLLATE NOCASE
";

const LIST_ALLOCATIONS: &str = r"
    SELECT student_name, room_number, allocation_date
    FROM students
    ORDER BY allocation_date DESC, rowid DESC
";

const LIST_ALLOCATIONS_FOR_ROOM: &str = r"
    SELECT student_name, room_number, allocation_date
    FROM students
    WHERE room_number = ?
    ORDER BY allocation_date DESC, rowid DESC
";

const COUNT_ALLOCATIONS: &str = "SELECT COUNT(*) FROM students";

/// Helper function to deserialize a room from a database row.
///
/// Expects row fields in this order: `room_number`, capacity, status
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let number: String = row.get(0)?;
    let capacity: u32 = row.get(1)?;
    let status: String = row.get(2)?;

    let status = RoomStatus::parse(&status).map_err(|e| decode_error(2, e))?;

    Room::new(number, capacity)
        .map(|room| room.with_status(status))
        .map_err(|e| {
            let column = if e.field == "capacity" { 1 } else { 0 };
            decode_error(column, e)
        })
}

fn decode_error(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e))
}

/// Helper function to deserialize an allocation from a database row.
///
/// Expects row fields in this order: `student_name`, `room_number`, `allocation_date`
fn row_to_allocation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Allocation> {
    let student: String = row.get(0)?;
    let room: String = row.get(1)?;
    let date: String = row.get(2)?;

    let student = StudentName::new(student).map_err(|e| decode_error(0, e))?;
    let room = RoomNumber::new(room).map_err(|e| decode_error(1, e))?;
    let date = parse_allocation_date(&date).map_err(|e| decode_error(2, e))?;

    Ok(Allocation::new(student, room, date))
}

/// Returns `true` if the error is a primary key or unique violation.
pub(super) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
                && (e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
    )
}

impl Database {
    /// Registers a new room.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateRoom` if the number is already registered, or
    /// a database error if the insert fails for another reason.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hostel::database::{Database, DatabaseConfig};
    /// use hostel::Room;
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/hostel.db")).unwrap();
    /// db.insert_room(&Room::new("A1", 2).unwrap()).unwrap();
    /// ```
    pub fn insert_room(&self, room: &Room) -> Result<()> {
        match self.conn.execute(
            INSERT_ROOM,
            params![
                room.number().as_str(),
                room.capacity(),
                room.status().as_str()
            ],
        ) {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(Error::DuplicateRoom {
                room: room.number().to_string(),
            }),
            Err(e) => Err(self.map_err(e)),
        }
    }

    /// Retrieves a room by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(room))` if the room exists
    /// - `Ok(None)` if the room doesn't exist
    pub fn get_room(conn: &Connection, number: &RoomNumber) -> Result<Option<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOM)?;
        let room = stmt
            .query_row(params![number.as_str()], row_to_room)
            .optional()?;
        Ok(room)
    }

    /// Lists every room, ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Lists rooms whose status is `Available`, in store-native order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_available_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_AVAILABLE_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Lists all allocations, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_allocations(conn: &Connection) -> Result<Vec<Allocation>> {
        let mut stmt = conn.prepare(LIST_ALLOCATIONS)?;
        let allocations = stmt
            .query_map([], row_to_allocation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(allocations)
    }

    /// Lists the allocations that reference one room, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn list_allocations_for_room(
        conn: &Connection,
        number: &RoomNumber,
    ) -> Result<Vec<Allocation>> {
        let mut stmt = conn.prepare(LIST_ALLOCATIONS_FOR_ROOM)?;
        let allocations = stmt
            .query_map(params![number.as_str()], row_to_allocation)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(allocations)
    }

    /// Counts rows in the allocation log.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_allocations(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(COUNT_ALLOCATIONS, [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
