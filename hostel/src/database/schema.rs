//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the hostel allocation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// `status` compares case-insensitively so rows seeded as "occupied" or
/// "AVAILABLE" by external tools still satisfy the check constraint and the
/// conditional update used during allocation.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        room_number TEXT PRIMARY KEY NOT NULL,
        capacity INTEGER NOT NULL CHECK (capacity >= 1),
        status TEXT NOT NULL DEFAULT 'Available' COLLATE NOCASE
            CHECK (status IN ('Available', 'Occupied'))
    )";

/// SQL statement to create the students (allocation log) table.
///
/// `id` only exists to break ties between allocations made within the same
/// second.
pub const CREATE_STUDENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        student_name TEXT NOT NULL,
        room_number TEXT NOT NULL REFERENCES rooms(room_number),
        allocation_date TEXT NOT NULL
    )";

/// SQL statement to create an index on the allocation date.
///
/// This index speeds up the most-recent-first allocation listing.
pub const CREATE_ALLOCATION_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_students_allocation_date ON students(allocation_date)";

/// SQL statement to create an index on the allocated room.
pub const CREATE_STUDENT_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_students_room_number ON students(room_number)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a room.
pub const INSERT_ROOM: &str = r"
    INSERT INTO rooms (room_number, capacity, status)
    VALUES (?, ?, ?)
";

/// SQL statement to insert a room unless its number is already taken.
pub const INSERT_ROOM_IF_ABSENT: &str = r"
    INSERT OR IGNORE INTO rooms (room_number, capacity, status)
    VALUES (?, ?, ?)
";

/// SQL statement to append an allocation to the log.
pub const INSERT_ALLOCATION: &str = r"
    INSERT INTO students (student_name, room_number, allocation_date)
    VALUES (?, ?, ?)
";

/// SQL statement that claims an available room.
///
/// Exactly one changed row means the caller won the room; zero means it was
/// occupied (or missing) at the moment of the write. The collation is spelled
/// out because adopted tables may lack the column's `NOCASE`.
pub const CLAIM_ROOM: &str = r"
    UPDATE rooms
    SET status = 'Occupied'
    WHERE room_number = ? AND status = 'Available' COLLATE NOCASE
";
