//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_ALLOCATION_DATE_INDEX, CREATE_METADATA_TABLE, CREATE_ROOMS_TABLE,
    CREATE_STUDENTS_TABLE, CREATE_STUDENT_ROOM_INDEX, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, and metadata for a fresh
/// database. Table creation is idempotent, so a database whose `rooms` and
/// `students` tables were created by hand is adopted as-is.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use hostel::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    conn.execute(CREATE_ROOMS_TABLE, [])?;
    conn.execute(CREATE_STUDENTS_TABLE, [])?;

    conn.execute(CREATE_ALLOCATION_DATE_INDEX, [])?;
    conn.execute(CREATE_STUDENT_ROOM_INDEX, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::debug!("initialized hostel schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" or a missing metadata table (which indicate version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table: metadata" on a fresh file
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// - Version 0: the schema is created.
/// - Version equal to the current one: nothing to do.
/// - Any other version: `Error::UnsupportedSchemaVersion`.
///
/// # Errors
///
/// Returns an error if the version is incompatible or initialization fails.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use hostel::database::migrations::check_schema_compatibility;
///
/// let conn = Connection::open_in_memory().unwrap();
/// check_schema_compatibility(&conn).unwrap();
/// ```
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
