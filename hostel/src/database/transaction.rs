//! Transactional operations.
//!
//! Every write here runs inside an IMMEDIATE transaction: the write lock is
//! taken before the first read, so concurrent connections queue on the busy
//! timeout instead of interleaving their check and their update.

use chrono::{DateTime, Utc};
use rusqlite::{params, TransactionBehavior};

use crate::allocation::{format_allocation_date, Allocation, StudentName};
use crate::error::{Error, Result};
use crate::room::{Room, RoomNumber};

use super::connection::Database;
use super::schema::{CLAIM_ROOM, INSERT_ALLOCATION, INSERT_ROOM_IF_ABSENT};

impl Database {
    /// Allocates a room to a student in one atomic transaction.
    ///
    /// The room is claimed with a conditional update that only matches an
    /// `Available` row. If no row changed the room is looked up to tell a
    /// missing room from an occupied one, and nothing is written. On success
    /// the allocation is appended to the log and both writes commit together.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no room has this number
    /// - `Error::RoomOccupied` if the room is already occupied
    /// - `Error::LockTimeout` if another writer held the lock too long
    /// - `Error::Database` for any other driver failure
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::Utc;
    /// use hostel::database::{Database, DatabaseConfig};
    /// use hostel::{Room, RoomNumber, StudentName};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hostel.db")).unwrap();
    /// db.insert_room(&Room::new("A1", 2).unwrap()).unwrap();
    ///
    /// let allocation = db
    ///     .allocate_room(
    ///         &StudentName::new("Asha").unwrap(),
    ///         &RoomNumber::new("A1").unwrap(),
    ///         Utc::now(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(allocation.student_name().as_str(), "Asha");
    /// ```
    pub fn allocate_room(
        &mut self,
        student: &StudentName,
        room: &RoomNumber,
        at: DateTime<Utc>,
    ) -> Result<Allocation> {
        let busy_secs = self.config().busy_timeout.as_secs();
        let map = |e: rusqlite::Error| Error::from_sqlite(e, busy_secs);

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(map)?;

        let claimed = tx.execute(CLAIM_ROOM, params![room.as_str()]).map_err(map)?;
        if claimed != 1 {
            // Dropping the transaction rolls it back; nothing was written
            return Err(match Self::get_room(&tx, room)? {
                None => Error::NotFound {
                    resource: format!("room {room}"),
                },
                Some(_) => Error::RoomOccupied {
                    room: room.to_string(),
                },
            });
        }

        let allocation = Allocation::new(student.clone(), room.clone(), at);
        tx.execute(
            INSERT_ALLOCATION,
            params![
                allocation.student_name().as_str(),
                allocation.room_number().as_str(),
                format_allocation_date(allocation.allocation_date()),
            ],
        )
        .map_err(map)?;

        tx.commit().map_err(map)?;
        Ok(allocation)
    }

    /// Inserts rooms in a single transaction, skipping numbers that exist.
    ///
    /// Returns the number of rooms actually inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, an insert fails,
    /// or the transaction cannot be committed. No room is inserted on error.
    pub fn seed_rooms(&mut self, rooms: &[Room]) -> Result<usize> {
        let busy_secs = self.config().busy_timeout.as_secs();
        let map = |e: rusqlite::Error| Error::from_sqlite(e, busy_secs);

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(map)?;

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(INSERT_ROOM_IF_ABSENT).map_err(map)?;
            for room in rooms {
                inserted += stmt
                    .execute(params![
                        room.number().as_str(),
                        room.capacity(),
                        room.status().as_str()
                    ])
                    .map_err(map)?;
            }
        }

        tx.commit().map_err(map)?;
        Ok(inserted)
    }
}
