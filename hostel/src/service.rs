//! The allocation service.
//!
//! `AllocationService` owns the business rule that a room holds at most one
//! allocation. It validates input, stamps the allocation time, and delegates
//! persistence to a [`RoomStore`], which must perform the claim and the log
//! append atomically.
//!
//! # Examples
//!
//! ```no_run
//! use hostel::{AllocationService, Database, DatabaseConfig};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hostel.db")).unwrap();
//! let mut service = AllocationService::new(db);
//!
//! service.add_room("A1", 2).unwrap();
//! let allocation = service.allocate_room("Asha", "A1").unwrap();
//! assert_eq!(allocation.room_number().as_str(), "A1");
//!
//! assert!(service.list_available_rooms().unwrap().is_empty());
//! ```

use chrono::{DateTime, Utc};

use crate::allocation::{Allocation, StudentName};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::room::{Room, RoomNumber};

/// Persistence operations the allocation service relies on.
///
/// The trait exists so the service can run against the `SQLite` store in
/// production and against mocks in tests.
#[cfg_attr(test, mockall::automock)]
pub trait RoomStore {
    /// Looks up a room by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_room(&self, number: &RoomNumber) -> Result<Option<Room>>;

    /// Registers a new room.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateRoom` if the number is taken.
    fn add_room(&mut self, room: &Room) -> Result<()>;

    /// Claims an available room and records the allocation, atomically.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` for an unknown room and
    /// `Error::RoomOccupied` if the room is not available.
    fn allocate(
        &mut self,
        student: &StudentName,
        room: &RoomNumber,
        at: DateTime<Utc>,
    ) -> Result<Allocation>;

    /// Lists every room.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn rooms(&self) -> Result<Vec<Room>>;

    /// Lists rooms that can still be allocated.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn available_rooms(&self) -> Result<Vec<Room>>;

    /// Lists all allocations, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn allocations(&self) -> Result<Vec<Allocation>>;

    /// Lists allocations for one room, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn allocations_for_room(&self, number: &RoomNumber) -> Result<Vec<Allocation>>;
}

impl RoomStore for Database {
    fn find_room(&self, number: &RoomNumber) -> Result<Option<Room>> {
        Self::get_room(self.connection(), number)
    }

    fn add_room(&mut self, room: &Room) -> Result<()> {
        self.insert_room(room)
    }

    fn allocate(
        &mut self,
        student: &StudentName,
        room: &RoomNumber,
        at: DateTime<Utc>,
    ) -> Result<Allocation> {
        self.allocate_room(student, room, at)
    }

    fn rooms(&self) -> Result<Vec<Room>> {
        Self::list_rooms(self.connection())
    }

    fn available_rooms(&self) -> Result<Vec<Room>> {
        Self::list_available_rooms(self.connection())
    }

    fn allocations(&self) -> Result<Vec<Allocation>> {
        Self::list_allocations(self.connection())
    }

    fn allocations_for_room(&self, number: &RoomNumber) -> Result<Vec<Allocation>> {
        Self::list_allocations_for_room(self.connection(), number)
    }
}

/// Allocates rooms to students over an injected store.
#[derive(Debug)]
pub struct AllocationService<S = Database> {
    store: S,
}

impl<S: RoomStore> AllocationService<S> {
    /// Creates a service that owns `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service and returns the store.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Allocates `room_number` to `student_name`.
    ///
    /// Both inputs are trimmed. Blank input is rejected before the store is
    /// touched.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if either input is blank
    /// - `Error::NotFound` if the room does not exist
    /// - `Error::RoomOccupied` if the room is already occupied
    /// - store errors (`Error::Database`, `Error::LockTimeout`) otherwise
    pub fn allocate_room(&mut self, student_name: &str, room_number: &str) -> Result<Allocation> {
        let student = StudentName::new(student_name)?;
        let room = RoomNumber::new(room_number)?;

        log::debug!("allocating room {room} to {student}");
        match self.store.allocate(&student, &room, Utc::now()) {
            Ok(allocation) => {
                log::info!("room {room} allocated to {student}");
                Ok(allocation)
            }
            Err(e) => {
                if e.is_conflict() || e.is_not_found() {
                    log::warn!("allocation of room {room} to {student} rejected: {e}");
                } else {
                    log::error!("allocation of room {room} to {student} failed: {e}");
                }
                Err(e)
            }
        }
    }

    /// Lists rooms whose status is `Available`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_available_rooms(&self) -> Result<Vec<Room>> {
        self.store.available_rooms()
    }

    /// Lists all allocations, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_allocations(&self) -> Result<Vec<Allocation>> {
        self.store.allocations()
    }

    /// Lists every room regardless of status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        self.store.rooms()
    }

    /// Lists allocations for one room.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for a blank room number, or a store error.
    pub fn list_allocations_for_room(&self, room_number: &str) -> Result<Vec<Allocation>> {
        let room = RoomNumber::new(room_number)?;
        self.store.allocations_for_room(&room)
    }

    /// Looks up one room, including its current status.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for a blank room number and
    /// `Error::NotFound` if no such room exists.
    pub fn room(&self, room_number: &str) -> Result<Room> {
        let number = RoomNumber::new(room_number)?;
        self.store
            .find_room(&number)?
            .ok_or_else(|| Error::NotFound {
                resource: format!("room {number}"),
            })
    }

    /// Registers an available room.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for a blank number or zero capacity, and
    /// `Error::DuplicateRoom` if the number is taken.
    pub fn add_room(&mut self, room_number: &str, capacity: u32) -> Result<Room> {
        let room = Room::new(room_number, capacity)?;
        self.store.add_room(&room)?;
        log::info!("registered room {} (capacity {capacity})", room.number());
        Ok(room)
    }
}
