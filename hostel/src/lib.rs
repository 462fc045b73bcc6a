#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hostel
//!
//! A library for allocating hostel rooms to students.
//!
//! Rooms carry a capacity and an occupancy status; allocations are an
//! append-only log of which student received which room and when. A room
//! holds at most one allocation: the claim is a conditional update inside the
//! same transaction as the log append, so concurrent requests for the same
//! room produce exactly one success.
//!
//! ## Core Types
//!
//! - [`Room`], [`RoomNumber`] and [`RoomStatus`]: lodging units
//! - [`Allocation`] and [`StudentName`]: allocation records
//! - [`AllocationService`]: validation and the allocate/list operations
//! - [`AllocationWorker`]: runs the service on a background thread
//! - [`Database`] and [`DatabaseConfig`]: the `SQLite` store
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hostel::{Room, RoomStatus};
//!
//! let room = Room::new(" A1 ", 2).unwrap();
//! assert_eq!(room.number().as_str(), "A1");
//! assert_eq!(room.status(), RoomStatus::Available);
//! assert!(Room::new("A2", 0).is_err());
//! ```

pub mod allocation;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod room;
pub mod service;
pub mod worker;

// Re-export key types at crate root for convenience
pub use allocation::{Allocation, StudentName};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use room::{Room, RoomNumber, RoomStatus};
pub use service::{AllocationService, RoomStore};
pub use worker::{AllocationWorker, Pending, Request, Response};
