//! Administrative operations on the data directory.
//!
//! Day-to-day room allocation goes through
//! [`AllocationService`](crate::AllocationService); this module holds the
//! one-off setup steps a front end runs before that.

pub mod init;

pub use init::{init_database, InitOptions, InitResult};
