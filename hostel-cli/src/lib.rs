//! Library exports for hostel-cli.
//!
//! The binary is a thin wrapper over these modules; exposing them lets the
//! integration tests and tooling reach the command definitions.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
