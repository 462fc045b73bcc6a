//! CLI command implementations.
//!
//! - `init`: Initialize the data directory and database
//! - `add-room`: Register a room
//! - `allocate`: Allocate a room to a student
//! - `rooms`: List available (or all) rooms
//! - `allocations`: List allocations, most recent first
//! - `status`: Show one room
//! - `shell`: Interactive session backed by a store worker
//! - `show-data-dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod add_room;
pub mod allocate;
pub mod allocations;
pub mod completions;
pub mod init;
pub mod rooms;
pub mod shell;
pub mod show_data_dir;
pub mod status;

pub use add_room::AddRoomCommand;
pub use allocate::AllocateCommand;
pub use allocations::AllocationsCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use rooms::RoomsCommand;
pub use shell::ShellCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use status::StatusCommand;
