//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AddRoomCommand, AllocateCommand, AllocationsCommand, CompletionsCommand, InitCommand,
    RoomsCommand, ShellCommand, ShowDataDirCommand, StatusCommand,
};
use crate::utils::{parse_busy_timeout, GlobalOptions};

/// Command-line tool for allocating hostel rooms to students.
#[derive(Parser)]
#[command(name = "hostel")]
#[command(version, about = "Allocate hostel rooms to students", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "HOSTEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "HOSTEL_BUSY_TIMEOUT",
        value_parser = parse_busy_timeout
    )]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "HOSTEL_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Options shared by every command.
    #[must_use]
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
            disable_autoinit: self.disable_autoinit,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize hostel data directory and database
    Init(InitCommand),

    /// Register a room
    AddRoom(AddRoomCommand),

    /// Allocate a room to a student
    Allocate(AllocateCommand),

    /// List available rooms
    Rooms(RoomsCommand),

    /// List allocations, most recent first
    Allocations(AllocationsCommand),

    /// Show the status of one room
    Status(StatusCommand),

    /// Start an interactive allocation session
    Shell(ShellCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
