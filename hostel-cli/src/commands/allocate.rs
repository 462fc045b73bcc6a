//! Allocate command implementation.
//!
//! Allocates a room to a student, then shows the refreshed allocation log.

use std::io;

use clap::Args;

use crate::error::CliError;
use crate::output::{write_allocations, FormatArg};
use crate::utils::{load_configuration, open_service, GlobalOptions};

/// Allocate a room to a student.
#[derive(Args)]
pub struct AllocateCommand {
    /// Student receiving the room
    #[arg(long, value_name = "NAME")]
    pub student: String,

    /// Room to allocate
    #[arg(long, value_name = "ROOM")]
    pub room: String,

    /// Output format for the allocation list
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl AllocateCommand {
    /// Execute the allocate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let allocation = service.allocate_room(&self.student, &self.room)?;

        // Only table output mixes prose into stdout
        let format = self.format.map_or_else(|| config.output_format(), Into::into);
        let confirmation = format!(
            "Room {} successfully allocated to {}",
            allocation.room_number(),
            allocation.student_name()
        );
        if format == hostel::OutputFormat::Table {
            println!("{confirmation}");
        } else if !global.quiet {
            eprintln!("{confirmation}");
        }

        let allocations = service.list_allocations()?;
        write_allocations(&mut io::stdout().lock(), &allocations, format)
    }
}
