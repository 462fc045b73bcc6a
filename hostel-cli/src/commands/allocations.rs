//! Allocations command implementation.
//!
//! Lists the allocation log, most recent first, optionally for one room.

use std::io;

use clap::Args;

use crate::error::CliError;
use crate::output::{write_allocations, FormatArg};
use crate::utils::{load_configuration, open_service, GlobalOptions};

/// List allocations.
#[derive(Args)]
pub struct AllocationsCommand {
    /// Only show allocations for this room
    #[arg(long, value_name = "ROOM")]
    pub room: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl AllocationsCommand {
    /// Execute the allocations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let allocations = match self.room {
            Some(ref room) => service.list_allocations_for_room(room)?,
            None => service.list_allocations()?,
        };

        let format = self.format.map_or_else(|| config.output_format(), Into::into);
        write_allocations(&mut io::stdout().lock(), &allocations, format)
    }
}
