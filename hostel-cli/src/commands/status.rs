//! Status command implementation.

use std::io;

use clap::Args;

use crate::error::CliError;
use crate::output::{write_rooms, FormatArg, RoomListing};
use crate::utils::{load_configuration, open_service, GlobalOptions};

/// Show the status of one room.
#[derive(Args)]
pub struct StatusCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub room: String,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let room = service.room(&self.room)?;

        let format = self.format.map_or_else(|| config.output_format(), Into::into);
        write_rooms(&mut io::stdout().lock(), &[room], RoomListing::All, format)
    }
}
