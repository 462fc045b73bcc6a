//! Rooms command implementation.
//!
//! Lists available rooms, or every room with `--all`.

use std::io;

use clap::Args;

use crate::error::CliError;
use crate::output::{write_rooms, FormatArg, RoomListing};
use crate::utils::{load_configuration, open_service, GlobalOptions};

/// List available rooms.
#[derive(Args)]
pub struct RoomsCommand {
    /// Include occupied rooms
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let service = open_service(global, &config)?;

        let (rooms, listing) = if self.all {
            (service.list_rooms()?, RoomListing::All)
        } else {
            (service.list_available_rooms()?, RoomListing::Available)
        };

        let format = self.format.map_or_else(|| config.output_format(), Into::into);
        write_rooms(&mut io::stdout().lock(), &rooms, listing, format)
    }
}
