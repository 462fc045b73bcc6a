//! Add-room command implementation.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_service, GlobalOptions};

/// Register a new available room.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub room: String,

    /// Number of beds
    #[arg(long, value_name = "N")]
    pub capacity: u32,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut service = open_service(global, &config)?;

        let room = service.add_room(&self.room, self.capacity)?;

        if !global.quiet {
            println!(
                "Room {} added with capacity {}",
                room.number(),
                room.capacity()
            );
        }
        Ok(())
    }
}
