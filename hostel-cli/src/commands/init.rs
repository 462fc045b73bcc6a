//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the hostel data directory and database.

use clap::Parser;
use hostel::operations::{init_database, InitOptions};

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};

/// Initialize hostel data directory and database.
#[derive(Parser)]
#[command(about = "Initialize hostel data directory and database")]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Register the rooms listed in the configuration file
    #[arg(long)]
    seed_from_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here: this command is the explicit
    /// initialization.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        let rooms = if self.seed_from_config {
            load_configuration(global)?
                .seed_rooms()
                .map_err(|e| CliError::Config(e.to_string()))?
        } else {
            Vec::new()
        };

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_rooms(rooms);

        let result = init_database(&options)?;

        println!("Initialized hostel in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if self.seed_from_config {
            println!("  - Registered {} rooms", result.rooms_seeded);
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
