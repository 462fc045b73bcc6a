//! Main entry point for the hostel CLI.
//!
//! Allocates hostel rooms to students and lists rooms and allocations.
//! See `hostel --help` for the available commands.

use clap::Parser;
use hostel_cli::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if hostel::init_logger(cli.verbose, cli.quiet).install().is_err() {
        eprintln!("Warning: a logger was already installed");
    }

    let global = cli.global_options();

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::AddRoom(cmd) => cmd.execute(&global),
        Command::Allocate(cmd) => cmd.execute(&global),
        Command::Rooms(cmd) => cmd.execute(&global),
        Command::Allocations(cmd) => cmd.execute(&global),
        Command::Status(cmd) => cmd.execute(&global),
        Command::Shell(cmd) => cmd.execute(&global),
        Command::ShowDataDir(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
