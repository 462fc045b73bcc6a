//! Build script for hostel-cli.
//!
//! Generates the `hostel.1` man page into `OUT_DIR` with clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("hostel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Allocate hostel rooms to students")
        .long_about(
            "Command-line tool for allocating hostel rooms to students without double-booking",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("HOSTEL_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("HOSTEL_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("HOSTEL_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize hostel data directory and database")
                .long_about("Create the database, optionally a config template and seeded rooms"),
            Command::new("add-room")
                .about("Register a room")
                .long_about("Add a new room with the given capacity; it starts out available"),
            Command::new("allocate")
                .about("Allocate a room to a student")
                .long_about("Claim an available room for a student and record the allocation"),
            Command::new("rooms")
                .about("List available rooms")
                .long_about("List rooms that can still be allocated, or every room with --all"),
            Command::new("allocations")
                .about("List allocations, most recent first")
                .long_about("Display the allocation log, optionally for a single room"),
            Command::new("status")
                .about("Show the status of one room")
                .long_about("Display capacity and availability of a single room"),
            Command::new("shell")
                .about("Start an interactive allocation session")
                .long_about("Read allocation commands from standard input until quit"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the hostel data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("hostel.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
