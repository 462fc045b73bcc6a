//! Configuration integration tests.
//!
//! Exercises file loading, environment overrides and seeding together.

use std::fs;

use hostel::config::{ConfigBuilder, OutputFormat, CONFIG_FILE_NAME};
use hostel::operations::{init_database, InitOptions};
use hostel::{Database, DatabaseConfig};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_seed_rooms_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "rooms:\n  - room_number: A1\n    capacity: 2\n  - room_number: B1\n    capacity: 4\n",
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_data_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    let result = init_database(
        &InitOptions::new(temp.path().to_path_buf()).with_rooms(config.seed_rooms().unwrap()),
    )
    .unwrap();
    assert_eq!(result.rooms_seeded, 2);

    let db = Database::open(DatabaseConfig::in_data_dir(temp.path())).unwrap();
    let rooms = Database::list_rooms(db.connection()).unwrap();
    let numbers: Vec<_> = rooms.iter().map(|r| r.number().as_str()).collect();
    assert_eq!(numbers, ["A1", "B1"]);
}

#[test]
fn test_duplicate_seed_rooms_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "rooms:\n  - room_number: A1\n    capacity: 2\n  - room_number: A1\n    capacity: 1\n",
    )
    .unwrap();

    let err = ConfigBuilder::new()
        .with_data_dir(temp.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_unknown_field_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "port_range: 5\n").unwrap();

    let err = ConfigBuilder::new()
        .with_data_dir(temp.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, hostel::Error::Configuration(_)));
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(CONFIG_FILE_NAME), "output_format: csv\n").unwrap();

    std::env::set_var("HOSTEL_OUTPUT_FORMAT", "tsv");
    let result = ConfigBuilder::new().with_data_dir(temp.path()).build();
    std::env::remove_var("HOSTEL_OUTPUT_FORMAT");

    assert_eq!(result.unwrap().output_format(), OutputFormat::Tsv);
}
