//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] owns a temporary data directory so tests never touch
//! the user's real hostel database.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the hostel data directory (created on first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with a not-yet-existing data directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("hostel-data");
        Self { temp_dir, data_dir }
    }

    /// Create a test environment with the given rooms registered.
    pub fn with_rooms(rooms: &[(&str, u32)]) -> Self {
        let env = Self::new();
        for (room, capacity) in rooms {
            env.add_room(room, *capacity);
        }
        env
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hostel").expect("Failed to find hostel binary");
        cmd.env_remove("HOSTEL_DATA_DIR")
            .env_remove("HOSTEL_BUSY_TIMEOUT")
            .env_remove("HOSTEL_DISABLE_AUTOINIT")
            .env_remove("HOSTEL_OUTPUT_FORMAT")
            .env_remove("HOSTEL_LOG_MODE");
        cmd
    }

    /// Get a command builder with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("hostel.db")
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.yaml")
    }

    /// Temporary root directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a configuration file into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Register a room, panicking on failure.
    pub fn add_room(&self, room: &str, capacity: u32) {
        self.command()
            .args(["add-room", room, "--capacity"])
            .arg(capacity.to_string())
            .assert()
            .success();
    }

    /// Run `hostel allocate` and return its output.
    pub fn allocate(&self, student: &str, room: &str) -> std::process::Output {
        self.command()
            .args(["allocate", "--student", student, "--room", room])
            .output()
            .expect("Failed to run allocate")
    }

    /// Run a command and return its stdout, panicking on failure.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
