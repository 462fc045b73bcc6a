//! Configuration system for hostel.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`HOSTEL_*`)
//! 3. `<data_dir>/config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use hostel::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/var/lib/hostel")
//!     .build()
//!     .unwrap();
//!
//! println!("busy timeout: {:?}", config.busy_timeout());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, RoomSeed, DEFAULT_BUSY_TIMEOUT_SECONDS};
pub use validator::ConfigValidator;
