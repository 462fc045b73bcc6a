//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::room::Room;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use hostel::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let bad = Config { busy_timeout_seconds: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if config.busy_timeout_seconds == Some(0) {
            return Err(Error::Validation {
                field: "busy_timeout_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if let Some(ref rooms) = config.rooms {
            let mut seen = HashSet::new();
            for (i, seed) in rooms.iter().enumerate() {
                let room =
                    Room::new(&seed.room_number, seed.capacity).map_err(|e| Error::Validation {
                        field: format!("rooms[{i}].{}", e.field),
                        message: e.message,
                    })?;
                if !seen.insert(room.number().clone()) {
                    return Err(Error::Validation {
                        field: format!("rooms[{i}].room_number"),
                        message: format!("Duplicate room number: {}", room.number()),
                    });
                }
            }
        }

        Ok(())
    }
}
