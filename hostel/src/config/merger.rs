//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use hostel::config::{Config, ConfigMerger};
///
/// let low = Config { busy_timeout_seconds: Some(5), ..Default::default() };
/// let high = Config { busy_timeout_seconds: Some(30), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.busy_timeout_seconds, Some(30));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced when set in `source`. The seed room list is
    /// replaced as a whole, never concatenated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.rooms.is_some() {
            target.rooms.clone_from(&source.rooms);
        }
    }
}
