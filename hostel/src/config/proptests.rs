//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, RoomSeed};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn seed_strategy() -> impl Strategy<Value = RoomSeed> {
    ("[A-Z][0-9]{1,3}", 1u32..=8).prop_map(|(room_number, capacity)| RoomSeed {
        room_number,
        capacity,
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(1u64..=600),
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
        prop::option::of(prop::collection::vec(seed_strategy(), 0..5)),
    )
        .prop_map(
            |(busy_timeout_seconds, disable_autoinit, output_format, rooms)| Config {
                busy_timeout_seconds,
                disable_autoinit,
                output_format,
                rooms,
            },
        )
}

proptest! {
    #[test]
    fn prop_merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    #[test]
    fn prop_merge_is_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_higher_layer_wins(base in config_strategy(), layer in config_strategy()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &layer);

        if layer.busy_timeout_seconds.is_some() {
            prop_assert_eq!(merged.busy_timeout_seconds, layer.busy_timeout_seconds);
        } else {
            prop_assert_eq!(merged.busy_timeout_seconds, base.busy_timeout_seconds);
        }
        if layer.rooms.is_some() {
            prop_assert_eq!(&merged.rooms, &layer.rooms);
        }
    }

    #[test]
    fn prop_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    #[test]
    fn prop_validation_detects_duplicates(seeds in prop::collection::vec(seed_strategy(), 1..6)) {
        let mut unique = std::collections::HashSet::new();
        let has_duplicate = !seeds.iter().all(|s| unique.insert(s.room_number.clone()));
        let config = Config { rooms: Some(seeds), ..Default::default() };
        prop_assert_eq!(ConfigValidator::validate(&config).is_err(), has_duplicate);
    }
}
