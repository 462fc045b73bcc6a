//! Property-based tests for room input validation.

use super::{Room, RoomNumber, RoomStatus};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Whitespace-only input never yields a room number
    #[test]
    fn blank_room_numbers_rejected(s in "[ \t\n\r]{0,12}") {
        prop_assert!(RoomNumber::new(&s).is_err());
    }

    // Padding around a valid number is stripped
    #[test]
    fn room_number_trimmed(core in "[A-Za-z0-9-]{1,10}", left in " {0,3}", right in "\t{0,3}") {
        let number = RoomNumber::new(format!("{left}{core}{right}")).unwrap();
        prop_assert_eq!(number.as_str(), core.as_str());
    }

    // Any positive capacity is accepted and the room starts available
    #[test]
    fn positive_capacity_accepted(capacity in 1u32..10_000) {
        let room = Room::new("A1", capacity).unwrap();
        prop_assert_eq!(room.capacity(), capacity);
        prop_assert_eq!(room.status(), RoomStatus::Available);
    }

    // Status parsing ignores case
    #[test]
    fn status_parse_ignores_case(mask in prop::collection::vec(any::<bool>(), 8)) {
        let word: String = "occupied"
            .chars()
            .zip(mask.iter())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(RoomStatus::parse(&word).unwrap(), RoomStatus::Occupied);
    }
}
