//! Property tests for transition application and summary arithmetic

use dorm_engine::{apply_transition, summarize, FloorSelector, MoveClass, Transition};
use dorm_table::{RoomRow, RoomTable};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("퇴소".to_string()),
        Just("외박".to_string()),
        Just("신규".to_string()),
        Just("이동".to_string()),
    ]
}

fn arb_room() -> impl Strategy<Value = String> {
    // Building letter + floor digit + room digits, e.g. "A301"
    ("[A-C]", "[1-4]", "[0-9]{2}").prop_map(|(b, f, r)| format!("{b}{f}{r}"))
}

fn arb_row() -> impl Strategy<Value = RoomRow> {
    (
        arb_room(),
        "[A-Za-z]{0,6}",
        arb_status(),
        prop_oneof![Just(String::new()), arb_room()],
        arb_status(),
        prop_oneof![Just(String::new()), arb_room()],
    )
        .prop_map(|(room, name, status, prev_room, prev_status, new_room)| RoomRow {
            room,
            name,
            status,
            prev_room,
            prev_status,
            new_room,
        })
}

fn arb_table() -> impl Strategy<Value = RoomTable> {
    prop::collection::vec(arb_row(), 1..12).prop_map(RoomTable::from_rows)
}

fn arb_single_row_transition() -> impl Strategy<Value = Transition> {
    prop_oneof![
        Just(Transition::Reset),
        Just(Transition::NewCheckIn),
        Just(Transition::OvernightLeave),
        Just(Transition::CheckOut),
    ]
}

proptest! {
    #[test]
    fn single_row_transitions_change_exactly_one_row(
        table in arb_table(),
        pick in any::<prop::sample::Index>(),
        transition in arb_single_row_transition(),
        name in "[A-Za-z]{1,6}",
    ) {
        let room = table.rows()[pick.index(table.len())].room.clone();
        let idx = table.position(&room).unwrap();
        let next = apply_transition(&table, &room, transition, &name, None).unwrap();

        prop_assert_eq!(next.len(), table.len());
        for (i, (before, after)) in table.rows().iter().zip(next.rows()).enumerate() {
            // Room numbers never change, and no row but the first match does.
            prop_assert_eq!(&before.room, &after.room);
            if i != idx {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn reset_is_idempotent(
        table in arb_table(),
        pick in any::<prop::sample::Index>(),
    ) {
        let room = table.rows()[pick.index(table.len())].room.clone();
        let once = apply_transition(&table, &room, Transition::Reset, "", None).unwrap();
        let twice = apply_transition(&once, &room, Transition::Reset, "", None).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn move_destination_records_origin(
        table in arb_table(),
        origin_pick in any::<prop::sample::Index>(),
        target_pick in any::<prop::sample::Index>(),
        name in "[A-Za-z]{1,6}",
    ) {
        let origin = table.rows()[origin_pick.index(table.len())].room.clone();
        let target = table.rows()[target_pick.index(table.len())].room.clone();
        prop_assume!(origin != target);

        let old_status = table.get(&origin).unwrap().status.clone();
        let next = apply_transition(&table, &origin, Transition::Move, &name, Some(&target))
            .unwrap();

        let dest = &next.rows()[table.position(&target).unwrap()];
        prop_assert_eq!(&dest.prev_room, &origin);
        prop_assert_eq!(&dest.prev_status, &old_status);
        prop_assert_eq!(&dest.new_room, &target);
        prop_assert_eq!(&dest.name, &name);

        let changed = table
            .rows()
            .iter()
            .zip(next.rows())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(changed <= 2, "a move touches at most two rows");
    }

    #[test]
    fn summary_partition_arithmetic_holds(
        table in arb_table(),
        selector in arb_room().prop_map(|r| FloorSelector::new(r.chars().take(2).collect::<String>())),
    ) {
        let summary = summarize(&table, &selector);

        let count = |class: MoveClass| summary.moves.iter().filter(|m| m.class == class).count();
        let inbound = count(MoveClass::Inbound);
        let outbound = count(MoveClass::Outbound);
        let internal = count(MoveClass::Internal);
        let unrelated = count(MoveClass::Unrelated);

        prop_assert_eq!(summary.plus, inbound + internal);
        prop_assert_eq!(summary.minus, outbound + internal);
        // Every move row falls in exactly one class.
        prop_assert_eq!(
            inbound + outbound + internal + unrelated,
            summary.moves.len()
        );

        let move_rows = table.rows().iter().filter(|r| r.status == "이동").count();
        prop_assert_eq!(summary.moves.len(), move_rows);
    }
}
