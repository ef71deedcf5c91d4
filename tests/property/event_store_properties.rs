// Property tests for event moves
// Any sequence of moves keeps every id in exactly one bucket

use std::collections::HashMap;

use proptest::prelude::*;
use week_board::models::date_key::DateKey;
use week_board::models::event::{Event, EventId};
use week_board::services::event_store::{EventSnapshot, EventStore};

fn key(offset: u32) -> DateKey {
    DateKey::from_ymd(2024, 3, 1 + offset).unwrap()
}

fn event(id: u64) -> Event {
    Event::new(EventId(id), format!("Event {}", id)).unwrap()
}

fn seeded(count: u64) -> EventStore {
    let mut snapshot = EventSnapshot::new();
    for id in 0..count {
        snapshot.entry(key((id % 5) as u32)).or_default().push(event(id));
    }
    EventStore::from_snapshot(snapshot)
}

fn occurrences(store: &EventStore) -> HashMap<EventId, usize> {
    let mut counts = HashMap::new();
    for (_, bucket) in store.iter() {
        for e in bucket {
            *counts.entry(e.id).or_insert(0) += 1;
        }
    }
    counts
}

proptest! {
    /// Property: no id ever appears in more than one bucket, or twice in one
    #[test]
    fn prop_at_most_one_bucket(
        moves in prop::collection::vec((0..12u64, 0..10u32), 0..60),
    ) {
        let mut store = seeded(8);
        for (id, day) in moves {
            store.move_event(event(id), key(day));
            prop_assert!(occurrences(&store).values().all(|&n| n == 1));
        }
    }

    /// Property: after a move the event is found in the target and nowhere else
    #[test]
    fn prop_move_is_atomic(
        id in 0..8u64,
        day in 0..10u32,
    ) {
        let mut store = seeded(8);
        let before = store.len();
        store.move_event(event(id), key(day));

        prop_assert!(store.events_for(key(day)).iter().any(|e| e.id == EventId(id)));
        prop_assert_eq!(store.date_of(EventId(id)), Some(key(day)));
        prop_assert_eq!(store.len(), before);
        let last = store.events_for(key(day)).last().map(|e| e.id);
        prop_assert_eq!(last, Some(EventId(id)));
    }
}
