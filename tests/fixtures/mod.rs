// Test fixtures - reusable test data
// Provides consistent board data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use week_board::board::{BoardController, DragPayload, DragSource, ManualClock};
use week_board::models::date_key::DateKey;
use week_board::models::event::{Event, EventId};
use week_board::models::settings::BoardSettings;
use week_board::services::event_store::{EventSnapshot, EventStore};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 11 2024 (the board's default start)
    pub fn mon_mar_11_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    pub fn tue_mar_12_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
    }

    /// Thursday, Feb 29 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn key(date: NaiveDate) -> DateKey {
        DateKey::from(date)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn numbered(id: u64) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Event {}", id))
            .time("10:00 AM - 11:00 AM")
            .build()
            .unwrap()
    }

    pub fn e1() -> Event {
        numbered(1)
    }

    /// Payload of `event`'s card as it is picked up
    pub fn pick_up(event: Event) -> DragPayload {
        DragSource::new(event).begin()
    }
}

/// `{2024-03-11: [E1], 2024-03-12: []}`
pub fn two_day_store() -> EventStore {
    let mut snapshot = EventSnapshot::new();
    snapshot.insert(dates::key(dates::mon_mar_11_2024()), vec![events::e1()]);
    snapshot.insert(dates::key(dates::tue_mar_12_2024()), vec![]);
    EventStore::from_snapshot(snapshot)
}

/// A mounted and primed board driven by a manual clock
pub fn ready_board(store: EventStore, is_narrow: bool) -> (ManualClock, BoardController<ManualClock>) {
    let clock = ManualClock::new();
    let mut board = BoardController::new(clock.clone(), store, &BoardSettings::default(), is_narrow);
    board.mount();
    board.tick();
    (clock, board)
}

pub fn ids(events: &[Event]) -> Vec<EventId> {
    events.iter().map(|e| e.id).collect()
}
