//! In-memory ownership of event-to-date associations.
//!
//! The store is the single place an event's date can change. Every mutation
//! goes through [`EventStore::move_event`], which keeps each event id in at
//! most one bucket and bumps a revision counter the UI watches.

pub mod seed;

use std::collections::BTreeMap;

use crate::models::date_key::DateKey;
use crate::models::event::{Event, EventId};

/// Snapshot shape used to seed a store: date key to ordered events
pub type EventSnapshot = BTreeMap<DateKey, Vec<Event>>;

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    buckets: BTreeMap<DateKey, Vec<Event>>,
    revision: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an injected snapshot.
    ///
    /// Snapshots may come from hand-edited seed files, so an id listed under
    /// more than one date keeps only its first occurrence.
    pub fn from_snapshot(snapshot: EventSnapshot) -> Self {
        let mut store = Self::new();
        for (key, events) in snapshot {
            let bucket = store.buckets.entry(key).or_default();
            for event in events {
                if bucket.iter().any(|e| e.id == event.id) {
                    log::warn!("Dropping duplicate seed entry {} on {}", event.id, key);
                    continue;
                }
                bucket.push(event);
            }
        }

        let mut seen = std::collections::HashSet::new();
        for (key, bucket) in store.buckets.iter_mut() {
            bucket.retain(|event| {
                let first = seen.insert(event.id);
                if !first {
                    log::warn!("Event {} already seeded elsewhere, ignoring copy on {}", event.id, key);
                }
                first
            });
        }
        store
    }

    /// Reassign `event` to `target`.
    ///
    /// The id is stripped from every bucket first, so stale callers cannot
    /// create duplicates. Unknown ids simply get appended.
    pub fn move_event(&mut self, event: Event, target: DateKey) {
        let mut removed_from = None;
        for (key, bucket) in self.buckets.iter_mut() {
            let before = bucket.len();
            bucket.retain(|e| e.id != event.id);
            if bucket.len() != before {
                removed_from = Some(*key);
            }
        }

        log::debug!(
            "Moving event {} ({}) from {} to {}",
            event.id,
            event.title,
            removed_from.map_or_else(|| "nowhere".to_string(), |k| k.to_string()),
            target
        );

        self.buckets.entry(target).or_default().push(event);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Events on `key` in display order. Empty when the date has none.
    pub fn events_for(&self, key: DateKey) -> &[Event] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, id: EventId) -> Option<(DateKey, &Event)> {
        self.buckets
            .iter()
            .find_map(|(key, bucket)| bucket.iter().find(|e| e.id == id).map(|e| (*key, e)))
    }

    pub fn date_of(&self, id: EventId) -> Option<DateKey> {
        self.find(id).map(|(key, _)| key)
    }

    /// Total number of events across all dates
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty buckets in date order
    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &[Event])> {
        self.buckets
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(key, bucket)| (*key, bucket.as_slice()))
    }

    /// Incremented after every move; lets views detect that they need to redraw
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
