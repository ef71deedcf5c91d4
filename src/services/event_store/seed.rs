use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;

use super::{EventSnapshot, EventStore};
use crate::models::date_key::DateKey;
use crate::models::event::{Event, EventId};

/// Read a `{ "yyyy-MM-dd": [event, ...] }` snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<EventSnapshot> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed events from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(snapshot)
}

/// Load the seed at `path` when given, falling back to the built-in sample week.
pub fn load_store(path: Option<&Path>) -> EventStore {
    let snapshot = match path {
        Some(path) => load_snapshot(path).unwrap_or_else(|err| {
            log::warn!("Using sample events, seed could not be loaded: {:#}", err);
            sample_snapshot()
        }),
        None => sample_snapshot(),
    };

    let store = EventStore::from_snapshot(snapshot);
    log::info!("Seeded board with {} events", store.len());
    store
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize seed events from {}",
        path.display()
    ))
}

/// The demo week shown when no seed file is configured.
pub fn sample_snapshot() -> EventSnapshot {
    let rows: [(&str, u64, &str, &str, &str); 8] = [
        ("2024-03-11", 1, "Coffee with Alex", "09:00 AM - 09:30 AM", "Catch up on the quarterly roadmap."),
        ("2024-03-11", 2, "Team Standup", "10:00 AM - 10:15 AM", "Daily sync with the product team."),
        ("2024-03-12", 3, "Yoga Session", "07:00 AM - 08:00 AM", "Morning flow at the studio."),
        ("2024-03-13", 4, "Product Demo", "02:00 PM - 03:00 PM", "Show the new board to stakeholders."),
        ("2024-03-14", 5, "Client Meeting", "11:00 AM - 12:00 PM", "Contract review and next steps."),
        ("2024-03-15", 6, "Lunch with Sam", "12:30 PM - 01:30 PM", "Try the new ramen place."),
        ("2024-03-16", 7, "Hiking Trip", "08:00 AM - 02:00 PM", "Trail loop by the lake."),
        ("2024-03-17", 8, "Family Dinner", "07:00 PM - 09:00 PM", "Sunday dinner at home."),
    ];

    let mut snapshot = EventSnapshot::new();
    for (date, id, title, time, description) in rows {
        let Ok(key) = date.parse::<DateKey>() else {
            continue;
        };
        let event = Event {
            id: EventId(id),
            title: title.to_string(),
            time: time.to_string(),
            description: description.to_string(),
            image_url: Some(format!("https://fastly.picsum.photos/id/{}/400/200.jpg", 10 + id)),
        };
        snapshot.entry(key).or_default().push(event);
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_covers_one_week() {
        let store = EventStore::from_snapshot(sample_snapshot());
        assert_eq!(store.len(), 8);
        assert_eq!(store.iter().count(), 7);
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"2024-03-11": [{{"id": 1, "title": "E1"}}], "2024-03-12": []}}"#
        )
        .unwrap();

        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[&"2024-03-11".parse::<DateKey>().unwrap()][0].title, "E1");
    }

    #[test]
    fn test_bad_seed_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_snapshot(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to deserialize seed events"));
    }

    #[test]
    fn test_load_store_falls_back_to_sample() {
        let store = load_store(Some(Path::new("/definitely/missing/seed.json")));
        assert_eq!(store.len(), 8);
    }
}
