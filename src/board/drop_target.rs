use super::drag::DragPayload;
use crate::models::date_key::DateKey;
use crate::models::event::EventId;
use crate::services::event_store::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved { event: EventId, to: DateKey },
    /// Payload was not an event; nothing changed
    Ignored,
}

/// Drop surface for one visible date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    date_key: DateKey,
    is_over: bool,
}

impl DropTarget {
    pub fn new(date_key: DateKey) -> Self {
        Self {
            date_key,
            is_over: false,
        }
    }

    pub fn date_key(&self) -> DateKey {
        self.date_key
    }

    /// Highlight state only, never touches the store
    pub fn on_hover_change(&mut self, is_over: bool) {
        self.is_over = is_over;
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn on_drop(&mut self, store: &mut EventStore, payload: DragPayload) -> DropOutcome {
        self.is_over = false;
        match payload {
            DragPayload::Event(event) => {
                let id = event.id;
                store.move_event(event, self.date_key);
                DropOutcome::Moved {
                    event: id,
                    to: self.date_key,
                }
            }
            DragPayload::Foreign { kind } => {
                log::debug!("Ignoring '{}' payload dropped on {}", kind, self.date_key);
                DropOutcome::Ignored
            }
        }
    }
}
