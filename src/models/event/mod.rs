// Event module
// Board event record; the board only ever changes which date an event sits on

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an event across moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Calendar event shown as a card on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    /// Free-form time text, e.g. "10:00 AM - 11:00 AM"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use week_board::models::event::{Event, EventId};
    ///
    /// let event = Event::new(EventId(1), "Team Standup").unwrap();
    /// assert_eq!(event.title, "Team Standup");
    /// ```
    pub fn new(id: EventId, title: impl Into<String>) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(Self {
            id,
            title,
            time: String::new(),
            description: String::new(),
            image_url: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if let Some(ref url) = self.image_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err("Image URL must be http(s)".to_string());
            }
        }

        Ok(())
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    time: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(EventId(id));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;

        let event = Event {
            id,
            title,
            time: self.time.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image_url: self.image_url,
        };

        event.validate()?;
        Ok(event)
    }
}
