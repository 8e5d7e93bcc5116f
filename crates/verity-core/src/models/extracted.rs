use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain events detected by keyword lexicons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Death,
    Earthquake,
    Fire,
    Accident,
    Election,
    Resignation,
}

impl EventType {
    /// All event types in detection order.
    pub const ALL: [EventType; 6] = [
        Self::Death,
        Self::Earthquake,
        Self::Fire,
        Self::Accident,
        Self::Election,
        Self::Resignation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Death => "death",
            Self::Earthquake => "earthquake",
            Self::Fire => "fire",
            Self::Accident => "accident",
            Self::Election => "election",
            Self::Resignation => "resignation",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event type together with the trigger keyword that fired it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedEvent {
    pub event_type: EventType,
    pub keyword: String,
}

/// Kind of span produced by an entity tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Person,
    Location,
    Organization,
    Date,
}

/// A span harvested by an entity tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl TaggedSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Entities and events extracted from one input text.
///
/// Every list keeps first-seen order and holds no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    pub persons: Vec<String>,
    pub locations: Vec<String>,
    pub organizations: Vec<String>,
    pub dates: Vec<String>,
    pub events: Vec<DetectedEvent>,
}

impl ExtractedEntities {
    /// Add a tagged span to the list matching its kind.
    pub fn add_span(&mut self, span: TaggedSpan) {
        let list = match span.kind {
            SpanKind::Person => &mut self.persons,
            SpanKind::Location => &mut self.locations,
            SpanKind::Organization => &mut self.organizations,
            SpanKind::Date => &mut self.dates,
        };
        push_unique(list, span.text);
    }

    /// Whether a person equal to `name` (case-insensitively) is already present.
    pub fn has_person(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.persons.iter().any(|p| p.to_lowercase() == needle)
    }

    pub fn push_person(&mut self, name: impl Into<String>) {
        push_unique(&mut self.persons, name.into());
    }

    pub fn push_event(&mut self, event_type: EventType, keyword: impl Into<String>) {
        if !self.has_event(event_type) {
            self.events.push(DetectedEvent {
                event_type,
                keyword: keyword.into(),
            });
        }
    }

    pub fn has_event(&self, event_type: EventType) -> bool {
        self.events.iter().any(|e| e.event_type == event_type)
    }

    /// No persons and no events were found.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.events.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    let trimmed = value.trim();
    if trimmed.is_empty() || list.iter().any(|v| v == trimmed) {
        return;
    }
    list.push(trimmed.to_string());
}
