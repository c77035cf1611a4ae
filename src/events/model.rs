//! # Event Data Model
//!
//! The sole entity of the service, its status enum, and the typed
//! change set used for partial updates.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Record attribute the store keys events by.
pub const KEY_ATTRIBUTE: &str = "eventId";

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Active,
        EventStatus::Cancelled,
        EventStatus::Completed,
    ];

    /// Wire form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Completed => "completed",
        }
    }

    /// Parse the wire form; `None` for anything outside the enum.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(EventStatus::Active),
            "cancelled" => Some(EventStatus::Cancelled),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

/// One event record.
///
/// `event_id` is immutable once created and acts as the store's
/// primary key; every other field is independently mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: i64,
    pub organizer: String,
    pub status: EventStatus,
}

/// Closed enumeration of the mutable event fields.
///
/// Partial updates are expressed as `(EventField, Value)` pairs, so
/// field dispatch is exhaustive instead of string-keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventField {
    Title,
    Description,
    Date,
    Location,
    Capacity,
    Organizer,
    Status,
}

impl EventField {
    pub const ALL: [EventField; 7] = [
        EventField::Title,
        EventField::Description,
        EventField::Date,
        EventField::Location,
        EventField::Capacity,
        EventField::Organizer,
        EventField::Status,
    ];

    /// Attribute name as persisted in the store.
    pub fn wire_name(&self) -> &'static str {
        match self {
            EventField::Title => "title",
            EventField::Description => "description",
            EventField::Date => "date",
            EventField::Location => "location",
            EventField::Capacity => "capacity",
            EventField::Organizer => "organizer",
            EventField::Status => "status",
        }
    }
}

/// A sparse change set: only the fields the caller wants changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
    pub organizer: Option<String>,
    pub status: Option<EventStatus>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }

    /// The provided fields as `(field, value)` pairs, in declaration
    /// order.
    pub fn changes(&self) -> Vec<(EventField, Value)> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push((EventField::Title, Value::String(title.clone())));
        }
        if let Some(description) = &self.description {
            changes.push((EventField::Description, Value::String(description.clone())));
        }
        if let Some(date) = &self.date {
            changes.push((EventField::Date, Value::String(date.clone())));
        }
        if let Some(location) = &self.location {
            changes.push((EventField::Location, Value::String(location.clone())));
        }
        if let Some(capacity) = self.capacity {
            changes.push((EventField::Capacity, Value::from(capacity)));
        }
        if let Some(organizer) = &self.organizer {
            changes.push((EventField::Organizer, Value::String(organizer.clone())));
        }
        if let Some(status) = self.status {
            changes.push((
                EventField::Status,
                Value::String(status.as_str().to_string()),
            ));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_forms() {
        for status in EventStatus::ALL {
            assert_eq!(EventStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(EventStatus::parse("archived"), None);

        assert_eq!(
            serde_json::to_value(EventStatus::Cancelled).unwrap(),
            json!("cancelled")
        );
    }

    #[test]
    fn test_event_round_trips_with_wire_names() {
        let event = Event {
            event_id: "e1".to_string(),
            title: "Conf".to_string(),
            description: "d".to_string(),
            date: "2024-12-15".to_string(),
            location: "SF".to_string(),
            capacity: 500,
            organizer: "Acme".to_string(),
            status: EventStatus::Active,
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["eventId"], "e1");
        assert_eq!(value["status"], "active");

        let back: Event = serde_json::from_value(value).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_patch_changes_in_declaration_order() {
        let patch = EventPatch {
            status: Some(EventStatus::Cancelled),
            title: Some("Summit".to_string()),
            ..Default::default()
        };

        let changes = patch.changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0], (EventField::Title, json!("Summit")));
        assert_eq!(changes[1], (EventField::Status, json!("cancelled")));
    }

    #[test]
    fn test_empty_patch() {
        assert!(EventPatch::default().is_empty());
        let patch = EventPatch {
            capacity: Some(600),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
