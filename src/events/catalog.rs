//! # Event Catalog
//!
//! Operation facade over the repository and the update compiler. This
//! is where the per-operation control flow lives; the HTTP boundary
//! only validates input and dispatches here.

use super::errors::{EventError, EventResult};
use super::model::{Event, EventPatch, EventStatus};
use super::repository::EventRepository;
use super::update::compile_update;
use crate::observability::Logger;

/// The catalog of events, one per id.
pub struct EventCatalog {
    repository: EventRepository,
}

impl EventCatalog {
    pub fn new(repository: EventRepository) -> Self {
        Self { repository }
    }

    /// Opens a catalog over a fresh table with the given name.
    pub fn open(table_name: &str) -> Self {
        Self::new(EventRepository::open(table_name))
    }

    pub fn table_name(&self) -> &str {
        self.repository.table_name()
    }

    /// All events, optionally narrowed to one status.
    pub fn list(&self, status: Option<EventStatus>) -> EventResult<Vec<Event>> {
        self.repository.list(status)
    }

    /// Creates a new event; `DuplicateId` if the id is already taken.
    pub fn create(&self, event: Event) -> EventResult<Event> {
        self.repository.insert(&event)?;
        Logger::info("EVENT_CREATED", &[("event_id", &event.event_id)]);
        Ok(event)
    }

    /// Fetches one event; `NotFound` if the id is absent.
    pub fn fetch(&self, id: &str) -> EventResult<Event> {
        self.repository.get(id)?.ok_or(EventError::NotFound)
    }

    /// Applies a partial update and returns the full updated event.
    ///
    /// The id must resolve to an existing event (`NotFound` otherwise;
    /// updates never create records) and the patch must carry at least
    /// one field (`NoFieldsProvided`). Unspecified fields are left
    /// untouched.
    pub fn apply_patch(&self, id: &str, patch: &EventPatch) -> EventResult<Event> {
        if self.repository.get(id)?.is_none() {
            return Err(EventError::NotFound);
        }

        let input = compile_update(&patch.changes())?;
        let updated = self.repository.update(id, &input)?;

        let field_count = patch.changes().len().to_string();
        Logger::info(
            "EVENT_UPDATED",
            &[("event_id", id), ("fields", &field_count)],
        );
        Ok(updated)
    }

    /// Deletes one event; `NotFound` if the id is absent, including on
    /// a repeated delete of the same id.
    pub fn remove(&self, id: &str) -> EventResult<Event> {
        match self.repository.delete(id)? {
            Some(event) => {
                Logger::info("EVENT_DELETED", &[("event_id", id)]);
                Ok(event)
            }
            None => Err(EventError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Event {
        Event {
            event_id: id.to_string(),
            title: "Conf".to_string(),
            description: "d".to_string(),
            date: "2024-12-15".to_string(),
            location: "SF".to_string(),
            capacity: 500,
            organizer: "Acme".to_string(),
            status: EventStatus::Active,
        }
    }

    #[test]
    fn test_create_then_fetch() {
        let catalog = EventCatalog::open("events");
        let event = catalog.create(sample("e1")).unwrap();
        assert_eq!(catalog.fetch("e1").unwrap(), event);
    }

    #[test]
    fn test_fetch_missing() {
        let catalog = EventCatalog::open("events");
        assert_eq!(catalog.fetch("ghost"), Err(EventError::NotFound));
    }

    #[test]
    fn test_patch_missing_event_checked_before_empty_patch() {
        let catalog = EventCatalog::open("events");
        // Even an empty patch against a missing id reports NotFound.
        let err = catalog
            .apply_patch("ghost", &EventPatch::default())
            .unwrap_err();
        assert_eq!(err, EventError::NotFound);
    }

    #[test]
    fn test_empty_patch_rejected() {
        let catalog = EventCatalog::open("events");
        catalog.create(sample("e1")).unwrap();

        let err = catalog
            .apply_patch("e1", &EventPatch::default())
            .unwrap_err();
        assert_eq!(err, EventError::NoFieldsProvided);
        assert_eq!(catalog.fetch("e1").unwrap(), sample("e1"));
    }

    #[test]
    fn test_patch_touches_only_supplied_fields() {
        let catalog = EventCatalog::open("events");
        catalog.create(sample("e1")).unwrap();

        let patch = EventPatch {
            capacity: Some(600),
            ..Default::default()
        };
        let updated = catalog.apply_patch("e1", &patch).unwrap();

        let expected = Event {
            capacity: 600,
            ..sample("e1")
        };
        assert_eq!(updated, expected);
        assert_eq!(catalog.fetch("e1").unwrap(), expected);
    }

    #[test]
    fn test_remove_is_terminal() {
        let catalog = EventCatalog::open("events");
        catalog.create(sample("e1")).unwrap();

        catalog.remove("e1").unwrap();
        assert_eq!(catalog.remove("e1"), Err(EventError::NotFound));
        assert_eq!(catalog.fetch("e1"), Err(EventError::NotFound));
    }
}
