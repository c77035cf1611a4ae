//! # Event Repository
//!
//! Store adapter: typed event operations over one [`Table`]. The
//! repository owns the JSON encoding of records and maps backend
//! faults into the domain taxonomy. It performs no retries; a single
//! backend fault fails the call.

use serde_json::Value;

use super::errors::{EventError, EventResult};
use super::model::{Event, EventStatus, KEY_ATTRIBUTE};
use crate::store::{EqFilter, Table, UpdateInput};

/// Typed adapter over the backing table.
pub struct EventRepository {
    table: Table,
}

impl EventRepository {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// Opens a repository over a fresh table with the given name.
    pub fn open(table_name: &str) -> Self {
        Self::new(Table::new(table_name, KEY_ATTRIBUTE))
    }

    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    /// Fetch by primary key.
    pub fn get(&self, id: &str) -> EventResult<Option<Event>> {
        match self.table.get_item(id)? {
            Some(record) => Ok(Some(decode(record)?)),
            None => Ok(None),
        }
    }

    /// Conditional insert of a new event; `DuplicateId` if the key is
    /// already taken. Check and write happen as one store call.
    pub fn insert(&self, event: &Event) -> EventResult<()> {
        self.table.put_item_if_absent(encode(event)?)?;
        Ok(())
    }

    /// Removal by primary key, returning the removed event if one
    /// existed.
    pub fn delete(&self, id: &str) -> EventResult<Option<Event>> {
        match self.table.delete_item(id)? {
            Some(record) => Ok(Some(decode(record)?)),
            None => Ok(None),
        }
    }

    /// Full-table listing, optionally narrowed to one status.
    pub fn list(&self, status: Option<EventStatus>) -> EventResult<Vec<Event>> {
        let filter =
            status.map(|s| EqFilter::new("status", Value::String(s.as_str().to_string())));
        self.table
            .scan(filter.as_ref())?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Executes a compiled update and decodes the post-update record.
    pub fn update(&self, id: &str, input: &UpdateInput) -> EventResult<Event> {
        decode(self.table.update_item(id, input)?)
    }
}

fn encode(event: &Event) -> EventResult<Value> {
    serde_json::to_value(event)
        .map_err(|e| EventError::Store(format!("event does not encode: {e}")))
}

fn decode(record: Value) -> EventResult<Event> {
    serde_json::from_value(record)
        .map_err(|e| EventError::Store(format!("stored record does not decode: {e}")))
}
