//! # Table
//!
//! One named table of flat JSON records behind an `RwLock`. Scans
//! iterate in key order, so output is deterministic for a given
//! table state.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::expression::{parse_set_expression, UpdateInput};

/// Equality predicate on one top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct EqFilter {
    pub field: String,
    pub value: Value,
}

impl EqFilter {
    pub fn new(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &Value) -> bool {
        record.get(&self.field) == Some(&self.value)
    }
}

/// A single key-value table holding one JSON object per key.
pub struct Table {
    name: String,
    key_attribute: String,
    records: RwLock<BTreeMap<String, Value>>,
}

impl Table {
    /// Creates an empty table whose records are keyed by `key_attribute`.
    pub fn new(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
            records: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetch a record by primary key. Pure lookup, no side effects.
    pub fn get_item(&self, id: &str) -> StoreResult<Option<Value>> {
        let records = self.read_lock()?;
        Ok(records.get(id).cloned())
    }

    /// Unconditional upsert of a full record.
    pub fn put_item(&self, record: Value) -> StoreResult<()> {
        let key = self.key_of(&record)?;
        let mut records = self.write_lock()?;
        records.insert(key, record);
        Ok(())
    }

    /// Conditional insert: fails with `ConditionFailed` if the key is
    /// already present. The whole check-and-write happens under one
    /// write lock.
    pub fn put_item_if_absent(&self, record: Value) -> StoreResult<()> {
        let key = self.key_of(&record)?;
        let mut records = self.write_lock()?;
        if records.contains_key(&key) {
            return Err(StoreError::ConditionFailed(key));
        }
        records.insert(key, record);
        Ok(())
    }

    /// Removal by primary key, returning the prior record if one existed.
    pub fn delete_item(&self, id: &str) -> StoreResult<Option<Value>> {
        let mut records = self.write_lock()?;
        Ok(records.remove(id))
    }

    /// Full-table iteration, optionally narrowed by an equality filter.
    /// No pagination; the entire matching set comes back in one call.
    pub fn scan(&self, filter: Option<&EqFilter>) -> StoreResult<Vec<Value>> {
        let records = self.read_lock()?;
        Ok(records
            .values()
            .filter(|r| filter.map_or(true, |f| f.matches(r)))
            .cloned()
            .collect())
    }

    /// Applies a compound `SET` expression to the record at `id` and
    /// returns the full post-update record.
    ///
    /// The expression is parsed and every binding resolved before the
    /// record is touched, then all assignments land under one write
    /// lock, so concurrent readers never observe a half-applied update.
    pub fn update_item(&self, id: &str, input: &UpdateInput) -> StoreResult<Value> {
        let assignments = parse_set_expression(input)?;

        let mut records = self.write_lock()?;
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::ItemNotFound(id.to_string()))?;
        let fields = record
            .as_object_mut()
            .ok_or_else(|| StoreError::InvalidRecord(format!("record {id} is not an object")))?;

        for assignment in assignments {
            fields.insert(assignment.attribute, assignment.value);
        }

        Ok(record.clone())
    }

    /// Extracts the primary key from a record, requiring a JSON object
    /// with a non-empty string under the table's key attribute.
    fn key_of(&self, record: &Value) -> StoreResult<String> {
        let key = record
            .as_object()
            .and_then(|obj| obj.get(&self.key_attribute))
            .and_then(|v| v.as_str())
            .filter(|k| !k.is_empty());
        match key {
            Some(k) => Ok(k.to_string()),
            None => Err(StoreError::InvalidRecord(format!(
                "record has no usable '{}' key attribute",
                self.key_attribute
            ))),
        }
    }

    fn read_lock(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Value>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }

    fn write_lock(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, BTreeMap<String, Value>>> {
        self.records
            .write()
            .map_err(|_| StoreError::Internal("lock poisoned".to_string()))
    }
}
