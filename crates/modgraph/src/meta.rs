//! Per-entity metadata records.
//!
//! Passes stash analysis results here without touching the entity types.
//! A record is created the first time anyone asks for it and the same
//! instance is returned from then on, so writes through one handle are
//! visible through every other.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::MetaKey;
use crate::Result;

/// Shared handle to an open-ended field bag.
///
/// Cloning the handle does not copy the record.
#[derive(Debug, Clone, Default)]
pub struct MetaRecord {
    fields: Arc<RwLock<HashMap<String, Value>>>,
}

impl MetaRecord {
    pub fn get(&self, field: &str) -> Option<Value> {
        self.fields.read().get(field).cloned()
    }

    /// Read a field and deserialize it into `T`.
    ///
    /// Returns `Ok(None)` if the field is unset.
    pub fn get_as<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Set a field, returning the previous value.
    pub fn set(&self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.write().insert(field.into(), value.into())
    }

    /// Serialize `value` and store it under `field`.
    pub fn set_as<T: Serialize>(&self, field: impl Into<String>, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.fields.write().insert(field.into(), value);
        Ok(())
    }

    pub fn remove(&self, field: &str) -> Option<Value> {
        self.fields.write().remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.read().contains_key(field)
    }

    /// Field names, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.fields.read().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }

    /// True if both handles point at the same record.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

/// Lazily populated map from key to record. Lives inside the graph.
#[derive(Debug, Default)]
pub(crate) struct MetaStore {
    records: HashMap<MetaKey, MetaRecord>,
}

impl MetaStore {
    pub(crate) fn get(&self, key: &MetaKey) -> Option<&MetaRecord> {
        self.records.get(key)
    }

    pub(crate) fn get_or_create(&mut self, key: MetaKey) -> MetaRecord {
        self.records
            .entry(key)
            .or_insert_with_key(|key| {
                tracing::trace!(%key, "creating metadata record");
                MetaRecord::default()
            })
            .clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
