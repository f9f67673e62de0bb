//! In-memory application state.
//!
//! [`AppStore`] holds one [`Collection`] of records per entity, seeded from
//! the fixture data. It is created once and injected into the UI context;
//! nothing is persisted.

pub mod collection;

pub use collection::Collection;

use crate::entities;
use crate::model::{EntityKind, Record, RecordError, Row};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: EntityKind, id: String },
    #[error("{entity} '{id}' already exists")]
    DuplicateId { entity: EntityKind, id: String },
    #[error("{entity} record has no id")]
    MissingId { entity: EntityKind },
}

#[derive(Debug, Clone, Default)]
pub struct AppStore {
    collections: BTreeMap<EntityKind, Collection<Record>>,
}

impl AppStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with every entity's fixture records
    pub fn with_fixtures() -> Result<Self, RecordError> {
        let mut store = Self::new();
        for kind in EntityKind::ALL {
            store.replace(kind, Collection::new(entities::fixture_records(kind)?));
        }
        Ok(store)
    }

    pub fn replace(&mut self, kind: EntityKind, collection: Collection<Record>) {
        self.collections.insert(kind, collection);
    }

    /// Current snapshot of an entity's records
    pub fn collection(&self, kind: EntityKind) -> Collection<Record> {
        self.collections.get(&kind).cloned().unwrap_or_default()
    }

    pub fn records(&self, kind: EntityKind) -> Arc<[Record]> {
        self.collection(kind).shared()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.collections.get(&kind).map_or(0, Collection::len)
    }

    pub fn find(&self, kind: EntityKind, id: &str) -> Result<&Record, StoreError> {
        self.collections
            .get(&kind)
            .and_then(|collection| collection.find(id))
            .ok_or_else(|| StoreError::NotFound {
                entity: kind,
                id: id.to_string(),
            })
    }

    pub fn insert(&mut self, kind: EntityKind, record: Record) -> Result<(), StoreError> {
        let id = Self::require_id(kind, &record)?;
        let next = self.collection(kind).insert(record).ok_or(StoreError::DuplicateId { entity: kind, id })?;
        self.replace(kind, next);
        Ok(())
    }

    pub fn update(&mut self, kind: EntityKind, record: Record) -> Result<(), StoreError> {
        let id = Self::require_id(kind, &record)?;
        let next = self.collection(kind).update(record).ok_or(StoreError::NotFound { entity: kind, id })?;
        self.replace(kind, next);
        Ok(())
    }

    /// Delete one record; returns whether anything was removed
    pub fn delete(&mut self, kind: EntityKind, id: &str) -> bool {
        let current = self.collection(kind);
        let next = current.delete(id);
        if next.same_as(&current) {
            return false;
        }
        self.replace(kind, next);
        true
    }

    /// Next free identifier, e.g. `PROD006` after `PROD005`
    pub fn next_id(&self, kind: EntityKind) -> String {
        let prefix = kind.id_prefix();
        let highest = self
            .collection(kind)
            .iter()
            .filter_map(|record| record.id().strip_prefix(prefix)?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("{}{:03}", prefix, highest + 1)
    }

    fn require_id(kind: EntityKind, record: &Record) -> Result<String, StoreError> {
        match record.id() {
            "" => Err(StoreError::MissingId { entity: kind }),
            id => Ok(id.to_string()),
        }
    }
}
