//! Catalog lookup over parsed records.

use crate::record::PropertyRecord;
use serde::Deserialize;
use shared_types::PropertyId;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read-only property catalog keyed by id.
///
/// Lookups never fail: a missing id is simply `None`, the same as an
/// empty catalog. Only loading malformed input errors.
#[derive(Clone, Debug, Default)]
pub struct PropertyCatalog {
    records: HashMap<PropertyId, PropertyRecord>,
}

/// Wire shape of one catalog entry: the record plus its id.
#[derive(Deserialize)]
struct CatalogEntry {
    id: PropertyId,
    #[serde(flatten)]
    record: PropertyRecord,
}

impl PropertyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalog from its JSON array form.
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(input)?;
        Ok(Self {
            records: entries.into_iter().map(|e| (e.id, e.record)).collect(),
        })
    }

    /// Builds a catalog from already-parsed records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (PropertyId, PropertyRecord)>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    pub fn record(&self, id: PropertyId) -> Option<&PropertyRecord> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in ascending order, for stable display.
    pub fn ids(&self) -> Vec<PropertyId> {
        let mut ids: Vec<_> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
