//! Ledger store: the in-memory record sequence mirrored to storage
//!
//! Every mutation rewrites the full serialized ledger under one fixed key,
//! so storage always holds the complete current state.

use crate::error::{Result, ValidationError};
use crate::storage::Storage;
use crate::types::{Record, RecordForm};

/// Storage key the ledger lives under. Kept for compatibility with
/// existing data.
pub const STORAGE_KEY: &str = "chantierCiment";

/// Persistent store for cement-usage records
pub struct LedgerStore<S: Storage> {
    storage: S,
    records: Vec<Record>,
}

impl<S: Storage> LedgerStore<S> {
    /// Open the ledger from storage.
    ///
    /// A missing or unparseable stored value is the normal empty state,
    /// not an error: the store starts empty and the next mutation
    /// overwrites whatever was there.
    pub fn open(storage: S) -> Result<Self> {
        let records = match storage.get(STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { storage, records })
    }

    /// Validate a submitted form and append the resulting record.
    ///
    /// On success the full sequence is persisted and the new record's id
    /// is returned. On failure nothing is mutated.
    pub fn submit(&mut self, form: &RecordForm) -> Result<String> {
        self.add(form.validate()?)
    }

    /// Append an already-built record.
    ///
    /// The quantity rule is enforced here too, so records that bypass the
    /// text form cannot break the ledger invariant.
    pub fn add(&mut self, record: Record) -> Result<String> {
        if !record.quantity.is_finite() || record.quantity <= 0.0 {
            return Err(ValidationError::Quantity.into());
        }
        let id = record.id.clone();
        self.records.push(record);
        self.save()?;
        Ok(id)
    }

    /// Remove the record with the given id.
    ///
    /// Returns whether a record was removed; persists only when one was.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => self.remove_at(index),
            None => Ok(false),
        }
    }

    /// Remove the record at the given insertion-order index.
    ///
    /// An out-of-range index removes nothing and reports `false`.
    pub fn remove_at(&mut self, index: usize) -> Result<bool> {
        if index >= self.records.len() {
            return Ok(false);
        }
        self.records.remove(index);
        self.save()?;
        Ok(true)
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Sum of quantities over the whole ledger.
    ///
    /// Folds from +0.0 so an empty ledger never reports -0.0.
    pub fn total_quantity(&self) -> f64 {
        self.records.iter().fold(0.0, |acc, r| acc + r.quantity)
    }

    /// Serialize the full record sequence to storage
    fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.records)?;
        self.storage.set(STORAGE_KEY, &raw)
    }
}
