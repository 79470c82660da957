//! In-memory exact store with linear-scan lookups
//!
//! Models an unindexed record table: every lookup walks entries in insertion
//! order until it finds the key, and reports how many entries it examined.
//! The scan cost is returned as a number, never simulated with a delay.
//!
//! Inserts use a side index so replacing a record is O(1); only lookups pay
//! for the scan.

use std::collections::HashMap;

use tracing::debug;

use crate::error::StoreError;
use crate::ports::{ExactStore, ScanResult};

/// Unindexed key → record table
#[derive(Clone, Debug)]
pub struct LinearScanStore<R> {
    entries: Vec<(Vec<u8>, R)>,
    /// key -> slot in `entries`, for upserts only
    slots: HashMap<Vec<u8>, usize>,
    capacity_limit: Option<usize>,
}

impl<R> Default for LinearScanStore<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            capacity_limit: None,
        }
    }
}

impl<R> LinearScanStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects inserts of new keys once it holds `limit` records
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit),
            slots: HashMap::with_capacity(limit),
            capacity_limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|(key, _)| key.as_slice())
    }
}

impl<R: Clone> ExactStore for LinearScanStore<R> {
    type Record = R;
    type Error = StoreError;

    /// Append a record, or replace the record already stored under `key`
    fn insert(&mut self, key: &[u8], record: R) -> Result<(), StoreError> {
        if let Some(&slot) = self.slots.get(key) {
            self.entries[slot].1 = record;
            return Ok(());
        }

        if let Some(capacity) = self.capacity_limit {
            if self.entries.len() >= capacity {
                return Err(StoreError::CapacityExceeded { capacity });
            }
        }

        self.slots.insert(key.to_vec(), self.entries.len());
        self.entries.push((key.to_vec(), record));
        Ok(())
    }

    fn lookup(&self, key: &[u8]) -> Result<ScanResult<R>, StoreError> {
        let mut scanned = 0u64;
        for (candidate, record) in &self.entries {
            scanned += 1;
            if candidate == key {
                return Ok(ScanResult::found(record.clone(), scanned));
            }
        }

        debug!(records_scanned = scanned, "exact lookup miss");
        Ok(ScanResult::missing(scanned))
    }
}
