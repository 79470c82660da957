//! Ungated baseline coordinator
//!
//! Every query goes straight to the exact store. Used alongside
//! [`GatedStore`](super::GatedStore) to measure the scan cost the gate saves.

use tracing::debug;

use crate::metrics::GateMetrics;
use crate::ports::ExactStore;

/// Exact store with lookup counters and no filter
pub struct DirectStore<S: ExactStore> {
    store: S,
    metrics: GateMetrics,
}

impl<S: ExactStore> DirectStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            metrics: GateMetrics::new(),
        }
    }

    pub fn index(&mut self, key: &[u8], record: S::Record) -> Result<(), S::Error> {
        self.store.insert(key, record)?;
        self.metrics.record_index();
        Ok(())
    }

    /// Exact lookup, always paid in full
    pub fn query(&self, key: &[u8]) -> Result<Option<S::Record>, S::Error> {
        let result = self.store.lookup(key)?;
        self.metrics
            .record_exact_lookup(result.records_scanned, result.record.is_some());
        debug!(
            key_len = key.len(),
            found = result.record.is_some(),
            records_scanned = result.records_scanned,
            "direct query"
        );
        Ok(result.record)
    }

    pub fn exact_lookups(&self) -> u64 {
        self.metrics.exact_lookups()
    }

    pub fn records_scanned(&self) -> u64 {
        self.metrics.records_scanned()
    }

    pub fn metrics(&self) -> &GateMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
