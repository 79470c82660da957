//! Gated Lookup Coordinator
//!
//! Puts a [`BloomFilter`] in front of an [`ExactStore`]. Queries the filter
//! rejects never reach the store.
//!
//! INVARIANT: `index` adds the key to the filter *before* inserting into the
//! store. A failed insert leaves an extra false positive in the filter; a
//! stored record is never gate-rejected.

use tracing::{debug, info, warn};

use crate::domain::{BloomConfig, BloomFilter, LookupOutcome};
use crate::error::FilterError;
use crate::metrics::{GateMetrics, MetricsSnapshot};
use crate::ports::{ExactStore, GateApi};

/// Bloom-filter-gated exact store
///
/// Owns its filter and counters. The store is whatever `S` the caller hands
/// in; pass `&mut store` to keep ownership on the caller's side.
pub struct GatedStore<S: ExactStore> {
    filter: BloomFilter,
    store: S,
    metrics: GateMetrics,
}

impl<S: ExactStore> GatedStore<S> {
    /// Build a coordinator with a fresh filter
    ///
    /// Fails with [`FilterError::InvalidConfiguration`] for an invalid config;
    /// the store is dropped in that case.
    pub fn new(config: &BloomConfig, store: S) -> Result<Self, FilterError> {
        let filter = BloomFilter::from_config(config)?;
        info!(
            size_bits = config.size_bits,
            hash_count = config.hash_count,
            "gated store created"
        );
        Ok(Self::with_filter(filter, store))
    }

    /// Build a coordinator around an existing filter
    ///
    /// The caller is responsible for the filter already covering every key
    /// present in `store`; otherwise those keys are gate-rejected.
    pub fn with_filter(filter: BloomFilter, store: S) -> Self {
        Self {
            filter,
            store,
            metrics: GateMetrics::new(),
        }
    }

    /// Register `record` under `key`
    ///
    /// The filter is updated first, then the store. A store error is returned
    /// unchanged; the key stays in the filter.
    pub fn index(&mut self, key: &[u8], record: S::Record) -> Result<(), S::Error> {
        self.filter.add(key);

        if let Err(err) = self.store.insert(key, record) {
            warn!(
                key_len = key.len(),
                "exact store insert failed after filter add; key remains a false positive"
            );
            return Err(err);
        }

        self.metrics.record_index();
        Ok(())
    }

    /// Look up `key`, skipping the store when the filter rules it out
    pub fn query(&self, key: &[u8]) -> Result<LookupOutcome<S::Record>, S::Error> {
        let passed = self.filter.might_contain(key);
        self.metrics.record_gate_check(passed);

        if !passed {
            debug!(key_len = key.len(), outcome = "gate_rejected", "gated query");
            return Ok(LookupOutcome::GateRejected);
        }

        let result = self.store.lookup(key)?;
        self.metrics
            .record_exact_lookup(result.records_scanned, result.record.is_some());

        let outcome = match result.record {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::NotFoundAfterGate,
        };
        debug!(
            key_len = key.len(),
            outcome = outcome.label(),
            records_scanned = result.records_scanned,
            "gated query"
        );
        Ok(outcome)
    }

    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.filter.estimated_false_positive_rate()
    }

    /// Filter consultations so far
    pub fn gate_checks(&self) -> u64 {
        self.metrics.gate_checks()
    }

    /// Exact-store lookups so far
    pub fn exact_lookups(&self) -> u64 {
        self.metrics.exact_lookups()
    }

    /// Entries examined by the store across all lookups
    pub fn records_scanned(&self) -> u64 {
        self.metrics.records_scanned()
    }

    pub fn metrics(&self) -> &GateMetrics {
        &self.metrics
    }

    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the store, discarding the filter and counters
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: ExactStore> GateApi for GatedStore<S> {
    type Record = S::Record;
    type Error = S::Error;

    fn index(&mut self, key: &[u8], record: S::Record) -> Result<(), S::Error> {
        GatedStore::index(self, key, record)
    }

    fn query(&self, key: &[u8]) -> Result<LookupOutcome<S::Record>, S::Error> {
        GatedStore::query(self, key)
    }

    fn estimated_false_positive_rate(&self) -> f64 {
        GatedStore::estimated_false_positive_rate(self)
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
