//! Counters for gated lookups
//!
//! Each coordinator owns its own [`GateMetrics`]; nothing is process-global,
//! so independent coordinators never interfere.
//!
//! ## Usage
//!
//! ```
//! use bloom_gate::metrics::GateMetrics;
//!
//! let metrics = GateMetrics::new();
//! metrics.record_gate_check(false);
//! metrics.record_exact_lookup(120, true);
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.gate_checks, 1);
//! assert_eq!(snapshot.records_scanned, 120);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Thread-safe counters for one coordinator
#[derive(Debug, Default)]
pub struct GateMetrics {
    /// Filter consultations
    gate_checks: AtomicU64,
    /// Queries answered "definitely absent" by the filter
    gate_rejections: AtomicU64,
    /// Exact-store lookups performed
    exact_lookups: AtomicU64,
    /// Entries examined by the exact store across all lookups
    records_scanned: AtomicU64,
    /// Lookups that passed the gate but found nothing
    false_positives: AtomicU64,
    /// Keys registered through the coordinator
    keys_indexed: AtomicU64,
}

impl GateMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a filter consultation
    pub fn record_gate_check(&self, passed: bool) {
        self.gate_checks.fetch_add(1, Ordering::Relaxed);
        if !passed {
            self.gate_rejections.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an exact lookup and the scan cost the store reported
    pub fn record_exact_lookup(&self, records_scanned: u64, found: bool) {
        self.exact_lookups.fetch_add(1, Ordering::Relaxed);
        self.records_scanned
            .fetch_add(records_scanned, Ordering::Relaxed);
        if !found {
            self.false_positives.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_index(&self) {
        self.keys_indexed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn gate_checks(&self) -> u64 {
        self.gate_checks.load(Ordering::Relaxed)
    }

    pub fn exact_lookups(&self) -> u64 {
        self.exact_lookups.load(Ordering::Relaxed)
    }

    pub fn records_scanned(&self) -> u64 {
        self.records_scanned.load(Ordering::Relaxed)
    }

    /// Share of misses that slipped past the gate
    ///
    /// false_positives / (false_positives + gate_rejections); 0 with no misses.
    /// Only meaningful when every exact miss is a key that was never indexed.
    pub fn observed_false_positive_rate(&self) -> f64 {
        let false_positives = self.false_positives.load(Ordering::Relaxed);
        let misses = false_positives + self.gate_rejections.load(Ordering::Relaxed);
        if misses > 0 {
            false_positives as f64 / misses as f64
        } else {
            0.0
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            gate_checks: self.gate_checks(),
            gate_rejections: self.gate_rejections.load(Ordering::Relaxed),
            exact_lookups: self.exact_lookups(),
            records_scanned: self.records_scanned(),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            keys_indexed: self.keys_indexed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub gate_checks: u64,
    pub gate_rejections: u64,
    pub exact_lookups: u64,
    pub records_scanned: u64,
    pub false_positives: u64,
    pub keys_indexed: u64,
}
