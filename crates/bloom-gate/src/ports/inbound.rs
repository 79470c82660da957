//! Inbound Ports (Driving Ports)
//!
//! The API that drivers (the demo harness, benchmarks, services) use to load
//! keys into a gated store and query it.

use crate::domain::LookupOutcome;
use crate::metrics::MetricsSnapshot;

/// Gated lookup API (Driving Port)
pub trait GateApi {
    type Record;
    type Error;

    /// Register a record and add its key to the filter as one logical operation
    fn index(&mut self, key: &[u8], record: Self::Record) -> Result<(), Self::Error>;

    /// Consult the filter, then the exact store only if the filter passes the key
    fn query(&self, key: &[u8]) -> Result<LookupOutcome<Self::Record>, Self::Error>;

    /// Estimated false positive rate of the gate's filter
    fn estimated_false_positive_rate(&self) -> f64;

    /// Point-in-time counters
    fn metrics_snapshot(&self) -> MetricsSnapshot;
}
