//! # Bloom Gate
//!
//! A Bloom filter used as a fast pre-check in front of an expensive
//! exact-lookup store. The filter answers "definitely absent" or "possibly
//! present"; only "possibly present" keys pay for the exact lookup.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: Core probabilistic data structure
//!   - `BloomConfig` / `BloomConfigBuilder`: Validated sizing
//!   - `LookupOutcome`: Three-way gated lookup result
//!   - `SharedBloomFilter`: Lock-protected filter for concurrent use
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `GateApi`: Driving port (inbound API)
//!   - `ExactStore`: Driven port (the expensive collaborator)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `GatedStore`: Filter-gated coordinator, implements `GateApi`
//!   - `DirectStore`: Ungated baseline for comparison
//!
//! - **Store Layer** (`store/`): `LinearScanStore`, an in-memory exact store
//!
//! ## Invariants
//!
//! - **No false negatives**: after `add(key)`, `might_contain(key)` is true.
//! - **Add before insert**: `GatedStore::index` updates the filter before the
//!   exact store, so a "definitely absent" answer is always trustworthy.
//! - FPR estimate = (1 - e^(-kn/m))^k, for observability only.
//!
//! ## Usage Example
//!
//! ```
//! use bloom_gate::{BloomConfig, GatedStore, LinearScanStore, LookupOutcome};
//!
//! let mut gate = GatedStore::new(&BloomConfig::default(), LinearScanStore::new())?;
//! gate.index(b"admin", "admin@example.com")?;
//!
//! assert_eq!(gate.query(b"admin")?, LookupOutcome::Found("admin@example.com"));
//! assert_eq!(gate.exact_lookups(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod store;

// Re-exports for convenience
pub use domain::{BloomConfig, BloomConfigBuilder, BloomFilter, LookupOutcome, SharedBloomFilter};
pub use error::{FilterError, StoreError};
pub use metrics::{GateMetrics, MetricsSnapshot};
pub use ports::{ExactStore, GateApi, ScanResult};
pub use service::{DirectStore, GatedStore};
pub use store::LinearScanStore;
