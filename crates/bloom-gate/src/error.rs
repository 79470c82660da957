//! Error types for the Bloom gate

use thiserror::Error;

/// Errors raised while configuring a Bloom filter
///
/// `add` and `might_contain` never fail; only construction is validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid filter configuration: size_bits={size_bits}, hash_count={hash_count} (need size_bits > 0 and hash_count >= 1)")]
    InvalidConfiguration { size_bits: usize, hash_count: usize },

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFalsePositiveRate { fpr: f64 },
}

/// Errors from the in-memory exact stores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Store capacity exceeded: {capacity} records")]
    CapacityExceeded { capacity: usize },
}
