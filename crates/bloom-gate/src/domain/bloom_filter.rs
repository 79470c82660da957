//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once `add(key)` returns, `might_contain(key)` is true
//!   for the lifetime of the filter.
//! - Bits are only ever set, never cleared.
//! - `size_bits > 0` and `hash_count >= 1`, enforced at construction.

use bitvec::prelude::*;
use tracing::trace;

use super::config::BloomConfig;
use super::hash_functions::{compute_hash_positions, probe_positions};
use super::parameters::{calculate_fpr, calculate_optimal_parameters};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A `false` from [`might_contain`](Self::might_contain) is authoritative
/// ("definitely absent"); a `true` means "possibly present".
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash probes (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Accepted insertions (n), including repeats
    n: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter of `m` bits probing `k` positions per key
    ///
    /// Fails with [`FilterError::InvalidConfiguration`] if `m == 0` or `k < 1`.
    pub fn new(m: usize, k: usize) -> Result<Self, FilterError> {
        BloomConfig::new(m, k)?;
        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; m],
            k,
            m,
            n: 0,
        })
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        Self::new(config.size_bits, config.hash_count)
    }

    /// Create a filter with optimal parameters for `expected_items` at `target_fpr`
    pub fn with_capacity(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_items, target_fpr)?;
        Self::new(params.size_bits, params.hash_count)
    }

    /// Insert a key into the filter
    ///
    /// Re-adding a key leaves the bits unchanged but still counts towards the
    /// insertion total used for the FPR estimate.
    pub fn add(&mut self, key: &[u8]) {
        for pos in probe_positions(key, self.k, self.m) {
            self.bits.set(pos, true);
        }
        self.n += 1;
        trace!(key_len = key.len(), inserted = self.n, "bloom filter insert");
    }

    /// Test whether a key might be in the filter
    ///
    /// Returns `false` as soon as any probed bit is unset.
    pub fn might_contain(&self, key: &[u8]) -> bool {
        probe_positions(key, self.k, self.m).all(|pos| self.bits[pos])
    }

    /// Estimated false positive rate: (1 - e^(-kn/m))^k
    ///
    /// For observability only; never affects query answers.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// The `k` probe positions derived for `key`
    pub fn positions(&self, key: &[u8]) -> Vec<usize> {
        compute_hash_positions(key, self.k, self.m)
    }

    /// Whether the bit at `index` is set; out-of-range indices read as unset
    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index).map(|bit| *bit).unwrap_or(false)
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `[0, 1]`
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// Filter size in bits (m)
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Number of hash probes (k)
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Number of accepted insertions (n)
    pub fn inserted_count(&self) -> usize {
        self.n
    }
}
