//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_gate::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .for_capacity(10_000, 0.01)
//!     .build()
//!     .expect("valid config");
//! assert!(config.size_bits > 10_000);
//! ```

use serde::{Deserialize, Serialize};

use super::parameters::calculate_optimal_parameters;
use crate::error::FilterError;

/// Default filter size, sized for a ten-thousand-user table
pub const DEFAULT_SIZE_BITS: usize = 50_000;

/// Default number of probes per key
pub const DEFAULT_HASH_COUNT: usize = 3;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Filter size in bits (m), must be > 0
    pub size_bits: usize,
    /// Number of hash probes per key (k), must be >= 1
    pub hash_count: usize,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            size_bits: DEFAULT_SIZE_BITS,
            hash_count: DEFAULT_HASH_COUNT,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterError> {
        let config = Self {
            size_bits,
            hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero-sized filters and filters without probes
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.size_bits == 0 || self.hash_count < 1 {
            return Err(FilterError::InvalidConfiguration {
                size_bits: self.size_bits,
                hash_count: self.hash_count,
            });
        }
        Ok(())
    }
}

/// Fluent builder for [`BloomConfig`]
///
/// Either set `size_bits`/`hash_count` directly or derive both from an
/// expected capacity with `for_capacity`. Explicit values win over derived
/// ones regardless of call order.
#[derive(Clone, Debug, Default)]
pub struct BloomConfigBuilder {
    size_bits: Option<usize>,
    hash_count: Option<usize>,
    capacity: Option<(usize, f64)>,
}

impl BloomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set filter size in bits
    pub fn size_bits(mut self, bits: usize) -> Self {
        self.size_bits = Some(bits);
        self
    }

    /// Set number of hash probes
    pub fn hash_count(mut self, k: usize) -> Self {
        self.hash_count = Some(k);
        self
    }

    /// Derive size and hash count for `expected_items` at `target_fpr`
    pub fn for_capacity(mut self, expected_items: usize, target_fpr: f64) -> Self {
        self.capacity = Some((expected_items, target_fpr));
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let (derived_bits, derived_k) = match self.capacity {
            Some((items, fpr)) => {
                let params = calculate_optimal_parameters(items, fpr)?;
                (params.size_bits, params.hash_count)
            }
            None => (defaults.size_bits, defaults.hash_count),
        };

        BloomConfig::new(
            self.size_bits.unwrap_or(derived_bits),
            self.hash_count.unwrap_or(derived_k),
        )
    }
}
