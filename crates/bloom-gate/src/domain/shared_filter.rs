//! Thread-safe Bloom filter handle
//!
//! Many readers, one writer at a time. `add` holds the write lock for the
//! whole insertion, so readers never observe a key with only some of its
//! probe bits set.

use std::sync::Arc;

use parking_lot::RwLock;

use super::bloom_filter::BloomFilter;
use super::config::BloomConfig;
use crate::error::FilterError;

/// Cloneable, lock-protected [`BloomFilter`]
#[derive(Clone, Debug)]
pub struct SharedBloomFilter {
    inner: Arc<RwLock<BloomFilter>>,
}

impl SharedBloomFilter {
    pub fn new(m: usize, k: usize) -> Result<Self, FilterError> {
        Ok(Self::from_filter(BloomFilter::new(m, k)?))
    }

    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        Ok(Self::from_filter(BloomFilter::from_config(config)?))
    }

    pub fn from_filter(filter: BloomFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }

    /// Insert a key under the exclusive lock
    pub fn add(&self, key: &[u8]) {
        self.inner.write().add(key);
    }

    /// Membership test under a shared lock
    pub fn might_contain(&self, key: &[u8]) -> bool {
        self.inner.read().might_contain(key)
    }

    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.inner.read().estimated_false_positive_rate()
    }

    pub fn inserted_count(&self) -> usize {
        self.inner.read().inserted_count()
    }

    /// Copy of the current filter state
    pub fn snapshot(&self) -> BloomFilter {
        self.inner.read().clone()
    }
}
