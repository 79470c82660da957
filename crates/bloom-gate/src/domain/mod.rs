//! Domain Layer - Pure business logic
//!
//! This layer contains:
//! - Core Bloom filter implementation
//! - Hash index derivation (double hashing)
//! - Parameter calculations
//! - Configuration
//! - Lookup outcomes
//! - Lock-protected filter for concurrent use
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod outcome;
pub mod parameters;
pub mod shared_filter;

pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use outcome::LookupOutcome;
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
pub use shared_filter::SharedBloomFilter;
