//! Bloom filter sizing and false-positive estimation
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k
//! - m = -n*ln(fpr) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)           -- optimal hash functions

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Upper bound on derived hash counts
pub const MAX_DERIVED_HASH_COUNT: usize = 32;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter
    pub size_bits: usize,
    /// Number of hash functions
    pub hash_count: usize,
    /// Expected false positive rate at the requested capacity
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for `num_elements` at `target_fpr`
///
/// `target_fpr` must lie strictly between 0 and 1. Zero elements yields the
/// smallest valid filter (1 bit, 1 hash).
pub fn calculate_optimal_parameters(
    num_elements: usize,
    target_fpr: f64,
) -> Result<BloomFilterParams, FilterError> {
    if !(target_fpr > 0.0 && target_fpr < 1.0) {
        return Err(FilterError::InvalidFalsePositiveRate { fpr: target_fpr });
    }

    if num_elements == 0 {
        return Ok(BloomFilterParams {
            size_bits: 1,
            hash_count: 1,
            expected_fpr: 0.0,
        });
    }

    let n = num_elements as f64;
    let m = ((-n * target_fpr.ln() / (LN_2 * LN_2)).ceil() as usize).max(1);
    let k = optimal_k(m, num_elements);

    Ok(BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr: calculate_fpr(m, num_elements, k),
    })
}

/// Estimated false positive rate: (1 - e^(-kn/m))^k
///
/// Assumes independent, uniformly distributed probe positions. A filter of
/// zero bits reports 1.0; an empty filter reports 0.0.
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    let k = i32::try_from(k).unwrap_or(i32::MAX);
    (1.0 - exponent.exp()).powi(k).clamp(0.0, 1.0)
}

/// Optimal k for given m and n, clamped to `1..=MAX_DERIVED_HASH_COUNT`
pub fn optimal_k(m: usize, n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let k = ((m as f64 / n as f64) * LN_2).round() as usize;
    k.clamp(1, MAX_DERIVED_HASH_COUNT)
}
