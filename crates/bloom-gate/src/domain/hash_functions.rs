//! Hash functions for the Bloom filter
//!
//! Probe positions use double hashing over two independent base hashes:
//!
//! ```text
//! position(i) = (h1(key) + i * h2(key)) mod m,   i in 0..k
//! ```
//!
//! - `h1`: MurmurHash3 x64/128 (lower 64 bits), fixed seed.
//! - `h2`: SipHash-1-3 with fixed keys.
//!
//! Using two distinct algorithms keeps the base hashes from being
//! near-duplicates of each other. Both are pure functions of the key bytes.
//! Outputs are unsigned, so every residue is already non-negative before the
//! modulo reduction.

use std::hash::Hasher;
use std::io::Cursor;

use siphasher::sip::SipHasher13;

/// Seed for the MurmurHash3 base hash
const MURMUR_SEED: u32 = 0x9747_b28c;

/// Fixed SipHash keys for the secondary base hash
const SIP_KEY_0: u64 = 0x736f_6d65_7073_6575;
const SIP_KEY_1: u64 = 0x646f_7261_6e64_6f6d;

/// Primary base hash (MurmurHash3 x64/128, lower 64 bits)
pub fn murmur_hash(key: &[u8]) -> u64 {
    let mut cursor = Cursor::new(key);

    // Reading from an in-memory cursor cannot fail
    let hash = murmur3::murmur3_x64_128(&mut cursor, MURMUR_SEED).unwrap_or(0);
    hash as u64
}

/// Secondary base hash (SipHash-1-3 with fixed keys)
pub fn sip_hash(key: &[u8]) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(SIP_KEY_0, SIP_KEY_1);
    hasher.write(key);
    hasher.finish()
}

/// Lazily derive the `k` probe positions for `key` in a filter of `m` bits
///
/// Both base hashes are reduced modulo `m` first, then combined. The
/// combination is carried out in `u128` so `i * h2` cannot overflow for any
/// `k` and `m` that fit in `usize`.
///
/// `m` must be non-zero; `BloomFilter` guarantees this at construction.
pub fn probe_positions(key: &[u8], k: usize, m: usize) -> impl Iterator<Item = usize> {
    debug_assert!(m > 0, "probe_positions requires m > 0");

    let m = m as u128;
    let h1 = murmur_hash(key) as u128 % m;
    let h2 = sip_hash(key) as u128 % m;

    (0..k as u128).map(move |i| ((h1 + i * h2) % m) as usize)
}

/// Compute all `k` probe positions for `key` eagerly
pub fn compute_hash_positions(key: &[u8], k: usize, m: usize) -> Vec<usize> {
    probe_positions(key, k, m).collect()
}
