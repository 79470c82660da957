//! # Bloom-Gate Benchmarks
//!
//! | Path | Expectation |
//! |------|-------------|
//! | `might_contain` | O(k), independent of table size |
//! | Gated miss | ~FPR share of a full scan |
//! | Direct miss | full scan every time |

use bloom_gate::{BloomConfig, BloomFilter, DirectStore, GatedStore, LinearScanStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

fn usernames(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("user{}", i)).collect()
}

fn random_absent_keys(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| format!("ghost_{:016x}", rng.gen::<u64>()))
        .collect()
}

// ============================================================================
// Filter primitives
// ============================================================================

fn bench_filter_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-filter");

    for k in [1, 3, 7] {
        let mut filter = BloomFilter::new(50_000, k).unwrap();
        for name in usernames(10_000) {
            filter.add(name.as_bytes());
        }

        group.bench_with_input(BenchmarkId::new("might_contain_hit", k), &k, |b, _| {
            b.iter(|| black_box(filter.might_contain(black_box(b"user5000"))))
        });

        group.bench_with_input(BenchmarkId::new("add", k), &k, |b, _| {
            let mut filter = BloomFilter::new(50_000, k).unwrap();
            b.iter(|| filter.add(black_box(b"user5000")))
        });
    }

    group.finish();
}

// ============================================================================
// Gated vs. direct lookups for absent keys
// ============================================================================

fn bench_absent_key_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("absent-key-lookup");
    group.measurement_time(Duration::from_secs(10));

    for table_size in [1_000, 10_000] {
        let names = usernames(table_size);
        let mut gated = GatedStore::new(&BloomConfig::default(), LinearScanStore::new()).unwrap();
        let mut direct = DirectStore::new(LinearScanStore::new());
        for name in &names {
            gated.index(name.as_bytes(), ()).unwrap();
            direct.index(name.as_bytes(), ()).unwrap();
        }

        let probes = random_absent_keys(100);
        group.throughput(Throughput::Elements(probes.len() as u64));

        group.bench_with_input(BenchmarkId::new("gated", table_size), &probes, |b, probes| {
            b.iter(|| {
                for probe in probes {
                    black_box(gated.query(probe.as_bytes()).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("direct", table_size), &probes, |b, probes| {
            b.iter(|| {
                for probe in probes {
                    black_box(direct.query(probe.as_bytes()).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_operations, bench_absent_key_lookups);
criterion_main!(benches);
