//! Performance benchmarks for the response cache.
//!
//! These benchmarks measure cache operations under various conditions:
//! - Hits and misses on a populated cache
//! - Inserts and overwrites
//! - Reads contending with writers on other threads

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pokedex::TimedCache;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const TTL: Duration = Duration::from_secs(300);

fn location_key(offset: usize) -> String {
    format!("https://pokeapi.co/api/v2/location?offset={}&limit=20", offset)
}

/// Cache holding `size` small payloads.
fn populated_cache(size: usize) -> TimedCache<Arc<[u8]>> {
    let cache = TimedCache::new(TTL);
    let payload: Arc<[u8]> = Arc::from(&[0u8; 512][..]);
    for i in 0..size {
        cache.add(location_key(i), Arc::clone(&payload));
    }
    cache
}

/// Benchmark lookups that hit, across cache sizes.
fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");

    for size in [10, 1_000, 100_000] {
        let cache = populated_cache(size);
        let key = location_key(size / 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(cache.get(black_box(&key))));
        });
    }

    group.finish();
}

/// Benchmark lookups for keys that were never added.
fn bench_get_miss(c: &mut Criterion) {
    let cache = populated_cache(1_000);
    let key = "https://pokeapi.co/api/v2/pokemon/missingno";

    c.bench_function("get_miss", |b| {
        b.iter(|| black_box(cache.get(black_box(key))));
    });
}

/// Benchmark overwriting one key.
fn bench_add_overwrite(c: &mut Criterion) {
    let cache = populated_cache(1_000);
    let key = location_key(500);
    let payload: Arc<[u8]> = Arc::from(&[1u8; 512][..]);

    c.bench_function("add_overwrite", |b| {
        b.iter(|| cache.add(key.as_str(), Arc::clone(&payload)));
    });
}

/// Benchmark hits while other threads keep writing.
fn bench_get_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_contended");

    for writers in [1, 4] {
        let cache = populated_cache(1_000);
        let key = location_key(10);
        let running = Arc::new(AtomicBool::new(true));

        let handles: Vec<_> = (0..writers)
            .map(|w| {
                let cache = cache.clone();
                let running = Arc::clone(&running);
                thread::spawn(move || {
                    let payload: Arc<[u8]> = Arc::from(&[2u8; 512][..]);
                    let mut i = 0;
                    while running.load(Ordering::Relaxed) {
                        cache.add(format!("writer{}-{}", w, i % 64), Arc::clone(&payload));
                        i += 1;
                    }
                })
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(writers), &writers, |b, _| {
            b.iter(|| black_box(cache.get(black_box(&key))));
        });

        running.store(false, Ordering::Relaxed);
        for handle in handles {
            handle.join().unwrap();
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_get_hit,
    bench_get_miss,
    bench_add_overwrite,
    bench_get_contended
);
criterion_main!(benches);
