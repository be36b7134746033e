use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lrukit::policy::lru::LruCache;
use lrukit::traits::{CoreCache, LruCacheTrait};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn bench_lru_insert_get(c: &mut Criterion) {
    c.bench_function("lru_insert_get", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::with_buckets(1024, 64);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_pop_lru(c: &mut Criterion) {
    c.bench_function("lru_pop_lru", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::with_buckets(1024, 64);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for _ in 0..1024u64 {
                    let _ = std::hint::black_box(cache.pop_lru());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("lru_eviction_churn", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::with_buckets(1024, 64);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_touch_hotset(c: &mut Criterion) {
    c.bench_function("lru_touch_hotset", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::with_buckets(4096, 64);
                for i in 0..4096u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.touch(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

// The default 3-bucket index makes every lookup walk a long chain; this
// pins the cost so regressions in chain handling show up.
fn bench_lru_default_tiny_buckets(c: &mut Criterion) {
    c.bench_function("lru_get_default_buckets", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::new(256);
                for i in 0..256u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..256u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_random_mixed(c: &mut Criterion) {
    c.bench_function("lru_random_mixed", |b| {
        b.iter_batched(
            || {
                let mut cache = LruCache::with_buckets(1024, 64);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                (cache, StdRng::seed_from_u64(0xC0FFEE))
            },
            |(mut cache, mut rng)| {
                for _ in 0..4096 {
                    let key = rng.gen_range(0..2048u64);
                    if rng.gen_bool(0.7) {
                        let _ = std::hint::black_box(cache.get(&key));
                    } else {
                        cache.insert(key, key);
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_insert_get,
    bench_lru_pop_lru,
    bench_lru_eviction_churn,
    bench_lru_touch_hotset,
    bench_lru_default_tiny_buckets,
    bench_lru_random_mixed
);
criterion_main!(benches);
