//! Recommender cascade benchmarks
//!
//! One benchmark per terminal tier, all against in-memory stores, so the
//! numbers measure decode + choice overhead rather than I/O.
//!
//! Run with: cargo bench --bench cascade

use botify_core::catalog::codec::{encode_candidates, encode_track};
use botify_core::catalog::{Catalog, Track};
use botify_core::config::RecommenderConfig;
use botify_core::kv::MemoryKvStore;
use botify_core::recommenders::{RecommenderStrategy, UltraPower};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const KNOWN_TRACK: u64 = 1;
const UNKNOWN_TRACK: u64 = 999_999;
const USER: u64 = 7;

fn cascade(p_rand: f64) -> UltraPower<MemoryKvStore, MemoryKvStore> {
    let tracks = MemoryKvStore::new();
    let similar: Vec<u64> = (2..102).collect();
    tracks.insert(
        "1",
        encode_track(&Track::new(KNOWN_TRACK, "Artist", "Seed", similar)).expect("encode"),
    );

    let users = MemoryKvStore::new();
    let candidates: Vec<u64> = (1_000..1_500).collect();
    users.insert(USER.to_string(), encode_candidates(&candidates).expect("encode"));

    let catalog = Catalog::new((0..100_000).collect(), (0..1_000).collect()).expect("catalog");
    let config = RecommenderConfig::default().with_p_rand(p_rand);
    UltraPower::new(tracks, users, &catalog, &config).expect("cascade")
}

fn bench_tiers(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let mut group = c.benchmark_group("ultra_power");

    let ultra = cascade(0.0);
    group.bench_function("similarity", |b| {
        b.to_async(&rt)
            .iter(|| ultra.recommend_next(black_box(USER), KNOWN_TRACK, 0.95));
    });
    group.bench_function("indexed_low_listen_through", |b| {
        b.to_async(&rt)
            .iter(|| ultra.recommend_next(black_box(USER), KNOWN_TRACK, 0.2));
    });
    group.bench_function("top_pop_unknown_user", |b| {
        b.to_async(&rt)
            .iter(|| ultra.recommend_next(black_box(USER + 1), UNKNOWN_TRACK, 0.95));
    });

    let exploring = cascade(1.0);
    group.bench_function("random_exploration", |b| {
        b.to_async(&rt)
            .iter(|| exploring.recommend_next(black_box(USER), KNOWN_TRACK, 0.95));
    });

    group.finish();
}

criterion_group!(benches, bench_tiers);
criterion_main!(benches);
