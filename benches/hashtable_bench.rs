use chain_hashtable::HashTable;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn filled(seed: u64, n: usize) -> (HashTable<u64>, Vec<String>) {
    let mut t = HashTable::new();
    let keys: Vec<String> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        t.insert(k, i as u64).unwrap();
    }
    (t, keys)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    let keys: Vec<String> = lcg(1).take(100_000).map(key).collect();
    c.bench_function("hashtable::insert_fresh_100k", |b| {
        b.iter_batched(
            HashTable::<u64>::new,
            |mut t| {
                for (i, k) in keys.iter().enumerate() {
                    t.insert(k, i as u64).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_search_hit(c: &mut Criterion) {
    let (t, keys) = filled(7, 100_000);
    c.bench_function("hashtable::search_hit", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| black_box(t.search(it.next().unwrap())))
    });
}

fn bench_search_miss(c: &mut Criterion) {
    let (t, _) = filled(11, 100_000);
    let misses: Vec<String> = lcg(0xdead_beef).take(1024).map(key).collect();
    c.bench_function("hashtable::search_miss", |b| {
        let mut it = misses.iter().cycle();
        b.iter(|| black_box(t.search(it.next().unwrap())))
    });
}

fn bench_delete_shrink_100k(c: &mut Criterion) {
    c.bench_function("hashtable::delete_all_100k", |b| {
        b.iter_batched(
            || filled(5, 100_000),
            |(mut t, keys)| {
                for k in &keys {
                    let _ = t.delete(k);
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("hashtable::resize_50k_entries", |b| {
        b.iter_batched(
            || filled(3, 50_000).0,
            |mut t| {
                let grown = t.capacity() * 2;
                t.resize(grown).unwrap();
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert_fresh_100k, bench_search_hit, bench_search_miss,
        bench_delete_shrink_100k, bench_resize
}
criterion_main!(benches);
