use std::collections::BTreeMap;
use std::hint::black_box;

use bench::{
    apply_medium_runtime_config, apply_small_runtime_config, default_rng, probe_keys,
    shuffled_keys,
};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use llrb::{LlrbMap, OrderedMap};

const SIZES: [usize; 4] = [1_000, 8_000, 64_000, 256_000];
const PROBES: usize = 1_000;

fn build<M: OrderedMap<Key = u64, Value = u64>>(keys: &[u64]) -> M {
    let mut map = M::new();
    for &k in keys {
        map.insert(k, k);
    }
    map
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("llrb/insert");
    apply_medium_runtime_config(&mut group);
    for &size in &SIZES {
        let keys = shuffled_keys(&mut default_rng(), size);
        group.bench_with_input(BenchmarkId::new("llrb", size), &keys, |b, keys| {
            b.iter(|| black_box(build::<LlrbMap<u64, u64>>(keys).len()))
        });
        group.bench_with_input(BenchmarkId::new("std_btree", size), &keys, |b, keys| {
            b.iter(|| {
                let map: BTreeMap<u64, u64> = keys.iter().map(|&k| (k, k)).collect();
                black_box(map.len())
            })
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("llrb/read");
    apply_small_runtime_config(&mut group);
    for &size in &SIZES {
        let mut rng = default_rng();
        let keys = shuffled_keys(&mut rng, size);
        let probes = probe_keys(&mut rng, size, PROBES);
        let map: LlrbMap<u64, u64> = build(&keys);

        group.bench_with_input(BenchmarkId::new("get", size), &probes, |b, probes| {
            b.iter(|| probes.iter().filter(|k| map.get(k).is_some()).count())
        });
        group.bench_with_input(BenchmarkId::new("floor", size), &probes, |b, probes| {
            b.iter(|| probes.iter().filter(|k| map.floor(k).is_ok()).count())
        });
        group.bench_with_input(BenchmarkId::new("rank", size), &probes, |b, probes| {
            b.iter(|| probes.iter().map(|k| map.rank(k)).sum::<usize>())
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("llrb/delete");
    apply_small_runtime_config(&mut group);
    for &size in &SIZES[..2] {
        let mut rng = default_rng();
        let keys = shuffled_keys(&mut rng, size);
        let map: LlrbMap<u64, u64> = build(&keys);

        group.bench_with_input(BenchmarkId::new("remove_all", size), &keys, |b, keys| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for k in keys {
                        black_box(map.remove(k));
                    }
                    map
                },
                BatchSize::LargeInput,
            )
        });
        group.bench_function(BenchmarkId::new("delete_min_all", size), |b| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    while let Ok(entry) = map.delete_min() {
                        black_box(entry);
                    }
                    map
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_read, bench_delete);
criterion_main!(benches);
