// Copyright 2025 the Rankwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rankwood_bst::Bst;
use rankwood_kdtree::KdTree;
use rankwood_order::{NumericKey, key, point};

fn shuffled_keys(n: u32, seed: u64) -> Vec<u32> {
    let mut keys: Vec<u32> = (0..n).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(seed));
    keys
}

fn random_points(count: usize, extent: f64, seed: u64) -> Vec<[NumericKey; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| point(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

fn bench_bst(c: &mut Criterion) {
    let mut group = c.benchmark_group("bst");
    for &n in &[1_024_u32, 16_384] {
        let keys = shuffled_keys(n, 0xCAFE_F00D);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_function(format!("insert_shuffled_n{n}"), |b| {
            b.iter_batched(
                Bst::<NumericKey, u32>::new,
                |mut bst| {
                    for &k in &keys {
                        bst.insert(key(f64::from(k)), k);
                    }
                    black_box(bst.len());
                },
                BatchSize::SmallInput,
            );
        });

        let bst: Bst<NumericKey, u32> = keys.iter().map(|&k| (key(f64::from(k)), k)).collect();
        group.bench_function(format!("rank_then_nth_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for probe in (0..n).step_by(7) {
                    let rank = bst.rank(&key(f64::from(probe) + 0.5));
                    total += rank;
                    black_box(bst.nth(rank));
                }
                black_box(total);
            });
        });

        group.bench_function(format!("remove_half_n{n}"), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (key(f64::from(k)), k)).collect::<Bst<_, _>>(),
                |mut bst| {
                    for k in (0..n).step_by(2) {
                        black_box(bst.remove(&key(f64::from(k))));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_kdtree(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree");
    for &n in &[1_024_usize, 16_384] {
        let points = random_points(n, 2000.0, 0xBADC_F00D);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_random_n{n}"), |b| {
            b.iter_batched(
                || KdTree::<NumericKey, usize>::new(2).unwrap(),
                |mut tree| {
                    for (i, p) in points.iter().enumerate() {
                        let _ = tree.insert(*p, i);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            );
        });

        let mut tree: KdTree<NumericKey, usize> = KdTree::new(2).unwrap();
        for (i, p) in points.iter().enumerate() {
            let _ = tree.insert(*p, i);
        }
        group.bench_function(format!("range_search_many_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for q in 0..64 {
                    let x = f64::from(q % 8) * 225.0;
                    let y = f64::from(q / 8) * 225.0;
                    let hits = tree
                        .range_search_2d(&point(x, y), &point(x + 400.0, y + 400.0))
                        .unwrap();
                    total += hits.len();
                }
                black_box(total);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bst, bench_kdtree);
criterion_main!(benches);
