/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use frontier_bfs::algo::{filter::filter, scan::scan};
use frontier_bfs::prelude::*;
use frontier_bfs::thread_pool;

use breadth_first::{ParLevelSync, Seq, BLOCK_SIZE};

const GRID_SIDES: [usize; 3] = [32, 64, 128];
const NUM_SAMPLES: usize = 10;

pub fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Breadth-first visit");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    let thread_pool = thread_pool![];

    for side in GRID_SIDES {
        let grid = Grid3::new(side).unwrap();
        let parameter = format!("grid {side} ({} nodes)", grid.num_nodes());
        group.throughput(Throughput::Elements(grid.num_nodes() as u64));

        group.bench_with_input(BenchmarkId::new("Sequential", &parameter), &grid, |b, g| {
            let mut visit = Seq::new(g);
            b.iter_with_large_drop(|| visit.distances(0, no_logging![]).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("Parallel", &parameter), &grid, |b, g| {
            let visit = ParLevelSync::new(g, BLOCK_SIZE);
            b.iter_with_large_drop(|| {
                visit
                    .par_distances(0, &thread_pool, no_logging![])
                    .unwrap()
            });
        });
    }
    group.finish();
}

pub fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Primitives");
    group.sample_size(NUM_SAMPLES);
    let thread_pool = thread_pool![];
    let len = 1 << 22;
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("scan", |b| {
        let a = vec![1_usize; len];
        b.iter_batched_ref(
            || a.clone(),
            |a| thread_pool.install(|| scan(a)),
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("filter", |b| {
        let a = (0..len as i64)
            .map(|i| if i % 3 == 0 { i } else { -1 })
            .collect::<Vec<_>>();
        b.iter_batched_ref(
            || a.clone(),
            |a| thread_pool.install(|| filter(a, len, BLOCK_SIZE, |&x| x >= 0)),
            criterion::BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_bfs, bench_primitives);
criterion_main!(benches);
