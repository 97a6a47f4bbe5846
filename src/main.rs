/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use dsi_progress_logger::prelude::*;
use frontier_bfs::prelude::*;
use frontier_bfs::thread_pool;
use rayon::prelude::*;
use std::time::{Duration, Instant};

use breadth_first::{BfsTree, ParLevelSync, Seq, BLOCK_SIZE};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Sequential visit only.
    Seq,
    /// Parallel visit only.
    Par,
    /// Both visits, reporting the speedup.
    Both,
}

#[derive(Parser, Debug)]
#[command(
    name = "frontier-bfs",
    about = "Benchmarks breadth-first visits of a cubic grid, checking that distances are L1 distances.",
    long_about = None
)]
struct CliArgs {
    /// The side of the grid.
    #[arg(short, long, default_value_t = 500)]
    side: usize,
    /// The number of frontier nodes per block of the parallel visit.
    #[arg(short, long, default_value_t = BLOCK_SIZE)]
    block_size: usize,
    /// The number of threads of the parallel visit (default: number of CPUs).
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    /// The number of timed visits for each algorithm.
    #[arg(short = 'R', long, default_value_t = 5)]
    repeats: usize,
    /// The root of the visits, as x,y,z.
    #[arg(long, default_value = "0,0,0")]
    source: Point,
    /// Which visits to run.
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,
}

/// Returns true if every distance is the L1 distance from `source`.
fn check(grid: &Grid3, source: Point, tree: &BfsTree) -> bool {
    tree.distances()
        .par_iter()
        .enumerate()
        .all(|(node, &distance)| distance == grid.point(node).manhattan(&source))
}

/// Runs `visit` `repeats` times, logging the outcome of each check, and
/// returns the total time and whether all checks passed.
fn time(
    name: &str,
    repeats: usize,
    grid: &Grid3,
    source: Point,
    pl: &mut ProgressLogger,
    mut visit: impl FnMut(&mut ProgressLogger) -> Result<BfsTree>,
) -> Result<(Duration, bool)> {
    let mut total = Duration::ZERO;
    let mut passed = true;
    for _ in 0..repeats {
        let start = Instant::now();
        let tree = visit(pl)?;
        total += start.elapsed();

        let pass = check(grid, source, &tree);
        passed &= pass;
        pl.info(format_args!(
            "{} BFS {} ({} ms so far)",
            name,
            if pass { "succeeded" } else { "failed" },
            total.as_millis()
        ));
    }
    Ok((total, passed))
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let args = CliArgs::parse();

    let grid = Grid3::new(args.side)?;
    ensure!(
        args.source.x < args.side && args.source.y < args.side && args.source.z < args.side,
        "Source {} is outside of a grid of side {}",
        args.source,
        args.side
    );
    ensure!(args.block_size > 0, "The block size must be positive");
    let root = grid.index(args.source);
    let thread_pool = match args.threads {
        Some(num_threads) => thread_pool![num_threads],
        None => thread_pool![],
    };

    let main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Visiting a grid of side {} ({} nodes) from {} using {} threads",
        args.side,
        grid.num_nodes(),
        args.source,
        thread_pool.current_num_threads()
    ));

    let mut pl = progress_logger![display_memory = true];
    let mut all_passed = true;

    let seq = if args.mode != Mode::Par {
        let mut visit = Seq::new(&grid);
        let (elapsed, passed) = time("Sequential", args.repeats, &grid, args.source, &mut pl, |pl| {
            visit
                .distances(root, pl)
                .context("Sequential visit failed")
        })?;
        all_passed &= passed;
        Some(elapsed)
    } else {
        None
    };

    let par = if args.mode != Mode::Seq {
        let visit = ParLevelSync::new(&grid, args.block_size);
        let (elapsed, passed) = time("Parallel", args.repeats, &grid, args.source, &mut pl, |pl| {
            visit
                .par_distances(root, &thread_pool, pl)
                .context("Parallel visit failed")
        })?;
        all_passed &= passed;
        Some(elapsed)
    } else {
        None
    };

    if let Some(par) = par {
        main_pl.info(format_args!("Parallel BFS: {} ms", par.as_millis()));
    }
    if let Some(seq) = seq {
        main_pl.info(format_args!("Sequential BFS: {} ms", seq.as_millis()));
    }
    if let (Some(seq), Some(par)) = (seq, par) {
        main_pl.info(format_args!(
            "Speedup: {:.3}x",
            seq.as_secs_f64() / par.as_secs_f64()
        ));
    }

    ensure!(all_passed, "Some visits computed wrong distances");
    Ok(())
}
