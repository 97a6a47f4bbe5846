/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Level-synchronous parallel breadth-first visits.
//!
//! The parallel visit is built from three parallel primitives: an exclusive
//! [prefix sum](algo::scan), a [stream compaction](algo::filter) and a
//! [degree probe](algo::degree). Frontiers are expanded into oversized,
//! sentinel-padded buffers in which every frontier node owns a disjoint range
//! of slots, so no synchronization is needed on the buffers; the next level
//! compacts them away. Nodes are claimed exactly once by an atomic
//! compare-and-exchange on their visited flag.

pub mod algo;
pub mod graphs;

#[doc(hidden)]
pub use rayon;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::visits::{Parallel, Sequential};
    pub use graphs::RandomAccessGraph;
}

/// Use `use frontier_bfs::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::filter::filter;
    pub use algo::scan::scan;
    pub use algo::visits::breadth_first;
    pub use graphs::{CsrGraph, Grid3, Point};
    pub use traits::*;
}

/// Builds a [`rayon::ThreadPool`].
///
/// Without arguments, the pool uses rayon's default number of threads;
/// with an expression argument, it uses the given number of threads.
///
/// ```
/// use frontier_bfs::thread_pool;
/// let default = thread_pool![];
/// let four = thread_pool![4];
/// assert_eq!(four.current_num_threads(), 4);
/// ```
#[macro_export]
macro_rules! thread_pool {
    () => {
        $crate::rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        $crate::rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with {} threads",
                    $num_threads
                )
            })
    };
}
