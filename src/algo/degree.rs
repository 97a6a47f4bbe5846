/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel maximum outdegree of a frontier.

use crate::graphs::RandomAccessGraph;
use nonmax::NonMaxUsize;

/// Returns the maximum outdegree of the nodes in `frontier`.
///
/// Empty slots (`None`) count as nodes of outdegree zero, so the result is
/// zero for an empty or all-empty frontier. Slices of at most `block_size`
/// slots are scanned sequentially; longer slices are split at the midpoint
/// and the halves are processed in parallel with [`rayon::join`] in the
/// current thread pool.
///
/// # Panics
///
/// If `block_size` is zero.
pub fn max_degree<G: RandomAccessGraph + Sync>(
    graph: &G,
    frontier: &[Option<NonMaxUsize>],
    block_size: usize,
) -> usize {
    assert!(block_size > 0, "The block size must be positive");
    if frontier.len() <= block_size {
        frontier
            .iter()
            .flatten()
            .map(|&node| graph.outdegree(node.get()))
            .max()
            .unwrap_or(0)
    } else {
        let (left, right) = frontier.split_at(frontier.len() / 2);
        let (left_max, right_max) = rayon::join(
            || max_degree(graph, left, block_size),
            || max_degree(graph, right, block_size),
        );
        left_max.max(right_max)
    }
}
