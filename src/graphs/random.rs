/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random connected graphs.

use super::{CsrGraph, GraphError};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

/// Returns a random connected symmetric graph with `num_nodes` nodes.
///
/// The graph is the union of a random spanning tree, in which every node
/// but the first one is attached to a uniformly chosen earlier node, and
/// `num_extra_edges` uniformly chosen edges (loops and duplicates included).
/// Node ids are then shuffled. The result depends only on the arguments, as
/// the [pseudorandom number generator](SmallRng) is seeded with `seed`.
///
/// # Examples
///
/// ```
/// use frontier_bfs::graphs::{random::connected, RandomAccessGraph};
///
/// let graph = connected(100, 50, 0)?;
/// assert_eq!(graph.num_nodes(), 100);
/// assert_eq!(graph.num_arcs(), 2 * (99 + 50));
/// # Ok::<(), frontier_bfs::graphs::GraphError>(())
/// ```
pub fn connected(
    num_nodes: usize,
    num_extra_edges: usize,
    seed: u64,
) -> Result<CsrGraph, GraphError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut perm = (0..num_nodes).collect::<Vec<_>>();
    perm.shuffle(&mut rng);

    let mut edges = Vec::with_capacity(num_nodes.saturating_sub(1) + num_extra_edges);
    for node in 1..num_nodes {
        let parent = rng.random_range(0..node);
        edges.push((perm[parent], perm[node]));
    }
    if num_nodes > 0 {
        for _ in 0..num_extra_edges {
            edges.push((
                rng.random_range(0..num_nodes),
                rng.random_range(0..num_nodes),
            ));
        }
    }

    CsrGraph::from_edges(num_nodes, edges)
}
