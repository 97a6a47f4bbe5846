/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{try_alloc, BfsError, BfsTree, Event, UNREACHED};
use crate::algo::{degree::max_degree, filter::filter, visits::Parallel};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use rayon::{prelude::*, ThreadPool};
use std::sync::atomic::{AtomicBool, Ordering};
use sync_cell_slice::{SyncCell, SyncSlice};

/// Default number of nodes in a block.
pub const BLOCK_SIZE: usize = 250;

/// A slot of a frontier buffer; `None` is an empty slot.
pub type Slot = Option<NonMaxUsize>;

/// Level-synchronous parallel breadth-first visits without locks.
///
/// At each level, the frontier buffer of the previous level, which is
/// oversized and contains empty slots, is [compacted](filter); then, the
/// maximum outdegree `d` of the frontier is [computed](max_degree), and a
/// buffer for the next level with `d` slots per frontier node is allocated.
/// The frontier is divided in blocks of `block_size` nodes, which are
/// expanded in parallel; the node at position `i` writes the successors it
/// claims only in the slots `[i·d..(i + 1)·d)`, so the writes of different
/// nodes never overlap and the buffer needs no synchronization. The empty
/// slots left over are removed by the compaction at the next level.
///
/// A node is claimed with a compare-and-exchange on its visited flag, so
/// exactly one thread succeeds; that thread is the only one writing the
/// distance and the parent of the node.
///
/// # Examples
///
/// Let's compute the distances from a corner of a cube:
///
/// ```
/// use frontier_bfs::prelude::*;
/// use frontier_bfs::thread_pool;
/// use dsi_progress_logger::no_logging;
///
/// let grid = Grid3::new(10)?;
/// let visit = breadth_first::ParLevelSync::new(&grid, breadth_first::BLOCK_SIZE);
/// let tree = visit.par_distances(0, &thread_pool![], no_logging![])?;
/// assert_eq!(tree.distance(grid.index(Point::new(9, 9, 9))), Some(27));
/// assert_eq!(tree.num_levels(), 28);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct ParLevelSync<G: RandomAccessGraph> {
    graph: G,
    block_size: usize,
}

impl<G: RandomAccessGraph> ParLevelSync<G> {
    /// Creates a level-synchronous parallel breadth-first visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    /// * `block_size`: the number of frontier nodes per block. High values
    ///   reduce overhead, but may lead to decreased performance on graphs
    ///   with a skewed outdegree distribution.
    ///
    /// # Panics
    ///
    /// If `block_size` is zero.
    pub fn new(graph: G, block_size: usize) -> Self {
        assert!(block_size > 0, "The block size must be positive");
        Self { graph, block_size }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl<G: RandomAccessGraph + Sync> ParLevelSync<G> {
    /// Expands the compacted `frontier` at distance `distance` into `next`,
    /// which must contain `max_deg` empty slots per frontier node.
    #[allow(clippy::too_many_arguments)]
    fn expand<C: Fn(Event) + Sync>(
        &self,
        frontier: &[Slot],
        next: &mut [Slot],
        max_deg: usize,
        distance: usize,
        root: usize,
        visited: &[AtomicBool],
        distances: &[SyncCell<usize>],
        parents: &[SyncCell<usize>],
        callback: &C,
    ) -> Result<(), BfsError> {
        let num_nodes = visited.len();
        let block_size = self.block_size.min(frontier.len());
        frontier
            .par_chunks(block_size)
            .zip(next.par_chunks_mut(block_size * max_deg))
            .try_for_each(|(block, block_slots)| {
                for (&slot, node_slots) in block.iter().zip(block_slots.chunks_mut(max_deg)) {
                    let Some(node) = slot else {
                        continue;
                    };
                    let node = node.get();
                    let mut claimed = 0;
                    for succ in self.graph.successors(node) {
                        if succ >= num_nodes {
                            return Err(BfsError::InconsistentGraph {
                                node,
                                successor: succ,
                                num_nodes,
                            });
                        }
                        let flag = &visited[succ];
                        if !flag.load(Ordering::Relaxed)
                            && flag
                                .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
                                .is_ok()
                        {
                            let Some(free_slot) = node_slots.get_mut(claimed) else {
                                return Err(BfsError::OutdegreeMismatch {
                                    node,
                                    outdegree: self.graph.outdegree(node),
                                });
                            };
                            *free_slot = NonMaxUsize::new(succ);
                            claimed += 1;
                            // Safety: only the thread claiming succ writes its
                            // distance and parent, and nobody reads them
                            // during the visit
                            unsafe {
                                distances[succ].set(distance + 1);
                                parents[succ].set(node);
                            }
                            callback(Event::Unknown {
                                node: succ,
                                pred: node,
                                root,
                                distance: distance + 1,
                            });
                        } else {
                            callback(Event::Known {
                                node: succ,
                                pred: node,
                                root,
                            });
                        }
                    }
                }
                Ok(())
            })
    }
}

impl<G: RandomAccessGraph + Sync> Parallel for ParLevelSync<G> {
    fn par_visit<C: Fn(Event) + Sync>(
        &self,
        root: usize,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<BfsTree, BfsError> {
        let num_nodes = self.graph.num_nodes();
        if root >= num_nodes {
            return Err(BfsError::InvalidSource { root, num_nodes });
        }

        let visited = try_alloc(num_nodes, "visited flags", || AtomicBool::new(false))?;
        let mut distances = try_alloc(num_nodes, "distances", || UNREACHED)?;
        let mut parents = try_alloc(num_nodes, "parents", || UNREACHED)?;

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Visiting from node {root}..."));

        callback(Event::Init { root });
        visited[root].store(true, Ordering::Relaxed);
        distances[root] = 0;
        parents[root] = root;
        callback(Event::Unknown {
            node: root,
            pred: root,
            root,
            distance: 0,
        });

        let distance_cells = distances.as_sync_slice();
        let parent_cells = parents.as_sync_slice();

        let mut curr: Vec<Slot> = vec![NonMaxUsize::new(root)];
        let mut size = 1;
        let mut distance = 0;
        let mut num_levels = 0;

        loop {
            let count =
                thread_pool.install(|| filter(&mut curr, size, self.block_size, Option::is_some));
            if count == 0 {
                break;
            }
            num_levels = distance + 1;
            callback(Event::FrontierSize {
                distance,
                nodes: count,
            });
            pl.update_with_count(count);

            let frontier = &curr[..count];
            let max_deg =
                thread_pool.install(|| max_degree(&self.graph, frontier, self.block_size));
            if max_deg == 0 {
                break;
            }

            let next_len = count.checked_mul(max_deg).ok_or(BfsError::Allocation {
                what: "frontier",
                len: usize::MAX,
            })?;
            let mut next = try_alloc(next_len, "frontier", || None)?.into_vec();
            thread_pool.install(|| {
                self.expand(
                    frontier,
                    &mut next,
                    max_deg,
                    distance,
                    root,
                    &visited,
                    distance_cells,
                    parent_cells,
                    &callback,
                )
            })?;

            curr = next;
            size = next_len;
            distance += 1;
        }

        pl.done();
        Ok(BfsTree::new(root, distances, parents, num_levels))
    }
}
