use super::{try_alloc, BfsError, BfsTree, Event, UNREACHED};
use crate::algo::visits::Sequential;
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This is the classical textbook algorithm using a queue. To avoid storing
/// distances in the queue, a level separator is inserted between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// The visit is used as a reference for the [parallel
/// visit](crate::algo::visits::breadth_first::ParLevelSync), with which it
/// shares conventions and output.
///
/// # Examples
///
/// ```
/// use frontier_bfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = CsrGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 3)])?;
/// let mut visit = breadth_first::Seq::new(&graph);
/// let tree = visit.distances(0, no_logging![])?;
/// assert_eq!(tree.distances(), [0, 1, 2, 2]);
/// assert_eq!(tree.parents(), [0, 0, 1, 1]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}

impl<G: RandomAccessGraph> Sequential for Seq<G> {
    fn visit<C: FnMut(Event)>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<BfsTree, BfsError> {
        let num_nodes = self.graph.num_nodes();
        let Some(root_node) = NonMaxUsize::new(root).filter(|_| root < num_nodes) else {
            return Err(BfsError::InvalidSource { root, num_nodes });
        };
        self.reset();
        let mut distances = try_alloc(num_nodes, "distances", || UNREACHED)?;
        let mut parents = try_alloc(num_nodes, "parents", || UNREACHED)?;

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Visiting from node {root}..."));

        callback(Event::Init { root });
        self.visited.set(root, true);
        distances[root] = 0;
        parents[root] = root;
        callback(Event::Unknown {
            node: root,
            pred: root,
            root,
            distance: 0,
        });

        self.queue.push_back(Some(root_node));
        self.queue.push_back(None);

        let mut distance = 0;
        let mut level_size = 0;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    level_size += 1;
                    for succ in self.graph.successors(node) {
                        if succ >= num_nodes {
                            return Err(BfsError::InconsistentGraph {
                                node,
                                successor: succ,
                                num_nodes,
                            });
                        }
                        if !self.visited[succ] {
                            self.visited.set(succ, true);
                            distances[succ] = distance + 1;
                            parents[succ] = node;
                            callback(Event::Unknown {
                                node: succ,
                                pred: node,
                                root,
                                distance: distance + 1,
                            });
                            self.queue.push_back(NonMaxUsize::new(succ));
                        } else {
                            callback(Event::Known {
                                node: succ,
                                pred: node,
                                root,
                            });
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    callback(Event::FrontierSize {
                        distance,
                        nodes: level_size,
                    });
                    level_size = 0;
                    distance += 1;
                    if !self.queue.is_empty() {
                        self.queue.push_back(None);
                    }
                }
            }
        }

        pl.done();
        Ok(BfsTree::new(root, distances, parents, distance))
    }
}
