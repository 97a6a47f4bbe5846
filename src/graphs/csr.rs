/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, RandomAccessGraph};

/// An immutable graph in CSR (Compressed Sparse Row) format.
///
/// The successors of node `x` are stored in
/// `successors[offsets[x]..offsets[x + 1]]`, in the order in which the
/// corresponding arcs were provided. Duplicate arcs and loops are kept.
///
/// # Examples
///
/// ```
/// use frontier_bfs::graphs::{CsrGraph, RandomAccessGraph};
///
/// let graph = CsrGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
/// assert_eq!(graph.num_nodes(), 4);
/// assert_eq!(graph.num_arcs(), 4);
/// assert_eq!(graph.successors(1).into_iter().collect::<Vec<_>>(), vec![2, 3]);
/// assert_eq!(graph.outdegree(3), 0);
/// # Ok::<(), frontier_bfs::graphs::GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    offsets: Box<[usize]>,
    successors: Box<[usize]>,
}

impl CsrGraph {
    /// Creates a graph with `num_nodes` nodes from a list of arcs.
    ///
    /// Returns an error if an arc has an endpoint not smaller than
    /// `num_nodes`.
    pub fn from_arcs(
        num_nodes: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let arcs = arcs.into_iter().collect::<Vec<_>>();
        if let Some(&(src, dst)) = arcs
            .iter()
            .find(|&&(src, dst)| src >= num_nodes || dst >= num_nodes)
        {
            return Err(GraphError::NodeOutOfRange {
                src,
                dst,
                num_nodes,
            });
        }

        // Counting sort by source, which keeps the relative order of the
        // successors of each node
        let mut offsets = vec![0; num_nodes + 1];
        for &(src, _) in &arcs {
            offsets[src + 1] += 1;
        }
        for i in 0..num_nodes {
            offsets[i + 1] += offsets[i];
        }
        let mut next = offsets.clone();
        let mut successors = vec![0; arcs.len()];
        for (src, dst) in arcs {
            successors[next[src]] = dst;
            next[src] += 1;
        }

        Ok(Self {
            offsets: offsets.into_boxed_slice(),
            successors: successors.into_boxed_slice(),
        })
    }

    /// Creates a symmetric graph with `num_nodes` nodes from a list of
    /// undirected edges: each edge `(u, v)` yields the arcs `(u, v)` and
    /// `(v, u)`.
    pub fn from_edges(
        num_nodes: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        Self::from_arcs(
            num_nodes,
            edges.into_iter().flat_map(|(u, v)| [(u, v), (v, u)]),
        )
    }

    /// Returns the number of arcs.
    pub fn num_arcs(&self) -> usize {
        self.successors.len()
    }
}

impl RandomAccessGraph for CsrGraph {
    type Successors<'succ>
        = std::iter::Copied<std::slice::Iter<'succ, usize>>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.successors[self.offsets[node]..self.offsets[node + 1]]
            .iter()
            .copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            CsrGraph::from_arcs(3, [(0, 1), (1, 3)]),
            Err(GraphError::NodeOutOfRange {
                src: 1,
                dst: 3,
                num_nodes: 3
            })
        );
    }

    #[test]
    fn test_successor_order_is_kept() -> anyhow::Result<()> {
        let graph = CsrGraph::from_arcs(3, [(2, 1), (0, 2), (2, 0), (0, 1), (2, 2)])?;
        assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(graph.successors(1).count(), 0);
        assert_eq!(graph.successors(2).collect::<Vec<_>>(), vec![1, 0, 2]);
        Ok(())
    }

    #[test]
    fn test_from_edges() -> anyhow::Result<()> {
        let graph = CsrGraph::from_edges(3, [(0, 1), (1, 2)])?;
        assert_eq!(graph.num_arcs(), 4);
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.outdegree(2), 1);
        Ok(())
    }

    #[test]
    fn test_empty() -> anyhow::Result<()> {
        let graph = CsrGraph::from_arcs(0, Vec::new())?;
        assert_eq!(graph.num_nodes(), 0);
        assert_eq!(graph.num_arcs(), 0);
        Ok(())
    }
}
