/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs the visits run on.
//!
//! Visits access graphs only through [`RandomAccessGraph`]: the number of
//! nodes, the successors of a node and its outdegree. Successor lists must
//! not change during a visit.

mod csr;
pub use csr::*;

mod grid;
pub use grid::*;

pub mod random;

/// Errors raised while building a graph.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Arc ({src}, {dst}) has an endpoint outside of [0..{num_nodes})")]
    NodeOutOfRange {
        src: usize,
        dst: usize,
        num_nodes: usize,
    },
    #[error("A grid of side {side} has more than usize::MAX nodes")]
    GridTooLarge { side: usize },
}

/// A graph providing random access to the successors of its nodes.
pub trait RandomAccessGraph {
    /// The type of the iterator over the successors of a node.
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes; node ids are in `[0..num_nodes())`.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`.
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of `node`.
    ///
    /// Must be equal to the number of items returned by
    /// [`successors`](RandomAccessGraph::successors).
    fn outdegree(&self, node: usize) -> usize;
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'succ>
        = G::Successors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}
