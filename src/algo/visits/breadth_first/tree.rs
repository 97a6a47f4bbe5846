/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::UNREACHED;

/// The result of a breadth-first visit from a root.
///
/// Distances and parents are indexed by node. Nodes that have not been
/// reached have distance and parent equal to [`UNREACHED`]; the root has
/// distance zero and is its own parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    root: usize,
    distances: Box<[usize]>,
    parents: Box<[usize]>,
    num_levels: usize,
}

impl BfsTree {
    pub(crate) fn new(
        root: usize,
        distances: Box<[usize]>,
        parents: Box<[usize]>,
        num_levels: usize,
    ) -> Self {
        debug_assert_eq!(distances.len(), parents.len());
        Self {
            root,
            distances,
            parents,
            num_levels,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the distances from the root, indexed by node.
    pub fn distances(&self) -> &[usize] {
        &self.distances
    }

    /// Returns the parents in the visit tree, indexed by node.
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Returns the distance of `node` from the root, or [`None`] if `node`
    /// has not been reached.
    pub fn distance(&self, node: usize) -> Option<usize> {
        Some(self.distances[node]).filter(|&d| d != UNREACHED)
    }

    /// Returns the parent of `node` in the visit tree, or [`None`] if `node`
    /// has not been reached.
    pub fn parent(&self, node: usize) -> Option<usize> {
        Some(self.parents[node]).filter(|&p| p != UNREACHED)
    }

    /// Returns the number of nonempty levels of the visit, that is, the
    /// eccentricity of the root plus one.
    pub fn num_levels(&self) -> usize {
        self.num_levels
    }

    /// Returns the number of reached nodes.
    pub fn num_reached(&self) -> usize {
        self.distances.iter().filter(|&&d| d != UNREACHED).count()
    }

    /// Returns a shortest path from the root to `node`, both included, or
    /// [`None`] if `node` has not been reached.
    pub fn path_to(&self, node: usize) -> Option<Vec<usize>> {
        let mut path = Vec::with_capacity(self.distance(node)? + 1);
        let mut curr = node;
        path.push(curr);
        while curr != self.root {
            curr = self.parents[curr];
            path.push(curr);
        }
        path.reverse();
        Some(path)
    }

    /// Consumes the tree, returning its distances.
    pub fn into_distances(self) -> Box<[usize]> {
        self.distances
    }
}
