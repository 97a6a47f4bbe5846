/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{GraphError, RandomAccessGraph};
use std::fmt::Display;
use std::str::FromStr;

/// Offsets of the six neighbors of a grid point, in the order in which
/// successors are returned.
const DIRECTIONS: [(isize, isize, isize); 6] = [
    (-1, 0, 0),
    (0, -1, 0),
    (0, 0, -1),
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1),
];

/// A point of a [`Grid3`].
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Point {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Returns the L1 distance between `self` and `other`.
    pub fn manhattan(&self, other: &Point) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Point {
    type Err = String;

    /// Parses a point of the form `x,y,z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split(',')
            .map(|c| c.trim().parse::<usize>().map_err(|e| format!("{c:?}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;
        match coords[..] {
            [x, y, z] => Ok(Point { x, y, z }),
            _ => Err(format!("Expected three coordinates, got {}", coords.len())),
        }
    }
}

/// The cubic grid graph of side `n` with 6-connectivity.
///
/// Point `(x, y, z)` has index `x + y·n + z·n²`, and it is adjacent to the
/// points differing by one in exactly one coordinate. The graph is implicit:
/// successors are computed from coordinates, so it uses constant space
/// regardless of its side.
///
/// # Examples
///
/// ```
/// use frontier_bfs::graphs::{Grid3, Point, RandomAccessGraph};
///
/// let grid = Grid3::new(3)?;
/// assert_eq!(grid.num_nodes(), 27);
/// let center = grid.index(Point::new(1, 1, 1));
/// assert_eq!(grid.outdegree(center), 6);
/// assert_eq!(grid.successors(0).into_iter().collect::<Vec<_>>(), vec![1, 3, 9]);
/// # Ok::<(), frontier_bfs::graphs::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid3 {
    side: usize,
    num_nodes: usize,
}

impl Grid3 {
    /// Creates a grid of side `side`.
    pub fn new(side: usize) -> Result<Self, GraphError> {
        let num_nodes = side
            .checked_mul(side)
            .and_then(|n| n.checked_mul(side))
            .ok_or(GraphError::GridTooLarge { side })?;
        Ok(Self { side, num_nodes })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the index of `point`.
    ///
    /// # Panics
    ///
    /// If a coordinate of `point` is not smaller than the side.
    #[inline(always)]
    pub fn index(&self, point: Point) -> usize {
        assert!(
            point.x < self.side && point.y < self.side && point.z < self.side,
            "Point {} is outside of a grid of side {}",
            point,
            self.side
        );
        point.x + point.y * self.side + point.z * self.side * self.side
    }

    /// Returns the point with the given index.
    #[inline(always)]
    pub fn point(&self, index: usize) -> Point {
        debug_assert!(index < self.num_nodes);
        Point {
            x: index % self.side,
            y: index / self.side % self.side,
            z: index / (self.side * self.side),
        }
    }
}

impl RandomAccessGraph for Grid3 {
    type Successors<'succ>
        = GridSuccessors
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> GridSuccessors {
        GridSuccessors {
            point: self.point(node),
            side: self.side,
            next_dir: 0,
        }
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        let Point { x, y, z } = self.point(node);
        let last = self.side - 1;
        [x, y, z]
            .into_iter()
            .map(|c| (c > 0) as usize + (c < last) as usize)
            .sum()
    }
}

/// Iterator over the successors of a node of a [`Grid3`].
#[derive(Debug, Clone)]
pub struct GridSuccessors {
    point: Point,
    side: usize,
    next_dir: usize,
}

impl Iterator for GridSuccessors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(&(dx, dy, dz)) = DIRECTIONS.get(self.next_dir) {
            self.next_dir += 1;
            let shift = |c: usize, d: isize| c.checked_add_signed(d).filter(|&c| c < self.side);
            if let (Some(x), Some(y), Some(z)) = (
                shift(self.point.x, dx),
                shift(self.point.y, dy),
                shift(self.point.z, dz),
            ) {
                return Some(x + y * self.side + z * self.side * self.side);
            }
        }
        None
    }
}
