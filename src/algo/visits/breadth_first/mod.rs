//! Breadth-first visits.
//!
//! Implementations compute a [`BfsTree`] and accept a callback receiving an
//! [`Event`] for each step of the visit.

mod seq;
pub use seq::*;

mod par_level;
pub use par_level::*;

mod tree;
pub use tree::*;

/// Distance and parent of the nodes that have not been reached.
pub const UNREACHED: usize = usize::MAX;

/// Types of callback events generated during a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// Initialization. This event is generated once, before any other.
    Init {
        /// The root of the visit.
        root: usize,
    },
    /// The node has been claimed by the visit: we are traversing a new tree
    /// arc, unless `node`, `pred` and `root` are all equal, which happens only
    /// for the root.
    ///
    /// This event is generated exactly once for each reachable node.
    Unknown {
        /// The claimed node.
        node: usize,
        /// The parent of `node` in the visit tree.
        pred: usize,
        /// The root of the visit.
        root: usize,
        /// The distance of `node` from `root`.
        distance: usize,
    },
    /// The node has been claimed before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    ///
    /// Note how in parallel contexts this does not guarantee that the callback
    /// with [`Unknown`](`Event::Unknown`) for `node` has already been called.
    Known {
        /// The node.
        node: usize,
        /// The node whose successors are being enumerated.
        pred: usize,
        /// The root of the visit.
        root: usize,
    },
    /// The size of the set of nodes at a given distance from the root.
    ///
    /// This event is generated once for each nonempty level.
    FrontierSize {
        /// The distance of the nodes from the root.
        distance: usize,
        /// The number of nodes at `distance`.
        nodes: usize,
    },
}

/// Errors that abort a breadth-first visit.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BfsError {
    #[error("Root {root} is not a node of a graph with {num_nodes} nodes")]
    InvalidSource { root: usize, num_nodes: usize },
    #[error("Node {node} has successor {successor}, but the graph has {num_nodes} nodes")]
    InconsistentGraph {
        node: usize,
        successor: usize,
        num_nodes: usize,
    },
    #[error("Node {node} has more successors than its outdegree {outdegree}")]
    OutdegreeMismatch { node: usize, outdegree: usize },
    #[error("Cannot allocate {len} elements for the {what}")]
    Allocation { what: &'static str, len: usize },
}

/// Allocates a boxed slice of `len` elements initialized by `init`,
/// returning [`BfsError::Allocation`] instead of aborting on failure.
pub(crate) fn try_alloc<T>(
    len: usize,
    what: &'static str,
    init: impl FnMut() -> T,
) -> Result<Box<[T]>, BfsError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| BfsError::Allocation { what, len })?;
    v.resize_with(len, init);
    Ok(v.into_boxed_slice())
}
