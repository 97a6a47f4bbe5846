//! Visits on graphs.
//!
//! Sequential visits implement [`Sequential`], parallel visits implement
//! [`Parallel`]. Both compute a [`BfsTree`](breadth_first::BfsTree) and
//! report the progress of the visit to a callback receiving
//! [events](breadth_first::Event).

pub mod breadth_first;

use breadth_first::{BfsError, BfsTree, Event};
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// A sequential visit.
///
/// Implementations must provide the [`visit`](Sequential::visit) method,
/// which visits the graph starting from a given node, calling the callback
/// for each event of the visit.
pub trait Sequential {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    ///
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `pl`: A progress logger.
    fn visit<C: FnMut(Event)>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<BfsTree, BfsError>;

    /// Visits the graph from the specified node without a callback.
    fn distances(&mut self, root: usize, pl: &mut impl ProgressLog) -> Result<BfsTree, BfsError> {
        self.visit(root, |_| {}, pl)
    }
}

/// A parallel visit.
///
/// Implementations must provide the [`par_visit`](Parallel::par_visit)
/// method, which visits the graph starting from a given node using the
/// threads of a given pool. The callback may be called concurrently by
/// several threads.
pub trait Parallel {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    ///
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `thread_pool`: The thread pool to use for parallel computation.
    ///
    /// * `pl`: A progress logger.
    fn par_visit<C: Fn(Event) + Sync>(
        &self,
        root: usize,
        callback: C,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<BfsTree, BfsError>;

    /// Visits the graph from the specified node without a callback.
    fn par_distances(
        &self,
        root: usize,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<BfsTree, BfsError> {
        self.par_visit(root, |_| {}, thread_pool, pl)
    }
}
