//! The four maze generators behind one event-emitting contract.
//!
//! Each generator walks the shared [`SpanningTree`] (or the grid it spans), decides which walls
//! to remove, and reports every decision through an [`EventSink`]. They differ only in strategy:
//!
//! - [`Algorithm::AldousBroder`] performs a uniform random walk and carves into every cell the
//!   first time the walk reaches it;
//! - [`Algorithm::RecursiveBacktracker`] is a randomized depth-first search with an explicit
//!   stack;
//! - [`Algorithm::BinaryTree`] makes one local, biased choice per cell;
//! - [`Algorithm::RandomizedKruskal`] unions cells across a shuffled list of walls.
//!
//! All of them stop promptly once their [`CancellationToken`] is triggered and carve exactly
//! `N * N - 1` passages when they run to completion.

mod aldous_broder;
mod binary_tree;
mod kruskal;
mod recursive_backtracker;

use std::fmt;

use clap::ValueEnum;
use log::{info, warn};
use rand::Rng;

use crate::{
    error::MazeError,
    events::{CancellationToken, Emitter, EventSink, Interrupt, Outcome},
    grid::{Cell, Grid},
    tree::SpanningTree,
};

/// Selectable generation strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Uniform random walk; slow to finish but unbiased.
    AldousBroder,
    /// Randomized depth-first search producing long winding corridors.
    #[default]
    RecursiveBacktracker,
    /// One coin flip per cell between carving down or right.
    BinaryTree,
    /// Random wall removal guarded by a disjoint-set forest.
    RandomizedKruskal,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 4] = [
        Self::AldousBroder,
        Self::RecursiveBacktracker,
        Self::BinaryTree,
        Self::RandomizedKruskal,
    ];

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AldousBroder => "Aldous-Broder",
            Self::RecursiveBacktracker => "Recursive backtracker",
            Self::BinaryTree => "Binary tree",
            Self::RandomizedKruskal => "Randomized Kruskal",
        }
    }

    /// The algorithm after this one in menu order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::AldousBroder => Self::RecursiveBacktracker,
            Self::RecursiveBacktracker => Self::BinaryTree,
            Self::BinaryTree => Self::RandomizedKruskal,
            Self::RandomizedKruskal => Self::AldousBroder,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Runs `algorithm` over `tree` to completion or cancellation.
///
/// Events are delivered to `sink` synchronously, in order, without any delay. The token is
/// checked at the top of every loop iteration and again before every event, so once it is
/// cancelled no further event is emitted. `cell_size` is the side length of a cell in wall
/// coordinates; only [`Algorithm::RandomizedKruskal`] uses it.
///
/// # Errors
///
/// Returns an invariant-violation [`MazeError`] when the generator finds the tree or its own
/// bookkeeping in an impossible state. Cancellation is reported as [`Outcome::Cancelled`], not as
/// an error.
pub fn generate<R, S>(
    algorithm: Algorithm,
    tree: &SpanningTree,
    cell_size: usize,
    rng: &mut R,
    sink: &mut S,
    token: &CancellationToken,
) -> Result<Outcome, MazeError>
where
    R: Rng,
    S: EventSink + ?Sized,
{
    let dimension = tree.grid().dimension();
    info!("running {algorithm} on a {dimension}x{dimension} grid");

    let mut emitter = Emitter::new(sink, token);
    let result = match algorithm {
        Algorithm::AldousBroder => aldous_broder::carve(tree, rng, &mut emitter),
        Algorithm::RecursiveBacktracker => recursive_backtracker::carve(tree, rng, &mut emitter),
        Algorithm::BinaryTree => binary_tree::carve(tree, rng, &mut emitter),
        Algorithm::RandomizedKruskal => kruskal::carve(tree, cell_size, rng, &mut emitter),
    };

    if let Err(Interrupt::Failed(error)) = &result {
        warn!("{algorithm} aborted: {error}");
    }

    let outcome = emitter.finish(result)?;
    match outcome {
        Outcome::Completed(stats) => info!(
            "{algorithm} completed: {} visited, {} carved, {} skipped",
            stats.visited, stats.carved, stats.skipped
        ),
        Outcome::Cancelled(stats) => info!(
            "{algorithm} cancelled after {} events",
            stats.events()
        ),
    }

    Ok(outcome)
}

/// Visited flags for every cell of a grid.
struct VisitedCells {
    /// Grid the flags are indexed by.
    grid: Grid,
    /// One flag per cell, row-major.
    seen: Vec<bool>,
}

impl VisitedCells {
    /// All cells unvisited.
    fn new(grid: Grid) -> Self {
        Self {
            grid,
            seen: vec![false; grid.cell_count()],
        }
    }

    /// Whether `cell` was visited. Cells outside the grid count as visited so nothing walks there.
    fn contains(&self, cell: Cell) -> bool {
        self.grid
            .index(cell)
            .and_then(|index| self.seen.get(index))
            .copied()
            .unwrap_or(true)
    }

    /// Marks `cell` visited, returning whether it was unvisited before.
    fn insert(&mut self, cell: Cell) -> bool {
        let Some(seen) = self
            .grid
            .index(cell)
            .and_then(|index| self.seen.get_mut(index))
        else {
            return false;
        };

        !std::mem::replace(seen, true)
    }
}
