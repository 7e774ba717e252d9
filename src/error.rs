//! Error type shared by the maze engine.
//!
//! Cancellation is deliberately absent from this enumeration: a cancelled run is a normal
//! [`Outcome`](crate::events::Outcome), not a failure.

use std::io;

use thiserror::Error;

use crate::{grid::Cell, wall::Wall};

/// Everything that can go wrong while configuring or running a maze generation.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The requested grid dimension is not a positive integer.
    #[error("grid dimension must be positive, got {0}")]
    InvalidDimension(usize),
    /// The drawing surface has no extent at all.
    #[error("a canvas of {canvas} units cannot hold a {dimension}x{dimension} grid")]
    CanvasTooSmall {
        /// Side length of the canvas.
        canvas: usize,
        /// Requested grid dimension.
        dimension: usize,
    },
    /// A disjoint-set query was made for a cell that was never registered.
    #[error("cell {0} was never registered in the disjoint set")]
    UnregisteredCell(Cell),
    /// A wall segment maps to cells outside the grid.
    #[error("wall {0} does not separate two cells of the grid")]
    WallOutOfGrid(Wall),
    /// A walk reached a cell with no neighbour to continue to.
    #[error("cell {0} has no neighbour to walk to")]
    IsolatedCell(Cell),
    /// Two cells that were expected to be orthogonal neighbours are not.
    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Cell, Cell),
    /// The driver asked for something that is disallowed while a run is active.
    #[error("a maze generation run is already in progress")]
    Busy,
    /// The worker thread could not be started.
    #[error("failed to spawn the generation worker")]
    WorkerSpawn(#[source] io::Error),
    /// The worker thread panicked before reporting an outcome.
    #[error("the generation worker panicked")]
    WorkerPanicked,
}

impl MazeError {
    /// Whether the error is a broken internal invariant rather than a user-facing problem.
    ///
    /// These errors abort the run they occur in; the only recovery is to rebuild and restart.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::UnregisteredCell(_)
                | Self::WallOutOfGrid(_)
                | Self::IsolatedCell(_)
                | Self::NotAdjacent(_, _)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MazeError::InvalidDimension(0).to_string(),
            "grid dimension must be positive, got 0"
        );
        assert_eq!(
            MazeError::CanvasTooSmall {
                canvas: 0,
                dimension: 20
            }
            .to_string(),
            "a canvas of 0 units cannot hold a 20x20 grid"
        );
        assert_eq!(
            MazeError::NotAdjacent(Cell::new(0, 0), Cell::new(2, 2)).to_string(),
            "cells (0, 0) and (2, 2) are not adjacent"
        );
    }

    #[test]
    fn test_invariant_violation_grouping() {
        assert!(MazeError::UnregisteredCell(Cell::ROOT).is_invariant_violation());
        assert!(MazeError::WallOutOfGrid(Wall::new(0, 0, 0, 40)).is_invariant_violation());
        assert!(MazeError::IsolatedCell(Cell::ROOT).is_invariant_violation());
        assert!(!MazeError::InvalidDimension(0).is_invariant_violation());
        assert!(!MazeError::Busy.is_invariant_violation());
        assert!(!MazeError::WorkerPanicked.is_invariant_violation());
    }
}
