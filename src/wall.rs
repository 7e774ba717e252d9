//! Wall segments in canvas space.
//!
//! A wall is the line segment separating two adjacent cells, expressed in the same abstract
//! coordinate space the renderer draws in: cell `(row, col)` occupies the square from
//! `(col * cell_size, row * cell_size)` to `((col + 1) * cell_size, (row + 1) * cell_size)`. The
//! randomized Kruskal generator shuffles and carves these segments directly, so it needs the
//! inverse mapping from a segment back to the two cells it separates.

use std::fmt;

use crate::{
    error::MazeError,
    grid::{Cell, Direction},
};

/// A wall segment between two grid points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wall {
    /// Horizontal coordinate of the first end point.
    pub start_x: usize,
    /// Vertical coordinate of the first end point, growing downwards.
    pub start_y: usize,
    /// Horizontal coordinate of the second end point.
    pub end_x: usize,
    /// Vertical coordinate of the second end point.
    pub end_y: usize,
}

impl Wall {
    /// Builds a wall from its two end points.
    #[must_use]
    pub const fn new(start_x: usize, start_y: usize, end_x: usize, end_y: usize) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Returns the wall on the `direction` side of `cell`.
    #[must_use]
    pub const fn of(cell: Cell, direction: Direction, cell_size: usize) -> Self {
        let left = cell.col * cell_size;
        let top = cell.row * cell_size;
        let right = left + cell_size;
        let bottom = top + cell_size;

        match direction {
            Direction::Up => Self::new(left, top, right, top),
            Direction::Down => Self::new(left, bottom, right, bottom),
            Direction::Right => Self::new(right, top, right, bottom),
            Direction::Left => Self::new(left, top, left, bottom),
        }
    }

    /// Whether the segment runs top to bottom, i.e. separates a left and a right cell.
    #[must_use]
    pub const fn is_vertical(&self) -> bool {
        self.start_y != self.end_y
    }

    /// Resolves the wall back to the two cells it separates.
    ///
    /// Vertical walls yield `(left, right)`, horizontal walls yield `(upper, lower)`. This is the
    /// arithmetic inverse of [`Wall::of`]; no grid lookup is involved, so bounds on the far side
    /// (the grid dimension) are left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::WallOutOfGrid`] when `cell_size` is zero or the wall lies on the top
    /// or left border of the canvas, where there is no cell on the other side.
    pub fn cells(&self, cell_size: usize) -> Result<(Cell, Cell), MazeError> {
        let out_of_grid = || MazeError::WallOutOfGrid(*self);

        let row = self
            .start_y
            .min(self.end_y)
            .checked_div(cell_size)
            .ok_or_else(out_of_grid)?;
        let col = self
            .start_x
            .min(self.end_x)
            .checked_div(cell_size)
            .ok_or_else(out_of_grid)?;

        if self.is_vertical() {
            let left = col.checked_sub(1).ok_or_else(out_of_grid)?;
            Ok((Cell::new(row, left), Cell::new(row, col)))
        } else {
            let upper = row.checked_sub(1).ok_or_else(out_of_grid)?;
            Ok((Cell::new(upper, col), Cell::new(row, col)))
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[({}, {}) -> ({}, {})]",
            self.start_x, self.start_y, self.end_x, self.end_y
        )
    }
}
