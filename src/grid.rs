//! Square grid topology.
//!
//! This module contains the value types every other part of the crate speaks in: the [`Cell`]
//! coordinate, the [`Direction`] relating two adjacent cells, and the [`Grid`] that answers
//! boundary questions for a given dimension. Nothing here holds mutable state; a [`Grid`] is
//! recomputed whenever the dimension changes.

use std::fmt;

use crate::error::MazeError;

/// A single maze cell addressed by row and column.
///
/// Cells are plain values. Two cells with the same coordinates are interchangeable, which is why
/// the type is [`Copy`] and compares and hashes by `(row, col)` only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row, growing downwards.
    pub row: usize,
    /// Zero-based column, growing to the right.
    pub col: usize,
}

impl Cell {
    /// Builds a cell from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The fixed root every traversal starts from.
    pub const ROOT: Self = Self::new(0, 0);
}

impl fmt::Display for Cell {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Relation between a cell and one of its four orthogonal neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1.
    Up,
    /// Towards row + 1.
    Down,
    /// Towards col + 1.
    Right,
    /// Towards col - 1.
    Left,
}

impl Direction {
    /// All directions in the fixed exploration order used by tree construction and wall
    /// enumeration.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Returns the direction pointing back the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Boundary oracle for an `N x N` grid.
///
/// A grid only knows its dimension. Every question about neighbours is answered arithmetically
/// from a cell's coordinates, so the type is cheap to copy around and never goes stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    dimension: usize,
}

impl Grid {
    /// Creates a grid with `dimension` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimension`] when `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self, MazeError> {
        if dimension == 0 {
            return Err(MazeError::InvalidDimension(dimension));
        }

        Ok(Self { dimension })
    }

    /// Number of rows (and columns) of the grid.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells, `N * N`.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dimension * self.dimension
    }

    /// Whether `cell` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.dimension && cell.col < self.dimension
    }

    /// Whether `cell` has a neighbour above it.
    #[must_use]
    pub const fn has_up(cell: Cell) -> bool {
        cell.row > 0
    }

    /// Whether `cell` has a neighbour below it.
    #[must_use]
    pub const fn has_down(&self, cell: Cell) -> bool {
        cell.row + 1 < self.dimension
    }

    /// Whether `cell` has a neighbour to its right.
    #[must_use]
    pub const fn has_right(&self, cell: Cell) -> bool {
        cell.col + 1 < self.dimension
    }

    /// Whether `cell` has a neighbour to its left.
    #[must_use]
    pub const fn has_left(cell: Cell) -> bool {
        cell.col > 0
    }

    /// Whether the neighbour of `cell` in `direction` exists.
    #[must_use]
    pub const fn has(&self, cell: Cell, direction: Direction) -> bool {
        match direction {
            Direction::Up => Self::has_up(cell),
            Direction::Down => self.has_down(cell),
            Direction::Right => self.has_right(cell),
            Direction::Left => Self::has_left(cell),
        }
    }

    /// Returns the neighbour of `cell` in `direction`, if it is inside the grid.
    #[must_use]
    pub const fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if !self.contains(cell) || !self.has(cell, direction) {
            return None;
        }

        Some(match direction {
            Direction::Up => Cell::new(cell.row - 1, cell.col),
            Direction::Down => Cell::new(cell.row + 1, cell.col),
            Direction::Right => Cell::new(cell.row, cell.col + 1),
            Direction::Left => Cell::new(cell.row, cell.col - 1),
        })
    }

    /// Flat row-major index of `cell`, or `None` outside the grid.
    #[must_use]
    pub const fn index(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.dimension + cell.col)
        } else {
            None
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Cell::new(row, col)))
    }
}

/// Returns the direction leading from `from` to the adjacent cell `to`.
///
/// # Errors
///
/// Returns [`MazeError::NotAdjacent`] when the two cells are not orthogonal neighbours.
pub fn direction_between(from: Cell, to: Cell) -> Result<Direction, MazeError> {
    if from.col == to.col && from.row.checked_sub(1) == Some(to.row) {
        Ok(Direction::Up)
    } else if from.col == to.col && from.row.checked_add(1) == Some(to.row) {
        Ok(Direction::Down)
    } else if from.row == to.row && from.col.checked_add(1) == Some(to.col) {
        Ok(Direction::Right)
    } else if from.row == to.row && from.col.checked_sub(1) == Some(to.col) {
        Ok(Direction::Left)
    } else {
        Err(MazeError::NotAdjacent(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rejects_zero_dimension() {
        assert!(matches!(Grid::new(0), Err(MazeError::InvalidDimension(0))));
    }

    #[test]
    fn test_boundaries_on_corners() {
        let grid = Grid::new(3).expect("dimension 3 is valid");

        let top_left = Cell::ROOT;
        assert!(!Grid::has_up(top_left));
        assert!(!Grid::has_left(top_left));
        assert!(grid.has_down(top_left));
        assert!(grid.has_right(top_left));

        let bottom_right = Cell::new(2, 2);
        assert!(Grid::has_up(bottom_right));
        assert!(Grid::has_left(bottom_right));
        assert!(!grid.has_down(bottom_right));
        assert!(!grid.has_right(bottom_right));
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::new(1).expect("dimension 1 is valid");

        for direction in Direction::ALL {
            assert!(!grid.has(Cell::ROOT, direction));
            assert_eq!(grid.neighbor(Cell::ROOT, direction), None);
        }
    }

    #[test]
    fn test_neighbor_and_direction_agree() {
        let grid = Grid::new(4).expect("dimension 4 is valid");
        let center = Cell::new(1, 2);

        for direction in Direction::ALL {
            let neighbor = grid
                .neighbor(center, direction)
                .expect("inner cell has all four neighbours");
            assert_eq!(
                direction_between(center, neighbor).expect("cells are adjacent"),
                direction
            );
            assert_eq!(
                direction_between(neighbor, center).expect("cells are adjacent"),
                direction.opposite()
            );
        }
    }

    #[test]
    fn test_direction_between_rejects_far_cells() {
        let result = direction_between(Cell::new(0, 0), Cell::new(1, 1));
        assert!(matches!(result, Err(MazeError::NotAdjacent(_, _))));

        let result = direction_between(Cell::new(2, 2), Cell::new(2, 2));
        assert!(result.is_err());
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = Grid::new(5).expect("dimension 5 is valid");

        assert_eq!(grid.index(Cell::ROOT), Some(0));
        assert_eq!(grid.index(Cell::new(1, 0)), Some(5));
        assert_eq!(grid.index(Cell::new(4, 4)), Some(24));
        assert_eq!(grid.index(Cell::new(5, 0)), None);
        assert_eq!(grid.cells().count(), grid.cell_count());
        assert_eq!(grid.cells().last(), Some(Cell::new(4, 4)));
    }
}
