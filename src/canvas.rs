//! Renderer-side picture of a maze under construction.

use std::collections::HashSet;

use crate::{
    error::MazeError,
    events::MazeEvent,
    grid::{Cell, Direction, Grid},
    wall::Wall,
};

/// Walls, visited cells and cursor as reconstructed from a run's events.
///
/// The canvas knows nothing about the generator that produced the events. Every wall starts out
/// standing and only ever gets removed; resetting means building a new canvas.
#[derive(Clone, Debug)]
pub struct MazeCanvas {
    /// Grid being drawn.
    grid: Grid,
    /// Side length of a cell in wall coordinates.
    cell_size: usize,
    /// Removed walls as ordered cell pairs, smaller cell first.
    passages: HashSet<(Cell, Cell)>,
    /// Cells reported as visited.
    visited: HashSet<Cell>,
    /// Cell the generator was last seen at.
    cursor: Option<Cell>,
}

impl MazeCanvas {
    /// Creates a canvas where every wall of `grid` is standing.
    #[must_use]
    pub fn new(grid: Grid, cell_size: usize) -> Self {
        Self {
            grid,
            cell_size,
            passages: HashSet::with_capacity(grid.cell_count()),
            visited: HashSet::with_capacity(grid.cell_count()),
            cursor: None,
        }
    }

    /// Grid being drawn.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Side length of a cell in wall coordinates.
    #[must_use]
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Side length of the drawn maze in wall coordinates.
    #[must_use]
    pub const fn extent(&self) -> usize {
        self.grid.dimension() * self.cell_size
    }

    /// Cell the generator was last seen at, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<Cell> {
        self.cursor
    }

    /// Number of walls removed so far.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// Whether `cell` was reported as visited.
    #[must_use]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Visited cells, in no particular order.
    pub fn visited(&self) -> impl Iterator<Item = Cell> + '_ {
        self.visited.iter().copied()
    }

    /// Whether the wall on the `direction` side of `cell` has been removed.
    ///
    /// Walls on the outer border are never open.
    #[must_use]
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.grid
            .neighbor(cell, direction)
            .is_some_and(|neighbor| self.passages.contains(&ordered(cell, neighbor)))
    }

    /// Applies one event of the stream.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::WallOutOfGrid`] for a carve that does not separate two cells of the
    /// grid and [`MazeError::UnregisteredCell`] for a visit outside it.
    pub fn apply(&mut self, event: MazeEvent) -> Result<(), MazeError> {
        match event {
            MazeEvent::CellVisited(cell) => {
                self.ensure_contains(cell)?;
                let _ = self.visited.insert(cell);
                self.cursor = Some(cell);
            }
            MazeEvent::CellRevisited(cell) => {
                self.ensure_contains(cell)?;
                self.cursor = Some(cell);
            }
            MazeEvent::PassageCarved { cell, direction } => {
                let neighbor = self
                    .grid
                    .neighbor(cell, direction)
                    .ok_or_else(|| {
                        MazeError::WallOutOfGrid(Wall::of(cell, direction, self.cell_size))
                    })?;
                let _ = self.passages.insert(ordered(cell, neighbor));
            }
            MazeEvent::WallCarved(wall) => {
                let (first, second) = wall.cells(self.cell_size)?;
                if !self.grid.contains(second) {
                    return Err(MazeError::WallOutOfGrid(wall));
                }
                let _ = self.passages.insert(ordered(first, second));
                self.cursor = Some(second);
            }
        }

        Ok(())
    }

    /// Every wall segment still standing, outer border included.
    #[must_use]
    pub fn standing_walls(&self) -> Vec<Wall> {
        let extent = self.extent();
        let mut walls = vec![
            Wall::new(0, 0, extent, 0),
            Wall::new(0, extent, extent, extent),
            Wall::new(0, 0, 0, extent),
            Wall::new(extent, 0, extent, extent),
        ];

        for cell in self.grid.cells() {
            for direction in [Direction::Right, Direction::Down] {
                if self.grid.has(cell, direction) && !self.is_open(cell, direction) {
                    walls.push(Wall::of(cell, direction, self.cell_size));
                }
            }
        }

        walls
    }

    /// Draws the maze with `+`, `-` and `|`, one text row per grid row plus the wall rows.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let dimension = self.grid.dimension();
        let mut out = String::with_capacity((dimension * 3 + 2) * (dimension * 2 + 1));

        out.push('+');
        for _ in 0..dimension {
            out.push_str("--+");
        }
        out.push('\n');

        for row in 0..dimension {
            out.push('|');
            for col in 0..dimension {
                let cell = Cell::new(row, col);
                out.push_str(if self.cursor == Some(cell) { "()" } else { "  " });
                out.push(if self.is_open(cell, Direction::Right) { ' ' } else { '|' });
            }
            out.push('\n');

            out.push('+');
            for col in 0..dimension {
                let cell = Cell::new(row, col);
                out.push_str(if self.is_open(cell, Direction::Down) { "  " } else { "--" });
                out.push('+');
            }
            out.push('\n');
        }

        out
    }

    /// Fails for cells outside the grid.
    fn ensure_contains(&self, cell: Cell) -> Result<(), MazeError> {
        if self.grid.contains(cell) {
            Ok(())
        } else {
            Err(MazeError::UnregisteredCell(cell))
        }
    }
}

/// Orders a cell pair so both directions of a passage share one key.
fn ordered(first: Cell, second: Cell) -> (Cell, Cell) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}
