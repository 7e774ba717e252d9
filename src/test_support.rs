//! Helpers shared by the unit tests of several modules.

use crate::{
    events::MazeEvent,
    grid::{direction_between, Cell, Grid},
    union_find::DisjointSet,
};

/// Checks that `edges` form a spanning tree of the `dimension x dimension` grid.
///
/// Every edge must join two adjacent in-grid cells, no edge may close a cycle, and a single set
/// must remain once all edges are merged.
pub(crate) fn is_spanning_tree(dimension: usize, edges: &[(Cell, Cell)]) -> bool {
    let Ok(grid) = Grid::new(dimension) else {
        return false;
    };
    if edges.len() + 1 != grid.cell_count() {
        return false;
    }

    let mut set = DisjointSet::with_capacity(grid.cell_count());
    for cell in grid.cells() {
        set.make_set(cell);
    }

    for &(first, second) in edges {
        if !grid.contains(first) || !grid.contains(second) {
            return false;
        }
        if direction_between(first, second).is_err() {
            return false;
        }
        if !matches!(set.union(first, second), Ok(true)) {
            return false;
        }
    }

    set.set_count() == 1
}

/// Turns the carve events of a run into the cell pairs they connect.
///
/// # Panics
///
/// Panics when a carve event does not map onto two cells, which no generator should produce.
pub(crate) fn carved_edges(dimension: usize, cell_size: usize, events: &[MazeEvent]) -> Vec<(Cell, Cell)> {
    let grid = Grid::new(dimension).expect("test grids have a positive dimension");

    events
        .iter()
        .filter_map(|event| match *event {
            MazeEvent::PassageCarved { cell, direction } => Some((
                cell,
                grid.neighbor(cell, direction)
                    .expect("carved passages stay inside the grid"),
            )),
            MazeEvent::WallCarved(wall) => {
                Some(wall.cells(cell_size).expect("carved walls resolve to cells"))
            }
            MazeEvent::CellVisited(_) | MazeEvent::CellRevisited(_) => None,
        })
        .collect()
}

/// Cells named by `CellVisited` events, in emission order.
pub(crate) fn visited_cells(events: &[MazeEvent]) -> Vec<Cell> {
    events
        .iter()
        .filter_map(|event| match *event {
            MazeEvent::CellVisited(cell) => Some(cell),
            MazeEvent::PassageCarved { .. }
            | MazeEvent::WallCarved(_)
            | MazeEvent::CellRevisited(_) => None,
        })
        .collect()
}
