//! Connectivity substrate every generator walks on.
//!
//! The tree is built once per grid dimension by an iterative depth-first traversal from the root
//! cell. It records three things while walking:
//!
//! - the adjacency of every cell, in the fixed Up, Down, Right, Left order, which is what the
//!   random walk and the backtracker draw neighbours from;
//! - the discovery edges of the traversal, which form a spanning tree of exactly `N * N - 1`
//!   edges rooted at `(0, 0)`;
//! - the order in which cells were first popped, reused by the generators that need a single pass
//!   over every cell.

use log::debug;

use crate::grid::{Cell, Direction, Grid};

/// Rooted traversal structure over an `N x N` grid.
///
/// The value is read-only once built and is shared between the driver and the worker thread
/// behind an [`Arc`](std::sync::Arc).
#[derive(Clone, Debug)]
pub struct SpanningTree {
    /// Grid the tree spans.
    grid: Grid,
    /// Neighbours of each cell, indexed by [`Grid::index`].
    adjacency: Vec<Vec<Cell>>,
    /// Discovery edges as `(parent, child)` pairs, in discovery order.
    edges: Vec<(Cell, Cell)>,
    /// Cells in first-pop order.
    order: Vec<Cell>,
}

impl SpanningTree {
    /// Builds the tree for `grid` with an explicit stack, so large grids cannot overflow the call
    /// stack.
    ///
    /// A cell is marked visited when it is popped, not when it is discovered. A cell may
    /// therefore sit on the stack several times; later copies are skipped on pop. The parent
    /// recorded for a cell is the one whose push was popped first.
    #[must_use]
    pub fn build(grid: Grid) -> Self {
        let cell_count = grid.cell_count();
        let mut adjacency = vec![Vec::new(); cell_count];
        let mut visited = vec![false; cell_count];
        let mut edges = Vec::with_capacity(cell_count.saturating_sub(1));
        let mut order = Vec::with_capacity(cell_count);
        let mut stack: Vec<(Cell, Option<Cell>)> = vec![(Cell::ROOT, None)];

        while let Some((cell, parent)) = stack.pop() {
            let Some(index) = grid.index(cell) else {
                continue;
            };
            match visited.get_mut(index) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }

            order.push(cell);
            if let Some(parent) = parent {
                edges.push((parent, cell));
            }

            let neighbors: Vec<Cell> = Direction::ALL
                .iter()
                .filter_map(|&direction| grid.neighbor(cell, direction))
                .collect();

            for &neighbor in &neighbors {
                let unvisited = grid
                    .index(neighbor)
                    .and_then(|neighbor_index| visited.get(neighbor_index))
                    .is_some_and(|seen| !seen);
                if unvisited {
                    stack.push((neighbor, Some(cell)));
                }
            }

            if let Some(slot) = adjacency.get_mut(index) {
                *slot = neighbors;
            }
        }

        debug!(
            "built spanning tree over {cell_count} cells with {} edges",
            edges.len()
        );

        Self {
            grid,
            adjacency,
            edges,
            order,
        }
    }

    /// Grid the tree spans.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Root cell of the traversal, always `(0, 0)`.
    #[must_use]
    pub const fn root(&self) -> Cell {
        Cell::ROOT
    }

    /// Neighbours of `cell` in Up, Down, Right, Left order; empty outside the grid.
    #[must_use]
    pub fn adjacent(&self, cell: Cell) -> &[Cell] {
        self.grid
            .index(cell)
            .and_then(|index| self.adjacency.get(index))
            .map_or(&[], Vec::as_slice)
    }

    /// Discovery edges as `(parent, child)` pairs.
    #[must_use]
    pub fn edges(&self) -> &[(Cell, Cell)] {
        &self.edges
    }

    /// Every cell, in the depth-first order the traversal first reached it.
    #[must_use]
    pub fn visit_order(&self) -> &[Cell] {
        &self.order
    }

    /// Number of cells the traversal visited.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.order.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::test_support;

    fn tree(dimension: usize) -> SpanningTree {
        SpanningTree::build(Grid::new(dimension).expect("dimension is valid"))
    }

    #[test]
    fn test_two_by_two_tree() {
        let tree = tree(2);

        assert_eq!(tree.cell_count(), 4);
        assert_eq!(tree.edges().len(), 3);
        assert_eq!(
            tree.visit_order(),
            &[
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 0)
            ]
        );
        assert_eq!(
            tree.edges(),
            &[
                (Cell::new(0, 0), Cell::new(0, 1)),
                (Cell::new(0, 1), Cell::new(1, 1)),
                (Cell::new(1, 1), Cell::new(1, 0))
            ]
        );
    }

    #[test]
    fn test_single_cell_tree() {
        let tree = tree(1);

        assert_eq!(tree.visit_order(), &[Cell::ROOT]);
        assert!(tree.edges().is_empty());
        assert!(tree.adjacent(Cell::ROOT).is_empty());
    }

    #[test]
    fn test_adjacency_uses_fixed_direction_order() {
        let tree = tree(3);

        assert_eq!(
            tree.adjacent(Cell::new(1, 1)),
            &[
                Cell::new(0, 1),
                Cell::new(2, 1),
                Cell::new(1, 2),
                Cell::new(1, 0)
            ]
        );
        assert_eq!(
            tree.adjacent(Cell::ROOT),
            &[Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert!(tree.adjacent(Cell::new(3, 0)).is_empty());
    }

    #[test]
    fn test_root_is_fixed() {
        let tree = tree(6);

        assert_eq!(tree.root(), Cell::ROOT);
        assert_eq!(tree.visit_order().first(), Some(&Cell::ROOT));
        assert!(tree.edges().iter().all(|&(_, child)| child != Cell::ROOT));
    }

    proptest! {
        #[test]
        fn test_tree_spans_every_grid(dimension in 1_usize..24) {
            let tree = tree(dimension);
            let cell_count = dimension * dimension;

            let distinct: HashSet<Cell> = tree.visit_order().iter().copied().collect();
            prop_assert_eq!(tree.cell_count(), cell_count);
            prop_assert_eq!(distinct.len(), cell_count);
            prop_assert_eq!(tree.edges().len(), cell_count - 1);
            prop_assert!(test_support::is_spanning_tree(dimension, tree.edges()));

            let directed: usize = tree
                .grid()
                .cells()
                .map(|cell| tree.adjacent(cell).len())
                .sum();
            prop_assert_eq!(directed, 4 * dimension * (dimension - 1));
        }
    }
}
