//! Disjoint-set forest over grid cells.
//!
//! Union by rank plus path compression keeps every operation amortized near constant time. The
//! structure is scoped to a single randomized Kruskal run and dropped with it.

use std::collections::HashMap;

use crate::{error::MazeError, grid::Cell, wall::Wall};

/// Union-find over [`Cell`] identities.
///
/// Every cell must be registered through [`DisjointSet::make_set`] before it takes part in a
/// [`find`](DisjointSet::find) or [`union`](DisjointSet::union); querying an unknown cell is an
/// invariant violation and reported as [`MazeError::UnregisteredCell`].
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    /// Parent pointer of each registered cell. Roots point at themselves.
    parent: HashMap<Cell, Cell>,
    /// Upper bound on the height of the tree rooted at each cell.
    rank: HashMap<Cell, u32>,
}

impl DisjointSet {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: HashMap::with_capacity(capacity),
            rank: HashMap::with_capacity(capacity),
        }
    }

    /// Registers `cell` as its own singleton set with rank zero.
    ///
    /// Calling this again for a registered cell resets it to a singleton; callers register every
    /// cell exactly once before processing walls.
    pub fn make_set(&mut self, cell: Cell) {
        let _ = self.parent.insert(cell, cell);
        let _ = self.rank.insert(cell, 0);
    }

    /// Whether `cell` has been registered.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.parent.contains_key(&cell)
    }

    /// Number of registered cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no cell has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .filter(|&(cell, parent)| cell == parent)
            .count()
    }

    /// Returns the representative of the set containing `cell`.
    ///
    /// Every cell on the walked path is re-parented directly onto the representative.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnregisteredCell`] when `cell`, or a cell on its parent chain, was
    /// never registered.
    pub fn find(&mut self, cell: Cell) -> Result<Cell, MazeError> {
        let mut root = cell;
        loop {
            let parent = *self
                .parent
                .get(&root)
                .ok_or(MazeError::UnregisteredCell(root))?;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = cell;
        while current != root {
            current = self
                .parent
                .insert(current, root)
                .ok_or(MazeError::UnregisteredCell(current))?;
        }

        Ok(root)
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// The lower-ranked root is attached below the higher-ranked one; on a tie `second`'s root
    /// goes below `first`'s and the surviving rank grows by one. Returns `false` without touching
    /// the forest when both cells already share a set.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::UnregisteredCell`] when either cell was never registered.
    pub fn union(&mut self, first: Cell, second: Cell) -> Result<bool, MazeError> {
        let first_root = self.find(first)?;
        let second_root = self.find(second)?;

        if first_root == second_root {
            return Ok(false);
        }

        let first_rank = self.rank_of(first_root);
        let second_rank = self.rank_of(second_root);

        let (child, parent) = if first_rank < second_rank {
            (first_root, second_root)
        } else {
            (second_root, first_root)
        };
        let _ = self.parent.insert(child, parent);

        if first_rank == second_rank {
            let _ = self.rank.insert(parent, first_rank + 1);
        }

        Ok(true)
    }

    /// Resolves `wall` to the two registered cells it separates.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::WallOutOfGrid`] when the wall does not map onto two registered cells.
    pub fn resolve_wall(&self, wall: Wall, cell_size: usize) -> Result<(Cell, Cell), MazeError> {
        let (first, second) = wall.cells(cell_size)?;

        if !self.contains(first) || !self.contains(second) {
            return Err(MazeError::WallOutOfGrid(wall));
        }

        Ok((first, second))
    }

    /// Rank of a registered root.
    fn rank_of(&self, root: Cell) -> u32 {
        self.rank.get(&root).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn registered(cells: &[Cell]) -> DisjointSet {
        let mut set = DisjointSet::with_capacity(cells.len());
        for &cell in cells {
            set.make_set(cell);
        }
        set
    }

    #[test]
    fn test_find_is_reflexive_for_singletons() {
        let cell = Cell::new(3, 4);
        let mut set = registered(&[cell]);

        assert_eq!(set.find(cell).expect("cell is registered"), cell);
        assert_eq!(set.find(cell).expect("cell is registered"), cell);
        assert_eq!(set.set_count(), 1);
    }

    #[test]
    fn test_union_joins_sets() {
        let first = Cell::new(0, 0);
        let second = Cell::new(0, 1);
        let third = Cell::new(1, 1);
        let mut set = registered(&[first, second, third]);

        assert!(set.union(first, second).expect("cells are registered"));
        assert_eq!(
            set.find(first).expect("cell is registered"),
            set.find(second).expect("cell is registered")
        );
        assert_ne!(
            set.find(first).expect("cell is registered"),
            set.find(third).expect("cell is registered")
        );
        assert_eq!(set.set_count(), 2);
    }

    #[test]
    fn test_union_is_idempotent() {
        let first = Cell::new(2, 0);
        let second = Cell::new(2, 1);
        let mut set = registered(&[first, second]);

        assert!(set.union(first, second).expect("cells are registered"));
        let root = set.find(first).expect("cell is registered");

        assert!(!set.union(first, second).expect("cells are registered"));
        assert!(!set.union(second, first).expect("cells are registered"));
        assert_eq!(set.find(second).expect("cell is registered"), root);
        assert_eq!(set.rank_of(root), 1);
    }

    #[test]
    fn test_lower_rank_goes_under_higher_rank() {
        let cells = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        let mut set = registered(&cells);

        assert!(set.union(cells[0], cells[1]).expect("cells are registered"));
        // The rank-1 root survives even when it is passed second.
        assert!(set.union(cells[2], cells[0]).expect("cells are registered"));

        assert_eq!(set.find(cells[2]).expect("cell is registered"), cells[0]);
        assert_eq!(set.rank_of(cells[0]), 1);
    }

    #[test]
    fn test_find_compresses_paths() {
        let cells: Vec<Cell> = (0..8).map(|col| Cell::new(0, col)).collect();
        let mut set = registered(&cells);

        for pair in cells.windows(2) {
            if let [left, right] = pair {
                let _ = set.union(*left, *right).expect("cells are registered");
            }
        }

        let last = *cells.last().expect("cells are not empty");
        let root = set.find(last).expect("cell is registered");
        for cell in &cells {
            assert_eq!(set.parent.get(cell), Some(&root));
        }
        assert_eq!(set.set_count(), 1);
    }

    #[test]
    fn test_unregistered_cells_are_rejected() {
        let mut set = registered(&[Cell::ROOT]);
        let stranger = Cell::new(9, 9);

        assert!(matches!(
            set.find(stranger),
            Err(MazeError::UnregisteredCell(cell)) if cell == stranger
        ));
        assert!(set.union(Cell::ROOT, stranger).is_err());
        assert!(DisjointSet::new().is_empty());
    }

    #[test]
    fn test_resolve_wall_checks_registration() {
        let left = Cell::new(1, 0);
        let right = Cell::new(1, 1);
        let set = registered(&[left, right]);

        let inner = Wall::of(right, Direction::Left, 40);
        assert_eq!(
            set.resolve_wall(inner, 40).expect("wall separates registered cells"),
            (left, right)
        );

        let beyond = Wall::of(right, Direction::Right, 40);
        assert!(matches!(
            set.resolve_wall(beyond, 40),
            Err(MazeError::WallOutOfGrid(_))
        ));
        assert_eq!(set.len(), 2);
    }
}
