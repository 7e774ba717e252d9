//! Randomized Kruskal: union cells across a shuffled list of walls.

use log::{debug, trace};
use rand::{seq::SliceRandom as _, Rng};

use crate::{
    events::{Emitter, EventSink, Interrupt, MazeEvent},
    grid::{Direction, Grid},
    tree::SpanningTree,
    union_find::DisjointSet,
    wall::Wall,
};

/// Carves every wall that joins two still-disconnected regions, in random order.
///
/// Each cell owns its Up and Left walls, so every inner wall appears exactly once among the
/// `2 * N * (N - 1)` candidates. A wall whose cells already share a set would close a cycle and is
/// skipped.
pub(super) fn carve<R, S>(
    tree: &SpanningTree,
    cell_size: usize,
    rng: &mut R,
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Interrupt>
where
    R: Rng,
    S: EventSink + ?Sized,
{
    let grid = tree.grid();
    let dimension = grid.dimension();

    let mut sets = DisjointSet::with_capacity(grid.cell_count());
    for &cell in tree.visit_order() {
        sets.make_set(cell);
    }

    let mut walls = Vec::with_capacity(2 * dimension * (dimension - 1));
    for &cell in tree.visit_order() {
        if Grid::has_up(cell) {
            walls.push(Wall::of(cell, Direction::Up, cell_size));
        }
        if Grid::has_left(cell) {
            walls.push(Wall::of(cell, Direction::Left, cell_size));
        }
    }
    walls.shuffle(rng);

    for wall in walls {
        emitter.checkpoint()?;

        let (first, second) = sets.resolve_wall(wall, cell_size)?;
        let first_root = sets.find(first)?;
        let second_root = sets.find(second)?;

        if first_root == second_root {
            trace!("skipping wall {wall}: {first} and {second} are already connected");
            emitter.skip();
            continue;
        }

        emitter.emit(MazeEvent::WallCarved(wall))?;
        let _ = sets.union(first_root, second_root)?;
    }

    debug!("kruskal finished with {} set(s)", sets.set_count());

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        algorithms::{generate, Algorithm},
        events::{CancellationToken, MazeEvent, Outcome},
        grid::Grid,
        test_support,
        tree::SpanningTree,
    };

    fn run(dimension: usize, seed: u64) -> (Outcome, Vec<MazeEvent>) {
        let tree = SpanningTree::build(Grid::new(dimension).expect("dimension is valid"));
        let mut events = Vec::new();
        let outcome = generate(
            Algorithm::RandomizedKruskal,
            &tree,
            20,
            &mut StdRng::seed_from_u64(seed),
            &mut events,
            &CancellationToken::new(),
        )
        .expect("generation succeeds");
        (outcome, events)
    }

    #[test]
    fn test_two_by_two_scenario() {
        for seed in 0..16 {
            let (outcome, events) = run(2, seed);

            assert_eq!(outcome.stats().carved, 3);
            assert_eq!(outcome.stats().skipped, 1);
            assert_eq!(events.len(), 3);
            assert!(test_support::is_spanning_tree(
                2,
                &test_support::carved_edges(2, 20, &events)
            ));
        }
    }

    #[test]
    fn test_union_and_skip_counts() {
        for dimension in [3, 8, 20] {
            let (outcome, _) = run(dimension, 7);
            let candidates = 2 * dimension * (dimension - 1);
            let unions = dimension * dimension - 1;

            assert_eq!(outcome.stats().carved, unions);
            assert_eq!(outcome.stats().skipped, candidates - unions);
        }
    }

    #[test]
    fn test_only_walls_are_emitted() {
        let (_, events) = run(6, 11);

        assert!(events
            .iter()
            .all(|event| matches!(event, MazeEvent::WallCarved(_))));
    }

    #[test]
    fn test_wall_order_depends_on_seed() {
        let (_, first) = run(10, 1);
        let (_, second) = run(10, 2);

        assert_ne!(first, second);
    }
}
