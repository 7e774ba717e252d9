//! Aldous-Broder: carve wherever a uniform random walk first arrives.

use rand::{seq::IndexedRandom as _, Rng};

use super::VisitedCells;
use crate::{
    error::MazeError,
    events::{Emitter, EventSink, Interrupt, MazeEvent},
    grid::direction_between,
    tree::SpanningTree,
};

/// Walks from the root to a uniformly chosen neighbour until every cell has been reached.
///
/// The root counts as visited from the start. Moving onto an unvisited cell carves the passage
/// behind the walk and visits the cell; moving onto a visited cell emits nothing. Expected running
/// time is the cover time of the grid, which grows faster than the cell count.
pub(super) fn carve<R, S>(
    tree: &SpanningTree,
    rng: &mut R,
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Interrupt>
where
    R: Rng,
    S: EventSink + ?Sized,
{
    let grid = tree.grid();
    let target = grid.cell_count();
    let mut visited = VisitedCells::new(grid);

    let mut current = tree.root();
    let _ = visited.insert(current);
    emitter.emit(MazeEvent::CellVisited(current))?;
    let mut visited_count = 1;

    while visited_count < target {
        emitter.checkpoint()?;

        let next = *tree
            .adjacent(current)
            .choose(rng)
            .ok_or(MazeError::IsolatedCell(current))?;

        if visited.insert(next) {
            emitter.emit(MazeEvent::PassageCarved {
                cell: current,
                direction: direction_between(current, next)?,
            })?;
            emitter.emit(MazeEvent::CellVisited(next))?;
            visited_count += 1;
        }

        current = next;
    }

    Ok(())
}
