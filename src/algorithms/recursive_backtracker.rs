//! Recursive backtracker: randomized depth-first carving with an explicit stack.

use rand::{seq::IndexedRandom as _, Rng};

use super::VisitedCells;
use crate::{
    events::{Emitter, EventSink, Interrupt, MazeEvent},
    grid::{direction_between, Cell},
    tree::SpanningTree,
};

/// Carves a randomized depth-first search tree from the root.
///
/// A popped cell with unvisited neighbours goes back on the stack, one of those neighbours is
/// picked uniformly, carved into, visited and pushed. A cell without unvisited neighbours is
/// dropped, which backtracks to the cell below it; that cell is reported as revisited when it is
/// popped.
pub(super) fn carve<R, S>(
    tree: &SpanningTree,
    rng: &mut R,
    emitter: &mut Emitter<'_, S>,
) -> Result<(), Interrupt>
where
    R: Rng,
    S: EventSink + ?Sized,
{
    let mut visited = VisitedCells::new(tree.grid());

    let root = tree.root();
    let _ = visited.insert(root);
    emitter.emit(MazeEvent::CellVisited(root))?;

    let mut stack = vec![root];
    let mut backtracking = false;

    while let Some(current) = stack.pop() {
        emitter.checkpoint()?;

        if backtracking {
            emitter.emit(MazeEvent::CellRevisited(current))?;
        }

        let unvisited: Vec<Cell> = tree
            .adjacent(current)
            .iter()
            .copied()
            .filter(|&neighbor| !visited.contains(neighbor))
            .collect();

        let Some(&next) = unvisited.choose(rng) else {
            backtracking = true;
            continue;
        };

        stack.push(current);
        emitter.emit(MazeEvent::PassageCarved {
            cell: current,
            direction: direction_between(current, next)?,
        })?;
        let _ = visited.insert(next);
        emitter.emit(MazeEvent::CellVisited(next))?;
        stack.push(next);
        backtracking = false;
    }

    Ok(())
}
