//! Binary tree: one biased, local choice per cell.

use rand::Rng;

use crate::{
    events::{Emitter, EventSink, Interrupt, MazeEvent},
    grid::Direction,
    tree::SpanningTree,
};

/// Visits every cell once, in the tree's depth-first order, carving either down or right.
///
/// Cells with both options flip a fair coin. Cells on the last row can only carve right and
/// cells on the last column can only carve down, which turns both into unbroken corridors. The
/// bottom-right cell carves nothing.
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

    for &cell in tree.visit_order() {
        emitter.checkpoint()?;
        emitter.emit(MazeEvent::CellVisited(cell))?;

        let direction = match (grid.has_down(cell), grid.has_right(cell)) {
            (true, true) => Some(if rng.random_bool(0.5) {
                Direction::Down
            } else {
                Direction::Right
            }),
            (true, false) => Some(Direction::Down),
            (false, true) => Some(Direction::Right),
            (false, false) => None,
        };

        if let Some(direction) = direction {
            emitter.emit(MazeEvent::PassageCarved { cell, direction })?;
        }
    }

    Ok(())
}
