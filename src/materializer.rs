use crate::core_types::{Board, Cell, Difficulty, GridSize, Supply};
use fastrand::Rng;
use tracing::debug;

/// Maps an abstract difficulty arrangement onto concrete items.
///
/// Works on a private copy of `supplies`; each filled cell consumes one unit
/// from a uniformly chosen placeable supply of the slot's difficulty. Slots
/// with no placeable supply (including every filler slot) become `Empty`.
pub fn materialize(
    sequence: &[Difficulty],
    supplies: &[Supply],
    grid: GridSize,
    rng: &mut Rng,
) -> Board {
    let mut working = supplies.to_vec();
    let mut cells = Vec::with_capacity(sequence.len());
    let mut matches: Vec<usize> = Vec::with_capacity(working.len());

    for &slot in sequence {
        matches.clear();
        matches.extend(
            working
                .iter()
                .enumerate()
                .filter(|(_, s)| s.difficulty == slot && s.is_placeable())
                .map(|(i, _)| i),
        );

        if matches.is_empty() {
            cells.push(Cell::Empty);
            continue;
        }

        let pick = &mut working[matches[rng.usize(0..matches.len())]];
        pick.remaining -= 1;
        cells.push(Cell::Item {
            item_id: pick.item_id,
            name: pick.name.clone(),
            difficulty: pick.difficulty,
        });
    }

    let board = Board {
        width: grid.width,
        height: grid.height,
        cells,
    };

    debug!(
        "Materialized {}x{} board: {} filled, {} empty",
        grid.width,
        grid.height,
        board.filled_count(),
        board.empty_count()
    );

    board
}
