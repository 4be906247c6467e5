use crate::cell::Cell;

/// Conway's B3/S23 rule: a live cell survives with 2 or 3 live neighbors, a
/// dead cell is born with exactly 3. Counts above 8 cannot come from a real
/// neighborhood but are still answered (with `Dead`).
pub const fn evaluate_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}
