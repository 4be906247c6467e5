#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub const ALL: [Cell; 2] = [Cell::Dead, Cell::Alive];

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Contribution of this cell to a neighbor sum.
    pub const fn weight(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

impl From<Cell> for bool {
    fn from(cell: Cell) -> Self {
        cell.is_alive()
    }
}
