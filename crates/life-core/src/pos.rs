use std::fmt;

pub const WIDTH: usize = 184;
pub const HEIGHT: usize = 112;

/// Offsets of the 8 cells surrounding a cell, row by row.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default)]
pub struct CellPos {
    pub x: i64,
    pub y: i64,
}

impl Dimensions {
    pub const DEFAULT: Self = Self::new(WIDTH, HEIGHT);

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn cell_count(self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Map any coordinate onto the torus. Both components come back in
    /// `[0, width) × [0, height)`, negative inputs included.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. A `Grid` never holds empty
    /// dimensions, so wrapping through a grid cannot panic.
    pub const fn wrap(self, pos: CellPos) -> (usize, usize) {
        (
            pos.x.rem_euclid(self.width as i64) as usize,
            pos.y.rem_euclid(self.height as i64) as usize,
        )
    }

    /// Row-major buffer index of a wrapped coordinate.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero, like [`Dimensions::wrap`].
    pub const fn wrap_index(self, pos: CellPos) -> usize {
        let (x, y) = self.wrap(pos);
        self.width * y + x
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl CellPos {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
