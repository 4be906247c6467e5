use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::error::{LifeError, LifeResult};
use crate::pos::{CellPos, Dimensions};
use crate::seed::Seed;

/// A fixed-size toroidal grid of cells, stored row-major.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate an all-dead grid.
    ///
    /// Allocation failure is reported as [`LifeError::OutOfMemory`] instead
    /// of aborting inside the allocator.
    pub fn new(dims: Dimensions) -> LifeResult<Self> {
        if dims.is_empty() {
            return Err(LifeError::EmptyDimensions);
        }

        let count = dims
            .width
            .checked_mul(dims.height)
            .ok_or(LifeError::OutOfMemory { cells: usize::MAX })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| LifeError::OutOfMemory { cells: count })?;
        cells.resize(count, Cell::Dead);

        Ok(Self { dims, cells })
    }

    /// Fill every cell independently, alive with probability 0.5.
    pub fn random(dims: Dimensions, seed: Seed) -> LifeResult<Self> {
        let mut grid = Self::new(dims)?;
        let mut rng = StdRng::seed_from_u64(seed.value());
        for cell in &mut grid.cells {
            *cell = Cell::from(rng.gen_bool(0.5));
        }
        Ok(grid)
    }

    /// Build a grid with the given coordinates alive. Coordinates wrap.
    pub fn with_alive(dims: Dimensions, alive: &[(i64, i64)]) -> LifeResult<Self> {
        let mut grid = Self::new(dims)?;
        for &(x, y) in alive {
            grid.set_wrapped(x, y, Cell::Alive);
        }
        Ok(grid)
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub const fn width(&self) -> usize {
        self.dims.width
    }

    pub const fn height(&self) -> usize {
        self.dims.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.dims.width)
    }

    /// Buffer index of `(x, y)` after toroidal wraparound.
    pub const fn wrap_index(&self, x: i64, y: i64) -> usize {
        self.dims.wrap_index(CellPos::new(x, y))
    }

    pub fn get_wrapped(&self, x: i64, y: i64) -> Cell {
        self.cells[self.wrap_index(x, y)]
    }

    pub fn set_wrapped(&mut self, x: i64, y: i64, cell: Cell) {
        let index = self.wrap_index(x, y);
        self.cells[index] = cell;
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.dims.width && y < self.dims.height).then(|| self.cells[y * self.dims.width + x])
    }

    /// Returns `false` and leaves the grid untouched if `(x, y)` is out of range.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if x < self.dims.width && y < self.dims.height {
            self.cells[y * self.dims.width + x] = cell;
            true
        } else {
            false
        }
    }

    /// Coordinates of live cells in row-major order.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.dims.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index % width, index / width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_dead(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_dead() {
        let grid = Grid::new(Dimensions::DEFAULT).unwrap();
        assert_eq!(grid.cells().len(), 184 * 112);
        assert!(grid.is_dead());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn empty_dimensions_rejected() {
        assert_eq!(
            Grid::new(Dimensions::new(0, 4)),
            Err(LifeError::EmptyDimensions)
        );
        assert_eq!(
            Grid::new(Dimensions::new(4, 0)),
            Err(LifeError::EmptyDimensions)
        );
    }

    #[test]
    fn oversized_allocation_is_out_of_memory() {
        let result = Grid::new(Dimensions::new(usize::MAX / 2, 3));
        assert!(matches!(result, Err(LifeError::OutOfMemory { .. })));

        let result = Grid::new(Dimensions::new(isize::MAX as usize / 4, 2));
        assert!(matches!(result, Err(LifeError::OutOfMemory { .. })));
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::new(Dimensions::new(4, 3)).unwrap();
        assert!(grid.set(3, 2, Cell::Alive));
        assert_eq!(grid.get(3, 2), Some(Cell::Alive));
        assert_eq!(grid.population(), 1);

        assert!(!grid.set(4, 0, Cell::Alive));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn wrapped_access() {
        let mut grid = Grid::new(Dimensions::new(4, 3)).unwrap();
        grid.set_wrapped(-1, -1, Cell::Alive);
        assert_eq!(grid.get(3, 2), Some(Cell::Alive));
        assert_eq!(grid.get_wrapped(7, 5), Cell::Alive);
        assert_eq!(grid.wrap_index(-1, 0), grid.wrap_index(3, 0));
    }

    #[test]
    fn random_is_reproducible() {
        let a = Grid::random(Dimensions::DEFAULT, Seed::new(7)).unwrap();
        let b = Grid::random(Dimensions::DEFAULT, Seed::new(7)).unwrap();
        let c = Grid::random(Dimensions::DEFAULT, Seed::new(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_is_roughly_half_alive() {
        let grid = Grid::random(Dimensions::DEFAULT, Seed::new(0xC0FFEE)).unwrap();
        let total = grid.cells().len();
        let alive = grid.population();
        // 20608 fair coin flips; 45%..55% is many standard deviations wide.
        assert!(alive * 100 > total * 45, "alive = {alive}");
        assert!(alive * 100 < total * 55, "alive = {alive}");
    }

    #[test]
    fn display_rows() {
        let grid = Grid::with_alive(Dimensions::new(3, 2), &[(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid.to_string(), "O..\n..O\n");
        assert_eq!(grid.alive().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }
}
