use std::mem;

use tracing::trace;

use crate::error::LifeResult;
use crate::grid::Grid;
use crate::pos::Dimensions;
use crate::seed::Seed;
use crate::simulation::advance_into;

/// Owner of the current generation.
///
/// Holds two equally sized buffers. [`World::step`] writes the next
/// generation into the spare one and swaps, so the retired generation is
/// reused instead of freed and reallocated every tick.
pub struct World {
    current: Grid,
    spare: Grid,
    generation: u64,
}

impl World {
    pub fn new(grid: Grid) -> LifeResult<Self> {
        let spare = Grid::new(grid.dimensions())?;
        Ok(Self {
            current: grid,
            spare,
            generation: 0,
        })
    }

    pub fn random(dims: Dimensions, seed: Seed) -> LifeResult<Self> {
        Self::new(Grid::random(dims, seed)?)
    }

    /// Advance one generation.
    pub fn step(&mut self) -> LifeResult<()> {
        advance_into(&self.current, &mut self.spare)?;
        mem::swap(&mut self.current, &mut self.spare);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.current.population(),
            "advanced world"
        );
        Ok(())
    }

    /// Advance `n` generations, stopping at the first error.
    pub fn step_n(&mut self, n: u64) -> LifeResult<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.current.dimensions()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }
}
