//! Conway's Game of Life (B3/S23) on a fixed-size toroidal grid.
//!
//! [`init_world`] produces a randomly seeded first generation and
//! [`advance`] computes the next one without touching its input. [`World`]
//! owns the single current generation for a long-running loop.

mod cell;
mod error;
mod grid;
mod pos;
mod rules;
mod seed;
mod simulation;
mod world;

pub use cell::Cell;
pub use error::{LifeError, LifeResult};
pub use grid::Grid;
pub use pos::{CellPos, Dimensions, HEIGHT, NEIGHBOR_OFFSETS, WIDTH};
pub use rules::evaluate_state;
pub use seed::Seed;
pub use simulation::{advance, advance_into, count_neighbors};
pub use world::World;

/// Random `WIDTH × HEIGHT` generation seeded from the wall clock.
pub fn init_world() -> LifeResult<Grid> {
    Grid::random(Dimensions::DEFAULT, Seed::from_time())
}
