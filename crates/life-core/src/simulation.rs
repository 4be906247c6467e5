use crate::error::{LifeError, LifeResult};
use crate::grid::Grid;
use crate::pos::{CellPos, NEIGHBOR_OFFSETS};
use crate::rules::evaluate_state;

/// Count live neighbors of `(x, y)`, wrapping at every edge.
///
/// Any coordinate is accepted. The center is wrapped onto the grid before
/// the offsets are applied, so extreme inputs cannot overflow.
pub fn count_neighbors(grid: &Grid, x: i64, y: i64) -> u8 {
    let (cx, cy) = grid.dimensions().wrap(CellPos::new(x, y));
    let (cx, cy) = (cx as i64, cy as i64);
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dx, dy)| grid.get_wrapped(cx + dx, cy + dy).weight())
        .sum()
}

/// Compute the generation after `current` into `next`.
///
/// Every cell of `next` is overwritten and `current` is only read, so each
/// neighbor count observes the previous generation.
pub fn advance_into(current: &Grid, next: &mut Grid) -> LifeResult<()> {
    if current.dimensions() != next.dimensions() {
        return Err(LifeError::DimensionMismatch {
            expected: current.dimensions(),
            found: next.dimensions(),
        });
    }

    let width = current.width();
    for (index, (cell, out)) in current
        .cells()
        .iter()
        .zip(next.cells_mut())
        .enumerate()
    {
        let x = (index % width) as i64;
        let y = (index / width) as i64;
        let neighbors = count_neighbors(current, x, y);
        *out = evaluate_state(*cell, neighbors);
    }

    Ok(())
}

/// Compute the generation after `current` into a freshly allocated grid.
pub fn advance(current: &Grid) -> LifeResult<Grid> {
    let mut next = Grid::new(current.dimensions())?;
    advance_into(current, &mut next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::pos::Dimensions;
    use crate::seed::Seed;

    fn grid(width: usize, height: usize, alive: &[(i64, i64)]) -> Grid {
        Grid::with_alive(Dimensions::new(width, height), alive).unwrap()
    }

    #[test]
    fn neighbors_exclude_self() {
        let g = grid(5, 5, &[(2, 2)]);
        assert_eq!(count_neighbors(&g, 2, 2), 0);
        assert_eq!(count_neighbors(&g, 1, 1), 1);
        assert_eq!(count_neighbors(&g, 0, 0), 0);
    }

    #[test]
    fn neighbors_wrap_corners() {
        // Opposite corners are diagonal neighbors on a torus.
        let g = grid(6, 4, &[(5, 3)]);
        assert_eq!(count_neighbors(&g, 0, 0), 1);
        assert_eq!(count_neighbors(&g, 5, 0), 1);
        assert_eq!(count_neighbors(&g, 0, 3), 1);
    }

    #[test]
    fn full_grid_counts_eight() {
        let mut g = grid(4, 4, &[]);
        for y in 0..4 {
            for x in 0..4 {
                g.set_wrapped(x, y, Cell::Alive);
            }
        }
        assert_eq!(count_neighbors(&g, 0, 0), 8);
        assert_eq!(count_neighbors(&g, 3, 2), 8);
    }

    #[test]
    fn extreme_coordinates_match_wrapped_equivalent() {
        let mut g = grid(4, 4, &[]);
        g.set_wrapped(i64::MAX, 0, Cell::Alive);
        // i64::MAX is 3 mod 4.
        assert_eq!(g.get(3, 0), Some(Cell::Alive));

        assert_eq!(count_neighbors(&g, i64::MAX, 0), count_neighbors(&g, 3, 0));
        assert_eq!(count_neighbors(&g, i64::MAX - 1, 0), count_neighbors(&g, 2, 0));
        assert_eq!(count_neighbors(&g, i64::MIN, 0), count_neighbors(&g, 0, 0));
        assert_eq!(count_neighbors(&g, i64::MIN, 0), 1);
        assert_eq!(count_neighbors(&g, 0, i64::MIN), count_neighbors(&g, 0, 0));
    }

    #[test]
    fn extreme_coordinates_on_non_power_of_two_width() {
        let g = Grid::random(Dimensions::new(184, 112), Seed::new(77)).unwrap();
        let x = i64::MAX.rem_euclid(184);
        let y = i64::MIN.rem_euclid(112);
        assert_eq!(count_neighbors(&g, i64::MAX, i64::MIN), count_neighbors(&g, x, y));
    }

    #[test]
    fn empty_stays_empty() {
        let g = grid(184, 112, &[]);
        let next = advance(&g).unwrap();
        assert!(next.is_dead());
        assert_eq!(next.dimensions(), g.dimensions());
    }

    #[test]
    fn block_stable() {
        let block = [(3, 3), (4, 3), (3, 4), (4, 4)];
        let g = grid(10, 10, &block);

        let next = advance(&g).unwrap();

        assert_eq!(next, g);
        assert_eq!(next.alive().collect::<Vec<_>>(), vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn blinker() {
        let g = grid(8, 8, &[(3, 4), (4, 4), (5, 4)]);

        let next = advance(&g).unwrap();
        assert_eq!(next.alive().collect::<Vec<_>>(), vec![(4, 3), (4, 4), (4, 5)]);

        let back = advance(&next).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn blinker_across_seam() {
        // Horizontal blinker centered on the left edge.
        let g = grid(8, 8, &[(-1, 0), (0, 0), (1, 0)]);

        let next = advance(&g).unwrap();
        assert_eq!(next.alive().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 7)]);

        assert_eq!(advance(&next).unwrap(), g);
    }

    #[test]
    fn input_not_mutated() {
        let g = Grid::random(Dimensions::new(32, 24), Seed::new(3)).unwrap();
        let before = g.clone();
        let _ = advance(&g).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn advance_into_rejects_mismatched_buffers() {
        let current = grid(4, 4, &[]);
        let mut next = grid(5, 4, &[]);
        assert_eq!(
            advance_into(&current, &mut next),
            Err(LifeError::DimensionMismatch {
                expected: Dimensions::new(4, 4),
                found: Dimensions::new(5, 4),
            })
        );
    }

    #[test]
    fn advance_into_overwrites_stale_buffer() {
        let current = grid(6, 6, &[]);
        let mut next = Grid::random(Dimensions::new(6, 6), Seed::new(9)).unwrap();
        advance_into(&current, &mut next).unwrap();
        assert!(next.is_dead());
    }
}
