//! Game of Life transition rules

use super::Grid;
use itertools::iproduct;

/// The classic Life rule (B3/S23) applied to whole grids.
pub struct LifeRules;

impl LifeRules {
    /// Maximum number of neighbors a cell can have in a Moore neighborhood.
    pub const MAX_NEIGHBORS: u8 = 8;

    /// Whether a cell is alive in the next generation, given its current
    /// state and its live-neighbor count in the current generation.
    ///
    /// Two or three neighbors keep a live cell alive; exactly three bring a
    /// dead cell to life; a dead cell with two neighbors stays dead.
    pub fn should_be_alive(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Evolve the grid one generation forward.
    ///
    /// Every neighbor count is taken against `current`, and the result is
    /// collected into a freshly allocated grid; a cell decided early can
    /// never leak into the neighbor count of a cell decided later.
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = Grid::new(current.rows, current.columns);

        next.cells = iproduct!(0..current.rows, 0..current.columns)
            .map(|(row, column)| {
                let neighbors = current.count_neighbors(row, column);
                Self::should_be_alive(current.get(row, column), neighbors)
            })
            .collect();

        next
    }
}
