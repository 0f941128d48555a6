//! The board: a fluent, stateful facade over the grid and rules.

use super::{Grid, LifeRules};
use crate::error::BoardError;

/// A Game of Life board.
///
/// A board starts uninitialized; [`Board::initialize`] allocates the grid
/// and is the only transition into the ready state. It is re-entrant:
/// calling it again discards the old grid and allocates a fresh one.
/// Mutating operations return the board again so set-up calls chain, with
/// `?` carrying the fallible links:
///
/// ```
/// use game_of_life::Board;
///
/// let mut board = Board::new();
/// board
///     .initialize(4, 8)
///     .set_cell_alive(1, 4)?
///     .set_cell_alive(2, 3)?
///     .set_cell_alive(2, 4)?
///     .next_generation();
/// assert!(board.is_cell_alive(1, 3)?);
/// # Ok::<(), game_of_life::BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    grid: Option<Grid>,
}

impl Board {
    /// Create an uninitialized board. Only [`Board::initialize`] is valid
    /// until a grid has been allocated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a `rows` x `columns` grid with every cell dead, discarding
    /// any prior grid content. Zero dimensions are permitted and produce an
    /// empty grid.
    pub fn initialize(&mut self, rows: usize, columns: usize) -> &mut Self {
        self.grid = Some(Grid::new(rows, columns));
        self
    }

    /// Mark the given cell alive. Idempotent when the cell already is.
    pub fn set_cell_alive(
        &mut self,
        row: usize,
        column: usize,
    ) -> Result<&mut Self, BoardError> {
        let grid = self.grid.as_mut().ok_or(BoardError::NotInitialized)?;
        grid.set(row, column, true)?;
        Ok(self)
    }

    /// Whether the cell at `(row, column)` is alive.
    pub fn is_cell_alive(&self, row: usize, column: usize) -> Result<bool, BoardError> {
        let grid = self.ready()?;
        grid.ensure_in_bounds(row, column)?;
        Ok(grid.get(row, column))
    }

    /// Count the live cells among the up to 8 grid-adjacent neighbors of
    /// `(row, column)`. The grid has hard edges: positions outside it are
    /// skipped, never wrapped around. Pure query, result in `[0, 8]`.
    pub fn live_neighbors(&self, row: usize, column: usize) -> Result<u8, BoardError> {
        let grid = self.ready()?;
        grid.ensure_in_bounds(row, column)?;
        Ok(grid.count_neighbors(row, column))
    }

    /// Total cell count, `rows * columns`. Zero for an uninitialized board.
    pub fn len(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::len)
    }

    /// True when the board holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance the board exactly one generation.
    ///
    /// The whole next generation is computed against the prior grid before
    /// it replaces the current one, so neighbor counts never mix
    /// generations. On an uninitialized or zero-sized board this is a
    /// no-op.
    pub fn next_generation(&mut self) -> &mut Self {
        if let Some(grid) = &self.grid {
            self.grid = Some(LifeRules::evolve(grid));
        }
        self
    }

    /// Advance the board by `generations` generations.
    pub fn advance(&mut self, generations: usize) -> &mut Self {
        for _ in 0..generations {
            self.next_generation();
        }
        self
    }

    /// Number of live cells on the board.
    pub fn live_count(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::live_count)
    }

    pub fn rows(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::rows)
    }

    pub fn columns(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::columns)
    }

    /// True once [`Board::initialize`] has allocated a grid.
    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// The underlying grid, if the board has been initialized.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    fn ready(&self) -> Result<&Grid, BoardError> {
        self.grid.as_ref().ok_or(BoardError::NotInitialized)
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self { grid: Some(grid) }
    }
}
