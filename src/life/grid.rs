//! Grid representation and utilities for Game of Life

use crate::error::BoardError;
use itertools::iproduct;
use std::fmt;

/// A fixed-size rectangular grid of binary cells.
///
/// Storage is a flat row-major vector indexed by `row * columns + column`.
/// Dimensions are set at construction and never change; `cells.len()` is
/// always `rows * columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Create a grid from nested rows of cells.
    ///
    /// All rows must have the same length. An empty outer vector produces a
    /// zero-sized grid.
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        let rows = cells.len();
        let columns = cells.first().map_or(0, Vec::len);

        for (row, line) in cells.iter().enumerate() {
            if line.len() != columns {
                return Err(BoardError::RaggedRows {
                    row,
                    len: line.len(),
                    expected: columns,
                });
            }
        }

        Ok(Self {
            rows,
            columns,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to the flat index.
    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Cell value at the given coordinates. Out-of-bounds positions read as
    /// dead, which is what neighbor counting at the edges relies on.
    pub fn get(&self, row: usize, column: usize) -> bool {
        if self.contains(row, column) {
            self.cells[self.index(row, column)]
        } else {
            false
        }
    }

    /// Set the cell value at the given coordinates.
    pub fn set(&mut self, row: usize, column: usize, value: bool) -> Result<(), BoardError> {
        self.ensure_in_bounds(row, column)?;
        let idx = self.index(row, column);
        self.cells[idx] = value;
        Ok(())
    }

    /// True when the coordinates address a cell of this grid.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    pub(crate) fn ensure_in_bounds(&self, row: usize, column: usize) -> Result<(), BoardError> {
        if self.contains(row, column) {
            Ok(())
        } else {
            Err(BoardError::OutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Count living neighbors of a cell.
    ///
    /// Examines the 8 grid-adjacent positions; positions beyond the edges
    /// are skipped, never wrapped around.
    pub fn count_neighbors(&self, row: usize, column: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter(|&(dr, dc)| {
                let r = row as isize + dr;
                let c = column as isize + dc;
                r >= 0 && c >= 0 && self.get(r as usize, c as usize)
            })
            .count() as u8
    }

    /// Coordinates of all living cells, in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(row, column)| self.get(row, column))
            .collect()
    }

    /// Count total living cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Total cell count, `rows * columns`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized grid.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let symbol = if self.get(row, column) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_grid_from_cells() {
        let grid = Grid::from_cells(vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.live_count(), 5);
    }

    #[test]
    fn test_from_cells_rejects_ragged_rows() {
        let err = Grid::from_cells(vec![vec![false, true], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::RaggedRows {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_cells_empty() {
        let grid = Grid::from_cells(vec![]).unwrap();
        assert_eq!(grid.len(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = Grid::from_cells(vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ])
        .unwrap();

        // Center cell is surrounded by the full ring
        assert_eq!(grid.count_neighbors(1, 1), 8);

        // Corner cell sees only 3 positions, and the center one is dead
        assert_eq!(grid.count_neighbors(0, 0), 2);
    }

    #[test]
    fn test_corner_neighbors_do_not_wrap() {
        // Live cells along the far edges must not show up as corner neighbors
        let grid = Grid::from_cells(vec![
            vec![false, false, true],
            vec![false, false, true],
            vec![true, true, true],
        ])
        .unwrap();
        assert_eq!(grid.count_neighbors(0, 0), 0);
    }

    #[test]
    fn test_out_of_bounds_get_is_dead() {
        let grid = Grid::from_cells(vec![vec![true]]).unwrap();
        assert!(grid.get(0, 0));
        assert!(!grid.get(0, 1));
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut grid = Grid::new(2, 2);
        let err = grid.set(2, 0, true).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfRange {
                row: 2,
                column: 0,
                rows: 2,
                columns: 2
            }
        );
    }

    #[test]
    fn test_live_cells() {
        let mut grid = Grid::new(2, 3);
        grid.set(0, 1, true).unwrap();
        grid.set(1, 2, true).unwrap();
        assert_eq!(grid.live_cells(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_cells(vec![vec![false, true], vec![true, false]]).unwrap();
        assert_eq!(grid.to_string(), "·█\n█·\n");
    }
}
