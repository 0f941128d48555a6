//! Conway's Game of Life on a fixed-size grid.
//!
//! This library provides a deterministic cellular automaton with binary
//! cells and hard (non-wrapping) edges, advanced one generation at a time
//! with the classic B3/S23 rule.
//!
//! ```
//! use game_of_life::Board;
//!
//! let mut board = Board::new();
//! board
//!     .initialize(4, 8)
//!     .set_cell_alive(1, 4)?
//!     .set_cell_alive(2, 3)?
//!     .set_cell_alive(2, 4)?;
//!
//! assert_eq!(board.len(), 32);
//! assert_eq!(board.live_neighbors(1, 3)?, 3);
//!
//! board.next_generation();
//! assert!(board.is_cell_alive(1, 4)?);
//! # Ok::<(), game_of_life::BoardError>(())
//! ```

pub mod error;
pub mod life;

pub use error::BoardError;
pub use life::{Board, Grid, LifeRules};
