//! Game of Life core: grid storage, transition rules, and the board facade.

pub mod board;
pub mod grid;
pub mod rules;

pub use board::Board;
pub use grid::Grid;
pub use rules::LifeRules;
