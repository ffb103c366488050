#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use rules::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod rules;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
}

impl GameConfig {
    /// Smallest board on which a full line exists.
    pub const MIN_ROWS: Coord = 3;

    pub const fn new_unchecked(rows: Coord) -> Self {
        Self { rows }
    }

    pub fn new(rows: Coord) -> Self {
        Self::new_unchecked(rows.clamp(Self::MIN_ROWS, Coord::MAX))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_rows_below_the_minimum() {
        assert_eq!(GameConfig::new(0).rows, GameConfig::MIN_ROWS);
        assert_eq!(GameConfig::new(4).rows, 4);
    }

    #[test]
    fn total_cells_is_the_square_of_rows() {
        assert_eq!(GameConfig::new(3).total_cells(), 9);
        assert_eq!(GameConfig::new(4).total_cells(), 16);
    }
}
