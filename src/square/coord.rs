use std::fmt;
use std::fmt::Debug;

use crate::square::{Position, WIDTH};

/// A `Coord` struct represents the column and row of a position in the grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Self([col, row])
    }

    /// Converts a 1-based, row-major grid position to a coordinate
    pub fn from_position(position: Position) -> Self {
        debug_assert!((1..=WIDTH * WIDTH).contains(&position));
        let index = position - 1;
        Self::new(index % WIDTH, index / WIDTH)
    }

    pub fn col(self) -> usize {
        self.0[0]
    }

    pub fn row(self) -> usize {
        self.0[1]
    }

    pub fn position(self) -> Position {
        self.row() * WIDTH + self.col() + 1
    }

    /// The number of single-step moves between two coordinates
    pub fn manhattan_distance(self, other: Coord) -> u32 {
        let cols = (self.col() as i64 - other.col() as i64).abs();
        let rows = (self.row() as i64 - other.row() as i64).abs();
        (cols + rows) as u32
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col(), self.row())
    }
}
