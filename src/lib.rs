//! Solve 3x3 sliding-tile (mystic square) puzzles

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod heuristic;
pub mod scenario;
pub mod search;
pub mod square;
