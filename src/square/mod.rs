//! The 3x3 mystic square and its moves

mod coord;
mod direction;
mod parse;

pub use self::coord::Coord;
pub use self::direction::Direction;

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;

use crate::error::InvalidState;

/// A 1-based, row-major grid position
pub type Position = usize;
/// A tile value
pub type Value = u8;

/// The width and height of the grid
pub const WIDTH: usize = 3;
/// The number of cells in the grid
pub const LEN: usize = WIDTH * WIDTH;
/// The value that represents the blank cell
pub const BLANK: Value = LEN as Value;

/// One arrangement of tiles in the square.
///
/// A `SquareState` always holds every value from 1 to 9 exactly once.
/// States are never modified; moves produce new states.
#[derive(Clone, Debug)]
pub struct SquareState {
    tiles: [Value; LEN],
    key: String,
}

impl SquareState {
    /// Creates a state from `(position, value)` pairs.
    ///
    /// Fails unless every position from 1 to 9 is given exactly once and every value
    /// from 1 to 9 appears exactly once.
    pub fn from_mapping<I>(mapping: I) -> Result<Self, InvalidState>
    where
        I: IntoIterator<Item = (Position, Value)>,
    {
        let mut tiles = [None; LEN];
        for (position, value) in mapping {
            if !(1..=LEN).contains(&position) {
                return Err(InvalidState::new(format!("position {} is out of range", position)));
            }
            if !(1..=BLANK).contains(&value) {
                return Err(InvalidState::new(format!("value {} is out of range", value)));
            }
            if tiles[position - 1].replace(value).is_some() {
                return Err(InvalidState::new(format!("position {} is repeated", position)));
            }
        }
        let mut values = [0; LEN];
        for (i, tile) in tiles.iter().enumerate() {
            values[i] = tile.ok_or_else(|| InvalidState::new(format!("position {} is missing", i + 1)))?;
        }
        Self::from_values(values)
    }

    /// Creates a state from values listed in position order
    pub fn from_values(tiles: [Value; LEN]) -> Result<Self, InvalidState> {
        let mut seen = [false; LEN];
        for &value in tiles.iter() {
            if !(1..=BLANK).contains(&value) {
                return Err(InvalidState::new(format!("value {} is out of range", value)));
            }
            if std::mem::replace(&mut seen[usize::from(value) - 1], true) {
                return Err(InvalidState::new(format!("value {} is repeated", value)));
            }
        }
        Ok(Self::new_unchecked(tiles))
    }

    /// The arrangement with every value at its own position and the blank in the last cell
    pub fn ordered() -> Self {
        let mut tiles = [0; LEN];
        for (i, tile) in tiles.iter_mut().enumerate() {
            *tile = (i + 1) as Value;
        }
        Self::new_unchecked(tiles)
    }

    fn new_unchecked(tiles: [Value; LEN]) -> Self {
        let key = tiles.iter().join("");
        Self { tiles, key }
    }

    /// The canonical identity of this state. Two states are equal iff their keys are equal.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if every position holds a distinct value from 1 to 9
    pub fn is_valid(&self) -> bool {
        let mut seen = [false; LEN];
        self.tiles.iter().all(|&value| {
            (1..=BLANK).contains(&value) && !std::mem::replace(&mut seen[usize::from(value) - 1], true)
        })
    }

    pub fn position_of(&self, value: Value) -> Position {
        self.tiles
            .iter()
            .position(|&v| v == value)
            .map(|i| i + 1)
            .unwrap_or_else(|| panic!("value {} is missing from state {}", value, self.key))
    }

    /// The position of the blank cell
    pub fn empty_position(&self) -> Position {
        self.position_of(BLANK)
    }

    /// The position of every value, indexed by `value - 1`
    pub fn positions(&self) -> [Position; LEN] {
        let mut positions = [0; LEN];
        for (i, &value) in self.tiles.iter().enumerate() {
            positions[usize::from(value) - 1] = i + 1;
        }
        positions
    }

    /// A copy of the position-to-value mapping
    pub fn mapping(&self) -> BTreeMap<Position, Value> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &value)| (i + 1, value))
            .collect()
    }

    /// Moves the blank one cell in `direction`. Returns `None` if the blank is against that edge.
    pub fn apply(&self, direction: Direction) -> Option<SquareState> {
        let blank = self.empty_position();
        let neighbor = direction.neighbor(blank)?;
        let mut tiles = self.tiles;
        tiles.swap(blank - 1, neighbor - 1);
        Some(Self::new_unchecked(tiles))
    }

    pub fn move_up(&self) -> Option<SquareState> {
        self.apply(Direction::Up)
    }

    pub fn move_down(&self) -> Option<SquareState> {
        self.apply(Direction::Down)
    }

    pub fn move_left(&self) -> Option<SquareState> {
        self.apply(Direction::Left)
    }

    pub fn move_right(&self) -> Option<SquareState> {
        self.apply(Direction::Right)
    }

    /// Every state reachable with a single move
    pub fn neighbors(&self) -> impl Iterator<Item = (Direction, SquareState)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |&direction| self.apply(direction).map(|state| (direction, state)))
    }

    /// The move that turns this state into `other`, if they are one move apart
    pub fn direction_to(&self, other: &SquareState) -> Option<Direction> {
        self.neighbors()
            .find(|(_, state)| state == other)
            .map(|(direction, _)| direction)
    }
}

impl PartialEq for SquareState {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for SquareState {}

impl Hash for SquareState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Display for SquareState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rows = self.tiles.chunks(WIDTH).map(|row| {
            row.iter()
                .map(|&value| {
                    if value == BLANK {
                        " ".to_string()
                    } else {
                        value.to_string()
                    }
                })
                .join(" ")
        });
        write!(f, "{}", rows.format("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy() -> SquareState {
        SquareState::from_values([9, 1, 2, 4, 6, 3, 7, 5, 8]).unwrap()
    }

    #[test]
    fn from_mapping() {
        let state = SquareState::from_mapping(vec![
            (1, 9), (2, 1), (3, 2),
            (4, 4), (5, 6), (6, 3),
            (7, 7), (8, 5), (9, 8),
        ])
        .unwrap();
        assert_eq!(easy(), state);
        assert_eq!("912463758", state.key());
    }

    #[test]
    fn from_mapping_rejects_repeated_value() {
        let mapping = (1..=9).map(|p| (p, if p == 2 { 1 } else { p as Value }));
        assert!(SquareState::from_mapping(mapping).is_err());
    }

    #[test]
    fn from_mapping_rejects_missing_position() {
        let mapping = (1..=8).map(|p| (p, p as Value));
        assert!(SquareState::from_mapping(mapping).is_err());
    }

    #[test]
    fn from_mapping_rejects_out_of_range() {
        let mapping = (1..=9).map(|p| (p, p as Value - 1));
        assert!(SquareState::from_mapping(mapping).is_err());
        let mapping = (1..=9).map(|p| (p + 1, p as Value));
        assert!(SquareState::from_mapping(mapping).is_err());
    }

    #[test]
    fn mapping_round_trip() {
        let state = easy();
        assert_eq!(state, SquareState::from_mapping(state.mapping()).unwrap());
    }

    #[test]
    fn ordered() {
        let state = SquareState::ordered();
        assert!(state.is_valid());
        assert_eq!("123456789", state.key());
        assert_eq!(9, state.empty_position());
    }

    #[test]
    fn empty_position() {
        let state = easy();
        assert_eq!(1, state.empty_position());
        assert_eq!(1, state.tiles.iter().filter(|&&v| v == BLANK).count());
    }

    #[test]
    fn moves_from_corner() {
        let state = easy();
        assert!(state.move_up().is_none());
        assert!(state.move_left().is_none());
        assert_eq!("192463758", state.move_right().unwrap().key());
        assert_eq!("412963758", state.move_down().unwrap().key());
    }

    #[test]
    fn moves_do_not_mutate() {
        let state = easy();
        let _ = state.move_right();
        assert_eq!("912463758", state.key());
    }

    #[test]
    fn moves_are_inverse() {
        let state = SquareState::from_values([1, 2, 3, 4, 9, 5, 6, 7, 8]).unwrap();
        for &direction in Direction::ALL.iter() {
            let moved = state.apply(direction).unwrap();
            assert_ne!(state, moved);
            assert_eq!(state, moved.apply(direction.opposite()).unwrap());
        }
        assert_eq!(state, state.move_down().unwrap().move_up().unwrap());
        assert_eq!(state, state.move_left().unwrap().move_right().unwrap());
    }

    #[test]
    fn neighbors() {
        let directions: Vec<_> = easy().neighbors().map(|(d, _)| d).collect();
        assert_eq!(vec![Direction::Right, Direction::Down], directions);
        let center = SquareState::from_values([1, 2, 3, 4, 9, 5, 6, 7, 8]).unwrap();
        assert_eq!(4, center.neighbors().count());
    }

    #[test]
    fn direction_to() {
        let state = easy();
        let right = state.move_right().unwrap();
        assert_eq!(Some(Direction::Right), state.direction_to(&right));
        assert_eq!(Some(Direction::Left), right.direction_to(&state));
        assert_eq!(None, state.direction_to(&state));
        assert_eq!(None, state.direction_to(&SquareState::ordered()));
    }

    #[test]
    fn positions() {
        let positions = easy().positions();
        assert_eq!(2, positions[0]);
        assert_eq!(1, positions[8]);
    }

    #[test]
    fn display() {
        assert_eq!("  1 2\n4 6 3\n7 5 8", easy().to_string());
    }
}
