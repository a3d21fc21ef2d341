//! Built-in puzzles of increasing difficulty

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{InvalidState, ParseDifficultyError};
use crate::square::{Position, SquareState, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// six moves from the ordered square
    Easy,
    /// thirty moves, the tiles reversed around a centered blank
    Hard,
    /// two tiles swapped, which no sequence of moves can produce
    NoPath,
}

/// An initial and a target state
pub struct Scenario {
    pub initial: SquareState,
    pub target: SquareState,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Hard, Difficulty::NoPath];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::NoPath => "no-path",
        }
    }

    pub fn scenario(self) -> Result<Scenario, InvalidState> {
        let (initial, target) = match self {
            Difficulty::Easy => (
                [9, 1, 2,
                 4, 6, 3,
                 7, 5, 8],
                [1, 2, 3,
                 4, 5, 6,
                 7, 8, 9],
            ),
            Difficulty::Hard => (
                [8, 7, 6,
                 5, 9, 4,
                 3, 2, 1],
                [1, 2, 3,
                 4, 9, 5,
                 6, 7, 8],
            ),
            Difficulty::NoPath => (
                [2, 1, 3,
                 4, 5, 6,
                 7, 8, 9],
                [1, 2, 3,
                 4, 5, 6,
                 7, 8, 9],
            ),
        };
        Ok(Scenario {
            initial: SquareState::from_mapping(numbered(initial))?,
            target: SquareState::from_mapping(numbered(target))?,
        })
    }
}

fn numbered(values: [Value; 9]) -> impl Iterator<Item = (Position, Value)> {
    (1..).zip(values.to_vec())
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let difficulty = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Difficulty::Easy,
            "2" | "hard" => Difficulty::Hard,
            "3" | "no-path" | "nopath" => Difficulty::NoPath,
            _ => return Err(ParseDifficultyError(s.to_string())),
        };
        Ok(difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;

    #[test]
    fn scenarios_are_valid() {
        for &difficulty in Difficulty::ALL.iter() {
            let scenario = difficulty.scenario().unwrap();
            assert!(scenario.initial.is_valid());
            assert!(scenario.target.is_valid());
            assert_ne!(scenario.initial, scenario.target);
        }
    }

    #[test]
    fn easy_layout() {
        let scenario = Difficulty::Easy.scenario().unwrap();
        assert_eq!("912463758", scenario.initial.key());
        assert_eq!("123456789", scenario.target.key());
    }

    #[test]
    fn parse() {
        assert_eq!(Difficulty::Easy, "1".parse().unwrap());
        assert_eq!(Difficulty::Hard, "HARD".parse().unwrap());
        assert_eq!(Difficulty::NoPath, "no-path".parse().unwrap());
        assert!("medium".parse::<Difficulty>().is_err());
        for &difficulty in Difficulty::ALL.iter() {
            assert_eq!(difficulty, difficulty.to_string().parse().unwrap());
        }
    }
}
