//! Shortest-path searches over square states

mod best_first;
mod breadth_first;
pub mod path;

pub use self::best_first::{AStar, UniformCost};
pub use self::breadth_first::BreadthFirst;
pub use self::path::Path;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ahash::AHashMap;
use enum_dispatch::enum_dispatch;

use crate::error::{ParseStrategyError, PathError};
use crate::square::SquareState;

/// Maps the key of every discovered state to the state it was discovered from.
/// The initial state maps to `None`.
pub type Predecessors = AHashMap<String, Option<SquareState>>;

/// A search algorithm that finds a shortest sequence of moves between two states
#[enum_dispatch]
pub trait Search {
    fn search(&self, initial: &SquareState, target: &SquareState) -> SearchResult;
}

/// Selects one of the search algorithms
#[enum_dispatch(Search)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    AStar,
    UniformCost,
    BreadthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::AStar(AStar),
        Strategy::UniformCost(UniformCost),
        Strategy::BreadthFirst(BreadthFirst),
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::AStar(_) => "a-star",
            Strategy::UniformCost(_) => "dijkstra",
            Strategy::BreadthFirst(_) => "bfs",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "a-star" | "astar" | "a*" => AStar.into(),
            "2" | "dijkstra" | "uniform-cost" => UniformCost.into(),
            "3" | "bfs" | "breadth-first" => BreadthFirst.into(),
            _ => return Err(ParseStrategyError(s.to_string())),
        };
        Ok(strategy)
    }
}

/// The outcome of a single search
pub struct SearchResult {
    pub predecessors: Predecessors,
    /// true if the target was reached
    pub found: bool,
    /// the number of states taken off the frontier and expanded
    pub expanded: usize,
}

impl SearchResult {
    fn new(initial: &SquareState) -> Self {
        let mut predecessors = Predecessors::default();
        predecessors.insert(initial.key().to_owned(), None);
        Self {
            predecessors,
            found: false,
            expanded: 0,
        }
    }

    /// The discovered path from the initial state to `target`
    pub fn path_to(&self, target: &SquareState) -> Result<Path, PathError> {
        path::reconstruct(&self.predecessors, target)
    }
}

pub enum SolveResult {
    Solved(Solution),
    NoPath,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        match self {
            SolveResult::Solved(_) => true,
            SolveResult::NoPath => false,
        }
    }

    pub fn solved(&self) -> Option<&Solution> {
        match self {
            SolveResult::Solved(solution) => Some(solution),
            SolveResult::NoPath => None,
        }
    }
}

pub struct Solution {
    pub path: Path,
    pub expanded: usize,
}

/// Searches for a shortest path from `initial` to `target` using `strategy`
pub fn solve(initial: &SquareState, target: &SquareState, strategy: Strategy) -> Result<SolveResult, PathError> {
    debug!("Searching from {} to {} with {}", initial.key(), target.key(), strategy);
    let result = strategy.search(initial, target);
    debug!(
        "Search finished (found={}, expanded={}, discovered={})",
        result.found,
        result.expanded,
        result.predecessors.len()
    );
    if !result.found {
        return Ok(SolveResult::NoPath);
    }
    let path = result.path_to(target)?;
    Ok(SolveResult::Solved(Solution {
        path,
        expanded: result.expanded,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strategy() {
        assert_eq!(Strategy::AStar(AStar), "a-star".parse().unwrap());
        assert_eq!(Strategy::AStar(AStar), "1".parse().unwrap());
        assert_eq!(Strategy::UniformCost(UniformCost), "Dijkstra".parse().unwrap());
        assert_eq!(Strategy::BreadthFirst(BreadthFirst), "3".parse().unwrap());
        assert!("4".parse::<Strategy>().is_err());
        assert!("dfs".parse::<Strategy>().is_err());
    }

    #[test]
    fn names_parse() {
        for &strategy in Strategy::ALL.iter() {
            assert_eq!(strategy, strategy.to_string().parse().unwrap());
        }
    }

    #[test]
    fn same_state_is_found_immediately() {
        let state: SquareState = "_ 1 2 / 4 6 3 / 7 5 8".parse().unwrap();
        for &strategy in Strategy::ALL.iter() {
            let result = strategy.search(&state, &state);
            assert!(result.found, "{}", strategy);
            assert_eq!(1, result.predecessors.len());
            assert_eq!(Some(&None), result.predecessors.get(state.key()));
            assert_eq!(1, result.path_to(&state).unwrap().len());
        }
    }

    #[test]
    fn one_move() {
        let target = SquareState::ordered();
        let initial = target.move_left().unwrap();
        for &strategy in Strategy::ALL.iter() {
            let solution = match solve(&initial, &target, strategy).unwrap() {
                SolveResult::Solved(solution) => solution,
                SolveResult::NoPath => panic!("{} found no path", strategy),
            };
            assert_eq!(1, solution.path.moves());
        }
    }
}
