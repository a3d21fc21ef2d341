//! Recovering move sequences from search results

use crate::error::PathError;
use crate::search::Predecessors;
use crate::square::{Direction, SquareState};

/// A sequence of states from an initial state to a target, each one move from the last
#[derive(Clone, Debug, PartialEq)]
pub struct Path(Vec<SquareState>);

impl Path {
    pub fn states(&self) -> &[SquareState] {
        &self.0
    }

    /// The number of states, including the initial state
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of moves
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&SquareState> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&SquareState> {
        self.0.last()
    }

    /// The direction the blank moves in at each step
    pub fn directions(&self) -> Vec<Direction> {
        // `reconstruct` only builds paths of adjacent states
        self.0
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(&pair[1]))
            .collect()
    }
}

/// Follows predecessors back from `target` to the initial state and returns the states in
/// the order they are visited from the initial state.
pub fn reconstruct(predecessors: &Predecessors, target: &SquareState) -> Result<Path, PathError> {
    let mut states = vec![target.clone()];
    let mut previous = predecessors.get(target.key()).ok_or(PathError::NoPath)?;
    while let Some(state) = previous {
        let next = &states[states.len() - 1];
        if state.direction_to(next).is_none() {
            return Err(PathError::NotAdjacent(state.key().to_owned(), next.key().to_owned()));
        }
        states.push(state.clone());
        previous = predecessors
            .get(state.key())
            .ok_or_else(|| PathError::Broken(state.key().to_owned()))?;
        // a chain can only visit each recorded state once
        if states.len() > predecessors.len() {
            return Err(PathError::Cycle(states.len()));
        }
    }
    states.reverse();
    debug!("Reconstructed path with {} moves", states.len() - 1);
    Ok(Path(states))
}
