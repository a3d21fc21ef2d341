use crate::collections::SetQueue;
use crate::search::{Search, SearchResult};
use crate::square::SquareState;

/// Breadth-first search. States are marked visited when they are enqueued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreadthFirst;

impl Search for BreadthFirst {
    fn search(&self, initial: &SquareState, target: &SquareState) -> SearchResult {
        let mut result = SearchResult::new(initial);
        let mut queue = SetQueue::new();
        queue.insert(initial.clone());

        while let Some(current) = queue.pop() {
            if current == *target {
                result.found = true;
                break;
            }
            trace!("Expanding {} ({} queued)", current.key(), queue.len());
            result.expanded += 1;
            for (_, neighbor) in current.neighbors() {
                let key = neighbor.key().to_owned();
                if queue.insert(neighbor) {
                    result.predecessors.insert(key, Some(current.clone()));
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_each_state_once() {
        let initial = SquareState::ordered();
        let target: SquareState = "2 1 3 / 4 5 6 / 7 8 _".parse().unwrap();
        let result = BreadthFirst.search(&initial, &target);
        assert!(!result.found);
        // half of all permutations are reachable
        assert_eq!(181_440, result.predecessors.len());
        assert_eq!(result.predecessors.len(), result.expanded);
    }

    #[test]
    fn predecessors_are_one_move_away() {
        let initial: SquareState = "_ 1 2 / 4 6 3 / 7 5 8".parse().unwrap();
        let result = BreadthFirst.search(&initial, &SquareState::ordered());
        assert!(result.found);
        for (key, predecessor) in result.predecessors.iter() {
            if let Some(predecessor) = predecessor {
                let state: SquareState = key.parse().unwrap();
                assert!(predecessor.direction_to(&state).is_some());
            }
        }
    }
}
