use ahash::{AHashMap, AHashSet};

use crate::collections::PriorityQueue;
use crate::heuristic::manhattan_distance;
use crate::search::{Search, SearchResult};
use crate::square::SquareState;

type Priority = u32;

/// the distance of a state that has been discovered but not yet reached
const INFINITY: Priority = Priority::MAX;

/// A* search guided by the Manhattan distance to the target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AStar;

/// Dijkstra's algorithm. Every move costs one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformCost;

impl Search for AStar {
    fn search(&self, initial: &SquareState, target: &SquareState) -> SearchResult {
        BestFirst {
            target,
            heuristic: Some(manhattan_distance),
            skip_closed: true,
        }
        .search(initial)
    }
}

impl Search for UniformCost {
    fn search(&self, initial: &SquareState, target: &SquareState) -> SearchResult {
        BestFirst {
            target,
            heuristic: None,
            skip_closed: false,
        }
        .search(initial)
    }
}

struct BestFirst<'a> {
    target: &'a SquareState,
    heuristic: Option<fn(&SquareState, &SquareState) -> u32>,
    /// do not relax the distance of states that have already been expanded
    skip_closed: bool,
}

impl BestFirst<'_> {
    fn priority(&self, state: &SquareState, distance: Priority) -> Priority {
        match self.heuristic {
            // saturate so an unreached state never sorts ahead of a reached one
            Some(heuristic) => distance
                .checked_add(heuristic(state, self.target))
                .unwrap_or(INFINITY),
            None => distance,
        }
    }

    fn search(&self, initial: &SquareState) -> SearchResult {
        let mut result = SearchResult::new(initial);
        let mut distances: AHashMap<String, Priority> = AHashMap::default();
        let mut closed: AHashSet<String> = AHashSet::default();
        let mut frontier = PriorityQueue::new();

        distances.insert(initial.key().to_owned(), 0);
        frontier.push(initial.key().to_owned(), initial.clone(), self.priority(initial, 0));

        while let Some((key, current, priority)) = frontier.pop() {
            if key == self.target.key() {
                result.found = true;
                break;
            }
            let distance = *distances
                .get(&key)
                .expect("expanded a state with no recorded distance");
            trace!("Expanding {} (distance={}, priority={})", key, distance, priority);
            result.expanded += 1;

            for (_, neighbor) in current.neighbors() {
                let neighbor_key = neighbor.key();
                if !distances.contains_key(neighbor_key) {
                    distances.insert(neighbor_key.to_owned(), INFINITY);
                    let priority = self.priority(&neighbor, INFINITY);
                    frontier.push(neighbor_key.to_owned(), neighbor.clone(), priority);
                }
                let tentative = distance.saturating_add(1);
                let known = distances.get(neighbor_key).copied().unwrap_or(INFINITY);
                if tentative < known && !(self.skip_closed && closed.contains(neighbor_key)) {
                    result
                        .predecessors
                        .insert(neighbor_key.to_owned(), Some(current.clone()));
                    distances.insert(neighbor_key.to_owned(), tentative);
                    frontier.update_priority(neighbor_key, self.priority(&neighbor, tentative));
                }
            }
            closed.insert(key);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_saturates() {
        let target = SquareState::ordered();
        let a_star = BestFirst {
            target: &target,
            heuristic: Some(manhattan_distance),
            skip_closed: true,
        };
        let state = target.move_up().unwrap();
        assert_eq!(INFINITY, a_star.priority(&state, INFINITY));
        assert_eq!(INFINITY, a_star.priority(&state, INFINITY - 1));
        assert_eq!(INFINITY - 1, a_star.priority(&target, INFINITY - 1));
        assert_eq!(4, a_star.priority(&state, 3));
    }

    #[test]
    fn uniform_cost_priority_is_distance() {
        let target = SquareState::ordered();
        let dijkstra = BestFirst {
            target: &target,
            heuristic: None,
            skip_closed: false,
        };
        let state = target.move_up().unwrap().move_left().unwrap();
        assert_eq!(7, dijkstra.priority(&state, 7));
    }

    #[test]
    fn a_star_expands_fewer_states() {
        let initial: SquareState = "4 1 3 / 7 2 6 / _ 5 8".parse().unwrap();
        let target = SquareState::ordered();
        let informed = AStar.search(&initial, &target);
        let uninformed = UniformCost.search(&initial, &target);
        assert!(informed.found);
        assert!(uninformed.found);
        assert!(informed.expanded < uninformed.expanded);
        assert_eq!(
            informed.path_to(&target).unwrap().len(),
            uninformed.path_to(&target).unwrap().len()
        );
    }
}
