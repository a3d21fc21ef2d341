//! Distance estimates for informed search

use crate::square::{Coord, SquareState, BLANK};

/// Sums, over every tile except the blank, the number of rows and columns between the
/// tile's position in `current` and its position in `target`.
///
/// Every move shifts exactly one tile by one cell, so this never overestimates the number
/// of moves left.
///
/// # Panics
///
/// Panics if either state is invalid.
pub fn manhattan_distance(current: &SquareState, target: &SquareState) -> u32 {
    assert!(current.is_valid(), "invalid state {}", current.key());
    assert!(target.is_valid(), "invalid state {}", target.key());
    let current_positions = current.positions();
    let target_positions = target.positions();
    current_positions
        .iter()
        .zip(target_positions.iter())
        .take(usize::from(BLANK) - 1)
        .map(|(&from, &to)| Coord::from_position(from).manhattan_distance(Coord::from_position(to)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::manhattan_distance;
    use crate::square::SquareState;

    #[test]
    fn same_state() {
        let state: SquareState = "_ 1 2 / 4 6 3 / 7 5 8".parse().unwrap();
        assert_eq!(0, manhattan_distance(&state, &state));
        assert_eq!(0, manhattan_distance(&SquareState::ordered(), &SquareState::ordered()));
    }

    #[test]
    fn ignores_blank() {
        let state = SquareState::ordered().move_up().unwrap();
        assert_eq!(1, manhattan_distance(&state, &SquareState::ordered()));
    }

    #[test]
    fn easy() {
        // 1, 2, 3, 5, 6 and 8 are each one cell away
        let state: SquareState = "_ 1 2 / 4 6 3 / 7 5 8".parse().unwrap();
        assert_eq!(6, manhattan_distance(&state, &SquareState::ordered()));
    }

    #[test]
    fn reversed() {
        let initial: SquareState = "8 7 6 / 5 _ 4 / 3 2 1".parse().unwrap();
        let target: SquareState = "1 2 3 / 4 _ 5 / 6 7 8".parse().unwrap();
        assert_eq!(24, manhattan_distance(&initial, &target));
    }

    #[test]
    fn symmetric() {
        let a: SquareState = "4 1 3 / 7 2 6 / _ 5 8".parse().unwrap();
        let b = SquareState::ordered();
        assert_eq!(manhattan_distance(&a, &b), manhattan_distance(&b, &a));
    }
}
