use std::fmt;
use std::fmt::Display;

use crate::square::Position;

/// A direction the blank can be moved in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbors are generated in this order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The position next to `position` in this direction, if it is on the grid
    pub fn neighbor(self, position: Position) -> Option<Position> {
        let [up, down, left, right] = ADJACENT[position - 1];
        match self {
            Direction::Up => up,
            Direction::Down => down,
            Direction::Left => left,
            Direction::Right => right,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

// [up, down, left, right] for positions 1 through 9
const ADJACENT: [[Option<Position>; 4]; 9] = [
    [None, Some(4), None, Some(2)],
    [None, Some(5), Some(1), Some(3)],
    [None, Some(6), Some(2), None],
    [Some(1), Some(7), None, Some(5)],
    [Some(2), Some(8), Some(4), Some(6)],
    [Some(3), Some(9), Some(5), None],
    [Some(4), None, None, Some(8)],
    [Some(5), None, Some(7), Some(9)],
    [Some(6), None, Some(8), None],
];

#[cfg(test)]
mod tests {
    use super::Direction;
    use crate::square::Coord;

    #[test]
    fn corner_has_two_neighbors() {
        let count = Direction::ALL
            .iter()
            .filter_map(|d| d.neighbor(1))
            .count();
        assert_eq!(2, count);
    }

    #[test]
    fn center_has_four_neighbors() {
        let neighbors: Vec<_> = Direction::ALL
            .iter()
            .filter_map(|d| d.neighbor(5))
            .collect();
        assert_eq!(vec![4, 6, 2, 8], neighbors);
    }

    #[test]
    fn table_is_symmetric() {
        for position in 1..=9 {
            for &direction in Direction::ALL.iter() {
                if let Some(neighbor) = direction.neighbor(position) {
                    assert_eq!(Some(position), direction.opposite().neighbor(neighbor));
                    let distance = Coord::from_position(position)
                        .manhattan_distance(Coord::from_position(neighbor));
                    assert_eq!(1, distance);
                }
            }
        }
    }
}
