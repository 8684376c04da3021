/// The eight compass directions a piece can travel along a board line,
/// ordered so that a direction and its reflection through the center always
/// sum to 7.
#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord)]
pub enum Direction {
    UpLeft = 0,
    Up = 1,
    UpRight = 2,
    Left = 3,
    Right = 4,
    DownLeft = 5,
    Down = 6,
    DownRight = 7,
}

impl Direction {
    /// All directions in ascending index order. Connection lists and move
    /// lists follow this order, which keeps enumeration deterministic.
    pub const ALL: [Direction; 8] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// The four directions available from a weak intersection, also in
    /// ascending index order.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    pub fn opposite(&self) -> Self {
        Self::ALL[7 - *self as usize]
    }

    /// Signed linear-index offset of one step in this direction on a board
    /// with the given column count.
    pub fn delta(&self, columns: usize) -> isize {
        let columns = columns as isize;
        match self {
            Direction::UpLeft => -columns - 1,
            Direction::Up => -columns,
            Direction::UpRight => -columns + 1,
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::DownLeft => columns - 1,
            Direction::Down => columns,
            Direction::DownRight => columns + 1,
        }
    }

    /// Recovers the direction that produces the given index offset, if any.
    /// Used when replaying an enumerated chain, whose steps are recorded as
    /// landing indexes rather than directions.
    pub fn from_delta(delta: isize, columns: usize) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|direction| direction.delta(columns) == delta)
    }

    pub fn points_up(&self) -> bool {
        matches!(self, Direction::UpLeft | Direction::Up | Direction::UpRight)
    }

    pub fn points_down(&self) -> bool {
        matches!(
            self,
            Direction::DownLeft | Direction::Down | Direction::DownRight
        )
    }

    pub fn points_left(&self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::Left | Direction::DownLeft
        )
    }

    pub fn points_right(&self) -> bool {
        matches!(
            self,
            Direction::UpRight | Direction::Right | Direction::DownRight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_reflections() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.opposite(), Direction::ALL[7 - i]);
            assert_eq!(direction.opposite().opposite(), *direction);
        }
    }

    #[test]
    fn test_delta_of_opposite_negates() {
        for direction in Direction::ALL {
            assert_eq!(direction.delta(9), -direction.opposite().delta(9));
        }
    }

    #[test]
    fn test_from_delta_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_delta(direction.delta(9), 9), Some(direction));
        }
        assert_eq!(Direction::from_delta(42, 9), None);
    }
}
