use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Occupancy of a single board intersection. `White` and `Black` are the two
/// players and are opposites of each other; `Empty` is its own opposite.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub enum PieceType {
    Empty = 0,
    White = 1,
    Black = 2,
}

impl PieceType {
    pub const SIDES: [PieceType; 2] = [PieceType::White, PieceType::Black];

    pub fn opposite(&self) -> Self {
        match self {
            PieceType::Empty => PieceType::Empty,
            PieceType::White => PieceType::Black,
            PieceType::Black => PieceType::White,
        }
    }

    pub fn random_side() -> Self {
        *Self::SIDES.choose(&mut rand::thread_rng()).unwrap()
    }

    /// The digit used by the row-major board position string.
    pub fn to_digit(self) -> char {
        match self {
            PieceType::Empty => '0',
            PieceType::White => '1',
            PieceType::Black => '2',
        }
    }

    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(PieceType::Empty),
            '1' => Some(PieceType::White),
            '2' => Some(PieceType::Black),
            _ => None,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece_str = match self {
            PieceType::Empty => "empty",
            PieceType::White => "white",
            PieceType::Black => "black",
        };
        write!(f, "{}", piece_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for PieceType {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side {
            "white" => Ok(PieceType::White),
            "black" => Ok(PieceType::Black),
            "random" => Ok(PieceType::random_side()),
            _ => Err("invalid side; options are: white, black, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert_eq!(PieceType::White.opposite(), PieceType::Black);
        assert_eq!(PieceType::Black.opposite(), PieceType::White);
        assert_eq!(PieceType::Empty.opposite(), PieceType::Empty);
    }

    #[test]
    fn test_digit_round_trip() {
        for piece in [PieceType::Empty, PieceType::White, PieceType::Black] {
            assert_eq!(PieceType::from_digit(piece.to_digit()), Some(piece));
        }
        assert_eq!(PieceType::from_digit('3'), None);
    }

    #[test]
    fn test_parse_white() {
        assert_eq!(PieceType::White, PieceType::from_str("white").unwrap());
    }

    #[test]
    fn test_parse_black() {
        assert_eq!(PieceType::Black, PieceType::from_str("black").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let side = PieceType::from_str("random").unwrap();
        assert!(PieceType::SIDES.contains(&side));
    }
}
