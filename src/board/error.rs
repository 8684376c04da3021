use thiserror::Error;

use super::direction::Direction;

/// Caller-contract violations raised by the board. A rejected command leaves
/// the board entirely unmodified.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell index {index} is outside the board")]
    CellOutOfBounds { index: usize },
    #[error("cell {index} has no connection in direction {direction:?}")]
    InvalidDirection { index: usize, direction: Direction },
    #[error("cannot move the empty cell {index}")]
    EmptyCellMove { index: usize },
    #[error("destination cell {index} is occupied")]
    DestinationOccupied { index: usize },
    #[error("attack disambiguation must choose approach or withdraw, and only when the move is both")]
    InvalidDisambiguation,
    #[error("starting positions hold {actual} cells but the board needs {expected}")]
    PositionLengthMismatch { expected: usize, actual: usize },
    #[error("invalid position character {0:?}, expected one of '0', '1', '2'")]
    InvalidPositionChar(char),
}
