use rustc_hash::FxHashSet;

use super::direction::Direction;
use super::piece::PieceType;
use super::AttackType;

/// The mutable per-turn state of a board: whose turn it is, which cells the
/// currently moving piece has already occupied, whether a piece is mid-chain,
/// the direction it last played, and a pending approach/withdraw choice.
/// Grouped into one value so the enumerator can snapshot and restore it
/// atomically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct TurnState {
    pub(super) turn: PieceType,
    pub(super) visited: FxHashSet<usize>,
    pub(super) mid_chain: Option<usize>,
    pub(super) last_direction: Option<Direction>,
    pub(super) pending_attack: Option<AttackType>,
}

impl TurnState {
    pub(super) fn new(turn: PieceType) -> Self {
        Self {
            turn,
            visited: FxHashSet::default(),
            mid_chain: None,
            last_direction: None,
            pending_attack: None,
        }
    }
}

/// Full value snapshot of a board's mutable state: every cell's occupant,
/// both piece counts, and the turn state. Restoring a snapshot reproduces
/// the saved position exactly; the move-tree enumerator brackets every trial
/// move with a save/restore pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub(super) positions: Vec<PieceType>,
    pub(super) white_pieces: u32,
    pub(super) black_pieces: u32,
    pub(super) turn: TurnState,
}

impl BoardState {
    pub fn white_pieces(&self) -> u32 {
        self.white_pieces
    }

    pub fn black_pieces(&self) -> u32 {
        self.black_pieces
    }

    pub fn turn(&self) -> PieceType {
        self.turn.turn
    }
}
