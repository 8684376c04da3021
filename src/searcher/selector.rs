use crate::board::error::BoardError;
use crate::board::piece::PieceType;
use crate::board::Board;

use super::move_tree::{all_chains_for_piece, CompleteMove};

/// The selector's answer: which piece to move and the full chain to play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub start_index: usize,
    pub chain: CompleteMove,
}

/// Greedy one-turn evaluation: enumerates every chain for every piece the
/// side may move and keeps the highest-rated one. Ties keep the first chain
/// encountered, so the result is deterministic. Returns `None` when the side
/// has no legal move. No lookahead past the mover's current turn.
pub fn best_move_for(board: &mut Board, side: PieceType) -> Result<Option<BestMove>, BoardError> {
    let mut best: Option<BestMove> = None;
    for index in board.pieces_that_can_move(side) {
        for chain in all_chains_for_piece(board, index)? {
            let improves = best
                .as_ref()
                .map_or(true, |current| chain.rating > current.chain.rating);
            if improves {
                best = Some(BestMove {
                    start_index: index,
                    chain,
                });
            }
        }
    }
    Ok(best)
}
