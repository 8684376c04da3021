use log::warn;
use rand::seq::SliceRandom;

use crate::board::error::BoardError;
use crate::board::piece::PieceType;
use crate::board::Board;

use super::Player;

/// Picks a uniformly random movable piece, then random steps until the turn
/// ends. Ambiguous captures are left on their default approach resolution.
pub struct RandomPlayer {
    side: PieceType,
}

impl RandomPlayer {
    pub fn new(side: PieceType) -> Self {
        Self { side }
    }
}

impl Player for RandomPlayer {
    fn take_turn(&mut self, board: &mut Board) -> Result<(), BoardError> {
        let mut rng = rand::thread_rng();

        loop {
            let movable = board.pieces_that_can_move(self.side);
            let index = match movable.choose(&mut rng) {
                Some(&index) => index,
                None => {
                    warn!("{} has no legal moves", self.side);
                    return Ok(());
                }
            };

            let moves = board.possible_moves_for_cell(index);
            let step = match moves.choose(&mut rng) {
                Some(step) => step,
                None => {
                    warn!("{} has no legal moves", self.side);
                    return Ok(());
                }
            };

            if !board.perform_move(index, step.direction)? {
                return Ok(());
            }
            // A capture opened a chain continuation; keep going. The movable
            // set now contains only the piece mid-chain.
        }
    }
}
