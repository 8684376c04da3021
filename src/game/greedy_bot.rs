use log::{debug, warn};

use crate::board::direction::Direction;
use crate::board::error::BoardError;
use crate::board::piece::PieceType;
use crate::board::{AttackType, Board};
use crate::searcher::best_move_for;

use super::Player;

/// Enumerates every chain available this turn and plays the highest-rated
/// one. One-turn horizon, no lookahead into the opponent's reply.
pub struct GreedyBot {
    side: PieceType,
}

impl GreedyBot {
    pub fn new(side: PieceType) -> Self {
        Self { side }
    }
}

impl Player for GreedyBot {
    fn take_turn(&mut self, board: &mut Board) -> Result<(), BoardError> {
        let best = match best_move_for(board, self.side)? {
            Some(best) => best,
            None => {
                warn!("{} has no legal moves", self.side);
                return Ok(());
            }
        };
        debug!(
            "{} plays {:?} from {} (rating {})",
            self.side, best.chain.move_indexes, best.start_index, best.chain.rating
        );

        let mut from = best.start_index;
        let steps = best.chain.move_indexes.iter().zip(&best.chain.move_types);
        for (&to, &attack) in steps {
            let delta = to as isize - from as isize;
            let direction = Direction::from_delta(delta, board.columns())
                .expect("chain steps are adjacent cells");
            if attack != AttackType::None && board.will_move_attack_and_withdraw(from, direction) {
                board.set_attack_or_withdraw(attack)?;
            }
            board.perform_move(from, direction)?;
            from = to;
        }
        Ok(())
    }
}
