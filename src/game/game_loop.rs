use log::{debug, info};

use crate::board::error::BoardError;
use crate::board::piece::PieceType;
use crate::board::Board;

use super::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(PieceType),
    TurnLimit,
}

/// Alternates turns between the two players until one side runs out of
/// pieces or `turn_limit` full turns pass. Two random players can shuffle
/// their last pieces around forever, so the limit keeps games finite.
/// `on_turn` fires after every completed turn, before the winner check.
pub fn run_game(
    board: &mut Board,
    white: &mut dyn Player,
    black: &mut dyn Player,
    turn_limit: u32,
    mut on_turn: impl FnMut(&Board),
) -> Result<Outcome, BoardError> {
    for turn in 0..turn_limit {
        if let Some(winner) = board.winner() {
            info!("{} wins after {} turns", winner, turn);
            return Ok(Outcome::Winner(winner));
        }

        let side = board.turn();
        debug!(
            "turn {}: {} to move ({}W / {}B)",
            turn,
            side,
            board.white_pieces(),
            board.black_pieces()
        );
        match side {
            PieceType::White => white.take_turn(board)?,
            _ => black.take_turn(board)?,
        }
        on_turn(board);
    }

    match board.winner() {
        Some(winner) => Ok(Outcome::Winner(winner)),
        None => Ok(Outcome::TurnLimit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GreedyBot, RandomPlayer};

    #[test]
    fn test_greedy_bot_finishes_a_won_position() {
        // White's best chain captures both black pieces in one turn.
        let mut board = Board::from_positions(3, 3, "000210002").unwrap();
        let mut white = GreedyBot::new(PieceType::White);
        let mut black = GreedyBot::new(PieceType::Black);

        let outcome = run_game(&mut board, &mut white, &mut black, 10, |_| {}).unwrap();
        assert_eq!(outcome, Outcome::Winner(PieceType::White));
        assert_eq!(board.black_pieces(), 0);
        assert_eq!(board.white_pieces(), 1);
    }

    #[test]
    fn test_random_game_terminates_and_conserves_pieces() {
        let mut board = Board::new();
        let mut white = RandomPlayer::new(PieceType::White);
        let mut black = RandomPlayer::new(PieceType::Black);

        let mut turns = 0;
        run_game(&mut board, &mut white, &mut black, 500, |board| {
            turns += 1;
            assert!(board.white_pieces() <= 22);
            assert!(board.black_pieces() <= 22);
        })
        .unwrap();

        assert!(turns > 0);
        // Either somebody won or the limit tripped; both leave a consistent
        // board behind.
        let remaining = board.white_pieces() + board.black_pieces();
        assert!(remaining >= 1 && remaining <= 44);
    }

    #[test]
    fn test_winner_reported_before_any_move() {
        let mut board = Board::from_positions(3, 3, "000010000").unwrap();
        let mut white = RandomPlayer::new(PieceType::White);
        let mut black = RandomPlayer::new(PieceType::Black);

        let outcome = run_game(&mut board, &mut white, &mut black, 10, |_| {}).unwrap();
        assert_eq!(outcome, Outcome::Winner(PieceType::White));
    }
}
