use crate::board::error::BoardError;
use crate::board::piece::PieceType;
use crate::board::{AttackType, Board};

/// One full chain a piece can play in a single turn: the landing cell of
/// each step, the capture applied at each step, and a rating equal to the
/// net material change for the moving side (+1 per opposing piece removed;
/// a pure paika chain rates 0).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompleteMove {
    pub move_indexes: Vec<usize>,
    pub move_types: Vec<AttackType>,
    pub rating: i32,
}

/// Enumerates every legal chain the piece at `index` can play this turn.
///
/// Depth-first backtracking over the board's own move API: every trial move
/// is bracketed by a `save_state`/`restore_state` pair, so sibling branches
/// never observe each other's captures and the board is left exactly as it
/// was found. A move that is simultaneously a valid approach and a valid
/// withdraw forks into both resolutions (approach first) since they capture
/// different pieces. Results are deterministic: two calls from the same
/// board state return identical chains in identical order.
pub fn all_chains_for_piece(
    board: &mut Board,
    index: usize,
) -> Result<Vec<CompleteMove>, BoardError> {
    let mut chains = Vec::new();
    let mut path = Vec::new();
    let mut types = Vec::new();
    explore(board, index, &mut path, &mut types, 0, &mut chains)?;
    Ok(chains)
}

fn explore(
    board: &mut Board,
    index: usize,
    path: &mut Vec<usize>,
    types: &mut Vec<AttackType>,
    rating: i32,
    chains: &mut Vec<CompleteMove>,
) -> Result<(), BoardError> {
    let moves = board.possible_moves_for_cell(index);
    if moves.is_empty() {
        // A dead end; whatever steps accumulated so far form a finished
        // chain. At the root (no steps yet) the piece simply cannot move.
        if !path.is_empty() {
            chains.push(CompleteMove {
                move_indexes: path.clone(),
                move_types: types.clone(),
                rating,
            });
        }
        return Ok(());
    }

    let side = match board.piece_at(index) {
        Some(piece) if piece != PieceType::Empty => piece,
        _ => return Ok(()),
    };
    let opponent = side.opposite();

    for candidate in moves {
        let ambiguous = board.will_move_attack_and_withdraw(index, candidate.direction);
        let resolutions: &[Option<AttackType>] = if ambiguous {
            &[Some(AttackType::Approach), Some(AttackType::Withdraw)]
        } else {
            &[None]
        };

        for &resolution in resolutions {
            let saved = board.save_state();
            if let Some(attack) = resolution {
                board.set_attack_or_withdraw(attack)?;
            }

            let opponents_before = count_pieces(board, opponent);
            let can_move_again = board.perform_move(index, candidate.direction)?;
            let captured = (opponents_before - count_pieces(board, opponent)) as i32;
            let applied = resolution.unwrap_or(candidate.attack_type);

            path.push(candidate.index);
            types.push(applied);
            let chain_rating = rating + captured;
            if can_move_again {
                explore(board, candidate.index, path, types, chain_rating, chains)?;
            } else {
                chains.push(CompleteMove {
                    move_indexes: path.clone(),
                    move_types: types.clone(),
                    rating: chain_rating,
                });
            }
            path.pop();
            types.pop();

            board.restore_state(&saved);
        }
    }
    Ok(())
}

fn count_pieces(board: &Board, side: PieceType) -> u32 {
    match side {
        PieceType::White => board.white_pieces(),
        PieceType::Black => board.black_pieces(),
        PieceType::Empty => 0,
    }
}
