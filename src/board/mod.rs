//! Fanorona board state, move legality and capture resolution.

pub mod cell;
pub mod connectivity;
pub mod direction;
pub mod error;
pub mod piece;

mod display;
mod state;


use smallvec::SmallVec;

use cell::Cell;
use direction::Direction;
use error::BoardError;
use piece::PieceType;
use state::TurnState;

pub use state::BoardState;

/// Standard 5x9 opening: black fills the top two rows, white the bottom two,
/// and the middle row alternates around the empty center point.
pub const STARTING_POSITIONS: &str = "222222222222222222212102121111111111111111111";
pub const STANDARD_ROWS: usize = 5;
pub const STANDARD_COLUMNS: usize = 9;

/// How a move captures, if at all. An approach closes on the opposing line
/// in the direction of travel; a withdraw opens away from the line behind
/// the piece's starting point.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttackType {
    None,
    Approach,
    Withdraw,
}

/// A candidate single step: the empty cell the piece would land on, the
/// direction of travel, and the capture the step would trigger. When a step
/// is simultaneously a valid approach and a valid withdraw, `attack_type`
/// reports the `Approach` default; callers discover the ambiguity with
/// [`Board::will_move_attack_and_withdraw`] and resolve it with
/// [`Board::set_attack_or_withdraw`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub index: usize,
    pub direction: Direction,
    pub attack_type: AttackType,
}

type MoveList = SmallVec<[Move; 8]>;

/// Represents the state of a Fanorona board: the cell graph, incremental
/// piece counts for both sides, and the in-progress turn state.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    white_pieces: u32,
    black_pieces: u32,
    turn_state: TurnState,
    starting_positions: Vec<PieceType>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard 5x9 game in its opening position, white to move.
    pub fn new() -> Self {
        match Self::from_positions(STANDARD_ROWS, STANDARD_COLUMNS, STARTING_POSITIONS) {
            Ok(board) => board,
            Err(_) => unreachable!("the standard opening position is well formed"),
        }
    }

    /// Builds a board of arbitrary dimensions from a row-major digit string
    /// (`'0'` empty, `'1'` white, `'2'` black). White moves first.
    pub fn from_positions(
        rows: usize,
        columns: usize,
        positions: &str,
    ) -> Result<Self, BoardError> {
        let expected = rows * columns;
        let actual = positions.chars().count();
        if actual != expected {
            return Err(BoardError::PositionLengthMismatch { expected, actual });
        }

        let mut cells = Vec::with_capacity(expected);
        let mut starting_positions = Vec::with_capacity(expected);
        let mut white_pieces = 0;
        let mut black_pieces = 0;
        for (index, digit) in positions.chars().enumerate() {
            let piece =
                PieceType::from_digit(digit).ok_or(BoardError::InvalidPositionChar(digit))?;
            match piece {
                PieceType::White => white_pieces += 1,
                PieceType::Black => black_pieces += 1,
                PieceType::Empty => (),
            }
            cells.push(Cell::new(index, piece, rows, columns));
            starting_positions.push(piece);
        }

        Ok(Self {
            rows,
            columns,
            cells,
            white_pieces,
            black_pieces,
            turn_state: TurnState::new(PieceType::White),
            starting_positions,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn piece_at(&self, index: usize) -> Option<PieceType> {
        self.cells.get(index).map(Cell::piece)
    }

    pub fn turn(&self) -> PieceType {
        self.turn_state.turn
    }

    pub fn white_pieces(&self) -> u32 {
        self.white_pieces
    }

    pub fn black_pieces(&self) -> u32 {
        self.black_pieces
    }

    /// The winning side, once the other side has no pieces left. O(1): the
    /// counts are maintained incrementally as captures remove pieces.
    pub fn winner(&self) -> Option<PieceType> {
        match (self.white_pieces, self.black_pieces) {
            (0, black) if black > 0 => Some(PieceType::Black),
            (white, 0) if white > 0 => Some(PieceType::White),
            _ => None,
        }
    }

    /// The current position as a row-major digit string. This is the only
    /// serialization the engine defines, for display and testing.
    pub fn positions_string(&self) -> String {
        self.cells.iter().map(|cell| cell.piece().to_digit()).collect()
    }

    /// Restores the starting position and clears all turn and chain state.
    pub fn reset(&mut self) {
        self.white_pieces = 0;
        self.black_pieces = 0;
        for (cell, &piece) in self.cells.iter_mut().zip(self.starting_positions.iter()) {
            cell.set_piece(piece);
            match piece {
                PieceType::White => self.white_pieces += 1,
                PieceType::Black => self.black_pieces += 1,
                PieceType::Empty => (),
            }
        }
        self.turn_state = TurnState::new(PieceType::White);
    }

    /// Captures the board's full mutable state as an owned value. Restoring
    /// it with [`Board::restore_state`] reproduces this exact position.
    pub fn save_state(&self) -> BoardState {
        BoardState {
            positions: self.cells.iter().map(Cell::piece).collect(),
            white_pieces: self.white_pieces,
            black_pieces: self.black_pieces,
            turn: self.turn_state.clone(),
        }
    }

    /// Restores a snapshot previously taken from this board.
    pub fn restore_state(&mut self, state: &BoardState) {
        debug_assert_eq!(state.positions.len(), self.cells.len());
        for (cell, &piece) in self.cells.iter_mut().zip(state.positions.iter()) {
            cell.set_piece(piece);
        }
        self.white_pieces = state.white_pieces;
        self.black_pieces = state.black_pieces;
        self.turn_state = state.turn.clone();
    }

    /// The pieces the given side may move this turn. A mid-chain piece is the
    /// only legal choice until its turn ends. Otherwise capturing is
    /// mandatory: when any piece can capture, exactly the capturing pieces
    /// are returned; only when none can does every piece with an empty
    /// neighbor qualify for a paika move.
    pub fn pieces_that_can_move(&self, side: PieceType) -> Vec<usize> {
        if side == PieceType::Empty {
            return Vec::new();
        }
        if let Some(index) = self.turn_state.mid_chain {
            return vec![index];
        }

        let attackers: Vec<usize> = self
            .cells
            .iter()
            .filter(|cell| cell.is_piece(side) && self.can_piece_attack(cell.index()))
            .map(|cell| cell.index())
            .collect();
        if attackers.is_empty() {
            self.cells
                .iter()
                .filter(|cell| cell.is_piece(side) && self.has_empty_neighbour(cell.index()))
                .map(|cell| cell.index())
                .collect()
        } else {
            attackers
        }
    }

    /// The legal single steps for the piece at `index`, in ascending
    /// direction order. Mid-chain only capturing continuations are legal;
    /// on the first move of a turn, capturing moves shadow paika moves
    /// whenever any exist.
    pub fn possible_moves_for_cell(&self, index: usize) -> Vec<Move> {
        let side = match self.piece_at(index) {
            Some(piece) if piece != PieceType::Empty => piece,
            _ => return Vec::new(),
        };

        let moves: Vec<Move> = self
            .empty_neighbour_moves(index)
            .into_iter()
            .filter(|candidate| !self.turn_state.visited.contains(&candidate.index))
            .map(|mut candidate| {
                candidate.attack_type = self.attack_type_for(index, side, candidate.direction);
                candidate
            })
            .collect();

        if self.turn_state.mid_chain == Some(index) {
            // Captures are mandatory once chaining, and the chain may not
            // continue along the previous direction or double straight back.
            let last = self.turn_state.last_direction;
            moves
                .into_iter()
                .filter(|candidate| {
                    candidate.attack_type != AttackType::None
                        && last.map_or(true, |direction| {
                            candidate.direction != direction
                                && candidate.direction != direction.opposite()
                        })
                })
                .collect()
        } else {
            let attacking: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|candidate| candidate.attack_type != AttackType::None)
                .collect();
            if attacking.is_empty() {
                moves
            } else {
                attacking
            }
        }
    }

    /// Whether moving the piece at `index` along `direction` closes on an
    /// opposing piece: the cell two steps out must be reachable through the
    /// connection graph (not just by index arithmetic) and hold the enemy.
    pub fn will_approach(&self, index: usize, side: PieceType, direction: Direction) -> bool {
        let opponent = side.opposite();
        if opponent == PieceType::Empty {
            return false;
        }
        let landing = match self.neighbour_in_direction(index, direction) {
            Some(landing) => landing,
            None => return false,
        };
        match self.neighbour_in_direction(landing, direction) {
            Some(target) => self.cells[target].is_piece(opponent),
            None => false,
        }
    }

    /// Whether moving the piece at `index` along `direction` withdraws from
    /// an opposing piece standing directly behind it.
    pub fn will_withdraw(&self, index: usize, side: PieceType, direction: Direction) -> bool {
        let opponent = side.opposite();
        if opponent == PieceType::Empty {
            return false;
        }
        match self.neighbour_in_direction(index, direction.opposite()) {
            Some(target) => self.cells[target].is_piece(opponent),
            None => false,
        }
    }

    /// The ambiguous case: the step is simultaneously a valid approach and a
    /// valid withdraw, so the caller must choose one with
    /// [`Board::set_attack_or_withdraw`] before performing the move.
    pub fn will_move_attack_and_withdraw(&self, index: usize, direction: Direction) -> bool {
        match self.piece_at(index) {
            Some(side) if side != PieceType::Empty => {
                self.will_approach(index, side, direction)
                    && self.will_withdraw(index, side, direction)
            }
            _ => false,
        }
    }

    /// Declares which capture the next (ambiguous) move applies. Rejects
    /// `AttackType::None`; the choice is consumed by the next `perform_move`.
    pub fn set_attack_or_withdraw(&mut self, attack: AttackType) -> Result<(), BoardError> {
        if attack == AttackType::None {
            return Err(BoardError::InvalidDisambiguation);
        }
        self.turn_state.pending_attack = Some(attack);
        Ok(())
    }

    /// Performs a single step of a turn: validates it, resolves the capture
    /// it triggers, and either keeps the turn open on the same piece
    /// (returning `true`) or ends the turn and flips whose move it is
    /// (returning `false`). A rejected move leaves the board unmodified.
    pub fn perform_move(&mut self, index: usize, direction: Direction) -> Result<bool, BoardError> {
        let mover = self
            .piece_at(index)
            .ok_or(BoardError::CellOutOfBounds { index })?;
        if mover == PieceType::Empty {
            return Err(BoardError::EmptyCellMove { index });
        }
        let destination = self
            .neighbour_in_direction(index, direction)
            .ok_or(BoardError::InvalidDirection { index, direction })?;
        if !self.cells[destination].is_piece(PieceType::Empty) {
            return Err(BoardError::DestinationOccupied { index: destination });
        }

        let approaches = self.will_approach(index, mover, direction);
        let withdraws = self.will_withdraw(index, mover, direction);
        let ambiguous = approaches && withdraws;
        if self.turn_state.pending_attack.is_some() && !ambiguous {
            return Err(BoardError::InvalidDisambiguation);
        }

        // Everything is validated; from here the move always completes.
        let attack = if ambiguous {
            // Automated players that never disambiguate get the approach.
            self.turn_state
                .pending_attack
                .take()
                .unwrap_or(AttackType::Approach)
        } else if approaches {
            AttackType::Approach
        } else if withdraws {
            AttackType::Withdraw
        } else {
            AttackType::None
        };

        self.turn_state.visited.insert(index);
        self.cells[destination].set_piece(mover);
        self.cells[index].remove_piece();

        if attack != AttackType::None {
            self.remove_attacked_pieces(index, destination, mover, direction, attack);
            if self.can_player_move_again(destination, mover, direction) {
                self.turn_state.mid_chain = Some(destination);
                self.turn_state.last_direction = Some(direction);
                return Ok(true);
            }
        }

        self.end_turn();
        Ok(false)
    }

    /// Walks outward removing consecutive opposing pieces. The walk follows
    /// the connection graph one step at a time, so it stops at board edges
    /// and at weak intersections that do not carry the capture line onward.
    /// A withdraw anchors at the piece's pre-move position and walks the
    /// reversed direction.
    fn remove_attacked_pieces(
        &mut self,
        origin: usize,
        landing: usize,
        mover: PieceType,
        direction: Direction,
        attack: AttackType,
    ) {
        let (mut cursor, walk_direction) = match attack {
            AttackType::Approach => (landing, direction),
            AttackType::Withdraw => (origin, direction.opposite()),
            AttackType::None => return,
        };
        let opponent = mover.opposite();
        while let Some(next) = self.neighbour_in_direction(cursor, walk_direction) {
            if !self.cells[next].is_piece(opponent) {
                break;
            }
            self.cells[next].remove_piece();
            match opponent {
                PieceType::White => self.white_pieces -= 1,
                PieceType::Black => self.black_pieces -= 1,
                PieceType::Empty => (),
            }
            cursor = next;
        }
    }

    /// The chain continues only if an unvisited empty neighbor exists in a
    /// direction that is neither the one just played nor its opposite, and
    /// whose move would itself capture.
    fn can_player_move_again(
        &self,
        index: usize,
        side: PieceType,
        last_direction: Direction,
    ) -> bool {
        self.empty_neighbour_moves(index).iter().any(|candidate| {
            !self.turn_state.visited.contains(&candidate.index)
                && candidate.direction != last_direction
                && candidate.direction != last_direction.opposite()
                && (self.will_approach(index, side, candidate.direction)
                    || self.will_withdraw(index, side, candidate.direction))
        })
    }

    fn end_turn(&mut self) {
        let next = self.turn_state.turn.opposite();
        self.turn_state = TurnState::new(next);
    }

    fn attack_type_for(&self, index: usize, side: PieceType, direction: Direction) -> AttackType {
        if self.will_approach(index, side, direction) {
            AttackType::Approach
        } else if self.will_withdraw(index, side, direction) {
            AttackType::Withdraw
        } else {
            AttackType::None
        }
    }

    fn neighbour_in_direction(&self, index: usize, direction: Direction) -> Option<usize> {
        self.cells.get(index).and_then(|cell| {
            cell.connections()
                .iter()
                .find(|connection| connection.direction == direction)
                .map(|connection| connection.index)
        })
    }

    fn empty_neighbour_moves(&self, index: usize) -> MoveList {
        self.cells[index]
            .connections()
            .iter()
            .filter(|connection| self.cells[connection.index].is_piece(PieceType::Empty))
            .map(|connection| Move {
                index: connection.index,
                direction: connection.direction,
                attack_type: AttackType::None,
            })
            .collect()
    }

    fn can_piece_attack(&self, index: usize) -> bool {
        let side = self.cells[index].piece();
        if side == PieceType::Empty {
            return false;
        }
        self.empty_neighbour_moves(index).iter().any(|candidate| {
            self.will_approach(index, side, candidate.direction)
                || self.will_withdraw(index, side, candidate.direction)
        })
    }

    fn has_empty_neighbour(&self, index: usize) -> bool {
        self.cells[index]
            .connections()
            .iter()
            .any(|connection| self.cells[connection.index].is_piece(PieceType::Empty))
    }
}
