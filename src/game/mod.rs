//! Automated players and the loop that pits them against each other.

pub mod game_loop;
pub mod greedy_bot;
pub mod random_player;

use std::str::FromStr;

use crate::board::error::BoardError;
use crate::board::piece::PieceType;
use crate::board::Board;

pub use game_loop::{run_game, Outcome};
pub use greedy_bot::GreedyBot;
pub use random_player::RandomPlayer;

/// A player drives the board through one full turn, chain continuations
/// included, and leaves it with the opponent to move.
pub trait Player {
    fn take_turn(&mut self, board: &mut Board) -> Result<(), BoardError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotKind {
    Random,
    Greedy,
}

impl BotKind {
    pub fn create(self, side: PieceType) -> Box<dyn Player> {
        match self {
            BotKind::Random => Box::new(RandomPlayer::new(side)),
            BotKind::Greedy => Box::new(GreedyBot::new(side)),
        }
    }
}

impl FromStr for BotKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(BotKind::Random),
            "greedy" => Ok(BotKind::Greedy),
            _ => Err(format!("invalid bot `{}`, expected `random` or `greedy`", s)),
        }
    }
}
