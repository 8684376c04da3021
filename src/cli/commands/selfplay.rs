//! Selfplay command - run a batch of bot-vs-bot games and tally results.

use fanorona::board::piece::PieceType;
use fanorona::board::Board;
use fanorona::game::{run_game, BotKind, Outcome};
use log::info;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct SelfplayArgs {
    #[structopt(short, long, default_value = "100")]
    pub games: u32,
    #[structopt(long, default_value = "greedy")]
    pub white: BotKind,
    #[structopt(long, default_value = "random")]
    pub black: BotKind,
    #[structopt(long = "turn-limit", default_value = "1000")]
    pub turn_limit: u32,
}

impl Command for SelfplayArgs {
    fn execute(self) {
        let mut white_wins = 0;
        let mut black_wins = 0;
        let mut unfinished = 0;

        for game in 0..self.games {
            let mut board = Board::new();
            let mut white = self.white.create(PieceType::White);
            let mut black = self.black.create(PieceType::Black);

            match run_game(&mut board, &mut *white, &mut *black, self.turn_limit, |_| {}) {
                Ok(Outcome::Winner(PieceType::White)) => white_wins += 1,
                Ok(Outcome::Winner(_)) => black_wins += 1,
                Ok(Outcome::TurnLimit) => unfinished += 1,
                Err(error) => {
                    eprintln!("game {} failed: {}", game, error);
                    std::process::exit(1);
                }
            }
            info!(
                "game {}: {}W / {}B / {} unfinished",
                game, white_wins, black_wins, unfinished
            );
        }

        println!("white ({:?}): {} wins", self.white, white_wins);
        println!("black ({:?}): {} wins", self.black, black_wins);
        println!("unfinished after {} turns: {}", self.turn_limit, unfinished);
    }
}
