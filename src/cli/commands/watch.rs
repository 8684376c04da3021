//! Watch command - watch two bots play a single game.

use std::thread::sleep;
use std::time::Duration;

use fanorona::board::piece::PieceType;
use fanorona::board::Board;
use fanorona::game::{run_game, BotKind, Outcome};
use structopt::StructOpt;
use termion::clear;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "greedy")]
    pub white: BotKind,
    #[structopt(long, default_value = "greedy")]
    pub black: BotKind,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between turns in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "turn-limit", default_value = "1000")]
    pub turn_limit: u32,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut board = Board::new();
        let mut white = self.white.create(PieceType::White);
        let mut black = self.black.create(PieceType::Black);

        println!("{}", clear::All);
        println!("{}", board);

        let delay = Duration::from_millis(self.delay_ms);
        let outcome = run_game(
            &mut board,
            &mut *white,
            &mut *black,
            self.turn_limit,
            |board| {
                sleep(delay);
                println!("{}", clear::All);
                println!("{}", board);
            },
        );

        match outcome {
            Ok(Outcome::Winner(winner)) => println!("{} wins!", winner),
            Ok(Outcome::TurnLimit) => println!("no winner after {} turns", self.turn_limit),
            Err(error) => {
                eprintln!("game failed: {}", error);
                std::process::exit(1);
            }
        }
    }
}
