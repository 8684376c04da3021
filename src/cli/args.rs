//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, selfplay::SelfplayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "fanorona", about = "A Fanorona rules engine and bot arena")]
pub enum Fanorona {
    #[structopt(
        name = "selfplay",
        about = "Run a batch of bot-vs-bot games and report the win tally. Pick the bots with `--white` and `--black` (`greedy` or `random`), the number of games with `--games`, and the per-game turn cap with `--turn-limit`."
    )]
    Selfplay(SelfplayArgs),
    #[structopt(
        name = "watch",
        about = "Watch two bots play a single game, rendering the board after every turn. The delay between turns is set with `--delay` (milliseconds)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the highest-rated move chain for one side of a given position. The position is a digit string (`0` empty, `1` white, `2` black) read row by row, sized with `--rows` and `--columns`."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Fanorona {
    fn execute(self) {
        match self {
            Self::Selfplay(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::BestMove(cmd) => cmd.execute(),
        }
    }
}
