//! Best move command - print the highest-rated chain for a position.

use fanorona::board::piece::PieceType;
use fanorona::board::{AttackType, Board};
use fanorona::searcher::best_move_for;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long, help = "Row-by-row digit string: 0 empty, 1 white, 2 black")]
    pub positions: String,
    #[structopt(long, default_value = "5")]
    pub rows: usize,
    #[structopt(long, default_value = "9")]
    pub columns: usize,
    #[structopt(short, long, default_value = "white")]
    pub side: PieceType,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = match Board::from_positions(self.rows, self.columns, &self.positions) {
            Ok(board) => board,
            Err(error) => {
                eprintln!("invalid position: {}", error);
                std::process::exit(1);
            }
        };

        match best_move_for(&mut board, self.side) {
            Ok(Some(best)) => {
                let steps: Vec<String> = best
                    .chain
                    .move_indexes
                    .iter()
                    .zip(&best.chain.move_types)
                    .map(|(index, attack)| match attack {
                        AttackType::None => format!("{}", index),
                        AttackType::Approach => format!("{}a", index),
                        AttackType::Withdraw => format!("{}w", index),
                    })
                    .collect();
                println!(
                    "{} -> {} (rating {})",
                    best.start_index,
                    steps.join(" -> "),
                    best.chain.rating
                );
            }
            Ok(None) => println!("no legal moves for {}", self.side),
            Err(error) => {
                eprintln!("search failed: {}", error);
                std::process::exit(1);
            }
        }
    }
}
