use structopt::StructOpt;

use crate::cli::commands::Command;
use crate::cli::Fanorona;

mod cli;

fn main() {
    env_logger::init();
    Fanorona::from_args().execute();
}
