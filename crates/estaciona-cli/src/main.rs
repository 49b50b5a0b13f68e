//! Estaciona - request parking time for a registered vehicle
//!
//! Composes a pre-filled email to the parking address and manages the
//! local list of vehicles.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
