//! Fjalëkryq command line tool.
//!
//! Generates crossword puzzles from a word list and validates emitted puzzle
//! files. Set `RUST_LOG=debug` to follow individual attempts.

use std::process::ExitCode;

use clap::Parser as _;
use fjalekryq_cli::Args;

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match fjalekryq_cli::run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
