//! Command line front end for Fjalëkryq puzzle generation.
//!
//! This crate is the I/O layer around [`fjalekryq_core`] and
//! [`fjalekryq_generator`]: it loads word lists, runs the generator for one
//! day or the whole week, writes puzzle files as JSON and checks existing
//! puzzle files against the crossword rules.

use std::process::ExitCode;

pub use self::{args::*, entry::*, error::CliError};

mod args;
mod entry;
mod error;
mod files;
mod generate;
mod validate;

/// Runs the selected subcommand.
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, an output cannot
/// be written, or a single-puzzle generation fails.
pub fn run(args: &Args) -> Result<ExitCode, CliError> {
    match &args.command {
        Command::Generate(args) => generate::generate(args),
        Command::Week(args) => generate::week(args),
        Command::Validate(args) => validate::validate(args),
    }
}
