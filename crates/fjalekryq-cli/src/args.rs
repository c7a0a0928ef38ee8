use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fjalekryq_generator::{PuzzleSeed, SeedPolicy};

/// Generate and validate Fjalëkryq crossword puzzles.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a single puzzle.
    Generate(GenerateArgs),
    /// Generate one puzzle for every day of the week, in parallel.
    Week(WeekArgs),
    /// Check puzzle files against the crossword rules.
    Validate(ValidateArgs),
}

/// How the first word of each attempt is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SeedWord {
    /// The first shuffled word with at least four letters.
    #[default]
    Long,
    /// Any word, at random.
    Random,
    /// The first word of the word list.
    First,
}

impl From<SeedWord> for SeedPolicy {
    fn from(value: SeedWord) -> Self {
        match value {
            SeedWord::Long => SeedPolicy::default(),
            SeedWord::Random => SeedPolicy::Random,
            SeedWord::First => SeedPolicy::FirstInPool,
        }
    }
}

/// Options for `generate`.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Word list, one word per line.
    #[arg(short, long, value_name = "FILE")]
    pub words: PathBuf,

    /// Take grid size, thresholds and budget from this day (0 = Monday).
    #[arg(
        long,
        value_name = "DAY",
        value_parser = clap::value_parser!(u8).range(0..7),
        conflicts_with_all = ["size", "min_words", "min_letters"],
    )]
    pub day: Option<u8>,

    /// Grid size.
    #[arg(long, value_name = "N", default_value_t = 7)]
    pub size: usize,

    /// Minimum number of words.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    pub min_words: usize,

    /// Minimum number of letters.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    pub min_letters: usize,

    /// Search tuning.
    #[command(flatten)]
    pub search: SearchArgs,

    /// Hex seed to reproduce a previous run.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<PuzzleSeed>,

    /// Write the puzzle JSON here instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Search tuning shared by `generate` and `week`.
#[derive(Debug, Clone, clap::Args)]
pub struct SearchArgs {
    /// Attempt budget, overriding the day's or the default.
    #[arg(long, value_name = "COUNT")]
    pub attempts: Option<usize>,

    /// Growth passes per attempt.
    #[arg(long, value_name = "COUNT")]
    pub passes: Option<usize>,

    /// Seed word selection.
    #[arg(long, value_name = "POLICY", default_value = "long")]
    pub seed_word: SeedWord,

    /// Fail instead of retrying with relaxed thresholds.
    #[arg(long)]
    pub no_relax: bool,
}

/// Options for `week`.
#[derive(Debug, clap::Args)]
pub struct WeekArgs {
    /// Word list, one word per line.
    #[arg(short, long, value_name = "FILE")]
    pub words: PathBuf,

    /// Search tuning.
    #[command(flatten)]
    pub search: SearchArgs,

    /// Hex seed to reproduce a previous run. Each day derives its own seed.
    #[arg(long, value_name = "HEX")]
    pub seed: Option<PuzzleSeed>,

    /// Write the puzzles JSON here instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Options for `validate`.
#[derive(Debug, clap::Args)]
pub struct ValidateArgs {
    /// Puzzle file written by `generate` or `week`.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Also require every word to be in this word list.
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_day_conflicts_with_size() {
        let result = Args::try_parse_from([
            "fjalekryq", "generate", "-w", "words.txt", "--day", "2", "--size", "9",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "fjalekryq",
            "generate",
            "--words",
            "words.txt",
            "--day",
            "6",
            "--seed",
            "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
            "--seed-word",
            "random",
        ])
        .unwrap();
        let Command::Generate(generate) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(generate.day, Some(6));
        assert!(generate.seed.is_some());
        assert_eq!(generate.search.seed_word, SeedWord::Random);
        assert!(!generate.search.no_relax);
    }
}
