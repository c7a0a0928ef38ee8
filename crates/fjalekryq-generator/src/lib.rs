//! Crossword puzzle generation.
//!
//! This crate builds Fjalëkryq puzzles from a word pool with a randomized
//! placement search, using the grid model and validity rules of
//! [`fjalekryq_core`].
//!
//! # Overview
//!
//! - [`PuzzleGenerator`] runs many independent attempts and keeps the highest
//!   scoring puzzle that meets the configured [`Thresholds`], retrying with
//!   relaxed thresholds before giving up with
//!   [`GenerateError::InsufficientWords`].
//! - [`search`] holds a single attempt and the legal placement enumeration.
//! - [`PuzzleSeed`] makes every run reproducible; each attempt derives its own
//!   seed from it.
//! - [`scramble()`] shuffles a solution into the player's starting board.
//! - [`weekly_schedule`] lists the sizes and thresholds of the week's puzzles.
//!
//! # Examples
//!
//! ```
//! use fjalekryq_core::{Word, run};
//! use fjalekryq_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed, SeedPolicy, Thresholds};
//!
//! let pool: Vec<Word> = ["KAFË", "BUKË", "UJË", "DUA"]
//!     .into_iter()
//!     .map(Word::new)
//!     .collect::<Result<_, _>>()?;
//! let config = GeneratorConfig::new(7, Thresholds::new(3, 9))
//!     .with_seed_policy(SeedPolicy::FirstInPool);
//! let generated = PuzzleGenerator::new(config).generate_with_seed(&pool, PuzzleSeed::from(0))?;
//!
//! // every run on the grid is one of the placed words
//! let runs = run::scan(generated.puzzle.grid());
//! assert!(runs.iter().all(|r| generated.puzzle.words().any(|w| w.as_str() == r.text)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{config::*, generator::*, schedule::*, scramble::*, seed::*};

mod config;
mod generator;
mod schedule;
mod scramble;
pub mod search;
mod seed;
