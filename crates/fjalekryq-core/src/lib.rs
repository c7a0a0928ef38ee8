//! Core data structures and validity rules for Fjalëkryq crossword puzzles.
//!
//! This crate provides the grid model, the run scanner and the validity
//! oracle shared by puzzle generation and puzzle checking. Everything here is
//! pure and synchronous: no I/O, no randomness, no global state.
//!
//! # Overview
//!
//! 1. **Text** - letters and words
//!    - [`letter`]: one grapheme per grid cell, so `Ë` written either way
//!      takes a single cell
//!    - [`word`]: immutable words of two or more letters
//!    - [`dictionary`]: approved word lists parsed from plain text
//!
//! 2. **Layout** - where letters go
//!    - [`position`]: cell coordinates and [`Orientation`]
//!    - [`placement`]: a word anchored at a cell along one axis
//!    - [`grid`]: the square letter grid with conflict-checked placement
//!    - [`run`]: maximal horizontal and vertical letter sequences
//!
//! 3. **Rules and results**
//!    - [`validation`]: ghost-word and connectivity checks, plus full
//!      layout reports
//!    - [`puzzle`]: a finished grid with its placements, subsumption
//!      cleanup, and the flat record the game consumes
//!
//! # Examples
//!
//! ```
//! use fjalekryq_core::{Orientation, Placement, Position, Puzzle, Word, run, validation};
//!
//! let puzzle = Puzzle::from_plan(
//!     7,
//!     vec![
//!         Placement::new(Word::new("KAFË")?, Position::new(3, 1), Orientation::Horizontal),
//!         Placement::new(Word::new("BUKË")?, Position::new(0, 6), Orientation::Vertical),
//!     ],
//! )?;
//! // the two words share no cell
//! assert!(!validation::validate(&puzzle, None).is_valid());
//!
//! let puzzle = Puzzle::from_plan(
//!     7,
//!     vec![
//!         Placement::new(Word::new("KAFË")?, Position::new(3, 1), Orientation::Horizontal),
//!         Placement::new(Word::new("BUKË")?, Position::new(1, 1), Orientation::Vertical),
//!     ],
//! )?;
//! assert!(validation::validate(&puzzle, None).is_valid());
//! assert_eq!(run::scan(puzzle.grid()).len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod dictionary;
pub mod grid;
pub mod letter;
pub mod placement;
pub mod position;
pub mod puzzle;
pub mod run;
pub mod validation;
pub mod word;

// Re-export commonly used types
pub use self::{
    dictionary::{Dictionary, DictionaryError},
    grid::{Fit, Grid, GridParseError, PlaceError},
    letter::{Letter, LetterError},
    placement::Placement,
    position::{Orientation, Position},
    puzzle::{Puzzle, PuzzleError, PuzzleRecord, WordRecord},
    run::Run,
    validation::{ValidationIssue, ValidationReport, WordSet},
    word::{Word, WordError},
};
