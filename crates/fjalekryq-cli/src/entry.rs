use fjalekryq_core::PuzzleRecord;
use fjalekryq_generator::{GeneratedPuzzle, scramble};
use serde::{Deserialize, Serialize};

/// One puzzle as written to a puzzle file.
///
/// The flattened [`PuzzleRecord`] holds the solution and the placed words;
/// the entry adds the schedule slot, the seed that reproduces it and the
/// scrambled starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleEntry {
    /// Zero-based day of the week, `0` for a single puzzle.
    pub day_index: usize,
    /// Day name, if generated from the weekly schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Hex seed of the generation run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Solution and words.
    #[serde(flatten)]
    pub record: PuzzleRecord,
    /// The solution's letters shuffled over the same cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrambled: Option<Vec<Vec<Option<String>>>>,
}

impl PuzzleEntry {
    /// Builds the entry for a generated puzzle.
    #[must_use]
    pub fn new(day_index: usize, name: Option<&str>, generated: &GeneratedPuzzle) -> Self {
        let board = scramble(
            generated.puzzle.grid(),
            generated.seed.derive("scramble", 0),
        );
        Self {
            day_index,
            name: name.map(str::to_owned),
            seed: Some(generated.seed.to_string()),
            record: generated.puzzle.to_record(),
            scrambled: Some(board.cell_texts()),
        }
    }

    /// A short label for messages.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("day {}", self.day_index),
        }
    }
}

/// Contents of a puzzle file: a single entry or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PuzzleFile {
    /// A week's worth of puzzles.
    Many(Vec<PuzzleEntry>),
    /// A single puzzle.
    One(PuzzleEntry),
}

impl PuzzleFile {
    /// The entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[PuzzleEntry] {
        match self {
            Self::Many(entries) => entries,
            Self::One(entry) => std::slice::from_ref(entry),
        }
    }
}
