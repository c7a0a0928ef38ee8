//! Finished crossword puzzles and their flat records.

use std::{
    collections::HashSet,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

use crate::{
    Grid, GridParseError, Letter, LetterError, Orientation, PlaceError, Placement, Position, Word,
    WordError,
};

/// A grid together with the ordered placements that produced it.
///
/// `Puzzle` does not enforce the crossword rules on its own; use
/// [`validation::validate`](crate::validation::validate) to check them.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::{Orientation, Placement, Position, Puzzle, Word};
///
/// let puzzle = Puzzle::from_plan(
///     7,
///     vec![
///         Placement::new(Word::new("KAFË")?, Position::new(3, 1), Orientation::Horizontal),
///         Placement::new(Word::new("BUKË")?, Position::new(1, 1), Orientation::Vertical),
///     ],
/// )?;
/// assert_eq!(puzzle.word_count(), 2);
/// assert_eq!(puzzle.letter_count(), 7);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<Placement>,
}

/// Errors returned when rebuilding a puzzle from placements or records.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// A placement does not fit on the grid built so far.
    #[display("word #{index} does not fit: {cause}")]
    Misplaced {
        /// Zero-based index of the placement.
        index: usize,
        /// Why it does not fit.
        cause: PlaceError,
    },
    /// A record entry is not a valid word.
    #[display("word #{index} is invalid: {cause}")]
    InvalidWord {
        /// Zero-based index of the entry.
        index: usize,
        /// Why it was rejected.
        cause: WordError,
    },
    /// The record's solution grid cannot be read.
    #[display("invalid solution grid: {cause}")]
    InvalidSolution {
        /// Why it was rejected.
        cause: GridParseError,
    },
    /// The record's solution grid has the wrong size.
    #[display("solution is {found}x{found}, expected {expected}x{expected}")]
    SizeMismatch {
        /// Size of the solution grid.
        found: usize,
        /// Declared grid size.
        expected: usize,
    },
    /// The record's solution differs from what its words write.
    #[display("solution disagrees with the words at {pos}")]
    SolutionMismatch {
        /// First differing cell, row-major.
        pos: Position,
    },
}

impl Puzzle {
    /// Wraps a grid and its placements without checking that they agree.
    #[must_use]
    pub fn new(grid: Grid, placements: Vec<Placement>) -> Self {
        Self { grid, placements }
    }

    /// Builds a puzzle by writing each placement, in order, onto an empty
    /// `size` x `size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Misplaced`] for the first placement that does
    /// not fit.
    pub fn from_plan(size: usize, placements: Vec<Placement>) -> Result<Self, PuzzleError> {
        let mut grid = Grid::new(size);
        for (index, placement) in placements.iter().enumerate() {
            grid.place(placement)
                .map_err(|cause| PuzzleError::Misplaced { index, cause })?;
        }
        Ok(Self { grid, placements })
    }

    /// Returns the solution grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the placements in the order they were made.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Consumes the puzzle, returning its parts.
    #[must_use]
    pub fn into_parts(self) -> (Grid, Vec<Placement>) {
        (self.grid, self.placements)
    }

    /// Returns the number of placed words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.grid.letter_count()
    }

    /// Returns the placed words in placement order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.placements.iter().map(|p| &p.word)
    }

    /// Drops placements that no longer stand as a run of their own.
    ///
    /// A word can be absorbed by a later, longer word written over the same
    /// cells and beyond (`ERA` becoming part of `ERAS`). Only placements
    /// whose text, anchor and axis equal a current run are kept, each at most
    /// once, in their original order. The grid is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fjalekryq_core::{Orientation, Placement, Position, Puzzle, Word};
    ///
    /// let at = |w: &str| Placement::new(Word::new(w).unwrap(), Position::new(0, 0), Orientation::Horizontal);
    /// let puzzle = Puzzle::from_plan(5, vec![at("ERA"), at("ERAS")])?;
    /// let cleaned = puzzle.cleaned();
    /// assert_eq!(cleaned.words().map(|w| w.as_str()).collect::<Vec<_>>(), ["ERAS"]);
    /// # Ok::<(), fjalekryq_core::PuzzleError>(())
    /// ```
    #[must_use]
    pub fn cleaned(&self) -> Self {
        let runs = self.grid.runs();
        let mut seen = HashSet::new();
        let placements = self
            .placements
            .iter()
            .filter(|p| runs.iter().any(|run| run.is_at(p)))
            .filter(|p| seen.insert((*p).clone()))
            .cloned()
            .collect();
        Self {
            grid: self.grid.clone(),
            placements,
        }
    }

    /// Flattens the puzzle into a serializable record.
    #[must_use]
    pub fn to_record(&self) -> PuzzleRecord {
        PuzzleRecord {
            grid_size: self.grid.size(),
            solution: self.grid.cell_texts(),
            words: self.placements.iter().map(WordRecord::from).collect(),
        }
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}

/// A puzzle as flat data, in the shape the game consumes.
///
/// ```json
/// {
///   "gridSize": 3,
///   "solution": [["M", "A", "L"], [null, null, null], [null, null, null]],
///   "words": [{ "word": "MAL", "row": 0, "col": 0, "direction": "horizontal" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRecord {
    /// Number of rows and columns.
    pub grid_size: usize,
    /// Cell contents row by row, `None` for empty cells.
    pub solution: Vec<Vec<Option<String>>>,
    /// Placed words in placement order.
    pub words: Vec<WordRecord>,
}

/// One placed word inside a [`PuzzleRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The word's text.
    pub word: String,
    /// Row of the first letter.
    pub row: usize,
    /// Column of the first letter.
    pub col: usize,
    /// Writing direction.
    pub direction: Orientation,
}

impl From<&Placement> for WordRecord {
    fn from(placement: &Placement) -> Self {
        Self {
            word: placement.word.to_string(),
            row: placement.position.row,
            col: placement.position.col,
            direction: placement.orientation,
        }
    }
}

impl WordRecord {
    /// Converts the record back into a placement.
    ///
    /// # Errors
    ///
    /// Returns an error if `word` is not a valid word.
    pub fn to_placement(&self) -> Result<Placement, WordError> {
        Ok(Placement::new(
            Word::new(self.word.as_str())?,
            Position::new(self.row, self.col),
            self.direction,
        ))
    }
}

impl PuzzleRecord {
    /// Reads the solution grid as stored, without consulting the words.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidSolution`] for a malformed grid and
    /// [`PuzzleError::SizeMismatch`] if it is not `grid_size` rows high.
    pub fn solution_grid(&self) -> Result<Grid, PuzzleError> {
        let rows = self
            .solution
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .map(|cell| cell.as_deref().map(Letter::new).transpose())
                    .collect::<Result<Vec<_>, LetterError>>()
                    .map_err(|cause| PuzzleError::InvalidSolution {
                        cause: GridParseError::InvalidCell { row, cause },
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let grid = Grid::from_rows(rows).map_err(|cause| PuzzleError::InvalidSolution { cause })?;
        if grid.size() != self.grid_size {
            return Err(PuzzleError::SizeMismatch {
                found: grid.size(),
                expected: self.grid_size,
            });
        }
        Ok(grid)
    }

    /// Converts the word entries into placements.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidWord`] for the first invalid entry.
    pub fn placements(&self) -> Result<Vec<Placement>, PuzzleError> {
        self.words
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .to_placement()
                    .map_err(|cause| PuzzleError::InvalidWord { index, cause })
            })
            .collect()
    }
}

impl TryFrom<PuzzleRecord> for Puzzle {
    type Error = PuzzleError;

    /// Rebuilds the puzzle from its words and checks the stored solution
    /// against the result.
    fn try_from(record: PuzzleRecord) -> Result<Self, Self::Error> {
        let solution = record.solution_grid()?;
        let puzzle = Self::from_plan(record.grid_size, record.placements()?)?;
        if let Some(pos) = first_difference(&solution, puzzle.grid()) {
            return Err(PuzzleError::SolutionMismatch { pos });
        }
        Ok(puzzle)
    }
}

fn first_difference(a: &Grid, b: &Grid) -> Option<Position> {
    (0..a.size())
        .flat_map(|row| (0..a.size()).map(move |col| Position::new(row, col)))
        .find(|&pos| a.get(pos) != b.get(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;

    fn placement(word: &str, row: usize, col: usize, orientation: Orientation) -> Placement {
        Placement::new(
            Word::new(word).unwrap(),
            Position::new(row, col),
            orientation,
        )
    }

    fn kafe_puzzle() -> Puzzle {
        Puzzle::from_plan(
            7,
            vec![
                placement("KAFË", 3, 1, Orientation::Horizontal),
                placement("DUA", 1, 2, Orientation::Vertical),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_from_plan_stops_at_first_conflict() {
        let err = Puzzle::from_plan(
            5,
            vec![
                placement("MAL", 0, 0, Orientation::Horizontal),
                placement("ZOT", 0, 1, Orientation::Vertical),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::Misplaced {
                index: 1,
                cause: PlaceError::LetterConflict { .. }
            }
        ));
    }

    #[test]
    fn test_cleaned_replaces_subsumed_word() {
        // `ERAS` is written over `ERA` and one cell further
        let puzzle = Puzzle::from_plan(
            6,
            vec![
                placement("ERA", 2, 1, Orientation::Horizontal),
                placement("BERA", 1, 1, Orientation::Vertical),
                placement("ERAS", 2, 1, Orientation::Horizontal),
            ],
        )
        .unwrap();
        let cleaned = puzzle.cleaned();
        let kept: Vec<_> = cleaned.placements().to_vec();
        assert_eq!(
            kept,
            [
                placement("BERA", 1, 1, Orientation::Vertical),
                placement("ERAS", 2, 1, Orientation::Horizontal),
            ]
        );
        assert_eq!(cleaned.grid(), puzzle.grid());
        let runs: Vec<_> = run::scan(cleaned.grid())
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(runs, ["ERAS", "BERA"]);
    }

    #[test]
    fn test_cleaned_drops_duplicates() {
        let mal = placement("MAL", 0, 0, Orientation::Horizontal);
        let puzzle = Puzzle::from_plan(3, vec![mal.clone(), mal.clone()]).unwrap();
        assert_eq!(puzzle.cleaned().placements(), [mal]);
    }

    #[test]
    fn test_record_shape() {
        let record = kafe_puzzle().to_record();
        assert_eq!(record.grid_size, 7);
        assert_eq!(record.solution.len(), 7);
        assert_eq!(record.solution[3][4].as_deref(), Some("Ë"));
        assert_eq!(record.solution[0][0], None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["gridSize"], 7);
        assert_eq!(
            json["words"][1],
            serde_json::json!({ "word": "DUA", "row": 1, "col": 2, "direction": "vertical" })
        );
    }

    #[test]
    fn test_record_rebuilds_puzzle() {
        let puzzle = kafe_puzzle();
        let rebuilt = Puzzle::try_from(puzzle.to_record()).unwrap();
        assert_eq!(rebuilt, puzzle);
    }

    #[test]
    fn test_record_with_tampered_solution_is_rejected() {
        let mut record = kafe_puzzle().to_record();
        record.solution[0][6] = Some("X".to_owned());
        assert_eq!(
            Puzzle::try_from(record.clone()),
            Err(PuzzleError::SolutionMismatch {
                pos: Position::new(0, 6)
            })
        );

        record.solution.pop();
        assert!(matches!(
            Puzzle::try_from(record),
            Err(PuzzleError::InvalidSolution {
                cause: GridParseError::NotSquare { .. }
            })
        ));
    }
}
