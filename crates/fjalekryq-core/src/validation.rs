//! Validity checks for crossword grids.
//!
//! A grid is an acceptable crossword when
//!
//! - every run of two or more letters is one of the intended words
//!   ([`first_ghost`], [`has_no_ghosts`]), and
//! - the placed words form a single component, two words being adjacent
//!   when they share a cell ([`is_connected`]).
//!
//! [`validate_layout`] additionally checks that the grid is exactly what the
//! placements write, that every letter belongs to a word, and optionally that
//! every word is in an approved [`Dictionary`].

use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    fmt::{self, Display},
    hash::BuildHasher,
};

use crate::{
    Dictionary, Grid, Letter, PlaceError, Placement, Position, Puzzle, Run, Word, grid::EMPTY_CELL,
    run,
};

/// A set of word texts that runs are checked against.
///
/// Membership is exact string equality: a run that is a prefix, suffix or
/// extension of a word is not a member.
pub trait WordSet {
    /// Returns `true` if `text` is a member.
    fn contains_word(&self, text: &str) -> bool;
}

impl<S: BuildHasher> WordSet for HashSet<String, S> {
    fn contains_word(&self, text: &str) -> bool {
        self.contains(text)
    }
}

impl<S: BuildHasher> WordSet for HashSet<&str, S> {
    fn contains_word(&self, text: &str) -> bool {
        self.contains(text)
    }
}

impl<S: BuildHasher> WordSet for HashSet<Word, S> {
    fn contains_word(&self, text: &str) -> bool {
        self.contains(text)
    }
}

impl WordSet for BTreeSet<String> {
    fn contains_word(&self, text: &str) -> bool {
        self.contains(text)
    }
}

impl WordSet for [&str] {
    fn contains_word(&self, text: &str) -> bool {
        self.contains(&text)
    }
}

impl<T: WordSet + ?Sized> WordSet for &T {
    fn contains_word(&self, text: &str) -> bool {
        (**self).contains_word(text)
    }
}

/// Returns the first run whose text is not in `words`.
///
/// Runs are visited in [`run::scan`] order, so the reported ghost is stable
/// across calls.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use fjalekryq_core::{Grid, validation};
///
/// let grid: Grid = "
///     MAL.
///     ...D
///     ...E
///     ...T
/// "
/// .parse()?;
/// let words: HashSet<&str> = ["MAL", "DET"].into_iter().collect();
/// assert!(validation::first_ghost(&grid, &words).is_none());
///
/// let words: HashSet<&str> = ["MAL"].into_iter().collect();
/// assert_eq!(validation::first_ghost(&grid, &words).unwrap().text, "DET");
/// # Ok::<(), fjalekryq_core::GridParseError>(())
/// ```
#[must_use]
pub fn first_ghost<W: WordSet + ?Sized>(grid: &Grid, words: &W) -> Option<Run> {
    run::scan(grid)
        .into_iter()
        .find(|run| !words.contains_word(&run.text))
}

/// Returns every run whose text is not in `words`, in scan order.
#[must_use]
pub fn ghosts<W: WordSet + ?Sized>(grid: &Grid, words: &W) -> Vec<Run> {
    run::scan(grid)
        .into_iter()
        .filter(|run| !words.contains_word(&run.text))
        .collect()
}

/// Returns `true` if every run on the grid is a member of `words`.
#[must_use]
pub fn has_no_ghosts<W: WordSet + ?Sized>(grid: &Grid, words: &W) -> bool {
    first_ghost(grid, words).is_none()
}

/// Returns the indices of placements not reachable from the first one.
///
/// Two placements are adjacent when they share at least one cell; touching
/// side by side or corner to corner does not count.
#[must_use]
pub fn unreached(placements: &[Placement]) -> Vec<usize> {
    let n = placements.len();
    if n <= 1 {
        return vec![];
    }
    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;
    while let Some(i) = queue.pop_front() {
        for j in 0..n {
            if !visited[j] && placements[i].intersects(&placements[j]) {
                visited[j] = true;
                queue.push_back(j);
            }
        }
    }
    (0..n).filter(|&i| !visited[i]).collect()
}

/// Returns `true` if the placements form a single connected component.
///
/// Zero or one placement is trivially connected.
#[must_use]
pub fn is_connected(placements: &[Placement]) -> bool {
    unreached(placements).is_empty()
}

/// Returns occupied cells that no placement covers, in row-major order.
#[must_use]
pub fn uncovered_cells(grid: &Grid, placements: &[Placement]) -> Vec<Position> {
    grid.occupied()
        .map(|(pos, _)| pos)
        .filter(|&pos| !placements.iter().any(|p| p.covers(pos)))
        .collect()
}

/// Rebuilds the grid from `placements` and reports every disagreement with
/// `grid`: placements that do not fit, and cells whose content differs.
#[must_use]
pub fn integrity_issues(grid: &Grid, placements: &[Placement]) -> Vec<ValidationIssue> {
    let mut issues = vec![];
    let mut expected = Grid::new(grid.size());
    for placement in placements {
        if let Err(error) = expected.place(placement) {
            issues.push(ValidationIssue::Misplaced {
                placement: placement.to_string(),
                error,
            });
        }
    }
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let pos = Position::new(row, col);
            let (found, wanted) = (grid.get(pos), expected.get(pos));
            if found != wanted {
                issues.push(ValidationIssue::CellMismatch {
                    pos,
                    found: cell_text(found),
                    expected: cell_text(wanted),
                });
            }
        }
    }
    issues
}

fn cell_text(cell: Option<&Letter>) -> String {
    cell.map_or_else(|| EMPTY_CELL.to_string(), ToString::to_string)
}

/// Returns the placed words missing from `dictionary`.
#[must_use]
pub fn unknown_words<'a>(placements: &'a [Placement], dictionary: &Dictionary) -> Vec<&'a Word> {
    placements
        .iter()
        .map(|p| &p.word)
        .filter(|word| !dictionary.contains(word.as_str()))
        .collect()
}

/// A single rule violation found by [`validate_layout`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ValidationIssue {
    /// A run that is not one of the puzzle's words.
    #[display("ghost word {run}")]
    Ghost {
        /// The offending run.
        run: Run,
    },
    /// Some words are not connected to the first word.
    #[display("not connected: {reached:?} vs {unreached:?}")]
    Disconnected {
        /// Words reachable from the first word.
        reached: Vec<String>,
        /// Words that are not.
        unreached: Vec<String>,
    },
    /// A word is missing from the approved dictionary.
    #[display("{word:?} is not in the dictionary")]
    UnknownWord {
        /// The unknown word.
        word: String,
    },
    /// A placement does not fit on an otherwise empty grid.
    #[display("{placement} does not fit: {error}")]
    Misplaced {
        /// The placement, rendered for diagnostics.
        placement: String,
        /// Why it does not fit.
        error: PlaceError,
    },
    /// A grid cell differs from what the placements write.
    #[display("cell {pos} holds {found}, placements write {expected}")]
    CellMismatch {
        /// The cell.
        pos: Position,
        /// Content found in the grid.
        found: String,
        /// Content the placements produce.
        expected: String,
    },
    /// A letter that belongs to no word.
    #[display("letter at {pos} belongs to no word")]
    Uncovered {
        /// The cell.
        pos: Position,
    },
}

/// Every issue found while validating a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns `true` if no rule was violated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the issues in rule order: connectivity, ghosts, dictionary,
    /// integrity, coverage.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("ok");
        }
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Runs every rule against a grid and the placements meant to produce it.
///
/// Ghost runs are checked against the placed words themselves; the
/// dictionary check only runs when `dictionary` is given.
#[must_use]
pub fn validate_layout(
    grid: &Grid,
    placements: &[Placement],
    dictionary: Option<&Dictionary>,
) -> ValidationReport {
    let mut issues = vec![];

    let unreached = unreached(placements);
    if !unreached.is_empty() {
        let (reached, unreached): (Vec<_>, Vec<_>) = placements
            .iter()
            .enumerate()
            .partition(|(i, _)| !unreached.contains(i));
        let texts = |list: Vec<(usize, &Placement)>| -> Vec<String> {
            list.into_iter()
                .map(|(_, p)| p.word.to_string())
                .collect()
        };
        issues.push(ValidationIssue::Disconnected {
            reached: texts(reached),
            unreached: texts(unreached),
        });
    }

    let words: HashSet<&str> = placements.iter().map(|p| p.word.as_str()).collect();
    issues.extend(
        ghosts(grid, &words)
            .into_iter()
            .map(|run| ValidationIssue::Ghost { run }),
    );

    if let Some(dictionary) = dictionary {
        issues.extend(
            unknown_words(placements, dictionary)
                .into_iter()
                .map(|word| ValidationIssue::UnknownWord {
                    word: word.to_string(),
                }),
        );
    }

    issues.extend(integrity_issues(grid, placements));
    issues.extend(
        uncovered_cells(grid, placements)
            .into_iter()
            .map(|pos| ValidationIssue::Uncovered { pos }),
    );

    ValidationReport { issues }
}

/// Validates a puzzle's grid against its own placements.
#[must_use]
pub fn validate(puzzle: &Puzzle, dictionary: Option<&Dictionary>) -> ValidationReport {
    validate_layout(puzzle.grid(), puzzle.placements(), dictionary)
}
