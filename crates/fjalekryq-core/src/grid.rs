//! Square letter grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use unicode_segmentation::UnicodeSegmentation as _;

use crate::{Letter, LetterError, Placement, Position, Run, run};

/// Character used for empty cells by [`Grid`]'s `Display` and `FromStr`.
pub const EMPTY_CELL: char = '.';

/// A fixed-size square grid whose cells are either empty or hold one letter.
///
/// Placements only ever write the letter a cell already holds or fill an
/// empty cell, so letters are never overwritten. A failed placement leaves
/// the grid untouched.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::{Grid, Orientation, Placement, Position, Word};
///
/// let mut grid = Grid::new(7);
/// let kafe = Placement::new(Word::new("KAFË")?, Position::new(3, 1), Orientation::Horizontal);
/// grid.place(&kafe)?;
/// assert_eq!(grid.letter_count(), 4);
///
/// // `K` at (3,1) is reused, the other three cells are new.
/// let buke = Placement::new(Word::new("BUKË")?, Position::new(1, 1), Orientation::Vertical);
/// let fit = grid.fit(&buke)?;
/// assert_eq!((fit.shared, fit.new), (1, 3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Letter>>,
}

/// How a placement relates to the cells it would write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fit {
    /// Target cells that already hold the wanted letter.
    pub shared: usize,
    /// Target cells that are currently empty.
    pub new: usize,
}

impl Fit {
    /// Returns `true` if the placement reuses at least one existing letter.
    #[must_use]
    pub fn crosses(&self) -> bool {
        self.shared > 0
    }

    /// Returns `true` if the placement would leave the grid unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.new == 0
    }
}

/// Reasons a placement cannot be written onto a grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// A letter would land outside the grid.
    #[display("cell {pos} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// The first offending cell.
        pos: Position,
        /// The grid size.
        size: usize,
    },
    /// A cell already holds a different letter.
    #[display("conflict at {pos}: grid has {existing}, word needs {wanted}")]
    LetterConflict {
        /// The first conflicting cell.
        pos: Position,
        /// The letter already in the cell.
        existing: Letter,
        /// The letter the placement wants to write.
        wanted: Letter,
    },
}

/// Errors returned when parsing or assembling a grid from rows.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Zero-based row index.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Expected row length.
        size: usize,
    },
    /// A cell is neither a letter nor the empty marker.
    #[display("invalid cell in row {row}: {cause}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Why the cell was rejected.
        cause: LetterError,
    },
}

impl Grid {
    /// Creates an empty `size` x `size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Assembles a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError::NotSquare`] if any row's length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<Option<Letter>>>) -> Result<Self, GridParseError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != size {
                return Err(GridParseError::NotSquare {
                    row,
                    len: cells_in_row.len(),
                    size,
                });
            }
            cells.extend(cells_in_row);
        }
        Ok(Self { size, cells })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Returns the letter at `pos`, or `None` for empty or out-of-bounds cells.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&Letter> {
        self.index(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Returns `true` if `pos` is inside the grid and holds a letter.
    #[must_use]
    #[inline]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if no cell holds a letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Returns the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Letter>]> {
        // `chunks` panics on zero, and a zero-size grid has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Returns the cells row by row as text, `None` for empty cells.
    #[must_use]
    pub fn cell_texts(&self) -> Vec<Vec<Option<String>>> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map(ToString::to_string))
                    .collect()
            })
            .collect()
    }

    /// Returns every occupied cell with its letter, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &Letter)> {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|letter| (Position::new(i / size, i % size), letter))
        })
    }

    /// Returns a grid with the same shape whose occupied cells take their
    /// letters, in row-major order, from `letters`.
    ///
    /// Occupied cells left over once `letters` runs out become empty.
    #[must_use]
    pub fn refill<I>(&self, letters: I) -> Self
    where
        I: IntoIterator<Item = Letter>,
    {
        let mut letters = letters.into_iter();
        let cells = self
            .cells
            .iter()
            .map(|cell| cell.as_ref().and_then(|_| letters.next()))
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }

    /// Checks whether `placement` can be written without modifying the grid.
    ///
    /// Writing a letter over the same letter is not a conflict, so re-placing
    /// a word that is already on the grid succeeds with [`Fit::is_noop`].
    ///
    /// # Errors
    ///
    /// Returns the first [`PlaceError`] found in word order.
    pub fn fit(&self, placement: &Placement) -> Result<Fit, PlaceError> {
        let mut fit = Fit::default();
        for (pos, wanted) in placement.cells() {
            let Some(i) = self.index(pos) else {
                return Err(PlaceError::OutOfBounds {
                    pos,
                    size: self.size,
                });
            };
            match &self.cells[i] {
                None => fit.new += 1,
                Some(existing) if existing == wanted => fit.shared += 1,
                Some(existing) => {
                    return Err(PlaceError::LetterConflict {
                        pos,
                        existing: existing.clone(),
                        wanted: wanted.clone(),
                    });
                }
            }
        }
        Ok(fit)
    }

    /// Writes `placement` onto the grid.
    ///
    /// All cells are checked before any is written, so on error the grid is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] or [`PlaceError::LetterConflict`].
    pub fn place(&mut self, placement: &Placement) -> Result<Fit, PlaceError> {
        let fit = self.fit(placement)?;
        for (pos, letter) in placement.cells() {
            let i = pos.row * self.size + pos.col;
            if self.cells[i].is_none() {
                self.cells[i] = Some(letter.clone());
            }
        }
        Ok(fit)
    }

    /// Returns a copy of the grid with `placement` written onto it.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::place`].
    pub fn placed(&self, placement: &Placement) -> Result<Self, PlaceError> {
        let mut grid = self.clone();
        grid.place(placement)?;
        Ok(grid)
    }

    /// Returns every run of two or more letters.
    ///
    /// See [`run::scan`].
    #[must_use]
    pub fn runs(&self) -> Vec<Run> {
        run::scan(self)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(letter) => Display::fmt(letter, f)?,
                    None => write!(f, "{EMPTY_CELL}")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses one row per non-blank line, `.` marking empty cells.
    /// Whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.graphemes(true)
                    .filter(|g| !g.trim().is_empty())
                    .map(|g| {
                        if g.len() == EMPTY_CELL.len_utf8() && g.starts_with(EMPTY_CELL) {
                            Ok(None)
                        } else {
                            Letter::new(g)
                                .map(Some)
                                .map_err(|cause| GridParseError::InvalidCell { row, cause })
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Orientation, Word};

    fn placement(word: &str, row: usize, col: usize, orientation: Orientation) -> Placement {
        Placement::new(
            Word::new(word).unwrap(),
            Position::new(row, col),
            orientation,
        )
    }

    #[test]
    fn test_place_writes_letters() {
        let mut grid = Grid::new(5);
        let fit = grid
            .place(&placement("MAL", 1, 1, Orientation::Horizontal))
            .unwrap();
        assert_eq!(fit, Fit { shared: 0, new: 3 });
        assert_eq!(grid.letter_count(), 3);
        assert_eq!(grid.get(Position::new(1, 3)).unwrap().to_string(), "L");
        assert_eq!(grid.get(Position::new(0, 0)), None);
        assert_eq!(grid.get(Position::new(9, 9)), None);
        assert_eq!(grid.to_string(), ".....\n.MAL.\n.....\n.....\n.....");
    }

    #[test]
    fn test_place_same_word_twice_is_noop() {
        let mut grid = Grid::new(5);
        let mal = placement("MAL", 1, 1, Orientation::Horizontal);
        grid.place(&mal).unwrap();
        let before = grid.clone();
        let fit = grid.place(&mal).unwrap();
        assert!(fit.is_noop());
        assert_eq!(fit.shared, 3);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_failed_place_leaves_grid_unchanged() {
        let mut grid: Grid = "
            .....
            .MAL.
            .....
            .....
            .....
        "
        .parse()
        .unwrap();
        let before = grid.clone();

        // `D` fits at (0,2) but `E` conflicts with `A` at (1,2).
        let err = grid
            .place(&placement("DET", 0, 2, Orientation::Vertical))
            .unwrap_err();
        assert!(matches!(
            err,
            PlaceError::LetterConflict { pos, .. } if pos == Position::new(1, 2)
        ));
        assert_eq!(grid, before);

        // first two letters fit, the third falls off the right edge
        let err = grid
            .place(&placement("ZOG", 4, 3, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(
            err,
            PlaceError::OutOfBounds {
                pos: Position::new(4, 5),
                size: 5
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_parse_normalizes_multi_codepoint_letters() {
        let grid: Grid = "KE\u{308}.\n...\nA.B".parse().unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.letter_count(), 4);
        assert_eq!(grid.to_string(), "KË.\n...\nA.B");
        assert_eq!(grid, "KË.\n...\nA.B".parse::<Grid>().unwrap());
    }

    #[test]
    fn test_parse_rejects_non_square() {
        assert_eq!(
            "AB\nC".parse::<Grid>(),
            Err(GridParseError::NotSquare {
                row: 1,
                len: 1,
                size: 2
            })
        );
        assert!(matches!(
            "A1\n..".parse::<Grid>(),
            Err(GridParseError::InvalidCell { row: 0, .. })
        ));
    }

    #[test]
    fn test_placed_returns_new_grid() {
        let grid = Grid::new(4);
        let next = grid
            .placed(&placement("UJË", 0, 0, Orientation::Vertical))
            .unwrap();
        assert!(grid.is_empty());
        assert_eq!(next.letter_count(), 3);
        assert_eq!(
            next.occupied().map(|(pos, _)| pos).collect::<Vec<_>>(),
            [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    fn orientation() -> impl Strategy<Value = Orientation> {
        prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
    }

    proptest! {
        #[test]
        fn prop_out_of_bounds_always_rejected(
            size in 1usize..=10,
            len in 2usize..=8,
            row in 0usize..12,
            col in 0usize..12,
            orientation in orientation(),
        ) {
            let word = Word::new("A".repeat(len)).unwrap();
            let p = Placement::new(word, Position::new(row, col), orientation);
            let mut grid = Grid::new(size);
            let in_bounds = grid.contains(p.position) && grid.contains(p.end());
            let result = grid.place(&p);
            prop_assert_eq!(result.is_ok(), in_bounds);
            if !in_bounds {
                prop_assert!(matches!(result, Err(PlaceError::OutOfBounds { .. })), "expected out of bounds");
                prop_assert!(grid.is_empty());
            }
        }

        #[test]
        fn prop_conflict_iff_different_letter(
            row in 0usize..5,
            col in 0usize..5,
            existing in "[A-Z]",
            wanted in "[A-Z]",
        ) {
            let mut grid = Grid::new(5);
            let cross = Word::new(format!("{existing}{existing}")).unwrap();
            // put the existing letter at (row, col) using a two-letter word
            let anchor = if col + 1 < 5 {
                Placement::new(cross, Position::new(row, col), Orientation::Horizontal)
            } else {
                Placement::new(cross, Position::new(row, col - 1), Orientation::Horizontal)
            };
            grid.place(&anchor).unwrap();
            let before = grid.clone();

            let probe_word = Word::new(format!("{wanted}Q")).unwrap();
            let probe = if row + 1 < 5 {
                Placement::new(probe_word, Position::new(row, col), Orientation::Vertical)
            } else {
                let w = Word::new(format!("Q{wanted}")).unwrap();
                Placement::new(w, Position::new(row - 1, col), Orientation::Vertical)
            };
            let result = grid.place(&probe);
            if existing == wanted {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(matches!(result, Err(PlaceError::LetterConflict { .. })), "expected conflict");
                prop_assert_eq!(grid, before);
            }
        }

        #[test]
        fn prop_replacing_is_idempotent(
            row in 0usize..4,
            col in 0usize..4,
            word in "[A-Z]{2,4}",
            orientation in orientation(),
        ) {
            let p = Placement::new(Word::new(word).unwrap(), Position::new(row, col), orientation);
            let mut grid = Grid::new(8);
            grid.place(&p).unwrap();
            let once = grid.clone();
            let fit = grid.place(&p).unwrap();
            prop_assert!(fit.is_noop());
            prop_assert_eq!(grid, once);
        }
    }
}
