//! Grid coordinates and word orientation.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A cell coordinate on a square grid, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: usize,
    /// Column index, growing to the right.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position `i` cells further along `orientation`.
    ///
    /// Coordinates saturate at `usize::MAX`, which lies outside every grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use fjalekryq_core::{Orientation, Position};
    ///
    /// let anchor = Position::new(3, 1);
    /// assert_eq!(anchor.offset(Orientation::Horizontal, 2), Position::new(3, 3));
    /// assert_eq!(anchor.offset(Orientation::Vertical, 2), Position::new(5, 1));
    /// ```
    #[must_use]
    #[inline]
    pub const fn offset(self, orientation: Orientation, i: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col.saturating_add(i)),
            Orientation::Vertical => Self::new(self.row.saturating_add(i), self.col),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The axis a word is written along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Returns the lowercase name used in emitted puzzle records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
