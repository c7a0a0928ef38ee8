//! Word placements.

use std::fmt::{self, Display};

use crate::{Letter, Orientation, Position, Word};

/// A word anchored at a cell and written along one axis.
///
/// Letter `i` of the word occupies `position.offset(orientation, i)`.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::{Orientation, Placement, Position, Word};
///
/// let kafe = Placement::new(Word::new("KAFË")?, Position::new(3, 1), Orientation::Horizontal);
/// let buke = Placement::new(Word::new("BUKË")?, Position::new(1, 1), Orientation::Vertical);
/// assert!(kafe.intersects(&buke)); // both use the `K` at (3,1)
/// # Ok::<(), fjalekryq_core::WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The placed word.
    pub word: Word,
    /// Cell holding the first letter.
    pub position: Position,
    /// Writing direction.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a new placement.
    #[must_use]
    pub fn new(word: Word, position: Position, orientation: Orientation) -> Self {
        Self {
            word,
            position,
            orientation,
        }
    }

    /// Returns the number of cells the placement covers.
    #[must_use]
    #[expect(clippy::len_without_is_empty, reason = "words are never empty")]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Returns every `(cell, letter)` pair the placement writes, in word order.
    ///
    /// Cells may lie outside a grid; bounds are the grid's concern.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Letter)> {
        self.word
            .letters()
            .iter()
            .enumerate()
            .map(|(i, letter)| (self.position.offset(self.orientation, i), letter))
    }

    /// Returns the cell holding the last letter.
    #[must_use]
    pub fn end(&self) -> Position {
        self.position.offset(self.orientation, self.len() - 1)
    }

    /// Returns `true` if `pos` is one of the placement's cells.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        let Position { row, col } = self.position;
        let (same_line, along, start) = match self.orientation {
            Orientation::Horizontal => (pos.row == row, pos.col, col),
            Orientation::Vertical => (pos.col == col, pos.row, row),
        };
        same_line && along >= start && along - start < self.len()
    }

    /// Returns `true` if the two placements share at least one cell.
    ///
    /// Words that only touch side by side or corner to corner do not
    /// intersect.
    #[must_use]
    pub fn intersects(&self, other: &Placement) -> bool {
        self.cells().any(|(pos, _)| other.covers(pos))
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} {}", self.word, self.position, self.orientation)
    }
}
