//! Run scanning.
//!
//! A run is a maximal horizontal or vertical sequence of occupied cells.
//! Runs are derived from the grid on demand and never cached: a single
//! placement can merge, extend or create arbitrarily many of them.

use std::fmt::{self, Display};

use crate::{Grid, Orientation, Placement, Position};

/// A maximal line of two or more adjacent letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Run {
    /// The letters of the run, concatenated.
    pub text: String,
    /// Cell holding the first letter.
    pub position: Position,
    /// Axis of the run.
    pub orientation: Orientation,
    /// Number of letters (cells) in the run.
    pub len: usize,
}

impl Run {
    /// Returns `true` if `placement` writes exactly this run: same text,
    /// same anchor and same axis.
    #[must_use]
    pub fn is_at(&self, placement: &Placement) -> bool {
        self.position == placement.position
            && self.orientation == placement.orientation
            && self.text == placement.word.as_str()
    }
}

impl Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {} {}", self.text, self.position, self.orientation)
    }
}

/// Enumerates every run of length two or more.
///
/// Horizontal runs come first in row-major order (top row first, left to
/// right), then vertical runs in column-major order (left column first, top
/// to bottom). Isolated single letters are not runs.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::{Grid, Orientation, run};
///
/// let grid: Grid = "
///     .B...
///     .U...
///     KAFË.
///     .Ë...
///     .....
/// "
/// .parse()?;
/// let runs: Vec<_> = run::scan(&grid).into_iter().map(|r| r.text).collect();
/// assert_eq!(runs, ["KAFË", "BUAË"]);
/// # Ok::<(), fjalekryq_core::GridParseError>(())
/// ```
#[must_use]
pub fn scan(grid: &Grid) -> Vec<Run> {
    let size = grid.size();
    let mut runs = Vec::new();
    for line in 0..size {
        scan_line(grid, Orientation::Horizontal, Position::new(line, 0), &mut runs);
    }
    for line in 0..size {
        scan_line(grid, Orientation::Vertical, Position::new(0, line), &mut runs);
    }
    runs
}

fn scan_line(grid: &Grid, orientation: Orientation, start: Position, runs: &mut Vec<Run>) {
    let size = grid.size();
    let mut i = 0;
    while i < size {
        let anchor = start.offset(orientation, i);
        if !grid.is_occupied(anchor) {
            i += 1;
            continue;
        }
        let mut text = String::new();
        let mut len = 0;
        while let Some(letter) = grid.get(start.offset(orientation, i)) {
            letter.push_to(&mut text);
            len += 1;
            i += 1;
        }
        if len >= 2 {
            runs.push(Run {
                text,
                position: anchor,
                orientation,
                len,
            });
        }
    }
}
