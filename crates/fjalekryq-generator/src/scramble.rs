use fjalekryq_core::Grid;
use rand::seq::SliceRandom as _;

use crate::PuzzleSeed;

/// Shuffles the letters of `grid` among its occupied cells.
///
/// Empty cells stay empty, so the result has the same shape as the solution
/// and holds the same multiset of letters. This is the board the player
/// starts from.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::Grid;
/// use fjalekryq_generator::{PuzzleSeed, scramble};
///
/// let solution: Grid = "
///     .......
///     .B.....
///     .U.....
///     .KAFË..
///     .Ë.....
///     .......
///     .......
/// "
/// .parse()?;
/// let board = scramble(&solution, PuzzleSeed::from(1));
/// assert_eq!(board.letter_count(), solution.letter_count());
/// assert_eq!(board, scramble(&solution, PuzzleSeed::from(1)));
/// # Ok::<(), fjalekryq_core::GridParseError>(())
/// ```
#[must_use]
pub fn scramble(grid: &Grid, seed: PuzzleSeed) -> Grid {
    let mut letters: Vec<_> = grid.occupied().map(|(_, letter)| letter.clone()).collect();
    letters.shuffle(&mut seed.rng());
    grid.refill(letters)
}
