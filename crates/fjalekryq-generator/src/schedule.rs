use fjalekryq_core::{Dictionary, Word};

use crate::{GeneratorConfig, Thresholds};

/// Generation settings for one day of the weekly rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayConfig {
    /// Display name.
    pub name: &'static str,
    /// Number of rows and columns.
    pub grid_size: usize,
    /// Minimum number of words.
    pub min_words: usize,
    /// Minimum number of letters.
    pub min_letters: usize,
    /// Attempt budget for the strict phase.
    pub attempts: usize,
    /// Longest word, in letters, drawn from the dictionary.
    pub max_word_len: usize,
}

/// Shortest word drawn from the dictionary for scheduled puzzles.
pub const MIN_POOL_WORD_LEN: usize = 3;

/// The week's puzzles, Monday first, growing from 7x7 to 10x10.
///
/// # Examples
///
/// ```
/// use fjalekryq_generator::weekly_schedule;
///
/// let week = weekly_schedule();
/// assert_eq!(week.len(), 7);
/// assert!(week.windows(2).all(|w| w[0].min_words < w[1].min_words));
/// ```
#[must_use]
pub fn weekly_schedule() -> Vec<DayConfig> {
    let day = |name, grid_size, min_words, min_letters, attempts, max_word_len| DayConfig {
        name,
        grid_size,
        min_words,
        min_letters,
        attempts,
        max_word_len,
    };
    vec![
        day("Monday", 7, 8, 20, 800, 6),
        day("Tuesday", 7, 9, 22, 800, 6),
        day("Wednesday", 8, 10, 28, 1000, 6),
        day("Thursday", 8, 11, 30, 1000, 6),
        day("Friday", 9, 13, 35, 1200, 7),
        day("Saturday", 9, 14, 38, 1200, 7),
        day("Sunday", 10, 16, 45, 1500, 7),
    ]
}

impl DayConfig {
    /// Returns the thresholds for this day.
    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.min_words, self.min_letters)
    }

    /// Returns a generator configuration for this day.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.grid_size, self.thresholds()).with_max_attempts(self.attempts)
    }

    /// Returns the dictionary words usable on this day: at least
    /// [`MIN_POOL_WORD_LEN`] letters, at most `max_word_len`, and never longer
    /// than the grid.
    #[must_use]
    pub fn pool(&self, dictionary: &Dictionary) -> Vec<Word> {
        dictionary.pool(MIN_POOL_WORD_LEN..=self.max_word_len.min(self.grid_size))
    }
}
