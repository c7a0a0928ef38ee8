use std::fmt::{self, Display};

/// Minimum size a generated puzzle must reach to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Thresholds {
    /// Minimum number of placed words.
    pub min_words: usize,
    /// Minimum number of occupied cells.
    pub min_letters: usize,
}

impl Thresholds {
    /// Floor below which [`Thresholds::relaxed`] never lowers `min_words`.
    pub const RELAXED_MIN_WORDS: usize = 3;
    /// Floor below which [`Thresholds::relaxed`] never lowers `min_letters`.
    pub const RELAXED_MIN_LETTERS: usize = 12;

    /// Creates thresholds.
    #[must_use]
    pub const fn new(min_words: usize, min_letters: usize) -> Self {
        Self {
            min_words,
            min_letters,
        }
    }

    /// Returns `true` if a puzzle with `words` words and `letters` letters
    /// is acceptable.
    #[must_use]
    pub const fn is_met(&self, words: usize, letters: usize) -> bool {
        words >= self.min_words && letters >= self.min_letters
    }

    /// Returns the thresholds used when no attempt met these.
    ///
    /// Three fewer words and ten fewer letters, floored at
    /// [`RELAXED_MIN_WORDS`](Self::RELAXED_MIN_WORDS) and
    /// [`RELAXED_MIN_LETTERS`](Self::RELAXED_MIN_LETTERS). A threshold that is
    /// already below its floor is kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use fjalekryq_generator::Thresholds;
    ///
    /// assert_eq!(Thresholds::new(8, 20).relaxed(), Thresholds::new(5, 12));
    /// assert_eq!(Thresholds::new(16, 45).relaxed(), Thresholds::new(13, 35));
    /// assert_eq!(Thresholds::new(2, 6).relaxed(), Thresholds::new(2, 6));
    /// ```
    #[must_use]
    pub fn relaxed(&self) -> Self {
        let relax = |value: usize, step: usize, floor: usize| {
            value.saturating_sub(step).max(floor).min(value)
        };
        Self {
            min_words: relax(self.min_words, 3, Self::RELAXED_MIN_WORDS),
            min_letters: relax(self.min_letters, 10, Self::RELAXED_MIN_LETTERS),
        }
    }
}

impl Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words / {} letters",
            self.min_words, self.min_letters
        )
    }
}

/// How an attempt chooses the word placed first, across the middle row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedPolicy {
    /// Any word that fits, chosen at random.
    Random,
    /// The first word in shuffled order with at least `min_len` letters,
    /// falling back to the first word that fits.
    FirstLongEnough {
        /// Minimum letter count preferred for the seed word.
        min_len: usize,
    },
    /// The first word of the pool as given that fits, without shuffling.
    FirstInPool,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self::FirstLongEnough { min_len: 4 }
    }
}

/// Reasons a [`GeneratorConfig`] cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The grid cannot hold a two-letter word.
    #[display("grid size must be at least 2, got {size}")]
    GridTooSmall {
        /// The configured size.
        size: usize,
    },
    /// The grid is larger than [`MAX_GRID_SIZE`].
    #[display("grid size must be at most {}, got {size}", MAX_GRID_SIZE)]
    GridTooLarge {
        /// The configured size.
        size: usize,
    },
    /// The attempt budget is zero.
    #[display("at least one attempt is required")]
    NoAttempts,
    /// The pass budget is zero.
    #[display("at least one growth pass is required")]
    NoPasses,
}

/// Largest grid the generator accepts.
pub const MAX_GRID_SIZE: usize = 64;

/// Settings for [`PuzzleGenerator`](crate::PuzzleGenerator).
///
/// # Examples
///
/// ```
/// use fjalekryq_generator::{GeneratorConfig, SeedPolicy, Thresholds};
///
/// let config = GeneratorConfig::new(7, Thresholds::new(8, 20))
///     .with_max_attempts(800)
///     .with_seed_policy(SeedPolicy::Random);
/// assert_eq!(config.max_passes, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of rows and columns.
    pub grid_size: usize,
    /// Acceptance thresholds for the strict phase.
    pub thresholds: Thresholds,
    /// Attempts in the strict phase. The relaxed phase runs twice as many.
    pub max_attempts: usize,
    /// Growth passes per attempt over the words not yet placed.
    pub max_passes: usize,
    /// Seed word selection.
    pub seed_policy: SeedPolicy,
    /// Stop a phase early once an accepted attempt has this many words more
    /// than the minimum.
    pub early_stop_margin: usize,
    /// Whether to retry with [`Thresholds::relaxed`] after the strict phase
    /// fails.
    pub relax: bool,
}

impl GeneratorConfig {
    /// Default attempt budget.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 50;
    /// Default pass budget.
    pub const DEFAULT_MAX_PASSES: usize = 3;
    /// Default early stop margin.
    pub const DEFAULT_EARLY_STOP_MARGIN: usize = 4;

    /// Creates a configuration with default budgets.
    #[must_use]
    pub fn new(grid_size: usize, thresholds: Thresholds) -> Self {
        Self {
            grid_size,
            thresholds,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            max_passes: Self::DEFAULT_MAX_PASSES,
            seed_policy: SeedPolicy::default(),
            early_stop_margin: Self::DEFAULT_EARLY_STOP_MARGIN,
            relax: true,
        }
    }

    /// Sets [`max_attempts`](Self::max_attempts).
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets [`max_passes`](Self::max_passes).
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Sets [`seed_policy`](Self::seed_policy).
    #[must_use]
    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    /// Sets [`early_stop_margin`](Self::early_stop_margin).
    #[must_use]
    pub fn with_early_stop_margin(mut self, early_stop_margin: usize) -> Self {
        self.early_stop_margin = early_stop_margin;
        self
    }

    /// Sets [`relax`](Self::relax).
    #[must_use]
    pub fn with_relax(mut self, relax: bool) -> Self {
        self.relax = relax;
        self
    }

    /// Checks that the configuration can produce a puzzle at all.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.max_passes == 0 {
            return Err(ConfigError::NoPasses);
        }
        Ok(())
    }
}
