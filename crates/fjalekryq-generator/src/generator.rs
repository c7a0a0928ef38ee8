use std::collections::HashSet;

use fjalekryq_core::{Puzzle, Word};

use crate::{ConfigError, GeneratorConfig, PuzzleSeed, Thresholds, search};

/// Builds crossword puzzles by running many independent placement attempts
/// and keeping the best one.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::Word;
/// use fjalekryq_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed, Thresholds};
///
/// let pool: Vec<Word> = ["KAFË", "BUKË", "UJË", "DUA"]
///     .into_iter()
///     .map(Word::new)
///     .collect::<Result<_, _>>()?;
/// let generator = PuzzleGenerator::new(GeneratorConfig::new(7, Thresholds::new(2, 7)));
/// let seed = PuzzleSeed::from(7);
///
/// let generated = generator.generate_with_seed(&pool, seed)?;
/// assert!(generated.puzzle.word_count() >= 2);
///
/// // the same seed gives the same puzzle
/// assert_eq!(generator.generate_with_seed(&pool, seed)?.puzzle, generated.puzzle);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    config: GeneratorConfig,
}

/// A generated puzzle together with how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The accepted puzzle.
    pub puzzle: Puzzle,
    /// The seed that reproduces this result.
    pub seed: PuzzleSeed,
    /// Search statistics.
    pub stats: GenerationStats,
}

/// Statistics about a successful generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Attempts run across all phases.
    pub attempts: usize,
    /// Whether the relaxed thresholds had to be used.
    pub relaxed: bool,
    /// The thresholds the puzzle met.
    pub thresholds: Thresholds,
    /// Score of the accepted puzzle.
    pub score: usize,
}

/// Reasons generation produced no puzzle.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The configuration is unusable.
    #[display("invalid configuration: {cause}")]
    InvalidConfig {
        /// What is wrong with it.
        cause: ConfigError,
    },
    /// The word pool is empty.
    #[display("word pool is empty")]
    EmptyPool,
    /// No attempt reached the thresholds, even after relaxing them.
    #[display("no attempt reached {thresholds}")]
    InsufficientWords {
        /// Highest scoring puzzle found, whatever its size.
        best: Option<Box<Puzzle>>,
        /// The last thresholds tried.
        thresholds: Thresholds,
    },
}

/// Scores a puzzle. Each word is worth ten letters.
#[must_use]
pub fn score(puzzle: &Puzzle) -> usize {
    puzzle.word_count() * 10 + puzzle.letter_count()
}

#[derive(Debug)]
struct Scored {
    score: usize,
    puzzle: Puzzle,
}

impl Scored {
    fn keep_better(slot: &mut Option<Self>, score: usize, puzzle: &Puzzle) {
        if slot.as_ref().is_none_or(|best| score > best.score) {
            *slot = Some(Self {
                score,
                puzzle: puzzle.clone(),
            });
        }
    }
}

struct Phase {
    label: &'static str,
    thresholds: Thresholds,
    attempts: usize,
    seed: PuzzleSeed,
}

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self, pool: &[Word]) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(pool, PuzzleSeed::random())
    }

    /// Generates a puzzle, deterministically for a given pool, configuration
    /// and seed.
    ///
    /// Runs up to `max_attempts` attempts and keeps the highest scoring one
    /// that meets the thresholds, the earliest attempt winning ties. If none
    /// does and relaxing is enabled, runs twice as many attempts against
    /// [`Thresholds::relaxed`]. Duplicate words in `pool` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidConfig`] or
    /// [`GenerateError::EmptyPool`] up front, and
    /// [`GenerateError::InsufficientWords`] if no attempt was good enough.
    pub fn generate_with_seed(
        &self,
        pool: &[Word],
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.config
            .validate()
            .map_err(|cause| GenerateError::InvalidConfig { cause })?;
        let pool = dedup(pool);
        if pool.is_empty() {
            return Err(GenerateError::EmptyPool);
        }

        let mut fallback = None;
        let mut attempts = 0;

        let strict = Phase {
            label: "strict",
            thresholds: self.config.thresholds,
            attempts: self.config.max_attempts,
            seed,
        };
        let mut last = strict.thresholds;
        let mut outcome = self.run_phase(&pool, &strict, &mut attempts, &mut fallback);
        let mut relaxed = false;

        if outcome.is_none() && self.config.relax {
            let phase = Phase {
                label: "relaxed",
                thresholds: strict.thresholds.relaxed(),
                attempts: self.config.max_attempts.saturating_mul(2),
                seed,
            };
            log::warn!(
                "no attempt reached {}, retrying with {}",
                strict.thresholds,
                phase.thresholds
            );
            last = phase.thresholds;
            outcome = self.run_phase(&pool, &phase, &mut attempts, &mut fallback);
            relaxed = true;
        }

        let Some(best) = outcome else {
            log::info!(
                "generation failed after {attempts} attempts: best had {} words",
                fallback.as_ref().map_or(0, |f| f.puzzle.word_count())
            );
            return Err(GenerateError::InsufficientWords {
                best: fallback.map(|f| Box::new(f.puzzle)),
                thresholds: last,
            });
        };
        log::info!(
            "generated {} words / {} letters (score {}) in {attempts} attempts",
            best.puzzle.word_count(),
            best.puzzle.letter_count(),
            best.score
        );
        Ok(GeneratedPuzzle {
            stats: GenerationStats {
                attempts,
                relaxed,
                thresholds: last,
                score: best.score,
            },
            puzzle: best.puzzle,
            seed,
        })
    }

    fn run_phase(
        &self,
        pool: &[Word],
        phase: &Phase,
        attempts: &mut usize,
        fallback: &mut Option<Scored>,
    ) -> Option<Scored> {
        let early_stop = phase
            .thresholds
            .min_words
            .saturating_add(self.config.early_stop_margin);
        let mut best = None;
        for i in 0..phase.attempts {
            *attempts += 1;
            let seed = phase.seed.derive(phase.label, i as u64);
            let Some(puzzle) = search::run_attempt(pool, &self.config, seed) else {
                log::debug!("{} attempt {i}: nothing placed", phase.label);
                continue;
            };
            let (words, letters) = (puzzle.word_count(), puzzle.letter_count());
            let score = score(&puzzle);
            log::debug!(
                "{} attempt {i}: {words} words, {letters} letters",
                phase.label
            );
            Scored::keep_better(fallback, score, &puzzle);
            if !phase.thresholds.is_met(words, letters) {
                continue;
            }
            Scored::keep_better(&mut best, score, &puzzle);
            if words >= early_stop {
                log::debug!("{} attempt {i}: early stop", phase.label);
                break;
            }
        }
        best
    }
}

/// Drops repeated words, keeping the first occurrence.
fn dedup(pool: &[Word]) -> Vec<Word> {
    let mut seen = HashSet::new();
    pool.iter()
        .filter(|word| seen.insert(word.as_str()))
        .cloned()
        .collect()
}
