//! A single randomized placement attempt.
//!
//! An attempt seeds the grid with one word across the middle row, then grows
//! it in passes. A pass walks the shuffled words not yet placed and commits
//! a random legal placement of the first one that fits, then starts over
//! from the first word, since the new word can open crossings for words
//! that did not fit before. The pass ends when no remaining word fits.

use std::collections::HashSet;

use fjalekryq_core::{
    Fit, Grid, Orientation, Placement, Position, Puzzle, Word, WordSet, validation,
};
use rand::{Rng as _, seq::IndexedRandom as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{GeneratorConfig, PuzzleSeed, SeedPolicy};

/// A legal placement for a word on a particular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Where the word would go.
    pub placement: Placement,
    /// Shared and newly filled cells.
    pub fit: Fit,
}

/// The words already placed plus the one being tried.
struct WithWord<'a> {
    used: &'a HashSet<String>,
    word: &'a str,
}

impl WordSet for WithWord<'_> {
    fn contains_word(&self, text: &str) -> bool {
        text == self.word || self.used.contains(text)
    }
}

/// Enumerates every legal placement of `word` on `grid`.
///
/// Candidates are listed horizontal first, then vertical, each in row-major
/// order of their anchor. A placement is legal when
///
/// - every letter lands inside the grid on an empty cell or the same letter,
/// - it reuses at least one letter already on the grid, unless the grid is
///   empty,
/// - it fills at least one empty cell, and
/// - no run on the resulting grid is missing from `used` plus `word`.
#[must_use]
pub fn legal_placements(grid: &Grid, used: &HashSet<String>, word: &Word) -> Vec<Candidate> {
    let size = grid.size();
    let len = word.len();
    if len > size {
        return vec![];
    }
    let words = WithWord {
        used,
        word: word.as_str(),
    };
    let empty = grid.is_empty();

    let mut candidates = vec![];
    for orientation in Orientation::ALL {
        let (rows, cols) = match orientation {
            Orientation::Horizontal => (size, size - len + 1),
            Orientation::Vertical => (size - len + 1, size),
        };
        let mut placement = Placement::new(word.clone(), Position::default(), orientation);
        for row in 0..rows {
            for col in 0..cols {
                placement.position = Position::new(row, col);
                let Ok(fit) = grid.fit(&placement) else {
                    continue;
                };
                if fit.is_noop() || (!empty && !fit.crosses()) {
                    continue;
                }
                let Ok(next) = grid.placed(&placement) else {
                    continue;
                };
                if !validation::has_no_ghosts(&next, &words) {
                    continue;
                }
                candidates.push(Candidate {
                    placement: placement.clone(),
                    fit,
                });
            }
        }
    }
    candidates
}

/// Runs one attempt and returns the cleaned puzzle it built.
///
/// The result depends only on `pool`, `config` and `seed`. Words longer than
/// the grid are never tried. Returns `None` if no word fits the grid, or in
/// the rare case where the cleaned puzzle fails re-validation.
#[must_use]
pub fn run_attempt(pool: &[Word], config: &GeneratorConfig, seed: PuzzleSeed) -> Option<Puzzle> {
    let size = config.grid_size;
    let mut rng = seed.rng();
    let mut remaining: Vec<&Word> = pool.iter().filter(|word| word.len() <= size).collect();
    let first = take_seed_word(&mut remaining, config.seed_policy, &mut rng)?;

    let anchor = Position::new(size / 2, (size - first.len()) / 2);
    let placement = Placement::new(first.clone(), anchor, Orientation::Horizontal);
    let mut grid = Grid::new(size);
    grid.place(&placement).ok()?;
    let mut used = HashSet::from([first.as_str().to_owned()]);
    let mut placements = vec![placement];

    remaining.retain(|word| !used.contains(word.as_str()));
    for _ in 0..config.max_passes {
        remaining.shuffle(&mut rng);
        let mut committed = 0;
        // rescan from the first remaining word after every commit
        while let Some(candidate) = grow(&grid, &used, &remaining, &mut rng) {
            // legal_placements only returns placements that fit
            grid.place(&candidate.placement).ok()?;
            used.insert(candidate.placement.word.as_str().to_owned());
            remaining.retain(|word| !used.contains(word.as_str()));
            placements.push(candidate.placement);
            committed += 1;
        }
        if remaining.is_empty() || committed == 0 {
            break;
        }
    }

    debug_assert!(
        validation::is_connected(&placements),
        "every committed placement crosses the grid"
    );

    let puzzle = Puzzle::new(grid, placements).cleaned();
    let words: HashSet<&str> = puzzle.words().map(Word::as_str).collect();
    if let Some(ghost) = validation::first_ghost(puzzle.grid(), &words) {
        log::debug!("discarding attempt {seed}: cleanup left ghost {ghost}");
        return None;
    }
    if !validation::is_connected(puzzle.placements())
        || !validation::uncovered_cells(puzzle.grid(), puzzle.placements()).is_empty()
    {
        log::debug!("discarding attempt {seed}: cleanup split the puzzle");
        return None;
    }
    Some(puzzle)
}

/// Picks a legal placement for the first word in `remaining` that has one.
fn grow(
    grid: &Grid,
    used: &HashSet<String>,
    remaining: &[&Word],
    rng: &mut Pcg64,
) -> Option<Candidate> {
    remaining
        .iter()
        .find_map(|word| legal_placements(grid, used, word).choose(&mut *rng).cloned())
}

fn take_seed_word<'a>(
    words: &mut Vec<&'a Word>,
    policy: SeedPolicy,
    rng: &mut Pcg64,
) -> Option<&'a Word> {
    if words.is_empty() {
        return None;
    }
    let index = match policy {
        SeedPolicy::FirstInPool => 0,
        SeedPolicy::Random => rng.random_range(0..words.len()),
        SeedPolicy::FirstLongEnough { min_len } => {
            words.shuffle(rng);
            words
                .iter()
                .position(|word| word.len() >= min_len)
                .unwrap_or(0)
        }
    };
    Some(words.remove(index))
}

#[cfg(test)]
mod tests {
    use fjalekryq_core::run;

    use super::*;
    use crate::Thresholds;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn kafe_grid() -> (Grid, HashSet<String>) {
        let mut grid = Grid::new(7);
        grid.place(&Placement::new(
            Word::new("KAFË").unwrap(),
            Position::new(3, 1),
            Orientation::Horizontal,
        ))
        .unwrap();
        (grid, HashSet::from(["KAFË".to_owned()]))
    }

    #[test]
    fn test_empty_grid_accepts_every_in_bounds_position() {
        let grid = Grid::new(3);
        let candidates = legal_placements(&grid, &HashSet::new(), &Word::new("ERA").unwrap());
        assert_eq!(candidates.len(), 6);
        assert_eq!(
            candidates[0].placement.orientation,
            Orientation::Horizontal
        );
        assert_eq!(candidates[3].placement.orientation, Orientation::Vertical);
        assert!(candidates.iter().all(|c| c.fit.new == 3));
    }

    #[test]
    fn test_candidates_cross_and_leave_no_ghosts() {
        let (grid, used) = kafe_grid();
        let buke = Word::new("BUKË").unwrap();
        let candidates = legal_placements(&grid, &used, &buke);

        let expected = Placement::new(buke.clone(), Position::new(1, 1), Orientation::Vertical);
        assert!(candidates.iter().any(|c| c.placement == expected));

        let mut allowed = used.clone();
        allowed.insert(buke.to_string());
        for candidate in &candidates {
            assert!(candidate.fit.crosses());
            assert!(!candidate.fit.is_noop());
            let next = grid.placed(&candidate.placement).unwrap();
            assert!(validation::has_no_ghosts(&next, &allowed));
        }
    }

    #[test]
    fn test_rejects_noop_and_oversized_words() {
        let (grid, used) = kafe_grid();
        let kafe = Word::new("KAFË").unwrap();
        let original = Placement::new(kafe.clone(), Position::new(3, 1), Orientation::Horizontal);
        assert!(
            legal_placements(&grid, &used, &kafe)
                .iter()
                .all(|c| c.placement != original)
        );
        let long = Word::new("KAFENEJA").unwrap();
        assert!(legal_placements(&grid, &used, &long).is_empty());
    }

    #[test]
    fn test_crossing_that_forms_ghosts_is_rejected() {
        let (mut grid, mut used) = kafe_grid();
        grid.place(&Placement::new(
            Word::new("BUKË").unwrap(),
            Position::new(1, 1),
            Orientation::Vertical,
        ))
        .unwrap();
        used.insert("BUKË".to_owned());

        // crosses the `U` of BUKË, but `J` and `Ë` sit on top of `A` and `F`
        let uje = Word::new("UJË").unwrap();
        let parallel = Placement::new(uje.clone(), Position::new(2, 1), Orientation::Horizontal);
        assert!(grid.fit(&parallel).unwrap().crosses());
        let candidates = legal_placements(&grid, &used, &uje);
        assert!(candidates.iter().all(|c| c.placement != parallel));
        assert!(!candidates.is_empty());
    }

    #[test]
    fn test_first_word_is_centered() {
        let pool = words(&["KAFË", "BUKË", "UJË", "DUA"]);
        let config = GeneratorConfig::new(7, Thresholds::new(1, 1))
            .with_seed_policy(SeedPolicy::FirstInPool);
        for i in 0..10 {
            let puzzle = run_attempt(&pool, &config, PuzzleSeed::from(i)).unwrap();
            let first = &puzzle.placements()[0];
            assert_eq!(first.word.as_str(), "KAFË");
            assert_eq!(first.position, Position::new(3, 1));
            assert_eq!(first.orientation, Orientation::Horizontal);
        }
    }

    #[test]
    fn test_attempt_is_valid_and_reproducible() {
        let pool = words(&["MAL", "ERA", "DET", "ARI", "ZOG", "LAT", "TOKË", "DORË"]);
        let config = GeneratorConfig::new(6, Thresholds::new(1, 1));
        for i in 0..20 {
            let seed = PuzzleSeed::from(i);
            let Some(puzzle) = run_attempt(&pool, &config, seed) else {
                continue;
            };
            assert_eq!(run_attempt(&pool, &config, seed), Some(puzzle.clone()));
            let report = validation::validate(&puzzle, None);
            assert!(report.is_valid(), "{report}\n{puzzle}");
            let runs = run::scan(puzzle.grid());
            assert!(
                puzzle
                    .placements()
                    .iter()
                    .all(|p| runs.iter().any(|r| r.is_at(p)))
            );
        }
    }

    #[test]
    fn test_commit_reopens_deferred_words() {
        // BIR only crosses the `B` of BUKË, which only crosses KAFË
        let pool = words(&["KAFË", "BUKË", "BIR"]);
        let config = GeneratorConfig::new(7, Thresholds::new(1, 1))
            .with_seed_policy(SeedPolicy::FirstInPool)
            .with_max_passes(1);
        for i in 0..40 {
            let puzzle = run_attempt(&pool, &config, PuzzleSeed::from(i)).unwrap();
            assert_eq!(puzzle.word_count(), 3, "seed {i}\n{puzzle}");
            assert!(validation::validate(&puzzle, None).is_valid());
        }
    }

    #[test]
    fn test_no_fitting_word() {
        let pool = words(&["KAFENEJA"]);
        let config = GeneratorConfig::new(5, Thresholds::new(1, 1));
        assert_eq!(run_attempt(&pool, &config, PuzzleSeed::from(0)), None);
        assert_eq!(run_attempt(&[], &config, PuzzleSeed::from(0)), None);
    }
}
