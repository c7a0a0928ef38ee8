use std::collections::BTreeSet;

use fjalekryq_core::{Dictionary, Orientation, Position, Puzzle, Word, run, validation};
use fjalekryq_generator::{
    GenerateError, GeneratorConfig, PuzzleGenerator, PuzzleSeed, SeedPolicy, Thresholds, scramble,
    weekly_schedule,
};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "KAFË", "BUKË", "UJË", "DUA", "MAL", "ERA", "DET", "ARI", "ZOG", "LAT", "TOKË", "DORË", "SHI",
    "NATË", "DITË", "RRUGË", "SHTËPI", "LULE", "MOLLË", "DARKË", "ZEMËR", "QIELL", "LUMË", "DIELL",
];

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|t| Word::new(*t).unwrap()).collect()
}

fn run_texts(puzzle: &Puzzle) -> BTreeSet<String> {
    run::scan(puzzle.grid()).into_iter().map(|r| r.text).collect()
}

fn word_texts(puzzle: &Puzzle) -> BTreeSet<String> {
    puzzle.words().map(ToString::to_string).collect()
}

#[test]
fn kafe_buke_uje_dua() {
    let pool = words(&["KAFË", "BUKË", "UJË", "DUA"]);
    let config = GeneratorConfig::new(7, Thresholds::new(4, 11))
        .with_seed_policy(SeedPolicy::FirstInPool)
        .with_relax(false);
    let generated = PuzzleGenerator::new(config)
        .generate_with_seed(&pool, PuzzleSeed::from(2024))
        .unwrap();
    let puzzle = &generated.puzzle;

    let first = &puzzle.placements()[0];
    assert_eq!(first.word.as_str(), "KAFË");
    assert_eq!(first.position, Position::new(3, 1));
    assert_eq!(first.orientation, Orientation::Horizontal);

    assert_eq!(puzzle.word_count(), 4);
    assert_eq!(
        run_texts(puzzle),
        BTreeSet::from(["KAFË", "BUKË", "UJË", "DUA"].map(String::from))
    );
    assert!(validation::is_connected(puzzle.placements()));
    assert!(validation::validate(puzzle, None).is_valid());
}

#[test]
fn single_word_pool_is_insufficient() {
    let config = GeneratorConfig::new(7, Thresholds::new(3, 3)).with_max_attempts(10);
    let result =
        PuzzleGenerator::new(config).generate_with_seed(&words(&["ERA"]), PuzzleSeed::from(9));
    assert!(matches!(
        result,
        Err(GenerateError::InsufficientWords { .. })
    ));
}

#[test]
fn same_seed_same_puzzle() {
    let pool = words(WORDS);
    let config = GeneratorConfig::new(8, Thresholds::new(5, 15)).with_max_attempts(20);
    let generator = PuzzleGenerator::new(config);
    let seed: PuzzleSeed = "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3"
        .parse()
        .unwrap();
    let a = generator.generate_with_seed(&pool, seed);
    let b = generator.generate_with_seed(&pool, seed);
    assert_eq!(a, b);
}

#[test]
fn record_round_trip_and_scramble() {
    let pool = words(WORDS);
    let config = GeneratorConfig::new(8, Thresholds::new(4, 12)).with_max_attempts(20);
    let generated = PuzzleGenerator::new(config)
        .generate_with_seed(&pool, PuzzleSeed::from(5))
        .unwrap();
    let puzzle = generated.puzzle;

    let record = puzzle.to_record();
    assert_eq!(record.words.len(), puzzle.word_count());
    assert_eq!(Puzzle::try_from(record).unwrap(), puzzle);

    let board = scramble(puzzle.grid(), generated.seed);
    assert_eq!(board.letter_count(), puzzle.letter_count());
}

#[test]
fn monday_from_dictionary() {
    let dictionary = Dictionary::parse(&WORDS.join("\n")).unwrap();
    let monday = &weekly_schedule()[0];
    let pool = monday.pool(&dictionary);
    assert!(pool.iter().all(|w| (3..=6).contains(&w.len())));

    let config = monday.generator_config().with_max_attempts(30);
    match PuzzleGenerator::new(config).generate_with_seed(&pool, PuzzleSeed::from(1)) {
        Ok(generated) => {
            assert!(validation::validate(&generated.puzzle, Some(&dictionary)).is_valid());
        }
        Err(GenerateError::InsufficientWords { best, .. }) => {
            let best = best.unwrap();
            assert!(validation::validate(&best, Some(&dictionary)).is_valid());
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_generated_puzzles_are_valid(
        picks in proptest::sample::subsequence(WORDS.to_vec(), 4..=WORDS.len()),
        size in 5usize..=9,
        seed in any::<u64>(),
    ) {
        let pool = words(&picks);
        let config = GeneratorConfig::new(size, Thresholds::new(2, 5))
            .with_max_attempts(4)
            .with_seed_policy(SeedPolicy::Random);
        let puzzle = match PuzzleGenerator::new(config).generate_with_seed(&pool, PuzzleSeed::from(seed)) {
            Ok(generated) => generated.puzzle,
            Err(GenerateError::InsufficientWords { best, .. }) => match best {
                Some(best) => *best,
                None => return Ok(()),
            },
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };

        // no ghosts: every run is a placed word, every placed word is a run
        prop_assert_eq!(run_texts(&puzzle), word_texts(&puzzle));
        let runs = run::scan(puzzle.grid());
        for placement in puzzle.placements() {
            prop_assert!(runs.iter().any(|r| r.is_at(placement)), "{} is not a run", placement);
        }
        prop_assert!(validation::is_connected(puzzle.placements()));
        let report = validation::validate(&puzzle, None);
        prop_assert!(report.is_valid(), "{}", report);
    }
}
