//! Benchmarks for crossword puzzle generation.
//!
//! # Benchmarks
//!
//! - **`attempt`**: a single placement attempt on a 9x9 grid, the unit of
//!   work the generator repeats.
//! - **`generator_monday`**: a full 7x7 generation with Monday's thresholds
//!   and a reduced attempt budget.
//!
//! # Test Data
//!
//! An inline list of common Albanian words, and three fixed seeds so that
//! every run measures the same searches:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use fjalekryq_core::Word;
use fjalekryq_generator::{
    GeneratorConfig, PuzzleGenerator, PuzzleSeed, Thresholds, search, weekly_schedule,
};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const WORDS: &[&str] = &[
    "KAFË", "BUKË", "UJË", "DUA", "MAL", "ERA", "DET", "ARI", "ZOG", "LAT", "TOKË", "DORË", "SHI",
    "NATË", "DITË", "RRUGË", "LULE", "MOLLË", "DARKË", "ZEMËR", "QIELL", "LUMË", "DIELL", "MIK",
    "FLE", "HËNË", "YLL", "VERË", "DIMËR", "PYLL", "KALË", "MACE", "QEN", "DERË", "MUR", "ARË",
];

fn pool() -> Vec<Word> {
    WORDS.iter().map(|w| Word::new(*w).unwrap()).collect()
}

fn bench_attempt(c: &mut Criterion) {
    let pool = pool();
    let config = GeneratorConfig::new(9, Thresholds::new(13, 35));

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("attempt", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| search::run_attempt(&pool, &config, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_monday(c: &mut Criterion) {
    let pool = pool();
    let config = weekly_schedule()[0].generator_config().with_max_attempts(20);
    let generator = PuzzleGenerator::new(config);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_monday", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(&pool, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_attempt,
        bench_generator_monday
);
criterion_main!(benches);
