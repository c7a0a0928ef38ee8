use std::process::ExitCode;

use fjalekryq_core::Dictionary;
use fjalekryq_generator::{
    DayConfig, GeneratedPuzzle, GeneratorConfig, MIN_POOL_WORD_LEN, PuzzleGenerator, PuzzleSeed,
    Thresholds, weekly_schedule,
};
use rayon::prelude::*;

use crate::{CliError, GenerateArgs, PuzzleEntry, SearchArgs, WeekArgs, files};

pub(crate) fn generate(args: &GenerateArgs) -> Result<ExitCode, CliError> {
    let dictionary = files::read_dictionary(&args.words)?;
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);

    let (day_index, day, config, pool) = match args.day {
        Some(index) => {
            let index = usize::from(index);
            let schedule = weekly_schedule();
            let day = schedule[index];
            (index, Some(day.name), day.generator_config(), day.pool(&dictionary))
        }
        None => (
            0,
            None,
            GeneratorConfig::new(args.size, Thresholds::new(args.min_words, args.min_letters)),
            dictionary.pool(MIN_POOL_WORD_LEN..=args.size),
        ),
    };
    let config = apply_search(config, &args.search);
    let name = day.map_or_else(|| format!("{0}x{0}", config.grid_size), str::to_owned);

    let generated = PuzzleGenerator::new(config)
        .generate_with_seed(&pool, seed)
        .map_err(|source| CliError::Generate { name, source })?;
    let entry = PuzzleEntry::new(day_index, day, &generated);
    files::write_json(args.output.as_deref(), &entry)?;

    if args.output.is_some() {
        print_summary(&entry.label(), &generated);
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn week(args: &WeekArgs) -> Result<ExitCode, CliError> {
    let dictionary = files::read_dictionary(&args.words)?;
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    log::info!("generating the week from seed {seed}");

    let results = weekly_schedule()
        .into_par_iter()
        .enumerate()
        .map(|(index, day)| generate_day(&dictionary, &args.search, seed, index, &day))
        .collect::<Vec<_>>();

    let mut entries = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok((entry, generated)) => {
                if args.output.is_some() {
                    print_summary(&entry.label(), &generated);
                }
                entries.push(entry);
            }
            Err(err) => {
                log::error!("{err}");
                failed += 1;
            }
        }
    }
    files::write_json(args.output.as_deref(), &entries)?;

    if failed > 0 {
        eprintln!("{failed} of 7 days could not be generated");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn generate_day(
    dictionary: &Dictionary,
    search: &SearchArgs,
    week_seed: PuzzleSeed,
    index: usize,
    day: &DayConfig,
) -> Result<(PuzzleEntry, GeneratedPuzzle), CliError> {
    let pool = day.pool(dictionary);
    log::debug!("{}: {} words in pool", day.name, pool.len());
    let config = apply_search(day.generator_config(), search);
    let generated = PuzzleGenerator::new(config)
        .generate_with_seed(&pool, week_seed.derive("day", index as u64))
        .map_err(|source| CliError::Generate {
            name: day.name.to_owned(),
            source,
        })?;
    Ok((PuzzleEntry::new(index, Some(day.name), &generated), generated))
}

fn apply_search(mut config: GeneratorConfig, search: &SearchArgs) -> GeneratorConfig {
    if let Some(attempts) = search.attempts {
        config = config.with_max_attempts(attempts);
    }
    if let Some(passes) = search.passes {
        config = config.with_max_passes(passes);
    }
    config
        .with_seed_policy(search.seed_word.into())
        .with_relax(!search.no_relax)
}

fn print_summary(label: &str, generated: &GeneratedPuzzle) {
    let stats = &generated.stats;
    println!("{label}:");
    println!("  Seed: {}", generated.seed);
    println!(
        "  Words: {}, letters: {}, score: {}",
        generated.puzzle.word_count(),
        generated.puzzle.letter_count(),
        stats.score
    );
    println!(
        "  Attempts: {}{}",
        stats.attempts,
        if stats.relaxed {
            format!(" (relaxed to {})", stats.thresholds)
        } else {
            String::new()
        }
    );
    println!("{}", generated.puzzle);
}
