use std::process::ExitCode;

use fjalekryq_core::{Dictionary, PuzzleError, ValidationReport, validation};

use crate::{CliError, PuzzleEntry, PuzzleFile, ValidateArgs, files};

pub(crate) fn validate(args: &ValidateArgs) -> Result<ExitCode, CliError> {
    let file: PuzzleFile = files::read_json(&args.input)?;
    let dictionary = args
        .words
        .as_deref()
        .map(files::read_dictionary)
        .transpose()?;

    let mut invalid = 0;
    for entry in file.entries() {
        let label = entry.label();
        match check_entry(entry, dictionary.as_ref()) {
            Ok(report) if report.is_valid() => println!("{label}: ok"),
            Ok(report) => {
                invalid += 1;
                println!("{label}: invalid");
                for issue in report.issues() {
                    println!("  {issue}");
                }
            }
            Err(err) => {
                invalid += 1;
                println!("{label}: unreadable: {err}");
            }
        }
        if !scramble_matches(entry) {
            invalid += 1;
            println!("{label}: scrambled board does not hold the solution's letters");
        }
    }

    log::info!("checked {} puzzles, {invalid} problems", file.entries().len());
    if invalid > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Checks the stored solution grid against the entry's own words.
///
/// The grid is taken as written rather than rebuilt, so a file edited by
/// hand is reported issue by issue.
pub(crate) fn check_entry(
    entry: &PuzzleEntry,
    dictionary: Option<&Dictionary>,
) -> Result<ValidationReport, PuzzleError> {
    let grid = entry.record.solution_grid()?;
    let placements = entry.record.placements()?;
    Ok(validation::validate_layout(&grid, &placements, dictionary))
}

/// Returns `true` if the scrambled board is absent or uses exactly the
/// solution's cells and letters.
fn scramble_matches(entry: &PuzzleEntry) -> bool {
    let Some(scrambled) = &entry.scrambled else {
        return true;
    };
    let solution = &entry.record.solution;
    let same_cells = |a: &Vec<Option<String>>, b: &Vec<Option<String>>| {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_some() == y.is_some())
    };
    if scrambled.len() != solution.len()
        || !scrambled.iter().zip(solution).all(|(a, b)| same_cells(a, b))
    {
        return false;
    }
    let letters = |rows: &[Vec<Option<String>>]| {
        let mut letters = rows.iter().flatten().flatten().cloned().collect::<Vec<_>>();
        letters.sort_unstable();
        letters
    };
    letters(scrambled.as_slice()) == letters(solution.as_slice())
}
