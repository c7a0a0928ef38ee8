use std::{
    fs,
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use fjalekryq_core::Dictionary;
use serde::{Serialize, de::DeserializeOwned};

use crate::CliError;

pub(crate) fn read_dictionary(path: &Path) -> Result<Dictionary, CliError> {
    let text = read_text(path)?;
    let dictionary = Dictionary::parse(&text).map_err(|source| CliError::Dictionary {
        path: path.to_owned(),
        source,
    })?;
    log::info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Writes pretty JSON to `path`, or to standard output when `path` is `None`.
pub(crate) fn write_json<T: Serialize>(path: Option<&Path>, value: &T) -> Result<(), CliError> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|source| CliError::Serialize { source })?;
    json.push('\n');
    match path {
        Some(path) => fs::write(path, json).map_err(|source| CliError::Write {
            path: path.to_owned(),
            source,
        }),
        None => io::stdout()
            .lock()
            .write_all(json.as_bytes())
            .map_err(|source| CliError::Write {
                path: PathBuf::from("-"),
                source,
            }),
    }
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
