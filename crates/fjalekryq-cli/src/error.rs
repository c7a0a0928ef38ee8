use std::{io, path::PathBuf};

use fjalekryq_core::DictionaryError;
use fjalekryq_generator::GenerateError;

/// Errors reported by the command line tool.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CliError {
    /// A file could not be read.
    #[display("cannot read {}: {source}", path.display())]
    Read {
        /// The file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// An output could not be written.
    #[display("cannot write {}: {source}", path.display())]
    Write {
        /// The file, or `-` for standard output.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A word list contains an invalid line.
    #[display("{}: {source}", path.display())]
    Dictionary {
        /// The word list.
        path: PathBuf,
        /// The offending line.
        source: DictionaryError,
    },
    /// A puzzle file is not valid JSON of the expected shape.
    #[display("{}: {source}", path.display())]
    Json {
        /// The puzzle file.
        path: PathBuf,
        /// The parse error.
        source: serde_json::Error,
    },
    /// Puzzles could not be serialized.
    #[display("cannot serialize puzzles: {source}")]
    Serialize {
        /// The underlying error.
        source: serde_json::Error,
    },
    /// Generation failed.
    #[display("{name}: {source}")]
    Generate {
        /// What was being generated.
        name: String,
        /// Why it failed.
        source: GenerateError,
    },
}
