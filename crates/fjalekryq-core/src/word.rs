//! Puzzle words.

use std::{
    borrow::Borrow,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};

use unicode_normalization::{UnicodeNormalization as _, is_nfc};

use crate::{Letter, LetterError};

/// Minimum number of letters a word must have.
pub const MIN_WORD_LEN: usize = 2;

/// An immutable word of at least [`MIN_WORD_LEN`] letters.
///
/// The text is stored in Unicode normalization form C. Equality, ordering
/// and hashing use it, so a `Word` can be looked up in a `HashSet<Word>` by
/// `&str`.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::Word;
///
/// let word = Word::new("BUKË")?;
/// assert_eq!(word.len(), 4);
/// assert_eq!(word.as_str(), "BUKË");
/// assert!(Word::new("A").is_err());
/// # Ok::<(), fjalekryq_core::WordError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

/// Errors returned by [`Word::new`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word has fewer than [`MIN_WORD_LEN`] letters.
    #[display("{text:?} has {len} letter(s), words need at least 2")]
    TooShort {
        /// The rejected text.
        text: String,
        /// Number of letters found.
        len: usize,
    },
    /// The word contains something other than letters.
    #[display("{text:?} is not a word: {cause}")]
    InvalidLetter {
        /// The rejected text.
        text: String,
        /// Why the offending grapheme is not a letter.
        cause: LetterError,
    },
}

impl Word {
    /// Creates a word from its text.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::InvalidLetter`] if the text contains a grapheme
    /// that is not a letter, or [`WordError::TooShort`] if it has fewer than
    /// two letters.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = nfc(text.into());
        let letters = match Letter::split(&text) {
            Ok(letters) => letters,
            Err(cause) => return Err(WordError::InvalidLetter { text, cause }),
        };
        if letters.len() < MIN_WORD_LEN {
            let len = letters.len();
            return Err(WordError::TooShort { text, len });
        }
        Ok(Self { text, letters })
    }

    /// Returns the word's text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the word's letters.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the number of letters in the word.
    #[must_use]
    #[expect(clippy::len_without_is_empty, reason = "words are never empty")]
    pub fn len(&self) -> usize {
        self.letters.len()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text)
    }
}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

/// Returns `text` in Unicode normalization form C.
pub(crate) fn nfc(text: String) -> String {
    if is_nfc(&text) {
        text
    } else {
        text.nfc().collect()
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.text, f)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
