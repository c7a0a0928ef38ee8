//! Approved word lists.
//!
//! A dictionary is a plain-text list with one word per line. Words are
//! trimmed and uppercased; blank lines and lines starting with `#` are
//! skipped.

use std::{collections::HashSet, ops::RangeBounds};

use unicode_normalization::{UnicodeNormalization as _, is_nfc};

use crate::{Word, WordError, validation::WordSet};

/// An ordered, duplicate-free list of words.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::Dictionary;
///
/// let dictionary = Dictionary::parse("# food\nkafë\nbukë\n\nKAFË\nujë\n")?;
/// assert_eq!(dictionary.len(), 3);
/// assert!(dictionary.contains("BUKË"));
///
/// let four: Vec<_> = dictionary.pool(4..=4).iter().map(|w| w.to_string()).collect();
/// assert_eq!(four, ["KAFË", "BUKË"]);
/// # Ok::<(), fjalekryq_core::DictionaryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<String>,
}

/// A line of a word list that is not a valid word.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {cause}")]
pub struct DictionaryError {
    /// One-based line number.
    pub line: usize,
    /// Why the line was rejected.
    pub cause: WordError,
}

impl Dictionary {
    /// Parses a word list.
    ///
    /// # Errors
    ///
    /// Returns the first line that is neither blank, a comment, nor a word.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::default();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let word = Word::new(line.to_uppercase())
                .map_err(|cause| DictionaryError { line: i + 1, cause })?;
            dictionary.insert(word);
        }
        Ok(dictionary)
    }

    /// Adds `word` unless it is already present. Returns `true` if added.
    pub fn insert(&mut self, word: Word) -> bool {
        if !self.index.insert(word.as_str().to_owned()) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Returns `true` if `text` is in the dictionary. Matching is exact
    /// after Unicode normalization, so `Ë` and `E\u{308}` are the same.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        if is_nfc(text) {
            self.index.contains(text)
        } else {
            self.index.contains(&text.nfc().collect::<String>())
        }
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Returns the words whose letter count lies in `lens`, in first-seen
    /// order.
    #[must_use]
    pub fn pool<R: RangeBounds<usize>>(&self, lens: R) -> Vec<Word> {
        self.words
            .iter()
            .filter(|word| lens.contains(&word.len()))
            .cloned()
            .collect()
    }
}

impl WordSet for Dictionary {
    fn contains_word(&self, text: &str) -> bool {
        self.contains(text)
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut dictionary = Self::default();
        for word in iter {
            dictionary.insert(word);
        }
        dictionary
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
