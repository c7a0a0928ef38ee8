//! Letter representation.
//!
//! The Albanian alphabet contains letters such as `Ë` and `Ç` that may be
//! written either precomposed or as a base letter followed by a combining
//! mark. A [`Letter`] is therefore one extended grapheme cluster rather than
//! one `char`, stored in Unicode normalization form C, so that both
//! spellings occupy exactly one grid cell and compare equal.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use tinyvec::ArrayVec;
use unicode_normalization::UnicodeNormalization as _;
use unicode_segmentation::UnicodeSegmentation as _;

/// Maximum number of `char`s a single letter may be composed of.
pub const MAX_LETTER_CHARS: usize = 4;

/// A single letter occupying one grid cell.
///
/// # Examples
///
/// ```
/// use fjalekryq_core::Letter;
///
/// let letters = Letter::split("KAFË")?;
/// assert_eq!(letters.len(), 4);
/// assert_eq!(letters[3].to_string(), "Ë");
///
/// // A decomposed `E` + combining diaeresis is the same letter.
/// let letters = Letter::split("UJE\u{308}")?;
/// assert_eq!(letters.len(), 3);
/// assert_eq!(letters[2], Letter::new("Ë")?);
/// # Ok::<(), fjalekryq_core::LetterError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter {
    chars: ArrayVec<[char; MAX_LETTER_CHARS]>,
}

/// Errors returned when text cannot be turned into letters.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterError {
    /// The input was empty.
    #[display("letter is empty")]
    Empty,
    /// The input held more than one grapheme.
    #[display("{text:?} is more than one letter")]
    MultipleGraphemes {
        /// The offending input.
        text: String,
    },
    /// The grapheme does not start with an alphabetic character.
    #[display("{grapheme:?} is not a letter")]
    NotAlphabetic {
        /// The offending grapheme.
        grapheme: String,
    },
    /// The grapheme is made of too many code points to store inline.
    #[display("{grapheme:?} has too many code points")]
    TooLong {
        /// The offending grapheme.
        grapheme: String,
    },
}

impl Letter {
    /// Creates a letter from a single grapheme.
    ///
    /// # Errors
    ///
    /// Returns an error if `grapheme` is empty, spans several graphemes, does
    /// not start with an alphabetic character, or is too long.
    pub fn new(grapheme: &str) -> Result<Self, LetterError> {
        let mut graphemes = grapheme.graphemes(true);
        let Some(first) = graphemes.next() else {
            return Err(LetterError::Empty);
        };
        if graphemes.next().is_some() {
            return Err(LetterError::MultipleGraphemes {
                text: grapheme.to_owned(),
            });
        }
        Self::from_grapheme(first)
    }

    /// Splits `text` into letters, one per grapheme cluster.
    ///
    /// # Errors
    ///
    /// Returns an error for the first grapheme that is not a valid letter.
    pub fn split(text: &str) -> Result<Vec<Self>, LetterError> {
        text.graphemes(true).map(Self::from_grapheme).collect()
    }

    fn from_grapheme(grapheme: &str) -> Result<Self, LetterError> {
        if !grapheme.chars().next().is_some_and(char::is_alphabetic) {
            return Err(LetterError::NotAlphabetic {
                grapheme: grapheme.to_owned(),
            });
        }
        let mut chars = ArrayVec::new();
        for ch in grapheme.nfc() {
            if chars.try_push(ch).is_some() {
                return Err(LetterError::TooLong {
                    grapheme: grapheme.to_owned(),
                });
            }
        }
        Ok(Self { chars })
    }

    /// Returns the code points making up this letter, in NFC.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        self.chars.as_slice()
    }

    /// Appends this letter to `out`.
    pub fn push_to(&self, out: &mut String) {
        out.extend(self.chars.iter());
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars.iter() {
            f.write_char(*ch)?;
        }
        Ok(())
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_counts_graphemes() {
        let letters = Letter::split("SHTËPI").unwrap();
        assert_eq!(letters.len(), 6);
        assert_eq!(letters[3], Letter::new("Ë").unwrap());

        let decomposed = Letter::split("NE\u{308}NE\u{308}").unwrap();
        assert_eq!(decomposed.len(), 4);
        assert_eq!(decomposed[1].chars(), &['Ë']);
        assert_eq!(decomposed[1].to_string(), "Ë");
        assert_eq!(decomposed, Letter::split("NËNË").unwrap());
    }

    #[test]
    fn test_rejects_non_letters() {
        assert_eq!(Letter::new(""), Err(LetterError::Empty));
        assert!(matches!(
            Letter::new("AB"),
            Err(LetterError::MultipleGraphemes { .. })
        ));
        assert!(matches!(
            Letter::new("7"),
            Err(LetterError::NotAlphabetic { .. })
        ));
        assert!(matches!(
            Letter::split("MA L"),
            Err(LetterError::NotAlphabetic { grapheme }) if grapheme == " "
        ));
    }

    #[test]
    fn test_rejects_overlong_grapheme() {
        // composes to `Ë` plus four marks
        let overlong = "E\u{308}\u{301}\u{302}\u{303}\u{304}";
        assert!(matches!(
            Letter::new(overlong),
            Err(LetterError::TooLong { .. })
        ));
    }

    #[test]
    fn test_push_to() {
        let mut out = String::new();
        for letter in Letter::split("UJË").unwrap() {
            letter.push_to(&mut out);
        }
        assert_eq!(out, "UJË");
    }
}
