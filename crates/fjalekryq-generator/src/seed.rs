use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generation run.
///
/// Seeds print and parse as 64 lowercase hex digits, so a puzzle can be
/// regenerated from the seed shown next to it.
///
/// # Examples
///
/// ```
/// use fjalekryq_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
///
/// // derived seeds are stable and differ by label and index
/// assert_eq!(seed.derive("attempt", 3), seed.derive("attempt", 3));
/// assert_ne!(seed.derive("attempt", 3), seed.derive("attempt", 4));
/// assert_ne!(seed.derive("attempt", 3), seed.derive("relaxed", 3));
/// # Ok::<(), fjalekryq_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} at offset {index}")]
    InvalidDigit {
        /// Offset of the character.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives an independent child seed.
    ///
    /// The child is the SHA-256 digest of this seed, `label` and `index`, so
    /// attempt `i` of a phase always sees the same randomness no matter how
    /// many attempts ran before it.
    #[must_use]
    pub fn derive(&self, label: &str, index: u64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        hasher.update(index.to_le_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns a random number generator seeded with this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl From<u64> for PuzzleSeed {
    fn from(value: u64) -> Self {
        Self(Sha256::digest(value.to_le_bytes()).into())
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength { len });
        }
        let nibbles = s
            .char_indices()
            .map(|(index, ch)| {
                ch.to_digit(16)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(SeedParseError::InvalidDigit { index, ch })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}
