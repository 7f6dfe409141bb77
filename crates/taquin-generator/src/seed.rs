//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// Entropy driving one board generation.
///
/// A seed is 32 bytes, displayed and parsed as 64 hexadecimal digits. The
/// same seed always produces the same board for the same dimensions, which
/// makes boards shareable and generation benchmarks reproducible.
///
/// # Examples
///
/// ```
/// use taquin_generator::BoardSeed;
///
/// let text = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
/// let seed: BoardSeed = text.parse().unwrap();
/// assert_eq!(seed.to_string(), text);
///
/// assert!("not a seed".parse::<BoardSeed>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; Self::LEN]);

impl BoardSeed {
    /// Seed length in bytes.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; Self::LEN];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns the seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Derives the 16-byte shuffle RNG state by hashing the seed with
    /// SHA-256.
    pub(crate) fn rng_state(&self) -> [u8; 16] {
        let digest = Sha256::digest(self.0);
        let mut state = [0; 16];
        state.copy_from_slice(&digest[..16]);
        state
    }
}

impl fmt::Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = ParseBoardSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::LEN * 2 {
            return Err(ParseBoardSeedError::WrongLength { actual: s.len() });
        }
        if !s.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ParseBoardSeedError::InvalidDigit);
        }
        let mut bytes = [0; Self::LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .expect("the string was checked to be hex digits");
        }
        Ok(Self(bytes))
    }
}

/// Rejected seed strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {actual} characters")]
    WrongLength {
        /// Length of the rejected string.
        actual: usize,
    },
    /// The string contains a character that is not a hexadecimal digit.
    #[display("seed contains a non-hex digit")]
    InvalidDigit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_roundtrip() {
        let seed = BoardSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text.len(), 64);
        assert_eq!(text.parse::<BoardSeed>(), Ok(seed));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "abcd".parse::<BoardSeed>(),
            Err(ParseBoardSeedError::WrongLength { actual: 4 })
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let text = "g".repeat(64);
        assert_eq!(
            text.parse::<BoardSeed>(),
            Err(ParseBoardSeedError::InvalidDigit)
        );

        // A sign is not a hex digit even though integer parsing accepts it.
        let text = format!("+{}", "0".repeat(63));
        assert_eq!(
            text.parse::<BoardSeed>(),
            Err(ParseBoardSeedError::InvalidDigit)
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        // 256 bits of entropy; a collision here means the RNG is broken.
        assert_ne!(BoardSeed::random(), BoardSeed::random());
    }

    #[test]
    fn test_rng_state_is_stable() {
        let seed = BoardSeed::from_bytes([0; 32]);
        // SHA-256 of 32 zero bytes, first 16 bytes.
        assert_eq!(
            seed.rng_state(),
            [
                0x66, 0x68, 0x7a, 0xad, 0xf8, 0x62, 0xbd, 0x77, 0x6c, 0x8f, 0xc1, 0x8b, 0x8e,
                0x9f, 0x8e, 0x20,
            ]
        );
    }
}
