//! Game-level error kinds
//!
//! All validation is local and synchronous. Operations surface exactly one
//! of these kinds and never retry; user-facing messaging and retry policy
//! belong to the orchestrating layer.

use std::fmt;

/// Errors from comparisons, letterpool decoding, and round transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Guess and target words differ in length.
    LengthMismatch { guess: usize, target: usize },
    /// A word exceeds the eight letters a single comparison can encode.
    WordTooLong(usize),
    /// An encoded letterpool has bits set beyond the 52 reserved for 26
    /// two-bit slots.
    InvalidLetterPoolEncoding(u64),
    /// A transition was attempted on an already completed round.
    InvalidStateTransition,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => {
                write!(
                    f,
                    "Words to compare must have the same length, got {guess} and {target}"
                )
            }
            Self::WordTooLong(len) => {
                write!(
                    f,
                    "Can't encode comparisons for more than 8 letters, got {len}"
                )
            }
            Self::InvalidLetterPoolEncoding(value) => {
                write!(f, "Encoded letterpool {value:#x} uses more than 52 bits")
            }
            Self::InvalidStateTransition => write!(f, "Round is already complete"),
        }
    }
}

impl std::error::Error for GameError {}
