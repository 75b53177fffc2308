//! Core domain types for the word duel
//!
//! The fundamental types of the game: validated words, per-letter verdicts,
//! duplicate-aware guess comparison, and the aggregate letterpool, together
//! with the two compact integer encodings used for storage and transport.
//! Everything here is pure and synchronous.

mod comparison;
mod errors;
mod letterpool;
mod verdict;
mod word;

pub use comparison::{Comparison, MAX_COMPARE_LETTERS};
pub use errors::GameError;
pub use letterpool::{ALPHABET_LETTERS, LetterPool};
pub use verdict::Verdict;
pub use word::{Word, WordError};
