//! Aggregate per-letter knowledge across a round
//!
//! The letterpool keeps the best-known verdict for each of the 26 alphabet
//! letters. Its encoding looks like the guess encoding (two bits per slot)
//! but follows a different contract: 0b00 means an unused letter here, so
//! decoding always reads exactly 26 slots and zero is never a terminator.
//! The two schemes share the verdict vocabulary and nothing else.

use super::{Comparison, GameError, Verdict, Word};

/// Number of letterpool slots, one per alphabet letter.
pub const ALPHABET_LETTERS: usize = 26;

/// Bits the encoded letterpool may occupy (26 slots of 2 bits, past any
/// 32-bit word).
const POOL_BITS: u32 = 2 * ALPHABET_LETTERS as u32;

/// Best-known verdict for each letter a-z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPool {
    slots: [Verdict; ALPHABET_LETTERS],
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterPool {
    /// A pool with every letter unused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Verdict::Unused; ALPHABET_LETTERS],
        }
    }

    /// All 26 slots, index 0 holding 'a'.
    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Verdict; ALPHABET_LETTERS] {
        &self.slots
    }

    /// Best-known verdict for an ASCII lowercase letter.
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'a'..=b'z'`.
    #[inline]
    #[must_use]
    pub fn verdict_for(&self, letter: u8) -> Verdict {
        self.slots[slot_index(letter)]
    }

    /// Fold a turn's verdicts into the pool, returning the merged pool.
    ///
    /// Each guessed letter's slot keeps the stronger of its current verdict
    /// and the turn's, so a green slot never downgrades. The receiver is
    /// left untouched.
    #[must_use]
    pub fn merge(&self, guess: &Word, comparison: &Comparison) -> Self {
        debug_assert_eq!(guess.len(), comparison.len());

        let mut merged = *self;
        for (&letter, &verdict) in guess.bytes().iter().zip(comparison.verdicts()) {
            let slot = slot_index(letter);
            merged.slots[slot] = merged.slots[slot].strongest(verdict);
        }
        merged
    }

    /// Whether the pool already rules a word out as a useful guess.
    ///
    /// True when the word contains a letter known to be black. A black slot
    /// means every observed occurrence of the letter went unmatched, so the
    /// letter cannot be in the target.
    #[must_use]
    pub fn rules_out(&self, word: &Word) -> bool {
        word.bytes()
            .iter()
            .any(|&letter| self.verdict_for(letter) == Verdict::Black)
    }

    /// Pack all 26 slots into a u64, the slot for 'a' in the least
    /// significant pair.
    #[must_use]
    pub fn encode(&self) -> u64 {
        let mut encoded = 0u64;
        for (i, verdict) in self.slots.iter().enumerate() {
            encoded |= u64::from(verdict.bits()) << (2 * i);
        }
        encoded
    }

    /// Unpack a u64 produced by [`LetterPool::encode`].
    ///
    /// Always reads exactly 26 two-bit slots; zero slots are ordinary
    /// unused letters, not a terminator.
    ///
    /// # Errors
    /// Returns `GameError::InvalidLetterPoolEncoding` if any bit beyond the
    /// 52 reserved is set.
    pub fn decode(encoded: u64) -> Result<Self, GameError> {
        if encoded >> POOL_BITS != 0 {
            return Err(GameError::InvalidLetterPoolEncoding(encoded));
        }

        let mut slots = [Verdict::Unused; ALPHABET_LETTERS];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Verdict::from_bits(((encoded >> (2 * i)) & 0b11) as u8);
        }

        Ok(Self { slots })
    }
}

fn slot_index(letter: u8) -> usize {
    debug_assert!(
        letter.is_ascii_lowercase(),
        "letterpool slots cover a-z, got {letter:#x}"
    );
    (letter - b'a') as usize
}
