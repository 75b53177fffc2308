//! Per-letter verdicts shared by both integer encodings
//!
//! A verdict's discriminant is its 2-bit wire code:
//! - Green (letter in correct spot): 0b11 (3)
//! - Yellow (letter in word, but incorrect spot): 0b10 (2)
//! - Black (letter not in word): 0b01 (1)
//! - Unused bits: 0b00 (0)
//!
//! The guess encoding uses 0b00 as its terminator, so the three real
//! verdicts must stay nonzero. Discriminant order doubles as merge
//! precedence: Green > Yellow > Black > Unused.

use std::fmt;

/// Verdict for a single letter of a guess, or for a letterpool slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Verdict {
    /// No information about the letter yet.
    Unused = 0b00,
    /// The letter is not attributable to the target.
    Black = 0b01,
    /// The letter is in the target but in the wrong position.
    Yellow = 0b10,
    /// The letter is in the correct position.
    Green = 0b11,
}

impl Verdict {
    /// The verdict's 2-bit wire code.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a 2-bit wire code.
    ///
    /// Only the two least significant bits are read.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b01 => Self::Black,
            0b10 => Self::Yellow,
            0b11 => Self::Green,
            _ => Self::Unused,
        }
    }

    /// Keep the stronger of two verdicts.
    ///
    /// Precedence is Green > Yellow > Black > Unused, so a slot that has
    /// been seen green never weakens again.
    #[inline]
    #[must_use]
    pub fn strongest(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unused => "unused",
            Self::Black => "black",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_wire_codes() {
        assert_eq!(Verdict::Unused.bits(), 0b00);
        assert_eq!(Verdict::Black.bits(), 0b01);
        assert_eq!(Verdict::Yellow.bits(), 0b10);
        assert_eq!(Verdict::Green.bits(), 0b11);
    }

    #[test]
    fn from_bits_roundtrip() {
        for verdict in [
            Verdict::Unused,
            Verdict::Black,
            Verdict::Yellow,
            Verdict::Green,
        ] {
            assert_eq!(Verdict::from_bits(verdict.bits()), verdict);
        }
    }

    #[test]
    fn from_bits_reads_only_two_bits() {
        assert_eq!(Verdict::from_bits(0b100), Verdict::Unused);
        assert_eq!(Verdict::from_bits(0b111), Verdict::Green);
        assert_eq!(Verdict::from_bits(0xFE), Verdict::Yellow);
    }

    #[test]
    fn strongest_follows_precedence() {
        use Verdict::{Black, Green, Unused, Yellow};

        assert_eq!(Green.strongest(Yellow), Green);
        assert_eq!(Yellow.strongest(Green), Green);
        assert_eq!(Yellow.strongest(Black), Yellow);
        assert_eq!(Black.strongest(Unused), Black);
        assert_eq!(Unused.strongest(Unused), Unused);
        assert_eq!(Green.strongest(Black), Green);
    }

    #[test]
    fn display_names() {
        assert_eq!(Verdict::Green.to_string(), "green");
        assert_eq!(Verdict::Unused.to_string(), "unused");
    }
}
