//! Word lists for the duel
//!
//! Stand-in for the external dictionary service: an embedded word list
//! compiled into the binary, plus a loader for custom lists. Entries mix
//! lengths; callers filter by the round's target length.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_COMPARE_LETTERS;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert!(!word.is_empty(), "empty entry in word list");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_fit_the_comparison_budget() {
        for &word in WORDS {
            assert!(
                word.len() <= MAX_COMPARE_LETTERS,
                "Word '{word}' is longer than {MAX_COMPARE_LETTERS} letters"
            );
        }
    }

    #[test]
    fn list_offers_five_letter_words() {
        // The default play length must have plenty of material
        let five = WORDS.iter().filter(|w| w.len() == 5).count();
        assert!(five > 100, "only {five} five-letter words");
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 1024, "Expected 1,024 bundled words");
    }
}
