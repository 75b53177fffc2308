//! Encoded value inspection
//!
//! Decodes the two integer encodings used for storage and transport and
//! pretty-prints them. Handy when poking at persisted rounds by hand.

use crate::core::{Comparison, LetterPool, Word};
use crate::output::{print_decoded_comparison, print_decoded_letterpool};

/// Decode and print an encoded guess comparison
///
/// With `guess` supplied, the decoded verdicts are shown against its
/// letters.
///
/// # Errors
/// Returns an error if `guess` is not a valid word or its length doesn't
/// match the number of encoded verdicts.
pub fn inspect_comparison(value: u16, guess: Option<&str>) -> Result<(), String> {
    let comparison = Comparison::decode(value);

    let word = guess
        .map(Word::new)
        .transpose()
        .map_err(|e| format!("Invalid guess word: {e}"))?;

    if let Some(word) = &word
        && word.len() != comparison.len()
    {
        return Err(format!(
            "Guess {} has {} letters but the encoded comparison covers {}",
            word.text().to_uppercase(),
            word.len(),
            comparison.len()
        ));
    }

    print_decoded_comparison(value, &comparison, word.as_ref());
    Ok(())
}

/// Decode and print an encoded letterpool
///
/// # Errors
/// Returns an error if the value sets bits beyond the 52 the letterpool
/// reserves.
pub fn inspect_letterpool(value: u64) -> Result<(), String> {
    let pool = LetterPool::decode(value).map_err(|e| e.to_string())?;
    print_decoded_letterpool(value, &pool);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_without_guess() {
        assert!(inspect_comparison(0b01_11_01_10_11, None).is_ok());
    }

    #[test]
    fn comparison_with_matching_guess() {
        assert!(inspect_comparison(0b01_11_01_10_11, Some("straw")).is_ok());
    }

    #[test]
    fn comparison_with_mismatched_guess() {
        let result = inspect_comparison(0b01_11_01_10_11, Some("ox"));
        assert!(result.is_err());
    }

    #[test]
    fn comparison_with_invalid_guess() {
        assert!(inspect_comparison(0b11, Some("4")).is_err());
    }

    #[test]
    fn letterpool_within_budget() {
        assert!(inspect_letterpool(0).is_ok());
        assert!(inspect_letterpool((1 << 52) - 1).is_ok());
    }

    #[test]
    fn letterpool_past_budget() {
        let result = inspect_letterpool(1 << 52);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("52 bits"));
    }
}
