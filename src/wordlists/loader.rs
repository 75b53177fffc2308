//! Word list loading
//!
//! Turns bundled entries or a user-supplied file into validated words.
//! Invalid entries are skipped rather than failing the whole list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read a word list from a file, one word per line.
///
/// Blank lines and entries that fail word validation are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_duel::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// assert!(!words.is_empty());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect())
}

/// Validate a slice of embedded entries into words.
///
/// # Examples
/// ```
/// use word_duel::wordlists::WORDS;
/// use word_duel::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Words of exactly the given length.
///
/// Guesses must match the target's length, so commands narrow their
/// candidate pool with this.
#[must_use]
pub fn words_of_length(words: &[Word], len: usize) -> Vec<&Word> {
    words.iter().filter(|w| w.len() == len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_entries_become_words() {
        let words = words_from_slice(&["squat", "straw", "ox"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "squat");
        assert_eq!(words[2].text(), "ox");
    }

    #[test]
    fn invalid_slice_entries_are_dropped() {
        let words = words_from_slice(&["squat", "p1zza", "", "straw"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "squat");
        assert_eq!(words[1].text(), "straw");
    }

    #[test]
    fn empty_slice_gives_empty_list() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn length_filter_narrows_candidates() {
        let words = words_from_slice(&["squat", "ox", "straw", "burden"]);

        let five = words_of_length(&words, 5);
        assert_eq!(five.len(), 2);
        assert!(five.iter().all(|w| w.len() == 5));

        assert!(words_of_length(&words, 3).is_empty());
    }

    #[test]
    fn missing_file_errors() {
        assert!(load_from_file("no/such/wordlist.txt").is_err());
    }

    #[test]
    fn bundled_entries_all_validate() {
        use crate::wordlists::WORDS;

        assert_eq!(words_from_slice(WORDS).len(), WORDS.len());
    }
}
