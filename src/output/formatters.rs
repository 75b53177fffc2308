//! Formatting utilities for terminal output

use crate::core::{Comparison, LetterPool, Verdict};
use crate::round::RoundState;
use colored::Colorize;

/// Format a comparison as an emoji string
#[must_use]
pub fn comparison_to_emoji(comparison: &Comparison) -> String {
    comparison
        .verdicts()
        .iter()
        .map(|verdict| match verdict {
            Verdict::Green => '🟩',
            Verdict::Yellow => '🟨',
            Verdict::Black => '⬛',
            Verdict::Unused => '⬜',
        })
        .collect()
}

/// Color a guessed word letter by letter according to its verdicts
#[must_use]
pub fn colored_guess(word: &str, comparison: &Comparison) -> String {
    word.to_uppercase()
        .chars()
        .zip(comparison.verdicts())
        .map(|(letter, verdict)| colored_letter(letter, *verdict))
        .collect()
}

/// Render the letterpool as a single a-z line, each letter colored by its
/// best-known verdict
#[must_use]
pub fn letterpool_line(pool: &LetterPool) -> String {
    pool.slots()
        .iter()
        .enumerate()
        .map(|(i, verdict)| {
            let letter = (b'a' + i as u8) as char;
            colored_letter(letter.to_ascii_uppercase(), *verdict)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the consumed guess budget, e.g. "3/6"
#[must_use]
pub fn guess_budget(state: &RoundState) -> String {
    format!("{}/{}", state.guess_num(), state.config().max_guesses)
}

fn colored_letter(letter: char, verdict: Verdict) -> String {
    let text = letter.to_string();
    match verdict {
        Verdict::Green => text.green().bold().to_string(),
        Verdict::Yellow => text.yellow().bold().to_string(),
        Verdict::Black => text.dimmed().to_string(),
        Verdict::Unused => text.normal().to_string(),
    }
}
