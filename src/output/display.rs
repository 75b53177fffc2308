//! Display functions for command results

use super::formatters::{colored_guess, comparison_to_emoji, guess_budget, letterpool_line};
use crate::commands::SimulationResult;
use crate::core::{Comparison, LetterPool, Word};
use crate::round::{RoundState, Turn};
use colored::Colorize;

/// Print a single turn of the round
pub fn print_turn(turn_number: usize, turn: &Turn) {
    println!(
        "  {turn_number}: {} {}",
        colored_guess(turn.guessed_word().text(), turn.verdicts()),
        comparison_to_emoji(turn.verdicts())
    );
}

/// Print the round's board: turn history, letterpool, and guess budget
pub fn print_board(state: &RoundState) {
    println!("\n{}", "─".repeat(60).cyan());

    if state.turns().is_empty() {
        println!("  (no guesses yet)");
    } else {
        for (i, turn) in state.turns().iter().enumerate() {
            print_turn(i + 1, turn);
        }
    }

    println!("\n  Letters: {}", letterpool_line(state.letterpool()));
    println!("  Guesses: {}", guess_budget(state));
    println!("{}", "─".repeat(60).cyan());
}

/// Print the outcome of a finished round
pub fn print_round_result(state: &RoundState) {
    println!();
    if state.is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", state.guess_num())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Out of guesses! The word was {}",
                state.target_word().text().to_uppercase()
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Rounds:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Solved:           {} ({:.1}%)",
        format!("{}", result.solved).green(),
        result.solve_rate * 100.0
    );
    println!(
        "   Failed:           {}",
        format!("{}", result.failed).red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   P1 wins:          {}", result.p1_wins);
    println!("   P2 wins:          {}", result.p2_wins);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    println!("\n📈 {}", "Guesses per solved round:".bright_cyan().bold());
    let mut guess_counts: Vec<_> = result.guess_distribution.iter().collect();
    guess_counts.sort_unstable_by_key(|&(guesses, _)| *guesses);
    for (guesses, &count) in guess_counts {
        let pct = (count as f64 / result.total_rounds as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guesses}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print a decoded guess comparison
///
/// With a guess word supplied the verdicts are shown against its letters;
/// without one, position indices stand in.
///
/// # Panics
///
/// Panics if a supplied guess has fewer letters than the comparison covers.
pub fn print_decoded_comparison(encoded: u16, comparison: &Comparison, guess: Option<&Word>) {
    println!(
        "\nEncoded comparison {encoded:#06x} covers {} letters",
        comparison.len()
    );

    if let Some(word) = guess {
        println!(
            "  {} {}",
            colored_guess(word.text(), comparison),
            comparison_to_emoji(comparison)
        );
    } else {
        println!("  {}", comparison_to_emoji(comparison));
    }

    for (i, verdict) in comparison.verdicts().iter().enumerate() {
        match guess {
            Some(word) => println!(
                "  {} -> {verdict}",
                (word.letter_at(i) as char).to_ascii_uppercase()
            ),
            None => println!("  position {i} -> {verdict}"),
        }
    }
}

/// Print a decoded letterpool
pub fn print_decoded_letterpool(encoded: u64, pool: &LetterPool) {
    println!("\nEncoded letterpool {encoded:#x}");
    println!("  {}", letterpool_line(pool));
}
