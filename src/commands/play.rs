//! Interactive hot-seat round
//!
//! Two players share one terminal and alternate guesses against the same
//! hidden target. Guessed words are checked against the word list before
//! they reach the round, the same way the external dictionary service vets
//! guesses ahead of submission.

use crate::core::{MAX_COMPARE_LETTERS, Word};
use crate::output::{print_board, print_round_result};
use crate::round::{Player, RoundConfig, RoundState};
use rand::prelude::IndexedRandom;
use std::io::{self, Write};

/// Run an interactive hot-seat round
///
/// With `target` supplied the round uses that word; otherwise a random
/// playable word is drawn from the list.
///
/// # Errors
///
/// Returns an error if the target is unusable, the word list has no
/// playable words, or reading user input fails.
pub fn run_play(words: &[Word], target: Option<&str>, config: RoundConfig) -> Result<(), String> {
    let target_word = resolve_target(words, target)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Duel - Hot-Seat Round                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "The target word has {} letters. {} guesses between both players.",
        target_word.len(),
        config.max_guesses
    );
    println!("Commands: 'pass' to skip your turn, 'quit' to abandon the round\n");

    let mut state =
        RoundState::start(target_word, Player::P1, config).map_err(|e| e.to_string())?;

    while !state.is_complete() {
        let player = state.current_player();
        let input = get_user_input(&format!("{player}, enter your guess"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!(
                    "\n👋 Round abandoned. The word was {}.\n",
                    state.target_word().text().to_uppercase()
                );
                return Ok(());
            }
            "pass" | "skip" => {
                // An externally decided skip: the opponent takes over but no
                // guess is consumed
                state = state.skip_turn().map_err(|e| e.to_string())?;
                println!("{player} passes the turn.\n");
                continue;
            }
            _ => {}
        }

        let guess = match Word::new(input.as_str()) {
            Ok(word) => word,
            Err(e) => {
                println!("Invalid guess: {e}\n");
                continue;
            }
        };

        if guess.len() != state.target_word().len() {
            println!(
                "Guess must have {} letters, got {}.\n",
                state.target_word().len(),
                guess.len()
            );
            continue;
        }

        if !words.contains(&guess) {
            println!("{} is not in the word list.\n", guess.text().to_uppercase());
            continue;
        }

        state = state.submit_turn(&guess).map_err(|e| e.to_string())?;
        print_board(&state);
    }

    print_round_result(&state);
    Ok(())
}

/// Pick the round's target: the supplied word, or a random playable one
fn resolve_target(words: &[Word], target: Option<&str>) -> Result<Word, String> {
    match target {
        Some(text) => {
            let word = Word::new(text).map_err(|e| format!("Invalid target word: {e}"))?;
            if word.len() > MAX_COMPARE_LETTERS {
                return Err(format!(
                    "Target words are capped at {MAX_COMPARE_LETTERS} letters, got {}",
                    word.len()
                ));
            }
            Ok(word)
        }
        None => {
            let playable: Vec<&Word> = words
                .iter()
                .filter(|w| w.len() <= MAX_COMPARE_LETTERS)
                .collect();

            playable
                .choose(&mut rand::rng())
                .map(|&w| w.clone())
                .ok_or_else(|| "Word list has no playable words".to_string())
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}
