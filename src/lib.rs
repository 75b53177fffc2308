//! Word Duel
//!
//! Core for a two-player word-guessing duel: duplicate-aware comparison of
//! a guess against a target, compact integer encodings for verdicts, and a
//! round state machine with a monotonic per-letter knowledge pool.
//!
//! # Quick Start
//!
//! ```rust
//! use word_duel::core::{Comparison, Word};
//! use word_duel::round::{Player, RoundConfig, RoundState};
//!
//! // Compare a guess against a target
//! let guess = Word::new("straw").unwrap();
//! let target = Word::new("squat").unwrap();
//! let comparison = Comparison::calculate(&guess, &target).unwrap();
//!
//! // Pack the verdicts for storage, unpack them losslessly
//! let stored = comparison.encode();
//! assert_eq!(Comparison::decode(stored), comparison);
//!
//! // Drive a round
//! let round = RoundState::start(target, Player::P1, RoundConfig::default()).unwrap();
//! let round = round.submit_turn(&guess).unwrap();
//! assert_eq!(round.guess_num(), 1);
//! assert_eq!(round.current_player(), Player::P2);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod round;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
