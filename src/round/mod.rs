//! Round progression for a two-player duel
//!
//! A round owns the target word, the alternating players, the turn log, and
//! the letterpool. Every transition is pure: the old state goes in by
//! reference and a fresh state comes out, so earlier snapshots stay valid
//! for concurrent readers without any locking.

mod config;
mod state;

pub use config::RoundConfig;
pub use state::{Player, RoundPhase, RoundState, Turn};
