//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_decoded_comparison, print_decoded_letterpool, print_round_result,
    print_simulation_result, print_turn,
};
