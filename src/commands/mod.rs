//! Command implementations

pub mod inspect;
pub mod play;
pub mod simulate;

pub use inspect::{inspect_comparison, inspect_letterpool};
pub use play::run_play;
pub use simulate::{SimulationResult, run_simulation};
