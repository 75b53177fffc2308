//! Round rules fixed at start

/// Rules for one round, chosen when the round starts.
///
/// Passed explicitly into `RoundState::start` rather than read from
/// process-wide constants, so differently configured rounds can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Guesses shared between both players before the round completes.
    pub max_guesses: u32,
}

impl RoundConfig {
    /// Guess budget used when none is configured.
    pub const DEFAULT_MAX_GUESSES: u32 = 6;

    /// Create a config with the given guess budget.
    #[must_use]
    pub const fn new(max_guesses: u32) -> Self {
        Self { max_guesses }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_GUESSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget() {
        assert_eq!(RoundConfig::default().max_guesses, 6);
    }

    #[test]
    fn custom_budget() {
        assert_eq!(RoundConfig::new(10).max_guesses, 10);
    }
}
