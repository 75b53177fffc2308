//! Round state and its transitions

use std::fmt;

use super::RoundConfig;
use crate::core::{Comparison, GameError, LetterPool, MAX_COMPARE_LETTERS, Word};

/// One of the two duelling players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    /// Player 1
    P1,
    /// Player 2
    P2,
}

impl Player {
    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::P1 => write!(f, "P1"),
            Self::P2 => write!(f, "P2"),
        }
    }
}

/// One guess submission and its resulting verdicts.
///
/// Immutable once appended to the round's turn log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    guessed_word: Word,
    verdicts: Comparison,
}

impl Turn {
    /// The word guessed by the player.
    #[inline]
    #[must_use]
    pub fn guessed_word(&self) -> &Word {
        &self.guessed_word
    }

    /// The verdicts for each letter of the guess.
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &Comparison {
        &self.verdicts
    }
}

/// Lifecycle phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Players are still guessing.
    Active,
    /// The target was guessed or the guess budget ran out.
    Complete,
}

/// Full state of one round.
///
/// Created by [`RoundState::start`]; advanced only through
/// [`RoundState::submit_turn`] and [`RoundState::skip_turn`], both of which
/// return a new state and leave the old one intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target_word: Word,
    current_player: Player,
    guess_num: u32,
    turns: Vec<Turn>,
    letterpool: LetterPool,
    phase: RoundPhase,
    config: RoundConfig,
}

impl RoundState {
    /// Start a fresh round.
    ///
    /// The round begins active with no guesses made, an empty turn log, and
    /// an all-unused letterpool.
    ///
    /// # Errors
    /// Returns `GameError::WordTooLong` if the target exceeds the eight
    /// letters a comparison can encode. Empty targets are unrepresentable:
    /// `Word` construction already rejects them.
    pub fn start(
        target_word: Word,
        start_player: Player,
        config: RoundConfig,
    ) -> Result<Self, GameError> {
        if target_word.len() > MAX_COMPARE_LETTERS {
            return Err(GameError::WordTooLong(target_word.len()));
        }

        Ok(Self {
            target_word,
            current_player: start_player,
            guess_num: 0,
            turns: Vec::new(),
            letterpool: LetterPool::new(),
            phase: RoundPhase::Active,
            config,
        })
    }

    /// Submit the current player's guess.
    ///
    /// Compares the guess against the target, folds the verdicts into the
    /// letterpool, appends a turn, consumes a guess, and hands the turn to
    /// the opponent. The round completes when the guess was fully green or
    /// the guess budget is spent.
    ///
    /// # Errors
    /// - `GameError::InvalidStateTransition` if the round is already
    ///   complete
    /// - `GameError::LengthMismatch` / `GameError::WordTooLong` from the
    ///   comparison, leaving the round unchanged
    pub fn submit_turn(&self, guessed_word: &Word) -> Result<Self, GameError> {
        self.ensure_active()?;

        let verdicts = Comparison::calculate(guessed_word, &self.target_word)?;
        let solved = verdicts.is_all_green();

        let mut next = self.clone();
        next.letterpool = self.letterpool.merge(guessed_word, &verdicts);
        next.turns.push(Turn {
            guessed_word: guessed_word.clone(),
            verdicts,
        });
        next.guess_num += 1;
        next.current_player = self.current_player.opponent();

        if solved || next.guess_num >= self.config.max_guesses {
            next.phase = RoundPhase::Complete;
        }

        Ok(next)
    }

    /// Skip the current player's turn.
    ///
    /// Models an externally decided timeout or pass: the turn goes to the
    /// opponent, but no guess is consumed and no turn is logged.
    ///
    /// # Errors
    /// Returns `GameError::InvalidStateTransition` if the round is already
    /// complete.
    pub fn skip_turn(&self) -> Result<Self, GameError> {
        self.ensure_active()?;

        let mut next = self.clone();
        next.current_player = self.current_player.opponent();
        Ok(next)
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.phase == RoundPhase::Complete {
            return Err(GameError::InvalidStateTransition);
        }
        Ok(())
    }

    /// The word players are trying to guess.
    #[inline]
    #[must_use]
    pub fn target_word(&self) -> &Word {
        &self.target_word
    }

    /// The player whose turn it is.
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// Guesses consumed so far. Starts at 0; skips don't count.
    #[inline]
    #[must_use]
    pub const fn guess_num(&self) -> u32 {
        self.guess_num
    }

    /// History of turns made in the round, oldest first.
    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Aggregate letter knowledge across the round so far.
    #[inline]
    #[must_use]
    pub const fn letterpool(&self) -> &LetterPool {
        &self.letterpool
    }

    /// Current lifecycle phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The rules this round was started with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    /// Whether the round has ended.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    /// Whether the round ended with the target guessed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.turns
            .last()
            .is_some_and(|turn| turn.verdicts.is_all_green())
    }

    /// Guesses left in the budget.
    #[inline]
    #[must_use]
    pub const fn guesses_remaining(&self) -> u32 {
        self.config.max_guesses.saturating_sub(self.guess_num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn round(target: &str) -> RoundState {
        RoundState::start(word(target), Player::P1, RoundConfig::default()).unwrap()
    }

    #[test]
    fn start_produces_fresh_state() {
        let state = round("squat");

        assert_eq!(state.guess_num(), 0);
        assert!(state.turns().is_empty());
        assert_eq!(state.current_player(), Player::P1);
        assert_eq!(state.phase(), RoundPhase::Active);
        assert_eq!(state.letterpool(), &LetterPool::new());
        assert_eq!(state.guesses_remaining(), 6);
        assert!(!state.is_complete());
        assert!(!state.is_solved());
    }

    #[test]
    fn start_rejects_target_past_codec_budget() {
        let result = RoundState::start(word("wonderful"), Player::P1, RoundConfig::default());
        assert_eq!(result, Err(GameError::WordTooLong(9)));
    }

    #[test]
    fn start_accepts_eight_letter_target() {
        let state =
            RoundState::start(word("escapade"), Player::P2, RoundConfig::default()).unwrap();
        assert_eq!(state.current_player(), Player::P2);
    }

    #[test]
    fn submit_consumes_guess_and_toggles_player() {
        let state = round("squat");
        let next = state.submit_turn(&word("straw")).unwrap();

        assert_eq!(next.guess_num(), 1);
        assert_eq!(next.current_player(), Player::P2);
        assert_eq!(next.turns().len(), 1);
        assert_eq!(next.turns()[0].guessed_word(), &word("straw"));
        assert_eq!(next.phase(), RoundPhase::Active);

        let after_two = next.submit_turn(&word("burnt")).unwrap();
        assert_eq!(after_two.guess_num(), 2);
        assert_eq!(after_two.current_player(), Player::P1);
    }

    #[test]
    fn submit_merges_letterpool() {
        let state = round("squat");
        let next = state.submit_turn(&word("straw")).unwrap();

        assert_eq!(next.letterpool().verdict_for(b's'), Verdict::Green);
        assert_eq!(next.letterpool().verdict_for(b't'), Verdict::Yellow);
        assert_eq!(next.letterpool().verdict_for(b'r'), Verdict::Black);
    }

    #[test]
    fn submit_leaves_old_state_intact() {
        let state = round("squat");
        let snapshot = state.clone();

        let _next = state.submit_turn(&word("straw")).unwrap();

        assert_eq!(state, snapshot);
        assert_eq!(state.guess_num(), 0);
        assert!(state.turns().is_empty());
    }

    #[test]
    fn correct_guess_completes_round() {
        let state = round("squat");
        let next = state.submit_turn(&word("squat")).unwrap();

        assert!(next.is_complete());
        assert!(next.is_solved());
        assert_eq!(next.guess_num(), 1);
    }

    #[test]
    fn exhausted_budget_completes_round() {
        let config = RoundConfig::new(2);
        let state = RoundState::start(word("squat"), Player::P1, config).unwrap();

        let after_one = state.submit_turn(&word("straw")).unwrap();
        assert!(!after_one.is_complete());

        let after_two = after_one.submit_turn(&word("burnt")).unwrap();
        assert!(after_two.is_complete());
        assert!(!after_two.is_solved());
        assert_eq!(after_two.guesses_remaining(), 0);
    }

    #[test]
    fn winning_on_final_guess_is_solved() {
        let config = RoundConfig::new(1);
        let state = RoundState::start(word("squat"), Player::P1, config).unwrap();

        let done = state.submit_turn(&word("squat")).unwrap();
        assert!(done.is_complete());
        assert!(done.is_solved());
    }

    #[test]
    fn submit_on_complete_round_fails() {
        let done = round("squat").submit_turn(&word("squat")).unwrap();
        let snapshot = done.clone();

        let result = done.submit_turn(&word("straw"));
        assert_eq!(result, Err(GameError::InvalidStateTransition));
        assert_eq!(done, snapshot);
    }

    #[test]
    fn submit_propagates_comparison_errors() {
        let state = round("squat");

        let result = state.submit_turn(&word("burden"));
        assert_eq!(
            result,
            Err(GameError::LengthMismatch {
                guess: 6,
                target: 5
            })
        );
        assert_eq!(state.guess_num(), 0);
    }

    #[test]
    fn skip_toggles_player_without_consuming_guess() {
        let state = round("squat");
        let next = state.skip_turn().unwrap();

        assert_eq!(next.current_player(), Player::P2);
        assert_eq!(next.guess_num(), 0);
        assert!(next.turns().is_empty());
        assert_eq!(next.letterpool(), state.letterpool());
        assert!(!next.is_complete());
    }

    #[test]
    fn skip_on_complete_round_fails() {
        let done = round("squat").submit_turn(&word("squat")).unwrap();
        assert_eq!(done.skip_turn(), Err(GameError::InvalidStateTransition));
    }

    #[test]
    fn skipped_turns_interleave_with_guesses() {
        let state = round("squat");

        // P1 times out, P2 guesses, back to P1
        let after_skip = state.skip_turn().unwrap();
        let after_guess = after_skip.submit_turn(&word("straw")).unwrap();

        assert_eq!(after_guess.current_player(), Player::P1);
        assert_eq!(after_guess.guess_num(), 1);
        assert_eq!(after_guess.turns().len(), 1);
    }

    #[test]
    fn player_opponent_toggles() {
        assert_eq!(Player::P1.opponent(), Player::P2);
        assert_eq!(Player::P2.opponent(), Player::P1);
        assert_eq!(Player::P1.opponent().opponent(), Player::P1);
    }

    #[test]
    fn player_display() {
        assert_eq!(Player::P1.to_string(), "P1");
        assert_eq!(Player::P2.to_string(), "P2");
    }
}
