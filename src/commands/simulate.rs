//! Scripted round simulation
//!
//! Plays many rounds between two scripted players and reports aggregate
//! statistics. Rounds are independent, so they run in parallel; each one
//! still advances through the same pure transitions the interactive mode
//! uses.

use crate::core::{LetterPool, MAX_COMPARE_LETTERS, Word};
use crate::round::{Player, RoundConfig, RoundState};
use crate::wordlists::loader::words_of_length;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::{IndexedRandom, IteratorRandom};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Result of a simulation run
pub struct SimulationResult {
    pub total_rounds: usize,
    pub solved: usize,
    pub failed: usize,
    pub solve_rate: f64,
    pub average_guesses: f64,
    /// Guesses consumed per solved round
    pub guess_distribution: HashMap<u32, usize>,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Outcome of one scripted round
struct RoundOutcome {
    solved: bool,
    guesses_used: u32,
    winner: Option<Player>,
}

/// Play `count` scripted rounds against random targets and aggregate the
/// outcomes
///
/// # Panics
///
/// May panic if the progress bar template fails to parse.
pub fn run_simulation(words: &[Word], count: usize, config: RoundConfig) -> SimulationResult {
    let playable: Vec<&Word> = words
        .iter()
        .filter(|w| w.len() <= MAX_COMPARE_LETTERS)
        .collect();

    let mut rng = rand::rng();
    let targets: Vec<&Word> = (0..count)
        .filter_map(|_| playable.choose(&mut rng).copied())
        .collect();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = targets
        .par_iter()
        .map(|target| {
            let outcome = play_scripted_round(words, target, config);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_and_clear();

    aggregate(&outcomes, start.elapsed())
}

/// Play a single round with both players drawing random untried candidates
/// that the letterpool hasn't ruled out
fn play_scripted_round(words: &[Word], target: &Word, config: RoundConfig) -> RoundOutcome {
    let mut rng = rand::rng();
    let candidates = words_of_length(words, target.len());

    let mut state = RoundState::start(target.clone(), Player::P1, config)
        .expect("targets are pre-filtered to the comparison budget");

    let mut tried: HashSet<&str> = HashSet::new();

    while !state.is_complete() {
        let player = state.current_player();
        let Some(guess) = pick_guess(&candidates, state.letterpool(), &tried, &mut rng) else {
            // Both players share the same knowledge, so an exhausted
            // candidate pool ends the round for both of them
            break;
        };
        tried.insert(guess.text());

        state = state
            .submit_turn(guess)
            .expect("candidate guesses match the target length");

        if state.is_solved() {
            return RoundOutcome {
                solved: true,
                guesses_used: state.guess_num(),
                winner: Some(player),
            };
        }
    }

    RoundOutcome {
        solved: false,
        guesses_used: state.guess_num(),
        winner: None,
    }
}

/// Pick a random untried candidate the letterpool hasn't ruled out
fn pick_guess<'a>(
    candidates: &[&'a Word],
    pool: &LetterPool,
    tried: &HashSet<&str>,
    rng: &mut impl Rng,
) -> Option<&'a Word> {
    candidates
        .iter()
        .filter(|w| !tried.contains(w.text()) && !pool.rules_out(w))
        .choose(rng)
        .copied()
}

fn aggregate(outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let total_rounds = outcomes.len();
    let solved = outcomes.iter().filter(|o| o.solved).count();
    let failed = total_rounds - solved;
    let total_guesses: u32 = outcomes.iter().map(|o| o.guesses_used).sum();

    let mut guess_distribution: HashMap<u32, usize> = HashMap::new();
    let mut p1_wins = 0;
    let mut p2_wins = 0;

    for outcome in outcomes {
        match outcome.winner {
            Some(Player::P1) => p1_wins += 1,
            Some(Player::P2) => p2_wins += 1,
            None => {}
        }
        if outcome.solved {
            *guess_distribution.entry(outcome.guesses_used).or_insert(0) += 1;
        }
    }

    let (solve_rate, average_guesses) = if total_rounds == 0 {
        (0.0, 0.0)
    } else {
        (
            solved as f64 / total_rounds as f64,
            f64::from(total_guesses) / total_rounds as f64,
        )
    };

    let elapsed = duration.as_secs_f64();

    SimulationResult {
        total_rounds,
        solved,
        failed,
        solve_rate,
        average_guesses,
        guess_distribution,
        p1_wins,
        p2_wins,
        duration,
        rounds_per_second: if elapsed > 0.0 {
            total_rounds as f64 / elapsed
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn simulation_runs() {
        let words = words_from_slice(&["crane", "slate", "squat", "straw", "burnt"]);
        let result = run_simulation(&words, 10, RoundConfig::default());

        assert_eq!(result.total_rounds, 10);
        assert_eq!(result.solved + result.failed, 10);
        assert!((0.0..=1.0).contains(&result.solve_rate));
        assert!(result.p1_wins + result.p2_wins <= result.solved);
    }

    #[test]
    fn simulation_empty_word_list() {
        let result = run_simulation(&[], 5, RoundConfig::default());

        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn single_candidate_always_solves_for_p1() {
        let words = words_from_slice(&["crane"]);
        let result = run_simulation(&words, 3, RoundConfig::default());

        assert_eq!(result.total_rounds, 3);
        assert_eq!(result.solved, 3);
        assert_eq!(result.p1_wins, 3);
        assert_eq!(result.p2_wins, 0);
        assert_eq!(result.guess_distribution.get(&1), Some(&3));
    }

    #[test]
    fn distribution_counts_solved_rounds() {
        let words = words_from_slice(&["crane", "slate", "squat", "straw"]);
        let result = run_simulation(&words, 20, RoundConfig::default());

        let distribution_sum: usize = result.guess_distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn guesses_stay_within_budget() {
        let config = RoundConfig::new(3);
        let words = words_from_slice(&["crane", "slate", "squat", "straw", "burnt", "quick"]);
        let result = run_simulation(&words, 25, config);

        assert!(
            result
                .guess_distribution
                .keys()
                .all(|guesses| (1..=config.max_guesses).contains(guesses))
        );
    }
}
