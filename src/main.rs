//! Word Duel - CLI
//!
//! Hot-seat play, scripted simulation, and encoded-value inspection for the
//! word duel core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_duel::{
    commands::{inspect_comparison, inspect_letterpool, run_play, run_simulation},
    core::Word,
    output::print_simulation_result,
    round::RoundConfig,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_duel",
    about = "Two-player word duel: hot-seat rounds, scripted simulations, and encoding inspection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'bundled' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive hot-seat round for two players (default)
    Play {
        /// Fix the target word instead of drawing one at random
        #[arg(short, long)]
        target: Option<String>,

        /// Guesses shared between both players
        #[arg(short, long, default_value_t = RoundConfig::DEFAULT_MAX_GUESSES)]
        max_guesses: u32,
    },

    /// Simulate scripted rounds and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Guesses shared between both players per round
        #[arg(short, long, default_value_t = RoundConfig::DEFAULT_MAX_GUESSES)]
        max_guesses: u32,
    },

    /// Decode an encoded comparison or letterpool value
    Inspect {
        #[command(subcommand)]
        encoding: InspectCommands,
    },
}

#[derive(Subcommand)]
enum InspectCommands {
    /// Decode a 16-bit guess comparison
    Comparison {
        /// Encoded value
        value: u16,

        /// Align the decoded verdicts with this guessed word
        #[arg(short, long)]
        guess: Option<String>,
    },

    /// Decode a 52-bit letterpool value
    Letterpool {
        /// Encoded value
        value: u64,
    },
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "bundled" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        target: None,
        max_guesses: RoundConfig::DEFAULT_MAX_GUESSES,
    });

    match command {
        Commands::Play {
            target,
            max_guesses,
        } => run_play(&words, target.as_deref(), RoundConfig::new(max_guesses))
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { count, max_guesses } => {
            let result = run_simulation(&words, count, RoundConfig::new(max_guesses));
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Inspect { encoding } => match encoding {
            InspectCommands::Comparison { value, guess } => {
                inspect_comparison(value, guess.as_deref()).map_err(|e| anyhow::anyhow!(e))
            }
            InspectCommands::Letterpool { value } => {
                inspect_letterpool(value).map_err(|e| anyhow::anyhow!(e))
            }
        },
    }
}
