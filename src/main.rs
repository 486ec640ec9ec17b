//! Wordle - CLI
//!
//! Terminal Wordle with raw-mode input and colored feedback tiles.

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use wordle_game::{
    core::LetterMatching,
    game::{DEFAULT_ATTEMPTS, GameConfig, run_game},
    input::{CrosstermKeys, CrosstermMode, LineEditor},
    output::print_default_answers_notice,
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden 5-letter word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    /// Answer word list, one word per whitespace-separated token
    #[arg(short, long, default_value = "wordle-word.txt")]
    answers: PathBuf,

    /// Valid guess list; when missing, any 5-letter word is accepted
    #[arg(short, long, default_value = "wordle-guess.txt")]
    guesses: PathBuf,

    /// Number of guesses allowed
    #[arg(short = 'n', long, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Seed for choosing the answer (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// How repeated letters in a guess are scored
    #[arg(short, long, value_enum, default_value_t = Matching::Counted)]
    matching: Matching,

    /// How long validation messages stay on screen, in milliseconds
    #[arg(long, default_value = "500")]
    message_delay_ms: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Matching {
    /// Each answer letter marks at most one guessed letter
    Counted,
    /// Every misplaced letter found in the answer is marked present
    Loose,
}

impl From<Matching> for LetterMatching {
    fn from(matching: Matching) -> Self {
        match matching {
            Matching::Counted => Self::Counted,
            Matching::Loose => Self::Loose,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ensure!(cli.attempts > 0, "--attempts must be at least 1");

    let lists = WordLists::load(&cli.answers, &cli.guesses)?;

    let mut stdout = io::stdout().lock();
    print_default_answers_notice(
        &mut stdout,
        &cli.answers.display().to_string(),
        lists.answer_source(),
    )?;

    let config = GameConfig::new(cli.attempts)
        .with_matching(cli.matching.into())
        .with_message_delay(Duration::from_millis(cli.message_delay_ms));

    // Random answer unless a seed is given
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut editor = LineEditor::new(CrosstermKeys, CrosstermMode);
    run_game(&lists, config, &mut rng, &mut editor, &mut stdout).context("Game aborted")?;

    Ok(())
}
