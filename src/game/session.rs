//! Game session state
//!
//! A session holds the hidden answer, the guesses made so far and the attempt
//! count. It performs no I/O, so the rules can be exercised directly.

use super::config::GameConfig;
use crate::core::{Feedback, WORD_LENGTH, Word, WordError};
use crate::wordlists::WordLists;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Pick an answer uniformly at random
///
/// Returns `None` only if `answers` is empty.
#[must_use]
pub fn pick_answer<'a, R: Rng + ?Sized>(answers: &'a [Word], rng: &mut R) -> Option<&'a Word> {
    answers.choose(rng)
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// Why a submitted line did not count as an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort(usize),
    TooLong(usize),
    InvalidCharacters,
    NotInWordList,
    AlreadyGuessed,
    GameOver,
}

impl Rejection {
    /// Whether the message should be shown as an error rather than a warning
    #[must_use]
    pub const fn is_severe(&self) -> bool {
        !matches!(self, Self::AlreadyGuessed)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(_) => write!(f, "NOT ENOUGH LETTERS!"),
            Self::TooLong(_) => write!(f, "TOO MANY LETTERS!"),
            Self::InvalidCharacters | Self::NotInWordList => write!(f, "NOT A VALID WORD!"),
            Self::AlreadyGuessed => write!(f, "ALREADY GUESSED!"),
            Self::GameOver => write!(f, "GAME OVER!"),
        }
    }
}

impl std::error::Error for Rejection {}

impl From<WordError> for Rejection {
    fn from(e: WordError) -> Self {
        match e {
            WordError::InvalidLength(len) if len < WORD_LENGTH => Self::TooShort(len),
            WordError::InvalidLength(len) => Self::TooLong(len),
            WordError::NonAscii | WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// Guesses already submitted in this session
#[derive(Debug, Clone, Default)]
pub struct GuessHistory {
    seen: FxHashSet<Word>,
    rows: Vec<(Word, Feedback)>,
}

impl GuessHistory {
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn rows(&self) -> &[(Word, Feedback)] {
        &self.rows
    }

    fn record(&mut self, word: Word, feedback: Feedback) {
        self.seen.insert(word.clone());
        self.rows.push((word, feedback));
    }
}

/// An accepted guess and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// One game against a fixed answer
#[derive(Debug)]
pub struct Session<'a> {
    answer: Word,
    lists: &'a WordLists,
    config: GameConfig,
    history: GuessHistory,
    status: GameStatus,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(answer: Word, lists: &'a WordLists, config: GameConfig) -> Self {
        log::trace!("session answer: {answer}");
        Self {
            answer,
            lists,
            config,
            history: GuessHistory::default(),
            status: GameStatus::InProgress,
        }
    }

    /// Check a typed line and, if it is acceptable, score it
    ///
    /// Rejected lines leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the line is not a 5-letter word, is missing
    /// from the word list (when validation is active), was already guessed,
    /// or the game has ended.
    pub fn submit(&mut self, input: &str) -> Result<Turn, Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }

        let guess = Word::new(input)?;
        if !self.lists.is_valid_guess(&guess) {
            return Err(Rejection::NotInWordList);
        }
        if self.history.contains(&guess) {
            return Err(Rejection::AlreadyGuessed);
        }

        let feedback = Feedback::evaluate(&guess, &self.answer, self.config.matching);
        self.history.record(guess.clone(), feedback);

        let used = self.history.len();
        self.status = if feedback.is_win() {
            GameStatus::Won { attempts: used }
        } else if used >= self.config.attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        log::debug!("attempt {used}: {guess} -> {:?}", self.status);
        Ok(Turn {
            guess,
            feedback,
            status: self.status,
        })
    }

    /// The hidden answer
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether guesses are checked against the word list
    #[must_use]
    pub const fn validates_guesses(&self) -> bool {
        self.lists.validates_guesses()
    }
}
