//! Word lists for the game
//!
//! Answers and valid guesses are read from text files at startup. A missing
//! answers file falls back to the embedded default list; a missing guess file
//! turns dictionary validation off.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_ANSWERS, DEFAULT_ANSWERS_COUNT};

use crate::core::Word;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Where the answer list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerSource {
    File,
    /// Defaults, because the answers file does not exist
    Missing,
    /// Defaults, because the answers given held no usable words
    Empty,
}

impl AnswerSource {
    /// Whether the embedded default list is in use
    #[must_use]
    pub const fn is_default(self) -> bool {
        !matches!(self, Self::File)
    }
}

/// Answer and guess dictionaries for one run
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Vec<Word>,
    valid_guesses: Option<FxHashSet<Word>>,
    answer_source: AnswerSource,
}

impl WordLists {
    /// Build word lists from already-parsed words
    ///
    /// An empty `answers` list is replaced by the embedded defaults. An empty
    /// `guesses` list disables validation. When validation is active the
    /// answers are always accepted as guesses.
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        Self::build(Some(answers), guesses)
    }

    fn build(answers: Option<Vec<Word>>, guesses: Vec<Word>) -> Self {
        let (answers, answer_source) = match answers {
            None => (loader::words_from_slice(DEFAULT_ANSWERS), AnswerSource::Missing),
            Some(answers) if answers.is_empty() => {
                (loader::words_from_slice(DEFAULT_ANSWERS), AnswerSource::Empty)
            }
            Some(answers) => (answers, AnswerSource::File),
        };

        let valid_guesses = if guesses.is_empty() {
            None
        } else {
            let mut set: FxHashSet<Word> = guesses.into_iter().collect();
            set.extend(answers.iter().cloned());
            Some(set)
        };

        Self {
            answers,
            valid_guesses,
            answer_source,
        }
    }

    /// Load both lists from disk
    ///
    /// A file that does not exist counts as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read.
    pub fn load(answers_path: &Path, guesses_path: &Path) -> Result<Self> {
        let answers = read_optional(answers_path)
            .with_context(|| format!("Failed to read answers from {}", answers_path.display()))?;
        let guesses = read_optional(guesses_path)
            .with_context(|| format!("Failed to read guesses from {}", guesses_path.display()))?;

        let lists = Self::build(answers, guesses.unwrap_or_default());
        log::info!(
            "{} answers ({:?}), guess validation {}",
            lists.answers.len(),
            lists.answer_source,
            if lists.validates_guesses() { "on" } else { "off" }
        );
        Ok(lists)
    }

    /// Candidate answers, never empty
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub const fn answer_source(&self) -> AnswerSource {
        self.answer_source
    }

    /// Whether guesses are checked against a dictionary
    #[inline]
    #[must_use]
    pub const fn validates_guesses(&self) -> bool {
        self.valid_guesses.is_some()
    }

    /// Check a guess against the dictionary
    ///
    /// Always true when validation is off.
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid_guesses
            .as_ref()
            .is_none_or(|set| set.contains(word))
    }
}

fn read_optional(path: &Path) -> io::Result<Option<Vec<Word>>> {
    match loader::load_from_file(path) {
        Ok(words) => Ok(Some(words)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found", path.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
