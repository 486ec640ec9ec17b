//! Word list loading utilities
//!
//! Word list files are plain text with one word per whitespace-separated token.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns the valid Word instances in file order, skipping tokens that are
/// not 5 ASCII letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle-word.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);

    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse whitespace-separated tokens into words
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .split_whitespace()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                log::trace!("skipping {token:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        log::debug!("skipped {skipped} tokens that are not 5-letter words");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::DEFAULT_ANSWERS;
///
/// let words = words_from_slice(DEFAULT_ANSWERS);
/// assert_eq!(words.len(), DEFAULT_ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
