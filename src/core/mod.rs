//! Core domain types for Wordle
//!
//! This module contains the word and feedback types with no terminal dependencies.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterMatching, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
