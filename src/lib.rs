//! Terminal Wordle
//!
//! Guess a hidden 5-letter word in a limited number of attempts, with colored
//! per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Feedback, LetterMatching, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let answer = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);
//! assert!(!feedback.is_win());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Raw-mode keyboard input
pub mod input;

// Terminal output formatting
pub mod output;

// Game loop
pub mod game;
