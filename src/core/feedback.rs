//! Guess evaluation
//!
//! Classifies every letter of a guess against the answer:
//! - Correct: right letter, right position
//! - Present: letter is in the answer at another position
//! - Absent: letter is not (or no longer) available in the answer

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
}

/// Rule used to decide whether a misplaced letter counts as present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterMatching {
    /// Each answer letter can justify at most one Correct or Present mark.
    #[default]
    Counted,
    /// A misplaced letter is Present whenever the answer contains it at all,
    /// however many times the guess repeats it.
    Loose,
}

/// Per-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// Feedback for a guess that matches the answer exactly
    pub const WIN: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the pool
    /// 2. Second pass: mark remaining letters Present while the pool still holds
    ///    that letter (or, with [`LetterMatching::Loose`], whenever the answer
    ///    contains it)
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterMatching, LetterState, Word};
    ///
    /// let guess = Word::new("wrong").unwrap();
    /// let answer = Word::new("right").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &answer, LetterMatching::Counted);
    ///
    /// assert_eq!(feedback.states()[1], LetterState::Present);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word, matching: LetterMatching) -> Self {
        let mut result = [LetterState::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // Allow: Index needed to compare guess[i] with answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = LetterState::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (state, &letter) in result.iter_mut().zip(guess.chars()) {
            if *state == LetterState::Correct {
                continue;
            }

            match matching {
                LetterMatching::Counted => {
                    if let Some(count) = answer_available.get_mut(&letter)
                        && *count > 0
                    {
                        *state = LetterState::Present;
                        *count -= 1;
                    }
                }
                LetterMatching::Loose => {
                    if answer.has_letter(letter) {
                        *state = LetterState::Present;
                    }
                }
            }
        }

        Self(result)
    }

    /// The state of each position, left to right
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions in a given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }
}
