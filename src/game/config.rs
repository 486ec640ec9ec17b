//! Game settings

use crate::core::LetterMatching;
use std::time::Duration;

/// Default attempt budget
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Default time a validation message stays on screen
pub const DEFAULT_MESSAGE_DELAY: Duration = Duration::from_millis(500);

/// Configuration for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost, at least 1
    pub attempts: usize,
    pub matching: LetterMatching,
    /// Pause after a rejected guess before its message is erased
    pub message_delay: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn new(attempts: usize) -> Self {
        Self {
            attempts,
            matching: LetterMatching::Counted,
            message_delay: DEFAULT_MESSAGE_DELAY,
        }
    }

    #[must_use]
    pub const fn with_matching(mut self, matching: LetterMatching) -> Self {
        self.matching = matching;
        self
    }

    #[must_use]
    pub const fn with_message_delay(mut self, delay: Duration) -> Self {
        self.message_delay = delay;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS)
    }
}
