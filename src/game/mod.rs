//! Game orchestration
//!
//! [`Session`] holds the rules; [`run_game`] connects a session to the line
//! editor and the terminal.

mod config;
mod runner;
mod session;

pub use config::{DEFAULT_ATTEMPTS, DEFAULT_MESSAGE_DELAY, GameConfig};
pub use runner::{play, run_game};
pub use session::{GameStatus, GuessHistory, Rejection, Session, Turn, pick_answer};
