//! Raw-mode keyboard input
//!
//! [`LineEditor`] collects one word at a time from a [`KeySource`], holding
//! the terminal in raw mode through a [`TerminalMode`] only while it reads.

mod editor;
mod keys;
pub mod terminal;

pub use editor::LineEditor;
pub use keys::{CrosstermKeys, Key, KeySource, ScriptedKeys};
pub use terminal::{CrosstermMode, RawModeGuard, TerminalMode};
