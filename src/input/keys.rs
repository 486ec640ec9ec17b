//! Keystroke sources
//!
//! The line editor reads [`Key`]s from a [`KeySource`]. The real source polls
//! crossterm; [`ScriptedKeys`] replays a fixed sequence.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

/// A keystroke as seen by the line editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    /// Ctrl-C
    Interrupt,
    Other,
}

impl Key {
    /// Classify a raw terminal byte
    ///
    /// CR and LF end the line, DEL and BS erase, ETX interrupts.
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\r' | b'\n' => Self::Enter,
            0x7f | 0x08 => Self::Backspace,
            0x03 => Self::Interrupt,
            b if b.is_ascii() => Self::Char(char::from(b)),
            _ => Self::Other,
        }
    }

    /// Translate a crossterm key event
    ///
    /// Returns `None` for release and repeat events. In raw mode a line feed
    /// arrives as Ctrl-J and a carriage return may arrive as Ctrl-M; both end
    /// the line.
    #[must_use]
    pub fn from_event(key: KeyEvent) -> Option<Self> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        Some(match key.code {
            KeyCode::Char('c') if ctrl => Self::Interrupt,
            KeyCode::Char('h') if ctrl => Self::Backspace,
            KeyCode::Char('j' | 'm') if ctrl => Self::Enter,
            KeyCode::Char(_) if ctrl => Self::Other,
            KeyCode::Char('\r' | '\n') | KeyCode::Enter => Self::Enter,
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Backspace | KeyCode::Delete => Self::Backspace,
            _ => Self::Other,
        })
    }
}

/// Blocking source of keystrokes
pub trait KeySource {
    /// Wait for the next keystroke
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails or is exhausted.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// Reads keystrokes from the terminal through crossterm
///
/// Requires the terminal to be in raw mode, otherwise keys arrive only after
/// Enter.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(key) = Key::from_event(key)
            {
                return Ok(key);
            }
        }
    }
}

/// Replays a fixed sequence of keystrokes
///
/// Reading past the end yields an `UnexpectedEof` error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script keys from raw terminal bytes, see [`Key::from_byte`]
    ///
    /// # Examples
    /// ```
    /// use wordle_game::input::{Key, KeySource, ScriptedKeys};
    ///
    /// let mut keys = ScriptedKeys::from_bytes(b"a\x7f\r");
    /// assert_eq!(keys.next_key().unwrap(), Key::Char('a'));
    /// assert_eq!(keys.next_key().unwrap(), Key::Backspace);
    /// assert_eq!(keys.next_key().unwrap(), Key::Enter);
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Key::from_byte))
    }

    /// Keys not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_map_to_keys() {
        assert_eq!(Key::from_byte(b'\r'), Key::Enter);
        assert_eq!(Key::from_byte(b'\n'), Key::Enter);
        assert_eq!(Key::from_byte(0x7f), Key::Backspace);
        assert_eq!(Key::from_byte(0x08), Key::Backspace);
        assert_eq!(Key::from_byte(0x03), Key::Interrupt);
        assert_eq!(Key::from_byte(b'q'), Key::Char('q'));
        assert_eq!(Key::from_byte(b'7'), Key::Char('7'));
        assert_eq!(Key::from_byte(0xc3), Key::Other);
    }

    #[test]
    fn events_map_to_keys() {
        let press = |code, modifiers| Key::from_event(KeyEvent::new(code, modifiers));

        assert_eq!(press(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Enter));
        assert_eq!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            Some(Key::Backspace)
        );
        assert_eq!(
            press(KeyCode::Delete, KeyModifiers::NONE),
            Some(Key::Backspace)
        );
        assert_eq!(
            press(KeyCode::Char('X'), KeyModifiers::SHIFT),
            Some(Key::Char('X'))
        );
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Key::Interrupt)
        );
        assert_eq!(
            press(KeyCode::Char('a'), KeyModifiers::CONTROL),
            Some(Key::Other)
        );
        assert_eq!(
            press(KeyCode::Char('h'), KeyModifiers::CONTROL),
            Some(Key::Backspace)
        );
        assert_eq!(press(KeyCode::Left, KeyModifiers::NONE), Some(Key::Other));
    }

    #[test]
    fn raw_line_feed_ends_line() {
        let press = |code, modifiers| Key::from_event(KeyEvent::new(code, modifiers));

        assert_eq!(
            press(KeyCode::Char('j'), KeyModifiers::CONTROL),
            Some(Key::Enter)
        );
        assert_eq!(
            press(KeyCode::Char('m'), KeyModifiers::CONTROL),
            Some(Key::Enter)
        );
        // Plain letters are unaffected
        assert_eq!(
            press(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Key::Char('j'))
        );
    }

    #[test]
    fn release_events_are_dropped() {
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(Key::from_event(event), None);
    }

    #[test]
    fn scripted_keys_run_out() {
        let mut keys = ScriptedKeys::new([Key::Enter]);
        assert_eq!(keys.remaining(), 1);
        assert_eq!(keys.next_key().unwrap(), Key::Enter);

        let err = keys.next_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
