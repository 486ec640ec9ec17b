//! Single-line word editor
//!
//! Reads one line of letters in raw mode, drawing each accepted letter as a
//! tile. Typing appends one tile; backspace erases the line and redraws it.

use super::keys::{Key, KeySource};
use super::terminal::{RawModeGuard, TerminalMode};
use crate::output::{TileStyle, queue_tile, redraw_typing_line};
use std::io::{self, Write};

/// Reads words from a key source while holding the terminal in raw mode
#[derive(Debug)]
pub struct LineEditor<K, M> {
    keys: K,
    mode: M,
}

impl<K: KeySource, M: TerminalMode> LineEditor<K, M> {
    #[must_use]
    pub const fn new(keys: K, mode: M) -> Self {
        Self { keys, mode }
    }

    /// Read one line of letters, uppercased, in the order typed
    ///
    /// Raw mode is held only while keys are being read and is restored before
    /// this returns, whether or not reading succeeded. The returned string may
    /// be empty or of any length.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode cannot be changed, if reading a key
    /// or writing to `out` fails, or with `ErrorKind::Interrupted` on Ctrl-C.
    pub fn read_line<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<String> {
        let width = self.mode.columns();
        let line = {
            let _guard = RawModeGuard::acquire(&mut self.mode)?;
            collect_line(&mut self.keys, out, width)?
        };

        // Raw mode disables output post-processing, so the line break waits
        // until the terminal is back in its own mode.
        writeln!(out)?;
        out.flush()?;

        log::debug!("read line {line:?}");
        Ok(line)
    }

    #[must_use]
    pub const fn keys(&self) -> &K {
        &self.keys
    }

    #[must_use]
    pub const fn mode(&self) -> &M {
        &self.mode
    }
}

fn collect_line<K, W>(keys: &mut K, out: &mut W, width: u16) -> io::Result<String>
where
    K: KeySource + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = String::new();

    loop {
        match keys.next_key()? {
            Key::Enter => return Ok(buffer),
            Key::Backspace => {
                if buffer.pop().is_some() {
                    redraw_typing_line(out, &buffer, buffer.len() + 1, width)?;
                    out.flush()?;
                }
            }
            Key::Char(c) if c.is_ascii_alphabetic() => {
                let letter = c.to_ascii_uppercase();
                buffer.push(letter);
                queue_tile(out, letter, TileStyle::Typing)?;
                out.flush()?;
            }
            Key::Interrupt => {
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "input interrupted",
                ));
            }
            Key::Char(_) | Key::Other => {}
        }
    }
}
