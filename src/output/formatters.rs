//! Letter tile rendering
//!
//! Every letter is drawn as a three-column tile: a space, the letter and a
//! space on a colored background. Colors are reset after each tile.
//!
//! Long lines wrap onto several terminal rows, so erasing helpers take the
//! drawn width and the terminal width and clear every row the line covers.

use crate::core::{Feedback, LetterState, WORD_LENGTH, Word};
use crossterm::{
    QueueableCommand,
    cursor::{MoveToColumn, MoveUp},
    style::{Color, Colors, Print, ResetColor, SetColors},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Columns taken by one tile
pub const TILE_WIDTH: usize = 3;

/// Color scheme of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// A letter still being typed
    Typing,
    /// A letter of an evaluated guess
    Scored(LetterState),
}

impl TileStyle {
    #[must_use]
    pub fn colors(self) -> Colors {
        let background = match self {
            Self::Typing | Self::Scored(LetterState::Absent) => Color::DarkGrey,
            Self::Scored(LetterState::Correct) => Color::DarkGreen,
            Self::Scored(LetterState::Present) => Color::DarkYellow,
        };
        Colors::new(Color::White, background)
    }
}

/// Rows between the first row of a line `columns` wide and the row the
/// cursor ends on after drawing it
///
/// A line that exactly fills its last row leaves the cursor on that row.
#[must_use]
pub fn wrapped_rows(columns: usize, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    u16::try_from(columns.saturating_sub(1) / width).unwrap_or(u16::MAX)
}

/// Queue a single tile
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn queue_tile<W: Write + ?Sized>(
    out: &mut W,
    letter: char,
    style: TileStyle,
) -> io::Result<()> {
    out.queue(SetColors(style.colors()))?
        .queue(Print(format!(" {letter} ")))?
        .queue(ResetColor)?;
    Ok(())
}

/// Move up `rows` and clear from the start of that row to the end of the screen
fn clear_rows_up<W: Write + ?Sized>(out: &mut W, rows: u16) -> io::Result<()> {
    // MoveUp(0) still moves one row on most terminals
    if rows > 0 {
        out.queue(MoveUp(rows))?;
    }
    out.queue(MoveToColumn(0))?
        .queue(Clear(ClearType::FromCursorDown))?;
    Ok(())
}

/// Erase the `drawn` typing tiles on the current line and draw `letters`
/// in their place
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn redraw_typing_line<W: Write + ?Sized>(
    out: &mut W,
    letters: &str,
    drawn: usize,
    width: u16,
) -> io::Result<()> {
    clear_rows_up(out, wrapped_rows(drawn * TILE_WIDTH, width))?;
    for letter in letters.chars() {
        queue_tile(out, letter, TileStyle::Typing)?;
    }
    Ok(())
}

/// Erase the previously printed line, `columns` wide, and leave the cursor
/// at its start
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn erase_previous_line<W: Write + ?Sized>(
    out: &mut W,
    columns: usize,
    width: u16,
) -> io::Result<()> {
    clear_rows_up(out, wrapped_rows(columns, width).saturating_add(1))
}

/// Replace the previously typed guess with its scored tiles
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_feedback_row<W: Write + ?Sized>(
    out: &mut W,
    guess: &Word,
    feedback: &Feedback,
    width: u16,
) -> io::Result<()> {
    erase_previous_line(out, WORD_LENGTH * TILE_WIDTH, width)?;
    for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
        queue_tile(out, char::from(letter), TileStyle::Scored(state))?;
    }
    writeln!(out)?;
    out.flush()
}

/// Draw `word` with every tile in the same state, followed by a newline
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_word<W: Write + ?Sized>(
    out: &mut W,
    word: &Word,
    state: LetterState,
) -> io::Result<()> {
    for &letter in word.chars() {
        queue_tile(out, char::from(letter), TileStyle::Scored(state))?;
    }
    writeln!(out)?;
    out.flush()
}
