//! Interactive game loop
//!
//! Reads guesses through the line editor, shows a transient message for each
//! rejected line, and replaces each accepted line with its feedback row.

use super::config::GameConfig;
use super::session::{GameStatus, Rejection, Session, pick_answer};
use crate::input::{KeySource, LineEditor, TerminalMode};
use crate::output::{
    TILE_WIDTH, erase_previous_line, print_banner, print_loss, print_rejection, print_win,
    render_feedback_row,
};
use crate::wordlists::WordLists;
use anyhow::{Context, Result, ensure};
use rand::Rng;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Play one game from banner to closing message
///
/// The answer is drawn from `lists` with `rng`.
///
/// # Errors
///
/// Returns an error if the configuration is unusable, or if reading keys or
/// writing to `out` fails.
pub fn run_game<K, M, W, R>(
    lists: &WordLists,
    config: GameConfig,
    rng: &mut R,
    editor: &mut LineEditor<K, M>,
    out: &mut W,
) -> Result<GameStatus>
where
    K: KeySource,
    M: TerminalMode,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    ensure!(config.attempts > 0, "attempt budget must be at least 1");
    let answer = pick_answer(lists.answers(), rng)
        .context("answer list is empty")?
        .clone();

    let mut session = Session::new(answer, lists, config);
    log::info!(
        "new game: {} attempts, {:?} matching",
        config.attempts,
        config.matching
    );

    print_banner(out, config.attempts, session.validates_guesses())?;
    play(&mut session, editor, out)
}

/// Drive `session` until it is won or lost
///
/// # Errors
///
/// Returns an error if reading keys or writing to `out` fails.
pub fn play<K, M, W>(
    session: &mut Session<'_>,
    editor: &mut LineEditor<K, M>,
    out: &mut W,
) -> Result<GameStatus>
where
    K: KeySource,
    M: TerminalMode,
    W: Write + ?Sized,
{
    let delay = session.config().message_delay;

    while !session.is_over() {
        let line = editor.read_line(out).context("Failed to read guess")?;
        let width = editor.mode().columns();

        match session.submit(&line) {
            Ok(turn) => render_feedback_row(out, &turn.guess, &turn.feedback, width)?,
            Err(rejection) => {
                log::debug!("rejected {line:?}: {rejection:?}");
                let typed = line.chars().count() * TILE_WIDTH;
                show_transient(out, &rejection, typed, width, delay)?;
            }
        }
    }

    match session.status() {
        GameStatus::Won { attempts } => print_win(out, attempts)?,
        GameStatus::Lost => print_loss(out, session.answer())?,
        GameStatus::InProgress => {}
    }
    Ok(session.status())
}

/// Replace the typed line, `typed` columns wide, with `rejection`, wait, then
/// erase it
fn show_transient<W: Write + ?Sized>(
    out: &mut W,
    rejection: &Rejection,
    typed: usize,
    width: u16,
    delay: Duration,
) -> Result<()> {
    let message = rejection.to_string();
    erase_previous_line(out, typed, width)?;
    print_rejection(out, &message, rejection.is_severe())?;
    if !delay.is_zero() {
        thread::sleep(delay);
    }
    erase_previous_line(out, message.chars().count(), width)?;
    out.flush()?;
    Ok(())
}
