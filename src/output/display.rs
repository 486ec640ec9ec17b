//! Banners and status messages

use super::formatters::render_word;
use crate::core::{LetterState, Word};
use crate::wordlists::AnswerSource;
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_banner<W: Write + ?Sized>(
    out: &mut W,
    attempts: usize,
    validates_guesses: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "WELCOME TO WORDLE! GUESS THE 5-LETTER WORD.".bright_cyan().bold()
    )?;
    writeln!(
        out,
        "{}",
        format!(
            "{attempts} attempts, guess validation {}",
            if validates_guesses { "active" } else { "off" }
        )
        .bright_black()
    )?;
    writeln!(out)?;
    out.flush()
}

/// Print why the built-in answer list is in use
///
/// Prints nothing when the answers came from `answers_file`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_default_answers_notice<W: Write + ?Sized>(
    out: &mut W,
    answers_file: &str,
    source: AnswerSource,
) -> io::Result<()> {
    let reason = match source {
        AnswerSource::File => return Ok(()),
        AnswerSource::Missing => "not found",
        AnswerSource::Empty => "has no 5-letter words",
    };
    writeln!(
        out,
        "{}",
        format!("{answers_file} {reason}, using default words.").yellow()
    )
}

/// Print a one-line warning in the given severity color
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write + ?Sized>(
    out: &mut W,
    message: &str,
    severe: bool,
) -> io::Result<()> {
    let styled = if severe { message.red() } else { message.yellow() };
    writeln!(out, "{styled}")?;
    out.flush()
}

/// Print the closing message for a won game
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_win<W: Write + ?Sized>(out: &mut W, attempts_used: usize) -> io::Result<()> {
    let noun = if attempts_used == 1 { "attempt" } else { "attempts" };
    writeln!(
        out,
        "{}",
        format!("You guessed the word in {attempts_used} {noun}!")
            .green()
            .bold()
    )?;
    out.flush()
}

/// Print the closing message for a lost game, revealing the answer
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_loss<W: Write + ?Sized>(out: &mut W, answer: &Word) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Better luck next time!".bright_white().bold())?;
    write!(out, "The word was: ")?;
    render_word(out, answer, LetterState::Correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn banner_reports_validation_flag() {
        let on = rendered(|out| print_banner(out, 6, true));
        let off = rendered(|out| print_banner(out, 4, false));

        assert!(on.contains("WELCOME TO WORDLE!"));
        assert!(on.contains("6 attempts"));
        assert!(on.contains("guess validation active"));
        assert!(off.contains("guess validation off"));
    }

    #[test]
    fn win_message_pluralizes() {
        assert!(rendered(|out| print_win(out, 1)).contains("in 1 attempt!"));
        assert!(rendered(|out| print_win(out, 3)).contains("in 3 attempts!"));
    }

    #[test]
    fn loss_reveals_answer() {
        let answer = Word::new("mango").unwrap();
        let text = rendered(|out| print_loss(out, &answer));

        assert!(text.contains("Better luck next time!"));
        assert!(text.contains("The word was: "));
        for letter in ["M", "A", "N", "G", "O"] {
            assert!(text.contains(&format!(" {letter} ")));
        }
    }

    #[test]
    fn default_notice_names_file_and_reason() {
        let missing = rendered(|out| {
            print_default_answers_notice(out, "wordle-word.txt", AnswerSource::Missing)
        });
        let empty = rendered(|out| {
            print_default_answers_notice(out, "wordle-word.txt", AnswerSource::Empty)
        });

        assert!(missing.contains("wordle-word.txt not found, using default words."));
        assert!(empty.contains("wordle-word.txt has no 5-letter words, using default words."));
    }

    #[test]
    fn no_notice_for_file_answers() {
        let text = rendered(|out| {
            print_default_answers_notice(out, "wordle-word.txt", AnswerSource::File)
        });
        assert!(text.is_empty());
    }
}
