//! Display functions for a game session

use super::formatters::{attempts_bar, letter_list, spaced_mask};
use crate::game::{ATTEMPT_BUDGET, GuessOutcome, STAGES, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print the opening announcement with the pre-revealed letters
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_intro<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {}", "H A N G M A N".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        "\nWord to guess: {}",
        session.mask().to_string().bright_yellow().bold()
    )
}

/// Print the board for the current turn
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_turn<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", session.stage())?;

    let remaining = session.remaining_attempts();
    writeln!(
        out,
        "Remaining attempts: {remaining} {}",
        attempts_bar(remaining, ATTEMPT_BUDGET).bright_black()
    )?;
    writeln!(
        out,
        "Current word: {}",
        spaced_mask(session.mask()).bright_white().bold()
    )?;

    if !session.wrong_letters().is_empty() {
        writeln!(
            out,
            "Wrong letters: {}",
            letter_list(session.wrong_letters()).red()
        )?;
    }
    Ok(())
}

/// Ask for the next letter
///
/// # Errors
/// Returns an error if writing to or flushing `out` fails.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Enter a letter: ")?;
    out.flush()
}

/// Print the reaction to one guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_feedback<W: Write>(out: &mut W, outcome: GuessOutcome) -> io::Result<()> {
    match outcome {
        GuessOutcome::Invalid => writeln!(out, "{}", "Please enter a single letter.".yellow()),
        GuessOutcome::Repeated(letter) => writeln!(
            out,
            "{}",
            format!("You already guessed '{letter}'.").yellow()
        ),
        GuessOutcome::Correct { .. } => writeln!(out, "{}", "Correct letter!".green().bold()),
        GuessOutcome::Incorrect(_) => writeln!(out, "{}", "Incorrect letter!".red().bold()),
        GuessOutcome::Finished => Ok(()),
    }
}

/// Print the victory banner
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_win<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        out,
        "Congratulations! You guessed the word: {}",
        session.target().text().bright_green().bold()
    )?;

    let attempts = session.attempts();
    writeln!(
        out,
        "Wrong guesses: {attempts} of {ATTEMPT_BUDGET} allowed"
    )?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}

/// Print the final gallows and the word that was missed
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_loss<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "{}", STAGES[ATTEMPT_BUDGET].red())?;
    writeln!(
        out,
        "Sorry, you lost. The word was: {}",
        session.target().text().bright_yellow().bold()
    )
}
