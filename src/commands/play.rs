//! Interactive play mode
//!
//! Text-based game loop over any line reader and writer.

use crate::game::{GameError, GameStatus, Session};
use crate::output::{print_feedback, print_intro, print_loss, print_prompt, print_turn, print_win};
use std::io::{BufRead, Write};

/// Run a session to completion
///
/// Blocks on one line of `input` per turn. Malformed and repeated guesses are
/// answered with a message and do not end the turn loop.
///
/// # Errors
///
/// Returns `GameError::InputClosed` if `input` reaches end of file before the
/// game is decided, and `GameError::Io` if reading or writing fails.
pub fn run_play<R, W>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<GameStatus, GameError>
where
    R: BufRead,
    W: Write,
{
    print_intro(output, session).map_err(GameError::console)?;

    while session.status() == GameStatus::Playing {
        print_turn(output, session).map_err(GameError::console)?;
        print_prompt(output).map_err(GameError::console)?;

        let line = read_guess(input)?;
        let outcome = session.guess(&line);
        log::debug!("guess {:?} -> {outcome:?}", line.trim_end());
        print_feedback(output, outcome).map_err(GameError::console)?;
    }

    match session.status() {
        GameStatus::Won => print_win(output, session),
        GameStatus::Lost => print_loss(output, session),
        GameStatus::Playing => unreachable!("loop exits only on a decided game"),
    }
    .map_err(GameError::console)?;

    log::info!(
        "session ended: {:?} after {} wrong guesses",
        session.status(),
        session.attempts()
    );
    Ok(session.status())
}

/// Read one line of input
fn read_guess<R: BufRead>(input: &mut R) -> Result<String, GameError> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(GameError::console)?;
    if read == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RevealMask, TargetWord};
    use crate::game::STAGES;
    use std::io::Cursor;

    fn session(text: &str) -> Session {
        let target = TargetWord::new(text);
        let mask = RevealMask::hidden(target.len());
        Session::with_mask(target, mask)
    }

    fn play(session: &mut Session, input: &str) -> (Result<GameStatus, GameError>, String) {
        let mut reader = Cursor::new(input.as_bytes());
        let mut out = Vec::new();
        let result = run_play(session, &mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn correct_letters_win() {
        let mut s = session("chat");
        let (result, transcript) = play(&mut s, "c\nh\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert_eq!(s.attempts(), 0);
        assert!(transcript.contains("Word to guess"));
        assert!(transcript.contains("Congratulations"));
        assert!(transcript.contains("chat"));
        assert_eq!(transcript.matches("Enter a letter").count(), 4);
    }

    #[test]
    fn seven_wrong_letters_lose() {
        let mut s = session("chat");
        let (result, transcript) = play(&mut s, "z\nx\nq\nw\nj\nk\nv\n");

        assert_eq!(result.unwrap(), GameStatus::Lost);
        assert_eq!(s.attempts(), 7);
        assert!(transcript.contains("The word was"));
        assert!(transcript.contains(STAGES[STAGES.len() - 1]));
        assert_eq!(transcript.matches("Incorrect letter!").count(), 7);
    }

    #[test]
    fn malformed_guess_reprompts() {
        let mut s = session("chat");
        let (result, transcript) = play(&mut s, "ab\nc\nh\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert!(transcript.contains("single letter"));
        assert_eq!(transcript.matches("Enter a letter").count(), 5);
        assert_eq!(s.attempts(), 0);
    }

    #[test]
    fn repeated_guess_reprompts() {
        let mut s = session("chat");
        let (result, transcript) = play(&mut s, "z\nz\nc\nh\na\nt\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert!(transcript.contains("already guessed 'z'"));
        assert_eq!(s.attempts(), 1);
        assert!(transcript.contains("Remaining attempts: 5"));
    }

    #[test]
    fn no_input_read_after_game_ends() {
        let mut s = session("ok");
        let mut reader = Cursor::new("o\nk\nleftover\n".as_bytes());
        let mut out = Vec::new();

        let status = run_play(&mut s, &mut reader, &mut out).unwrap();
        assert_eq!(status, GameStatus::Won);

        let mut rest = String::new();
        reader.read_line(&mut rest).unwrap();
        assert_eq!(rest, "leftover\n");
    }

    #[test]
    fn closed_input_is_error() {
        let mut s = session("chat");
        let (result, transcript) = play(&mut s, "c\nh\n");

        assert!(matches!(result, Err(GameError::InputClosed)));
        assert_eq!(s.status(), GameStatus::Playing);
        assert!(!transcript.contains("Congratulations"));
    }

    #[test]
    fn last_line_without_newline_counts() {
        let mut s = session("ok");
        let (result, _) = play(&mut s, "o\nk");
        assert_eq!(result.unwrap(), GameStatus::Won);
    }

    #[test]
    fn multi_word_entry_plays_to_win() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut rng = StdRng::seed_from_u64(9);
        let mut s = Session::new(TargetWord::new("pomme de"), &mut rng);
        let (result, transcript) = play(&mut s, "p\no\nm\ne\nd\n");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert!(transcript.contains("pomme de"));
        assert!(!transcript.contains("single letter"));
    }

    #[test]
    fn decided_session_prints_result_only() {
        let mut s = session("");
        let (result, transcript) = play(&mut s, "");

        assert_eq!(result.unwrap(), GameStatus::Won);
        assert!(!transcript.contains("Enter a letter"));
        assert!(transcript.contains("Congratulations"));
    }
}
