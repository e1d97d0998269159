//! Game session state machine
//!
//! A session starts `Playing` and moves to `Won` or `Lost` exactly once.
//! Each call to [`Session::guess`] is one turn.

use super::stages::{ATTEMPT_BUDGET, stage_for};
use crate::core::{RevealMask, TargetWord};
use rand::Rng;
use rustc_hash::FxHashSet;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Result of submitting one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not exactly one letter; nothing changed
    Invalid,
    /// Letter was already tried; nothing changed
    Repeated(char),
    /// Letter occurs in the word
    Correct { letter: char, revealed: usize },
    /// Letter does not occur; one attempt consumed
    Incorrect(char),
    /// The session already ended; nothing changed
    Finished,
}

/// One round of hangman
#[derive(Debug, Clone)]
pub struct Session {
    target: TargetWord,
    mask: RevealMask,
    guessed: FxHashSet<char>,
    wrong_letters: Vec<char>,
    status: GameStatus,
}

impl Session {
    /// Start a session with the opening letters revealed at random
    pub fn new<R: Rng + ?Sized>(target: TargetWord, rng: &mut R) -> Self {
        let mask = RevealMask::with_random_reveals(&target, rng);
        Self::with_mask(target, mask)
    }

    /// Start a session from an explicit mask
    ///
    /// A mask with nothing left to reveal (an empty word) starts as `Won`.
    ///
    /// # Panics
    /// Panics if the mask length differs from the word length.
    #[must_use]
    pub fn with_mask(target: TargetWord, mask: RevealMask) -> Self {
        assert_eq!(
            mask.len(),
            target.len(),
            "mask must have one cell per letter"
        );
        let status = if mask.is_complete() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        Self {
            target,
            mask,
            guessed: FxHashSet::default(),
            wrong_letters: Vec::new(),
            status,
        }
    }

    /// Play one turn
    ///
    /// The input is trimmed and must then be exactly one code point. Letters
    /// match case-sensitively.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RevealMask, TargetWord};
    /// use hangman::game::{GameStatus, GuessOutcome, Session};
    ///
    /// let mut session = Session::with_mask(TargetWord::new("oui"), RevealMask::hidden(3));
    /// assert_eq!(session.guess("ab"), GuessOutcome::Invalid);
    /// assert_eq!(session.guess("z"), GuessOutcome::Incorrect('z'));
    /// session.guess("o");
    /// session.guess("u");
    /// session.guess("i");
    /// assert_eq!(session.status(), GameStatus::Won);
    /// ```
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        if self.status != GameStatus::Playing {
            return GuessOutcome::Finished;
        }

        let Some(letter) = single_letter(raw) else {
            return GuessOutcome::Invalid;
        };

        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated(letter);
        }

        let outcome = if self.target.has_letter(letter) {
            let revealed = self.mask.reveal(letter, self.target.positions_of(letter));
            GuessOutcome::Correct { letter, revealed }
        } else {
            self.wrong_letters.push(letter);
            GuessOutcome::Incorrect(letter)
        };

        if self.mask.is_complete() {
            self.status = GameStatus::Won;
        } else if self.attempts() > ATTEMPT_BUDGET {
            self.status = GameStatus::Lost;
        }

        outcome
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[must_use]
    pub const fn mask(&self) -> &RevealMask {
        &self.mask
    }

    /// Wrong guesses so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.wrong_letters.len()
    }

    /// Wrong guesses still tolerated, zero once the budget is spent
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        ATTEMPT_BUDGET.saturating_sub(self.attempts())
    }

    /// Letters not in the word, in the order they were tried
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    /// Every letter tried so far, right or wrong
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// Gallows frame for the current attempt count
    #[must_use]
    pub fn stage(&self) -> &'static str {
        stage_for(self.attempts())
    }
}

fn single_letter(raw: &str) -> Option<char> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Some(letter),
        _ => None,
    }
}
