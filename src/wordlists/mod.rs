//! Word lists for hangman
//!
//! A `WordList` is never empty, so picking a word from it cannot fail.

pub mod loader;

use crate::game::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Candidate secret words, one per input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Wrap a list of words
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<String>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Pick one word uniformly at random
    ///
    /// # Panics
    /// Will not panic - the list is non-empty by construction.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .expect("word list is never empty")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
