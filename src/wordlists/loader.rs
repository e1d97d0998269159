//! Word list loading utilities
//!
//! Reads a line-delimited word list from a file or a string.

use super::WordList;
use crate::game::GameError;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Line terminators are stripped and blank lines skipped;
/// every other line is kept as-is.
///
/// # Errors
///
/// Returns `GameError::Io` if the file cannot be opened or read (including
/// invalid UTF-8), and `GameError::EmptyWordList` if it holds no word.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| GameError::file(path, e))?;

    let words = parse_words(&content)?;
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a word list from text
///
/// # Errors
///
/// Returns `GameError::EmptyWordList` if no non-blank line remains.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::parse_words;
///
/// let words = parse_words("chat\r\n\nchien\n").unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn parse_words(text: &str) -> Result<WordList, GameError> {
    let words: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    WordList::new(words)
}
