//! Target word representation
//!
//! A `TargetWord` stores the secret word as code points along with an index of
//! where each letter occurs, so a guess can reveal every matching cell at once.

use rustc_hash::FxHashMap;
use std::fmt;

/// The secret word for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

impl TargetWord {
    /// Create a new target word
    ///
    /// Any string is accepted, including the empty string. Letters are compared
    /// by exact code point, so `A` and `a` are different letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("école");
    /// assert_eq!(word.len(), 5);
    /// assert_eq!(word.positions_of('é'), &[0]);
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Self {
            text,
            chars,
            char_positions,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of code points in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.char_positions.len()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation() {
        let word = TargetWord::new("chat");
        assert_eq!(word.text(), "chat");
        assert_eq!(word.chars(), &['c', 'h', 'a', 't']);
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_length_counts_code_points() {
        let word = TargetWord::new("naïve");
        assert_eq!(word.len(), 5);
        assert!(word.text().len() > 5);
    }

    #[test]
    fn word_empty() {
        let word = TargetWord::new("");
        assert!(word.is_empty());
        assert_eq!(word.distinct_letters(), 0);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = TargetWord::new("banana");
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[]);
        assert_eq!(word.distinct_letters(), 3);
    }

    #[test]
    fn word_is_case_sensitive() {
        let word = TargetWord::new("Paris");
        assert!(word.has_letter('P'));
        assert!(!word.has_letter('p'));
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("chat");
        assert_eq!(format!("{word}"), "chat");
    }
}
