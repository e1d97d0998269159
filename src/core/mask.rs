//! Reveal mask over the target word
//!
//! One cell per code point of the target. A cell is either hidden or holds the
//! revealed letter. Cells only ever go from hidden to revealed.

use super::TargetWord;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Symbol shown for a hidden cell
pub const PLACEHOLDER: char = '_';

/// Per-position hidden/revealed state for a target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    cells: Vec<Option<char>>,
}

impl RevealMask {
    /// A mask with every cell hidden
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Build the opening mask for a word
    ///
    /// Whitespace cells (between the parts of a multi-word entry) are shown
    /// from the start since they cannot be guessed. On top of those, up to
    /// `len / 3` distinct letter positions are revealed, taken from the front
    /// of a uniform random permutation of the letter positions. At least one
    /// letter always stays hidden.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{RevealMask, TargetWord};
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let word = TargetWord::new("cornichon");
    /// let mask = RevealMask::with_random_reveals(&word, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(mask.len(), 9);
    /// assert_eq!(mask.revealed_count(), 3);
    /// ```
    pub fn with_random_reveals<R: Rng + ?Sized>(word: &TargetWord, rng: &mut R) -> Self {
        let mut mask = Self::hidden(word.len());

        let mut letter_positions = Vec::with_capacity(word.len());
        for (i, &ch) in word.chars().iter().enumerate() {
            if ch.is_whitespace() {
                mask.cells[i] = Some(ch);
            } else {
                letter_positions.push(i);
            }
        }
        letter_positions.shuffle(rng);

        let quota = (word.len() / 3).min(letter_positions.len().saturating_sub(1));
        let chars = word.chars();
        for &i in letter_positions.iter().take(quota) {
            mask.cells[i] = Some(chars[i]);
        }

        mask
    }

    /// Reveal `letter` at each of `positions`
    ///
    /// Returns how many cells went from hidden to revealed.
    ///
    /// # Panics
    /// Panics if a position is out of range for the mask.
    pub fn reveal(&mut self, letter: char, positions: &[usize]) -> usize {
        let mut newly_revealed = 0;
        for &i in positions {
            if self.cells[i].is_none() {
                newly_revealed += 1;
            }
            self.cells[i] = Some(letter);
        }
        newly_revealed
    }

    /// True once no hidden cell remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed_positions().count()
    }

    /// Indices of revealed cells, in order
    pub fn revealed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|_| i))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}
