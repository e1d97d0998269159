//! Formatting utilities for terminal output

use crate::core::{PLACEHOLDER, RevealMask};

/// Spread the mask out so each cell is easy to count
#[must_use]
pub fn spaced_mask(mask: &RevealMask) -> String {
    let mut out = String::with_capacity(mask.len() * 2);
    for (i, cell) in mask.cells().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(cell.unwrap_or(PLACEHOLDER));
    }
    out
}

/// Wrong letters in the order they were tried
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pips for the remaining attempts, filled then spent
#[must_use]
pub fn attempts_bar(remaining: usize, budget: usize) -> String {
    let remaining = remaining.min(budget);
    format!("{}{}", "●".repeat(remaining), "○".repeat(budget - remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_mask_hidden() {
        assert_eq!(spaced_mask(&RevealMask::hidden(4)), "_ _ _ _");
    }

    #[test]
    fn spaced_mask_partial() {
        let mut mask = RevealMask::hidden(4);
        mask.reveal('h', &[1]);
        assert_eq!(spaced_mask(&mask), "_ h _ _");
    }

    #[test]
    fn spaced_mask_empty() {
        assert_eq!(spaced_mask(&RevealMask::hidden(0)), "");
    }

    #[test]
    fn letter_list_keeps_order() {
        assert_eq!(letter_list(&['z', 'x', 'q']), "z, x, q");
        assert_eq!(letter_list(&[]), "");
    }

    #[test]
    fn attempts_bar_full_and_spent() {
        assert_eq!(attempts_bar(6, 6), "●●●●●●");
        assert_eq!(attempts_bar(2, 6), "●●○○○○");
        assert_eq!(attempts_bar(0, 6), "○○○○○○");
    }
}
