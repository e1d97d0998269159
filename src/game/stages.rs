//! Gallows art, one frame per wrong guess

/// Stage art from an empty gallows to a complete figure
///
/// The number of frames fixes the attempt budget: one frame per tolerated
/// wrong guess plus the opening frame.
pub const STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Wrong guesses tolerated before the game is lost
pub const ATTEMPT_BUDGET: usize = STAGES.len() - 1;

/// Stage art for a wrong-guess count, clamped to the last frame
#[must_use]
pub fn stage_for(attempts: usize) -> &'static str {
    STAGES[attempts.min(ATTEMPT_BUDGET)]
}
