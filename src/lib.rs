//! Hangman
//!
//! A terminal word-guessing game: a secret word is drawn from a word list, a
//! third of its letters are shown up front, and the player guesses the rest
//! one letter at a time before the gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::TargetWord;
//! use hangman::game::{GameStatus, Session};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut session = Session::new(TargetWord::new("chat"), &mut rng);
//!
//! for letter in ["c", "h", "a", "t"] {
//!     session.guess(letter);
//! }
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Session rules and errors
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
