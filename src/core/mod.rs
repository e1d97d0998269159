//! Core domain types for hangman
//!
//! The secret word and the mask laid over it. Pure types with no I/O.

mod mask;
mod word;

pub use mask::{PLACEHOLDER, RevealMask};
pub use word::TargetWord;
