//! Terminal output formatting
//!
//! Rendering of the board, feedback and end-of-game banners.

pub mod display;
pub mod formatters;

pub use display::{
    print_feedback, print_intro, print_loss, print_prompt, print_turn, print_win,
};
