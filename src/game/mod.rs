//! Game rules: session state, gallows stages and errors

mod error;
mod session;
mod stages;

pub use error::GameError;
pub use session::{GameStatus, GuessOutcome, Session};
pub use stages::{ATTEMPT_BUDGET, STAGES, stage_for};
