//! Game play
//!
//! The per-game state machine and the views derived from its history.

pub mod keyboard;
mod session;

pub use keyboard::{KEYBOARD_ROWS, KeyboardHints, project};
pub use session::{GameOutcome, GameSession, GameStatus, GuessError, MAX_ATTEMPTS, Submission};
