//! Single-game state machine
//!
//! A session owns the hidden target, the accepted guesses and the letters
//! typed so far. It moves `InProgress -> Won | Lost` exactly once; after that
//! every command is refused without touching state.

use super::keyboard::{self, KeyboardHints};
use crate::core::{GuessRecord, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;
use thiserror::Error;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submitted guess was refused. State is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters ({len} of {max})", max = WORD_LENGTH)]
    IncompleteGuess { len: usize },
    #[error("Not in word list: {}", .0.to_uppercase())]
    InvalidWord(String),
    #[error("The game is already over")]
    GameOver,
}

/// Result of a finished game, as handed to the statistics aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts_used: u8,
}

/// An accepted guess and the status it left the session in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub record: GuessRecord,
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    words: &'a WordList,
    target: Word,
    history: Vec<GuessRecord>,
    input: String,
    status: GameStatus,
    outcome_taken: bool,
}

impl<'a> GameSession<'a> {
    /// Start a game with a freshly drawn target
    pub fn new<R: Rng + ?Sized>(words: &'a WordList, rng: &mut R) -> Self {
        let target = words.draw_target(rng).clone();
        tracing::trace!(word = %target, "drew target");
        Self::start(words, target)
    }

    /// Start a game against a chosen target
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidWord` if the target is not in the word list,
    /// since such a game could never be won.
    pub fn with_target(words: &'a WordList, target: Word) -> Result<Self, GuessError> {
        if !words.contains_word(&target) {
            return Err(GuessError::InvalidWord(target.text().to_string()));
        }
        Ok(Self::start(words, target))
    }

    fn start(words: &'a WordList, target: Word) -> Self {
        Self {
            words,
            target,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            input: String::with_capacity(WORD_LENGTH),
            status: GameStatus::InProgress,
            outcome_taken: false,
        }
    }

    /// Add one letter to the input buffer
    ///
    /// Returns `false` (and changes nothing) when the game is over, the buffer
    /// is full, or `ch` is not an ASCII letter.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() || self.input.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.input.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last typed letter; `false` if there was nothing to remove
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.input.pop().is_some()
    }

    /// Submit the buffered letters as a guess
    ///
    /// # Errors
    ///
    /// - `GameOver` if the session already ended
    /// - `IncompleteGuess` if fewer than five letters are buffered
    /// - `InvalidWord` if the letters are not in the word list
    pub fn submit_guess(&mut self) -> Result<Submission, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.input.len() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess {
                len: self.input.len(),
            });
        }

        let guess = match Word::new(&self.input) {
            Ok(word) if self.words.contains_word(&word) => word,
            _ => {
                tracing::debug!("rejected guess '{}': not in word list", self.input);
                return Err(GuessError::InvalidWord(self.input.clone()));
            }
        };

        let record = GuessRecord::new(guess, &self.target);
        self.history.push(record.clone());
        self.input.clear();

        if record.is_solved() {
            self.status = GameStatus::Won;
        } else if self.history.len() == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        tracing::debug!(
            attempt = self.history.len(),
            "accepted guess {}",
            record.to_emoji()
        );
        if self.status.is_over() {
            tracing::info!(
                status = ?self.status,
                attempts = self.history.len(),
                "game finished"
            );
        }

        Ok(Submission {
            record,
            status: self.status,
        })
    }

    /// Hand out the finished game's outcome, once
    ///
    /// Returns `None` while the game is in progress and on every call after
    /// the first one following the terminal transition.
    pub fn take_outcome(&mut self) -> Option<GameOutcome> {
        if self.outcome_taken {
            return None;
        }
        let outcome = self.outcome()?;
        self.outcome_taken = true;
        Some(outcome)
    }

    /// Peek at the outcome without consuming it
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        let attempts_used = match self.status {
            GameStatus::InProgress => return None,
            GameStatus::Won => self.history.len(),
            GameStatus::Lost => MAX_ATTEMPTS,
        };
        Some(GameOutcome {
            won: self.status == GameStatus::Won,
            attempts_used: attempts_used as u8,
        })
    }

    #[must_use]
    pub fn outcome_taken(&self) -> bool {
        self.outcome_taken
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    #[must_use]
    pub const fn words(&self) -> &'a WordList {
        self.words
    }

    /// Best-known verdict per letter, derived from the history
    #[must_use]
    pub fn keyboard(&self) -> KeyboardHints {
        keyboard::project(&self.history)
    }
}
