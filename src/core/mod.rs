//! Core domain types for Wordle
//!
//! Words and guess evaluation. Everything here is pure and deterministic.

mod verdict;
mod word;

pub use verdict::{GuessRecord, LetterVerdict, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
