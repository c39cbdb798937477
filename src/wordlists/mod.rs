//! Word list for targets and guesses
//!
//! One canonical set of valid words. Targets are drawn from it and guesses are
//! validated against it, so every target is always guessable.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable set of valid words
///
/// Safe to share between any number of sessions; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from words, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let mut unique = Vec::new();
        for word in words {
            if index.insert(word.clone()) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` only if the build produced no words.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Load a list from a text file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| WordListError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!("loaded {} words from {}", words.len(), path.display());
        Self::new(words)
    }

    /// Case-insensitive exact membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.index.contains(&w))
    }

    /// Membership test for an already-validated word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Draw a target uniformly at random
    pub fn draw_target<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Construction guarantees at least one word
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
