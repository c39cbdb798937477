//! Keyboard hint projection
//!
//! Folds a guess history into the best verdict seen for each letter, which
//! the UI uses to color its on-screen keyboard. Pure view; holds no state of
//! its own beyond the projection result.

use crate::core::{GuessRecord, LetterVerdict};
use rustc_hash::FxHashMap;

/// QWERTY rows as drawn by the terminal surfaces
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known verdict per guessed letter
///
/// Letters never guessed have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: FxHashMap<u8, LetterVerdict>,
}

impl KeyboardHints {
    /// Hint for a letter, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterVerdict> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.hints.get(&(letter.to_ascii_lowercase() as u8)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    fn observe(&mut self, letter: u8, verdict: LetterVerdict) {
        self.hints
            .entry(letter)
            .and_modify(|best| *best = (*best).max(verdict))
            .or_insert(verdict);
    }
}

/// Project a history onto per-letter hints, priority `Correct > Present > Absent`
#[must_use]
pub fn project(history: &[GuessRecord]) -> KeyboardHints {
    let mut hints = KeyboardHints::default();
    for record in history {
        for (letter, verdict) in record.letters() {
            hints.observe(letter, verdict);
        }
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn record(guess: &str, target: &str) -> GuessRecord {
        GuessRecord::new(Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn empty_history_has_no_hints() {
        let hints = project(&[]);
        assert!(hints.is_empty());
        assert_eq!(hints.get('a'), None);
    }

    #[test]
    fn best_verdict_wins_within_one_guess() {
        // LULLS vs ALLOW: L is Present, Correct and Absent in the same row
        let hints = project(&[record("lulls", "allow")]);
        assert_eq!(hints.get('l'), Some(LetterVerdict::Correct));
        assert_eq!(hints.get('s'), Some(LetterVerdict::Absent));
    }

    #[test]
    fn best_verdict_wins_across_guesses_in_any_order() {
        let target = "slate";
        let first = record("pleat", target); // L Correct, E A T Present
        let second = record("crane", target); // A E Correct

        let forward = project(&[first.clone(), second.clone()]);
        let backward = project(&[second, first]);

        assert_eq!(forward, backward);
        assert_eq!(forward.get('a'), Some(LetterVerdict::Correct));
        assert_eq!(forward.get('e'), Some(LetterVerdict::Correct));
        assert_eq!(forward.get('t'), Some(LetterVerdict::Present));
        assert_eq!(forward.get('c'), Some(LetterVerdict::Absent));
    }

    #[test]
    fn absent_never_downgrades_present() {
        let hints = project(&[record("audio", "pious"), record("daddy", "pious")]);
        assert_eq!(hints.get('d'), Some(LetterVerdict::Absent));
        assert_eq!(hints.get('o'), Some(LetterVerdict::Present));
        assert_eq!(hints.get('u'), Some(LetterVerdict::Present));
    }

    #[test]
    fn lookup_is_case_insensitive_and_ignores_symbols() {
        let hints = project(&[record("crane", "slate")]);
        assert_eq!(hints.get('A'), Some(LetterVerdict::Correct));
        assert_eq!(hints.get('?'), None);
        assert_eq!(hints.len(), 5);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }
}
