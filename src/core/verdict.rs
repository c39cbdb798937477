//! Guess evaluation
//!
//! Scores a guess against the target one letter at a time:
//! - `Correct` = letter in the same position in the target
//! - `Present` = letter elsewhere in the target, not yet accounted for
//! - `Absent`  = letter not in the target, or every occurrence already used
//!
//! Verdicts order by strength (`Absent < Present < Correct`), which is what
//! the keyboard projection relies on when picking the best hint per key.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Per-letter classification of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Square used in the shareable result grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score `guess` against `target`
///
/// Implements Wordle's duplicate-letter rule: a letter is never credited
/// (`Correct` or `Present`) more times than it occurs in the target.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark present-but-misplaced letters while the pool has them
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterVerdict::*, Word, evaluate};
///
/// let guess = Word::new("lulls").unwrap();
/// let target = Word::new("allow").unwrap();
///
/// // Three L's guessed, two in the target: only two get credit
/// assert_eq!(
///     evaluate(&guess, &target),
///     [Present, Absent, Correct, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> [LetterVerdict; WORD_LENGTH] {
    let mut result = [LetterVerdict::Absent; WORD_LENGTH];
    let mut available = target.letter_counts();

    // Allow: Index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.letter_at(i);
        if letter == target.letter_at(i) {
            result[i] = LetterVerdict::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterVerdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            result[i] = LetterVerdict::Present;
            *count -= 1;
        }
    }

    result
}

/// One accepted guess with its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    verdicts: [LetterVerdict; WORD_LENGTH],
}

impl GuessRecord {
    /// Evaluate `guess` against `target` and keep the result
    #[must_use]
    pub fn new(guess: Word, target: &Word) -> Self {
        let verdicts = evaluate(&guess, target);
        Self {
            word: guess,
            verdicts,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.verdicts
    }

    /// Iterate `(letter, verdict)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterVerdict)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.verdicts.iter().copied())
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.verdicts.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Render the verdicts as a row of colored squares, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word.text().to_uppercase(), self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterVerdict::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> [LetterVerdict; WORD_LENGTH] {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn evaluate_all_absent() {
        assert_eq!(eval("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn evaluate_all_correct() {
        for word in ["crane", "slate", "aaaaa", "llama"] {
            assert_eq!(eval(word, word), [Correct; 5]);
        }
    }

    #[test]
    fn evaluate_real_wordle_example() {
        // R is absent because SLATE has no R
        assert_eq!(
            eval("crane", "slate"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_repeated_guess_letter_not_over_credited() {
        // LULLS vs ALLOW: three L's guessed, target holds two
        let verdicts = eval("lulls", "allow");
        assert_eq!(verdicts, [Present, Absent, Correct, Absent, Absent]);
    }

    #[test]
    fn evaluate_llama_against_allow() {
        // Second L is an exact match; first L takes the remaining L; only one A credited
        assert_eq!(
            eval("llama", "allow"),
            [Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_green_takes_priority_over_earlier_yellow() {
        // FLOOR has two O's: one exact match, one spare for the misplaced O
        assert_eq!(
            eval("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
        // Single target E: the exact match wins, the earlier E gets nothing
        assert_eq!(
            eval("eerie", "crane"),
            [Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_duplicate_letters_both_present() {
        // ERASE has two E's, so both guessed E's are yellow
        assert_eq!(
            eval("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn evaluate_never_credits_more_than_target_count() {
        let words = ["allow", "lulls", "llama", "speed", "erase", "eerie", "geese", "mamma"];
        for guess in words {
            for target in words {
                let g = Word::new(guess).unwrap();
                let t = Word::new(target).unwrap();
                let verdicts = evaluate(&g, &t);
                for &letter in g.letters() {
                    let credited = g
                        .letters()
                        .iter()
                        .zip(verdicts.iter())
                        .filter(|&(&l, &v)| l == letter && v != Absent)
                        .count();
                    let in_target = t.letters().iter().filter(|&&l| l == letter).count();
                    assert!(
                        credited <= in_target,
                        "{guess} vs {target}: '{}' credited {credited} times",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn verdict_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }

    #[test]
    fn guess_record_emoji_and_solved() {
        let target = Word::new("slate").unwrap();
        let record = GuessRecord::new(Word::new("crane").unwrap(), &target);
        assert_eq!(record.to_emoji(), "⬜⬜🟩⬜🟩");
        assert!(!record.is_solved());
        assert_eq!(record.to_string(), "CRANE ⬜⬜🟩⬜🟩");

        let solved = GuessRecord::new(target.clone(), &target);
        assert!(solved.is_solved());
    }

    #[test]
    fn guess_record_letters_pairs() {
        let record = GuessRecord::new(Word::new("lulls").unwrap(), &Word::new("allow").unwrap());
        let pairs: Vec<(u8, LetterVerdict)> = record.letters().collect();
        assert_eq!(pairs[0], (b'l', Present));
        assert_eq!(pairs[2], (b'l', Correct));
        assert_eq!(pairs[4], (b's', Absent));
    }
}
