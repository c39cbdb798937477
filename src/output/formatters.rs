//! Formatting utilities for terminal output

use crate::core::{GuessRecord, LetterVerdict};
use crate::game::{KEYBOARD_ROWS, KeyboardHints, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn letter_tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    record
        .letters()
        .map(|(letter, verdict)| letter_tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// The on-screen keyboard, one string per row, letters colored by hint
#[must_use]
pub fn keyboard_rows(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = " ".repeat(i * 2);
            let keys: String = row
                .chars()
                .map(|ch| letter_tile(ch, hints.get(ch)).to_string())
                .collect();
            format!("{indent}{keys}")
        })
        .collect()
}

/// Shareable result grid: header line then one emoji row per guess
#[must_use]
pub fn share_text(history: &[GuessRecord], won: bool) -> String {
    let score = if won {
        history.len().to_string()
    } else {
        "X".to_string()
    };
    let mut text = format!("Wordle {score}/{MAX_ATTEMPTS}\n");
    for record in history {
        text.push('\n');
        text.push_str(&record.to_emoji());
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = (((value / max) * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for one guess-distribution row, scaled to the most common count
///
/// A non-zero count always gets at least one filled cell.
#[must_use]
pub fn distribution_bar(count: u32, max_count: u32, width: usize) -> String {
    let bar = create_progress_bar(f64::from(count), f64::from(max_count), width);
    if count > 0 && !bar.starts_with('█') {
        let mut cells: Vec<char> = bar.chars().collect();
        if let Some(first) = cells.first_mut() {
            *first = '█';
        }
        return cells.into_iter().collect();
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn record(guess: &str, target: &str) -> GuessRecord {
        GuessRecord::new(Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn share_text_won() {
        let history = vec![record("crane", "slate"), record("slate", "slate")];
        assert_eq!(share_text(&history, true), "Wordle 2/6\n\n⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_lost_uses_x() {
        let history = vec![record("crane", "slate")];
        assert!(share_text(&history, false).starts_with("Wordle X/6"));
    }

    #[test]
    fn guess_row_contains_letters() {
        let row = guess_row(&record("crane", "slate"));
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(row.contains(&format!(" {letter} ")));
        }
    }

    #[test]
    fn keyboard_has_three_rows() {
        let rows = keyboard_rows(&KeyboardHints::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[2].contains(" Z "));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn distribution_bar_never_hides_nonzero() {
        assert_eq!(distribution_bar(1, 100, 10), "█░░░░░░░░░");
        assert_eq!(distribution_bar(0, 100, 10), "░░░░░░░░░░");
        assert_eq!(distribution_bar(7, 7, 5), "█████");
    }
}
