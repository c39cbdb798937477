//! Word list loading utilities
//!
//! Turns raw word sources (files, embedded constants) into validated `Word`s.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Blank lines and `#` comments are ignored. Lines that are not valid
/// five-letter words are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content, &path.display().to_string()))
}

fn parse_lines(content: &str, source: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    tracing::warn!("{source}:{}: skipping '{trimmed}': {err}", idx + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_skips_comments_blanks_and_junk() {
        let words = parse_lines("# header\ncrane\n\n  SLATE  \nab1de\nlonger\n", "test");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nnope").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
