//! Simple line-based game
//!
//! Plays Wordle without the TUI: one guess per line, colored feedback after
//! each, statistics recorded when a game ends.

use crate::core::WORD_LENGTH;
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS};
use crate::output::formatters::{guess_row, keyboard_rows, share_text};
use crate::stats::{Recorder, StatsStore};
use crate::wordlists::WordList;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the simple game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S: StatsStore>(words: &WordList, recorder: &mut Recorder<S>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut rng = rand::rng();
    play_lines(&mut stdin.lock(), &mut stdout.lock(), words, recorder, &mut rng)
}

/// Play games reading guesses from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<S, I, O, R>(
    input: &mut I,
    out: &mut O,
    words: &WordList,
    recorder: &mut Recorder<S>,
    rng: &mut R,
) -> Result<()>
where
    S: StatsStore,
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "{}", "              W O R D L E".bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries. Type 'quit' to stop.\n"
    )?;

    loop {
        let mut session = GameSession::new(words, rng);
        if !play_one_game(input, out, &mut session, recorder)? {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => writeln!(out, "\n🔄 New game started!\n")?,
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Returns `false` if the player quit or input ended before the game did
fn play_one_game<S, I, O>(
    input: &mut I,
    out: &mut O,
    session: &mut GameSession<'_>,
    recorder: &mut Recorder<S>,
) -> Result<bool>
where
    S: StatsStore,
    I: BufRead,
    O: Write,
{
    while !session.is_over() {
        let label = format!("Guess {}/{MAX_ATTEMPTS}", session.attempts_used() + 1);
        let Some(line) = prompt(input, out, &label)? else {
            return Ok(false);
        };
        if matches!(line.as_str(), "quit" | "q" | "exit") {
            return Ok(false);
        }
        if line.chars().count() > WORD_LENGTH {
            writeln!(out, "{}", format!("❌ Too many letters ({WORD_LENGTH} max)").red())?;
            continue;
        }

        while session.delete_letter() {}
        for ch in line.chars() {
            session.append_letter(ch);
        }

        match session.submit_guess() {
            Ok(_) => {
                for record in session.history() {
                    writeln!(out, "   {}", guess_row(record))?;
                }
                writeln!(out)?;
                if !session.is_over() {
                    for row in keyboard_rows(&session.keyboard()) {
                        writeln!(out, "   {row}")?;
                    }
                    writeln!(out)?;
                }
            }
            Err(err) => writeln!(out, "{}", format!("❌ {err}").red())?,
        }
    }

    report_finished(out, session, recorder)?;
    Ok(true)
}

fn report_finished<S: StatsStore, O: Write>(
    out: &mut O,
    session: &mut GameSession<'_>,
    recorder: &mut Recorder<S>,
) -> Result<()> {
    let won = session.status() == GameStatus::Won;
    if won {
        let praise = match session.attempts_used() {
            1 => "🏆 Genius!",
            2 => "⭐ Magnificent!",
            3 => "💫 Impressive!",
            4 => "✨ Splendid!",
            5 => "👍 Great!",
            _ => "😅 Phew!",
        };
        writeln!(out, "{}", praise.bright_yellow().bold())?;
    } else {
        writeln!(
            out,
            "The word was {}",
            session.target().text().to_uppercase().bright_white().bold()
        )?;
    }
    writeln!(out, "\n{}\n", share_text(session.history(), won))?;

    match recorder.record(session) {
        Ok(Some(stats)) => writeln!(
            out,
            "Played {} | Win {}% | Streak {} | Best {}\n",
            stats.games_played,
            stats.win_percentage(),
            stats.current_streak,
            stats.max_streak
        )?,
        Ok(None) => {}
        Err(err) => writeln!(out, "{}", format!("⚠ {err}").yellow())?,
    }
    Ok(())
}

/// Read one trimmed, lowercased line; `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
