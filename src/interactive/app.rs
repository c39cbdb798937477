//! TUI application state and logic

use crate::game::{GameSession, GameStatus};
use crate::stats::{PlayerStatistics, Recorder, StatsStore};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, S: StatsStore> {
    words: &'a WordList,
    session: GameSession<'a>,
    recorder: Recorder<S>,
    rng: StdRng,
    player_label: String,
    stats: PlayerStatistics,
    show_stats: bool,
    messages: Vec<Message>,
    should_quit: bool,
}

impl<'a, S: StatsStore> App<'a, S> {
    pub fn new(
        words: &'a WordList,
        recorder: Recorder<S>,
        player_label: impl Into<String>,
        mut rng: StdRng,
    ) -> Self {
        let session = GameSession::new(words, &mut rng);
        let mut app = Self {
            words,
            session,
            recorder,
            rng,
            player_label: player_label.into(),
            stats: PlayerStatistics::default(),
            show_stats: false,
            messages: Vec::new(),
            should_quit: false,
        };

        match app.recorder.current() {
            Ok(stats) => app.stats = stats,
            Err(err) => {
                tracing::warn!("could not load statistics: {err}");
                app.add_message(format!("Statistics unavailable: {err}"), MessageStyle::Error);
            }
        }
        app.add_message("Guess the word in 6 tries. Type and press Enter.", MessageStyle::Info);
        app
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<'a> {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &PlayerStatistics {
        &self.stats
    }

    #[must_use]
    pub fn player_label(&self) -> &str {
        &self.player_label
    }

    #[must_use]
    pub const fn show_stats(&self) -> bool {
        self.show_stats
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_stats = !self.show_stats,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Char(c) if self.session.is_over() => match c.to_ascii_lowercase() {
                'n' => self.new_game(),
                's' => self.show_stats = !self.show_stats,
                'q' => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => {
                self.session.append_letter(c);
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(submission) if submission.status.is_over() => self.finish_game(),
            Ok(_) => {}
            Err(err) => self.add_message(err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        if self.session.status() == GameStatus::Won {
            let celebration = match self.session.attempts_used() {
                1 => "🎯 Genius! Got it in one!",
                2 => "🔥 Magnificent! Two guesses!",
                3 => "✨ Impressive! Three guesses!",
                4 => "👏 Splendid! Four guesses!",
                5 => "🎉 Great! Five guesses!",
                _ => "😅 Phew! Got it in six!",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            let answer = self.session.target().text().to_uppercase();
            self.add_message(format!("The word was {answer}"), MessageStyle::Error);
        }

        match self.recorder.record(&mut self.session) {
            Ok(Some(stats)) => self.stats = stats,
            Ok(None) => {}
            Err(err) => {
                if let Some(stats) = err.computed_stats() {
                    self.stats = *stats;
                }
                self.add_message(format!("Statistics not saved: {err}"), MessageStyle::Error);
            }
        }

        self.show_stats = true;
        self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.words, &mut self.rng);
        self.show_stats = false;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StatsStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: StatsStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
