//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{LetterVerdict, WORD_LENGTH};
use crate::game::{GameStatus, KEYBOARD_ROWS, MAX_ATTEMPTS};
use crate::output::formatters::distribution_bar;
use crate::stats::StatsStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StatsStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(8), // Board: six rows plus borders
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help(f, app, chunks[4]);

    if app.show_stats() {
        render_stats_popup(f, app, f.area());
    }
}

fn verdict_style(verdict: Option<LetterVerdict>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        Some(LetterVerdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterVerdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterVerdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, verdict: Option<LetterVerdict>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        verdict_style(verdict),
    )
}

fn render_header<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(format!("🟩 WORDLE  ·  {}", app.player_label()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let session = app.session();
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS);

    for record in session.history() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, verdict) in record.letters() {
            spans.push(tile(char::from(letter), Some(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if !session.is_over() {
        let typed: Vec<char> = session.current_input().chars().collect();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let span = typed.get(i).map_or_else(
                || Span::styled(" _ ", Style::default().fg(Color::Yellow)),
                |&ch| tile(ch, None),
            );
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ATTEMPTS {
        let empty: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [Span::styled(" · ", Style::default().fg(Color::DarkGray)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(empty));
    }

    let title = match session.status() {
        GameStatus::InProgress => format!(" Guess {}/{MAX_ATTEMPTS} ", session.attempts_used() + 1),
        GameStatus::Won => " Solved! ".to_string(),
        GameStatus::Lost => " Out of guesses ".to_string(),
    };
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let hints = app.session().keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|ch| [tile(ch, hints.get(ch)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages()
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let help_text = if app.session().is_over() {
        "n: New Game | s: Statistics | Esc: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Tab: Statistics | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_stats_popup<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let popup = centered_rect(area, 46, 16);
    let stats = app.stats();

    let highlight = app
        .session()
        .outcome()
        .filter(|outcome| outcome.won)
        .map(|outcome| usize::from(outcome.attempts_used));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:>6}", stats.games_played),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>8}", stats.win_percentage()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>9}", stats.current_streak),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>9}", stats.max_streak),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{:>6}{:>8}{:>9}{:>9}", "Played", "Win %", "Streak", "Max"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let max = stats.guess_distribution.max_count();
    for (attempts, count) in stats.guess_distribution.iter() {
        let color = if highlight == Some(attempts) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {attempts} ")),
            Span::styled(distribution_bar(count, max, 28), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::White)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
