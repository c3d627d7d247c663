//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KeyStatus, LetterStatus};
use crate::game::letter_status;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - Six Letters")
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

const fn letter_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Misplaced => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

const fn key_color(status: KeyStatus) -> Color {
    match status {
        KeyStatus::Correct => Color::Green,
        KeyStatus::Misplaced => Color::Yellow,
        KeyStatus::Absent => Color::DarkGray,
        KeyStatus::Unseen => Color::Gray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.round.rules();
    let mut lines = Vec::with_capacity(rules.max_guesses * 2);

    for entry in app.round.history() {
        let tiles = entry
            .guess()
            .text()
            .chars()
            .zip(entry.feedback().statuses())
            .flat_map(|(letter, &status)| [tile(letter, letter_color(status)), Span::raw(" ")]);
        lines.push(Line::from(tiles.collect::<Vec<_>>()));
        lines.push(Line::from(""));
    }

    let mut rows_left = rules.max_guesses.saturating_sub(app.round.guess_count());
    if rows_left > 0 && app.input_mode == InputMode::Guessing {
        let typed: Vec<char> = app.input_buffer.chars().collect();
        let spans = (0..rules.word_length).flat_map(|i| {
            let letter = typed.get(i).copied().unwrap_or(' ');
            [tile(letter, Color::White), Span::raw(" ")]
        });
        lines.push(Line::from(spans.collect::<Vec<_>>()));
        lines.push(Line::from(""));
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        let spans = (0..rules.word_length).flat_map(|_| [tile(' ', Color::Gray), Span::raw(" ")]);
        lines.push(Line::from(spans.collect::<Vec<_>>()));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(5)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let history = app.round.history();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans = row.bytes().flat_map(|letter| {
                let status = letter_status(letter, history);
                [tile(char::from(letter), key_color(status)), Span::raw(" ")]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::RoundOver => (
            " Round over | Enter for a new round, Esc to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a guess | Enter to submit, Tab for a suggestion ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let guesses_text = format!("Guesses left: {}", app.round.guesses_left());
    f.render_widget(
        Paragraph::new(guesses_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games(),
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    f.render_widget(
        Paragraph::new(candidates_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Round | Tab: Suggest")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
