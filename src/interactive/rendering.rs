//! TUI rendering with ratatui
//!
//! The whole screen is a projection of `App`; nothing here mutates state.

use super::app::{App, MessageStyle};
use super::input::KEYBOARD_COLUMNS;
use crate::core::{Backdrop, Letter, MAX_WRONG, Round, RoundStatus};
use crate::output::drawing::{DRAWING_WIDTH, backdrop_rows, figure_rows};
use crate::output::formatters::{attempts_left, guessed_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Drawing rows plus border and padding
const DRAWING_PANEL_WIDTH: u16 = DRAWING_WIDTH as u16 + 8;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(12),   // Drawing and word
            Constraint::Length(5), // Keyboard and messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(DRAWING_PANEL_WIDTH), // Drawing
            Constraint::Min(30),    // Word and progress
        ])
        .split(chunks[1]);

    render_drawing(f, app.game.round(), main_chunks[0]);
    render_game_panel(f, app.game.round(), main_chunks[1]);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(40), // Keyboard
            Constraint::Min(20),    // Messages
        ])
        .split(chunks[2]);

    render_keyboard(f, app, bottom_chunks[0]);
    render_messages(f, app, bottom_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "HANGMAN",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Guess the word before the man is hanged.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

const fn backdrop_color(backdrop: Backdrop) -> Color {
    match backdrop {
        Backdrop::Mountain => Color::Green,
        Backdrop::Ocean => Color::Blue,
        Backdrop::Plain => Color::LightGreen,
    }
}

fn render_drawing(f: &mut Frame, round: &Round, area: Rect) {
    let figure_style = Style::default().fg(Color::White);
    let scenery_style = Style::default().fg(backdrop_color(round.backdrop()));

    let lines: Vec<Line> = figure_rows(round.wrong_count())
        .into_iter()
        .map(|row| Line::styled(row, figure_style))
        .chain(
            backdrop_rows(round.backdrop())
                .into_iter()
                .map(|row| Line::styled(row, scenery_style)),
        )
        .collect();

    let drawing = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(drawing, area);
}

fn render_game_panel(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Masked word
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Result and guesses
        ])
        .split(area);

    render_word(f, round, chunks[0]);
    render_attempts(f, round, chunks[1]);
    render_result(f, round, chunks[2]);
}

fn render_word(f: &mut Frame, round: &Round, area: Rect) {
    let revealed = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hidden = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::with_capacity(round.word().len() * 2);
    for (i, slot) in round.revealed().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(match slot {
            Some(letter) => Span::styled(letter.to_string(), revealed),
            None => Span::styled("_", hidden),
        });
    }

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Word ").borders(Borders::ALL));
    f.render_widget(word, area);
}

fn render_attempts(f: &mut Frame, round: &Round, area: Rect) {
    let wrong = round.wrong_count().min(MAX_WRONG);
    let color = match round.remaining_attempts() {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Remaining attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(wrong as f64 / MAX_WRONG as f64)
        .label(attempts_left(round.remaining_attempts()));

    f.render_widget(gauge, area);
}

fn render_result(f: &mut Frame, round: &Round, area: Rect) {
    let mut lines = vec![Line::from(format!(
        "Wrong guesses: {} / {MAX_WRONG}",
        round.wrong_count()
    ))];

    match round.status() {
        RoundStatus::Won => lines.push(Line::from(Span::styled(
            "You win! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        RoundStatus::Lost => lines.push(Line::from(vec![
            Span::styled("You lose, the word was ", Style::default().fg(Color::Red)),
            Span::styled(
                round.word().text().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])),
        RoundStatus::Playing => lines.push(Line::from("")),
    }

    lines.push(Line::from(vec![
        Span::styled("Guessed: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(guessed_list(round.guessed())),
    ]));

    let result = Paragraph::new(lines).block(
        Block::default()
            .title(" Status ")
            .borders(Borders::ALL),
    );
    f.render_widget(result, area);
}

fn key_style(round: &Round, letter: Letter, selected: bool) -> Style {
    let style = if round.has_guessed(letter) {
        let color = if round.word().has_letter(letter) {
            Color::Green
        } else {
            Color::Red
        };
        Style::default().fg(color).add_modifier(Modifier::DIM)
    } else if !round.is_enabled(letter) {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };

    if selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();
    let selected = app.selected_letter();

    let letters: Vec<Letter> = Letter::alphabet().collect();
    let lines: Vec<Line> = letters
        .chunks(KEYBOARD_COLUMNS)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&letter| {
                    Span::styled(
                        format!(" {letter} "),
                        key_style(round, letter, letter == selected),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats = app.game.stats();
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let source_text = format!(
        "Word list: {} ({} words)",
        app.word_source,
        app.game.word_count()
    );
    f.render_widget(
        Paragraph::new(source_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.game.round().is_over() {
        "Ctrl+N: New Game | Esc: Quit"
    } else {
        "A-Z/Enter: Guess | Ctrl+N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
