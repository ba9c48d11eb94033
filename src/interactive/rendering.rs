//! TUI rendering with ratatui
//!
//! Layout for the word scramble game screen.

use super::app::{App, MessageStyle};
use crate::client::Phase;
use crate::output::formatters::{hint_text, verdict_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Timer
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_timer(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Puzzle
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[2]);

    render_puzzle(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔀 WORD SCRAMBLE")
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

fn render_timer(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.time_remaining();
    let total = app.session.round_seconds().max(1);
    let percent = (u64::from(remaining) * 100 / u64::from(total)).min(100) as u16;

    let color = match remaining {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}s"));

    f.render_widget(gauge, area);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let scrambled = app
        .session
        .puzzle()
        .map(|p| p.scrambled().to_string())
        .unwrap_or_default();

    let mut content = vec![
        Line::from(vec![
            Span::raw("Scrambled Word: "),
            Span::styled(
                scrambled,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    if let Some(ch) = app.session.visible_hint() {
        content.push(Line::from(Span::styled(
            hint_text(ch),
            Style::default().fg(Color::Cyan),
        )));
    }

    if let Some(correct) = app.session.verdict() {
        let color = if correct { Color::Green } else { Color::Red };
        content.push(Line::from(Span::styled(
            verdict_text(correct),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
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
    let (title, color) = match app.session.phase() {
        Phase::Idle => (" Press Enter to start ", Color::DarkGray),
        Phase::Playing if app.session.input_enabled() => (
            " Your Guess | Enter to submit | TAB for hint ",
            Color::Yellow,
        ),
        Phase::Playing => (" Your Guess ", Color::DarkGray),
        Phase::Expired => (" Time's up! | Enter to restart ", Color::DarkGray),
    };

    let input = Paragraph::new(app.session.guess())
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

    let mode_text = match app.session.phase() {
        Phase::Idle => "Mode: Ready",
        Phase::Playing => "Mode: Playing",
        Phase::Expired => "Mode: Time's up",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.session.stats();
    let score_text = format!("Score: {}/{}", stats.correct, stats.total);
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let accuracy_text = format!("Accuracy: {}%", app.session.accuracy());
    let accuracy = Paragraph::new(accuracy_text).alignment(Alignment::Center);
    f.render_widget(accuracy, chunks[2]);

    let help_text = match app.session.phase() {
        Phase::Idle => "Enter: Start | q: Quit",
        Phase::Playing => "Enter: Submit | TAB: Hint | Esc: Quit",
        Phase::Expired => "Enter: Restart | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
