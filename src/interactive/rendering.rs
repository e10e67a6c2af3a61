//! TUI rendering with ratatui
//!
//! Board grid, keyboard hints, messages and a help bar.

use super::app::{App, MessageStyle};
use crate::core::Mark;
use crate::game::{Outcome, Snapshot};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.game.snapshot();
    let board_height = u16::try_from(snapshot.board.rows()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                           // Header
            Constraint::Min(board_height.saturating_add(2)), // Board
            Constraint::Length(5),                           // Keyboard
            Constraint::Length(7),                           // Messages
            Constraint::Length(1),                           // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_keyboard(f, &snapshot, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_help(f, &snapshot, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE - Try to guess the word!")
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

fn mark_style(mark: Option<Mark>) -> Style {
    match mark {
        Some(Mark::Hit) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Mark::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Mark::Miss) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let cursor = snapshot.board.cursor();
    let playing = snapshot.outcome == Outcome::InProgress;

    let lines: Vec<Line> = snapshot
        .board
        .iter_rows()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .flat_map(|(col, cell)| {
                    let mut style = mark_style(cell.mark());
                    if playing && row == cursor.row && col == cursor.col {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    let text = cell
                        .letter()
                        .map_or_else(|| " · ".to_string(), |letter| format!(" {letter} "));
                    [Span::styled(text, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Attempt {}/{} ",
                (snapshot.attempts_used + usize::from(playing)).min(snapshot.board.rows()),
                snapshot.board.rows()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let style = match snapshot.hints.get(key) {
                        None => Style::default().fg(Color::Black).bg(Color::Gray),
                        hint => mark_style(hint),
                    };
                    [Span::styled(format!(" {key} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
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

fn render_help(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let help_text = if snapshot.outcome.is_finished() {
        "n/Enter: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
