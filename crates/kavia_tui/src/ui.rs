//! Stateless UI rendering.

use crate::app::App;
use crate::config::TuiConfig;
use kavia_tictactoe::{winning_line, Cell, Mark, Outcome, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "KAVIA TicTacToe";
const HINTS: &str = "arrows/hjkl move · enter/space play · 1-9 pick cell · r restart · q quit";

/// Draws one frame from the application state.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Turn banner
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Result / rejection
            Constraint::Length(if *config.show_hints() { 1 } else { 0 }),
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let banner = Paragraph::new(app.state().turn_text())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(banner, chunks[1]);

    draw_board(frame, chunks[2], app, config);

    let (message, style) = result_line(app);
    let result = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(result, chunks[3]);

    if *config.show_hints() {
        let hints = Paragraph::new(HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, chunks[4]);
    }
}

fn result_line(app: &App) -> (String, Style) {
    match (app.state().outcome(), app.last_rejection()) {
        (Outcome::InProgress, Some(reason)) => {
            (reason.to_string(), Style::default().fg(Color::Yellow))
        }
        (Outcome::InProgress, None) => (String::new(), Style::default()),
        (_, _) => (
            format!("{} · press r to restart", app.state().status_text()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, config: &TuiConfig) {
    let board_area = center_rect(area, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let highlight = winning_line(app.state().board());
    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, config, row, highlight);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    config: &TuiConfig,
    row: usize,
    highlight: Option<[Position; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            let winning = highlight.is_some_and(|line| line.contains(&pos));
            draw_cell(frame, cols[col * 2], app, config, pos, winning);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    config: &TuiConfig,
    pos: Position,
    winning: bool,
) {
    let (text, mut style) = match app.state().board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(mark_color(mark, config))
                .add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == app.cursor() && !app.state().is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn mark_color(mark: Mark, config: &TuiConfig) -> Color {
    match mark {
        Mark::X => *config.x_color(),
        Mark::O => *config.o_color(),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
