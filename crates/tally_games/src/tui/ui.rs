//! Stateless rendering of a session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tally_tictactoe::{Cell, Mark, Position};

use crate::session::{Phase, Session};
use crate::store::KeyValueStore;

/// Draws the whole screen.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, session: &Session<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Tally
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tally Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let tally = session.tally();
    let tally_line = Line::from(vec![
        Span::styled(format!("X: {}", tally.x_wins()), mark_style(Mark::X)),
        Span::raw("   "),
        Span::styled(format!("O: {}", tally.o_wins()), mark_style(Mark::O)),
    ]);
    frame.render_widget(
        Paragraph::new(tally_line).alignment(Alignment::Center),
        chunks[1],
    );

    draw_board(frame, chunks[2], session);

    let status = Paragraph::new(session.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[3]);

    let help_text = match session.phase() {
        Phase::Cover => "Enter: Start | Q: Quit",
        Phase::Playing => "Arrows/hjkl: Move | Enter: Play | 1-9: Play cell | Q: Quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    if session.phase() == Phase::Cover {
        draw_cover(frame, chunks[2], session.status());
    }
}

fn draw_board<S: KeyValueStore>(frame: &mut Frame, area: Rect, session: &Session<S>) {
    let board_area = center_rect(area, 41, 11);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], session, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row<S: KeyValueStore>(frame: &mut Frame, area: Rect, session: &Session<S>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for column in 0..3 {
        if let Some(position) = Position::from_row_column(row, column) {
            draw_cell(frame, cols[column * 2], session, position);
        }
        if column < 2 {
            draw_separator_vertical(frame, cols[column * 2 + 1]);
        }
    }
}

fn draw_cell<S: KeyValueStore>(frame: &mut Frame, area: Rect, session: &Session<S>, pos: Position) {
    let cell = session.game().cell(pos.index()).unwrap_or_default();
    let is_cursor = session.phase() == Phase::Playing && pos == session.cursor();

    let (symbol, base_style) = match cell {
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
        Cell::Empty => match session.preview().filter(|_| is_cursor) {
            Some(mark) => (
                mark.to_string(),
                mark_style(mark).remove_modifier(Modifier::BOLD).add_modifier(Modifier::DIM),
            ),
            None => (
                (pos.index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };

    let style = if is_cursor {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    // Vertically centre the symbol in the three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_cover(frame: &mut Frame, area: Rect, result: &str) {
    let cover_area = center_rect(area, 33, 5);

    let mut lines = Vec::new();
    if !result.is_empty() {
        lines.push(Line::from(Span::styled(
            result.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from("Press Enter to start"));

    let cover = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));

    frame.render_widget(Clear, cover_area);
    frame.render_widget(cover, cover_area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
