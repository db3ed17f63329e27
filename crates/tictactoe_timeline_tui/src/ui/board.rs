//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tictactoe_timeline::{Cell, Player, Position};

/// Renders the board cells, highlighting the winning line and the cursor.
pub fn render_board(f: &mut Frame, area: Rect, squares: &[Cell; 9], cursor: Option<Position>) {
    let board_area = center_rect(area, 40, 11);
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

    for (i, start) in [0, 3, 6].into_iter().enumerate() {
        render_row(f, rows[i * 2], squares, start, cursor);
        if i < 2 {
            render_separator(f, rows[i * 2 + 1]);
        }
    }
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    squares: &[Cell; 9],
    start: usize,
    cursor: Option<Position>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], squares, start, cursor);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], squares, start + 1, cursor);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], squares, start + 2, cursor);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    squares: &[Cell; 9],
    pos: usize,
    cursor: Option<Position>,
) {
    let cell = squares[pos];
    let (text, mut style) = match cell.mark() {
        None => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if cell.highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor.map(Position::to_index) == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in its 3-line row.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
