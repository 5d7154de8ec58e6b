//! Stateless rendering of the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell as TableCell, Paragraph, Row, Table},
};

use super::app::App;
use super::confetti::Confetti;
use crate::games::tictactoe::{Cell, FinalOutcome, GameSession, Mark, Outcome, Position};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const HISTORY_ROWS: usize = 20;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App<Confetti>) {
    let area = frame.area();
    let session = app.session();
    let has_stats = session.scores().total_games() > 0;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Title
            Constraint::Length(4),                              // Scores
            Constraint::Length(3),                              // Status
            Constraint::Min(CELL_HEIGHT * 3),                   // Board
            Constraint::Length(if has_stats { 4 } else { 0 }), // Statistics
            Constraint::Length(3),                              // Help
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_scores(frame, chunks[1], session);
    draw_status(frame, chunks[2], session);

    if app.show_history() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        draw_board(frame, halves[0], session, app.cursor());
        draw_history(frame, halves[1], session);
    } else {
        draw_board(frame, chunks[3], session, app.cursor());
    }

    if has_stats {
        draw_statistics(frame, chunks[4], session);
    }
    draw_help(frame, chunks[5]);

    if app.celebration_pending() {
        frame.render_widget(app.effect(), area);
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Monkey => Color::Blue,
        Mark::Banana => Color::Yellow,
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Monkey vs Banana",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tic-Tac-Toe",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, session: &GameSession) {
    let scores = session.scores();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let boxes = [
        (scores.wins(Mark::Monkey), Mark::Monkey.to_string(), mark_color(Mark::Monkey)),
        (scores.draws(), "Draws".to_string(), Color::Gray),
        (scores.wins(Mark::Banana), Mark::Banana.to_string(), mark_color(Mark::Banana)),
    ];
    for ((count, label, color), col) in boxes.into_iter().zip(cols.iter()) {
        let tally = Paragraph::new(vec![
            Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(label, Style::default().fg(color))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(tally, *col);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    let line = match session.outcome() {
        Outcome::InProgress => {
            let mark = session.current_player();
            Line::from(vec![
                Span::raw("Current Player: "),
                Span::styled(
                    mark.to_string(),
                    Style::default()
                        .fg(mark_color(mark))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        outcome => Line::from(Span::styled(
            format!("🏆 {} 🏆", outcome),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    };
    let status = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position) {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(position) = Position::at(row, col) {
                draw_cell(frame, *cell_area, session, cursor, position);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, session: &GameSession, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let on_line = session.winning_line().is_some_and(|l| l.contains(index));

    let (symbol, mut style) = match session.board().get(index).unwrap_or_default() {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (
            mark.glyph().to_string(),
            Style::default()
                .fg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ),
    };
    let mut border = Style::default().fg(Color::Green);

    if on_line {
        style = style.bg(Color::LightYellow);
        border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if pos == cursor && !session.is_over() {
        style = style.add_modifier(Modifier::REVERSED);
        border = border.fg(Color::White);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_statistics(frame: &mut Frame, area: Rect, session: &GameSession) {
    let stats = session.scores().statistics();
    let text = format!(
        "Total Games: {}   {} Win Rate: {}%   {} Win Rate: {}%",
        stats.total_games(),
        Mark::Monkey,
        stats.monkey_win_rate(),
        Mark::Banana,
        stats.banana_win_rate(),
    );
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, session: &GameSession) {
    let header = Row::new(vec![
        TableCell::from("#"),
        TableCell::from("Result"),
        TableCell::from("Moves"),
        TableCell::from("Finished"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = session
        .scores()
        .history()
        .iter()
        .rev()
        .take(HISTORY_ROWS)
        .map(|record| {
            let color = match record.outcome() {
                FinalOutcome::Winner(mark) => mark_color(*mark),
                FinalOutcome::Draw => Color::Gray,
            };
            Row::new(vec![
                TableCell::from(record.id().to_string()),
                TableCell::from(record.outcome().to_string()).style(Style::default().fg(color)),
                TableCell::from(record.moves().to_string()),
                TableCell::from(record.finished_at().format("%H:%M:%S").to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Length(6),
        Constraint::Length(9),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Games"),
    );
    frame.render_widget(table, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "←↑↓→/hjkl: Move | Enter: Play | 1-9: Play cell | n: New Game | r: Reset Scores | s: History | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
