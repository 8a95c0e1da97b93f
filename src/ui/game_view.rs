use crate::ai::Difficulty;
use crate::game::{Board, Cell, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What the screen needs besides the board.
pub struct ViewState<'a> {
    pub selected_column: usize,
    pub difficulty: Difficulty,
    pub game_over: bool,
    pub message: Option<&'a str>,
}

pub fn render(frame: &mut Frame, board: &Board, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, board, view.selected_column, chunks[1]);
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, view: &ViewState, area: Rect) {
    let opponent = format!("Opponent: difficulty {}", view.difficulty.level());
    let (status, color) = if view.game_over {
        (format!("Game Over  |  {opponent}"), Color::Gray)
    } else {
        (format!("Your move (Red)  |  {opponent}"), Color::Red)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::PlayerOne => (" ● ", Color::Red),
        Cell::PlayerTwo => (" ● ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        row_spans.extend((0..COLS).map(|col| cell_span(board.get(row, col))));
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter or 1-7: Drop  |  R: New game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

/// Modal asking which opponent to play, drawn over an empty board.
pub fn render_difficulty_prompt(frame: &mut Frame, max_level: u8) {
    render_board(frame, &Board::new(), COLS, frame.area());

    let mut lines = vec![Line::from("Choose your opponent"), Line::from("")];
    for level in 1..=max_level {
        let description = match Difficulty::from_level(level) {
            Some(Difficulty::One) => "copies your moves",
            Some(Difficulty::Two) => "wins and blocks when it can",
            None => "",
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{level}"),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(": {description}")),
        ]));
    }

    let area = centered(frame.area(), 40, lines.len() as u16 + 2);
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Difficulty"));
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
