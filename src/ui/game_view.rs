use crate::game::{Board, Cell, GameStatus, Placement, Player, RuleEngine, WinningLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &RuleEngine,
    cursor: (usize, usize),
    message: &Option<String>,
    game_mode: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let placement = engine.rules().placement();
    render_header(frame, engine, game_mode, chunks[0]);
    match placement {
        Placement::Drop => render_drop_board(frame, engine, cursor.1, chunks[1]),
        Placement::Free => render_grid_board(frame, engine, cursor, chunks[1]),
    }
    render_message(frame, message, chunks[2]);
    render_controls(frame, placement, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &RuleEngine, game_mode: &str, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::AwaitingMove(player) => (
            format!("Current Player: {}  |  {}", player.symbol(), game_mode),
            player_color(player),
        ),
        GameStatus::Won(player) => (
            format!("Game Over: {} wins  |  {}", player.symbol(), game_mode),
            player_color(player),
        ),
        GameStatus::Drawn => (format!("Game Over: draw  |  {}", game_mode), Color::White),
    };

    let title = match engine.rules().placement() {
        Placement::Drop => "Connect Four",
        Placement::Free => "Tic-Tac-Toe",
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(header, area);
}

/// Cell glyph and style, bold green when part of the winning run
fn cell_span(
    board: &Board,
    line: Option<&WinningLine>,
    row: usize,
    col: usize,
    symbol_for: fn(Player) -> &'static str,
) -> Span<'static> {
    let cell = board.get(row, col).unwrap_or(Cell::Empty);
    let Some(player) = Player::from_cell(cell) else {
        return Span::styled(" . ", Style::default().fg(Color::DarkGray));
    };
    let mut style = Style::default().fg(player_color(player));
    if line.is_some_and(|l| l.contains(row, col)) {
        style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol_for(player), style)
}

fn render_drop_board(frame: &mut Frame, engine: &RuleEngine, selected_column: usize, area: Rect) {
    let board = engine.board();
    let line = engine.winning_line();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..board.cols() {
        let label = format!("{:^3}", col + 1);
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

    let bar = "═".repeat(board.cols() * 3 + 1);
    lines.push(Line::from(format!("  ╔{bar}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..board.cols() {
            row_spans.push(cell_span(board, line.as_ref(), row, col, |_| " ● "));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{bar}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.cols() {
        if col == selected_column && !engine.is_terminal() {
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

fn render_grid_board(frame: &mut Frame, engine: &RuleEngine, cursor: (usize, usize), area: Rect) {
    let board = engine.board();
    let line = engine.winning_line();
    let mut lines = Vec::new();

    for row in 0..board.rows() {
        let mut spans = vec![Span::raw(format!("{} ", board.rows() - row))];
        for col in 0..board.cols() {
            let mut span = cell_span(board, line.as_ref(), row, col, |p| match p {
                Player::X => " X ",
                Player::O => " O ",
            });
            if (row, col) == cursor && !engine.is_terminal() {
                span = span.patch_style(Style::default().add_modifier(Modifier::REVERSED));
            }
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let mut letters = vec![Span::raw("  ")];
    for col in 0..board.cols() {
        letters.push(Span::raw(format!(" {} ", char::from(b'a' + col as u8))));
    }
    lines.push(Line::from(letters));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, placement: Placement, area: Rect) {
    let keys = match placement {
        Placement::Drop => "←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit",
        Placement::Free => "Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit",
    };

    let controls = Paragraph::new(Line::from(keys))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
