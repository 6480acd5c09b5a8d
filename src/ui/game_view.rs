use crate::controller::{Phase, View, MESSAGE_LOG_CAPACITY};
use crate::game::{GameOutcome, Move, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::cell_span;

pub fn render(frame: &mut Frame, view: &View) {
    match view.phase {
        Phase::Configuring => render_start(frame, view),
        Phase::InProgress | Phase::Over => render_game(frame, view),
    }
}

fn render_start(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(7), // Menu
            Constraint::Min(0),    // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Connect Four")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let menu = Paragraph::new(vec![
        Line::from("1: Two players"),
        Line::from("2: Play against the computer"),
        Line::from("3 / H: Help"),
        Line::from("Q: Quit"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("New Game"));
    frame.render_widget(menu, chunks[1]);

    if view.show_help {
        let help = Paragraph::new(vec![
            Line::from("Drop pieces into the columns; they fall to the lowest free row."),
            Line::from("Four in a row horizontally, vertically or diagonally wins."),
            Line::from("A full board without four in a row is a draw."),
            Line::from(""),
            Line::from("←/→ choose a column, ↓ or Enter drops, ↑ or U takes a move back."),
            Line::from("Against the computer, undo takes back your move and its reply."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Help"));
        frame.render_widget(help, chunks[2]);
    }
}

fn render_game(frame: &mut Frame, view: &View) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                               // Header
            Constraint::Min(ROWS as u16 + 4),                    // Board
            Constraint::Length(MESSAGE_LOG_CAPACITY as u16 + 2), // Messages
            Constraint::Length(3),                               // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_board(frame, view, chunks[1]);
    render_messages(frame, &view.messages, chunks[2]);
    render_controls(frame, view.phase, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, view: &View, area: Rect) {
    let (status, color) = match view.outcome {
        Some(GameOutcome::Winner(player)) => (
            format!("Game Over  |  {} wins", player.name()),
            player_color(player),
        ),
        Some(GameOutcome::Draw) => ("Game Over  |  Draw".to_string(), Color::White),
        None => {
            let player = view.game.current_player();
            let mut status = format!(
                "Current Player: {}  |  {}",
                player.name(),
                view.mode.label()
            );
            if view.computer_thinking {
                status.push_str("  |  computer thinking...");
            }
            (status, player_color(player))
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, view: &View, area: Rect) {
    let board = view.game.board();
    let show_cursor = view.phase == Phase::InProgress;
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if show_cursor && col == view.cursor {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    // Row 0 is the bottom of the board, so draw from the top row down.
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let highlighted = view.winning_moves.contains(&Move::new(row, col));
            row_spans.push(cell_span(board.get(row, col), highlighted));
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    if show_cursor {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..COLS {
            if col == view.cursor {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_messages(frame: &mut Frame, messages: &[String], area: Rect) {
    let lines: Vec<Line> = messages.iter().map(|m| Line::from(m.as_str())).collect();
    let msg_widget = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Log"));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, phase: Phase, area: Rect) {
    let text = match phase {
        Phase::InProgress => "←/→: Move  |  ↓/Enter: Drop  |  ↑/U: Undo  |  R: Restart  |  Q: Quit",
        _ => "S: Show winning moves  |  Enter/R: New game  |  Q: Quit",
    };

    let controls = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
