use crate::game::Cell;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Styled three-column span for one board cell. Highlighted cells belong to
/// a winning run.
pub fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    };
    let mut style = Style::default().fg(color);
    if highlighted {
        style = style.bg(Color::Green).add_modifier(Modifier::BOLD);
    }
    Span::styled(symbol, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_symbols() {
        assert_eq!(cell_span(Cell::Empty, false).content, " . ");
        assert_eq!(cell_span(Cell::Red, false).content, " \u{25cf} ");
    }

    #[test]
    fn test_highlight_sets_background() {
        assert_eq!(cell_span(Cell::Yellow, true).style.bg, Some(Color::Green));
        assert_eq!(cell_span(Cell::Yellow, false).style.bg, None);
    }
}
