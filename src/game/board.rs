use super::Move;
use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of consecutive pieces needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Numeric value handed to renderers: 0 empty, 1 player one, 2 player two.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Red => 1,
            Cell::Yellow => 2,
        }
    }
}

/// The playing grid. Row 0 is the bottom row; pieces stack upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is full once its top cell is taken. Out-of-range columns
    /// count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[ROWS - 1][col] != Cell::Empty
    }

    /// Lowest empty row in a column, scanning upward from row 0.
    pub fn free_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if self.is_column_full(col) {
            return Err(GameError::InvalidMove { column: col });
        }

        let row = self
            .free_row(col)
            .ok_or(GameError::InvalidMove { column: col })?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Clear the most recently filled cell of a column and return its row.
    ///
    /// The row is re-derived from the column contents: one below the first
    /// empty cell, or the top row when the column is full. Returns `None`
    /// for an empty or out-of-range column.
    pub fn lift_piece(&mut self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        let row = match self.free_row(col) {
            None => ROWS - 1,
            Some(free) => free.checked_sub(1)?,
        };
        self.cells[row][col] = Cell::Empty;
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Row-major snapshot of cell values for rendering.
    pub fn to_grid(&self) -> [[u8; COLS]; ROWS] {
        let mut grid = [[0u8; COLS]; ROWS];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                grid[row][col] = cell.value();
            }
        }
        grid
    }

    /// Every four-in-a-row belonging to `cell`, scanning the whole board.
    ///
    /// Runs are collected descending diagonals first, then ascending
    /// diagonals, horizontals and verticals. Each run contributes its four
    /// cells in scan order. Overlapping runs are not merged, so five in a
    /// row yields two runs (eight moves).
    pub fn winning_runs(&self, cell: Cell) -> Vec<Move> {
        let mut runs = Vec::new();
        if cell == Cell::Empty {
            return runs;
        }

        self.collect_descending_diagonals(cell, &mut runs);
        self.collect_ascending_diagonals(cell, &mut runs);
        self.collect_horizontals(cell, &mut runs);
        self.collect_verticals(cell, &mut runs);
        runs
    }

    /// Runs going down-right: (r, c), (r-1, c+1), ...
    fn collect_descending_diagonals(&self, cell: Cell, runs: &mut Vec<Move>) {
        for row in CONNECT - 1..ROWS {
            for col in 0..=COLS - CONNECT {
                self.collect_run(cell, row, col, -1, 1, runs);
            }
        }
    }

    /// Runs going down-left: (r, c), (r-1, c-1), ...
    fn collect_ascending_diagonals(&self, cell: Cell, runs: &mut Vec<Move>) {
        for row in CONNECT - 1..ROWS {
            for col in CONNECT - 1..COLS {
                self.collect_run(cell, row, col, -1, -1, runs);
            }
        }
    }

    /// Column-major: every start column is checked on every row before
    /// moving right.
    fn collect_horizontals(&self, cell: Cell, runs: &mut Vec<Move>) {
        for col in 0..=COLS - CONNECT {
            for row in 0..ROWS {
                self.collect_run(cell, row, col, 0, 1, runs);
            }
        }
    }

    fn collect_verticals(&self, cell: Cell, runs: &mut Vec<Move>) {
        for row in 0..=ROWS - CONNECT {
            for col in 0..COLS {
                self.collect_run(cell, row, col, 1, 0, runs);
            }
        }
    }

    /// Push the run starting at (row, col) stepping by (d_row, d_col) if all
    /// of its cells hold `cell`. Callers keep every step on the board.
    fn collect_run(
        &self,
        cell: Cell,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
        runs: &mut Vec<Move>,
    ) {
        let positions: Vec<(usize, usize)> = (0..CONNECT as isize)
            .map(|step| {
                (
                    (row as isize + step * d_row) as usize,
                    (col as isize + step * d_col) as usize,
                )
            })
            .collect();

        if positions.iter().all(|&(r, c)| self.cells[r][c] == cell) {
            runs.extend(positions.into_iter().map(|(r, c)| Move::new(r, c)));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_column(board: &mut Board, col: usize, cells: &[Cell]) {
        for &cell in cells {
            board.drop_piece(col, cell).unwrap();
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece_lands_on_bottom() {
        let mut board = Board::new();
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Red);
    }

    #[test]
    fn test_drop_piece_stacks() {
        let mut board = Board::new();
        board.drop_piece(3, Cell::Red).unwrap();
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Yellow);
    }

    #[test]
    fn test_drop_piece_full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }
        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_piece(0, Cell::Yellow),
            Err(GameError::InvalidMove { column: 0 })
        );
    }

    #[test]
    fn test_drop_piece_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(COLS, Cell::Red),
            Err(GameError::InvalidMove { column: COLS })
        );
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_lift_piece_takes_topmost() {
        let mut board = Board::new();
        fill_column(&mut board, 2, &[Cell::Red, Cell::Yellow, Cell::Red]);
        assert_eq!(board.lift_piece(2), Some(2));
        assert_eq!(board.get(2, 2), Cell::Empty);
        assert_eq!(board.get(1, 2), Cell::Yellow);
    }

    #[test]
    fn test_lift_piece_full_column_clears_top_row() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(6, Cell::Yellow).unwrap();
        }
        assert_eq!(board.lift_piece(6), Some(ROWS - 1));
        assert!(!board.is_column_full(6));
    }

    #[test]
    fn test_lift_piece_empty_column() {
        let mut board = Board::new();
        assert_eq!(board.lift_piece(4), None);
        assert_eq!(board.lift_piece(COLS), None);
    }

    #[test]
    fn test_legal_columns_skip_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(1, Cell::Red).unwrap();
            board.drop_piece(5, Cell::Yellow).unwrap();
        }
        assert_eq!(board.legal_columns(), vec![0, 2, 3, 4, 6]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for col in 0..COLS {
            assert!(!board.is_full());
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_to_grid_is_row_major_from_bottom() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(0, Cell::Yellow).unwrap();
        let grid = board.to_grid();
        assert_eq!(grid[0][0], 1);
        assert_eq!(grid[1][0], 2);
        assert_eq!(grid[2][0], 0);
    }

    #[test]
    fn test_horizontal_run() {
        let mut board = Board::new();
        for col in 1..5 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        let runs = board.winning_runs(Cell::Red);
        assert_eq!(
            runs,
            vec![
                Move::new(0, 1),
                Move::new(0, 2),
                Move::new(0, 3),
                Move::new(0, 4)
            ]
        );
        assert!(board.winning_runs(Cell::Yellow).is_empty());
    }

    #[test]
    fn test_vertical_run() {
        let mut board = Board::new();
        fill_column(&mut board, 6, &[Cell::Yellow; 4]);
        let runs = board.winning_runs(Cell::Yellow);
        assert_eq!(
            runs,
            vec![
                Move::new(0, 6),
                Move::new(1, 6),
                Move::new(2, 6),
                Move::new(3, 6)
            ]
        );
    }

    #[test]
    fn test_three_is_not_a_run() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        fill_column(&mut board, 4, &[Cell::Red; 3]);
        assert!(board.winning_runs(Cell::Red).is_empty());
    }

    #[test]
    fn test_diagonal_rising_right() {
        // Red on (0,0), (1,1), (2,2), (3,3)
        let mut board = Board::new();
        fill_column(&mut board, 0, &[Cell::Red]);
        fill_column(&mut board, 1, &[Cell::Yellow, Cell::Red]);
        fill_column(&mut board, 2, &[Cell::Yellow, Cell::Yellow, Cell::Red]);
        fill_column(
            &mut board,
            3,
            &[Cell::Yellow, Cell::Yellow, Cell::Yellow, Cell::Red],
        );
        let runs = board.winning_runs(Cell::Red);
        assert_eq!(
            runs,
            vec![
                Move::new(3, 3),
                Move::new(2, 2),
                Move::new(1, 1),
                Move::new(0, 0)
            ]
        );
    }

    #[test]
    fn test_diagonal_falling_right() {
        // Yellow on (3,3), (2,4), (1,5), (0,6)
        let mut board = Board::new();
        fill_column(
            &mut board,
            3,
            &[Cell::Red, Cell::Red, Cell::Red, Cell::Yellow],
        );
        fill_column(&mut board, 4, &[Cell::Red, Cell::Red, Cell::Yellow]);
        fill_column(&mut board, 5, &[Cell::Red, Cell::Yellow]);
        fill_column(&mut board, 6, &[Cell::Yellow]);
        let runs = board.winning_runs(Cell::Yellow);
        assert_eq!(
            runs,
            vec![
                Move::new(3, 3),
                Move::new(2, 4),
                Move::new(1, 5),
                Move::new(0, 6)
            ]
        );
    }

    #[test]
    fn test_five_in_a_row_is_two_overlapping_runs() {
        let mut board = Board::new();
        for col in 0..5 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        let runs = board.winning_runs(Cell::Red);
        assert_eq!(runs.len(), 8);
        assert_eq!(runs[0], Move::new(0, 0));
        assert_eq!(runs[4], Move::new(0, 1));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(board.winning_runs(Cell::Empty).is_empty());
    }
}
