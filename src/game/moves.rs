use std::fmt;

/// Final resting cell of a piece, as produced by a play or an undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

impl Move {
    pub fn new(row: usize, column: usize) -> Self {
        Move { row, column }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}
