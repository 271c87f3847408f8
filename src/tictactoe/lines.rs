//! Winning line analysis for Tic-Tac-Toe

use super::board::{Cell, Symbol};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The symbol filling the first complete line, scanning rows, then
    /// columns, then diagonals.
    pub fn winner(cells: &[Cell; 9]) -> Option<Symbol> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    /// Check if `symbol` has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], symbol: Symbol) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(symbol))
    }

    /// A line belongs to a symbol when all three cells hold that same symbol.
    fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Symbol> {
        let [a, b, c] = *line;
        match cells[a] {
            Cell::Marked(symbol) if cells[b] == cells[a] && cells[c] == cells[a] => Some(symbol),
            _ => None,
        }
    }
}
