//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the 3x3 board
pub const BOARD_SIZE: usize = 9;

/// The marker a player puts on the board.
///
/// Any character works; the board itself only compares symbols for equality.
/// `.` and `_` are how empty cells are written in board strings, so a game
/// should not hand them to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(char);

impl Symbol {
    pub const fn new(c: char) -> Self {
        Symbol(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Marked(Symbol),
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(symbol) => symbol.as_char(),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The symbol in this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }
}

/// Terminal-state evaluation of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// At least one empty cell and no complete line
    NotOver,
    /// Some line is filled with this symbol
    Won(Symbol),
    /// Every cell is filled and no line is complete
    Tied,
}

impl Evaluation {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Evaluation::NotOver)
    }
}

/// The nine cells of a game, row-major from the top-left corner.
///
/// `Board` is `Copy`, so taking a [`snapshot`](Board::snapshot) never aliases
/// the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Wrap an arbitrary set of cells, reachable in play or not
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Parse a board from a string of 9 cell characters.
    ///
    /// Whitespace is ignored, `.` and `_` are empty cells, and every other
    /// character must be one of `symbols`.
    ///
    /// # Errors
    ///
    /// Returns error unless exactly 9 cell characters are present, or if any
    /// character is neither empty nor one of `symbols`.
    pub fn from_string(s: &str, symbols: [Symbol; 2]) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = match c {
                '.' | '_' => Cell::Empty,
                c if symbols.contains(&Symbol(c)) => Cell::Marked(Symbol(c)),
                _ => {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: c,
                        position: i,
                        context: s.to_string(),
                    });
                }
            };
        }

        Ok(Board { cells })
    }

    /// Read-only view of all cells
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Check if a position is on the board and empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.get(pos).is_some_and(Cell::is_empty)
    }

    /// Get all empty positions in ascending order
    pub fn available_slots(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if every cell is marked
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Mark `pos` with `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] when `pos` is off the board
    /// and [`crate::Error::OccupiedCell`] when the cell is already marked.
    /// The board is unchanged on error.
    pub fn place(&mut self, pos: usize, symbol: Symbol) -> Result<(), crate::Error> {
        match self.cells.get_mut(pos) {
            None => Err(crate::Error::InvalidPosition { position: pos }),
            Some(Cell::Marked(_)) => Err(crate::Error::OccupiedCell { position: pos }),
            Some(cell) => {
                *cell = Cell::Marked(symbol);
                Ok(())
            }
        }
    }

    /// Mark a cell known to be empty, skipping the checks in [`place`](Board::place).
    pub(crate) fn mark(&mut self, pos: usize, symbol: Symbol) {
        debug_assert!(self.is_empty(pos), "cell {pos} is already marked");
        self.cells[pos] = Cell::Marked(symbol);
    }

    /// Empty a cell again. Only the search engine undoes moves.
    pub(crate) fn clear(&mut self, pos: usize) {
        self.cells[pos] = Cell::Empty;
    }

    /// Evaluate whether the game on this board is won, tied or still open
    pub fn evaluate(&self) -> Evaluation {
        if let Some(winner) = LineAnalyzer::winner(&self.cells) {
            Evaluation::Won(winner)
        } else if self.is_full() {
            Evaluation::Tied
        } else {
            Evaluation::NotOver
        }
    }

    /// Independent copy of the current cells
    #[must_use = "snapshot returns a copy; the original is unchanged"]
    pub fn snapshot(&self) -> Board {
        *self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
