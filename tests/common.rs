//! Common test utilities for the noughts test suite.
//!
//! Position enumeration shared by the property-style tests.

#![allow(dead_code)]

use std::collections::HashSet;

use noughts::tictactoe::{Board, Symbol};

pub const O: Symbol = Symbol::new('O');
pub const X: Symbol = Symbol::new('X');

/// Parse a board written with `O`, `X` and `.`.
pub fn board(cells: &str) -> Board {
    Board::from_string(cells, [O, X]).expect("test board should parse")
}

/// A position in play: the board, the symbol to move and the one replying.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub board: Board,
    pub to_move: Symbol,
    pub waiting: Symbol,
}

/// Every unfinished position reachable from the empty board with `first`
/// opening, each listed once.
pub fn reachable_positions(first: Symbol, second: Symbol) -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    walk(Board::new(), first, second, &mut seen, &mut positions);
    positions
}

fn walk(
    board: Board,
    to_move: Symbol,
    waiting: Symbol,
    seen: &mut HashSet<Board>,
    positions: &mut Vec<Position>,
) {
    if !seen.insert(board) || board.evaluate().is_terminal() {
        return;
    }

    positions.push(Position {
        board,
        to_move,
        waiting,
    });

    for slot in board.available_slots() {
        let mut next = board;
        next.place(slot, to_move).expect("available slot should accept a mark");
        walk(next, waiting, to_move, seen, positions);
    }
}
