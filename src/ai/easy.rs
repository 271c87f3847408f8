//! Easy opponent: play the first open cell.

use crate::{
    Error, Result,
    ai::MoveSelector,
    tictactoe::{Board, Player},
};

/// Picks the smallest-indexed empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveSelector for FirstAvailable {
    fn select_move(&self, board: &Board, _current: &Player, _opponent: &Player) -> Result<usize> {
        board
            .available_slots()
            .first()
            .copied()
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        "First available"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Symbol;

    fn players() -> (Player, Player) {
        (Player::automated('O'), Player::human('X'))
    }

    #[test]
    fn picks_lowest_open_cell() {
        let board = Board::from_string("O.X......", [Symbol::new('O'), Symbol::new('X')]).unwrap();
        let (current, opponent) = players();

        assert_eq!(
            FirstAvailable.select_move(&board, &current, &opponent),
            Ok(1)
        );
    }

    #[test]
    fn empty_board_starts_in_the_corner() {
        let (current, opponent) = players();

        assert_eq!(
            FirstAvailable.select_move(&Board::new(), &current, &opponent),
            Ok(0)
        );
    }

    #[test]
    fn full_board_has_no_move() {
        let board = Board::from_string("OXOOXXXOO", [Symbol::new('O'), Symbol::new('X')]).unwrap();
        let (current, opponent) = players();

        assert_eq!(
            FirstAvailable.select_move(&board, &current, &opponent),
            Err(Error::NoValidMoves)
        );
    }
}
