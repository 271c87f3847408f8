//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod player;

pub use board::{BOARD_SIZE, Board, Cell, Evaluation, Symbol};
pub use game::{Game, GameOutcome, GameState, MoveResult};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use player::Player;
