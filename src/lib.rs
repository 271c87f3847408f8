//! Noughts and crosses with a game-tree-search opponent
//!
//! This crate provides:
//! - A 3x3 board with win/tie detection that works on any snapshot
//! - Players with a symbol and a human/computer switch
//! - Two computer opponents: first-open-cell (easy) and minimax with
//!   alpha-beta pruning (hard)
//! - A game controller enforcing turn order and the end of the game
//! - A small CLI for playing in the terminal and inspecting positions

pub mod ai;
pub mod cli;
pub mod error;
pub mod tictactoe;

pub use ai::{Difficulty, FirstAvailable, Minimax, MoveSelector, SearchResult};
pub use error::{Error, ErrorKind, Result};
pub use tictactoe::{
    Board, Cell, Evaluation, Game, GameOutcome, GameState, MoveResult, Player, Symbol,
};
