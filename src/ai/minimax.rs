//! Hard opponent: minimax search with alpha-beta pruning.
//!
//! The search always runs to the end of the game. Scores are flat: a win is
//! worth [`WIN_SCORE`] no matter how many plies away it is, so among moves
//! with the same outcome the lowest cell index is played.
//!
//! The live board is never touched. Each search copies it once and then
//! plays and undoes trial moves on that private copy.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::{
    Error, Result,
    ai::MoveSelector,
    tictactoe::{Board, Evaluation, Player, Symbol},
};

/// Score of a position the maximizing player has won
pub const WIN_SCORE: i32 = 10;
/// Score of a tied position
pub const TIE_SCORE: i32 = 0;
/// Score of a position the maximizing player has lost
pub const LOSS_SCORE: i32 = -10;
/// Starting best score for the maximizer, and the initial alpha
pub const SEARCH_FLOOR: i32 = -1000;
/// Starting best score for the minimizer, and the initial beta
pub const SEARCH_CEILING: i32 = 1000;

/// Outcome of a top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Cell to play
    pub index: usize,
    /// Minimax value of playing `index`, from the mover's point of view
    pub score: i32,
    /// Positions evaluated, including the root
    pub nodes: u64,
}

/// Minimax move selector.
///
/// Pruning is on by default. [`Minimax::exhaustive`] turns it off, which
/// visits more positions but must choose the same move with the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    pruning: bool,
}

impl Minimax {
    pub fn new() -> Self {
        Minimax { pruning: true }
    }

    /// A search that never prunes
    pub fn exhaustive() -> Self {
        Minimax { pruning: false }
    }

    pub fn prunes(&self) -> bool {
        self.pruning
    }

    /// Find the best move for `maximizer` with `minimizer` replying.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if `board` is already won or full.
    pub fn search(&self, board: &Board, maximizer: Symbol, minimizer: Symbol) -> Result<SearchResult> {
        if board.evaluate().is_terminal() {
            return Err(Error::NoValidMoves);
        }

        let started = Instant::now();
        let mut search = Search {
            board: board.snapshot(),
            maximizer,
            minimizer,
            pruning: self.pruning,
            nodes: 0,
        };
        let best = search.minimax(maximizer, SEARCH_FLOOR, SEARCH_CEILING);
        let index = best.index.ok_or(Error::NoValidMoves)?;

        debug!(
            symbol = %maximizer,
            index,
            score = best.score,
            nodes = search.nodes,
            pruning = self.pruning,
            elapsed_us = started.elapsed().as_micros() as u64,
            "minimax search finished"
        );

        Ok(SearchResult {
            index,
            score: best.score,
            nodes: search.nodes,
        })
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for Minimax {
    fn select_move(&self, board: &Board, current: &Player, opponent: &Player) -> Result<usize> {
        self.search(board, current.symbol(), opponent.symbol())
            .map(|result| result.index)
    }

    fn name(&self) -> &str {
        if self.pruning {
            "Minimax (alpha-beta)"
        } else {
            "Minimax (exhaustive)"
        }
    }
}

/// Best move found at one level of the tree.
///
/// `index` is `None` for terminal positions; only the root's index is used.
#[derive(Debug, Clone, Copy)]
struct Scored {
    index: Option<usize>,
    score: i32,
}

/// State owned by one top-level search
struct Search {
    board: Board,
    maximizer: Symbol,
    minimizer: Symbol,
    pruning: bool,
    nodes: u64,
}

impl Search {
    fn minimax(&mut self, to_move: Symbol, mut alpha: i32, mut beta: i32) -> Scored {
        self.nodes += 1;

        // The board is checked before `to_move` plays, so a win here belongs
        // to whoever moved last.
        match self.board.evaluate() {
            Evaluation::Won(_) => {
                let score = if to_move == self.maximizer {
                    LOSS_SCORE
                } else {
                    WIN_SCORE
                };
                return Scored { index: None, score };
            }
            Evaluation::Tied => {
                return Scored {
                    index: None,
                    score: TIE_SCORE,
                };
            }
            Evaluation::NotOver => {}
        }

        let maximizing = to_move == self.maximizer;
        let (next, initial) = if maximizing {
            (self.minimizer, SEARCH_FLOOR)
        } else {
            (self.maximizer, SEARCH_CEILING)
        };
        let mut best = Scored {
            index: None,
            score: initial,
        };

        for slot in self.board.available_slots() {
            self.board.mark(slot, to_move);
            let score = self.minimax(next, alpha, beta).score;

            // Strict comparisons: on equal scores the earlier (lower) slot stays.
            if maximizing {
                if score > best.score {
                    best = Scored {
                        index: Some(slot),
                        score,
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = Scored {
                        index: Some(slot),
                        score,
                    };
                }
                beta = beta.min(best.score);
            }
            self.board.clear(slot);

            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }
}
