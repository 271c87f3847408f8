//! Players: a fixed symbol plus a switch for computer control

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Symbol;

/// A participant in the game, either driven by a person or by a move selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    symbol: Symbol,
    automated: bool,
}

impl Player {
    pub fn new(symbol: impl Into<Symbol>, automated: bool) -> Self {
        Player {
            symbol: symbol.into(),
            automated,
        }
    }

    /// A player whose moves are supplied by the caller
    pub fn human(symbol: impl Into<Symbol>) -> Self {
        Self::new(symbol, false)
    }

    /// A player whose moves come from the game's move selector
    pub fn automated(symbol: impl Into<Symbol>) -> Self {
        Self::new(symbol, true)
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    pub fn enable_automation(&mut self) {
        self.automated = true;
    }

    pub fn disable_automation(&mut self) {
        self.automated = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.automated { "AI" } else { "Human" };
        write!(f, "{kind} Player: '{}'", self.symbol)
    }
}
