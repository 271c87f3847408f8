//! Game setup chosen on the command line

use std::{fmt, str::FromStr};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::{
    ai::Difficulty,
    tictactoe::{Player, Symbol},
};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    /// The first player is human, the second is the computer
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl GameMode {
    /// Automation flags for (first player, second player)
    pub fn automation(self) -> (bool, bool) {
        match self {
            GameMode::HumanVsHuman => (false, false),
            GameMode::HumanVsAi => (false, true),
            GameMode::AiVsAi => (true, true),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        };
        f.write_str(label)
    }
}

impl FromStr for GameMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "human-vs-human" | "hvh" | "0" => Ok(GameMode::HumanVsHuman),
            "human-vs-ai" | "hva" | "1" => Ok(GameMode::HumanVsAi),
            "ai-vs-ai" | "ava" | "2" => Ok(GameMode::AiVsAi),
            _ => Err(crate::Error::ParseGameMode {
                input: s.to_string(),
                expected: "human-vs-human/0, human-vs-ai/1, ai-vs-ai/2".to_string(),
            }),
        }
    }
}

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Symbol of the player who moves first
    pub first_symbol: char,
    pub second_symbol: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            first_symbol: 'O',
            second_symbol: 'X',
        }
    }
}

impl GameConfig {
    /// Reject symbol choices that would make the board unreadable.
    pub fn validate(&self) -> Result<()> {
        validate_symbols(self.first_symbol, self.second_symbol)
    }

    pub fn symbols(&self) -> [Symbol; 2] {
        [
            Symbol::new(self.first_symbol),
            Symbol::new(self.second_symbol),
        ]
    }

    /// Build both players with the automation the mode asks for
    pub fn players(&self) -> (Player, Player) {
        let (first_ai, second_ai) = self.mode.automation();
        (
            Player::new(self.first_symbol, first_ai),
            Player::new(self.second_symbol, second_ai),
        )
    }
}

/// Check that two player symbols can share a board: neither may be an
/// empty-cell marker and they must differ.
pub fn validate_symbols(first: char, second: char) -> Result<()> {
    for symbol in [first, second] {
        if matches!(symbol, '.' | '_') || symbol.is_whitespace() {
            bail!("symbol '{symbol}' is reserved for empty cells");
        }
    }
    if first == second {
        bail!("both players would use '{first}'; pick two different symbols");
    }
    Ok(())
}
