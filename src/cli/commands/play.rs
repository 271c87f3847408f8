//! Play command - Run an interactive game in the terminal

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    ai::Difficulty,
    cli::{
        config::{GameConfig, GameMode},
        session,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play a game of noughts and crosses")]
pub struct PlayArgs {
    /// Who plays: human-vs-human (0), human-vs-ai (1) or ai-vs-ai (2)
    #[arg(long, short = 'm', default_value = "human-vs-ai")]
    pub mode: GameMode,

    /// Computer strength: easy (0) or hard (1)
    #[arg(long, short = 'l', default_value = "hard")]
    pub level: Difficulty,

    /// Symbol of the player who moves first
    #[arg(long, default_value_t = 'O')]
    pub first: char,

    /// Symbol of the player who moves second
    #[arg(long, default_value_t = 'X')]
    pub second: char,

    /// Print a JSON summary of the finished game
    #[arg(long)]
    pub json: bool,
}

impl PlayArgs {
    pub fn config(&self) -> GameConfig {
        GameConfig {
            mode: self.mode,
            difficulty: self.level,
            first_symbol: self.first,
            second_symbol: self.second,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = session::play_game(&config, &mut input, &mut out)?;

    if args.json {
        let json = serde_json::to_string(&summary).context("failed to encode game summary")?;
        writeln!(out, "{json}")?;
    }

    Ok(())
}
