//! Analyze command - Show the engine's choice for a given position

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    ai::{Minimax, MoveSelector},
    cli::{config::validate_symbols, output},
    tictactoe::{Board, Symbol},
};

#[derive(Parser, Debug)]
#[command(about = "Show the best move for a position")]
pub struct AnalyzeArgs {
    /// Nine cells, row by row; '.' or '_' for empty (e.g. "XX.O.....")
    pub board: String,

    /// Symbol to move
    #[arg(long, default_value_t = 'O')]
    pub player: char,

    /// Symbol that replies
    #[arg(long, default_value_t = 'X')]
    pub opponent: char,

    /// Search the full tree without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&args, &mut out)
}

/// Write the analysis for `args` to `out`.
pub fn report(args: &AnalyzeArgs, out: &mut impl Write) -> Result<()> {
    validate_symbols(args.player, args.opponent)?;

    let player = Symbol::new(args.player);
    let opponent = Symbol::new(args.opponent);
    let board = Board::from_string(&args.board, [player, opponent])
        .with_context(|| format!("could not read board '{}'", args.board))?;

    let engine = if args.no_pruning {
        Minimax::exhaustive()
    } else {
        Minimax::new()
    };
    let result = engine
        .search(&board, player, opponent)
        .context("position is already decided")?;

    output::write_board(out, &board)?;
    output::write_kv(out, "Engine", engine.name())?;
    output::write_kv(out, "To move", &player.to_string())?;
    output::write_kv(out, "Best move", &result.index.to_string())?;
    output::write_kv(out, "Score", &result.score.to_string())?;
    output::write_kv(out, "Nodes", &result.nodes.to_string())?;

    if engine.prunes() {
        let full = Minimax::exhaustive().search(&board, player, opponent)?;
        output::write_kv(out, "Nodes (no pruning)", &full.nodes.to_string())?;
    }

    Ok(())
}
