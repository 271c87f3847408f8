//! Output formatting for the CLI

use std::io::{self, Write};

use crate::tictactoe::{Board, GameOutcome};

/// Write a section header
pub fn write_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(60))
}

/// Write a banner line framed by `#` rules
pub fn write_banner(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{}", "#".repeat(60))?;
    writeln!(out, "# {message}")?;
    writeln!(out, "{}", "#".repeat(60))
}

/// Render the board as three `|a,b,c|` rows followed by a blank line
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for row in board.cells().chunks(3) {
        let marks: Vec<String> = row.iter().map(|cell| cell.to_char().to_string()).collect();
        writeln!(out, "|{}|", marks.join(","))?;
    }
    writeln!(out)
}

/// Write a key-value pair
pub fn write_kv(out: &mut impl Write, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {:20} {}", format!("{key}:"), value)
}

/// One-line description of how a game ended
pub fn outcome_message(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Won(player) => format!("{player} won the game"),
        GameOutcome::Tied => "Game Tied!!".to_string(),
    }
}
