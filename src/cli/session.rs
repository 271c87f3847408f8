//! Interactive game loop
//!
//! The loop talks to any [`BufRead`]/[`Write`] pair, so the binary hands it
//! stdin/stdout and tests hand it in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::{
    ai::Difficulty,
    cli::{
        config::{GameConfig, GameMode},
        output,
    },
    tictactoe::{Game, GameOutcome, MoveResult, Player},
};

/// Machine-readable record of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Cells in play order
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

/// Play one game from start to finish.
///
/// Human moves are read line by line from `input`. Lines that are not a
/// number, and moves the game rejects, are reported and asked for again.
///
/// # Errors
///
/// Fails if `input` runs out before the game ends, on I/O errors, or if the
/// computer player cannot move.
pub fn play_game<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    out: &mut W,
) -> Result<GameSummary> {
    let (first, second) = config.players();
    let mut game = Game::new(first, second, config.difficulty);

    output::write_section(
        out,
        &format!(
            "Tic Tac Toe\nGame mode: {}\nLevel of complexity: {}",
            config.mode, config.difficulty
        ),
    )?;
    output::write_board(out, game.board())?;
    output::write_banner(out, "GamePlay")?;

    let outcome = run(&mut game, input, out)?;
    writeln!(out, "Thanks for playing.")?;

    Ok(GameSummary {
        mode: config.mode,
        difficulty: config.difficulty,
        moves: game.history().to_vec(),
        outcome,
    })
}

/// Drive `game` until it is over and return the outcome.
///
/// # Errors
///
/// See [`play_game`].
pub fn run<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> Result<GameOutcome> {
    if let Some(outcome) = game.outcome() {
        return Ok(outcome);
    }

    loop {
        let current = *game.current_player();
        let index = if current.is_automated() {
            writeln!(out, "{current}'s turn")?;
            let index = game
                .request_automated_move()
                .with_context(|| format!("{current} could not find a move"))?;
            writeln!(out, "Best move is {index}.")?;
            index
        } else {
            read_cell(&current, input, out)?
        };

        match game.apply_move(index) {
            Ok(MoveResult::Continue) => output::write_board(out, game.board())?,
            Ok(MoveResult::Over(outcome)) => {
                output::write_board(out, game.board())?;
                output::write_banner(out, &output::outcome_message(&outcome))?;
                return Ok(outcome);
            }
            Err(err) if err.is_invalid_move() => writeln!(out, "{err}")?,
            Err(err) => return Err(err.into()),
        }
    }
}

fn read_cell<R: BufRead, W: Write>(player: &Player, input: &mut R, out: &mut W) -> Result<usize> {
    loop {
        write!(out, "{player}, pick your cell: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read move")? == 0 {
            bail!("input closed before the game finished");
        }

        let answer = line.trim();
        match answer.parse::<usize>() {
            Ok(index) => return Ok(index),
            Err(_) => writeln!(
                out,
                "'{answer}' is not a cell. Please pick a value between 0-8"
            )?,
        }
    }
}
