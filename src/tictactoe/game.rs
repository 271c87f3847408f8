//! High-level game management

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{
    board::{Board, Evaluation},
    player::Player,
};
use crate::{
    Error, Result,
    ai::{Difficulty, FirstAvailable, Minimax, MoveSelector},
};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The player who completed a line
    Won(Player),
    Tied,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameOutcome::Won(player) => Some(player),
            GameOutcome::Tied => None,
        }
    }
}

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    /// No moves are accepted until [`Game::reset`]
    Over(GameOutcome),
}

/// What an accepted move did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// The game goes on with the other player
    Continue,
    /// The move ended the game
    Over(GameOutcome),
}

/// A game between two players on one board.
///
/// The game owns both players, keeps track of whose turn it is, and asks the
/// selector picked by its [`Difficulty`] for moves on automated turns.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    difficulty: Difficulty,
    current: usize,
    state: GameState,
    history: Vec<usize>,
}

impl Game {
    /// Start a game with `player1` to move.
    ///
    /// The two players are expected to use different symbols.
    #[instrument(level = "debug")]
    pub fn new(player1: Player, player2: Player, difficulty: Difficulty) -> Self {
        Game {
            board: Board::new(),
            players: [player1, player2],
            difficulty,
            current: 0,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The player who moves after the current one
    pub fn opponent(&self) -> &Player {
        &self.players[self.next_index()]
    }

    /// Index (0 or 1) of the player whose turn it is
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Mutable access to a player, e.g. to hand a turn over to the computer.
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Read-only view of the live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state {
            GameState::InProgress => None,
            GameState::Over(outcome) => Some(outcome),
        }
    }

    /// Cells played so far, in play order
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Mark `index` for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once the game has ended,
    /// [`Error::InvalidPosition`] for an index past 8 and
    /// [`Error::OccupiedCell`] for a marked cell. Nothing changes on error.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player().symbol()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveResult> {
        if self.is_over() {
            return Err(Error::GameOver);
        }

        let mover = *self.current_player();
        self.board.place(index, mover.symbol())?;
        self.history.push(index);
        debug!(index, board = %self.board.to_string().replace('\n', "/"), "move applied");

        let outcome = match self.board.evaluate() {
            Evaluation::NotOver => {
                self.current = self.next_index();
                return Ok(MoveResult::Continue);
            }
            Evaluation::Won(_) => GameOutcome::Won(mover),
            Evaluation::Tied => GameOutcome::Tied,
        };

        self.state = GameState::Over(outcome);
        match outcome {
            GameOutcome::Won(winner) => info!(winner = %winner, moves = self.history.len(), "game won"),
            GameOutcome::Tied => info!(moves = self.history.len(), "game tied"),
        }
        Ok(MoveResult::Over(outcome))
    }

    /// Ask the configured selector for the current player's move.
    ///
    /// The move is not applied; pass the index to [`Game::apply_move`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AutomatedMoveAfterGameOver`] once the game has ended,
    /// [`Error::NotAutomated`] on a human turn and [`Error::NoValidMoves`] if
    /// the selector finds nothing to play.
    pub fn request_automated_move(&self) -> Result<usize> {
        if self.is_over() {
            return Err(Error::AutomatedMoveAfterGameOver);
        }

        let current = self.current_player();
        if !current.is_automated() {
            return Err(Error::NotAutomated {
                player: current.to_string(),
            });
        }

        let opponent = self.opponent();
        match self.difficulty {
            Difficulty::Easy => FirstAvailable.select_move(&self.board, current, opponent),
            Difficulty::Hard => Minimax::new().select_move(&self.board, current, opponent),
        }
    }

    /// Request an automated move and apply it.
    ///
    /// # Errors
    ///
    /// Same as [`Game::request_automated_move`].
    pub fn play_automated_turn(&mut self) -> Result<(usize, MoveResult)> {
        let index = self.request_automated_move()?;
        let result = self.apply_move(index)?;
        Ok((index, result))
    }

    /// Clear the board and give the first player the move again.
    ///
    /// Players keep their symbols and automation settings.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = 0;
        self.state = GameState::InProgress;
        self.history.clear();
        debug!("game reset");
    }

    fn next_index(&self) -> usize {
        (self.current + 1) % self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Cell, Symbol};

    fn human_game() -> Game {
        Game::new(Player::human('O'), Player::human('X'), Difficulty::Hard)
    }

    #[test]
    fn new_game_starts_with_first_player() {
        let game = human_game();
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.current_player().symbol(), Symbol::new('O'));
        assert_eq!(game.opponent().symbol(), Symbol::new('X'));
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn turns_alternate() {
        let mut game = human_game();
        assert_eq!(game.apply_move(4), Ok(MoveResult::Continue));
        assert_eq!(game.current_index(), 1);
        assert_eq!(game.apply_move(0), Ok(MoveResult::Continue));
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.board().get(4), Some(Cell::Marked(Symbol::new('O'))));
        assert_eq!(game.board().get(0), Some(Cell::Marked(Symbol::new('X'))));
        assert_eq!(game.history(), &[4, 0]);
    }

    #[test]
    fn rejected_move_keeps_the_turn() {
        let mut game = human_game();
        game.apply_move(4).unwrap();

        assert_eq!(game.apply_move(4), Err(Error::OccupiedCell { position: 4 }));
        assert_eq!(game.apply_move(9), Err(Error::InvalidPosition { position: 9 }));
        assert_eq!(game.current_index(), 1);
        assert_eq!(game.history(), &[4]);
    }

    #[test]
    fn winning_move_ends_the_game() {
        let mut game = human_game();
        for index in [0, 3, 1, 4] {
            assert_eq!(game.apply_move(index), Ok(MoveResult::Continue));
        }
        let winner = *game.current_player();

        assert_eq!(
            game.apply_move(2),
            Ok(MoveResult::Over(GameOutcome::Won(winner)))
        );
        assert!(game.is_over());
        assert_eq!(game.outcome().and_then(|o| o.winner().copied()), Some(winner));
        // The winner stays current; the turn does not pass on a finished game.
        assert_eq!(game.current_index(), 0);
        assert_eq!(game.apply_move(5), Err(Error::GameOver));
    }

    #[test]
    fn human_turn_cannot_be_automated() {
        let game = human_game();
        assert!(matches!(
            game.request_automated_move(),
            Err(Error::NotAutomated { .. })
        ));
    }

    #[test]
    fn automation_toggle_takes_effect_immediately() {
        let mut game = Game::new(Player::human('O'), Player::human('X'), Difficulty::Easy);
        if let Some(player) = game.player_mut(0) {
            player.enable_automation();
        }
        assert_eq!(game.request_automated_move(), Ok(0));
        assert!(game.player_mut(2).is_none());
    }

    #[test]
    fn reset_clears_everything_but_the_players() {
        let mut game = Game::new(Player::automated('O'), Player::human('X'), Difficulty::Easy);
        game.play_automated_turn().unwrap();
        game.apply_move(8).unwrap();
        game.reset();

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.current_index(), 0);
        assert_eq!(*game.board(), Board::new());
        assert!(game.history().is_empty());
        assert!(game.current_player().is_automated());
    }
}
