//! Game session state: mode, turn order and terminal-state handling.

use crate::board::Board;
use crate::common::{GameResult, MoveError, Token};
use std::fmt;

/// The three supported game modes and their token rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs human.
    Pvp,
    /// AI vs AI.
    Ava,
    /// Human vs AI.
    Pva,
}

impl GameMode {
    /// Tokens taking part in this mode, in turn order.
    pub const fn roster(self) -> &'static [Token] {
        match self {
            GameMode::Pvp => &[Token::Human1, Token::Human2],
            GameMode::Ava => &[Token::Ai1, Token::Ai2],
            GameMode::Pva => &[Token::Human1, Token::Ai1],
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::Pvp => "pvp",
            GameMode::Ava => "ava",
            GameMode::Pva => "pva",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game already ended; terminal states are absorbing.
    Finished,
    /// The move was rejected by the board. The turn does not advance.
    Move(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Finished => write!(f, "game is already over"),
            GameError::Move(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::Move(e)
    }
}

/// One game session: the board plus whose turn it is and the cached result.
pub struct Game {
    board: Board,
    mode: GameMode,
    current: usize,
    result: GameResult,
}

impl Game {
    /// Start a new game in `mode` with an empty board. The first token in
    /// the mode's roster moves first.
    pub fn new(mode: GameMode) -> Self {
        Game {
            board: Board::new(),
            mode,
            current: 0,
            result: GameResult::InProgress,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable reference to the underlying board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Tokens taking part in this game, in turn order.
    pub fn roster(&self) -> &'static [Token] {
        self.mode.roster()
    }

    /// Index into the roster of the token to move next.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Token to move next. After a win this stays on the winner.
    pub fn current_token(&self) -> Token {
        self.roster()[self.current]
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::InProgress
    }

    /// Apply one move for the current token. Win is evaluated before draw,
    /// so filling the board with a winning move still counts as a win. The
    /// turn advances only when the game continues.
    pub fn play(&mut self, col: usize) -> Result<GameResult, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }
        let token = self.current_token();
        let row = self.board.drop_token(col, token)?;
        if self.board.check_win(row, col) {
            self.result = GameResult::Win(token);
        } else if self.board.is_full() {
            self.result = GameResult::Draw;
        } else {
            self.current = (self.current + 1) % self.roster().len();
        }
        Ok(self.result)
    }
}
