//! Common types for Connect 4: player tokens, move errors and game results.

use std::fmt;

/// A game piece belonging to one of the four fixed player identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Human1,
    Human2,
    Ai1,
    Ai2,
}

impl Token {
    /// Two-character label shown on the rendered board.
    pub const fn label(self) -> &'static str {
        match self {
            Token::Human1 => "p1",
            Token::Human2 => "p2",
            Token::Ai1 => "a1",
            Token::Ai2 => "a2",
        }
    }

    /// Whether moves for this token are supplied by the move oracle.
    pub const fn is_ai(self) -> bool {
        matches!(self, Token::Ai1 | Token::Ai2)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors returned by board operations. Neither variant mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Column index is outside the board.
    InvalidColumn(usize),
    /// Column already holds a full stack of tokens.
    ColumnFull(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidColumn(col) => write!(f, "column {} is out of range", col),
            MoveError::ColumnFull(col) => write!(f, "column {} is full", col),
        }
    }
}

impl std::error::Error for MoveError {}

/// Outcome of a game as seen after any move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Win(Token),
    Draw,
}
