//! Board state and localized win detection for the 6x7 grid.

use crate::common::{MoveError, Token};
use crate::config::{COLS, CONNECT, ROWS};

/// The two directions of each axis checked for a run of four. Each entry is
/// one direction; the opposite direction is its negation.
const AXES: [(i32, i32); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal down-right
    (1, -1), // diagonal down-left
];

/// 6x7 grid with per-column stack heights. Row 0 is the top row; a dropped
/// token always lands at the lowest empty row of its column, so the gravity
/// invariant is structural: column `c` occupies exactly the bottom
/// `heights[c]` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Token>; COLS]; ROWS],
    heights: [u8; COLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Cell contents at (row, col). Row 0 is the top, row 5 the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<Token> {
        self.cells[row][col]
    }

    /// Number of tokens currently stacked in `col`.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col] as usize
    }

    /// Whether `col` can accept another token.
    pub fn is_legal(&self, col: usize) -> bool {
        col < COLS && self.height(col) < ROWS
    }

    /// Columns that can still accept a token, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&c| self.is_legal(c)).collect()
    }

    /// Drop `token` into `col`, returning the row it landed in. Fails
    /// without mutating the board when the column is out of range or full.
    pub fn drop_token(&mut self, col: usize, token: Token) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let height = self.height(col);
        if height >= ROWS {
            return Err(MoveError::ColumnFull(col));
        }
        let row = ROWS - 1 - height;
        self.cells[row][col] = Some(token);
        self.heights[col] += 1;
        Ok(row)
    }

    /// Whether the token just placed at (row, col) completes a run of four.
    ///
    /// Counts consecutive same-token cells out from the placed cell in the
    /// two directions of each axis, so the check is O(1) per move instead of
    /// a whole-board scan.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(token) = self.cells[row][col] else {
            return false;
        };
        AXES.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, token, dr, dc)
                + self.run_length(row, col, token, -dr, -dc)
                >= CONNECT
        })
    }

    /// Length of the run of `token` starting one step from (row, col) in
    /// direction (dr, dc), not counting the origin cell.
    fn run_length(&self, row: usize, col: usize, token: Token, dr: i32, dc: i32) -> usize {
        let mut len = 0;
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while (0..ROWS as i32).contains(&r)
            && (0..COLS as i32).contains(&c)
            && self.cells[r as usize][c as usize] == Some(token)
        {
            len += 1;
            r += dr;
            c += dc;
        }
        len
    }

    /// Whether every column has reached full height.
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize == ROWS)
    }

    /// Fixed-width textual rendering with 0-based column indices above and
    /// below the grid. Purely presentational.
    pub fn render(&self) -> String {
        let mut header = String::from("   ");
        for col in 0..COLS {
            header.push_str(&format!("{:^5}", col));
        }
        let rule = format!("  {}", "-".repeat(COLS * 5 + 1));

        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        for row in &self.cells {
            out.push_str("  |");
            for cell in row {
                match cell {
                    Some(token) => out.push_str(&format!(" {} |", token.label())),
                    None => out.push_str("    |"),
                }
            }
            out.push('\n');
        }
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&header);
        out.push('\n');
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
