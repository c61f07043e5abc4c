//! Connect 4 game implementation for the kinrow engine
//!
//! Connect 4 is a two-player connection game where players drop discs into
//! a vertically suspended grid. A disc falls to the lowest empty slot of its
//! column, and the first player to form a horizontal, vertical, or diagonal
//! line of `win_length` discs wins. The classic game is 7 columns by 6 rows
//! with four in a row.
//!
//! # Board Layout
//!
//! The board is stored with row 0 at the bottom:
//! ```text
//! Row 5: . . . . . . .  <- Top
//! Row 4: . . . . . . .
//! Row 3: . . . . . . .
//! Row 2: . . . . . . .
//! Row 1: . . . . . . .
//! Row 0: . . . X . . .  <- Bottom
//!        0 1 2 3 4 5 6
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Game, Player};
//! use games_connect4::{Action, Connect4};
//!
//! let mut game = Connect4::classic();
//! game.apply(Action::Drop(3)).unwrap();
//! assert_eq!(game.board().get(0, 3), Some(Player::One));
//! ```

use std::fmt;
use std::str::FromStr;

use engine_core::game_utils::completes_line;
use engine_core::{Game, GameError, Grid, Player};

/// Identifier used by configuration and the command line.
pub const ENV_ID: &str = "connect4";

/// Classic board dimensions
pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const CONNECT: usize = 4;

/// Connect4 action - drop a piece in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Drop a piece in the given column
    Drop(usize),
}

impl Action {
    /// Get the column for this action
    pub fn column(&self) -> usize {
        match self {
            Action::Drop(col) => *col,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// Error parsing a column typed by a person.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse '{0}' as a column number")]
pub struct ParseActionError(String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .map(Action::Drop)
            .map_err(|_| ParseActionError(s.to_string()))
    }
}

/// Connect4 game state
///
/// Represents the complete state of a game including the board, the player
/// to move, column fill levels and the winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connect4 {
    board: Grid,
    /// Number of pieces in each column
    column_heights: Vec<usize>,
    /// Player to move; Red (X) goes first
    current_player: Player,
    winner: Option<Player>,
    done: bool,
    win_length: usize,
}

impl Connect4 {
    /// Create an empty board of `columns`×`rows` where `win_length` in a row wins.
    ///
    /// Fails unless both dimensions are positive and
    /// `1 < win_length <= max(rows, columns)`.
    pub fn new(columns: usize, rows: usize, win_length: usize) -> Result<Self, GameError> {
        if columns == 0 || rows == 0 {
            return Err(GameError::InvalidSize(format!(
                "board must have positive dimensions, got {} columns x {} rows",
                columns, rows
            )));
        }
        if columns.checked_mul(rows).is_none() {
            return Err(GameError::InvalidSize(format!(
                "{} columns x {} rows board is too large",
                columns, rows
            )));
        }
        let max = columns.max(rows);
        if win_length <= 1 || win_length > max {
            return Err(GameError::InvalidWinLength { win_length, max });
        }

        Ok(Self::empty(columns, rows, win_length))
    }

    /// The classic 7×6 board with four in a row.
    pub fn classic() -> Self {
        Self::empty(COLS, ROWS, CONNECT)
    }

    fn empty(columns: usize, rows: usize, win_length: usize) -> Self {
        Self {
            board: Grid::new(rows, columns),
            column_heights: vec![0; columns],
            current_player: Player::One,
            winner: None,
            done: false,
            win_length,
        }
    }

    pub fn columns(&self) -> usize {
        self.board.cols()
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Read access to the board (row 0 is the bottom)
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Number of pieces currently in `col`, `None` if there is no such column
    pub fn column_height(&self, col: usize) -> Option<usize> {
        self.column_heights.get(col).copied()
    }

    /// Get the row where the last piece was placed in a column
    pub fn last_row_in_column(&self, col: usize) -> Option<usize> {
        self.column_height(col)?.checked_sub(1)
    }

    fn is_column_open(&self, col: usize) -> bool {
        self.column_height(col)
            .map_or(false, |height| height < self.rows())
    }
}

impl Default for Connect4 {
    fn default() -> Self {
        Self::classic()
    }
}

impl Game for Connect4 {
    type Move = Action;

    fn legal_moves(&self) -> Result<Vec<Action>, GameError> {
        if self.done {
            return Err(GameError::GameOver);
        }

        Ok((0..self.columns())
            .filter(|&col| self.is_column_open(col))
            .map(Action::Drop)
            .collect())
    }

    fn apply(&mut self, action: Action) -> Result<(), GameError> {
        if self.done {
            return Err(GameError::GameOver);
        }

        let col = action.column();
        if col >= self.columns() {
            return Err(GameError::IllegalMove(format!(
                "column {} does not exist, board has {} columns",
                col,
                self.columns()
            )));
        }
        if !self.is_column_open(col) {
            return Err(GameError::IllegalMove(format!("column {} is full", col)));
        }

        let row = self.column_heights[col];
        let player = self.current_player;
        self.board.set(row, col, player);
        self.column_heights[col] += 1;
        self.current_player = player.opponent();

        // Only lines through the new piece can have changed
        if completes_line(&self.board, row, col, self.win_length) {
            self.winner = Some(player);
            self.done = true;
        } else if self.board.is_full() {
            self.done = true;
        }

        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.done
    }

    fn winner(&self) -> Option<Player> {
        self.winner
    }

    fn current_player(&self) -> Player {
        self.current_player
    }
}

impl fmt::Display for Connect4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board.render((0..self.rows()).rev()))
    }
}
