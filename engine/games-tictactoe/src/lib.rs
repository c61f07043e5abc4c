//! n×n k-in-a-row game implementation for the kinrow engine
//!
//! Generalised TicTacToe: two players alternately mark empty cells of a
//! square board, and the first to own `win_length` consecutive cells in a
//! row, column or diagonal wins. The classic game is `size = 3`,
//! `win_length = 3`.
//!
//! # Board Layout
//!
//! Moves address cells by `(row, col)`, with row 0 at the top:
//! ```text
//!      0   1   2
//! 0  (0,0)(0,1)(0,2)
//! 1  (1,0)(1,1)(1,2)
//! 2  (2,0)(2,1)(2,2)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Game, Player};
//! use games_tictactoe::{Action, TicTacToe};
//!
//! let mut game = TicTacToe::new(3, 3).expect("3x3 with 3 in a row is valid");
//! game.apply(Action::Place { row: 1, col: 1 }).unwrap();
//! assert_eq!(game.current_player(), Player::Two);
//! assert_eq!(game.legal_moves().unwrap().len(), 8);
//! ```

use std::fmt;
use std::str::FromStr;

use engine_core::game_utils::find_line;
use engine_core::{Game, GameError, Grid, Player};

/// Identifier used by configuration and the command line.
pub const ENV_ID: &str = "tictactoe";

/// TicTacToe action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Mark the cell at (row, col)
    Place { row: usize, col: usize },
}

impl Action {
    /// Get the (row, col) position for this action
    pub fn position(&self) -> (usize, usize) {
        match self {
            Action::Place { row, col } => (*row, *col),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.position();
        write!(f, "({}, {})", row, col)
    }
}

/// Error parsing a move typed by a person.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse '{0}' as a move, expected \"row col\"")]
pub struct ParseActionError(String);

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts `1 2`, `1,2` and `(1, 2)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = cleaned
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse::<usize>().map_err(|_| ParseActionError(s.to_string()))?;
                let col = col.parse::<usize>().map_err(|_| ParseActionError(s.to_string()))?;
                Ok(Action::Place { row, col })
            }
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

/// TicTacToe game state
///
/// Represents the complete state of a game including the board, the player
/// to move, and the cached winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    board: Grid,
    /// Player to move; X goes first
    current_player: Player,
    /// Cached result of the last winner scan
    winner: Option<Player>,
    done: bool,
    win_length: usize,
}

impl TicTacToe {
    /// Create an empty `size`×`size` board where `win_length` in a row wins.
    ///
    /// Fails unless `size > 0`, `size * size` fits in a `usize` and
    /// `1 < win_length <= size`.
    pub fn new(size: usize, win_length: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidSize(format!(
                "board size must be positive, got {}",
                size
            )));
        }
        if size.checked_mul(size).is_none() {
            return Err(GameError::InvalidSize(format!(
                "{}x{} board is too large",
                size, size
            )));
        }
        if win_length <= 1 || win_length > size {
            return Err(GameError::InvalidWinLength {
                win_length,
                max: size,
            });
        }

        Ok(Self::empty(size, win_length))
    }

    /// The classic 3×3 game with three in a row.
    pub fn classic() -> Self {
        Self::empty(3, 3)
    }

    fn empty(size: usize, win_length: usize) -> Self {
        Self {
            board: Grid::new(size, size),
            current_player: Player::One,
            winner: None,
            done: false,
            win_length,
        }
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.board.rows()
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Read access to the board
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Number of marks placed so far
    pub fn moves_played(&self) -> usize {
        self.board.occupied()
    }

    /// Scan every occupied cell along the four forward axes.
    fn check_winner(&self) -> Option<Player> {
        find_line(&self.board, self.win_length)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::classic()
    }
}

impl Game for TicTacToe {
    type Move = Action;

    fn legal_moves(&self) -> Result<Vec<Action>, GameError> {
        if self.done {
            return Err(GameError::GameOver);
        }

        Ok(self
            .board
            .iter_empty()
            .map(|(row, col)| Action::Place { row, col })
            .collect())
    }

    fn apply(&mut self, action: Action) -> Result<(), GameError> {
        if self.done {
            return Err(GameError::GameOver);
        }

        let (row, col) = action.position();
        if row >= self.size() || col >= self.size() {
            return Err(GameError::IllegalMove(format!(
                "{} is outside the {}x{} board",
                action,
                self.size(),
                self.size()
            )));
        }
        if self.board.get(row, col).is_some() {
            return Err(GameError::IllegalMove(format!("{} is already taken", action)));
        }

        self.board.set(row, col, self.current_player);
        self.current_player = self.current_player.opponent();

        self.winner = self.check_winner();
        self.done = self.winner.is_some() || self.board.is_full();

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

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board.render(0..self.size()))
    }
}
