//! Shared types for two-player board games.
//!
//! This module provides the player marks and the rectangular board storage
//! used by both k-in-a-row variants.

use std::fmt;

/// One of the two players. `One` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board symbol for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rectangular board of optional marks, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Player>>,
}

impl Grid {
    /// Create an empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert row and column to a cell index
    #[inline]
    fn pos(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether a signed coordinate lies on the board.
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Mark at (row, col). Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[self.pos(row, col)]
    }

    /// Place a mark at (row, col). Panics if out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, player: Player) {
        let idx = self.pos(row, col);
        self.cells[idx] = Some(player);
    }

    /// True once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over `(row, col, player)` for every marked cell, row-major.
    pub fn iter_marks(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|player| (idx / self.cols, idx % self.cols, player))
        })
    }

    /// Iterate over `(row, col)` for every empty cell, row-major.
    pub fn iter_empty(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| (idx / self.cols, idx % self.cols))
    }

    /// Render the board as text with row and column labels.
    ///
    /// Rows are listed in the given order so gravity boards can print their
    /// top row first.
    pub fn render(&self, rows: impl Iterator<Item = usize>) -> String {
        let mut out = String::from("  ");
        for col in 0..self.cols {
            out.push_str(&format!(" {}", col));
        }
        out.push('\n');
        for row in rows {
            out.push_str(&format!("{:>2}", row));
            for col in 0..self.cols {
                let symbol = self.get(row, col).map_or('.', Player::symbol);
                out.push_str(&format!(" {}", symbol));
            }
            out.push('\n');
        }
        out
    }
}
