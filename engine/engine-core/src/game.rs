//! Game trait implemented by every rule engine
//!
//! The search only ever talks to a game through this trait: it enumerates
//! legal moves, applies them to private clones, and reads the terminal/winner
//! condition once random play runs out of moves.

use std::fmt::Debug;
use std::hash::Hash;

use crate::board_game::Player;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// Main trait for game implementations
///
/// A value of this type is one game in progress. It is exclusively owned by
/// whoever holds it; the search works on clones so a caller's live state is
/// never touched mid-search.
///
/// # Example
///
/// ```rust
/// # use engine_core::{Game, GameError, Player};
///
/// #[derive(Debug, Clone)]
/// struct Nim {
///     stones: u8,
///     to_move: Player,
///     winner: Option<Player>,
/// }
///
/// impl Game for Nim {
///     type Move = u8;
///
///     fn legal_moves(&self) -> Result<Vec<u8>, GameError> {
///         if self.is_terminal() {
///             return Err(GameError::GameOver);
///         }
///         Ok((1..=self.stones.min(3)).collect())
///     }
///
///     fn apply(&mut self, take: u8) -> Result<(), GameError> {
///         if !self.legal_moves()?.contains(&take) {
///             return Err(GameError::IllegalMove(format!("cannot take {}", take)));
///         }
///         self.stones -= take;
///         if self.stones == 0 {
///             self.winner = Some(self.to_move);
///         }
///         self.to_move = self.to_move.opponent();
///         Ok(())
///     }
///
///     fn is_terminal(&self) -> bool {
///         self.stones == 0
///     }
///
///     fn winner(&self) -> Option<Player> {
///         self.winner
///     }
///
///     fn current_player(&self) -> Player {
///         self.to_move
///     }
/// }
///
/// let mut nim = Nim { stones: 2, to_move: Player::One, winner: None };
/// nim.apply(2).unwrap();
/// assert!(nim.is_terminal());
/// assert_eq!(nim.winner(), Some(Player::One));
/// ```
pub trait Game: Clone + Debug + Send + Sync + 'static {
    /// Identifier of a legal action. Small, copyable and hashable.
    type Move: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// All currently playable moves, each listed once, in a deterministic order.
    ///
    /// Fails with [`GameError::GameOver`] once the game is terminal.
    fn legal_moves(&self) -> Result<Vec<Self::Move>, GameError>;

    /// Play `mv` for the player to move.
    ///
    /// On success the target is marked, the turn passes to the opponent and
    /// the terminal/winner condition is re-evaluated.
    fn apply(&mut self, mv: Self::Move) -> Result<(), GameError>;

    /// Whether the game has ended (a winning line exists or no move is left).
    fn is_terminal(&self) -> bool;

    /// The mark owning a winning line, if any.
    ///
    /// `None` covers both "draw" and "still ongoing"; use [`Game::is_terminal`]
    /// to tell them apart.
    fn winner(&self) -> Option<Player>;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// Final result, or `None` while the game is ongoing.
    fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(player) => Outcome::Win(player),
            None => Outcome::Draw,
        })
    }
}

/// Errors raised by game construction and play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid board size: {0}")]
    InvalidSize(String),
    #[error("Invalid win length {win_length}: must be greater than 1 and at most {max}")]
    InvalidWinLength { win_length: usize, max: usize },
    #[error("Illegal move: {0}")]
    IllegalMove(String),
    #[error("The game is already finished")]
    GameOver,
}
