//! Core traits and types for the kinrow game engines
//!
//! This crate provides the abstractions the rule engines implement and the
//! search consumes:
//! - `Game`: the capability contract of a game in progress
//! - `Player` / `Outcome`: the two marks and how a game ended
//! - `Grid`: rectangular board storage shared by the k-in-a-row variants
//! - `game_utils`: line scanning used for winner detection

pub mod board_game;
pub mod game;
pub mod game_utils;

// Re-export main types for convenience
pub use board_game::{Grid, Player};
pub use game::{Game, GameError, Outcome};
