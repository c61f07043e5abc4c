//! Configuration struct definitions.
//!
//! Every section is `#[serde(default)]`, so a config.toml only needs the keys
//! it wants to change.

use crate::defaults;
use serde::Deserialize;

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub connect4: Connect4Config,
    #[serde(default)]
    pub mcts: MctsConfig,
    #[serde(default)]
    pub play: PlayConfig,
}

/// Settings shared by every game
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CommonConfig {
    /// Which game to play: "tictactoe" or "connect4"
    pub env_id: String,
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            env_id: defaults::env_id().into(),
            log_level: defaults::log_level().into(),
        }
    }
}

/// n×n board, k in a row
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TicTacToeConfig {
    pub size: usize,
    pub win_length: usize,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            size: defaults::tictactoe_size(),
            win_length: defaults::tictactoe_win_length(),
        }
    }
}

/// Gravity-drop board
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Connect4Config {
    pub columns: usize,
    pub rows: usize,
    pub win_length: usize,
}

impl Default for Connect4Config {
    fn default() -> Self {
        Self {
            columns: defaults::connect4_columns(),
            rows: defaults::connect4_rows(),
            win_length: defaults::connect4_win_length(),
        }
    }
}

/// Search knobs
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MctsConfig {
    /// Weight of the exploration term
    pub exploration: f64,
    /// Playouts per decision
    pub iterations: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration: defaults::exploration(),
            iterations: defaults::iterations(),
        }
    }
}

/// Terminal front end settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayConfig {
    /// "human" or "self-play"
    pub mode: String,
    /// Engine moves first in human mode
    pub engine_first: bool,
    /// Levels of the search tree printed after each engine move
    pub tree_depth: usize,
    /// Fixed RNG seed; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: defaults::play_mode().into(),
            engine_first: defaults::engine_first(),
            tree_depth: defaults::tree_depth(),
            seed: None,
        }
    }
}
