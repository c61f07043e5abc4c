//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so the binary runs with
//! sensible values even when no config.toml is present.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    tictactoe: TicTacToeDefaults,
    connect4: Connect4Defaults,
    mcts: MctsDefaults,
    play: PlayDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    env_id: String,
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct TicTacToeDefaults {
    size: usize,
    win_length: usize,
}

#[derive(Debug, Deserialize)]
struct Connect4Defaults {
    columns: usize,
    rows: usize,
    win_length: usize,
}

#[derive(Debug, Deserialize)]
struct MctsDefaults {
    exploration: f64,
    iterations: u32,
}

#[derive(Debug, Deserialize)]
struct PlayDefaults {
    mode: String,
    engine_first: bool,
    tree_depth: usize,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn env_id() -> &'static str {
    &DEFAULTS.common.env_id
}
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// TicTacToe
pub fn tictactoe_size() -> usize {
    DEFAULTS.tictactoe.size
}
pub fn tictactoe_win_length() -> usize {
    DEFAULTS.tictactoe.win_length
}

// Connect4
pub fn connect4_columns() -> usize {
    DEFAULTS.connect4.columns
}
pub fn connect4_rows() -> usize {
    DEFAULTS.connect4.rows
}
pub fn connect4_win_length() -> usize {
    DEFAULTS.connect4.win_length
}

// MCTS
pub fn exploration() -> f64 {
    DEFAULTS.mcts.exploration
}
pub fn iterations() -> u32 {
    DEFAULTS.mcts.iterations
}

// Play
pub fn play_mode() -> &'static str {
    &DEFAULTS.play.mode
}
pub fn engine_first() -> bool {
    DEFAULTS.play.engine_first
}
pub fn tree_depth() -> usize {
    DEFAULTS.play.tree_depth
}
