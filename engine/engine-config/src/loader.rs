//! Configuration loading logic.
//!
//! Handles loading config from files and applying environment variable overrides.

use crate::CentralConfig;
use std::path::Path;
use tracing::{debug, info, warn};

/// Standard locations to search for config.toml
pub const CONFIG_SEARCH_PATHS: &[&str] = &[
    "config.toml",    // Current directory
    "../config.toml", // Parent directory (when running from a crate directory)
];

/// Load the central configuration from config.toml.
///
/// Searches for config.toml in the following order:
/// 1. Path specified by the KINROW_CONFIG environment variable
/// 2. Current directory (config.toml)
/// 3. Parent directory (../config.toml)
///
/// After loading, environment variable overrides are applied. A missing or
/// broken file is never fatal: the built-in defaults are used instead.
pub fn load_config() -> CentralConfig {
    // Check for explicit config path
    if let Ok(path) = std::env::var("KINROW_CONFIG") {
        let path = Path::new(&path);
        if path.exists() {
            info!("Loading config from KINROW_CONFIG: {}", path.display());
            return load_from_path(path);
        }
        warn!(
            "KINROW_CONFIG={} not found, searching defaults",
            path.display()
        );
    }

    // Search default locations
    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    // Fall back to defaults
    debug!("No config.toml found, using built-in defaults");
    apply_env_overrides(CentralConfig::default())
}

/// Load configuration from a specific path.
pub fn load_from_path(path: &Path) -> CentralConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => apply_env_overrides(config),
            Err(e) => {
                warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                apply_env_overrides(CentralConfig::default())
            }
        },
        Err(e) => {
            warn!("Failed to read {}: {}, using defaults", path.display(), e);
            apply_env_overrides(CentralConfig::default())
        }
    }
}

/// Macro to reduce env override boilerplate
macro_rules! env_override {
    // String field
    ($config:expr, $section:ident . $field:ident, $key:expr) => {
        if let Ok(v) = std::env::var($key) {
            $config.$section.$field = v;
        }
    };
    // Parseable field (usize, u32, f64, bool)
    ($config:expr, $section:ident . $field:ident, $key:expr, parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = v,
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, raw),
            }
        }
    };
    // Optional parseable field (Option<u64>)
    ($config:expr, $section:ident . $field:ident, $key:expr, optional_parse) => {
        if let Ok(raw) = std::env::var($key) {
            match raw.parse() {
                Ok(v) => $config.$section.$field = Some(v),
                Err(_) => warn!("Ignoring {}={:?}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply environment variable overrides to a configuration.
///
/// Environment variables follow the pattern: KINROW_<SECTION>_<KEY>
pub fn apply_env_overrides(mut config: CentralConfig) -> CentralConfig {
    // Common
    env_override!(config, common.env_id, "KINROW_COMMON_ENV_ID");
    env_override!(config, common.log_level, "KINROW_COMMON_LOG_LEVEL");

    // TicTacToe
    env_override!(config, tictactoe.size, "KINROW_TICTACTOE_SIZE", parse);
    env_override!(
        config,
        tictactoe.win_length,
        "KINROW_TICTACTOE_WIN_LENGTH",
        parse
    );

    // Connect4
    env_override!(config, connect4.columns, "KINROW_CONNECT4_COLUMNS", parse);
    env_override!(config, connect4.rows, "KINROW_CONNECT4_ROWS", parse);
    env_override!(
        config,
        connect4.win_length,
        "KINROW_CONNECT4_WIN_LENGTH",
        parse
    );

    // MCTS
    env_override!(config, mcts.exploration, "KINROW_MCTS_EXPLORATION", parse);
    env_override!(config, mcts.iterations, "KINROW_MCTS_ITERATIONS", parse);

    // Play
    env_override!(config, play.mode, "KINROW_PLAY_MODE");
    env_override!(
        config,
        play.engine_first,
        "KINROW_PLAY_ENGINE_FIRST",
        parse
    );
    env_override!(config, play.tree_depth, "KINROW_PLAY_TREE_DEPTH", parse);
    env_override!(config, play.seed, "KINROW_PLAY_SEED", optional_parse);

    config
}
