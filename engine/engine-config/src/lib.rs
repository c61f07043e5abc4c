//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic used by
//! the `kinrow` binary.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Command-line flags (applied by the binary)
//! 2. Environment variables (`KINROW_<SECTION>_<KEY>`)
//! 3. config.toml file
//! 4. Built-in defaults (`config.defaults.toml`, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! KINROW_<SECTION>_<KEY>=value
//!
//! Examples:
//!     KINROW_COMMON_ENV_ID=connect4
//!     KINROW_CONNECT4_COLUMNS=9
//!     KINROW_MCTS_ITERATIONS=5000
//!     KINROW_PLAY_MODE=self-play
//! ```

mod defaults;
mod loader;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use structs::*;

#[cfg(test)]
mod tests;
