//! Configuration for the kinrow front end
//!
//! Configuration is loaded from config.toml with environment variable overrides.
//! CLI arguments take highest priority, followed by env vars, then config.toml.

use std::fmt;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use engine_config::{load_config, CentralConfig};
use mcts::MctsConfig;
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::level_filters::LevelFilter;
use tracing::warn;

// Load central config once at startup
static CENTRAL_CONFIG: Lazy<CentralConfig> = Lazy::new(load_config);

/// Games the binary knows how to build.
pub const ENV_IDS: &[&str] = &[games_tictactoe::ENV_ID, games_connect4::ENV_ID];

/// Who sits at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// A person types moves on stdin against the engine
    Human,
    /// The engine plays both sides
    SelfPlay,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Human => write!(f, "human"),
            Mode::SelfPlay => write!(f, "self-play"),
        }
    }
}

// Default value functions that read from central config
fn default_env_id() -> String {
    CENTRAL_CONFIG.common.env_id.clone()
}

fn default_log_level() -> String {
    CENTRAL_CONFIG.common.log_level.clone()
}

fn default_size() -> usize {
    CENTRAL_CONFIG.tictactoe.size
}

fn default_win_length() -> usize {
    CENTRAL_CONFIG.tictactoe.win_length
}

fn default_columns() -> usize {
    CENTRAL_CONFIG.connect4.columns
}

fn default_rows() -> usize {
    CENTRAL_CONFIG.connect4.rows
}

fn default_connect_length() -> usize {
    CENTRAL_CONFIG.connect4.win_length
}

fn default_iterations() -> u32 {
    CENTRAL_CONFIG.mcts.iterations
}

fn default_exploration() -> f64 {
    CENTRAL_CONFIG.mcts.exploration
}

fn default_mode() -> Mode {
    let mode = &CENTRAL_CONFIG.play.mode;
    <Mode as ValueEnum>::from_str(mode, true).unwrap_or_else(|_| {
        warn!("Unknown play mode '{}' in config, using human", mode);
        Mode::Human
    })
}

fn default_engine_first() -> bool {
    CENTRAL_CONFIG.play.engine_first
}

fn default_tree_depth() -> usize {
    CENTRAL_CONFIG.play.tree_depth
}

#[derive(Parser, Debug, Clone)]
#[command(name = "kinrow")]
#[command(about = "Play k-in-a-row games against a Monte Carlo Tree Search engine")]
#[command(
    long_about = "Plays an n×n k-in-a-row game or a gravity-drop (Connect 4 style)
game against an MCTS engine, or lets the engine play itself.

Configuration is loaded from config.toml with environment variable overrides.
CLI arguments take highest priority."
)]
pub struct Config {
    /// Game to play (tictactoe, connect4)
    #[arg(long, default_value_t = default_env_id())]
    pub env_id: String,

    /// Board size for tictactoe
    #[arg(long, default_value_t = default_size())]
    pub size: usize,

    /// Marks in a row needed to win tictactoe
    #[arg(long, default_value_t = default_win_length())]
    pub win_length: usize,

    /// Number of columns for connect4
    #[arg(long, default_value_t = default_columns())]
    pub columns: usize,

    /// Number of rows for connect4
    #[arg(long, default_value_t = default_rows())]
    pub rows: usize,

    /// Discs in a row needed to win connect4
    #[arg(long, default_value_t = default_connect_length())]
    pub connect_length: usize,

    /// MCTS playouts per engine move
    #[arg(long, default_value_t = default_iterations())]
    pub iterations: u32,

    /// MCTS exploration constant
    #[arg(long, default_value_t = default_exploration())]
    pub exploration: f64,

    /// RNG seed for reproducible engine play (fresh entropy when unset)
    #[arg(long)]
    pub seed: Option<u64>,

    /// human: play against the engine; self-play: engine plays both sides
    #[arg(long, value_enum, default_value_t = default_mode())]
    pub mode: Mode,

    /// Let the engine make the first move in human mode
    #[arg(
        long,
        default_value_t = default_engine_first(),
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub engine_first: bool,

    /// Levels of the search tree printed after each engine move (0 to disable)
    #[arg(long, default_value_t = default_tree_depth())]
    pub tree_depth: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !ENV_IDS.contains(&self.env_id.as_str()) {
            return Err(anyhow!(
                "unknown env_id '{}', expected one of {}",
                self.env_id,
                ENV_IDS.join(", ")
            ));
        }

        if self.iterations == 0 {
            return Err(anyhow!("iterations must be greater than 0"));
        }

        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(anyhow!(
                "exploration must be a finite non-negative number, got {}",
                self.exploration
            ));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        Ok(())
    }

    /// Search settings for the engine.
    pub fn mcts_config(&self) -> MctsConfig {
        MctsConfig::new(self.exploration, self.iterations)
    }

    /// Seed from the command line, else from config.toml / KINROW_PLAY_SEED.
    pub fn effective_seed(&self) -> Option<u64> {
        self.seed.or(CENTRAL_CONFIG.play.seed)
    }

    /// Engine RNG: seeded when a seed is configured, otherwise from entropy.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.effective_seed() {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            env_id: "tictactoe".into(),
            size: 3,
            win_length: 3,
            columns: 7,
            rows: 6,
            connect_length: 4,
            iterations: 100,
            exploration: 0.1,
            seed: Some(1),
            mode: Mode::SelfPlay,
            engine_first: false,
            tree_depth: 1,
            log_level: "info".into(),
        }
    }

    #[test]
    fn validate_accepts_valid_configuration() {
        let cfg = base_config();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_env_id() {
        let mut cfg = base_config();
        cfg.env_id = "chess".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("env_id"));
    }

    #[test]
    fn validate_rejects_zero_iterations() {
        let mut cfg = base_config();
        cfg.iterations = 0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("iterations"));
    }

    #[test]
    fn validate_rejects_negative_exploration() {
        let mut cfg = base_config();
        cfg.exploration = -0.1;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("exploration"));
    }

    #[test]
    fn validate_rejects_invalid_log_level() {
        let mut cfg = base_config();
        cfg.log_level = "nope".into();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cfg = Config::parse_from([
            "kinrow",
            "--env-id",
            "connect4",
            "--columns",
            "9",
            "--iterations",
            "250",
            "--exploration",
            "1.5",
            "--mode",
            "self-play",
            "--engine-first",
            "--seed",
            "7",
        ]);

        assert_eq!(cfg.env_id, "connect4");
        assert_eq!(cfg.columns, 9);
        assert_eq!(cfg.iterations, 250);
        assert!((cfg.exploration - 1.5).abs() < f64::EPSILON);
        assert_eq!(cfg.mode, Mode::SelfPlay);
        assert!(cfg.engine_first);
        assert_eq!(cfg.effective_seed(), Some(7));
        assert_eq!(cfg.mcts_config(), MctsConfig::new(1.5, 250));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;

        let cfg = base_config();
        let a: u64 = cfg.rng().gen();
        let b: u64 = cfg.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn mode_display_matches_cli_names() {
        assert_eq!(Mode::Human.to_string(), "human");
        assert_eq!(Mode::SelfPlay.to_string(), "self-play");
        assert_eq!(
            <Mode as ValueEnum>::from_str("self-play", true),
            Ok(Mode::SelfPlay)
        );
    }
}
