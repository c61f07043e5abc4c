//! kinrow - play k-in-a-row games against a Monte Carlo Tree Search engine
//!
//! A line-oriented terminal front end that:
//! 1. Builds the configured game (n×n k-in-a-row or gravity drop)
//! 2. Asks the MCTS engine for moves, building a fresh tree per decision
//! 3. Prints the board and the engine's root statistics after every move
//! 4. Reads human moves from stdin, or lets the engine play both sides

use std::fmt::Display;
use std::io;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Parser;
use engine_core::Game;
use games_connect4::Connect4;
use games_tictactoe::TicTacToe;
use mcts::MctsPlayer;
use tracing::info;

mod config;
mod logging;
mod render;
mod session;

use crate::config::{Config, Mode};
use crate::session::Session;

fn main() -> Result<()> {
    // Must precede the first config read
    let log_handle = logging::init_tracing(engine_config::log_level())?;

    // Parse and validate configuration
    let config = Config::parse();
    config.validate()?;

    logging::set_log_level(&log_handle, &config.log_level)?;
    info!(
        env_id = %config.env_id,
        mode = %config.mode,
        iterations = config.iterations,
        exploration = config.exploration,
        seed = ?config.effective_seed(),
        "kinrow starting"
    );

    match config.env_id.as_str() {
        games_tictactoe::ENV_ID => {
            let game = TicTacToe::new(config.size, config.win_length)?;
            run(game, &config)
        }
        games_connect4::ENV_ID => {
            let game = Connect4::new(config.columns, config.rows, config.connect_length)?;
            run(game, &config)
        }
        other => Err(anyhow!("unknown env_id '{}'", other)),
    }
}

fn run<G>(game: G, config: &Config) -> Result<()>
where
    G: Game + Display,
    G::Move: Ord + Display + FromStr,
    <G::Move as FromStr>::Err: Display,
{
    let engine = MctsPlayer::from_config(config.mcts_config(), config.rng());
    let mut session = Session::new(game, engine, config.tree_depth);

    let stdout = io::stdout();
    match config.mode {
        Mode::Human => {
            let stdin = io::stdin();
            session.play_human(stdin.lock(), stdout.lock(), config.engine_first)?;
        }
        Mode::SelfPlay => {
            session.self_play(stdout.lock())?;
        }
    }

    if !session.game().is_terminal() {
        info!("Game left unfinished");
    }

    Ok(())
}
