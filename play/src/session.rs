//! Game session loop shared by both games.
//!
//! A session owns the live game state and the engine. The engine only ever
//! sees a reference to the live state; moves are applied here.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use engine_core::{Game, GameError, Outcome, Player};
use mcts::MctsPlayer;
use tracing::{debug, info};

use crate::render::render_tree;

pub struct Session<G: Game> {
    game: G,
    engine: MctsPlayer<G>,
    /// Tree levels printed after each engine move
    tree_depth: usize,
}

impl<G> Session<G>
where
    G: Game + Display,
    G::Move: Ord + Display + FromStr,
    <G::Move as FromStr>::Err: Display,
{
    pub fn new(game: G, engine: MctsPlayer<G>, tree_depth: usize) -> Self {
        Self {
            game,
            engine,
            tree_depth,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Let the engine pick and play one move, then print its root statistics.
    pub fn engine_turn<W: Write>(&mut self, out: &mut W) -> Result<G::Move> {
        let mover = self.game.current_player();
        let mv = self.engine.choose_move(&self.game)?;
        self.game.apply(mv)?;

        writeln!(out, "Engine ({}) plays {}", mover, mv)?;
        if self.tree_depth > 0 {
            if let Some(tree) = self.engine.last_tree() {
                let exploration = self.engine.config().exploration;
                write!(out, "{}", render_tree(tree, exploration, self.tree_depth))?;
            }
        }

        Ok(mv)
    }

    /// Read moves until one parses and is legal, then play it.
    ///
    /// Unparseable or illegal input leaves the game untouched and asks again.
    /// Returns `None` when the input is exhausted.
    pub fn human_turn<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<G::Move>> {
        let mover = self.game.current_player();
        loop {
            write!(out, "Your move ({}): ", mover)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mv = match line.parse::<G::Move>() {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(out, "{}. Try again.", e)?;
                    continue;
                }
            };

            match self.game.apply(mv) {
                Ok(()) => {
                    debug!(mv = %mv, "Human played");
                    return Ok(Some(mv));
                }
                Err(e @ GameError::IllegalMove(_)) => {
                    writeln!(out, "{}. Try again.", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Human against engine. The human plays X unless `engine_first`.
    ///
    /// Returns `None` if the input ends before the game does.
    pub fn play_human<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        engine_first: bool,
    ) -> Result<Option<Outcome>> {
        let human = if engine_first { Player::Two } else { Player::One };
        info!(human = %human, "Starting human game");

        write!(out, "{}", self.game)?;
        while !self.game.is_terminal() {
            if self.game.current_player() == human {
                if self.human_turn(&mut input, &mut out)?.is_none() {
                    writeln!(out)?;
                    writeln!(out, "Input closed, leaving the game.")?;
                    return Ok(None);
                }
            } else {
                self.engine_turn(&mut out)?;
            }
            write!(out, "{}", self.game)?;
        }

        let outcome = self.finish()?;
        let message = match outcome {
            Outcome::Win(p) if p == human => "You win!".to_string(),
            Outcome::Win(p) => format!("Engine ({}) wins.", p),
            Outcome::Draw => "Draw.".to_string(),
        };
        writeln!(out, "{}", message)?;

        Ok(Some(outcome))
    }

    /// Engine against itself until the game ends.
    pub fn self_play<W: Write>(&mut self, mut out: W) -> Result<Outcome> {
        info!("Starting self-play game");

        write!(out, "{}", self.game)?;
        while !self.game.is_terminal() {
            self.engine_turn(&mut out)?;
            write!(out, "{}", self.game)?;
        }

        let outcome = self.finish()?;
        match outcome {
            Outcome::Win(p) => writeln!(out, "{} wins.", p)?,
            Outcome::Draw => writeln!(out, "Draw.")?,
        }

        Ok(outcome)
    }

    fn finish(&self) -> Result<Outcome> {
        let outcome = self
            .game
            .outcome()
            .ok_or_else(|| anyhow!("game ended without an outcome"))?;
        info!(outcome = ?outcome, "Game finished");
        Ok(outcome)
    }
}
