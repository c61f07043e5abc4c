//! Move chooser that owns its randomness and keeps the last search tree.
//!
//! Every decision builds a fresh tree from the given position; the tree of the
//! most recent decision is kept around only so callers can inspect it.

use std::fmt;

use engine_core::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::MctsConfig;
use crate::search::{MctsSearch, SearchError, SearchResult};
use crate::tree::MctsTree;

/// MCTS engine facade for a single game type.
pub struct MctsPlayer<G: Game> {
    config: MctsConfig,
    /// Source of all expansion and rollout randomness
    rng: ChaCha20Rng,
    last_tree: Option<MctsTree<G::Move>>,
    last_result: Option<SearchResult<G::Move>>,
}

impl<G: Game> fmt::Debug for MctsPlayer<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MctsPlayer")
            .field("config", &self.config)
            .field("last_tree_nodes", &self.last_tree.as_ref().map(|t| t.len()))
            .finish()
    }
}

impl<G: Game> MctsPlayer<G> {
    /// Create a player with exploration constant `c` and `iterations`
    /// playouts per decision.
    pub fn new(exploration: f64, iterations: u32, rng: ChaCha20Rng) -> Self {
        Self::from_config(MctsConfig::new(exploration, iterations), rng)
    }

    pub fn from_config(config: MctsConfig, rng: ChaCha20Rng) -> Self {
        Self {
            config,
            rng,
            last_tree: None,
            last_result: None,
        }
    }

    /// Create with a specific seed for determinism.
    pub fn with_seed(config: MctsConfig, seed: u64) -> Self {
        Self::from_config(config, ChaCha20Rng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Search from `state` and return the best move.
    ///
    /// `state` is never modified. The previous decision's tree is dropped
    /// before searching, so a failed search leaves no stale tree behind.
    pub fn choose_move(&mut self, state: &G) -> Result<G::Move, SearchError> {
        self.last_tree = None;
        self.last_result = None;

        let mut search = MctsSearch::new(state, self.config.clone());
        let result = search.run(&mut self.rng)?;
        let mv = result.mv;

        debug!(
            mv = ?mv,
            score = result.score,
            visits = result.visits,
            "MCTS player chose move"
        );

        self.last_tree = Some(search.into_tree());
        self.last_result = Some(result);
        Ok(mv)
    }

    /// Tree built by the most recent successful decision.
    pub fn last_tree(&self) -> Option<&MctsTree<G::Move>> {
        self.last_tree.as_ref()
    }

    pub fn last_result(&self) -> Option<&SearchResult<G::Move>> {
        self.last_result.as_ref()
    }
}
