//! MCTS search implementation.
//!
//! Implements the core MCTS algorithm:
//! 1. Selection: Descend through fully expanded nodes using the UCB-style score
//! 2. Expansion: Add one random untried move below the selected node
//! 3. Simulation: Play uniformly random moves to the end of the game
//! 4. Backpropagation: Update running means along the path, flipping the
//!    result at every level

use std::collections::HashSet;

use engine_core::{Game, GameError};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::MctsTree;

/// Result reported to the tree for a finished rollout that has a winner.
const WIN: f64 = 1.0;
/// Result reported for a rollout that ended with a full board.
const DRAW: f64 = 0.5;

/// Errors that can occur during MCTS search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("no move available: the root has no children")]
    NoMoveAvailable,

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("game error during search: {0}")]
    Game(#[from] GameError),
}

/// Result of an MCTS search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Best move to play
    pub mv: M,

    /// Average score of the chosen root child
    pub score: f64,

    /// Visit count of the chosen root child
    pub visits: u32,

    /// Number of playouts performed
    pub iterations: u32,
}

/// MCTS search state for a single decision.
pub struct MctsSearch<G: Game> {
    tree: MctsTree<G::Move>,
    root_state: G,
    config: MctsConfig,
}

impl<G: Game> MctsSearch<G> {
    /// Create a new search rooted at a private copy of `state`.
    pub fn new(state: &G, config: MctsConfig) -> Self {
        Self {
            tree: MctsTree::new(),
            root_state: state.clone(),
            config,
        }
    }

    /// Run the configured number of playouts and pick the best root move.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult<G::Move>, SearchError> {
        self.config.validate()?;

        for _ in 0..self.config.iterations {
            self.playout(rng)?;
        }

        let (mv, child_id) = self.tree.best_move().ok_or(SearchError::NoMoveAvailable)?;
        let child = self.tree.get(child_id);

        debug!(
            mv = ?mv,
            score = child.score,
            visits = child.visit_count,
            nodes = self.tree.len(),
            "MCTS decision"
        );

        Ok(SearchResult {
            mv,
            score: child.score,
            visits: child.visit_count,
            iterations: self.config.iterations,
        })
    }

    /// Run a single playout (select -> expand -> simulate -> backpropagate).
    fn playout(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let mut scratch = self.root_state.clone();

        let selected = self.select(&mut scratch)?;
        let expanded = self.expand(selected, &mut scratch, rng)?;
        let result = simulate(&mut scratch, rng)?;

        self.tree.backpropagate(expanded, result);

        trace!(
            node = expanded.0,
            result = result,
            nodes = self.tree.len(),
            "MCTS playout complete"
        );

        Ok(())
    }

    /// Descend while the node is fully expanded and the game goes on,
    /// applying each chosen move to `scratch`.
    fn select(&self, scratch: &mut G) -> Result<NodeId, SearchError> {
        let mut current = self.tree.root();

        while !scratch.is_terminal() {
            let legal_count = scratch.legal_moves()?.len();
            if self.tree.get(current).children.len() != legal_count {
                break;
            }

            let Some(child_id) = self.tree.select_child(current, self.config.exploration) else {
                break;
            };
            let child = self.tree.get(child_id);
            if let Some(mv) = child.mv {
                scratch.apply(mv)?;
            }
            current = child_id;
        }

        Ok(current)
    }

    /// Add one child for a random untried move and apply it to `scratch`.
    /// Terminal positions are returned unchanged.
    fn expand(
        &mut self,
        node_id: NodeId,
        scratch: &mut G,
        rng: &mut ChaCha20Rng,
    ) -> Result<NodeId, SearchError> {
        if scratch.is_terminal() {
            return Ok(node_id);
        }

        let tried: HashSet<G::Move> = self
            .tree
            .get(node_id)
            .children
            .iter()
            .map(|(mv, _)| *mv)
            .collect();
        let untried: Vec<G::Move> = scratch
            .legal_moves()?
            .into_iter()
            .filter(|mv| !tried.contains(mv))
            .collect();

        let Some(&mv) = untried.choose(rng) else {
            return Ok(node_id);
        };

        scratch.apply(mv)?;
        Ok(self.tree.add_child(node_id, mv))
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<G::Move> {
        &self.tree
    }

    /// Consume the search, keeping only its tree.
    pub fn into_tree(self) -> MctsTree<G::Move> {
        self.tree
    }
}

/// Play uniformly random moves until the game ends.
fn simulate<G: Game>(state: &mut G, rng: &mut ChaCha20Rng) -> Result<f64, GameError> {
    while !state.is_terminal() {
        let moves = state.legal_moves()?;
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        state.apply(mv)?;
    }

    Ok(if state.winner().is_some() { WIN } else { DRAW })
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<G: Game>(
    state: &G,
    config: MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult<G::Move>, SearchError> {
    let mut search = MctsSearch::new(state, config);
    search.run(rng)
}
