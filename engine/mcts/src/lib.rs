//! Monte Carlo Tree Search (MCTS) with uniform random rollouts.
//!
//! This crate provides a game-agnostic move chooser that works with any
//! game implementing the `engine-core` [`Game`](engine_core::Game) trait.
//!
//! # Overview
//!
//! Each decision builds a fresh tree rooted at the current position by running
//! a fixed number of playouts. Each playout consists of four phases:
//!
//! 1. **Selection**: Descend through fully expanded nodes, maximizing
//!    `score + c * sqrt(parent_visits / visits)`
//! 2. **Expansion**: Add one child for a uniformly random untried move
//! 3. **Simulation**: Play uniformly random moves until the game ends,
//!    scoring 1.0 for a win by either side and 0.5 for a draw
//! 4. **Backpropagation**: Merge the result into running means along the
//!    path, flipping it (`1 - r`) at every level
//!
//! The move played is the root child with the greatest average score.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::Game;
//! use games_tictactoe::TicTacToe;
//! use mcts::{MctsConfig, MctsPlayer};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut game = TicTacToe::classic();
//! let mut player = MctsPlayer::from_config(
//!     MctsConfig::for_testing(),
//!     ChaCha20Rng::seed_from_u64(42),
//! );
//!
//! let mv = player.choose_move(&game).unwrap();
//! game.apply(mv).unwrap();
//!
//! let tree = player.last_tree().unwrap();
//! println!("Searched {} nodes", tree.len());
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `exploration`: Weight `c` of the exploration term (default: 0.1)
//! - `iterations`: Number of playouts per decision (default: 1000)

pub mod config;
pub mod node;
pub mod player;
pub mod search;
pub mod tree;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use player::MctsPlayer;
pub use search::{run_mcts, MctsSearch, SearchError, SearchResult};
pub use tree::{MctsTree, TreeStats};
