//! Adversarial search for two-player, constant-sum, perfect-information games.
//!
//! Implement [`Game`] for a game, then pick a move with [`minimax`],
//! [`alpha_beta`] or [`alpha_beta_cutoff`], or use the matching
//! [`Strategy`] objects to search from arbitrary positions.

pub mod error;
pub mod interface;
pub mod strategies;
pub mod util;

pub use error::SearchError;
pub use interface::{Evaluator, Game, Player, SearchStats, Strategy, Utility};
pub use strategies::alphabeta::{alpha_beta, AlphaBeta};
pub use strategies::cutoff::{alpha_beta_cutoff, AlphaBetaCutoff};
pub use strategies::minimax::{minimax, Minimax};
pub use strategies::random::Random;
