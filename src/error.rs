//! Errors raised when a search is misused.
//!
//! None of these are transient: each one means the game implementation or the
//! caller broke the search contract, so nothing is retried.

use super::interface::Player;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search was asked to choose a move from a terminal state.
    #[error("search started from a terminal state")]
    InvalidStartState,
    /// A non-terminal state generated no legal moves.
    #[error("non-terminal state has no legal moves")]
    EmptyActionSet,
    /// The depth-limited search was given a ply budget of zero.
    #[error("cutoff ply must be positive")]
    NonPositiveCutoff,
    /// The terminal utility vector has no entry for the maximizing player.
    #[error("terminal utilities have no entry for player {player}")]
    MissingUtility { player: Player },
    /// A state reported a player to move other than 0 or 1.
    #[error("player {player} is not part of a two-player game")]
    UnknownPlayer { player: Player },
}
