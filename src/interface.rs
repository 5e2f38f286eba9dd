//! The common structures and traits.

use super::error::SearchError;

/// Index of a player. The search engine supports two players, `0` and `1`.
pub type Player = usize;

/// A real-valued payoff for one player.
/// Higher values mean a more favorable outcome for that player.
pub type Utility = f64;

/// Defines the rules for a two-player, constant-sum, perfect-information game.
///
/// A game ties together types for the state and moves, generates the legal
/// moves from a particular state, and scores the states where play ends. The
/// search never mutates a state; each move produces a fresh successor through
/// `apply`.
pub trait Game {
    /// The type of the game state.
    type S;
    /// The type of game moves.
    type M;

    /// The position play starts from.
    fn start_state(&self) -> Self::S;

    /// The player whose turn it is at `state`.
    fn player_to_move(&self, state: &Self::S) -> Player;

    /// Append the legal moves at a non-terminal state to `moves`.
    ///
    /// The order must be deterministic: when several moves have the same
    /// value, the strategies break the tie by this order.
    fn generate_moves(&self, state: &Self::S, moves: &mut Vec<Self::M>);

    /// The state reached by playing the legal move `m` at `state`.
    fn apply(&self, state: &Self::S, m: &Self::M) -> Self::S;

    /// Whether play has ended at `state`.
    fn is_terminal(&self, state: &Self::S) -> bool;

    /// Payoffs of a terminal state, indexed by player. The entries sum to the
    /// same constant for every terminal state.
    fn utilities(&self, state: &Self::S) -> Vec<Utility>;
}

/// Estimates non-terminal states for the depth-limited search.
pub trait Evaluator<G: Game> {
    /// How good `state` looks for `player`. Only called on states where the
    /// search ran out of plies, never on terminal states.
    fn evaluate(&self, state: &G::S, player: Player) -> Utility;
}

impl<G, F> Evaluator<G> for F
where
    G: Game,
    F: Fn(&G::S, Player) -> Utility,
{
    fn evaluate(&self, state: &G::S, player: Player) -> Utility {
        self(state, player)
    }
}

/// Defines a method of choosing a move for the player to move.
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, game: &G, state: &G::S) -> Result<G::M, SearchError>;
}

/// Counters collected over a single search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Every state the search looked at, the root included.
    pub nodes: u64,
    /// States scored by their terminal utilities.
    pub terminals: u64,
    /// States scored by the heuristic at the ply frontier.
    pub evaluations: u64,
    /// Times the remaining moves of a state were pruned.
    pub cutoffs: u64,
}
