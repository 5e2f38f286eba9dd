//! An implementation of depth-limited alpha-beta.
//!
//! Searches a fixed number of plies below the root and scores the states at
//! that frontier with an [`Evaluator`] instead of playing them out. Terminal
//! states are always scored by their real utilities, at any depth.
//!
//! This variant is fail-hard: a state whose moves are pruned returns the
//! bound that pruned it (beta for a maximizing state, alpha for a minimizing
//! one) and no move. Each state raises its own bound to every child value it
//! sees, so among moves of equal value the *last* one generated wins, unlike
//! [`AlphaBeta`](super::alphabeta::AlphaBeta). A pruned child reports the
//! bound it was given, which ties the current best and so takes the move even
//! though its real value may be worse. The root has no parent to use a bound,
//! so it never cuts off and always keeps a move.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use log::{debug, trace};

// `m` is `None` at the frontier, at terminal states and after a cutoff.
struct Reply<M> {
    value: Utility,
    m: Option<M>,
}

impl<M> Reply<M> {
    fn leaf(value: Utility) -> Self {
        Reply { value, m: None }
    }
}

/// Alpha-beta limited to a fixed number of plies, with a heuristic frontier.
pub struct AlphaBetaCutoff<E> {
    eval: E,
    cutoff_ply: usize,
    player: Player,
    root_value: Utility,
    stats: SearchStats,
}

impl<E> AlphaBetaCutoff<E> {
    /// Search `cutoff_ply` plies deep, scoring the frontier with `eval`.
    ///
    /// With `cutoff_ply == 1` the evaluator scores the states reached by the
    /// searching player's own move; with 2, the states after the opponent's
    /// reply; and so on.
    pub fn new(eval: E, cutoff_ply: usize) -> Result<AlphaBetaCutoff<E>, SearchError> {
        if cutoff_ply == 0 {
            return Err(SearchError::NonPositiveCutoff);
        }
        Ok(AlphaBetaCutoff {
            eval,
            cutoff_ply,
            player: 0,
            root_value: 0.0,
            stats: SearchStats::default(),
        })
    }

    pub fn cutoff_ply(&self) -> usize {
        self.cutoff_ply
    }

    /// Value of the root for the maximizing player, from the last search.
    pub fn root_value(&self) -> Utility {
        self.root_value
    }

    /// Counters from the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn value<G>(
        &mut self, game: &G, state: &G::S, role: Role, mut window: Window, depth: usize,
    ) -> Result<Reply<G::M>, SearchError>
    where
        G: Game,
        E: Evaluator<G>,
    {
        self.stats.nodes += 1;
        if game.is_terminal(state) {
            self.stats.terminals += 1;
            return Ok(Reply::leaf(terminal_value(game, state, self.player)?));
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            let value = self.eval.evaluate(state, self.player);
            trace!("frontier evaluated to {}", value);
            return Ok(Reply::leaf(value));
        }
        let at_root = depth == self.cutoff_ply;
        let depth = depth - 1;
        let mut best_move = None;
        for m in legal_moves(game, state)? {
            let child = game.apply(state, &m);
            let reply = self.value(game, &child, role.flip(), window, depth)?;
            // Equal values take the move too: the last best move wins.
            if role.accepts(reply.value, window.own(role)) {
                window.set_own(role, reply.value);
                best_move = Some(m);
            }
            if !at_root && window.alpha >= window.beta {
                self.stats.cutoffs += 1;
                trace!("{:?} cutoff, returning bound {:?}", role, window);
                return Ok(Reply { value: window.opposite(role), m: None });
            }
        }
        Ok(Reply { value: window.own(role), m: best_move })
    }
}

impl<G, E> Strategy<G> for AlphaBetaCutoff<E>
where
    G: Game,
    E: Evaluator<G>,
{
    fn choose_move(&mut self, game: &G, state: &G::S) -> Result<G::M, SearchError> {
        self.stats = SearchStats::default();
        self.player = root_player(game, state)?;
        let reply = self.value(game, state, Role::Max, Window::full(), self.cutoff_ply)?;
        self.root_value = reply.value;
        debug!(
            "alpha-beta cutoff {}: player {} value {} {:?}",
            self.cutoff_ply, self.player, reply.value, self.stats
        );
        reply.m.ok_or(SearchError::EmptyActionSet)
    }
}

/// Choose a move from the game's start state with alpha-beta limited to
/// `cutoff_ply` plies, scoring the frontier with `eval`.
pub fn alpha_beta_cutoff<G, E>(game: &G, cutoff_ply: usize, eval: E) -> Result<G::M, SearchError>
where
    G: Game,
    E: Evaluator<G>,
{
    AlphaBetaCutoff::new(eval, cutoff_ply)?.choose_move(game, &game.start_state())
}
