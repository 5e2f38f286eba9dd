//! An implementation of minimax with alpha-beta pruning.
//!
//! Searches to terminal states like plain minimax, but stops looking at the
//! moves of a state once one of them reaches the opponent's bound. The value
//! returned on a cutoff is the best value found so far, not the bound. Picks
//! the same moves as [`Minimax`](super::minimax::Minimax) while visiting no
//! more states.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use log::{debug, trace};

/// Minimax with alpha-beta pruning, searching down to terminal states.
#[derive(Default)]
pub struct AlphaBeta {
    player: Player,
    root_value: Utility,
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> AlphaBeta {
        AlphaBeta::default()
    }

    /// Value of the root for the maximizing player, from the last search.
    pub fn root_value(&self) -> Utility {
        self.root_value
    }

    /// Counters from the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn value<G: Game>(
        &mut self, game: &G, state: &G::S, role: Role, mut window: Window,
    ) -> Result<(Utility, Option<G::M>), SearchError> {
        self.stats.nodes += 1;
        if game.is_terminal(state) {
            self.stats.terminals += 1;
            return Ok((terminal_value(game, state, self.player)?, None));
        }
        let mut best: Option<(Utility, G::M)> = None;
        for m in legal_moves(game, state)? {
            let child = game.apply(state, &m);
            let (value, _) = self.value(game, &child, role.flip(), window)?;
            let better = match &best {
                None => true,
                Some((best_value, _)) => role.prefers(value, *best_value),
            };
            if !better {
                continue;
            }
            window.tighten(role, value);
            if window.refutes(role, value) {
                self.stats.cutoffs += 1;
                trace!("{:?} cutoff at {} against {:?}", role, value, window);
                return Ok((value, Some(m)));
            }
            best = Some((value, m));
        }
        match best {
            Some((value, m)) => Ok((value, Some(m))),
            None => Err(SearchError::EmptyActionSet),
        }
    }
}

impl<G: Game> Strategy<G> for AlphaBeta {
    fn choose_move(&mut self, game: &G, state: &G::S) -> Result<G::M, SearchError> {
        self.stats = SearchStats::default();
        self.player = root_player(game, state)?;
        let (value, best_move) = self.value(game, state, Role::Max, Window::full())?;
        self.root_value = value;
        debug!("alpha-beta: player {} value {} {:?}", self.player, value, self.stats);
        best_move.ok_or(SearchError::EmptyActionSet)
    }
}

/// Choose a move from the game's start state with alpha-beta pruning.
pub fn alpha_beta<G: Game>(game: &G) -> Result<G::M, SearchError> {
    AlphaBeta::new().choose_move(game, &game.start_state())
}
