//! An implementation of plain minimax.
//!
//! Explores the whole game tree down to terminal states, with no pruning.
//! Among equally valued moves the first one generated is chosen.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use log::debug;

/// Full-depth minimax for two-player, constant-sum games.
///
/// The player to move at the searched position is the maximizing player for
/// the whole search; the opponent is assumed to minimize that same utility.
#[derive(Default)]
pub struct Minimax {
    player: Player,
    root_value: Utility,
    stats: SearchStats,
}

impl Minimax {
    pub fn new() -> Minimax {
        Minimax::default()
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
        &mut self, game: &G, state: &G::S, role: Role,
    ) -> Result<(Utility, Option<G::M>), SearchError> {
        self.stats.nodes += 1;
        if game.is_terminal(state) {
            self.stats.terminals += 1;
            return Ok((terminal_value(game, state, self.player)?, None));
        }
        let mut best: Option<(Utility, G::M)> = None;
        for m in legal_moves(game, state)? {
            let child = game.apply(state, &m);
            let (value, _) = self.value(game, &child, role.flip())?;
            // Strict comparison: the first move with the best value is kept.
            let better = match &best {
                None => true,
                Some((best_value, _)) => role.prefers(value, *best_value),
            };
            if better {
                best = Some((value, m));
            }
        }
        match best {
            Some((value, m)) => Ok((value, Some(m))),
            None => Err(SearchError::EmptyActionSet),
        }
    }
}

impl<G: Game> Strategy<G> for Minimax {
    fn choose_move(&mut self, game: &G, state: &G::S) -> Result<G::M, SearchError> {
        self.stats = SearchStats::default();
        self.player = root_player(game, state)?;
        let (value, best_move) = self.value(game, state, Role::Max)?;
        self.root_value = value;
        debug!("minimax: player {} value {} {:?}", self.player, value, self.stats);
        best_move.ok_or(SearchError::EmptyActionSet)
    }
}

/// Choose a move from the game's start state with plain minimax.
pub fn minimax<G: Game>(game: &G) -> Result<G::M, SearchError> {
    Minimax::new().choose_move(game, &game.start_state())
}
