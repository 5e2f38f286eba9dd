//! A strategy that randomly chooses a move, for use in tests.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use rand::rngs::ThreadRng;
use rand::Rng;

pub struct Random<R = ThreadRng> {
    rng: R,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl<R: Rng> Random<R> {
    /// Draw moves from the given generator, e.g. a seeded one for
    /// reproducible games.
    pub fn with_rng(rng: R) -> Random<R> {
        Random { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, game: &G, state: &G::S) -> Result<G::M, SearchError> {
        root_player(game, state)?;
        let mut moves = legal_moves(game, state)?;
        let i = self.rng.gen_range(0..moves.len());
        Ok(moves.swap_remove(i))
    }
}
