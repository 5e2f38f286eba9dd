//! Utility functions for testing.

use super::error::SearchError;
use super::interface::*;

use log::debug;

/// Play a complete game from the start state with players using the two
/// provided strategies.
///
/// Player 0 is driven by the first strategy, player 1 by the second. Returns
/// the utilities of the terminal state that play ended in.
pub fn battle_royale<G, S1, S2>(
    game: &G, s1: &mut S1, s2: &mut S2,
) -> Result<Vec<Utility>, SearchError>
where
    G: Game,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let mut state = game.start_state();
    let mut strategies: [&mut dyn Strategy<G>; 2] = [s1, s2];
    let mut plies = 0;
    while !game.is_terminal(&state) {
        let player = game.player_to_move(&state);
        let strategy =
            strategies.get_mut(player).ok_or(SearchError::UnknownPlayer { player })?;
        let m = strategy.choose_move(game, &state)?;
        state = game.apply(&state, &m);
        plies += 1;
    }
    let utilities = game.utilities(&state);
    debug!("game over after {} plies: {:?}", plies, utilities);
    Ok(utilities)
}
