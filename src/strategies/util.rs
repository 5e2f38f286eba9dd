use super::super::error::SearchError;
use super::super::interface::*;

use log::warn;

// Which side of the minimax alternation a state sits on. The root is always
// `Max`, maximizing the root player's utility; every ply below flips.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Role {
    Max,
    Min,
}

impl Role {
    pub(super) fn flip(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    // Strictly better for this role.
    pub(super) fn prefers(self, value: Utility, than: Utility) -> bool {
        match self {
            Role::Max => value > than,
            Role::Min => value < than,
        }
    }

    // Better or equal for this role.
    pub(super) fn accepts(self, value: Utility, than: Utility) -> bool {
        match self {
            Role::Max => value >= than,
            Role::Min => value <= than,
        }
    }
}

// Search window passed by value down the recursion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct Window {
    pub(super) alpha: Utility,
    pub(super) beta: Utility,
}

impl Window {
    pub(super) fn full() -> Self {
        Window { alpha: Utility::NEG_INFINITY, beta: Utility::INFINITY }
    }

    // The bound this role may raise (max) or lower (min).
    pub(super) fn own(&self, role: Role) -> Utility {
        match role {
            Role::Max => self.alpha,
            Role::Min => self.beta,
        }
    }

    // The bound set by the opponent.
    pub(super) fn opposite(&self, role: Role) -> Utility {
        match role {
            Role::Max => self.beta,
            Role::Min => self.alpha,
        }
    }

    pub(super) fn set_own(&mut self, role: Role, value: Utility) {
        match role {
            Role::Max => self.alpha = value,
            Role::Min => self.beta = value,
        }
    }

    // Move this role's bound towards `value` if it is an improvement.
    pub(super) fn tighten(&mut self, role: Role, value: Utility) {
        if role.prefers(value, self.own(role)) {
            self.set_own(role, value);
        }
    }

    // Whether `value` already reaches the opponent's bound.
    pub(super) fn refutes(&self, role: Role, value: Utility) -> bool {
        role.accepts(value, self.opposite(role))
    }
}

// Check that a search may start at `state`, and return the player it
// maximizes for.
pub(super) fn root_player<G: Game>(game: &G, state: &G::S) -> Result<Player, SearchError> {
    if game.is_terminal(state) {
        warn!("search requested from a terminal state");
        return Err(SearchError::InvalidStartState);
    }
    Ok(game.player_to_move(state))
}

// The terminal utility of `state` for `player`.
pub(super) fn terminal_value<G: Game>(
    game: &G, state: &G::S, player: Player,
) -> Result<Utility, SearchError> {
    game.utilities(state).get(player).copied().ok_or(SearchError::MissingUtility { player })
}

// The legal moves of a non-terminal state, refusing an empty set.
pub(super) fn legal_moves<G: Game>(game: &G, state: &G::S) -> Result<Vec<G::M>, SearchError> {
    let mut moves = Vec::new();
    game.generate_moves(state, &mut moves);
    if moves.is_empty() {
        warn!("non-terminal state generated no moves");
        return Err(SearchError::EmptyActionSet);
    }
    Ok(moves)
}
