//! A single-pile game of Nim.
//!
//! Players alternately take between one and `max_take` stones; whoever takes
//! the last stone wins. Piles that are a multiple of `max_take + 1` are lost
//! for the player to move.
#![allow(dead_code)]

use adversarial_search::{Player, Utility};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    pub stones: u32,
    pub to_move: Player,
}

/// Number of stones taken.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Take(pub u32);

pub struct Nim {
    pub stones: u32,
    pub max_take: u32,
}

impl Nim {
    pub fn new(stones: u32, max_take: u32) -> Nim {
        Nim { stones, max_take }
    }
}

impl adversarial_search::Game for Nim {
    type S = Pile;
    type M = Take;

    fn start_state(&self) -> Pile {
        Pile { stones: self.stones, to_move: 0 }
    }

    fn player_to_move(&self, p: &Pile) -> Player {
        p.to_move
    }

    fn generate_moves(&self, p: &Pile, moves: &mut Vec<Take>) {
        for n in 1..=self.max_take.min(p.stones) {
            moves.push(Take(n));
        }
    }

    fn apply(&self, p: &Pile, m: &Take) -> Pile {
        Pile { stones: p.stones - m.0, to_move: 1 - p.to_move }
    }

    fn is_terminal(&self, p: &Pile) -> bool {
        p.stones == 0
    }

    fn utilities(&self, p: &Pile) -> Vec<Utility> {
        // The player who just moved took the last stone.
        let mut u = vec![-1.0, -1.0];
        u[1 - p.to_move] = 1.0;
        u
    }
}

/// Scores a pile by its size, whoever is asking.
pub fn pile_size(p: &Pile, _player: Player) -> Utility {
    p.stones as Utility
}

fn main() {
    use adversarial_search::{alpha_beta, alpha_beta_cutoff, minimax};

    env_logger::init();
    let nim = Nim::new(7, 3);
    println!("minimax:    {:?}", minimax(&nim));
    println!("alpha-beta: {:?}", alpha_beta(&nim));
    println!("cutoff 1:   {:?}", alpha_beta_cutoff(&nim, 1, pile_size));
}
