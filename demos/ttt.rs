//! A definition of the game Tic-Tac-Toe using the library, for use in tests.
//!
//! For example, playing a correctly-implemented strategy against itself should
//! always result in a draw; and playing such a strategy against one that picks
//! moves randomly should always result in a win or draw.
#![allow(dead_code)]

use adversarial_search::{Player, Utility};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Square {
    #[default]
    Empty,
    X,
    O,
}

impl Square {
    fn invert(&self) -> Self {
        match *self {
            Square::Empty => Square::Empty,
            Square::X => Square::O,
            Square::O => Square::X,
        }
    }

    fn player(&self) -> Option<Player> {
        match *self {
            Square::Empty => None,
            Square::X => Some(0),
            Square::O => Some(1),
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'X',
                Square::O => 'O',
            }
        )
    }
}

const LINES: [[usize; 3]; 8] =
    [[0, 1, 2], [3, 4, 5], [6, 7, 8], [0, 3, 6], [1, 4, 7], [2, 5, 8], [0, 4, 8], [2, 4, 6]];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 9],
    to_move: Square,
}

impl Board {
    fn just_moved(&self) -> Square {
        self.to_move.invert()
    }

    // A player can only cause themselves to win on their turn, so only check for that.
    fn won_by_just_moved(&self) -> bool {
        let mark = self.just_moved();
        LINES.iter().any(|line| line.iter().all(|&i| self.squares[i] == mark))
    }

    fn full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board { squares: [Square::default(); 9], to_move: Square::X }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.squares[0], self.squares[1], self.squares[2])?;
        writeln!(f, "{} | {} | {}", self.squares[3], self.squares[4], self.squares[5])?;
        writeln!(f, "{} | {} | {}", self.squares[6], self.squares[7], self.squares[8])?;
        Ok(())
    }
}

#[derive(Default)]
pub struct Game {
    start: Board,
}

impl Game {
    /// Start play from an arbitrary position instead of the empty board.
    pub fn from_board(start: Board) -> Game {
        Game { start }
    }
}

impl adversarial_search::Game for Game {
    type S = Board;
    type M = Place;

    fn start_state(&self) -> Board {
        self.start.clone()
    }

    fn player_to_move(&self, b: &Board) -> Player {
        b.to_move.player().unwrap_or(0)
    }

    fn generate_moves(&self, b: &Board, ms: &mut Vec<Place>) {
        for i in 0..b.squares.len() {
            if b.squares[i] == Square::Empty {
                ms.push(Place { i: i as u8 });
            }
        }
    }

    fn apply(&self, b: &Board, m: &Place) -> Board {
        let mut next = b.clone();
        next.squares[m.i as usize] = b.to_move;
        next.to_move = b.to_move.invert();
        next
    }

    fn is_terminal(&self, b: &Board) -> bool {
        b.won_by_just_moved() || b.full()
    }

    fn utilities(&self, b: &Board) -> Vec<Utility> {
        match b.just_moved().player() {
            Some(0) if b.won_by_just_moved() => vec![1.0, -1.0],
            Some(1) if b.won_by_just_moved() => vec![-1.0, 1.0],
            _ => vec![0.0, 0.0],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Place {
    pub i: u8,
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "@{}", self.i)
    }
}

#[derive(Default)]
pub struct Evaluator;

impl adversarial_search::Evaluator<Game> for Evaluator {
    // adapted from http://www.cs.olemiss.edu/~dwilkins/CSCI531/tic.c
    fn evaluate(&self, b: &Board, player: Player) -> Utility {
        let mut score = 0;

        // 3rd: check for doubles
        for i in 0..3 {
            let line = i * 3;
            for (a, c) in [(line, line + 1), (line + 1, line + 2), (i, 3 + i), (3 + i, 6 + i)] {
                if b.squares[a] == b.squares[c] {
                    if b.squares[a] == Square::X {
                        score += 5;
                    } else if b.squares[a] == Square::O {
                        score -= 5;
                    }
                }
            }
        }
        // 2nd: check for the middle square
        if b.squares[4] == Square::X {
            score += 5;
        }
        if b.squares[4] == Square::O {
            score -= 5;
        }
        // Scored for X; the game is zero-sum.
        if player == 0 {
            score as Utility / 100.0
        } else {
            -score as Utility / 100.0
        }
    }
}

fn main() {
    use adversarial_search::{AlphaBeta, AlphaBetaCutoff, Game as _, Strategy};

    env_logger::init();
    let game = Game::default();
    let mut x = AlphaBeta::new();
    let mut o = match AlphaBetaCutoff::new(Evaluator, 3) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let mut b = game.start_state();
    while !game.is_terminal(&b) {
        println!("{}", b);
        let choice = if game.player_to_move(&b) == 0 {
            x.choose_move(&game, &b)
        } else {
            o.choose_move(&game, &b)
        };
        match choice {
            Ok(m) => b = game.apply(&b, &m),
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        }
    }
    println!("{}", b);
    println!("utilities: {:?}", game.utilities(&b));
}
