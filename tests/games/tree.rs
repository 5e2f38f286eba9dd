//! An explicit game tree, for checking searches against hand-built and
//! randomly generated positions.
#![allow(dead_code)]

use adversarial_search::{Game, Player, Utility};
use rand::Rng;

pub enum Node {
    /// Terminal, worth the given utility to player 0 and its negation to
    /// player 1.
    Leaf(Utility),
    /// Non-terminal; moves are indices into the children, in order.
    Branch(Vec<usize>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub node: usize,
    pub ply: usize,
}

pub struct Tree {
    nodes: Vec<Node>,
    root: usize,
    first_player: Player,
}

impl Tree {
    pub fn new() -> Tree {
        Tree { nodes: Vec::new(), root: 0, first_player: 0 }
    }

    pub fn leaf(&mut self, value: Utility) -> usize {
        self.nodes.push(Node::Leaf(value));
        self.nodes.len() - 1
    }

    pub fn branch(&mut self, children: Vec<usize>) -> usize {
        self.nodes.push(Node::Branch(children));
        self.nodes.len() - 1
    }

    /// Branch whose children are all leaves with the given values.
    pub fn leaves(&mut self, values: &[Utility]) -> usize {
        let children = values.iter().map(|&v| self.leaf(v)).collect();
        self.branch(children)
    }

    pub fn with_root(mut self, root: usize) -> Tree {
        self.root = root;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Tree {
        self.first_player = player;
        self
    }

    /// A tree at most `depth` plies deep with between one and `max_branching`
    /// moves per state and integer leaf values, so that ties are common.
    /// Below the root, a state ends early now and then.
    pub fn random<R: Rng>(rng: &mut R, depth: usize, max_branching: usize) -> Tree {
        let mut tree = Tree::new();
        let root = tree.grow(rng, depth, max_branching, true);
        tree.with_root(root)
    }

    fn grow<R: Rng>(&mut self, rng: &mut R, depth: usize, max_branching: usize, root: bool) -> usize {
        if depth == 0 || (!root && rng.gen_bool(0.15)) {
            return self.leaf(rng.gen_range(-5..=5) as Utility);
        }
        let n = rng.gen_range(1..=max_branching);
        let children = (0..n).map(|_| self.grow(rng, depth - 1, max_branching, false)).collect();
        self.branch(children)
    }

    fn children(&self, node: usize) -> &[usize] {
        match &self.nodes[node] {
            Node::Leaf(_) => &[],
            Node::Branch(children) => children.as_slice(),
        }
    }

    /// Exact minimax value of `node` for player 0, with `maximizing` telling
    /// whether player 0 moves there.
    pub fn value_of(&self, node: usize, maximizing: bool) -> Utility {
        match &self.nodes[node] {
            Node::Leaf(v) => *v,
            Node::Branch(children) => {
                let values = children.iter().map(|&c| self.value_of(c, !maximizing));
                if maximizing {
                    values.fold(Utility::NEG_INFINITY, Utility::max)
                } else {
                    values.fold(Utility::INFINITY, Utility::min)
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.depth_of(self.root)
    }

    fn depth_of(&self, node: usize) -> usize {
        self.children(node).iter().map(|&c| 1 + self.depth_of(c)).max().unwrap_or(0)
    }
}

impl Game for Tree {
    type S = Position;
    type M = usize;

    fn start_state(&self) -> Position {
        Position { node: self.root, ply: 0 }
    }

    fn player_to_move(&self, p: &Position) -> Player {
        (self.first_player + p.ply) % 2
    }

    fn generate_moves(&self, p: &Position, moves: &mut Vec<usize>) {
        moves.extend(0..self.children(p.node).len());
    }

    fn apply(&self, p: &Position, m: &usize) -> Position {
        Position { node: self.children(p.node)[*m], ply: p.ply + 1 }
    }

    fn is_terminal(&self, p: &Position) -> bool {
        matches!(self.nodes[p.node], Node::Leaf(_))
    }

    fn utilities(&self, p: &Position) -> Vec<Utility> {
        match self.nodes[p.node] {
            Node::Leaf(v) => vec![v, -v],
            Node::Branch(_) => vec![0.0, 0.0],
        }
    }
}
