// For a given game tree, minimax and alpha-beta should agree on the root
// value and the move: pruning only skips states that cannot matter. The
// depth-limited search, given enough plies to reach every terminal state,
// never calls its heuristic and should find the same root value. This file builds
// random trees with lots of tied leaves and checks all of that.

#[path = "games/tree.rs"]
mod tree;

use adversarial_search::{AlphaBeta, AlphaBetaCutoff, Game, Minimax, Player, Strategy, Utility};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use tree::{Position, Tree};

fn never_called(_: &Position, _: Player) -> Utility {
    panic!("heuristic called although the search reaches every terminal state")
}

#[test_log::test]
fn compare_minimax_and_alpha_beta() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for max_depth in 1..=6 {
        for _ in 0..20 {
            let tree = Tree::random(&mut rng, max_depth, 4);
            let root = tree.start_state();

            let mut minimax = Minimax::new();
            let m = minimax.choose_move(&tree, &root).unwrap();
            let mut alpha_beta = AlphaBeta::new();
            let ab = alpha_beta.choose_move(&tree, &root).unwrap();

            assert_eq!(minimax.root_value(), alpha_beta.root_value(), "depth={}", max_depth);
            assert_eq!(minimax.root_value(), tree.value_of(root.node, true));
            // Both keep the first of equally valued moves.
            assert_eq!(m, ab, "depth={}", max_depth);
            assert!(alpha_beta.stats().nodes <= minimax.stats().nodes);
            assert_eq!(minimax.stats().cutoffs, 0);
        }
    }
}

#[test]
fn cutoff_at_full_depth_matches_alpha_beta() {
    let mut rng = StdRng::seed_from_u64(42);
    for max_depth in 1..=6 {
        for _ in 0..20 {
            let tree = Tree::random(&mut rng, max_depth, 4);
            let root = tree.start_state();

            let mut alpha_beta = AlphaBeta::new();
            alpha_beta.choose_move(&tree, &root).unwrap();
            let mut cutoff = AlphaBetaCutoff::new(never_called, tree.depth()).unwrap();
            cutoff.choose_move(&tree, &root).unwrap();

            // Only the value: the chosen move may be a pruned one that tied.
            assert_eq!(cutoff.root_value(), alpha_beta.root_value(), "depth={}", max_depth);
            assert_eq!(cutoff.root_value(), tree.value_of(root.node, true));
            assert_eq!(cutoff.stats().evaluations, 0);
        }
    }
}

#[test]
fn searches_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let tree = Tree::random(&mut rng, 5, 3);
        let root = tree.start_state();
        let h = |p: &Position, _: Player| p.node as Utility;
        let first = (
            Minimax::new().choose_move(&tree, &root).unwrap(),
            AlphaBeta::new().choose_move(&tree, &root).unwrap(),
            AlphaBetaCutoff::new(h, 2).unwrap().choose_move(&tree, &root).unwrap(),
        );
        for _ in 0..3 {
            let again = (
                Minimax::new().choose_move(&tree, &root).unwrap(),
                AlphaBeta::new().choose_move(&tree, &root).unwrap(),
                AlphaBetaCutoff::new(h, 2).unwrap().choose_move(&tree, &root).unwrap(),
            );
            assert_eq!(first, again);
        }
    }
}

#[test]
fn heuristic_only_scores_the_frontier() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let tree = Tree::random(&mut rng, 6, 3);
        let root = tree.start_state();
        for ply in 1..6 {
            let seen = RefCell::new(Vec::new());
            let h = |p: &Position, player: Player| {
                seen.borrow_mut().push((p.ply, player));
                0.0
            };
            let mut cutoff = AlphaBetaCutoff::new(h, ply).unwrap();
            cutoff.choose_move(&tree, &root).unwrap();
            let stats = cutoff.stats();
            assert_eq!(stats.evaluations as usize, seen.borrow().len());
            assert!(stats.terminals + stats.evaluations <= stats.nodes);
            // Always at exactly `ply` moves from the root, always for the root player.
            assert!(seen.borrow().iter().all(|&(depth, player)| depth == ply && player == 0));
        }
    }
}
