use std::collections::VecDeque;

use crate::{Board, Direction, Move, Piece, Step};

type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

/// Breadth-first search for the shortest move sequence reaching a solved
/// layout. Returns `None` once the reachable state space is exhausted.
///
/// The frontier is strict FIFO and successors are generated direction-major
/// over [`Direction::CARDINAL`] then [`Piece::ALL`], so repeated runs on the
/// same board return the same move list. `on_step` fires once per dequeued
/// state; callers use it for progress reporting.
pub fn bfs(board: Board, mut on_step: impl FnMut()) -> Option<Step> {
    let mut visited = IndexSet::default();
    let mut frontier = VecDeque::new();
    frontier.push_back(Step {
        board,
        preceding_moves: Vec::new(),
    });

    while let Some(step) = frontier.pop_front() {
        on_step();

        // Only valid successors are ever enqueued; this guards the seed state
        // and keeps invalid layouts out of the goal test.
        if step.board.validate().is_err() {
            continue;
        }

        if step.board.is_solved() {
            return Some(step);
        }

        let key = step.board.encode_layout();
        if visited.contains(&key) {
            continue;
        }

        for dir in Direction::CARDINAL {
            for piece in Piece::ALL {
                let mut board = step.board.clone();
                if board.move_piece(piece, dir).is_err() {
                    continue;
                }
                let mut preceding_moves = step.preceding_moves.clone();
                preceding_moves.push(Move { piece, dir });
                frontier.push_back(Step {
                    board,
                    preceding_moves,
                });
            }
        }
        visited.insert(key);
    }

    None
}
