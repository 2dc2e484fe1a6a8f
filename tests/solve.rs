use anyhow::{ensure, Context};
use klotski_solver::{solve, Board};

use crate::common::*;

mod common;

fn main() {
    run_tests("solve", false, |content| {
        let (header, grid) = content
            .trim()
            .split_once('\n')
            .context("Missing expectation header")?;
        let board = grid.parse::<Board>().context("Invalid board")?;
        board.validate().context("Invalid starting layout")?;

        let winner = solve::bfs(board.clone(), || {});

        if header.trim() == "unsolvable" {
            ensure!(winner.is_none(), "Expected no solution, but one was found");
            return Ok("no solution".to_owned());
        }

        let want: usize = header
            .strip_prefix("moves")
            .with_context(|| format!("Bad header: {header:?}"))?
            .trim()
            .parse()?;
        let step = winner.context("No solution found")?;
        ensure!(
            step.preceding_moves.len() == want,
            "Expected a {want}-move solution, got {} moves",
            step.preceding_moves.len(),
        );

        // Replay on a fresh board: every move must apply cleanly and land on
        // the solver's final layout.
        let mut replay = board;
        for (mov, i) in step.preceding_moves.iter().zip(1..) {
            replay
                .move_piece(mov.piece, mov.dir)
                .with_context(|| format!("Replay failed at step {i} `{mov}`"))?;
        }
        ensure!(replay.is_solved(), "Replayed board is not solved");
        ensure!(
            replay.encode_layout() == step.board.encode_layout(),
            "Replayed board differs from the solver's final board",
        );

        Ok(format!("solved in {want} moves"))
    });
}
