use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use klotski_solver::{solve, Board};

fn main() -> Result<()> {
    let initial = Board::classic();

    let spinner = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template("{spinner} {human_pos} states explored")?);
    let winner = solve::bfs(initial.clone(), || spinner.inc(1));
    spinner.finish_and_clear();

    let Some(winner) = winner else {
        println!("Couldn't win this one.");
        return Ok(());
    };

    println!(
        "Found a solution in {} steps",
        style(winner.preceding_moves.len()).green(),
    );

    let mut board = initial;
    for mov in &winner.preceding_moves {
        println!("Move {mov}");
        board
            .move_piece(mov.piece, mov.dir)
            .with_context(|| format!("Replaying the winning sequence failed at `{mov}`"))?;
        print!("{board}");
    }

    let dump = serde_json::to_string(&winner).context("Failed to serialize the winning step")?;
    println!("{dump}");
    Ok(())
}
