use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Board, Coord, Direction, Move, Piece, MAX_PIECE_CELLS};

impl FromStr for Piece {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "TL" => Self::TopLeft,
            "TR" => Self::TopRight,
            "BL" => Self::BottomLeft,
            "BR" => Self::BottomRight,
            "SQ" => Self::Square,
            _ => bail!("Invalid piece: {s:?}"),
        })
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "up" => Self::Up,
            "right" => Self::Right,
            "down" => Self::Down,
            "left" => Self::Left,
            "up-left" => Self::UpLeft,
            "up-right" => Self::UpRight,
            "down-right" => Self::DownRight,
            "down-left" => Self::DownLeft,
            _ => bail!("Invalid direction: {s:?}"),
        })
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (piece, dir) = s
            .trim()
            .split_once(char::is_whitespace)
            .with_context(|| format!("Expected `PIECE direction`, got {s:?}"))?;
        Ok(Move {
            piece: piece.trim().parse()?,
            dir: dir.trim().parse()?,
        })
    }
}

/// Parses the same grid rendering `Display` emits. Dashed rules and blank
/// lines are ignored; a piece absent from the grid gets an empty cell list.
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('-'));

        let mut cols = None;
        let mut row = 0i8;
        let mut cells: [crate::Cells; 5] = Default::default();

        for line in lines {
            let tokens = line
                .strip_prefix('|')
                .unwrap_or(line)
                .split('|')
                .map(str::trim);

            let mut width = 0i8;
            for (col, token) in tokens.enumerate() {
                let col = i8::try_from(col).context("Board too wide")?;
                width = col + 1;
                if token == "--" {
                    continue;
                }
                let piece = token
                    .parse::<Piece>()
                    .with_context(|| format!("Row {row}, col {col}"))?;
                ensure!(
                    cells[piece as usize].len() < MAX_PIECE_CELLS,
                    "Piece {piece} has more than {MAX_PIECE_CELLS} cells",
                );
                cells[piece as usize].push(Coord::new(row, col));
            }

            match cols {
                None => cols = Some(width),
                Some(cols) => ensure!(
                    cols == width,
                    "Width mismatch at row {row}: expected {cols}, got {width}",
                ),
            }
            row = row.checked_add(1).context("Board too tall")?;
        }

        let cols = cols.context("Empty board")?;
        Ok(Board {
            rows: row,
            cols,
            cells,
        })
    }
}
