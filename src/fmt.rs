use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{Board, BoardError, Coord, Direction, Move, Piece};

/// Row separator under a rendered grid, as wide as the classic board.
const RULE: &str = "-----------------------------------";

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::UpLeft => "up-left",
            Direction::UpRight => "up-right",
            Direction::DownRight => "down-right",
            Direction::DownLeft => "down-left",
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.piece, self.dir)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoardError::InvalidCoord => "invalid coord",
            BoardError::Collision => "pieces collided",
        })
    }
}

impl std::error::Error for BoardError {}

/// Grid of two-character cell labels, `--` for empty, one row per line,
/// closed by a dashed rule.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                f.write_str(if col == 0 { "| " } else { " | " })?;
                match self.pieces_at(Coord::new(row, col)).first() {
                    Some(piece) => piece.fmt(f)?,
                    None => "--".fmt(f)?,
                }
            }
            "\n".fmt(f)?;
        }
        RULE.fmt(f)?;
        "\n".fmt(f)
    }
}

/// Matches the layout the original tooling emitted: piece labels keyed in
/// sorted order under `PieceCoords`.
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let coords: BTreeMap<&'static str, &[Coord]> = Piece::ALL
            .iter()
            .map(|&piece| (piece.label(), &self[piece][..]))
            .collect();

        let mut state = serializer.serialize_struct("Board", 3)?;
        state.serialize_field("Rows", &self.rows)?;
        state.serialize_field("Cols", &self.cols)?;
        state.serialize_field("PieceCoords", &coords)?;
        state.end()
    }
}
