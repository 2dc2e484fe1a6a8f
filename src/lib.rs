//! Board model and breadth-first solver for a Klotski-style sliding puzzle:
//! slide pieces one cell at a time until the 2x2 square is boxed in on all
//! four sides by occupied, in-bounds cells.

use std::ops::{Add, Index, IndexMut};

use arrayvec::ArrayVec;
use serde::Serialize;

mod fmt;
mod parse;
pub mod solve;

/// Largest number of cells any piece owns (the 2x2 square).
pub const MAX_PIECE_CELLS: usize = 4;

pub type Cells = ArrayVec<Coord, MAX_PIECE_CELLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// All eight neighbor directions. Only [`Direction::CARDINAL`] take part in
/// move generation and the solved test; the diagonals exist for their unit
/// vectors alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpLeft,
    UpRight,
    DownRight,
    DownLeft,
}

impl Direction {
    /// The solver's move set, in tie-break order: directions are enumerated
    /// in this order, before pieces, when generating successors.
    pub const CARDINAL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    pub fn vector(self) -> Coord {
        match self {
            Self::Up => Coord::new(-1, 0),
            Self::Right => Coord::new(0, 1),
            Self::Down => Coord::new(1, 0),
            Self::Left => Coord::new(0, -1),
            Self::UpLeft => Coord::new(-1, -1),
            Self::UpRight => Coord::new(-1, 1),
            Self::DownRight => Coord::new(1, 1),
            Self::DownLeft => Coord::new(1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Piece {
    #[serde(rename = "TL")]
    TopLeft,
    #[serde(rename = "TR")]
    TopRight,
    #[serde(rename = "BL")]
    BottomLeft,
    #[serde(rename = "BR")]
    BottomRight,
    #[serde(rename = "SQ")]
    Square,
}

impl Piece {
    /// Fixed enumeration order, also the solver's inner tie-break order.
    pub const ALL: [Self; 5] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Square,
    ];

    /// Two-character label used in grid renderings and the JSON dump.
    pub fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "TL",
            Self::TopRight => "TR",
            Self::BottomLeft => "BL",
            Self::BottomRight => "BR",
            Self::Square => "SQ",
        }
    }
}

/// Expected, recoverable rejections. The solver prunes with these; they are
/// never surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardError {
    /// A piece cell is (or would move) outside the board bounds.
    InvalidCoord,
    /// Two pieces occupy (or would come to occupy) the same cell.
    Collision,
}

/// A rectangular grid plus each piece's occupied cells.
///
/// The no-overlap/in-bounds invariant is checked by [`Board::validate`], not
/// enforced structurally: a board may transiently violate it and is then
/// rejected rather than undefined. `Clone` is a deep copy; clones share no
/// storage with the source.
#[derive(Debug, Clone)]
pub struct Board {
    rows: i8,
    cols: i8,
    cells: [Cells; 5],
}

impl Index<Piece> for Board {
    type Output = Cells;
    fn index(&self, piece: Piece) -> &Self::Output {
        &self.cells[piece as usize]
    }
}
impl IndexMut<Piece> for Board {
    fn index_mut(&mut self, piece: Piece) -> &mut Self::Output {
        &mut self.cells[piece as usize]
    }
}

/// The classic 4x6 starting layout: four mirrored L pieces in the corners,
/// the square flush against the right edge.
const CLASSIC_LAYOUT: [(Piece, &[(i8, i8)]); 5] = [
    (Piece::TopLeft, &[(0, 0), (0, 1), (1, 0)]),
    (Piece::TopRight, &[(0, 2), (0, 3), (1, 3)]),
    (Piece::BottomLeft, &[(2, 0), (3, 0), (3, 1)]),
    (Piece::BottomRight, &[(2, 3), (3, 2), (3, 3)]),
    (Piece::Square, &[(1, 4), (1, 5), (2, 4), (2, 5)]),
];

impl Board {
    pub fn new(rows: i8, cols: i8) -> Self {
        Self {
            rows,
            cols,
            cells: Default::default(),
        }
    }

    pub fn classic() -> Self {
        let mut board = Self::new(4, 6);
        for (piece, cells) in CLASSIC_LAYOUT {
            board[piece] = cells
                .iter()
                .map(|&(row, col)| Coord::new(row, col))
                .collect();
        }
        board
    }

    pub fn rows(&self) -> i8 {
        self.rows
    }

    pub fn cols(&self) -> i8 {
        self.cols
    }

    pub fn is_valid_coord(&self, c: Coord) -> bool {
        (0..self.rows).contains(&c.row) && (0..self.cols).contains(&c.col)
    }

    /// Every piece occupying `c`, re-derived by scanning all cell lists. More
    /// than one occupant is possible on an unvalidated board.
    pub fn pieces_at(&self, c: Coord) -> ArrayVec<Piece, 5> {
        Piece::ALL
            .into_iter()
            .filter(|&piece| self[piece].contains(&c))
            .collect()
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        for piece in Piece::ALL {
            for &c in self[piece].iter() {
                if !self.is_valid_coord(c) {
                    return Err(BoardError::InvalidCoord);
                }
                if self.pieces_at(c).len() > 1 {
                    return Err(BoardError::Collision);
                }
            }
        }
        Ok(())
    }

    /// Translates every cell of `piece` one step along `dir`. All-or-nothing:
    /// if any destination is out of bounds or held by another piece, the
    /// board is left untouched and the rejection is returned.
    pub fn move_piece(&mut self, piece: Piece, dir: Direction) -> Result<(), BoardError> {
        let vec = dir.vector();
        let mut moved = Cells::new();
        for &c in self[piece].iter() {
            let dest = c + vec;
            if !self.is_valid_coord(dest) {
                return Err(BoardError::InvalidCoord);
            }
            if self.pieces_at(dest).into_iter().any(|p| p != piece) {
                return Err(BoardError::Collision);
            }
            moved.push(dest);
        }
        self[piece] = moved;
        Ok(())
    }

    /// Canonical layout key: for each piece in [`Piece::ALL`] order, its label
    /// followed by its cells sorted ascending as decimal `row,col` pairs.
    /// Identical occupancy encodes identically; the decimal rendering keeps
    /// the key portable across platforms.
    pub fn encode_layout(&self) -> String {
        let mut key = String::with_capacity(80);
        for piece in Piece::ALL {
            let mut cells = self[piece].clone();
            cells.sort_unstable();
            key.push_str(piece.label());
            for c in cells {
                key.push_str(&format!(",{},{}", c.row, c.col));
            }
            key.push(';');
        }
        key
    }

    /// True iff every cell of the square has, in all four cardinal
    /// directions, an in-bounds neighbor occupied by some piece (the square's
    /// own cells count). An out-of-bounds neighbor disqualifies outright;
    /// diagonal neighbors are never consulted.
    pub fn is_solved(&self) -> bool {
        Direction::CARDINAL.into_iter().all(|dir| {
            self[Piece::Square].iter().all(|&c| {
                let neighbor = c + dir.vector();
                self.is_valid_coord(neighbor) && !self.pieces_at(neighbor).is_empty()
            })
        })
    }
}

/// One unit move of one piece: the atomic edge of the search graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Move {
    pub piece: Piece,
    pub dir: Direction,
}

/// A board layout together with the move sequence that produced it from the
/// initial board. Search-queue element and final solution record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Step {
    pub board: Board,
    pub preceding_moves: Vec<Move>,
}
