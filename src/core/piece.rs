//! Pieces on the board: pawns and walls.
//!
//! ## Walls
//!
//! A wall is anchored at the intersection `(row, col)` in `1..=8` and spans two
//! cells. A horizontal wall at `(r, c)` blocks the edges between rows `r` and
//! `r + 1` in columns `c` and `c + 1`. A vertical wall at `(r, c)` blocks the
//! edges between columns `c` and `c + 1` in rows `r` and `r + 1`.
//!
//! ```
//! use rust_quoridor::core::{Orientation, Position, Wall};
//!
//! let wall = Wall::new(4, 4, Orientation::Horizontal).unwrap();
//! assert!(wall.blocks_edge(Position::new(4, 5), Position::new(5, 5)));
//! assert!(!wall.blocks_edge(Position::new(4, 6), Position::new(5, 6)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::BuildHasherDefault;
use std::str::FromStr;

use rustc_hash::FxHasher;

use super::player::Side;
use super::position::{Position, WALL_GRID_SIZE};
use crate::error::InvalidWallError;

/// Persistent set of placed walls.
///
/// Cloning is O(1); `update` returns a new set sharing structure with the old
/// one, so probing a candidate never touches the original.
pub type WallSet = im::HashSet<Wall, BuildHasherDefault<FxHasher>>;

/// A player's pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    row: u8,
    col: u8,
    owner: Side,
}

impl Pawn {
    #[must_use]
    pub const fn new(position: Position, owner: Side) -> Self {
        Self {
            row: position.row,
            col: position.col,
            owner,
        }
    }

    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    #[must_use]
    pub const fn owner(&self) -> Side {
        self.owner
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// A pawn with the same owner at `to`.
    #[must_use]
    pub const fn move_to(&self, to: Position) -> Pawn {
        Pawn::new(to, self.owner)
    }

    /// Check if this pawn stands on its owner's goal row.
    #[must_use]
    pub const fn at_goal(&self) -> bool {
        self.row == self.owner.goal_row()
    }
}

/// Wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Generation order: horizontal before vertical.
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl FromStr for Orientation {
    type Err = InvalidWallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" => Ok(Orientation::Horizontal),
            "V" | "v" => Ok(Orientation::Vertical),
            other => Err(InvalidWallError::UnknownOrientation(other.to_string())),
        }
    }
}

/// A two-cell barrier anchored at an intersection.
///
/// Fields are only reachable through validated constructors, including
/// deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WallParts")]
pub struct Wall {
    row: u8,
    col: u8,
    orientation: Orientation,
}

#[derive(Deserialize)]
struct WallParts {
    row: u8,
    col: u8,
    orientation: Orientation,
}

impl TryFrom<WallParts> for Wall {
    type Error = InvalidWallError;

    fn try_from(parts: WallParts) -> Result<Self, Self::Error> {
        Wall::new(parts.row, parts.col, parts.orientation)
    }
}

impl Wall {
    /// Create a wall, rejecting anchors outside `1..=8`.
    pub fn new(row: u8, col: u8, orientation: Orientation) -> Result<Self, InvalidWallError> {
        if !Self::anchor_in_range(row, col) {
            return Err(InvalidWallError::OutOfBounds { row, col });
        }
        Ok(Self { row, col, orientation })
    }

    /// Create a wall from a textual orientation (`"H"` or `"V"`).
    pub fn place(row: u8, col: u8, orientation: &str) -> Result<Self, InvalidWallError> {
        Self::new(row, col, orientation.parse()?)
    }

    /// Build a wall whose anchor is already known to be in range.
    pub(crate) const fn new_unchecked(row: u8, col: u8, orientation: Orientation) -> Self {
        Self { row, col, orientation }
    }

    const fn anchor_in_range(row: u8, col: u8) -> bool {
        row >= 1 && row <= WALL_GRID_SIZE && col >= 1 && col <= WALL_GRID_SIZE
    }

    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The anchor intersection, ignoring orientation.
    #[must_use]
    pub const fn anchor(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Every wall on the board: anchors row-major, horizontal before vertical.
    pub fn all() -> impl Iterator<Item = Wall> {
        (1..=WALL_GRID_SIZE).flat_map(|row| {
            (1..=WALL_GRID_SIZE).flat_map(move |col| {
                Orientation::ALL
                    .into_iter()
                    .map(move |o| Wall::new_unchecked(row, col, o))
            })
        })
    }

    /// Check if this wall lies exactly between adjacent cells `a` and `b`.
    ///
    /// Returns false for non-adjacent pairs.
    #[must_use]
    pub fn blocks_edge(&self, a: Position, b: Position) -> bool {
        if !a.is_adjacent(b) {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal if a.col == b.col => {
                let r = a.row.min(b.row);
                self.row == r && (self.col == a.col || self.col + 1 == a.col)
            }
            Orientation::Vertical if a.row == b.row => {
                let c = a.col.min(b.col);
                self.col == c && (self.row == a.row || self.row + 1 == a.row)
            }
            _ => false,
        }
    }

    /// The walls that would block the edge between adjacent `a` and `b`.
    ///
    /// A wall set blocks the edge iff it contains one of these.
    pub fn blockers(a: Position, b: Position) -> SmallVec<[Wall; 2]> {
        let mut out = SmallVec::new();
        if !a.is_adjacent(b) {
            return out;
        }
        let (orientation, fixed, spans) = if a.col == b.col {
            // Vertical step: horizontal walls on row min(r), columns c-1 and c.
            (Orientation::Horizontal, a.row.min(b.row), a.col)
        } else {
            // Horizontal step: vertical walls on column min(c), rows r-1 and r.
            (Orientation::Vertical, a.col.min(b.col), a.row)
        };
        for offset in [spans.wrapping_sub(1), spans] {
            let (row, col) = match orientation {
                Orientation::Horizontal => (fixed, offset),
                Orientation::Vertical => (offset, fixed),
            };
            if Self::anchor_in_range(row, col) {
                out.push(Wall::new_unchecked(row, col, orientation));
            }
        }
        out
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({},{})", self.orientation.symbol(), self.row, self.col)
    }
}

/// Anything that occupies the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Pawn(Pawn),
    Wall(Wall),
}

impl From<Pawn> for Piece {
    fn from(pawn: Pawn) -> Self {
        Piece::Pawn(pawn)
    }
}

impl From<Wall> for Piece {
    fn from(wall: Wall) -> Self {
        Piece::Wall(wall)
    }
}
