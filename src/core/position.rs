//! Board geometry: positions, directions and orthogonal adjacency.
//!
//! The board is 9×9 with 1-based coordinates. Row 1 is MAX's home row and
//! row 9 is MIN's. Only the four orthogonal directions exist for movement.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 9;

/// Number of wall anchors along each axis (intersections between cells).
pub const WALL_GRID_SIZE: u8 = BOARD_SIZE - 1;

/// Total number of cells.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A cell on the board.
///
/// ```
/// use rust_quoridor::core::{Direction, Position};
///
/// let p = Position::new(1, 5);
/// assert_eq!(p.step(Direction::Down), Some(Position::new(2, 5)));
/// assert_eq!(p.step(Direction::Up), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if both coordinates lie in `1..=9`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= BOARD_SIZE && self.col >= 1 && self.col <= BOARD_SIZE
    }

    /// Dense index in `0..81`, row-major. Only meaningful on the board.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE as usize + (self.col as usize - 1)
    }

    /// The neighbouring cell in `dir`, or `None` past the board edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        next.is_on_board().then_some(next)
    }

    /// Check orthogonal adjacency (Manhattan distance exactly 1, both on board).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.is_on_board() && other.is_on_board() && self.manhattan(other) == 1
    }

    #[must_use]
    pub fn manhattan(self, other: Position) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// On-board orthogonal neighbours in `Direction::ALL` order.
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        Direction::ALL.iter().filter_map(|&d| self.step(d)).collect()
    }

    /// Iterate over every cell, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 1.
    Up,
    /// Towards row 9.
    Down,
    Left,
    Right,
}

impl Direction {
    /// Generation order for pawn moves.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` delta.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction from `from` to an adjacent `to`.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        if !from.is_adjacent(to) {
            return None;
        }
        Direction::ALL.into_iter().find(|&d| from.step(d) == Some(to))
    }

    /// True for `Up`/`Down`.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The two directions perpendicular to this one.
    #[must_use]
    pub const fn perpendicular(self) -> [Direction; 2] {
        if self.is_vertical() {
            [Direction::Left, Direction::Right]
        } else {
            [Direction::Up, Direction::Down]
        }
    }
}
