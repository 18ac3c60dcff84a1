//! Move representation.
//!
//! A move is either a pawn step to a destination cell or a wall placement.
//! Moves carry no owner: they are always played by the side to move in the
//! state they are applied to.

use serde::{Deserialize, Serialize};

use super::piece::Wall;
use super::position::Position;

/// A complete game move.
///
/// ```
/// use rust_quoridor::core::{Move, Position, Wall};
///
/// let step = Move::Pawn(Position::new(2, 5));
/// let wall = Move::Wall(Wall::place(4, 4, "H").unwrap());
/// assert!(step.is_pawn_move());
/// assert!(wall.is_wall_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Move the active pawn to this cell.
    Pawn(Position),
    /// Place this wall.
    Wall(Wall),
}

impl Move {
    #[must_use]
    pub const fn is_pawn_move(&self) -> bool {
        matches!(self, Move::Pawn(_))
    }

    #[must_use]
    pub const fn is_wall_move(&self) -> bool {
        matches!(self, Move::Wall(_))
    }

    /// The destination of a pawn move.
    #[must_use]
    pub const fn destination(&self) -> Option<Position> {
        match self {
            Move::Pawn(p) => Some(*p),
            Move::Wall(_) => None,
        }
    }

    /// The wall of a wall move.
    #[must_use]
    pub const fn wall(&self) -> Option<Wall> {
        match self {
            Move::Pawn(_) => None,
            Move::Wall(w) => Some(*w),
        }
    }
}

impl From<Position> for Move {
    fn from(p: Position) -> Self {
        Move::Pawn(p)
    }
}

impl From<Wall> for Move {
    fn from(w: Wall) -> Self {
        Move::Wall(w)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Pawn(p) => write!(f, "pawn->{p}"),
            Move::Wall(w) => write!(f, "wall {w}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;

    #[test]
    fn test_move_accessors() {
        let step = Move::Pawn(Position::new(3, 4));
        assert_eq!(step.destination(), Some(Position::new(3, 4)));
        assert_eq!(step.wall(), None);

        let wall = Wall::new(2, 2, Orientation::Vertical).unwrap();
        let place = Move::from(wall);
        assert_eq!(place.wall(), Some(wall));
        assert_eq!(place.destination(), None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Pawn(Position::new(3, 4)).to_string(), "pawn->(3,4)");
        let wall = Wall::new(2, 7, Orientation::Horizontal).unwrap();
        assert_eq!(Move::Wall(wall).to_string(), "wall H(2,7)");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::Wall(Wall::new(5, 1, Orientation::Vertical).unwrap());
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
