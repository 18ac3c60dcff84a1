//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players, named after their roles in a minimax search. MAX owns the
//! pawn that starts on row 1 and races to row 9; MIN owns the pawn that starts
//! on row 9 and races to row 1.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::BOARD_SIZE;

/// A player in a two-player game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    /// Both sides, MAX first.
    pub const BOTH: [Side; 2] = [Side::Max, Side::Min];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// The row this side's pawn must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            Side::Max => BOARD_SIZE,
            Side::Min => 1,
        }
    }

    /// The row this side's pawn starts on.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        self.opponent().goal_row()
    }

    /// 0 for MAX, 1 for MIN.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Max => 0,
            Side::Min => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Max => f.write_str("MAX"),
            Side::Min => f.write_str("MIN"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ```
/// use rust_quoridor::core::{Side, SideMap};
///
/// let mut walls = SideMap::with_value(10u8);
/// walls[Side::Min] -= 1;
/// assert_eq!(walls[Side::Max], 10);
/// assert_eq!(walls[Side::Min], 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Max), factory(Side::Min)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over `(Side, &T)` pairs, MAX first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        &self.data[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        &mut self.data[side.index()]
    }
}
