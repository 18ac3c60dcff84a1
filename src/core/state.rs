//! Game state: an immutable snapshot of a position.
//!
//! ## GameState
//!
//! - Both pawns (p1 is always MAX's, p2 always MIN's)
//! - Walls remaining per side
//! - The set of placed walls
//! - The side to move
//!
//! States are never mutated after construction. Transitions build a new
//! state; the wall set is a persistent `im` set, so cloning a state is O(1)
//! and a new state shares its walls with the old one.

use serde::{Deserialize, Serialize};

use super::config::{GameConfig, DEFAULT_STARTING_WALLS};
use super::piece::{Pawn, Wall, WallSet};
use super::player::{Side, SideMap};
use super::position::{Position, BOARD_SIZE};
use super::rng::GameRng;
use crate::error::{EngineError, EngineResult};
use crate::rules::reachability::{has_path, shortest_path_len};
use crate::rules::walls::{conflicts, edge_blocked};

/// Starting column for both pawns.
pub const START_COL: u8 = (BOARD_SIZE + 1) / 2;

/// Complete game state.
///
/// Holds only immutable data: share it freely, including across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateParts")]
pub struct GameState {
    p1: Pawn,
    p2: Pawn,
    walls_remaining: SideMap<u8>,
    walls: WallSet,
    active_player: Side,
}

#[derive(Deserialize)]
struct StateParts {
    p1: Pawn,
    p2: Pawn,
    walls_remaining: SideMap<u8>,
    walls: Vec<Wall>,
    active_player: Side,
}

impl TryFrom<StateParts> for GameState {
    type Error = EngineError;

    fn try_from(parts: StateParts) -> Result<Self, Self::Error> {
        GameState::new(
            parts.p1,
            parts.p2,
            parts.walls_remaining[Side::Max],
            parts.walls_remaining[Side::Min],
            parts.walls,
            parts.active_player,
        )
    }
}

impl GameState {
    /// The canonical opening position.
    ///
    /// p1 (MAX) at (1,5), p2 (MIN) at (9,5), ten walls each, no walls placed.
    #[must_use]
    pub fn initial(starting_player: Side) -> Self {
        Self::opening(DEFAULT_STARTING_WALLS, starting_player)
    }

    /// The opening position for a configuration.
    ///
    /// Draws the starting side from `rng` unless the config fixes it.
    #[must_use]
    pub fn initial_with(config: &GameConfig, rng: &mut GameRng) -> Self {
        let starting_player = config.starting_player.unwrap_or_else(|| rng.choose_side());
        Self::opening(config.starting_walls, starting_player)
    }

    fn opening(starting_walls: u8, starting_player: Side) -> Self {
        Self {
            p1: Pawn::new(Position::new(Side::Max.home_row(), START_COL), Side::Max),
            p2: Pawn::new(Position::new(Side::Min.home_row(), START_COL), Side::Min),
            walls_remaining: SideMap::with_value(starting_walls),
            walls: WallSet::default(),
            active_player: starting_player,
        }
    }

    /// Build an arbitrary position.
    ///
    /// Rejects setups no sequence of legal moves could produce from the
    /// rules' point of view: pawns off the board or on the same cell, pawns
    /// with the wrong owner, two walls on one anchor, or a pawn cut off from
    /// its goal row.
    pub fn new(
        p1: Pawn,
        p2: Pawn,
        p1_walls_remaining: u8,
        p2_walls_remaining: u8,
        walls: impl IntoIterator<Item = Wall>,
        active_player: Side,
    ) -> EngineResult<Self> {
        if p1.owner() != Side::Max || p2.owner() != Side::Min {
            return Err(EngineError::InvalidSetup("p1 must belong to MAX and p2 to MIN"));
        }
        if !p1.position().is_on_board() || !p2.position().is_on_board() {
            return Err(EngineError::InvalidSetup("pawn off the board"));
        }
        if p1.position() == p2.position() {
            return Err(EngineError::InvalidSetup("pawns share a cell"));
        }

        let mut placed = WallSet::default();
        for wall in walls {
            if conflicts(&placed, &wall) {
                return Err(EngineError::InvalidSetup("two walls share an anchor"));
            }
            placed.insert(wall);
        }

        if !has_path(p1.position(), Side::Max.goal_row(), &placed)
            || !has_path(p2.position(), Side::Min.goal_row(), &placed)
        {
            return Err(EngineError::InvalidSetup("a pawn has no path to its goal row"));
        }

        let mut walls_remaining = SideMap::with_value(0);
        walls_remaining[Side::Max] = p1_walls_remaining;
        walls_remaining[Side::Min] = p2_walls_remaining;

        Ok(Self {
            p1,
            p2,
            walls_remaining,
            walls: placed,
            active_player,
        })
    }

    // === Accessors ===

    /// MAX's pawn.
    #[must_use]
    pub fn p1(&self) -> &Pawn {
        &self.p1
    }

    /// MIN's pawn.
    #[must_use]
    pub fn p2(&self) -> &Pawn {
        &self.p2
    }

    #[must_use]
    pub fn pawn(&self, side: Side) -> &Pawn {
        match side {
            Side::Max => &self.p1,
            Side::Min => &self.p2,
        }
    }

    /// The pawn of the side to move.
    #[must_use]
    pub fn active_pawn(&self) -> &Pawn {
        self.pawn(self.active_player)
    }

    /// The pawn of the side not to move.
    #[must_use]
    pub fn opponent_pawn(&self) -> &Pawn {
        self.pawn(self.active_player.opponent())
    }

    #[must_use]
    pub fn p1_walls_remaining(&self) -> u8 {
        self.walls_remaining[Side::Max]
    }

    #[must_use]
    pub fn p2_walls_remaining(&self) -> u8 {
        self.walls_remaining[Side::Min]
    }

    #[must_use]
    pub fn walls_remaining(&self, side: Side) -> u8 {
        self.walls_remaining[side]
    }

    /// Placed walls.
    #[must_use]
    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Side to move.
    #[must_use]
    pub fn active_player(&self) -> Side {
        self.active_player
    }

    // === Queries ===

    /// Check if a placed wall blocks the edge between adjacent `a` and `b`.
    #[must_use]
    pub fn edge_blocked(&self, a: Position, b: Position) -> bool {
        edge_blocked(&self.walls, a, b)
    }

    /// Fewest pawn steps from `side`'s pawn to its goal row, ignoring the
    /// other pawn. `None` never happens in a state built by this crate.
    #[must_use]
    pub fn distance_to_goal(&self, side: Side) -> Option<u32> {
        shortest_path_len(self.pawn(side).position(), side.goal_row(), &self.walls)
    }

    // === Successors ===

    /// Successor with the active pawn at `to` and the turn passed.
    #[must_use]
    pub(crate) fn with_active_pawn_at(&self, to: Position) -> Self {
        let mut next = self.clone();
        match self.active_player {
            Side::Max => next.p1 = self.p1.move_to(to),
            Side::Min => next.p2 = self.p2.move_to(to),
        }
        next.active_player = self.active_player.opponent();
        next
    }

    /// Successor with `wall` placed by the active side and the turn passed.
    ///
    /// The active side must have a wall left.
    #[must_use]
    pub(crate) fn with_wall_placed(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        next.walls = self.walls.update(wall);
        next.walls_remaining[self.active_player] -= 1;
        next.active_player = self.active_player.opponent();
        next
    }
}
