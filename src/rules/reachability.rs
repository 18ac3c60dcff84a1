//! Reachability over the open-cell graph.
//!
//! Breadth-first search from a cell to a goal row, moving orthogonally and
//! never across a walled edge. Pawns are not obstacles here: a path exists or
//! not purely by wall topology.
//!
//! The search runs once per candidate wall per side during move generation,
//! so it allocates nothing: the visited set is a fixed 81-entry distance table
//! and the queue a fixed 81-entry array (each cell is enqueued at most once).

use crate::core::{Position, WallSet, CELL_COUNT};

use super::walls::edge_blocked;

const UNSEEN: u8 = u8::MAX;

/// Check if any path leads from `start` to a cell on `goal_row`.
#[must_use]
pub fn has_path(start: Position, goal_row: u8, walls: &WallSet) -> bool {
    shortest_path_len(start, goal_row, walls).is_some()
}

/// Number of steps on a shortest path from `start` to `goal_row`.
///
/// Returns `Some(0)` when `start` is already on the goal row and `None` when
/// the goal row is unreachable or `start` is off the board.
#[must_use]
pub fn shortest_path_len(start: Position, goal_row: u8, walls: &WallSet) -> Option<u32> {
    if !start.is_on_board() {
        return None;
    }

    let mut dist = [UNSEEN; CELL_COUNT];
    let mut queue = [start; CELL_COUNT];
    let (mut head, mut tail) = (0, 1);
    dist[start.index()] = 0;

    while head < tail {
        let cell = queue[head];
        head += 1;

        let d = dist[cell.index()];
        if cell.row == goal_row {
            return Some(u32::from(d));
        }

        for next in cell.neighbors() {
            if dist[next.index()] != UNSEEN || edge_blocked(walls, cell, next) {
                continue;
            }
            dist[next.index()] = d + 1;
            queue[tail] = next;
            tail += 1;
        }
    }

    None
}
