//! Conflict detection around a freshly placed tile.
//!
//! A neighbour is in conflict with the placed tile when both belong to the
//! same kingdom and the neighbour carries a Temple. The acting player wins
//! every conflict. Conflicts are reported only: the losing tile stays on the
//! board and no score changes hands.
// TODO: decide the consequence of losing a conflict (tile removal, ownership
// transfer or a score penalty) once the rule is pinned down.

use tracing::debug;

use crate::board::{Board, Neighbors};
use crate::core::{PlayerId, TileId};
use crate::tiles::Resource;

/// Outcome of one contest between the placed tile and a neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub winner: PlayerId,
    pub loser: TileId,
}

/// Neighbours of `placed` that trigger a conflict, in up, down, left, right order.
///
/// Returns nothing if `placed` is not on the board.
#[must_use]
pub fn conflicting_neighbors(board: &Board, placed: TileId) -> Neighbors {
    let Some(tile) = board.tile(placed) else {
        return Neighbors::new();
    };
    let Some(pos) = tile.position() else {
        return Neighbors::new();
    };

    board
        .neighbors(pos)
        .into_iter()
        .filter(|&id| {
            board
                .tile(id)
                .is_some_and(|n| n.kingdom() == tile.kingdom() && n.has_resource(Resource::Temple))
        })
        .collect()
}

/// Resolve every conflict around `placed` in favour of `acting`.
#[must_use]
pub fn resolve_conflicts(board: &Board, placed: TileId, acting: PlayerId) -> Vec<Conflict> {
    conflicting_neighbors(board, placed)
        .into_iter()
        .map(|loser| {
            debug!(%acting, %placed, %loser, "conflict resolved");
            Conflict { winner: acting, loser }
        })
        .collect()
}
