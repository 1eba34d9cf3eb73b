//! Monument detection and creation.
//!
//! A monument forms when the placed tile closes a 2×2 block of tiles from its
//! own kingdom, with the placed tile at the block's bottom-right corner.
//! Blocks completed from any other corner are not detected.
//!
//! Raising the monument appends the chosen resource to the placed tile only;
//! the other three tiles of the block are left as they are. The score bonus
//! is applied by the turn engine.

use tracing::{info, warn};

use crate::board::{Board, Position};
use crate::core::{KingdomId, MonumentError, TileId};
use crate::tiles::Resource;

/// A raised monument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Monument {
    /// The tile that completed the block and now carries the monument resource.
    pub marker: TileId,
    pub kingdom: KingdomId,
    pub resource: Resource,
}

/// Whether `placed` completes a same-kingdom 2×2 block as its bottom-right tile.
#[must_use]
pub fn forms_monument(board: &Board, placed: TileId) -> bool {
    let Some(tile) = board.tile(placed) else {
        return false;
    };
    let Some(pos) = tile.position() else {
        return false;
    };
    let (Some(up), Some(left)) = (pos.row.checked_sub(1), pos.col.checked_sub(1)) else {
        return false;
    };

    [
        Position::new(up, pos.col),
        Position::new(pos.row, left),
        Position::new(up, left),
    ]
    .into_iter()
    .all(|p| board.tile_at(p).is_some_and(|t| t.kingdom() == tile.kingdom()))
}

/// Parse a monument choice: case-insensitive Temple, Market, Farm or Settlement.
pub fn parse_monument_choice(input: &str) -> Result<Resource, MonumentError> {
    let resource: Resource = input.parse()?;
    if !resource.is_monument_choice() {
        return Err(MonumentError::InvalidChoice(input.to_string()));
    }
    Ok(resource)
}

/// Raise a monument on `placed` using the player's raw choice.
///
/// On an invalid choice nothing is mutated and the error is returned.
/// The choice is validated before the tile is looked up.
pub fn raise_monument(
    board: &mut Board,
    placed: TileId,
    choice: &str,
) -> Result<Monument, MonumentError> {
    let resource = match parse_monument_choice(choice) {
        Ok(resource) => resource,
        Err(err) => {
            warn!(%placed, choice, "monument abandoned: {err}");
            return Err(err);
        }
    };

    let kingdom = board
        .tile(placed)
        .map(|t| t.kingdom())
        .ok_or(MonumentError::NotOnBoard(placed))?;
    board.append_resource(placed, resource);

    info!(%placed, %kingdom, %resource, "monument raised");
    Ok(Monument {
        marker: placed,
        kingdom,
        resource,
    })
}
