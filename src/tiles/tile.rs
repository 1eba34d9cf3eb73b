//! Tiles: the pieces players draw, hold and place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Resource;
use crate::board::Position;
use crate::core::KingdomId;

/// A game piece carrying one or more resources and an owning kingdom.
///
/// A tile starts with exactly one resource. Raising a monument appends a
/// second one to the tile that completed the block. The resource sequence is
/// never empty, so [`Tile::primary_resource`] is total.
///
/// Tiles in the draw pile or a hand are unplaced (`position() == None`).
/// Once the board takes a tile it records the coordinate and the tile never
/// moves again.
///
/// ```
/// use rust_tne::core::KingdomId;
/// use rust_tne::tiles::{Resource, Tile};
///
/// let tile = Tile::new(Resource::Treasure, KingdomId::new(0));
/// assert!(tile.has_treasure());
/// assert_eq!(tile.position(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    resources: SmallVec<[Resource; 2]>,
    kingdom: KingdomId,
    position: Option<Position>,
}

impl Tile {
    /// Create an unplaced tile with a single resource.
    #[must_use]
    pub fn new(resource: Resource, kingdom: KingdomId) -> Self {
        let mut resources = SmallVec::new();
        resources.push(resource);
        Self {
            resources,
            kingdom,
            position: None,
        }
    }

    /// Create an unplaced tile with `first` followed by `rest`.
    #[must_use]
    pub fn with_resources(
        first: Resource,
        rest: impl IntoIterator<Item = Resource>,
        kingdom: KingdomId,
    ) -> Self {
        let mut tile = Self::new(first, kingdom);
        tile.resources.extend(rest);
        tile
    }

    /// Resources in the order they were added.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// The resource the tile was created with.
    #[must_use]
    pub fn primary_resource(&self) -> Resource {
        self.resources[0]
    }

    /// Whether the tile carries `resource` anywhere in its sequence.
    #[must_use]
    pub fn has_resource(&self, resource: Resource) -> bool {
        self.resources.contains(&resource)
    }

    /// True iff Treasure appears in the resource sequence.
    #[must_use]
    pub fn has_treasure(&self) -> bool {
        self.has_resource(Resource::Treasure)
    }

    /// Owning kingdom.
    #[must_use]
    pub fn kingdom(&self) -> KingdomId {
        self.kingdom
    }

    /// Board coordinate, once placed.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    pub(crate) fn push_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }
}
