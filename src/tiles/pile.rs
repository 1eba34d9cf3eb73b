//! The draw pile: a finite FIFO supply of unplaced tiles.
//!
//! The pile only depletes. Its order is fixed by whoever sets up the game,
//! so the rule engine itself never touches randomness.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::Tile;

/// FIFO sequence of unplaced tiles.
///
/// Backed by an `im` persistent vector so cloning a game state is O(1).
///
/// ```
/// use rust_tne::core::KingdomId;
/// use rust_tne::tiles::{DrawPile, Resource, Tile};
///
/// let red = KingdomId::new(0);
/// let mut pile = DrawPile::new([
///     Tile::new(Resource::Farm, red),
///     Tile::new(Resource::Market, red),
/// ]);
///
/// assert_eq!(pile.draw().unwrap().primary_resource(), Resource::Farm);
/// assert_eq!(pile.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    tiles: Vector<Tile>,
}

impl DrawPile {
    /// Create a pile; the first tile yielded is drawn first.
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Take the tile at the front, or `None` once exhausted.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Next tile to be drawn.
    #[must_use]
    pub fn peek(&self) -> Option<&Tile> {
        self.tiles.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
