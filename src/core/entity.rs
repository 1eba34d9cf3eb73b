//! Identity handles for board tiles and kingdoms.
//!
//! ## TileId
//!
//! Tiles are owned by the [`Board`](crate::board::Board) once placed. A
//! `TileId` is the tile's arena slot: it is handed out by `Board::place` and
//! stays valid for the whole game because placement is permanent.
//!
//! ## KingdomId
//!
//! Kingdoms are registered once at setup and referenced by identity from
//! tiles and players. A `KingdomId` is an interned handle into the
//! [`Kingdoms`](crate::tiles::Kingdoms) registry; tiles and players never own
//! a kingdom.
//!
//! ```
//! use rust_tne::core::{KingdomId, TileId};
//!
//! let red = KingdomId::new(0);
//! let blue = KingdomId::new(1);
//! assert_ne!(red, blue);
//!
//! let first = TileId::new(0);
//! assert_eq!(first.index(), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Arena slot of a tile placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID from a raw arena index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index for this tile.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Interned handle of a kingdom registered at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KingdomId(pub u8);

impl KingdomId {
    /// Create a kingdom ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Registry index for this kingdom.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for KingdomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kingdom({})", self.0)
    }
}
