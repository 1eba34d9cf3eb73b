//! Tile, resource and kingdom value types, plus the draw pile.
//!
//! - [`Resource`]: the five resource tags
//! - [`Tile`]: a piece with a non-empty resource sequence and an owning kingdom
//! - [`Kingdoms`]: the fixed kingdom registry
//! - [`DrawPile`]: the depleting FIFO tile supply

mod kingdom;
mod pile;
mod resource;
mod tile;

pub use kingdom::{Kingdom, Kingdoms};
pub use pile::DrawPile;
pub use resource::Resource;
pub use tile::Tile;
