//! Board geometry: placement validation and neighbour lookup.

mod grid;

pub use grid::{Board, Neighbors, Position};
