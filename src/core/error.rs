//! Error types for placement, monument creation and game setup.
//!
//! Every error here is recoverable. Placement errors send the input
//! collaborator back for new coordinates, a bad monument choice abandons the
//! monument, and setup errors reject the configuration before any state exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TileId;
use crate::tiles::Resource;

/// Why a placement intent was rejected. The board is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementError {
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("a tile already occupies ({row}, {col})")]
    CellOccupied { row: usize, col: usize },

    #[error("no {0} tile in hand")]
    NotInHand(Resource),
}

/// Failure to raise a monument. Nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonumentError {
    /// The choice names none of Temple, Market, Farm or Settlement.
    #[error("invalid monument resource {0:?}; choose Temple, Market, Farm or Settlement")]
    InvalidChoice(String),

    #[error("{0} is not on the board")]
    NotOnBoard(TileId),
}

/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board must have at least one row and one column")]
    EmptyBoard,

    #[error("a game needs at least one seat")]
    NoSeats,

    #[error("at most {max} seats are supported")]
    TooManySeats { max: usize },

    #[error("at most {max} kingdoms can be registered")]
    TooManyKingdoms { max: usize },

    #[error("tile references unregistered kingdom {0:?}")]
    UnknownKingdom(String),

    #[error("kingdom {0:?} is registered twice")]
    DuplicateKingdom(String),
}
