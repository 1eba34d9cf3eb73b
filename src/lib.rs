//! # rust-tne
//!
//! Rule engine for a territorial tile-placement board game in the style of
//! Tigris & Euphrates, covering a deliberately partial ruleset.
//!
//! ## Design Principles
//!
//! 1. **Pure decisions, external I/O**: the engine never prints or reads a
//!    terminal. Placement coordinates and monument choices come from a
//!    [`PlayerInput`]; everything observable goes to a [`GameObserver`].
//!
//! 2. **Deterministic**: the draw pile arrives already ordered. Shuffling
//!    happens in [`setup`] from an explicit seed.
//!
//! 3. **Identity by handle**: kingdoms are interned [`KingdomId`]s and placed
//!    tiles live in a board arena addressed by [`TileId`].
//!
//! ## Rules Covered
//!
//! - Placement validation (bounds, occupancy, hand contents)
//! - Same-kingdom Temple conflicts, always won by the acting player
//! - 2×2 monuments anchored at the placed tile's bottom-right corner
//! - Two placements per turn, then replenishment to a full hand
//! - Game end on treasure scarcity or an exhausted supply, with a
//!   smallest-kingdom penalty on every score
//!
//! ## Modules
//!
//! - `core`: IDs, players, configuration, RNG, state, errors
//! - `tiles`: resources, tiles, kingdoms, the draw pile
//! - `board`: the grid
//! - `rules`: conflicts, monuments, scoring, the turn engine
//! - `events`: observable events and the output collaborator
//! - `setup`: building an initial game state

pub mod board;
pub mod core;
pub mod events;
pub mod rules;
pub mod setup;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, KingdomId, MonumentError, PlacementError, Player, PlayerId,
    PlayerMap, RulesConfig, SeatConfig, SetupError, TileId,
};

pub use crate::board::{Board, Position};

pub use crate::tiles::{DrawPile, Kingdom, Kingdoms, Resource, Tile};

pub use crate::rules::{
    Conflict, GameOverReason, Monument, MonumentOutcome, PlacementIntent, PlacementOutcome,
    PlayerInput, TurnEngine, TurnPhase,
};

pub use crate::events::{EventLog, GameEvent, GameObserver};

pub use crate::setup::GameBuilder;
