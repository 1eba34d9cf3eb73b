//! Game rules.
//!
//! - [`conflict`]: same-kingdom Temple conflicts around a placed tile
//! - [`monument`]: 2×2 monument detection and creation
//! - [`scoring`]: end-of-game predicate and final penalty
//! - [`engine`]: the turn state machine that sequences all of the above
//!
//! The rule functions are pure over a [`Board`](crate::board::Board) or
//! [`GameState`](crate::core::GameState); only the engine talks to the
//! input and output collaborators.

pub mod conflict;
pub mod engine;
pub mod monument;
pub mod scoring;

pub use conflict::{conflicting_neighbors, resolve_conflicts, Conflict};
pub use engine::{
    MonumentOutcome, PlacementIntent, PlacementOutcome, PlayerInput, TurnEngine, TurnPhase,
};
pub use monument::{forms_monument, parse_monument_choice, raise_monument, Monument};
pub use scoring::{
    apply_final_scoring, end_game_penalty, game_over_reason, is_game_over, kingdom_tile_counts,
    GameOverReason,
};
