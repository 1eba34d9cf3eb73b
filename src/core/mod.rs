//! Core engine types: identities, players, configuration, RNG, state, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{BagConfig, GameConfig, RulesConfig, SeatConfig};
pub use entity::{KingdomId, TileId};
pub use error::{MonumentError, PlacementError, SetupError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
