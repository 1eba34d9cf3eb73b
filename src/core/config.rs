//! Game configuration types.
//!
//! - `RulesConfig`: board size, hand capacity, placements per turn, bonuses
//! - `SeatConfig`: one player seat and the kingdom it plays
//! - `BagConfig`: how many tiles of each resource every kingdom contributes
//! - `GameConfig`: everything the setup needs
//!
//! All configs are plain serde values so a front end can load them from JSON.

use serde::{Deserialize, Serialize};

use crate::tiles::Resource;

/// Numeric rules of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Board height.
    pub rows: usize,

    /// Board width.
    pub cols: usize,

    /// Hands are topped up to this many tiles after each turn.
    pub hand_capacity: usize,

    /// Successful placements each player makes per turn.
    pub placements_per_turn: u8,

    /// Points awarded for raising a monument.
    pub monument_bonus: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            hand_capacity: 6,
            placements_per_turn: 2,
            monument_bonus: 10,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_board_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    #[must_use]
    pub fn with_hand_capacity(mut self, capacity: usize) -> Self {
        self.hand_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_placements_per_turn(mut self, placements: u8) -> Self {
        self.placements_per_turn = placements;
        self
    }

    #[must_use]
    pub fn with_monument_bonus(mut self, bonus: i64) -> Self {
        self.monument_bonus = bonus;
        self
    }
}

/// A player seat: display name and kingdom name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub kingdom: String,
}

impl SeatConfig {
    pub fn new(name: impl Into<String>, kingdom: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kingdom: kingdom.into(),
        }
    }
}

/// Bag composition per kingdom.
///
/// Every registered kingdom contributes `count` tiles of each listed resource.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagConfig {
    pub per_kingdom: Vec<(Resource, usize)>,
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            per_kingdom: vec![
                (Resource::Temple, 10),
                (Resource::Market, 8),
                (Resource::Farm, 8),
                (Resource::Settlement, 8),
                (Resource::Treasure, 2),
            ],
        }
    }
}

impl BagConfig {
    /// Tiles one kingdom contributes.
    #[must_use]
    pub fn tiles_per_kingdom(&self) -> usize {
        self.per_kingdom.iter().map(|(_, n)| n).sum()
    }
}

/// Complete setup configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rules: RulesConfig,
    pub seats: Vec<SeatConfig>,
    pub bag: BagConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            seats: vec![
                SeatConfig::new("Player 1", "Red"),
                SeatConfig::new("Player 2", "Blue"),
            ],
            bag: BagConfig::default(),
        }
    }
}
