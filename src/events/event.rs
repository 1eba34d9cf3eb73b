//! Game events and the output collaborator.
//!
//! The engine reports what happens through [`GameObserver`]. Front ends
//! implement it to print or animate; tests use [`EventLog`] to record the
//! stream as [`GameEvent`] values and assert on it.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::{KingdomId, PlacementError, PlayerId, TileId};
use crate::rules::GameOverReason;
use crate::tiles::Resource;

/// Something observable that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A placement intent was rejected; the player is asked again.
    InvalidPlacement { player: PlayerId, reason: PlacementError },

    TilePlaced { player: PlayerId, tile: TileId, position: Position },

    /// The acting player won a conflict against a neighbouring tile.
    ConflictResolved { winner: PlayerId, loser: TileId },

    MonumentCreated { player: PlayerId, kingdom: KingdomId, resource: Resource },

    /// A 2×2 block formed but the monument choice was invalid.
    MonumentAbandoned { player: PlayerId, choice: String },

    TurnScores(Vec<(String, i64)>),

    GameOver { reason: GameOverReason, scores: Vec<(String, i64)> },
}

/// Output collaborator. Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_invalid_placement(&mut self, _player: PlayerId, _reason: &PlacementError) {}

    fn on_tile_placed(&mut self, _player: PlayerId, _tile: TileId, _position: Position) {}

    fn on_conflict_resolved(&mut self, _winner: PlayerId, _loser: TileId) {}

    fn on_monument_created(
        &mut self,
        _player: PlayerId,
        _kingdom: KingdomId,
        _resource: Resource,
    ) {
    }

    fn on_monument_abandoned(&mut self, _player: PlayerId, _choice: &str) {}

    fn on_turn_scores(&mut self, _scores: &[(String, i64)]) {}

    fn on_game_over(&mut self, _reason: GameOverReason, _scores: &[(String, i64)]) {}
}

/// Null observer.
impl GameObserver for () {}

/// Records every callback as a [`GameEvent`].
///
/// ```
/// use rust_tne::core::{PlayerId, TileId};
/// use rust_tne::events::{EventLog, GameEvent, GameObserver};
///
/// let mut log = EventLog::new();
/// log.on_conflict_resolved(PlayerId::new(0), TileId::new(3));
/// assert_eq!(
///     log.events(),
///     &[GameEvent::ConflictResolved { winner: PlayerId::new(0), loser: TileId::new(3) }]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Events matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> impl Iterator<Item = &GameEvent>
    where
        F: Fn(&GameEvent) -> bool,
    {
        self.events.iter().filter(move |e| predicate(e))
    }

    /// Number of recorded conflict events.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.filter(|e| matches!(e, GameEvent::ConflictResolved { .. })).count()
    }

    /// Number of recorded monuments created.
    #[must_use]
    pub fn monument_count(&self) -> usize {
        self.filter(|e| matches!(e, GameEvent::MonumentCreated { .. })).count()
    }
}

impl GameObserver for EventLog {
    fn on_invalid_placement(&mut self, player: PlayerId, reason: &PlacementError) {
        self.events.push(GameEvent::InvalidPlacement {
            player,
            reason: reason.clone(),
        });
    }

    fn on_tile_placed(&mut self, player: PlayerId, tile: TileId, position: Position) {
        self.events.push(GameEvent::TilePlaced { player, tile, position });
    }

    fn on_conflict_resolved(&mut self, winner: PlayerId, loser: TileId) {
        self.events.push(GameEvent::ConflictResolved { winner, loser });
    }

    fn on_monument_created(&mut self, player: PlayerId, kingdom: KingdomId, resource: Resource) {
        self.events.push(GameEvent::MonumentCreated {
            player,
            kingdom,
            resource,
        });
    }

    fn on_monument_abandoned(&mut self, player: PlayerId, choice: &str) {
        self.events.push(GameEvent::MonumentAbandoned {
            player,
            choice: choice.to_string(),
        });
    }

    fn on_turn_scores(&mut self, scores: &[(String, i64)]) {
        self.events.push(GameEvent::TurnScores(scores.to_vec()));
    }

    fn on_game_over(&mut self, reason: GameOverReason, scores: &[(String, i64)]) {
        self.events.push(GameEvent::GameOver {
            reason,
            scores: scores.to_vec(),
        });
    }
}
