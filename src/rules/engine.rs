//! Turn state machine.
//!
//! Each player turn runs through these phases:
//!
//! ```text
//! AwaitingPlacement(p, 0) -> AwaitingPlacement(p, 1) -> ... -> Drawing(p)
//!     -> TurnComplete(p) -> AwaitingPlacement(next, 0) | GameOver
//! ```
//!
//! A successful placement is always followed by conflict resolution and then
//! monument detection before anything else happens. A rejected placement
//! leaves the phase untouched, so the player is simply asked again. The
//! end-of-game predicate is evaluated once per turn, after the draw.
//!
//! The engine never reads a terminal. Placement coordinates and monument
//! choices come from a [`PlayerInput`]; everything observable goes to a
//! [`GameObserver`].

use tracing::{debug, info, warn};

use super::conflict::{resolve_conflicts, Conflict};
use super::monument::{forms_monument, raise_monument, Monument};
use super::scoring::{apply_final_scoring, game_over_reason, GameOverReason};
use crate::board::Position;
use crate::core::{GameState, MonumentError, PlacementError, PlayerId, TileId};
use crate::events::GameObserver;
use crate::tiles::Resource;

/// Where and what a player wants to place.
///
/// Coordinates are signed so that off-board input can be reported as
/// [`PlacementError::OutOfBounds`] rather than rejected by the type system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementIntent {
    pub row: i64,
    pub col: i64,
    /// Primary resource of the hand tile to place.
    pub resource: Resource,
}

impl PlacementIntent {
    #[must_use]
    pub const fn new(row: i64, col: i64, resource: Resource) -> Self {
        Self { row, col, resource }
    }
}

/// Input collaborator.
///
/// Calls block until the player answers. Returning `None` from
/// `request_placement` forfeits the player's remaining placements this turn;
/// this is how an input source with its own retry limit gives up.
pub trait PlayerInput {
    fn request_placement(&mut self, state: &GameState, player: PlayerId) -> Option<PlacementIntent>;

    /// Raw monument choice, parsed case-insensitively by the engine.
    fn request_monument_choice(&mut self, state: &GameState, player: PlayerId) -> String;
}

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingPlacement { player: PlayerId, placed: u8 },
    Drawing { player: PlayerId, placed: u8 },
    TurnComplete { player: PlayerId, placed: u8 },
    GameOver(GameOverReason),
}

/// What a 2×2 check produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonumentOutcome {
    NotFormed,
    Raised(Monument),
    Abandoned(MonumentError),
}

/// Result of one successful placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub tile: TileId,
    pub position: Position,
    pub conflicts: Vec<Conflict>,
    pub monument: MonumentOutcome,
}

/// Drives a [`GameState`] from the first placement to final scores.
///
/// ## Usage
///
/// ```
/// use rust_tne::core::{GameState, PlayerId};
/// use rust_tne::rules::{PlacementIntent, PlayerInput, TurnEngine};
/// use rust_tne::setup::GameBuilder;
///
/// /// Places the first hand tile on the first empty cell.
/// struct FirstFit;
///
/// impl PlayerInput for FirstFit {
///     fn request_placement(
///         &mut self,
///         state: &GameState,
///         player: PlayerId,
///     ) -> Option<PlacementIntent> {
///         let tile = state.player(player).hand().first()?;
///         let (pos, _) = state.board.tiles().find(|(_, t)| t.is_none())?;
///         Some(PlacementIntent::new(pos.row as i64, pos.col as i64, tile.primary_resource()))
///     }
///
///     fn request_monument_choice(&mut self, _: &GameState, _: PlayerId) -> String {
///         "temple".into()
///     }
/// }
///
/// let state = GameBuilder::new().build(7).unwrap();
/// let mut engine = TurnEngine::new(state);
/// let scores = engine.run(&mut FirstFit, &mut ());
/// assert!(engine.is_over());
/// assert_eq!(scores.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TurnEngine {
    state: GameState,
    phase: TurnPhase,
    /// Consecutive turns that ended without a successful placement.
    idle_turns: usize,
    last_placement: Option<PlacementOutcome>,
    final_scores: Option<Vec<(String, i64)>>,
}

impl TurnEngine {
    /// Start at the current player's first placement.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        let player = state.current_player();
        Self {
            state,
            phase: TurnPhase::AwaitingPlacement { player, placed: 0 },
            idle_turns: 0,
            last_placement: None,
            final_scores: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver(_))
    }

    /// Outcome of the most recent successful placement.
    #[must_use]
    pub fn last_placement(&self) -> Option<&PlacementOutcome> {
        self.last_placement.as_ref()
    }

    /// Final scoreboard, once the game is over.
    #[must_use]
    pub fn final_scores(&self) -> Option<&[(String, i64)]> {
        self.final_scores.as_deref()
    }

    /// Advance the state machine by one transition and return the new phase.
    ///
    /// A rejected placement is a transition back into the same phase.
    pub fn step(
        &mut self,
        input: &mut dyn PlayerInput,
        observer: &mut dyn GameObserver,
    ) -> TurnPhase {
        match self.phase {
            TurnPhase::GameOver(_) => {}
            TurnPhase::AwaitingPlacement { player, placed } => {
                self.await_placement(player, placed, input, observer);
            }
            TurnPhase::Drawing { player, placed } => {
                let drawn = self.state.replenish(player);
                debug!(%player, drawn, pile = self.state.pile.len(), "hand replenished");
                self.phase = TurnPhase::TurnComplete { player, placed };
            }
            TurnPhase::TurnComplete { player, placed } => {
                self.complete_turn(player, placed, observer);
            }
        }
        self.phase
    }

    /// Run the current player's turn to completion.
    pub fn play_turn(
        &mut self,
        input: &mut dyn PlayerInput,
        observer: &mut dyn GameObserver,
    ) -> TurnPhase {
        let turn = self.state.turn_number;
        while !self.is_over() && self.state.turn_number == turn {
            self.step(input, observer);
        }
        self.phase
    }

    /// Play until the game ends and return the final scoreboard.
    pub fn run(
        &mut self,
        input: &mut dyn PlayerInput,
        observer: &mut dyn GameObserver,
    ) -> Vec<(String, i64)> {
        while !self.is_over() {
            self.play_turn(input, observer);
        }
        self.final_scores.clone().unwrap_or_default()
    }

    fn await_placement(
        &mut self,
        player: PlayerId,
        placed: u8,
        input: &mut dyn PlayerInput,
        observer: &mut dyn GameObserver,
    ) {
        if self.state.player(player).hand_size() == 0 {
            debug!(%player, "empty hand, skipping to draw");
            self.phase = TurnPhase::Drawing { player, placed };
            return;
        }

        let Some(intent) = input.request_placement(&self.state, player) else {
            debug!(%player, placed, "remaining placements forfeited");
            self.phase = TurnPhase::Drawing { player, placed };
            return;
        };

        match self.place(player, intent, input, observer) {
            Ok(outcome) => {
                self.last_placement = Some(outcome);
                let placed = placed + 1;
                self.phase = if placed >= self.state.rules().placements_per_turn {
                    TurnPhase::Drawing { player, placed }
                } else {
                    TurnPhase::AwaitingPlacement { player, placed }
                };
            }
            Err(err) => {
                warn!(%player, "invalid placement: {err}");
                observer.on_invalid_placement(player, &err);
            }
        }
    }

    /// Place, then resolve conflicts, then check for a monument.
    fn place(
        &mut self,
        player: PlayerId,
        intent: PlacementIntent,
        input: &mut dyn PlayerInput,
        observer: &mut dyn GameObserver,
    ) -> Result<PlacementOutcome, PlacementError> {
        let position = self.state.board.validate(intent.row, intent.col)?;
        let tile = self
            .state
            .player_mut(player)
            .take_from_hand(intent.resource)
            .ok_or(PlacementError::NotInHand(intent.resource))?;
        let id = self.state.board.place(intent.row, intent.col, tile)?;

        debug!(%player, tile = %id, %position, resource = %intent.resource, "tile placed");
        observer.on_tile_placed(player, id, position);

        let conflicts = resolve_conflicts(&self.state.board, id, player);
        for conflict in &conflicts {
            observer.on_conflict_resolved(conflict.winner, conflict.loser);
        }

        let monument = if forms_monument(&self.state.board, id) {
            let choice = input.request_monument_choice(&self.state, player);
            match raise_monument(&mut self.state.board, id, &choice) {
                Ok(monument) => {
                    let bonus = self.state.rules().monument_bonus;
                    self.state.player_mut(player).add_to_score(bonus);
                    observer.on_monument_created(player, monument.kingdom, monument.resource);
                    MonumentOutcome::Raised(monument)
                }
                Err(err) => {
                    observer.on_monument_abandoned(player, &choice);
                    MonumentOutcome::Abandoned(err)
                }
            }
        } else {
            MonumentOutcome::NotFormed
        };

        Ok(PlacementOutcome {
            tile: id,
            position,
            conflicts,
            monument,
        })
    }

    fn complete_turn(&mut self, player: PlayerId, placed: u8, observer: &mut dyn GameObserver) {
        observer.on_turn_scores(&self.state.scoreboard());

        if placed == 0 {
            self.idle_turns += 1;
        } else {
            self.idle_turns = 0;
        }

        let next = self.state.advance_turn();
        info!(%player, placed, %next, turn = self.state.turn_number, "turn complete");

        let reason = game_over_reason(&self.state).or_else(|| {
            let idle_round = self.idle_turns >= self.state.player_count();
            (idle_round && !self.anyone_can_place()).then_some(GameOverReason::Stalled)
        });

        match reason {
            Some(reason) => self.finish(reason, observer),
            None => self.phase = TurnPhase::AwaitingPlacement { player: next, placed: 0 },
        }
    }

    /// A tile can still reach the board: a cell is free and some tile is
    /// left in a hand or the pile.
    fn anyone_can_place(&self) -> bool {
        let state = &self.state;
        !state.board.is_full()
            && (!state.pile.is_empty() || state.players.values().any(|p| p.hand_size() > 0))
    }

    fn finish(&mut self, reason: GameOverReason, observer: &mut dyn GameObserver) {
        let scores = apply_final_scoring(&mut self.state);
        info!(?reason, ?scores, "game over");
        observer.on_game_over(reason, &scores);
        self.final_scores = Some(scores);
        self.phase = TurnPhase::GameOver(reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KingdomId, Player, PlayerMap, RulesConfig};
    use crate::events::{EventLog, GameEvent};
    use crate::tiles::{DrawPile, Kingdoms, Tile};
    use std::collections::VecDeque;

    const RED: KingdomId = KingdomId::new(0);
    const BLUE: KingdomId = KingdomId::new(1);
    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    /// Replays a fixed list of answers, then forfeits.
    #[derive(Default)]
    struct Script {
        placements: VecDeque<PlacementIntent>,
        choices: VecDeque<String>,
        monument_prompts: usize,
    }

    impl Script {
        fn new(placements: &[(i64, i64, Resource)]) -> Self {
            Self {
                placements: placements
                    .iter()
                    .map(|&(r, c, res)| PlacementIntent::new(r, c, res))
                    .collect(),
                ..Self::default()
            }
        }

        fn with_choice(mut self, choice: &str) -> Self {
            self.choices.push_back(choice.to_string());
            self
        }
    }

    impl PlayerInput for Script {
        fn request_placement(&mut self, _: &GameState, _: PlayerId) -> Option<PlacementIntent> {
            self.placements.pop_front()
        }

        fn request_monument_choice(&mut self, _: &GameState, _: PlayerId) -> String {
            self.monument_prompts += 1;
            self.choices.pop_front().unwrap_or_default()
        }
    }

    fn engine_with_hands(hands: [Vec<Tile>; 2], pile: Vec<Tile>) -> TurnEngine {
        let kingdoms = Kingdoms::from_names(["Red", "Blue"]).unwrap();
        let mut players = vec![Player::new("Player 1", RED), Player::new("Player 2", BLUE)];
        for (player, hand) in players.iter_mut().zip(hands) {
            for tile in hand {
                player.add_to_hand(tile);
            }
        }
        let state = GameState::new(
            RulesConfig::default().with_board_size(3, 3),
            kingdoms,
            PlayerMap::from_vec(players),
            DrawPile::new(pile),
        )
        .unwrap();
        TurnEngine::new(state)
    }

    fn tiles(resource: Resource, kingdom: KingdomId, n: usize) -> Vec<Tile> {
        (0..n).map(|_| Tile::new(resource, kingdom)).collect()
    }

    #[test]
    fn test_two_placements_then_draw() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            tiles(Resource::Market, RED, 10),
        );
        let mut input = Script::new(&[(0, 0, Resource::Farm), (2, 2, Resource::Farm)]);
        let mut log = EventLog::new();

        assert_eq!(
            engine.step(&mut input, &mut log),
            TurnPhase::AwaitingPlacement { player: P0, placed: 1 }
        );
        assert_eq!(
            engine.step(&mut input, &mut log),
            TurnPhase::Drawing { player: P0, placed: 2 }
        );
        assert_eq!(engine.state().player(P0).hand_size(), 4);

        assert_eq!(
            engine.step(&mut input, &mut log),
            TurnPhase::TurnComplete { player: P0, placed: 2 }
        );
        assert_eq!(engine.state().player(P0).hand_size(), 6);
        assert_eq!(engine.state().pile.len(), 8);

        assert_eq!(
            engine.step(&mut input, &mut log),
            TurnPhase::AwaitingPlacement { player: P1, placed: 0 }
        );
    }

    #[test]
    fn test_invalid_placement_does_not_advance() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            vec![],
        );
        let mut input = Script::new(&[
            (0, 0, Resource::Farm),
            (0, 0, Resource::Farm),
            (3, 0, Resource::Farm),
            (1, 1, Resource::Temple),
        ]);
        let mut log = EventLog::new();

        engine.step(&mut input, &mut log);
        for _ in 0..3 {
            assert_eq!(
                engine.step(&mut input, &mut log),
                TurnPhase::AwaitingPlacement { player: P0, placed: 1 }
            );
        }

        let rejected: Vec<_> = log
            .filter(|e| matches!(e, GameEvent::InvalidPlacement { .. }))
            .cloned()
            .collect();
        assert_eq!(
            rejected,
            vec![
                GameEvent::InvalidPlacement {
                    player: P0,
                    reason: PlacementError::CellOccupied { row: 0, col: 0 },
                },
                GameEvent::InvalidPlacement {
                    player: P0,
                    reason: PlacementError::OutOfBounds { row: 3, col: 0 },
                },
                GameEvent::InvalidPlacement {
                    player: P0,
                    reason: PlacementError::NotInHand(Resource::Temple),
                },
            ]
        );
        assert_eq!(engine.state().player(P0).hand_size(), 5);
        assert_eq!(engine.state().board.occupied_count(), 1);
    }

    #[test]
    fn test_monument_awards_bonus_once() {
        let mut hand = tiles(Resource::Farm, RED, 4);
        hand.extend(tiles(Resource::Market, RED, 2));
        let mut engine = engine_with_hands([hand, tiles(Resource::Farm, BLUE, 6)], vec![]);

        // Build three corners directly, then close the block through the engine
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            engine.state.board.place(r, c, Tile::new(Resource::Temple, RED)).unwrap();
        }

        let mut input = Script::new(&[(1, 1, Resource::Market)]).with_choice("Settlement");
        let mut log = EventLog::new();
        engine.step(&mut input, &mut log);

        assert_eq!(input.monument_prompts, 1);
        assert_eq!(engine.state().player(P0).score, 10);
        let marker = engine.state().board.tile_at(Position::new(1, 1)).unwrap();
        assert_eq!(marker.resources(), &[Resource::Market, Resource::Settlement]);
        assert_eq!(log.monument_count(), 1);

        let outcome = engine.last_placement().unwrap();
        assert_eq!(outcome.position, Position::new(1, 1));
        assert_eq!(
            outcome.monument,
            MonumentOutcome::Raised(Monument {
                marker: outcome.tile,
                kingdom: RED,
                resource: Resource::Settlement,
            })
        );
    }

    #[test]
    fn test_invalid_monument_choice_changes_nothing() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Market, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            vec![],
        );
        for (r, c) in [(0, 0), (0, 1), (1, 0)] {
            engine.state.board.place(r, c, Tile::new(Resource::Farm, RED)).unwrap();
        }

        let mut input = Script::new(&[(1, 1, Resource::Market)]).with_choice("treasure");
        let mut log = EventLog::new();
        let phase = engine.step(&mut input, &mut log);

        assert_eq!(phase, TurnPhase::AwaitingPlacement { player: P0, placed: 1 });
        assert_eq!(engine.state().player(P0).score, 0);
        for (_, tile) in engine.state().board.placed() {
            assert_eq!(tile.resources().len(), 1);
        }
        assert_eq!(log.monument_count(), 0);
        assert!(log
            .events()
            .contains(&GameEvent::MonumentAbandoned { player: P0, choice: "treasure".into() }));
        assert_eq!(
            engine.last_placement().map(|o| &o.monument),
            Some(&MonumentOutcome::Abandoned(MonumentError::InvalidChoice("treasure".into())))
        );
    }

    #[test]
    fn test_conflict_reported_without_mutation() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            vec![],
        );
        let temple = engine.state.board.place(0, 1, Tile::new(Resource::Temple, RED)).unwrap();

        let mut input = Script::new(&[(1, 1, Resource::Farm)]);
        let mut log = EventLog::new();
        engine.step(&mut input, &mut log);

        assert!(log
            .events()
            .contains(&GameEvent::ConflictResolved { winner: P0, loser: temple }));
        assert_eq!(engine.state().player(P0).score, 0);
        assert!(engine.state().board.tile(temple).is_some());

        let outcome = engine.last_placement().unwrap();
        assert_eq!(outcome.conflicts, vec![Conflict { winner: P0, loser: temple }]);
        assert_eq!(outcome.monument, MonumentOutcome::NotFormed);
    }

    #[test]
    fn test_rejected_placement_keeps_last_outcome() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            tiles(Resource::Farm, RED, 10),
        );
        assert!(engine.last_placement().is_none());

        let mut input = Script::new(&[(0, 0, Resource::Farm), (0, 0, Resource::Farm)]);
        engine.step(&mut input, &mut ());
        engine.step(&mut input, &mut ());

        let outcome = engine.last_placement().unwrap();
        assert_eq!(outcome.position, Position::new(0, 0));
        assert!(outcome.conflicts.is_empty());
    }

    #[test]
    fn test_forfeit_skips_to_draw() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            vec![],
        );
        let mut input = Script::default();
        let mut log = EventLog::new();

        assert_eq!(
            engine.step(&mut input, &mut log),
            TurnPhase::Drawing { player: P0, placed: 0 }
        );
    }

    #[test]
    fn test_treasure_ends_game_after_turn() {
        let mut hand = tiles(Resource::Treasure, RED, 1);
        hand.extend(tiles(Resource::Farm, RED, 5));
        let mut engine = engine_with_hands(
            [hand, tiles(Resource::Farm, BLUE, 6)],
            tiles(Resource::Farm, RED, 20),
        );

        let mut input = Script::new(&[(0, 0, Resource::Treasure), (2, 2, Resource::Farm)]);
        let mut log = EventLog::new();
        let phase = engine.play_turn(&mut input, &mut log);

        assert_eq!(phase, TurnPhase::GameOver(GameOverReason::TreasureScarcity { remaining: 1 }));
        // Red 2 tiles, Blue 0 tiles: no penalty
        assert_eq!(
            engine.final_scores().unwrap(),
            &[("Player 1".to_string(), 0), ("Player 2".to_string(), 0)]
        );
        assert!(matches!(log.events().last(), Some(GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_stalled_round_ends_game() {
        let mut engine = engine_with_hands([vec![], vec![]], vec![]);
        let mut input = Script::default();

        let scores = engine.run(&mut input, &mut ());
        assert_eq!(engine.phase(), TurnPhase::GameOver(GameOverReason::Stalled));
        assert_eq!(engine.state().turn_number, 3);
        assert_eq!(scores.len(), 2);
    }

    #[test]
    fn test_forfeit_round_does_not_stall_while_tiles_can_be_placed() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            tiles(Resource::Farm, RED, 10),
        );
        let mut input = Script::default();

        for _ in 0..4 {
            engine.play_turn(&mut input, &mut ());
        }

        assert!(!engine.is_over());
        assert_eq!(engine.phase(), TurnPhase::AwaitingPlacement { player: P0, placed: 0 });
        assert_eq!(engine.state().turn_number, 5);
    }

    #[test]
    fn test_full_board_stalls_after_idle_round() {
        let mut engine = engine_with_hands(
            [tiles(Resource::Farm, RED, 6), tiles(Resource::Farm, BLUE, 6)],
            tiles(Resource::Farm, RED, 10),
        );
        for r in 0..3 {
            for c in 0..3 {
                engine.state.board.place(r, c, Tile::new(Resource::Market, BLUE)).unwrap();
            }
        }

        assert_eq!(
            engine.play_turn(&mut Script::default(), &mut ()),
            TurnPhase::AwaitingPlacement { player: P1, placed: 0 }
        );
        assert_eq!(
            engine.play_turn(&mut Script::default(), &mut ()),
            TurnPhase::GameOver(GameOverReason::Stalled)
        );
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut engine = engine_with_hands([vec![], vec![]], vec![]);
        engine.run(&mut Script::default(), &mut ());
        let phase = engine.phase();
        let turn = engine.state().turn_number;

        assert_eq!(engine.step(&mut Script::default(), &mut ()), phase);
        assert_eq!(engine.state().turn_number, turn);
    }
}
