//! The game aggregate.
//!
//! `GameState` owns everything that changes during a game:
//! - the board (and through it every placed tile)
//! - the players, their scores and hands
//! - the frozen kingdom registry
//! - the draw pile
//! - whose turn it is
//!
//! Only the turn engine mutates it, one player's turn at a time.

use serde::{Deserialize, Serialize};

use super::config::RulesConfig;
use super::error::SetupError;
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::Board;
use crate::tiles::{DrawPile, Kingdoms, Tile};

/// Complete game state.
///
/// Cloning is cheap for the draw pile (persistent vector); the board and
/// hands are small fixed-size collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    rules: RulesConfig,
    kingdoms: Kingdoms,

    pub board: Board,
    pub players: PlayerMap<Player>,
    pub pile: DrawPile,

    /// Player whose turn it is (or who moves next between turns).
    current: PlayerId,

    /// Turn number (starts at 1, one turn per player).
    pub turn_number: u32,
}

impl GameState {
    /// Create a state with an empty board sized by `rules`.
    ///
    /// Every player, hand tile and pile tile must belong to a kingdom in
    /// `kingdoms`. Player 0 moves first.
    pub fn new(
        rules: RulesConfig,
        kingdoms: Kingdoms,
        players: PlayerMap<Player>,
        pile: DrawPile,
    ) -> Result<Self, SetupError> {
        if rules.rows == 0 || rules.cols == 0 {
            return Err(SetupError::EmptyBoard);
        }

        let hands = players.values().flat_map(|p| p.hand().iter().map(Tile::kingdom));
        let stray = players
            .values()
            .map(|p| p.kingdom)
            .chain(hands)
            .chain(pile.iter().map(Tile::kingdom))
            .find(|&k| !kingdoms.contains(k));
        if let Some(kingdom) = stray {
            return Err(SetupError::UnknownKingdom(kingdom.to_string()));
        }

        let board = Board::new(rules.rows, rules.cols);
        Ok(Self {
            rules,
            kingdoms,
            board,
            players,
            pile,
            current: PlayerId::new(0),
            turn_number: 1,
        })
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn kingdoms(&self) -> &Kingdoms {
        &self.kingdoms
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Hand the turn to the next seat and bump the turn number.
    pub fn advance_turn(&mut self) -> PlayerId {
        self.current = self.current.next(self.player_count());
        self.turn_number += 1;
        self.current
    }

    /// Top `player`'s hand up to capacity from the front of the pile.
    ///
    /// Stops early, without error, once the pile runs out. Returns the number
    /// of tiles drawn.
    pub fn replenish(&mut self, player: PlayerId) -> usize {
        let capacity = self.rules.hand_capacity;
        let mut drawn = 0;
        while !self.players[player].hand_is_full(capacity) {
            let Some(tile) = self.pile.draw() else {
                break;
            };
            self.players[player].add_to_hand(tile);
            drawn += 1;
        }
        drawn
    }

    /// Tiles in the pile, in every hand and on the board.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        let in_hands: usize = self.players.values().map(Player::hand_size).sum();
        self.pile.len() + in_hands + self.board.occupied_count()
    }

    /// `(name, score)` for every player in seat order.
    #[must_use]
    pub fn scoreboard(&self) -> Vec<(String, i64)> {
        self.players
            .values()
            .map(|p| (p.name.clone(), p.score))
            .collect()
    }
}
