//! End-of-game predicate and final scoring.
//!
//! The game ends when one or two treasures sit on the board, or when the
//! draw pile is empty and the player about to move already holds a full
//! hand. The second condition approximates "unable to act": it looks at hand
//! and pile only, not at whether a legal placement exists.
//!
//! Final scoring subtracts the tile count of the smallest kingdom from every
//! player's score.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::core::{GameState, KingdomId};
use crate::tiles::Kingdoms;

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// One or two treasures remain on the board.
    TreasureScarcity { remaining: usize },
    /// The pile is empty and the next player's hand is full.
    SupplyExhausted,
    /// A full round passed without a placement and no tile can reach the
    /// board any more: it is full, or every hand and the pile are empty.
    Stalled,
}

/// Evaluate the end-of-game predicate.
///
/// `state.current_player()` must already be the next player to move.
#[must_use]
pub fn game_over_reason(state: &GameState) -> Option<GameOverReason> {
    let remaining = state.board.treasure_count();
    if (1..=2).contains(&remaining) {
        return Some(GameOverReason::TreasureScarcity { remaining });
    }

    let next = state.player(state.current_player());
    if state.pile.is_empty() && next.hand_is_full(state.rules().hand_capacity) {
        return Some(GameOverReason::SupplyExhausted);
    }

    None
}

#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    game_over_reason(state).is_some()
}

/// Occupied cells per kingdom. Every registered kingdom has an entry.
#[must_use]
pub fn kingdom_tile_counts(board: &Board, kingdoms: &Kingdoms) -> FxHashMap<KingdomId, usize> {
    let mut counts: FxHashMap<KingdomId, usize> = kingdoms.ids().map(|k| (k, 0)).collect();
    for (_, tile) in board.placed() {
        *counts.entry(tile.kingdom()).or_default() += 1;
    }
    counts
}

/// Penalty every player pays at the end: the smallest kingdom's tile count.
///
/// With the two-kingdom setup this is `min(count(Red), count(Blue))`.
#[must_use]
pub fn end_game_penalty(board: &Board, kingdoms: &Kingdoms) -> i64 {
    kingdom_tile_counts(board, kingdoms)
        .values()
        .copied()
        .min()
        .map_or(0, |n| n as i64)
}

/// Apply the end-game penalty to every player and return the final scoreboard.
pub fn apply_final_scoring(state: &mut GameState) -> Vec<(String, i64)> {
    let penalty = end_game_penalty(&state.board, state.kingdoms());
    for (_, player) in state.players.iter_mut() {
        player.add_to_score(-penalty);
    }

    info!(penalty, "final scores applied");
    state.scoreboard()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, PlayerId, PlayerMap, RulesConfig};
    use crate::tiles::{DrawPile, Resource, Tile};

    const RED: KingdomId = KingdomId::new(0);
    const BLUE: KingdomId = KingdomId::new(1);

    fn state(rows: usize, cols: usize, pile: usize) -> GameState {
        let kingdoms = Kingdoms::from_names(["Red", "Blue"]).unwrap();
        let players =
            PlayerMap::from_vec(vec![Player::new("Player 1", RED), Player::new("Player 2", BLUE)]);
        let pile = DrawPile::new((0..pile).map(|_| Tile::new(Resource::Farm, RED)));
        let rules = RulesConfig::default().with_board_size(rows, cols);
        GameState::new(rules, kingdoms, players, pile).unwrap()
    }

    #[test]
    fn test_single_treasure_ends_game() {
        let mut state = state(2, 2, 10);
        state.board.place(0, 0, Tile::new(Resource::Treasure, RED)).unwrap();

        assert_eq!(
            game_over_reason(&state),
            Some(GameOverReason::TreasureScarcity { remaining: 1 })
        );
    }

    #[test]
    fn test_treasure_thresholds() {
        let mut state = state(2, 2, 10);
        assert!(!is_game_over(&state));

        state.board.place(0, 0, Tile::new(Resource::Treasure, RED)).unwrap();
        state.board.place(0, 1, Tile::new(Resource::Treasure, RED)).unwrap();
        assert!(is_game_over(&state));

        state.board.place(1, 0, Tile::new(Resource::Treasure, BLUE)).unwrap();
        assert!(!is_game_over(&state));
    }

    #[test]
    fn test_empty_pile_with_full_hand() {
        let mut state = state(3, 3, 6);
        state.replenish(PlayerId::new(0));
        assert!(state.pile.is_empty());

        assert_eq!(game_over_reason(&state), Some(GameOverReason::SupplyExhausted));
    }

    #[test]
    fn test_empty_pile_with_short_hand_continues() {
        let mut state = state(3, 3, 3);
        state.replenish(PlayerId::new(0));
        assert!(state.pile.is_empty());
        assert!(!is_game_over(&state));
    }

    #[test]
    fn test_kingdom_counts_include_empty_kingdoms() {
        let mut state = state(3, 3, 0);
        state.board.place(0, 0, Tile::new(Resource::Farm, RED)).unwrap();

        let counts = kingdom_tile_counts(&state.board, state.kingdoms());
        assert_eq!(counts[&RED], 1);
        assert_eq!(counts[&BLUE], 0);
        assert_eq!(end_game_penalty(&state.board, state.kingdoms()), 0);
    }

    #[test]
    fn test_final_penalty_is_smaller_kingdom() {
        let mut state = state(3, 3, 0);
        let cells = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)];
        for (i, (r, c)) in cells.into_iter().enumerate() {
            let kingdom = if i < 5 { RED } else { BLUE };
            state.board.place(r, c, Tile::new(Resource::Market, kingdom)).unwrap();
        }
        state.player_mut(PlayerId::new(0)).add_to_score(10);

        let scores = apply_final_scoring(&mut state);
        assert_eq!(
            scores,
            vec![("Player 1".to_string(), 7), ("Player 2".to_string(), -3)]
        );
    }
}
