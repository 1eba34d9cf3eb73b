//! Game setup.

use tracing::debug;

use crate::core::{
    GameConfig, GameRng, GameState, Player, PlayerMap, RulesConfig, SeatConfig, SetupError,
};
use crate::tiles::{DrawPile, Kingdoms, Tile};

/// Builder for a ready-to-play [`GameState`].
///
/// Registers the seats' kingdoms, creates the players, builds the draw pile
/// and deals opening hands in seat order.
///
/// ```
/// use rust_tne::core::PlayerId;
/// use rust_tne::setup::GameBuilder;
///
/// let state = GameBuilder::new().board_size(4, 4).build(42).unwrap();
///
/// assert_eq!(state.board.rows(), 4);
/// assert_eq!(state.player(PlayerId::new(0)).hand_size(), 6);
/// assert_eq!(state.kingdoms().name(state.player(PlayerId::new(1)).kingdom), Some("Blue"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    draw_pile: Option<Vec<Tile>>,
    skip_deal: bool,
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a complete configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.config.rules = rules;
        self
    }

    #[must_use]
    pub fn board_size(mut self, rows: usize, cols: usize) -> Self {
        self.config.rules = self.config.rules.with_board_size(rows, cols);
        self
    }

    /// Replace the seats. Kingdoms are registered in first-seen order.
    #[must_use]
    pub fn seats(mut self, seats: impl IntoIterator<Item = SeatConfig>) -> Self {
        self.config.seats = seats.into_iter().collect();
        self
    }

    /// Use this exact pile order instead of shuffling the configured bag.
    ///
    /// Kingdom IDs follow registration order: the first seat's kingdom is
    /// `KingdomId(0)`.
    #[must_use]
    pub fn draw_pile(mut self, tiles: impl IntoIterator<Item = Tile>) -> Self {
        self.draw_pile = Some(tiles.into_iter().collect());
        self
    }

    /// Leave hands empty instead of dealing up to capacity.
    #[must_use]
    pub fn without_opening_deal(mut self) -> Self {
        self.skip_deal = true;
        self
    }

    /// Build the initial state. `seed` only affects the bag shuffle.
    pub fn build(self, seed: u64) -> Result<GameState, SetupError> {
        let GameConfig { rules, seats, bag } = self.config;

        if seats.is_empty() {
            return Err(SetupError::NoSeats);
        }
        if seats.len() > 255 {
            return Err(SetupError::TooManySeats { max: 255 });
        }

        let mut names: Vec<&str> = Vec::new();
        for seat in &seats {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(&seat.kingdom)) {
                names.push(&seat.kingdom);
            }
        }
        let kingdoms = Kingdoms::from_names(names)?;

        let players = seats
            .iter()
            .map(|seat| {
                let kingdom = kingdoms
                    .find(&seat.kingdom)
                    .ok_or_else(|| SetupError::UnknownKingdom(seat.kingdom.clone()))?;
                Ok(Player::new(seat.name.clone(), kingdom))
            })
            .collect::<Result<Vec<_>, SetupError>>()?;

        let tiles = match self.draw_pile {
            Some(tiles) => tiles,
            None => {
                let mut tiles: Vec<Tile> = kingdoms
                    .ids()
                    .flat_map(|k| {
                        bag.per_kingdom.iter().flat_map(move |&(resource, count)| {
                            (0..count).map(move |_| Tile::new(resource, k))
                        })
                    })
                    .collect();
                GameRng::new(seed).for_context("bag").shuffle(&mut tiles);
                tiles
            }
        };
        debug!(tiles = tiles.len(), kingdoms = kingdoms.len(), "draw pile ready");

        let players = PlayerMap::from_vec(players);
        let mut state = GameState::new(rules, kingdoms, players, DrawPile::new(tiles))?;
        if !self.skip_deal {
            for player in state.players.player_ids().collect::<Vec<_>>() {
                state.replenish(player);
            }
        }
        Ok(state)
    }
}
