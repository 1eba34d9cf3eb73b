//! Kingdom registry.
//!
//! Kingdoms are registered once while the game is set up. After that the set
//! is frozen: tiles and players hold a [`KingdomId`] and look names up here.

use serde::{Deserialize, Serialize};

use crate::core::{KingdomId, SetupError};

/// A named faction that owns tiles and one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kingdom {
    pub id: KingdomId,
    pub name: String,
}

/// Fixed set of kingdoms for one game.
///
/// ## Example
///
/// ```
/// use rust_tne::tiles::Kingdoms;
///
/// let kingdoms = Kingdoms::from_names(["Red", "Blue"]).unwrap();
/// let red = kingdoms.find("red").unwrap();
/// assert_eq!(kingdoms.name(red), Some("Red"));
/// assert_eq!(kingdoms.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kingdoms {
    kingdoms: Vec<Kingdom>,
}

impl Kingdoms {
    /// Maximum number of kingdoms a game can register.
    pub const MAX: usize = u8::MAX as usize;

    /// Register kingdoms in order. IDs follow registration order.
    pub fn from_names<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
    ) -> Result<Self, SetupError> {
        let mut kingdoms = Self::default();
        for name in names {
            kingdoms.register(name.into())?;
        }
        Ok(kingdoms)
    }

    fn register(&mut self, name: String) -> Result<KingdomId, SetupError> {
        if self.find(&name).is_some() {
            return Err(SetupError::DuplicateKingdom(name));
        }
        if self.kingdoms.len() >= Self::MAX {
            return Err(SetupError::TooManyKingdoms { max: Self::MAX });
        }
        let id = KingdomId::new(self.kingdoms.len() as u8);
        self.kingdoms.push(Kingdom { id, name });
        Ok(id)
    }

    /// Look up a kingdom by name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<KingdomId> {
        self.kingdoms
            .iter()
            .find(|k| k.name.eq_ignore_ascii_case(name))
            .map(|k| k.id)
    }

    #[must_use]
    pub fn get(&self, id: KingdomId) -> Option<&Kingdom> {
        self.kingdoms.get(id.index())
    }

    #[must_use]
    pub fn name(&self, id: KingdomId) -> Option<&str> {
        self.get(id).map(|k| k.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: KingdomId) -> bool {
        id.index() < self.kingdoms.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kingdoms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kingdoms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Kingdom> {
        self.kingdoms.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = KingdomId> + '_ {
        self.kingdoms.iter().map(|k| k.id)
    }
}
