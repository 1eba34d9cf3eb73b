//! Resource tags carried by tiles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::MonumentError;

/// What a tile produces. Immutable tag with no payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Temple,
    Market,
    Farm,
    Settlement,
    Treasure,
}

impl Resource {
    /// Every resource, in declaration order.
    pub const ALL: [Resource; 5] = [
        Resource::Temple,
        Resource::Market,
        Resource::Farm,
        Resource::Settlement,
        Resource::Treasure,
    ];

    /// Resources a monument may be raised as. Treasure is excluded.
    pub const MONUMENT_CHOICES: [Resource; 4] = [
        Resource::Temple,
        Resource::Market,
        Resource::Farm,
        Resource::Settlement,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Temple => "temple",
            Resource::Market => "market",
            Resource::Farm => "farm",
            Resource::Settlement => "settlement",
            Resource::Treasure => "treasure",
        }
    }

    /// Whether this resource may be chosen for a monument.
    #[must_use]
    pub fn is_monument_choice(self) -> bool {
        Self::MONUMENT_CHOICES.contains(&self)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Temple => "Temple",
            Resource::Market => "Market",
            Resource::Farm => "Farm",
            Resource::Settlement => "Settlement",
            Resource::Treasure => "Treasure",
        };
        f.write_str(name)
    }
}

/// Case-insensitive parse of a resource name. Surrounding whitespace is ignored.
impl FromStr for Resource {
    type Err = MonumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Resource::ALL
            .into_iter()
            .find(|r| r.name() == wanted)
            .ok_or_else(|| MonumentError::InvalidChoice(s.to_string()))
    }
}
