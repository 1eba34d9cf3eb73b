//! Setup collaborator: turns a [`GameConfig`](crate::core::GameConfig) and a
//! seed into an initial [`GameState`](crate::core::GameState).
//!
//! Shuffling lives here so the rule engine stays deterministic.

mod builder;

pub use builder::GameBuilder;
