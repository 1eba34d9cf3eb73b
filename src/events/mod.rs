//! Observable game events.
//!
//! The rule engine is pure with respect to I/O: it reports placements,
//! conflicts, monuments and scores to a [`GameObserver`] and never prints.

mod event;

pub use event::{EventLog, GameEvent, GameObserver};
