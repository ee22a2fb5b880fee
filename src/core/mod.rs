//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are independent of the card rules; the game in `games::trick`
//! builds on them.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_PLAYERS};
pub use error::GameError;
