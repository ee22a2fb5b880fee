//! Game configuration.
//!
//! A game is configured by the ordered list of player names (which fixes
//! the turn order) and the seed driving the shuffle and random plays.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use crate::cards::DECK_SIZE;

/// Names used when no players are supplied.
pub const DEFAULT_PLAYERS: [&str; 4] = ["Fefo", "Siri", "Mati", "Nico"];

/// Configuration for a single game.
///
/// ```
/// use trick_sim::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_players(["Ann", "Bob", "Cid"])
///     .with_seed(7);
/// assert_eq!(config.player_count(), 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in turn order.
    pub player_names: Vec<String>,

    /// Seed for the game RNG.
    pub seed: u64,
}

impl GameConfig {
    /// Default four players, seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the player list.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check that every seat can be dealt at least one card.
    pub fn validate(&self) -> Result<(), GameError> {
        match self.player_count() {
            0 => Err(GameError::NoPlayers),
            count if count > DECK_SIZE => Err(GameError::TooManyPlayers {
                count,
                max: DECK_SIZE,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: DEFAULT_PLAYERS.iter().map(|s| s.to_string()).collect(),
            seed: 0,
        }
    }
}
