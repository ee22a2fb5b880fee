//! Errors raised while configuring or running a game.
//!
//! A game has no recoverable failures once it starts: every error here
//! aborts the run.

use thiserror::Error;

/// Errors returned by game setup and play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The configuration names no players.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// More seats than cards, so some seat would never receive one.
    #[error("{count} players requested but the deck only has {max} cards")]
    TooManyPlayers { count: usize, max: usize },

    /// A player was asked to play while holding no cards.
    #[error("invariant violated: {player} was asked to play with an empty hand")]
    EmptyHand { player: String },

    /// A player arrived at the table already holding cards.
    #[error("{player} already holds cards before the deal")]
    HandNotEmpty { player: String },

    /// A strategy picked a card outside the hand.
    #[error("invariant violated: {player} chose card {index} from a hand of {hand_size}")]
    InvalidChoice {
        player: String,
        index: usize,
        hand_size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::EmptyHand {
            player: "Siri".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invariant violated: Siri was asked to play with an empty hand"
        );

        let err = GameError::HandNotEmpty {
            player: "Mati".to_string(),
        };
        assert_eq!(err.to_string(), "Mati already holds cards before the deal");

        let err = GameError::TooManyPlayers { count: 60, max: 52 };
        assert_eq!(err.to_string(), "60 players requested but the deck only has 52 cards");
    }
}
