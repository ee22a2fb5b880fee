//! Game events and end-of-game summary.
//!
//! Events are recorded in order as the game runs. Their `Display` form is
//! the human-readable transcript.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// One card played by one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
}

/// A completed trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickResult {
    /// 1-based trick number.
    pub number: usize,
    pub winner: PlayerId,
    /// The card that took the trick.
    pub card: Card,
    /// Plays in turn order.
    pub plays: Vec<Play>,
}

/// Something observable that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A player's hand after the deal, sorted.
    HandSorted {
        player: PlayerId,
        name: String,
        cards: Vec<Card>,
    },
    /// A card was played.
    Played {
        player: PlayerId,
        name: String,
        card: Card,
    },
    /// A trick was completed.
    TrickWon {
        trick: usize,
        player: PlayerId,
        name: String,
        card: Card,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::HandSorted { name, cards, .. } => {
                write!(f, "{name} sorted hand: ")?;
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{card}")?;
                }
                Ok(())
            }
            GameEvent::Played { name, card, .. } => write!(f, "{name} plays {card}"),
            GameEvent::TrickWon { name, .. } => write!(f, "{name} wins!"),
        }
    }
}

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub tricks: Vec<TrickResult>,
    /// Tricks taken per seat.
    pub tricks_won: PlayerMap<u32>,
    /// Plays after the last complete trick. Only non-empty when the player
    /// count does not divide the deck.
    pub trailing_plays: Vec<Play>,
}

impl GameSummary {
    /// Total cards played, including trailing plays.
    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.tricks.iter().map(|t| t.plays.len()).sum::<usize>() + self.trailing_plays.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_transcript_lines() {
        let played = GameEvent::Played {
            player: PlayerId::new(1),
            name: "Siri".to_string(),
            card: Card::new(Suit::Diamonds, Rank::Ten),
        };
        assert_eq!(played.to_string(), "Siri plays 10♦");

        let won = GameEvent::TrickWon {
            trick: 1,
            player: PlayerId::new(1),
            name: "Siri".to_string(),
            card: Card::new(Suit::Diamonds, Rank::Ten),
        };
        assert_eq!(won.to_string(), "Siri wins!");

        let sorted = GameEvent::HandSorted {
            player: PlayerId::new(0),
            name: "Fefo".to_string(),
            cards: vec![
                Card::new(Suit::Spades, Rank::Two),
                Card::new(Suit::Hearts, Rank::Jack),
            ],
        };
        assert_eq!(sorted.to_string(), "Fefo sorted hand: 2♠,J♥");
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::Played {
            player: PlayerId::new(2),
            name: "Mati".to_string(),
            card: Card::new(Suit::Clubs, Rank::Ace),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "played");
        assert_eq!(json["name"], "Mati");

        let restored: GameEvent = serde_json::from_value(json).unwrap();
        assert_eq!(event, restored);
    }
}
