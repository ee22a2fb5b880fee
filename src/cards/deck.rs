//! The 52-card deck used for dealing.

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// An owned deck of remaining cards. Draws come off the end.
///
/// ```
/// use trick_sim::cards::Deck;
/// use trick_sim::core::GameRng;
///
/// let mut deck = Deck::new();
/// deck.shuffle(&mut GameRng::new(1));
/// assert_eq!(deck.size(), 52);
/// assert!(deck.draw().is_some());
/// assert_eq!(deck.size(), 51);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck, suit-major and rank-minor.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the last card, or `None` once empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Number of remaining cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards in order; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
