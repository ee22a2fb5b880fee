//! Players, their hands, and card-selection strategies.

use smallvec::SmallVec;
use std::fmt;
use tracing::debug;

use crate::cards::Card;
use crate::core::{GameError, GameRng};

/// Cards held by one player. A four-player deal fits inline.
pub type Hand = SmallVec<[Card; 13]>;

/// Picks which card of a hand to play.
///
/// Implementations return an index into `hand`, which is never empty when
/// `choose` is called. `leading` is the best card of the current trick, or
/// `None` when this play leads.
pub trait PlayStrategy: fmt::Debug {
    fn choose(&self, hand: &[Card], leading: Option<&Card>, rng: &mut GameRng) -> usize;
}

/// Play the first card in hand order that beats the leading card; with a
/// sorted hand that is the cheapest winner. If nothing wins, throw away a
/// uniformly random card.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalWinning;

impl PlayStrategy for MinimalWinning {
    fn choose(&self, hand: &[Card], leading: Option<&Card>, rng: &mut GameRng) -> usize {
        match hand.iter().position(|card| card.beats(leading)) {
            Some(index) => index,
            None => {
                let index = rng.gen_range_usize(0..hand.len());
                debug!(card = %hand[index], "no winning card, discarding at random");
                index
            }
        }
    }
}

/// A seated player.
#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Hand,
    strategy: Box<dyn PlayStrategy>,
}

impl Player {
    /// A player using [`MinimalWinning`].
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_strategy(name, MinimalWinning)
    }

    pub fn with_strategy(name: impl Into<String>, strategy: impl PlayStrategy + 'static) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            strategy: Box::new(strategy),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards currently held, in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Take a dealt card.
    pub fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Order the hand from lowest to highest card.
    pub fn sort_hand(&mut self) {
        self.hand.sort();
    }

    /// Remove and return the card the strategy picks against `leading`.
    ///
    /// Errors if the hand is empty or the strategy picks an index outside it.
    pub fn play_card(
        &mut self,
        leading: Option<&Card>,
        rng: &mut GameRng,
    ) -> Result<Card, GameError> {
        if self.hand.is_empty() {
            return Err(GameError::EmptyHand {
                player: self.name.clone(),
            });
        }

        let index = self.strategy.choose(&self.hand, leading, rng);
        if index >= self.hand.len() {
            return Err(GameError::InvalidChoice {
                player: self.name.clone(),
                index,
                hand_size: self.hand.len(),
            });
        }

        Ok(self.hand.remove(index))
    }
}
