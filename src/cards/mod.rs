//! Cards and the deck.
//!
//! - `Card`: suit and rank with a total order (suit first)
//! - `Deck`: the 52 cards, shuffled with the game RNG and drawn from the end

mod card;
mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
