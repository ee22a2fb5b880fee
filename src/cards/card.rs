//! Playing cards and their total order.
//!
//! Suits rank ♠ < ♣ < ♥ < ♦ and ranks 2 < 3 < … < K < A. Cards compare
//! suit first, then rank, so a higher suit beats any card of a lower suit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card suit, declared in ascending precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Clubs,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits, lowest first.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Hearts, Suit::Diamonds];

    /// Unicode symbol used in the transcript.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
        }
    }
}

/// Card rank, declared in ascending precedence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, Two first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Short label: `2`-`10`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// A single playing card.
///
/// Field order matters: the derived `Ord` compares `suit` before `rank`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Whether this card beats the best card of the trick so far.
    ///
    /// Every card beats `None` (nothing led yet). Equal cards do not beat
    /// each other.
    ///
    /// ```
    /// use trick_sim::cards::{Card, Rank, Suit};
    ///
    /// let two_of_hearts = Card::new(Suit::Hearts, Rank::Two);
    /// let ace_of_clubs = Card::new(Suit::Clubs, Rank::Ace);
    /// assert!(two_of_hearts.beats(Some(&ace_of_clubs)));
    /// assert!(!ace_of_clubs.beats(Some(&two_of_hearts)));
    /// assert!(ace_of_clubs.beats(None));
    /// ```
    #[must_use]
    pub fn beats(&self, other: Option<&Card>) -> bool {
        other.map_or(true, |other| self > other)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
