//! # trick-sim
//!
//! A trick-taking card game simulator.
//!
//! ## Design Principles
//!
//! 1. **One RNG per game**: The shuffle and every random fallback play draw
//!    from the same seeded `GameRng`, so a seed fixes the whole game.
//!
//! 2. **N-Player**: Any count from 1 to 52 seats. The deck is dealt
//!    round-robin and hands differ in size by at most one.
//!
//! 3. **Fail loudly**: A player asked to play with an empty hand aborts the
//!    game with a `GameError` instead of producing a wrong card.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Card ordering and the deck
//! - `games`: The trick-taking game loop and player strategies

pub mod core;
pub mod cards;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameError, GameRng, GameRngState, PlayerId, PlayerMap};

pub use crate::cards::{Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::games::trick::{
    GameEvent, GameSummary, MinimalWinning, Phase, Play, PlayStrategy, Player, TrickGame,
    TrickResult,
};
