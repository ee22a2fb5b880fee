//! Trick-taking game over a standard 52-card deck.
//!
//! - The whole deck is dealt round-robin; earlier seats get the extra cards
//!   when the player count does not divide 52
//! - Each trick every seat plays once, in seat order; the highest card wins
//! - Play ends when every hand is empty
//!
//! Supports 1-52 players.

mod events;
mod game;
mod player;

pub use events::{GameEvent, GameSummary, Play, TrickResult};
pub use game::{Phase, TrickGame};
pub use player::{Hand, MinimalWinning, PlayStrategy, Player};
