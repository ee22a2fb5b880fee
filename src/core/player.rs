//! Seats at the table and per-seat storage.
//!
//! Seat order is turn order: seat 0 leads the first trick and play wraps
//! back to it after the last seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat due to make play number `turn` (0-based) at a table of
    /// `player_count` seats.
    ///
    /// ```
    /// use trick_sim::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_turn(0, 4), PlayerId::new(0));
    /// assert_eq!(PlayerId::for_turn(5, 4), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn for_turn(turn: usize, player_count: usize) -> Self {
        Self((turn % player_count) as u8)
    }

    /// Seats in dealing order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat, indexed by `PlayerId`.
///
/// Holds the seated players during a game and the trick tally in the
/// summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat the values in order; index 0 becomes seat 0.
    ///
    /// Panics on an empty table; callers validate the seat count first.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a table needs at least one seat");
        Self { seats }
    }

    /// Same starting value at every seat, e.g. a zeroed trick tally.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_vec(vec![value; player_count])
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Iterate over (seat, &mut value) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.seats
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}
