//! The trick-taking game loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::events::{GameEvent, GameSummary, Play, TrickResult};
use super::player::Player;
use crate::cards::{Card, Deck, DECK_SIZE};
use crate::core::{GameConfig, GameError, GameRng, GameRngState, PlayerId, PlayerMap};

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    Playing,
    Finished,
}

/// State of the trick in progress.
#[derive(Clone, Debug, Default)]
struct TrickState {
    /// Current winner and the card that is winning.
    best: Option<(PlayerId, Card)>,
    plays: Vec<Play>,
}

/// A trick-taking game over one shuffled deck.
///
/// Construction deals the whole deck; [`TrickGame::play`] then runs tricks
/// until every hand is empty.
///
/// ```
/// use trick_sim::core::GameConfig;
/// use trick_sim::games::trick::TrickGame;
///
/// let mut game = TrickGame::new(&GameConfig::default().with_seed(42)).unwrap();
/// let summary = game.play().unwrap();
/// assert_eq!(summary.tricks.len(), 13);
/// assert!(game.is_finished());
/// ```
#[derive(Debug)]
pub struct TrickGame {
    players: PlayerMap<Player>,
    rng: GameRng,
    /// Plays made so far. `turn % player_count` is the seat to play next.
    turn: usize,
    phase: Phase,
    trick: TrickState,
    completed: Vec<TrickResult>,
    events: Vec<GameEvent>,
}

impl TrickGame {
    /// Seat the configured players and deal.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let players = config.player_names.iter().map(Player::new).collect();
        Self::with_players(players, config.seed)
    }

    /// Seat the given players in order and deal with a fresh RNG.
    ///
    /// Every player must arrive with an empty hand.
    pub fn with_players(players: Vec<Player>, seed: u64) -> Result<Self, GameError> {
        match players.len() {
            0 => return Err(GameError::NoPlayers),
            count if count > DECK_SIZE => {
                return Err(GameError::TooManyPlayers {
                    count,
                    max: DECK_SIZE,
                })
            }
            _ => {}
        }
        if let Some(player) = players.iter().find(|p| p.has_cards()) {
            return Err(GameError::HandNotEmpty {
                player: player.name().to_string(),
            });
        }

        let mut game = Self {
            players: PlayerMap::from_vec(players),
            rng: GameRng::new(seed),
            turn: 0,
            phase: Phase::Dealing,
            trick: TrickState::default(),
            completed: Vec::new(),
            events: Vec::new(),
        };
        game.deal();
        Ok(game)
    }

    /// Shuffle a fresh deck and deal it round-robin, then sort every hand.
    fn deal(&mut self) {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);

        'deal: loop {
            for seat in PlayerId::all(self.player_count()) {
                match deck.draw() {
                    Some(card) => self.players[seat].receive(card),
                    None => break 'deal,
                }
            }
        }

        for (seat, player) in self.players.iter_mut() {
            player.sort_hand();
            debug!(player = player.name(), cards = player.hand_size(), "dealt");
            self.events.push(GameEvent::HandSorted {
                player: seat,
                name: player.name().to_string(),
                cards: player.hand().to_vec(),
            });
        }

        self.phase = if self.is_finished() {
            Phase::Finished
        } else {
            Phase::Playing
        };
    }

    /// Run tricks until every hand is empty.
    ///
    /// Calling this on a finished game returns the same summary again.
    pub fn play(&mut self) -> Result<GameSummary, GameError> {
        while !self.is_finished() {
            self.play_turn()?;
        }
        Ok(self.summary())
    }

    /// Make the next single play.
    ///
    /// Returns the trick result when this play completed a trick. Does
    /// nothing once the game is finished.
    pub fn play_turn(&mut self) -> Result<Option<TrickResult>, GameError> {
        if self.is_finished() {
            self.phase = Phase::Finished;
            return Ok(None);
        }

        let seat = self.current_player();
        let leading = self.trick.best.map(|(_, card)| card);
        let player = &mut self.players[seat];
        let card = player.play_card(leading.as_ref(), &mut self.rng)?;

        debug!(player = player.name(), %card, turn = self.turn, "play");
        self.events.push(GameEvent::Played {
            player: seat,
            name: player.name().to_string(),
            card,
        });
        self.trick.plays.push(Play { player: seat, card });

        if card.beats(leading.as_ref()) {
            self.trick.best = Some((seat, card));
        }

        self.turn += 1;
        let result = if self.turn % self.player_count() == 0 {
            self.complete_trick()
        } else {
            None
        };

        if self.is_finished() {
            self.phase = Phase::Finished;
            if !self.trick.plays.is_empty() {
                warn!(
                    plays = self.trick.plays.len(),
                    "deck ran out mid-trick, trailing plays left unscored"
                );
            }
            info!(tricks = self.completed.len(), "game finished");
        }

        Ok(result)
    }

    fn complete_trick(&mut self) -> Option<TrickResult> {
        let (winner, card) = self.trick.best.take()?;
        let result = TrickResult {
            number: self.completed.len() + 1,
            winner,
            card,
            plays: std::mem::take(&mut self.trick.plays),
        };

        let name = self.players[winner].name().to_string();
        info!(trick = result.number, winner = %name, %card, "trick won");
        self.events.push(GameEvent::TrickWon {
            trick: result.number,
            player: winner,
            name,
            card,
        });
        self.completed.push(result.clone());
        Some(result)
    }

    fn summary(&self) -> GameSummary {
        let mut tricks_won = PlayerMap::with_value(self.player_count(), 0u32);
        for trick in &self.completed {
            tricks_won[trick.winner] += 1;
        }

        GameSummary {
            seed: self.rng.seed(),
            tricks: self.completed.clone(),
            tricks_won,
            trailing_plays: self.trick.plays.clone(),
        }
    }

    /// True once every hand is empty.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.players.values().all(|p| !p.has_cards())
    }

    /// Seat whose play is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::for_turn(self.turn, self.player_count())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winning seat and card of the trick in progress.
    #[must_use]
    pub fn trick_leader(&self) -> Option<(PlayerId, Card)> {
        self.trick.best
    }

    /// Tricks completed so far.
    #[must_use]
    pub fn tricks(&self) -> &[TrickResult] {
        &self.completed
    }

    /// Events recorded since construction or the last `take_events`.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// RNG checkpoint, for reproducing the rest of a game.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::games::trick::PlayStrategy;

    fn game(names: &[&str], seed: u64) -> TrickGame {
        let config = GameConfig::new().with_players(names.iter().copied()).with_seed(seed);
        TrickGame::new(&config).unwrap()
    }

    #[test]
    fn test_deal_four_players() {
        let game = game(&["Fefo", "Siri", "Mati", "Nico"], 42);

        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.turn(), 0);
        for player in game.players().values() {
            assert_eq!(player.hand_size(), 13);
            assert!(player.hand().windows(2).all(|w| w[1].beats(Some(&w[0]))));
        }

        let sorted = game
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::HandSorted { .. }))
            .count();
        assert_eq!(sorted, 4);
    }

    #[test]
    fn test_deal_uneven_favours_early_seats() {
        let game = game(&["A", "B", "C"], 7);
        let sizes: Vec<_> = game.players().values().map(Player::hand_size).collect();
        assert_eq!(sizes, vec![18, 17, 17]);

        let game = game_with_five();
        let sizes: Vec<_> = game.players().values().map(Player::hand_size).collect();
        assert_eq!(sizes, vec![11, 11, 10, 10, 10]);
    }

    fn game_with_five() -> TrickGame {
        game(&["A", "B", "C", "D", "E"], 3)
    }

    #[test]
    fn test_first_trick_step_by_step() {
        let mut game = game(&["Fefo", "Siri", "Mati", "Nico"], 5);
        let lowest = game.players()[PlayerId::new(0)].hand()[0];

        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.play_turn().unwrap(), None);
        assert_eq!(game.trick_leader(), Some((PlayerId::new(0), lowest)));
        assert_eq!(game.current_player(), PlayerId::new(1));

        assert_eq!(game.play_turn().unwrap(), None);
        assert_eq!(game.play_turn().unwrap(), None);
        let trick = game.play_turn().unwrap().expect("fourth play completes the trick");

        assert_eq!(trick.number, 1);
        assert_eq!(trick.plays.len(), 4);
        assert_eq!(trick.plays[0].card, lowest);
        let best = trick.plays.iter().map(|p| p.card).max().unwrap();
        assert_eq!(trick.card, best);
        assert_eq!(game.trick_leader(), None);
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_play_to_completion() {
        let mut game = game(&["Fefo", "Siri", "Mati", "Nico"], 42);
        let summary = game.play().unwrap();

        assert!(game.is_finished());
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.turn(), 52);
        assert_eq!(summary.tricks.len(), 13);
        assert!(summary.trailing_plays.is_empty());
        assert_eq!(summary.tricks_won.values().sum::<u32>(), 13);
        assert_eq!(summary.seed, 42);
        assert_eq!(game.rng_state().seed, 42);
    }

    #[test]
    fn test_play_after_finish_is_stable() {
        let mut game = game(&["A", "B"], 1);
        let first = game.play().unwrap();
        let second = game.play().unwrap();
        assert_eq!(first, second);
        assert_eq!(game.play_turn().unwrap(), None);
    }

    #[test]
    fn test_three_players_leave_trailing_play() {
        let mut game = game(&["A", "B", "C"], 9);
        let summary = game.play().unwrap();

        assert_eq!(summary.tricks.len(), 17);
        assert!(summary.tricks.iter().all(|t| t.plays.len() == 3));
        assert_eq!(summary.trailing_plays.len(), 1);
        assert_eq!(summary.trailing_plays[0].player, PlayerId::new(0));
        assert_eq!(summary.cards_played(), 52);
    }

    #[test]
    fn test_single_player_wins_every_trick() {
        let mut game = game(&["Solo"], 0);
        let summary = game.play().unwrap();

        assert_eq!(summary.tricks.len(), 52);
        assert_eq!(summary.tricks_won[PlayerId::new(0)], 52);
    }

    #[test]
    fn test_rejects_bad_player_counts() {
        let config = GameConfig::new().with_players(Vec::<String>::new());
        assert_eq!(TrickGame::new(&config).unwrap_err(), GameError::NoPlayers);

        let players = (0..53).map(|i| Player::new(format!("P{i}"))).collect();
        assert_eq!(
            TrickGame::with_players(players, 0).unwrap_err(),
            GameError::TooManyPlayers { count: 53, max: 52 }
        );
    }

    #[test]
    fn test_take_events_drains() {
        let mut game = game(&["A", "B"], 2);
        assert_eq!(game.take_events().len(), 2);
        assert!(game.events().is_empty());

        game.play().unwrap();
        let events = game.take_events();
        let plays = events.iter().filter(|e| matches!(e, GameEvent::Played { .. })).count();
        assert_eq!(plays, 52);
    }

    #[derive(Debug)]
    struct PastTheEnd;

    impl PlayStrategy for PastTheEnd {
        fn choose(&self, hand: &[Card], _: Option<&Card>, _: &mut GameRng) -> usize {
            hand.len()
        }
    }

    #[test]
    fn test_rejects_players_holding_cards() {
        let mut early = Player::new("B");
        early.receive(Card::new(Suit::Diamonds, Rank::Ace));

        let err = TrickGame::with_players(vec![Player::new("A"), early], 0).unwrap_err();
        assert_eq!(
            err,
            GameError::HandNotEmpty {
                player: "B".to_string()
            }
        );
    }

    #[test]
    fn test_empty_hand_aborts_the_game() {
        let mut game = game(&["A", "B"], 6);
        let seat = PlayerId::new(1);
        while game.players[seat].has_cards() {
            game.players[seat].play_card(None, &mut game.rng).unwrap();
        }

        let err = game.play().unwrap_err();
        assert_eq!(
            err,
            GameError::EmptyHand {
                player: "B".to_string()
            }
        );

        // Seat 0 led, seat 1 could not follow; nothing was scored
        assert_eq!(game.turn(), 1);
        assert_eq!(game.phase(), Phase::Playing);
        assert!(!game.is_finished());
        assert!(game.tricks().is_empty());
        assert_eq!(game.current_player(), seat);

        // The breach is not skipped over on retry
        assert_eq!(game.play_turn().unwrap_err(), err);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_bad_strategy_choice_aborts_the_game() {
        let players = vec![Player::new("A"), Player::with_strategy("B", PastTheEnd)];
        let mut game = TrickGame::with_players(players, 3).unwrap();

        let err = game.play().unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidChoice {
                player: "B".to_string(),
                index: 26,
                hand_size: 26,
            }
        );
        assert_eq!(game.turn(), 1);
        assert_eq!(game.players()[PlayerId::new(1)].hand_size(), 26);
    }

}
