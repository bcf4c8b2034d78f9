use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::{find_starting_player, Deck};
use crate::errors::MoveError;
use crate::play::Play;
use crate::rules::validate;
use crate::snapshot::GameSnapshot;

/// Seats per game. The engine models exactly four.
pub const NUM_PLAYERS: usize = 4;

/// State transition notifications returned from mutating calls.
///
/// These are plain values, not registered callbacks, so transitions stay
/// synchronous and testable. A round reset and a turn change are mutually
/// exclusive for a given transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnChanged { player: usize },
    RoundReset { player: usize },
    PlayerWon { player: usize, position: usize },
    GameOver { win_order: Vec<usize> },
}

/// Side-channel log of everything that happened in a game, for UI and
/// history collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayLogEntry {
    Play { player: usize, play: Play },
    Pass { player: usize },
    RoundReset,
}

/// The accepted play plus the notifications its application produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayOutcome {
    pub play: Play,
    pub events: Vec<GameEvent>,
}

/// Per-game turn state machine.
///
/// Owns the four hands exclusively; no other component holds a mutable alias
/// between calls. All operations run to completion synchronously — out-of-turn
/// or precondition-violating calls fail fast instead of blocking.
///
/// ```
/// use tienlen_engine::deck::Deck;
/// use tienlen_engine::game::GameState;
///
/// let mut deck = Deck::new_with_seed(42);
/// let mut game = GameState::deal(&mut deck);
///
/// // The opener holds the 3♠, which is their lowest card.
/// let opener = game.current_player();
/// let lowest = game.hand(opener)[0];
/// let outcome = game.play_cards(opener, &[lowest]).expect("opening single is legal");
/// assert_eq!(outcome.play.value(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    hands: [Vec<Card>; NUM_PLAYERS],
    last_play: Option<Play>,
    last_play_by: Option<usize>,
    current_player: usize,
    in_round: [bool; NUM_PLAYERS],
    in_game: [bool; NUM_PLAYERS],
    win_order: Vec<usize>,
    play_log: Vec<PlayLogEntry>,
}

impl GameState {
    /// Start a game from already-dealt hands. The turn pointer goes to the
    /// holder of the 3♠.
    pub fn new(mut hands: [Vec<Card>; NUM_PLAYERS]) -> Self {
        for hand in &mut hands {
            hand.sort();
        }
        let current_player = find_starting_player(&hands);
        Self {
            hands,
            last_play: None,
            last_play_by: None,
            current_player,
            in_round: [true; NUM_PLAYERS],
            in_game: [true; NUM_PLAYERS],
            win_order: Vec::new(),
            play_log: Vec::new(),
        }
    }

    /// Deal four fresh hands from `deck` and start a game.
    pub fn deal(deck: &mut Deck) -> Self {
        Self::new(deck.deal())
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn hand(&self, player: usize) -> &[Card] {
        &self.hands[player]
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn last_play(&self) -> Option<&Play> {
        self.last_play.as_ref()
    }

    /// Seat that made the active play, `None` after a reset.
    pub fn last_play_by(&self) -> Option<usize> {
        self.last_play_by
    }

    pub fn in_round(&self, player: usize) -> bool {
        self.in_round[player]
    }

    pub fn in_game(&self, player: usize) -> bool {
        self.in_game[player]
    }

    pub fn win_order(&self) -> &[usize] {
        &self.win_order
    }

    pub fn play_log(&self) -> &[PlayLogEntry] {
        &self.play_log
    }

    pub fn is_game_over(&self) -> bool {
        self.win_order.len() >= NUM_PLAYERS - 1
    }

    /// Whether the acting seat is unconstrained by a previous play.
    pub fn has_power(&self) -> bool {
        self.last_play.is_none()
    }

    // ── Operations ───────────────────────────────────────────────

    /// Check a candidate move without mutating anything. Returns the would-be
    /// play on success.
    pub fn can_play(&self, player: usize, cards: &[Card]) -> Result<Play, MoveError> {
        if player != self.current_player {
            return Err(MoveError::NotYourTurn);
        }
        if !self.in_game[player] {
            return Err(MoveError::AlreadyWon);
        }
        let play = validate(self.last_play.as_ref(), cards)?;
        if !self.owns_all(player, cards) {
            return Err(MoveError::CardNotOwned);
        }
        Ok(play)
    }

    /// Commit a move: re-validates, removes the cards from the hand, records
    /// the play as active, and advances the turn (or finishes the seat/game).
    pub fn play_cards(&mut self, player: usize, cards: &[Card]) -> Result<PlayOutcome, MoveError> {
        let play = self.can_play(player, cards)?;

        for card in cards {
            if let Some(idx) = self.hands[player].iter().position(|c| c == card) {
                self.hands[player].remove(idx);
            }
        }

        self.last_play = Some(play.clone());
        self.last_play_by = Some(player);
        self.play_log.push(PlayLogEntry::Play {
            player,
            play: play.clone(),
        });

        let mut events = Vec::new();
        if self.hands[player].is_empty() {
            self.player_wins(player, &mut events);
        } else {
            self.advance_turn(&mut events);
            if self.last_play_by == Some(self.current_player) {
                self.reset_round(&mut events);
            }
        }

        Ok(PlayOutcome { play, events })
    }

    /// Give up on the current round. Holding power cannot pass.
    pub fn pass_turn(&mut self, player: usize) -> Result<Vec<GameEvent>, MoveError> {
        if player != self.current_player {
            return Err(MoveError::NotYourTurn);
        }
        if !self.in_game[player] {
            return Err(MoveError::AlreadyWon);
        }
        if self.last_play.is_none() {
            return Err(MoveError::CannotPass);
        }

        self.in_round[player] = false;
        self.play_log.push(PlayLogEntry::Pass { player });

        let mut events = Vec::new();
        if self.round_over() {
            self.reset_round(&mut events);
        } else {
            self.advance_turn(&mut events);
            if self.last_play_by == Some(self.current_player) {
                self.reset_round(&mut events);
            }
        }
        Ok(events)
    }

    // ── Internals ────────────────────────────────────────────────

    fn player_wins(&mut self, player: usize, events: &mut Vec<GameEvent>) {
        self.in_game[player] = false;
        self.in_round[player] = false;
        self.win_order.push(player);
        events.push(GameEvent::PlayerWon {
            player,
            position: self.win_order.len(),
        });

        let remaining = self.in_game.iter().filter(|&&alive| alive).count();
        if remaining == 1 {
            // The last seat standing is appended automatically.
            for (i, &alive) in self.in_game.iter().enumerate() {
                if alive {
                    self.win_order.push(i);
                    break;
                }
            }
            events.push(GameEvent::GameOver {
                win_order: self.win_order.clone(),
            });
        } else if self.round_over() {
            self.reset_round(events);
        } else {
            self.advance_turn(events);
        }
    }

    fn round_over(&self) -> bool {
        !(0..NUM_PLAYERS).any(|i| self.in_game[i] && self.in_round[i])
    }

    /// Power returns to the scanning seat: clear the active play and re-arm
    /// every in-game seat for the new round. Turn pointer stays put.
    fn reset_round(&mut self, events: &mut Vec<GameEvent>) {
        self.last_play = None;
        self.last_play_by = None;
        self.in_round = self.in_game;
        self.play_log.push(PlayLogEntry::RoundReset);
        events.push(GameEvent::RoundReset {
            player: self.current_player,
        });
    }

    /// Scan clockwise for the next seat still in both the game and the round.
    /// Wrapping all the way around means nobody can respond — reset instead.
    fn advance_turn(&mut self, events: &mut Vec<GameEvent>) {
        let start = self.current_player;
        loop {
            self.current_player = (self.current_player + 1) % NUM_PLAYERS;
            if self.in_game[self.current_player] && self.in_round[self.current_player] {
                break;
            }
            if self.current_player == start {
                self.reset_round(events);
                return;
            }
        }
        events.push(GameEvent::TurnChanged {
            player: self.current_player,
        });
    }

    /// Multiplicity-aware ownership check: a candidate listing the same card
    /// twice is rejected even though the hand contains it once.
    fn owns_all(&self, player: usize, cards: &[Card]) -> bool {
        let mut remaining = self.hands[player].clone();
        for card in cards {
            match remaining.iter().position(|c| c == card) {
                Some(idx) => {
                    remaining.swap_remove(idx);
                }
                None => return false,
            }
        }
        true
    }

    // ── Snapshot ─────────────────────────────────────────────────

    /// Plain-data form of this state, the stable serialization contract for
    /// persistence and network sync.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// Reconstruct an equivalent instance from a snapshot. Fails closed on
    /// malformed data.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, crate::errors::SnapshotError> {
        snapshot.reconstruct()
    }

    pub(crate) fn from_parts(
        hands: [Vec<Card>; NUM_PLAYERS],
        last_play: Option<Play>,
        last_play_by: Option<usize>,
        current_player: usize,
        in_round: [bool; NUM_PLAYERS],
        in_game: [bool; NUM_PLAYERS],
        win_order: Vec<usize>,
    ) -> Self {
        Self {
            hands,
            last_play,
            last_play_by,
            current_player,
            in_round,
            in_game,
            win_order,
            play_log: Vec::new(),
        }
    }
}
