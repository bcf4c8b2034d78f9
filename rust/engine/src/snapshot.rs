//! Plain-data snapshot forms. The snapshot shape is the one stable
//! serialization contract; the live representations are free to evolve as
//! long as conversion stays bidirectional. Field names follow the wire
//! convention collaborators already persist (camelCase).

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::SnapshotError;
use crate::game::{GameState, NUM_PLAYERS};
use crate::play::{Combo, Play};

/// Card transport form: `value` is the canonical identity and collaborators
/// may reconstruct a card from it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub rank: u8,
    pub suit: u8,
    pub value: u8,
}

impl From<Card> for CardData {
    fn from(card: Card) -> Self {
        Self {
            rank: card.rank as u8,
            suit: card.suit as u8,
            value: card.value(),
        }
    }
}

impl CardData {
    /// Decode, checking all three fields agree on one real card.
    pub fn to_card(self) -> Result<Card, SnapshotError> {
        let err = SnapshotError::InvalidCard {
            rank: self.rank,
            suit: self.suit,
            value: self.value,
        };
        let card = Card::from_value(self.value).ok_or_else(|| err.clone())?;
        if card.rank as u8 != self.rank || card.suit as u8 != self.suit {
            return Err(err);
        }
        Ok(card)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayData {
    pub combo: Combo,
    pub cards: Vec<CardData>,
    pub suited: bool,
}

impl From<&Play> for PlayData {
    fn from(play: &Play) -> Self {
        Self {
            combo: play.combo(),
            cards: play.cards().iter().map(|&c| c.into()).collect(),
            suited: play.suited(),
        }
    }
}

impl PlayData {
    /// Rebuild the play, re-classifying the cards so a tampered snapshot
    /// cannot smuggle in an inconsistent combination.
    pub fn to_play(&self) -> Result<Play, SnapshotError> {
        let cards: Vec<Card> = self
            .cards
            .iter()
            .map(|c| c.to_card())
            .collect::<Result<_, _>>()?;
        match Play::determine_combo(&cards) {
            Some(combo) if combo == self.combo => {}
            _ => return Err(SnapshotError::MalformedPlay),
        }
        // The suited flag can only be claimed by an actually suited run.
        if self.suited && !(Play::is_run(&cards) && Play::is_suited(&cards)) {
            return Err(SnapshotError::MalformedPlay);
        }
        Ok(Play::new(self.combo, &cards, self.suited))
    }
}

/// Everything needed to reconstruct an equivalent [`GameState`].
/// `passed[i]` is the inverse of the "still in this round" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub hands: Vec<Vec<CardData>>,
    pub current_player: usize,
    pub last_play: Option<PlayData>,
    pub last_play_by: Option<usize>,
    pub passed: Vec<bool>,
    pub win_order: Vec<usize>,
    pub in_game: Vec<bool>,
}

impl GameSnapshot {
    pub(crate) fn capture(game: &GameState) -> Self {
        Self {
            hands: (0..NUM_PLAYERS)
                .map(|i| game.hand(i).iter().map(|&c| c.into()).collect())
                .collect(),
            current_player: game.current_player(),
            last_play: game.last_play().map(PlayData::from),
            last_play_by: game.last_play_by(),
            passed: (0..NUM_PLAYERS).map(|i| !game.in_round(i)).collect(),
            win_order: game.win_order().to_vec(),
            in_game: (0..NUM_PLAYERS).map(|i| game.in_game(i)).collect(),
        }
    }

    pub(crate) fn reconstruct(&self) -> Result<GameState, SnapshotError> {
        if self.hands.len() != NUM_PLAYERS {
            return Err(SnapshotError::HandCount {
                expected: NUM_PLAYERS,
                got: self.hands.len(),
            });
        }
        if self.passed.len() != NUM_PLAYERS || self.in_game.len() != NUM_PLAYERS {
            return Err(SnapshotError::SeatCount {
                expected: NUM_PLAYERS,
                got: self.passed.len().min(self.in_game.len()),
            });
        }
        if self.current_player >= NUM_PLAYERS {
            return Err(SnapshotError::SeatOutOfRange(self.current_player));
        }

        let mut hands: [Vec<Card>; NUM_PLAYERS] = Default::default();
        for (i, hand) in self.hands.iter().enumerate() {
            let mut cards: Vec<Card> = hand
                .iter()
                .map(|c| c.to_card())
                .collect::<Result<_, _>>()?;
            cards.sort();
            hands[i] = cards;
        }

        let last_play = self.last_play.as_ref().map(|p| p.to_play()).transpose()?;
        let last_play_by = match (last_play.is_some(), self.last_play_by) {
            (true, None) => return Err(SnapshotError::MissingPlayOwner),
            (true, Some(owner)) if owner >= NUM_PLAYERS => {
                return Err(SnapshotError::SeatOutOfRange(owner))
            }
            (true, Some(owner)) => Some(owner),
            (false, _) => None,
        };

        let mut seen = [false; NUM_PLAYERS];
        for &winner in &self.win_order {
            if winner >= NUM_PLAYERS {
                return Err(SnapshotError::SeatOutOfRange(winner));
            }
            if seen[winner] {
                return Err(SnapshotError::DuplicateWinner(winner));
            }
            // A finished seat must be flagged out of the game, otherwise it
            // could play out and re-enter the win order.
            if self.in_game[winner] {
                return Err(SnapshotError::WinnerInGame(winner));
            }
            seen[winner] = true;
        }

        // No card may appear twice across the hands and the active play.
        let mut held = [false; 52];
        let active_cards = last_play.as_ref().map(Play::cards).unwrap_or(&[]);
        for card in hands.iter().flatten().chain(active_cards) {
            let value = card.value() as usize;
            if held[value] {
                return Err(SnapshotError::DuplicateCard(card.value()));
            }
            held[value] = true;
        }

        let mut in_round = [false; NUM_PLAYERS];
        let mut in_game = [false; NUM_PLAYERS];
        for i in 0..NUM_PLAYERS {
            in_game[i] = self.in_game[i];
            in_round[i] = !self.passed[i];
            // A seat out of the game can never still be in the round.
            if in_round[i] && !in_game[i] {
                return Err(SnapshotError::InconsistentFlags(i));
            }
        }

        Ok(GameState::from_parts(
            hands,
            last_play,
            last_play_by,
            self.current_player,
            in_round,
            in_game,
            self.win_order.clone(),
        ))
    }
}
