use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, Rank, Suit};
use crate::game::NUM_PLAYERS;

/// Cards dealt to each of the four seats.
pub const HAND_SIZE: usize = 13;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    /// Shuffle a fresh 52-card deck and split it into four 13-card hands,
    /// each sorted ascending by card value.
    pub fn deal(&mut self) -> [Vec<Card>; NUM_PLAYERS] {
        self.shuffle();
        let mut hands: [Vec<Card>; NUM_PLAYERS] = Default::default();
        for (i, hand) in hands.iter_mut().enumerate() {
            let mut cards: Vec<Card> =
                self.cards[i * HAND_SIZE..(i + 1) * HAND_SIZE].to_vec();
            cards.sort();
            *hand = cards;
        }
        hands
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Find the opening seat: the holder of the 3♠ (value 0).
///
/// Falls back to the seat holding the globally lowest card. With a full
/// standard deck the fallback is unreachable, but partial hands (tests,
/// restored mid-game states) still get a well-defined answer.
pub fn find_starting_player(hands: &[Vec<Card>; NUM_PLAYERS]) -> usize {
    for (i, hand) in hands.iter().enumerate() {
        for card in hand {
            if card.rank == Rank::Three && card.suit == Suit::Spades {
                return i;
            }
        }
    }
    let mut lowest_value = u8::MAX;
    let mut lowest_player = 0;
    for (i, hand) in hands.iter().enumerate() {
        if let Some(first) = hand.iter().min() {
            if first.value() < lowest_value {
                lowest_value = first.value();
                lowest_player = i;
            }
        }
    }
    lowest_player
}
