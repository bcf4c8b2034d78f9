use serde::{Deserialize, Serialize};
use std::fmt;

/// Card rank in Tiến Lên order: THREE is the lowest rank, TWO the highest.
/// The numeric discriminant is the comparison key used everywhere in the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 3 (lowest)
    Three = 0,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// Rank 2 (highest; excluded from runs, target of chops)
    Two,
}

impl Rank {
    /// Reconstruct a rank from its index 0..=12. Returns `None` out of range.
    pub fn from_index(v: u8) -> Option<Rank> {
        match v {
            0 => Some(Rank::Three),
            1 => Some(Rank::Four),
            2 => Some(Rank::Five),
            3 => Some(Rank::Six),
            4 => Some(Rank::Seven),
            5 => Some(Rank::Eight),
            6 => Some(Rank::Nine),
            7 => Some(Rank::Ten),
            8 => Some(Rank::Jack),
            9 => Some(Rank::Queen),
            10 => Some(Rank::King),
            11 => Some(Rank::Ace),
            12 => Some(Rank::Two),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 13] = [
            "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A", "2",
        ];
        LABELS[*self as usize]
    }
}

/// Suit in Tiến Lên order: SPADES is the lowest suit, HEARTS the highest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades (♠, lowest)
    Spades = 0,
    /// Clubs (♣)
    Clubs,
    /// Diamonds (♦)
    Diamonds,
    /// Hearts (♥, highest)
    Hearts,
}

impl Suit {
    /// Reconstruct a suit from its index 0..=3. Returns `None` out of range.
    pub fn from_index(v: u8) -> Option<Suit> {
        match v {
            0 => Some(Suit::Spades),
            1 => Some(Suit::Clubs),
            2 => Some(Suit::Diamonds),
            3 => Some(Suit::Hearts),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        const SYMBOLS: [&str; 4] = ["♠", "♣", "♦", "♥"];
        SYMBOLS[*self as usize]
    }
}

/// A single playing card. Immutable and value-equal by content.
///
/// The derived [`value`](Card::value) scalar (`rank * 4 + suit`) is a bijection
/// onto `0..52` and the sole unit of comparison throughout the engine. The
/// derived `Ord` sorts by rank first and suit second, which is exactly
/// ascending `value`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// Rank (Three through Two)
    pub rank: Rank,
    /// Suit (Spades through Hearts)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Canonical scalar identity: `rank * 4 + suit`, unique per card.
    ///
    /// ```
    /// use tienlen_engine::cards::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Rank::Three, Suit::Spades).value(), 0);
    /// assert_eq!(Card::new(Rank::Two, Suit::Hearts).value(), 51);
    /// ```
    pub fn value(&self) -> u8 {
        (self.rank as u8) * 4 + (self.suit as u8)
    }

    /// Reconstruct a card purely from its scalar value. Returns `None` for
    /// values outside `0..52`.
    pub fn from_value(value: u8) -> Option<Card> {
        let rank = Rank::from_index(value / 4)?;
        let suit = Suit::from_index(value % 4)?;
        Some(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts]
}

pub fn all_ranks() -> [Rank; 13] {
    [
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
        Rank::Two,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
