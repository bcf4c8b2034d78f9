use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank};

/// The closed set of playable combination kinds.
///
/// Classification order matters: [`determine_combo`](Play::determine_combo)
/// tries Single → Pair → Triple → Quad → Run → Bomb and the first match wins.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Combo {
    /// One card
    Single,
    /// Two cards of the same rank
    Pair,
    /// Three cards of the same rank
    Triple,
    /// Four cards of the same rank
    Quad,
    /// Three or more cards of strictly consecutive ranks (no 2s)
    Run,
    /// Three or more consecutive ranks, each contributed as a pair
    Bomb,
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Combo::Single => "Single",
            Combo::Pair => "Pair",
            Combo::Triple => "Triple",
            Combo::Quad => "Quad",
            Combo::Run => "Run",
            Combo::Bomb => "Bomb",
        };
        f.write_str(name)
    }
}

/// A committed combination: kind, sorted cards, suited flag, and strength.
///
/// Strength is the value of the highest card. Equal strengths cannot occur
/// across distinct plays because card values are unique within a deck.
/// Constructed only by the move validator and snapshot restore, both of which
/// classify the cards first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    combo: Combo,
    cards: Vec<Card>,
    suited: bool,
    value: u8,
}

impl Play {
    /// Build a play from already-classified cards. `cards` must be non-empty
    /// and consistent with `combo`; callers classify before constructing.
    pub(crate) fn new(combo: Combo, cards: &[Card], suited: bool) -> Self {
        let mut cards = cards.to_vec();
        cards.sort();
        let value = cards.last().map(|c| c.value()).unwrap_or(0);
        Self {
            combo,
            cards,
            suited,
            value,
        }
    }

    pub fn combo(&self) -> Combo {
        self.combo
    }

    /// The cards of the play, sorted ascending by value.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// True only for a Run whose cards share one suit.
    pub fn suited(&self) -> bool {
        self.suited
    }

    /// Strength scalar: the value of the highest card.
    pub fn value(&self) -> u8 {
        self.value
    }

    // ── Combo detection ──────────────────────────────────────────

    pub fn is_single(cards: &[Card]) -> bool {
        cards.len() == 1
    }

    pub fn is_pair(cards: &[Card]) -> bool {
        cards.len() == 2 && cards[0].rank == cards[1].rank
    }

    pub fn is_triple(cards: &[Card]) -> bool {
        cards.len() == 3 && cards.iter().all(|c| c.rank == cards[0].rank)
    }

    pub fn is_quad(cards: &[Card]) -> bool {
        cards.len() == 4 && cards.iter().all(|c| c.rank == cards[0].rank)
    }

    /// Three or more cards of strictly consecutive ranks. 2s never appear in
    /// runs.
    pub fn is_run(cards: &[Card]) -> bool {
        if cards.len() < 3 {
            return false;
        }
        if cards.iter().any(|c| c.rank == Rank::Two) {
            return false;
        }
        let mut sorted = cards.to_vec();
        sorted.sort();
        sorted
            .windows(2)
            .all(|w| w[0].rank as u8 + 1 == w[1].rank as u8)
    }

    /// A bomb is 3+ consecutive pairs (6+ cards): sorted into adjacent pairs,
    /// each pair same rank, and the pair ranks form a run.
    pub fn is_bomb(cards: &[Card]) -> bool {
        if cards.len() < 6 || cards.len() % 2 != 0 {
            return false;
        }
        let mut sorted = cards.to_vec();
        sorted.sort();
        for pair in sorted.chunks(2) {
            if !Play::is_pair(pair) {
                return false;
            }
        }
        // Check consecutive ranks using every other card
        let rank_cards: Vec<Card> = sorted.iter().copied().skip(1).step_by(2).collect();
        Play::is_run(&rank_cards)
    }

    pub fn is_suited(cards: &[Card]) -> bool {
        match cards.first() {
            None => false,
            Some(first) => cards.iter().all(|c| c.suit == first.suit),
        }
    }

    // ── Combo determination ──────────────────────────────────────

    /// Classify a card set, or `None` when it matches no combination kind.
    pub fn determine_combo(cards: &[Card]) -> Option<Combo> {
        if Play::is_single(cards) {
            Some(Combo::Single)
        } else if Play::is_pair(cards) {
            Some(Combo::Pair)
        } else if Play::is_triple(cards) {
            Some(Combo::Triple)
        } else if Play::is_quad(cards) {
            Some(Combo::Quad)
        } else if Play::is_run(cards) {
            Some(Combo::Run)
        } else if Play::is_bomb(cards) {
            Some(Combo::Bomb)
        } else {
            None
        }
    }

    /// Whether `attempt` classifies to the same kind as this play. Runs and
    /// bombs additionally require equal cardinality.
    pub fn matches_combo(&self, attempt: &[Card]) -> bool {
        match self.combo {
            Combo::Single => Play::is_single(attempt),
            Combo::Pair => Play::is_pair(attempt),
            Combo::Triple => Play::is_triple(attempt),
            Combo::Quad => Play::is_quad(attempt),
            Combo::Run => attempt.len() == self.cards.len() && Play::is_run(attempt),
            Combo::Bomb => attempt.len() == self.cards.len() && Play::is_bomb(attempt),
        }
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.combo)?;
        for card in &self.cards {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}
