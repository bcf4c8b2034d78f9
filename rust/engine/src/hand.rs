//! Exhaustive enumeration of the legal plays a hand can make against the
//! active play. Every returned card set has already passed the move
//! validator, so downstream policy code can compare across the full legal set
//! without re-checking.

use std::collections::BTreeMap;

use crate::cards::{Card, Rank};
use crate::play::{Combo, Play};
use crate::rules::validate;

/// Legal plays grouped by combination kind.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub singles: Vec<Vec<Card>>,
    pub pairs: Vec<Vec<Card>>,
    pub triples: Vec<Vec<Card>>,
    pub quads: Vec<Vec<Card>>,
    pub runs: Vec<Vec<Card>>,
    pub bombs: Vec<Vec<Card>>,
}

impl Evaluation {
    /// All legal plays across every kind, in kind order.
    pub fn all_plays(&self) -> Vec<Vec<Card>> {
        let mut all = Vec::with_capacity(
            self.singles.len()
                + self.pairs.len()
                + self.triples.len()
                + self.quads.len()
                + self.runs.len()
                + self.bombs.len(),
        );
        all.extend_from_slice(&self.singles);
        all.extend_from_slice(&self.pairs);
        all.extend_from_slice(&self.triples);
        all.extend_from_slice(&self.quads);
        all.extend_from_slice(&self.runs);
        all.extend_from_slice(&self.bombs);
        all
    }

    pub fn has_any_plays(&self) -> bool {
        !self.singles.is_empty()
            || !self.pairs.is_empty()
            || !self.triples.is_empty()
            || !self.quads.is_empty()
            || !self.runs.is_empty()
            || !self.bombs.is_empty()
    }
}

fn group_by_rank(hand: &[Card]) -> BTreeMap<Rank, Vec<Card>> {
    let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in hand {
        groups.entry(card.rank).or_default().push(*card);
    }
    groups
}

fn find_singles(hand: &[Card], last_play: Option<&Play>) -> Vec<Vec<Card>> {
    let mut valid = Vec::new();
    for card in hand {
        let cards = vec![*card];
        if validate(last_play, &cards).is_ok() {
            valid.push(cards);
        }
    }
    valid
}

fn find_pairs(by_rank: &BTreeMap<Rank, Vec<Card>>, last_play: Option<&Play>) -> Vec<Vec<Card>> {
    let mut valid = Vec::new();
    for cards_of_rank in by_rank.values() {
        if cards_of_rank.len() < 2 {
            continue;
        }
        // Duplicate-suit cards are positionally distinct: a triple yields all
        // C(3,2) pairs.
        for i in 0..cards_of_rank.len() {
            for j in i + 1..cards_of_rank.len() {
                let cards = vec![cards_of_rank[i], cards_of_rank[j]];
                if validate(last_play, &cards).is_ok() {
                    valid.push(cards);
                }
            }
        }
    }
    valid
}

fn find_triples(by_rank: &BTreeMap<Rank, Vec<Card>>, last_play: Option<&Play>) -> Vec<Vec<Card>> {
    let mut valid = Vec::new();
    for cards_of_rank in by_rank.values() {
        if cards_of_rank.len() < 3 {
            continue;
        }
        for i in 0..cards_of_rank.len() {
            for j in i + 1..cards_of_rank.len() {
                for k in j + 1..cards_of_rank.len() {
                    let cards = vec![cards_of_rank[i], cards_of_rank[j], cards_of_rank[k]];
                    if validate(last_play, &cards).is_ok() {
                        valid.push(cards);
                    }
                }
            }
        }
    }
    valid
}

fn find_quads(by_rank: &BTreeMap<Rank, Vec<Card>>, last_play: Option<&Play>) -> Vec<Vec<Card>> {
    let mut valid = Vec::new();
    for cards_of_rank in by_rank.values() {
        if cards_of_rank.len() != 4 {
            continue;
        }
        let cards = cards_of_rank.clone();
        if validate(last_play, &cards).is_ok() {
            valid.push(cards);
        }
    }
    valid
}

fn find_runs(hand: &[Card], last_play: Option<&Play>) -> Vec<Vec<Card>> {
    let mut valid = Vec::new();

    // 2s never appear in runs
    let mut sorted: Vec<Card> = hand.iter().copied().filter(|c| c.rank != Rank::Two).collect();
    if sorted.len() < 3 {
        return valid;
    }
    sorted.sort();

    let (min_length, max_length) = match last_play {
        Some(last) if last.combo() == Combo::Run => (last.cards().len(), last.cards().len()),
        _ => (3, sorted.len()),
    };

    for length in min_length..=max_length {
        if length > sorted.len() {
            break;
        }
        for start_idx in 0..=sorted.len() - length {
            let mut run_cards: Vec<Card> = Vec::with_capacity(length);

            for &card in &sorted[start_idx..] {
                match run_cards.last().copied() {
                    None => run_cards.push(card),
                    Some(last_card) if card.rank as u8 == last_card.rank as u8 + 1 => {
                        run_cards.push(card)
                    }
                    Some(last_card) if card.rank == last_card.rank => continue,
                    Some(_) => break, // gap in the sequence
                }

                if run_cards.len() == length {
                    if validate(last_play, &run_cards).is_ok() {
                        valid.push(run_cards.clone());
                    }
                    break;
                }
            }
        }
    }

    valid
}

fn find_bombs(hand: &[Card], last_play: Option<&Play>) -> Vec<Vec<Card>> {
    let mut valid = Vec::new();
    let by_rank = group_by_rank(hand);

    // Only ranks holding at least a pair can contribute
    let pair_ranks: Vec<Rank> = by_rank
        .iter()
        .filter(|(_, cards)| cards.len() >= 2)
        .map(|(&rank, _)| rank)
        .collect();

    if pair_ranks.len() < 3 {
        return valid;
    }

    let (min_pairs, max_pairs) = match last_play {
        Some(last) if last.combo() == Combo::Bomb => {
            let required = last.cards().len() / 2;
            (required, required)
        }
        _ => (3, pair_ranks.len()),
    };

    for num_pairs in min_pairs..=max_pairs {
        if num_pairs > pair_ranks.len() {
            break;
        }
        for start_idx in 0..=pair_ranks.len() - num_pairs {
            let window = &pair_ranks[start_idx..start_idx + num_pairs];
            let consecutive = window
                .windows(2)
                .all(|w| w[0] as u8 + 1 == w[1] as u8);
            if !consecutive {
                continue;
            }

            let mut bomb_cards: Vec<Card> = Vec::with_capacity(num_pairs * 2);
            for rank in window {
                let cards_of_rank = &by_rank[rank];
                bomb_cards.push(cards_of_rank[0]);
                bomb_cards.push(cards_of_rank[1]);
            }

            if validate(last_play, &bomb_cards).is_ok() {
                valid.push(bomb_cards);
            }
        }
    }

    valid
}

/// Enumerate every legal play `hand` can make against `last_play`.
///
/// This is an exhaustive search, not best-first: all legal plays are
/// returned so a strategy can compare across the full set.
pub fn evaluate(hand: &[Card], last_play: Option<&Play>) -> Evaluation {
    let by_rank = group_by_rank(hand);
    Evaluation {
        singles: find_singles(hand, last_play),
        pairs: find_pairs(&by_rank, last_play),
        triples: find_triples(&by_rank, last_play),
        quads: find_quads(&by_rank, last_play),
        runs: find_runs(hand, last_play),
        bombs: find_bombs(hand, last_play),
    }
}
