//! Greedy baseline strategy.
//!
//! Responding: play the cheapest legal beat by maximum card value. Opening:
//! lead with the largest non-bomb combination containing the globally lowest
//! card, saving quads and bombs for chops. The opening tie-break is a
//! deliberate policy kept for behavioral parity, not an optimality claim.

use serde::Serialize;

use tienlen_engine::cards::Card;
use tienlen_engine::game::{GameState, NUM_PLAYERS};
use tienlen_engine::hand::evaluate;
use tienlen_engine::play::Play;

use crate::BotStrategy;

/// Upper bound on consecutive bot moves per driver call; a game between four
/// bots finishes well under this.
const SAFETY_CAP: usize = 100;

fn play_value(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.value()).max().unwrap_or(0)
}

/// Greedy move selection. Returns an empty vector to pass.
pub fn choose_play(hand: &[Card], last_play: Option<&Play>) -> Vec<Card> {
    let evaluation = evaluate(hand, last_play);

    // Opening with power: lead the lowest card inside the largest non-bomb
    // combination it appears in.
    if last_play.is_none() {
        let non_bomb_plays: Vec<&Vec<Card>> = evaluation
            .singles
            .iter()
            .chain(evaluation.pairs.iter())
            .chain(evaluation.triples.iter())
            .chain(evaluation.runs.iter())
            .collect();

        if non_bomb_plays.is_empty() {
            // Only quads/bombs remain; shed the quad first.
            if let Some(quad) = evaluation.quads.first() {
                return quad.clone();
            }
            if let Some(bomb) = evaluation.bombs.first() {
                return bomb.clone();
            }
            // Unreachable with a non-empty hand, kept as a safety net.
            return hand.first().map(|&c| vec![c]).unwrap_or_default();
        }

        let lowest_value = non_bomb_plays
            .iter()
            .flat_map(|p| p.iter().map(|c| c.value()))
            .min()
            .unwrap_or(0);

        let mut with_lowest: Vec<&Vec<Card>> = non_bomb_plays
            .into_iter()
            .filter(|p| p.iter().any(|c| c.value() == lowest_value))
            .collect();

        // Most cards first; ties broken by lower maximum value.
        with_lowest.sort_by(|a, b| {
            b.len()
                .cmp(&a.len())
                .then(play_value(a).cmp(&play_value(b)))
        });
        return with_lowest
            .first()
            .map(|p| (*p).clone())
            .unwrap_or_else(|| hand.first().map(|&c| vec![c]).unwrap_or_default());
    }

    // Responding: cheapest beat wins.
    let mut all_plays = evaluation.all_plays();
    if all_plays.is_empty() {
        return Vec::new(); // pass
    }
    all_plays.sort_by_key(|p| play_value(p));
    all_plays.swap_remove(0)
}

/// The greedy baseline bot.
#[derive(Debug, Clone, Default)]
pub struct GreedyBot;

impl GreedyBot {
    pub fn new() -> Self {
        Self
    }
}

impl BotStrategy for GreedyBot {
    fn choose_play(&self, hand: &[Card], last_play: Option<&Play>) -> Vec<Card> {
        choose_play(hand, last_play)
    }

    fn name(&self) -> &str {
        "GreedyBot"
    }
}

/// One bot action taken by the driver, for collaborators to relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BotAction {
    Play(Vec<Card>),
    Pass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BotMove {
    pub player: usize,
    pub action: BotAction,
}

/// Run consecutive bot turns until a human-controlled seat has the turn or
/// the game is over. `is_bot[pos]` marks bot-controlled seats. Returns the
/// ordered list of actions taken.
pub fn execute_bot_turns(game: &mut GameState, is_bot: &[bool; NUM_PLAYERS]) -> Vec<BotMove> {
    let mut moves = Vec::new();

    for _ in 0..SAFETY_CAP {
        if game.is_game_over() {
            break;
        }
        let pos = game.current_player();
        if !is_bot[pos] {
            break; // human's turn
        }

        let cards = choose_play(game.hand(pos), game.last_play());
        if !cards.is_empty() && game.play_cards(pos, &cards).is_ok() {
            moves.push(BotMove {
                player: pos,
                action: BotAction::Play(cards),
            });
        } else if game.pass_turn(pos).is_ok() {
            moves.push(BotMove {
                player: pos,
                action: BotAction::Pass,
            });
        } else {
            // Neither play nor pass is accepted; bail out rather than spin.
            break;
        }
    }

    moves
}
