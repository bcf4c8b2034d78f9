//! # tienlen-ai: Automated Players for Tiến Lên
//!
//! Bot strategies for the Tiến Lên rules engine, plus the driver that runs
//! consecutive bot turns until a human seat or game over.
//!
//! ## Core Components
//!
//! - [`BotStrategy`] - Trait defining the move-selection interface
//! - [`greedy`] - The greedy baseline strategy
//! - [`create_bot`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use tienlen_ai::{create_bot, BotStrategy};
//! use tienlen_engine::deck::Deck;
//!
//! let bot = create_bot("greedy");
//! let hands = Deck::new_with_seed(42).deal();
//!
//! // Opening with power: the bot always finds something to play.
//! let cards = bot.choose_play(&hands[0], None);
//! assert!(!cards.is_empty());
//! ```

use tienlen_engine::cards::Card;
use tienlen_engine::play::Play;

pub mod greedy;

pub use greedy::{execute_bot_turns, BotAction, BotMove, GreedyBot};

/// Move-selection interface for automated players.
///
/// `last_play` is `None` when the seat holds power (unconstrained opening).
/// Returning an empty vector means pass. Implementations are pure policies
/// over the evaluator's output; future strategies (search-based, learned)
/// substitute here without touching the engine.
pub trait BotStrategy: Send + Sync {
    /// Choose the cards to play from `hand` against `last_play`, or an empty
    /// vector to pass.
    fn choose_play(&self, hand: &[Card], last_play: Option<&Play>) -> Vec<Card>;

    /// Name/identifier of this strategy.
    fn name(&self) -> &str;
}

/// Create a strategy by name. Currently only `"greedy"` is supported.
///
/// ```rust
/// use tienlen_ai::create_bot;
///
/// let bot = create_bot("greedy");
/// assert_eq!(bot.name(), "GreedyBot");
/// ```
///
/// # Panics
///
/// Panics if an unknown strategy name is requested.
pub fn create_bot(kind: &str) -> Box<dyn BotStrategy> {
    match kind {
        "greedy" => Box::new(GreedyBot::new()),
        _ => panic!("Unknown bot strategy: {}", kind),
    }
}
