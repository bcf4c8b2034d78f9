//! # tienlen-engine: Tiến Lên Rules Engine Core
//!
//! A deterministic rules engine for the four-player shedding card game
//! Tiến Lên (Thirteen). Provides card and combination modeling, move
//! validation with chop overrides, exhaustive legal-play enumeration, the
//! per-game turn state machine, and a multi-seat tournament state machine
//! with cross-game scoring.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`deck`] - Deterministic shuffling and dealing with ChaCha20 RNG
//! - [`play`] - Combination classification (Single through Bomb) and strength
//! - [`rules`] - Move validation, including the chop table against 2s
//! - [`hand`] - Exhaustive enumeration of legal plays from a hand
//! - [`game`] - Per-game turn state machine with pass/round-reset semantics
//! - [`tourney`] - Seats, readiness, lifecycle status, and scoring
//! - [`snapshot`] - Plain-data snapshot/restore contracts
//! - [`logger`] - Game record logging and JSONL serialization
//! - [`errors`] - Error taxonomy (rule, precondition, structural)
//!
//! ## Quick Start
//!
//! ```rust
//! use tienlen_engine::deck::Deck;
//! use tienlen_engine::game::GameState;
//! use tienlen_engine::play::Combo;
//!
//! // Deal four 13-card hands; the 3♠ holder opens.
//! let mut deck = Deck::new_with_seed(42);
//! let mut game = GameState::deal(&mut deck);
//!
//! let opener = game.current_player();
//! let lowest = game.hand(opener)[0];
//! let outcome = game.play_cards(opener, &[lowest]).expect("opening single is legal");
//! assert_eq!(outcome.play.combo(), Combo::Single);
//! ```
//!
//! ## Deterministic Deals
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use tienlen_engine::deck::Deck;
//!
//! // Same seed produces the same four hands
//! let hands1 = Deck::new_with_seed(7).deal();
//! let hands2 = Deck::new_with_seed(7).deal();
//! assert_eq!(hands1, hands2);
//! ```
//!
//! ## Move Validation
//!
//! Rule violations are returned as structured errors the acting seat can
//! surface and retry; they never mutate state:
//!
//! ```rust
//! use tienlen_engine::cards::{Card, Rank, Suit};
//! use tienlen_engine::rules::validate;
//!
//! let opening = validate(None, &[Card::new(Rank::Three, Suit::Spades)]).unwrap();
//! match validate(Some(&opening), &[Card::new(Rank::Three, Suit::Clubs)]) {
//!     Ok(play) => println!("accepted: {}", play),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod play;
pub mod rules;
pub mod snapshot;
pub mod tourney;
