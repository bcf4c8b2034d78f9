use thiserror::Error;

use crate::play::Combo;

/// Rule violations: illegal move attempts. Always returned as `Err` values
/// for the acting seat to retry; they never mutate engine state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("That's not a valid hand")]
    InvalidHand,
    #[error("Not your turn")]
    NotYourTurn,
    #[error("You already won")]
    AlreadyWon,
    #[error("You don't have that card")]
    CardNotOwned,
    #[error("You need to play a {0}")]
    WrongCombo(Combo),
    #[error("You need to play a valid chop")]
    InvalidChop,
    #[error("You need to play a suited run")]
    UnsuitedRun,
    #[error("That doesn't beat the last play")]
    TooWeak,
    #[error("You can't pass when you have power")]
    CannotPass,
}

/// Precondition violations on the tournament state machine. These indicate a
/// caller bug (acting against an impossible state), not player error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TourneyError {
    #[error("tournament is already in progress")]
    InProgress,
    #[error("seat position {0} is out of range")]
    InvalidSeat(usize),
    #[error("seat {0} is already taken")]
    SeatTaken(usize),
    #[error("no empty seats left")]
    Full,
    #[error("player is not seated in this tournament")]
    NotInTourney,
    #[error("seat {0} is empty")]
    SeatEmpty(usize),
    #[error("seat {0} is not occupied by a bot")]
    NotABot(usize),
    #[error("ready is only accepted while starting or between games")]
    InvalidState,
    #[error("cannot start a game: {got} of {expected} seats filled")]
    SeatsIncomplete { expected: usize, got: usize },
    #[error("no game in progress")]
    NoActiveGame,
}

/// Structural errors on snapshot restore. Restore fails closed: a malformed
/// snapshot never produces a usable instance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("expected {expected} hands, got {got}")]
    HandCount { expected: usize, got: usize },
    #[error("not a valid card: rank {rank}, suit {suit}, value {value}")]
    InvalidCard { rank: u8, suit: u8, value: u8 },
    #[error("seat index {0} out of range")]
    SeatOutOfRange(usize),
    #[error("active play does not classify as its recorded combo")]
    MalformedPlay,
    #[error("active play present without an owning seat")]
    MissingPlayOwner,
    #[error("seat {0} is out of the game but still marked in the round")]
    InconsistentFlags(usize),
    #[error("win order repeats seat {0}")]
    DuplicateWinner(usize),
    #[error("win order lists seat {0} but it is still in the game")]
    WinnerInGame(usize),
    #[error("card value {0} appears more than once")]
    DuplicateCard(u8),
    #[error("expected {expected} seats, got {got}")]
    SeatCount { expected: usize, got: usize },
}
