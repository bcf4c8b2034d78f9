use crate::cards::{Card, Rank};
use crate::errors::MoveError;
use crate::play::{Combo, Play};

fn try_opening_move(cards: &[Card]) -> Result<Play, MoveError> {
    let combo = Play::determine_combo(cards).ok_or(MoveError::InvalidHand)?;
    let suited = Play::is_run(cards) && Play::is_suited(cards);
    Ok(Play::new(combo, cards, suited))
}

/// Chop table against a play made entirely of 2s: a Quad beats a single 2, a
/// bomb of (number of 2s + 2) consecutive pairs beats one, two, or three 2s.
fn try_chop(last_play: &Play, cards: &[Card]) -> Result<Play, MoveError> {
    let combo = Play::determine_combo(cards);
    let num_twos = last_play.cards().len();

    if num_twos == 1 && combo == Some(Combo::Quad) {
        return Ok(Play::new(Combo::Quad, cards, false));
    }
    if combo == Some(Combo::Bomb) && cards.len() == (num_twos + 2) * 2 {
        return Ok(Play::new(Combo::Bomb, cards, false));
    }
    Err(MoveError::InvalidChop)
}

fn try_standard_move(last_play: &Play, cards: &[Card]) -> Result<Play, MoveError> {
    if !last_play.matches_combo(cards) {
        // Special case: chopping 2s
        if last_play.cards()[0].rank == Rank::Two {
            return try_chop(last_play, cards);
        }
        return Err(MoveError::WrongCombo(last_play.combo()));
    }

    if last_play.combo() == Combo::Run && last_play.suited() && !Play::is_suited(cards) {
        return Err(MoveError::UnsuitedRun);
    }

    let suited = last_play.combo() == Combo::Run && last_play.suited();
    let attempt = Play::new(last_play.combo(), cards, suited);

    if last_play.value() >= attempt.value() {
        return Err(MoveError::TooWeak);
    }
    Ok(attempt)
}

/// Validate a candidate card set against the active play.
///
/// `last_play` is `None` when the acting seat has power (opening move): any
/// classifiable combination is accepted. Otherwise the candidate must match
/// the active combination kind and beat its strength, unless a chop applies.
///
/// Pure: no side effects, and hand ownership is not consulted here — that is
/// the game state machine's job.
///
/// ```
/// use tienlen_engine::cards::{Card, Rank, Suit};
/// use tienlen_engine::rules::validate;
///
/// let three_spades = Card::new(Rank::Three, Suit::Spades);
/// let play = validate(None, &[three_spades]).expect("opening single is legal");
/// assert_eq!(play.value(), 0);
///
/// let four_clubs = Card::new(Rank::Four, Suit::Clubs);
/// assert!(validate(Some(&play), &[four_clubs]).is_ok());
/// assert!(validate(Some(&play), &[three_spades]).is_err());
/// ```
pub fn validate(last_play: Option<&Play>, cards: &[Card]) -> Result<Play, MoveError> {
    match last_play {
        None => try_opening_move(cards),
        Some(last) => try_standard_move(last, cards),
    }
}
