use tienlen_engine::cards::{Card, Rank, Suit};
use tienlen_engine::play::{Combo, Play};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn test_single_pair_triple_quad() {
    let five = |suit| card(Rank::Five, suit);

    assert_eq!(
        Play::determine_combo(&[five(Suit::Spades)]),
        Some(Combo::Single)
    );
    assert_eq!(
        Play::determine_combo(&[five(Suit::Spades), five(Suit::Hearts)]),
        Some(Combo::Pair)
    );
    assert_eq!(
        Play::determine_combo(&[five(Suit::Spades), five(Suit::Clubs), five(Suit::Hearts)]),
        Some(Combo::Triple)
    );
    assert_eq!(
        Play::determine_combo(&[
            five(Suit::Spades),
            five(Suit::Clubs),
            five(Suit::Diamonds),
            five(Suit::Hearts)
        ]),
        Some(Combo::Quad)
    );
}

#[test]
fn test_mismatched_ranks_are_invalid() {
    assert_eq!(
        Play::determine_combo(&[card(Rank::Five, Suit::Spades), card(Rank::Six, Suit::Spades)]),
        None
    );
    assert_eq!(
        Play::determine_combo(&[
            card(Rank::Five, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Six, Suit::Spades)
        ]),
        None
    );
}

#[test]
fn test_runs() {
    let run = [
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Five, Suit::Hearts),
    ];
    assert_eq!(Play::determine_combo(&run), Some(Combo::Run));

    // Order of submission does not matter.
    let shuffled = [run[2], run[0], run[1]];
    assert_eq!(Play::determine_combo(&shuffled), Some(Combo::Run));

    // Long run up to the ace.
    let long: Vec<Card> = (0..12)
        .map(|i| card(Rank::from_index(i).unwrap(), Suit::Spades))
        .collect();
    assert_eq!(Play::determine_combo(&long), Some(Combo::Run));
}

#[test]
fn test_runs_exclude_twos_and_gaps() {
    // K-A-2 is not a run: 2s never participate.
    let with_two = [
        card(Rank::King, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
    ];
    assert_eq!(Play::determine_combo(&with_two), None);

    // Two cards are never a run.
    assert!(!Play::is_run(&[
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Clubs)
    ]));

    // Gapped sequence.
    let gapped = [
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
    ];
    assert_eq!(Play::determine_combo(&gapped), None);
}

#[test]
fn test_bombs() {
    let bomb = [
        card(Rank::Three, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(Play::determine_combo(&bomb), Some(Combo::Bomb));

    // Four consecutive pairs also classify.
    let four_pair = [
        card(Rank::Six, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
    ];
    assert_eq!(Play::determine_combo(&four_pair), Some(Combo::Bomb));
}

#[test]
fn test_non_bombs() {
    // Pairs not consecutive.
    let gapped = [
        card(Rank::Three, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Six, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
    ];
    assert_eq!(Play::determine_combo(&gapped), None);

    // Two consecutive pairs are too short.
    assert!(!Play::is_bomb(&[
        card(Rank::Three, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
    ]));

    // Odd card count.
    assert!(!Play::is_bomb(&[
        card(Rank::Three, Suit::Spades),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
    ]));
}

#[test]
fn test_suited_detection() {
    let suited = [
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
    ];
    assert!(Play::is_suited(&suited));

    let mixed = [
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
    ];
    assert!(!Play::is_suited(&mixed));
    assert!(!Play::is_suited(&[]));
}

#[test]
fn test_matches_combo_requires_equal_run_length() {
    let play = tienlen_engine::rules::validate(
        None,
        &[
            card(Rank::Three, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
        ],
    )
    .unwrap();

    // Same length: matches.
    assert!(play.matches_combo(&[
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Eight, Suit::Hearts),
    ]));
    // Longer run does not answer a shorter one.
    assert!(!play.matches_combo(&[
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
    ]));
}

#[test]
fn test_play_strength_is_highest_card() {
    let play = tienlen_engine::rules::validate(
        None,
        &[card(Rank::Nine, Suit::Hearts), card(Rank::Nine, Suit::Spades)],
    )
    .unwrap();
    assert_eq!(play.combo(), Combo::Pair);
    assert_eq!(play.value(), card(Rank::Nine, Suit::Hearts).value());
    // Cards come back sorted.
    assert_eq!(
        play.cards(),
        &[card(Rank::Nine, Suit::Spades), card(Rank::Nine, Suit::Hearts)]
    );
}

#[test]
fn test_combo_display_labels() {
    assert_eq!(Combo::Single.to_string(), "Single");
    assert_eq!(Combo::Bomb.to_string(), "Bomb");
}
