use tienlen_engine::errors::{SnapshotError, TourneyError};
use tienlen_engine::game::NUM_PLAYERS;
use tienlen_engine::tourney::{Tourney, TourneyStatus};

/// One human at seat 0, bots in the rest.
fn full_room() -> Tourney {
    let mut t = Tourney::new("t1");
    t.claim_seat("alice", "Alice", "conn-1", Some(0)).unwrap();
    for pos in 1..NUM_PLAYERS {
        t.add_bot(pos, None).unwrap();
    }
    t
}

#[test]
fn test_new_tourney_is_waiting_and_empty() {
    let t = Tourney::default();
    assert_eq!(t.id(), Tourney::GLOBAL_ID);
    assert_eq!(t.status(), TourneyStatus::Waiting);
    assert_eq!(t.target_score(), Tourney::TARGET_SCORE);
    assert_eq!(t.occupied_count(), 0);
    assert_eq!(t.current_game_number(), 0);
}

#[test]
fn test_claim_seat_explicit_and_first_free() {
    let mut t = Tourney::new("t1");
    assert_eq!(t.claim_seat("a", "A", "c1", Some(2)).unwrap(), 2);
    // No position requested: lowest free seat.
    assert_eq!(t.claim_seat("b", "B", "c2", None).unwrap(), 0);

    assert_eq!(
        t.claim_seat("c", "C", "c3", Some(2)),
        Err(TourneyError::SeatTaken(2))
    );
    assert_eq!(
        t.claim_seat("c", "C", "c3", Some(9)),
        Err(TourneyError::InvalidSeat(9))
    );
}

#[test]
fn test_reclaim_is_idempotent_and_refreshes_connection() {
    let mut t = Tourney::new("t1");
    t.claim_seat("alice", "Alice", "conn-1", Some(1)).unwrap();
    t.seat_mut(1).unwrap().disconnected_at = Some(500);

    let pos = t.claim_seat("alice", "Alice", "conn-2", None).unwrap();
    assert_eq!(pos, 1);
    let seat = &t.seats()[1];
    assert_eq!(seat.connection_id.as_deref(), Some("conn-2"));
    assert_eq!(seat.disconnected_at, None);
    assert_eq!(t.occupied_count(), 1);
}

#[test]
fn test_filling_all_seats_enters_starting() {
    let t = full_room();
    assert_eq!(t.status(), TourneyStatus::Starting);
    assert_eq!(t.occupied_count(), NUM_PLAYERS);
    // Bots are born ready.
    assert_eq!(t.ready_count(), NUM_PLAYERS - 1);
    assert!(!t.all_ready());
}

#[test]
fn test_ready_flow_enters_in_progress() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    assert_eq!(t.status(), TourneyStatus::InProgress);

    // Ready toggles are rejected outside Starting/BetweenGames.
    assert_eq!(
        t.set_ready("alice", false),
        Err(TourneyError::InvalidState)
    );
}

#[test]
fn test_leave_reverts_to_waiting() {
    let mut t = full_room();
    t.leave_tourney("alice").unwrap();
    assert_eq!(t.status(), TourneyStatus::Waiting);
    assert!(t.seats()[0].is_empty());
    assert_eq!(
        t.leave_tourney("alice"),
        Err(TourneyError::NotInTourney)
    );
}

#[test]
fn test_kick_bot() {
    let mut t = full_room();
    t.kick_bot(3).unwrap();
    assert!(t.seats()[3].is_empty());
    assert_eq!(t.status(), TourneyStatus::Waiting);

    assert_eq!(t.kick_bot(3), Err(TourneyError::SeatEmpty(3)));
    assert_eq!(t.kick_bot(0), Err(TourneyError::NotABot(0)));
}

#[test]
fn test_no_seat_changes_once_underway() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    assert_eq!(t.status(), TourneyStatus::InProgress);

    assert_eq!(
        t.claim_seat("bob", "Bob", "c9", None),
        Err(TourneyError::InProgress)
    );
    assert_eq!(t.leave_tourney("alice"), Err(TourneyError::InProgress));
    assert_eq!(t.add_bot(0, None), Err(TourneyError::InProgress));
    assert_eq!(t.kick_bot(1), Err(TourneyError::InProgress));
}

#[test]
fn test_start_game_requires_full_seats() {
    let mut t = Tourney::new("t1");
    t.claim_seat("alice", "Alice", "c1", None).unwrap();
    assert_eq!(
        t.start_game(Some(1)).unwrap_err(),
        TourneyError::SeatsIncomplete {
            expected: NUM_PLAYERS,
            got: 1
        }
    );
}

#[test]
fn test_start_game_deals_and_tracks_active_game() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();

    let game = t.start_game(Some(77)).unwrap();
    assert_eq!(game.hand(0).len(), 13);
    assert!(t.current_game().is_some());
    assert_eq!(t.current_game_number(), 1);
    // Ready flags are consumed by the deal.
    assert_eq!(t.ready_count(), 0);

    // Seeded starts are reproducible.
    let mut t2 = full_room();
    t2.set_ready("alice", true).unwrap();
    let game2 = t2.start_game(Some(77)).unwrap();
    for i in 0..NUM_PLAYERS {
        assert_eq!(game.hand(i), game2.hand(i));
    }
}

#[test]
fn test_complete_game_awards_points() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    t.start_game(Some(1)).unwrap();

    let complete = t.complete_game(&[2, 0, 3, 1]).unwrap();
    assert!(!complete);
    assert_eq!(t.status(), TourneyStatus::BetweenGames);
    assert_eq!(t.current_game(), None);

    let seats = t.seats();
    assert_eq!(seats[2].score, 4);
    assert_eq!(seats[0].score, 2);
    assert_eq!(seats[3].score, 1);
    assert_eq!(seats[1].score, 0);
    assert_eq!(seats[2].games_won, 1);
    assert_eq!(seats[2].last_game_points, 4);

    // Bots re-ready themselves between games; the human does not.
    assert!(t.seats()[1].ready);
    assert!(!t.seats()[0].ready);

    let history = t.game_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].game_number, 1);
    assert_eq!(history[0].win_order, vec![2, 0, 3, 1]);
}

#[test]
fn test_complete_game_requires_active_game() {
    let mut t = full_room();
    assert_eq!(
        t.complete_game(&[0, 1, 2, 3]),
        Err(TourneyError::NoActiveGame)
    );
}

#[test]
fn test_tournament_runs_to_target_score() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();

    // Seat 0 wins every game at 4 points apiece: 21 needs six wins.
    let mut games = 0;
    loop {
        games += 1;
        t.start_game(Some(games)).unwrap();
        let complete = t.complete_game(&[0, 1, 2, 3]).unwrap();
        if complete {
            break;
        }
        assert!(games < 20, "tournament must converge");
    }

    assert_eq!(games, 6);
    assert_eq!(t.status(), TourneyStatus::Completed);
    assert_eq!(t.seats()[0].score, 24);
    assert_eq!(t.seats()[0].games_won, 6);
    assert_eq!(t.game_history().len(), 6);
    // Completion stops the between-games bot auto-ready.
    assert_eq!(t.ready_count(), 0);
}

#[test]
fn test_leaderboard_sorted_by_score() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    t.start_game(Some(1)).unwrap();
    t.complete_game(&[3, 1, 0, 2]).unwrap();

    let board = t.leaderboard();
    assert_eq!(board.len(), NUM_PLAYERS);
    assert_eq!(board[0].position, 3);
    assert_eq!(board[0].total_score, 4);
    for w in board.windows(2) {
        assert!(w[0].total_score >= w[1].total_score);
    }
}

#[test]
fn test_cleanup_respects_grace_period() {
    let mut t = Tourney::new("t1");
    t.claim_seat("alice", "Alice", "c1", Some(0)).unwrap();
    t.seat_mut(0).unwrap().disconnected_at = Some(1000);

    // Exactly at the boundary: still within grace.
    assert!(!t.cleanup_disconnected(60, 1060));
    assert!(t.seats()[0].is_occupied());

    // One second past: seat is freed.
    assert!(t.cleanup_disconnected(60, 1061));
    assert!(t.seats()[0].is_empty());
    assert_eq!(t.status(), TourneyStatus::Waiting);
}

#[test]
fn test_cleanup_is_a_noop_once_underway() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    t.seat_mut(0).unwrap().disconnected_at = Some(0);

    assert!(!t.cleanup_disconnected(60, i64::MAX));
    assert!(t.seats()[0].is_occupied());
}

#[test]
fn test_snapshot_round_trip() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    t.start_game(Some(5)).unwrap();

    let snap = t.snapshot();
    let restored = Tourney::restore(&snap).unwrap();
    assert_eq!(restored.id(), t.id());
    assert_eq!(restored.status(), t.status());
    assert_eq!(restored.seats(), t.seats());
    assert_eq!(restored.current_game(), t.current_game());
    assert_eq!(restored.game_history(), t.game_history());
}

#[test]
fn test_restore_pads_missing_trailing_seats() {
    let mut t = Tourney::new("t1");
    t.claim_seat("alice", "Alice", "c1", Some(0)).unwrap();
    let mut snap = t.snapshot();
    snap.seats.truncate(2);

    let restored = Tourney::restore(&snap).unwrap();
    assert_eq!(restored.seats().len(), NUM_PLAYERS);
    assert!(restored.seats()[0].is_occupied());
    assert!(restored.seats()[3].is_empty());
}

#[test]
fn test_restore_rejects_misnumbered_seats() {
    let t = Tourney::new("t1");
    let mut snap = t.snapshot();
    snap.seats[1].position = 3;
    assert_eq!(
        Tourney::restore(&snap).unwrap_err(),
        SnapshotError::SeatOutOfRange(3)
    );
}

#[test]
fn test_restore_validates_embedded_game() {
    let mut t = full_room();
    t.set_ready("alice", true).unwrap();
    t.start_game(Some(5)).unwrap();

    let mut snap = t.snapshot();
    if let Some(game) = &mut snap.current_game {
        game.current_player = 9;
    }
    assert!(Tourney::restore(&snap).is_err());
}

#[test]
fn test_bot_identity() {
    let mut t = Tourney::new("t1");
    t.add_bot(2, Some("greedy")).unwrap();
    let seat = &t.seats()[2];
    assert!(seat.is_bot);
    assert!(seat.ready);
    assert_eq!(seat.player_name.as_deref(), Some("Bot_3"));
    assert_eq!(seat.bot_profile.as_deref(), Some("greedy"));
    assert!(seat.player_id.as_deref().unwrap().starts_with("bot_"));
}
