//! Multi-seat tournament state machine: seat occupancy, readiness, lifecycle
//! status, cross-game scoring, and the per-round game it spawns. The engine
//! assumes serialized access to a given tournament; storage-level locking is
//! a collaborator concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deck::Deck;
use crate::errors::{SnapshotError, TourneyError};
use crate::game::{GameState, NUM_PLAYERS};
use crate::snapshot::GameSnapshot;

/// Tournament lifecycle. Terminal once `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourneyStatus {
    /// Seats not all filled
    Waiting,
    /// All four seats filled, not everyone ready
    Starting,
    /// All ready; an active game exists
    InProgress,
    /// A game just completed and the target score is not reached
    BetweenGames,
    /// Target score reached
    Completed,
}

/// A tournament slot: empty, human-occupied, or bot-occupied. Carries
/// cumulative score across games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub position: usize,
    pub player_id: Option<String>,
    pub player_name: Option<String>,
    pub connection_id: Option<String>,
    pub score: u32,
    pub games_won: u32,
    pub last_game_points: u32,
    pub ready: bool,
    pub is_bot: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_profile: Option<String>,
    /// Unix timestamp of the disconnect, if the occupant dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disconnected_at: Option<i64>,
}

impl Seat {
    pub fn new(position: usize) -> Self {
        Self {
            position,
            player_id: None,
            player_name: None,
            connection_id: None,
            score: 0,
            games_won: 0,
            last_game_points: 0,
            ready: false,
            is_bot: false,
            bot_profile: None,
            disconnected_at: None,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.player_id.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.player_id.is_none()
    }

    pub fn clear(&mut self) {
        *self = Seat::new(self.position);
    }
}

/// One completed game in the tournament history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_number: u32,
    pub win_order: Vec<usize>,
    pub points_awarded: [u32; NUM_PLAYERS],
}

/// Leaderboard row, sorted by total score descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub position: usize,
    pub player_name: Option<String>,
    pub total_score: u32,
    pub last_game_points: u32,
    pub games_won: u32,
}

/// Serializable form of a [`Tourney`], the stable persistence contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourneySnapshot {
    pub tourney_id: String,
    pub status: TourneyStatus,
    pub target_score: u32,
    pub seats: Vec<Seat>,
    pub current_game: Option<GameSnapshot>,
    pub game_history: Vec<GameSummary>,
}

/// Tournament state machine. Created once per multi-round session; mutates
/// seats and status as rounds complete.
#[derive(Debug, Clone)]
pub struct Tourney {
    tourney_id: String,
    status: TourneyStatus,
    target_score: u32,
    seats: [Seat; NUM_PLAYERS],
    current_game: Option<GameSnapshot>,
    game_history: Vec<GameSummary>,
}

impl Tourney {
    pub const GLOBAL_ID: &'static str = "global";
    pub const TARGET_SCORE: u32 = 21;
    /// Fixed points for 1st/2nd/3rd/4th finish.
    pub const POINTS_AWARDED: [u32; NUM_PLAYERS] = [4, 2, 1, 0];

    pub fn new(tourney_id: impl Into<String>) -> Self {
        Self {
            tourney_id: tourney_id.into(),
            status: TourneyStatus::Waiting,
            target_score: Self::TARGET_SCORE,
            seats: std::array::from_fn(Seat::new),
            current_game: None,
            game_history: Vec::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.tourney_id
    }

    pub fn status(&self) -> TourneyStatus {
        self.status
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn set_target_score(&mut self, target: u32) {
        self.target_score = target;
    }

    pub fn seats(&self) -> &[Seat; NUM_PLAYERS] {
        &self.seats
    }

    pub fn seat_mut(&mut self, position: usize) -> Option<&mut Seat> {
        self.seats.get_mut(position)
    }

    pub fn current_game(&self) -> Option<&GameSnapshot> {
        self.current_game.as_ref()
    }

    pub fn game_history(&self) -> &[GameSummary] {
        &self.game_history
    }

    /// 1-based number of the game currently being played or about to start.
    pub fn current_game_number(&self) -> u32 {
        self.game_history.len() as u32 + if self.current_game.is_some() { 1 } else { 0 }
    }

    // ── Seat operations ──────────────────────────────────────────

    /// Claim a seat for a human player. Reclaiming an already-held seat is
    /// idempotent and just refreshes the connection reference. Returns the
    /// seat position.
    pub fn claim_seat(
        &mut self,
        player_id: &str,
        player_name: &str,
        connection_id: &str,
        seat_position: Option<usize>,
    ) -> Result<usize, TourneyError> {
        if !matches!(self.status, TourneyStatus::Waiting | TourneyStatus::Starting) {
            return Err(TourneyError::InProgress);
        }

        if let Some(existing) = self.seat_by_player_mut(player_id) {
            existing.connection_id = Some(connection_id.to_string());
            existing.disconnected_at = None;
            return Ok(existing.position);
        }

        let position = match seat_position {
            Some(pos) => {
                if pos >= NUM_PLAYERS {
                    return Err(TourneyError::InvalidSeat(pos));
                }
                if self.seats[pos].is_occupied() {
                    return Err(TourneyError::SeatTaken(pos));
                }
                pos
            }
            None => self
                .seats
                .iter()
                .position(|s| s.is_empty())
                .ok_or(TourneyError::Full)?,
        };

        let seat = &mut self.seats[position];
        seat.player_id = Some(player_id.to_string());
        seat.player_name = Some(player_name.to_string());
        seat.connection_id = Some(connection_id.to_string());
        seat.score = 0;
        seat.games_won = 0;
        seat.last_game_points = 0;
        seat.ready = false;
        seat.is_bot = false;
        seat.bot_profile = None;
        seat.disconnected_at = None;

        self.maybe_enter_starting();
        Ok(position)
    }

    pub fn leave_tourney(&mut self, player_id: &str) -> Result<(), TourneyError> {
        if !matches!(self.status, TourneyStatus::Waiting | TourneyStatus::Starting) {
            return Err(TourneyError::InProgress);
        }
        let seat = self
            .seat_by_player_mut(player_id)
            .ok_or(TourneyError::NotInTourney)?;
        seat.clear();
        if self.occupied_count() < NUM_PLAYERS {
            self.status = TourneyStatus::Waiting;
        }
        Ok(())
    }

    /// Seat a bot. Bots are always ready.
    pub fn add_bot(
        &mut self,
        seat_position: usize,
        bot_profile: Option<&str>,
    ) -> Result<(), TourneyError> {
        if !matches!(self.status, TourneyStatus::Waiting | TourneyStatus::Starting) {
            return Err(TourneyError::InProgress);
        }
        if seat_position >= NUM_PLAYERS {
            return Err(TourneyError::InvalidSeat(seat_position));
        }
        if self.seats[seat_position].is_occupied() {
            return Err(TourneyError::SeatTaken(seat_position));
        }

        let bot_id = format!("bot_{}", &Uuid::new_v4().simple().to_string()[..8]);
        let seat = &mut self.seats[seat_position];
        seat.player_id = Some(bot_id);
        seat.player_name = Some(format!("Bot_{}", seat_position + 1));
        seat.connection_id = None;
        seat.score = 0;
        seat.games_won = 0;
        seat.last_game_points = 0;
        seat.ready = true;
        seat.is_bot = true;
        seat.bot_profile = bot_profile.map(str::to_string);
        seat.disconnected_at = None;

        self.maybe_enter_starting();
        Ok(())
    }

    pub fn kick_bot(&mut self, seat_position: usize) -> Result<(), TourneyError> {
        if !matches!(self.status, TourneyStatus::Waiting | TourneyStatus::Starting) {
            return Err(TourneyError::InProgress);
        }
        if seat_position >= NUM_PLAYERS {
            return Err(TourneyError::InvalidSeat(seat_position));
        }
        let seat = &mut self.seats[seat_position];
        if seat.is_empty() {
            return Err(TourneyError::SeatEmpty(seat_position));
        }
        if !seat.is_bot {
            return Err(TourneyError::NotABot(seat_position));
        }
        seat.clear();
        if self.occupied_count() < NUM_PLAYERS {
            self.status = TourneyStatus::Waiting;
        }
        Ok(())
    }

    /// Mark a player ready. Once every occupied seat is ready the tournament
    /// moves to `InProgress`.
    pub fn set_ready(&mut self, player_id: &str, ready: bool) -> Result<(), TourneyError> {
        if !matches!(
            self.status,
            TourneyStatus::Starting | TourneyStatus::BetweenGames
        ) {
            return Err(TourneyError::InvalidState);
        }
        let seat = self
            .seat_by_player_mut(player_id)
            .ok_or(TourneyError::NotInTourney)?;
        seat.ready = ready;
        if self.all_ready() {
            self.status = TourneyStatus::InProgress;
        }
        Ok(())
    }

    // ── Game lifecycle ───────────────────────────────────────────

    /// Deal a fresh game for the next round. Hard error when any seat is
    /// unfilled — that is a caller bug, not a player mistake. Clears every
    /// ready flag and stores the dealt game's snapshot as the active game.
    pub fn start_game(&mut self, seed: Option<u64>) -> Result<GameState, TourneyError> {
        let occupied = self.occupied_count();
        if occupied != NUM_PLAYERS {
            return Err(TourneyError::SeatsIncomplete {
                expected: NUM_PLAYERS,
                got: occupied,
            });
        }

        let mut deck = Deck::new_with_seed(seed.unwrap_or_else(rand::random));
        let game = GameState::deal(&mut deck);
        self.current_game = Some(game.snapshot());

        for seat in &mut self.seats {
            seat.ready = false;
        }
        Ok(game)
    }

    /// Record a finished game: award fixed points by finish order, bump the
    /// winner's games-won count, append a history record, and advance the
    /// lifecycle. Returns `true` when the tournament is complete.
    pub fn complete_game(&mut self, win_order: &[usize]) -> Result<bool, TourneyError> {
        if self.current_game.is_none() {
            return Err(TourneyError::NoActiveGame);
        }
        if let Some(&bad) = win_order.iter().find(|&&p| p >= NUM_PLAYERS) {
            return Err(TourneyError::InvalidSeat(bad));
        }

        for (i, &position) in win_order.iter().enumerate() {
            let points = Self::POINTS_AWARDED[i.min(NUM_PLAYERS - 1)];
            let seat = &mut self.seats[position];
            seat.score += points;
            seat.last_game_points = points;
            if i == 0 {
                seat.games_won += 1;
            }
        }

        self.game_history.push(GameSummary {
            game_number: self.game_history.len() as u32 + 1,
            win_order: win_order.to_vec(),
            points_awarded: Self::POINTS_AWARDED,
        });
        self.current_game = None;

        let max_score = self.seats.iter().map(|s| s.score).max().unwrap_or(0);
        let complete = max_score >= self.target_score;
        if complete {
            self.status = TourneyStatus::Completed;
        } else {
            self.status = TourneyStatus::BetweenGames;
            // Bots never sit out the next round.
            for seat in &mut self.seats {
                if seat.is_bot {
                    seat.ready = true;
                }
            }
        }
        Ok(complete)
    }

    /// Free seats whose occupant has been disconnected for longer than the
    /// grace period. Only meaningful before a tournament is underway; a full
    /// room reverts to `Waiting` when seats open up. Returns whether any seat
    /// was cleared. Timestamps are explicit so callers control the clock.
    pub fn cleanup_disconnected(&mut self, grace_secs: i64, now: i64) -> bool {
        if !matches!(self.status, TourneyStatus::Waiting | TourneyStatus::Starting) {
            return false;
        }
        let mut removed = false;
        for seat in &mut self.seats {
            if let Some(at) = seat.disconnected_at {
                if seat.is_occupied() && now - at > grace_secs {
                    seat.clear();
                    removed = true;
                }
            }
        }
        if removed && self.occupied_count() < NUM_PLAYERS {
            self.status = TourneyStatus::Waiting;
        }
        removed
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut rows: Vec<LeaderboardEntry> = self
            .seats
            .iter()
            .filter(|s| s.is_occupied())
            .map(|s| LeaderboardEntry {
                position: s.position,
                player_name: s.player_name.clone(),
                total_score: s.score,
                last_game_points: s.last_game_points,
                games_won: s.games_won,
            })
            .collect();
        rows.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        rows
    }

    // ── Snapshot ─────────────────────────────────────────────────

    pub fn snapshot(&self) -> TourneySnapshot {
        TourneySnapshot {
            tourney_id: self.tourney_id.clone(),
            status: self.status,
            target_score: self.target_score,
            seats: self.seats.to_vec(),
            current_game: self.current_game.clone(),
            game_history: self.game_history.clone(),
        }
    }

    /// Rebuild from a snapshot. Missing trailing seats are re-created empty;
    /// anything else malformed fails closed.
    pub fn restore(snapshot: &TourneySnapshot) -> Result<Self, SnapshotError> {
        if snapshot.seats.len() > NUM_PLAYERS {
            return Err(SnapshotError::SeatCount {
                expected: NUM_PLAYERS,
                got: snapshot.seats.len(),
            });
        }
        let mut seats: [Seat; NUM_PLAYERS] = std::array::from_fn(Seat::new);
        for (i, seat) in snapshot.seats.iter().enumerate() {
            if seat.position != i {
                return Err(SnapshotError::SeatOutOfRange(seat.position));
            }
            seats[i] = seat.clone();
        }
        // Validate the embedded game before accepting the tournament.
        if let Some(game) = &snapshot.current_game {
            game.reconstruct()?;
        }
        Ok(Self {
            tourney_id: snapshot.tourney_id.clone(),
            status: snapshot.status,
            target_score: snapshot.target_score,
            seats,
            current_game: snapshot.current_game.clone(),
            game_history: snapshot.game_history.clone(),
        })
    }

    // ── Helpers ──────────────────────────────────────────────────

    pub fn seat_by_player(&self, player_id: &str) -> Option<&Seat> {
        self.seats
            .iter()
            .find(|s| s.player_id.as_deref() == Some(player_id))
    }

    fn seat_by_player_mut(&mut self, player_id: &str) -> Option<&mut Seat> {
        self.seats
            .iter_mut()
            .find(|s| s.player_id.as_deref() == Some(player_id))
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn ready_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.is_occupied() && s.ready)
            .count()
    }

    pub fn all_ready(&self) -> bool {
        let occupied: Vec<&Seat> = self.seats.iter().filter(|s| s.is_occupied()).collect();
        !occupied.is_empty() && occupied.iter().all(|s| s.ready)
    }

    fn maybe_enter_starting(&mut self) {
        if self.occupied_count() == NUM_PLAYERS && self.status == TourneyStatus::Waiting {
            self.status = TourneyStatus::Starting;
        }
    }
}

impl Default for Tourney {
    fn default() -> Self {
        Self::new(Self::GLOBAL_ID)
    }
}
