//! Game (committed booking) model.
//!
//! A game is created only when the slot search commits a booking and is
//! never modified afterwards.

use serde::Serialize;

use super::{Interval, LeagueId, TeamId, VenueId};

/// A scheduled match between two teams at one venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    team1_id: TeamId,
    team2_id: TeamId,
    league_id: LeagueId,
    week: u32,
    day: u8,
    season: String,
    start: f64,
    end: f64,
    venue_id: VenueId,
}

impl Game {
    /// Records a committed booking.
    pub(crate) fn new(
        team1_id: TeamId,
        team2_id: TeamId,
        league_id: LeagueId,
        season: impl Into<String>,
        slot: Interval,
        venue_id: VenueId,
    ) -> Self {
        Self {
            team1_id,
            team2_id,
            league_id,
            week: slot.week(),
            day: slot.day(),
            season: season.into(),
            start: slot.start(),
            end: slot.end(),
            venue_id,
        }
    }

    /// Home team.
    pub fn team1_id(&self) -> TeamId {
        self.team1_id
    }

    /// Away team.
    pub fn team2_id(&self) -> TeamId {
        self.team2_id
    }

    /// League of both teams.
    pub fn league_id(&self) -> LeagueId {
        self.league_id
    }

    /// Week of play.
    pub fn week(&self) -> u32 {
        self.week
    }

    /// Day of week (1..=7).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Season label.
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Start time (hours).
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End time (hours).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Booked venue.
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    /// Whether `team` plays in this game.
    pub fn involves(&self, team: TeamId) -> bool {
        self.team1_id == team || self.team2_id == team
    }

    /// The booked slot as an interval.
    pub fn slot(&self) -> Interval {
        Interval::from_parts(self.start, self.end, self.day, self.week)
    }

    /// Game length in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
