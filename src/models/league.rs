//! League model.
//!
//! A league is a season of round-robin play among the teams that reference
//! it. The record here is the immutable input; the scheduler derives the
//! roster and pairing state from it at run time.

use serde::Serialize;

use crate::config::SeasonBounds;

/// League identifier.
pub type LeagueId = u32;

/// Season definition of one league.
#[derive(Debug, Clone, Serialize)]
pub struct League {
    /// Unique league identifier.
    pub id: LeagueId,
    /// Display name.
    pub name: String,
    /// Season label copied onto every game (e.g. `"Fall 2025"`).
    pub season: String,
    /// First week of play.
    pub season_start_week: u32,
    /// Last week of play (see [`SeasonBounds`]).
    pub season_end_week: u32,
    /// Games each team should play over the season.
    pub target_games_per_team: u32,
}

impl League {
    /// Creates a league spanning `start_week..=end_week`.
    pub fn new(id: LeagueId, start_week: u32, end_week: u32, target_games_per_team: u32) -> Self {
        Self {
            id,
            name: String::new(),
            season: String::new(),
            season_start_week: start_week,
            season_end_week: end_week,
            target_games_per_team,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the season label.
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Number of weeks of play, saturating at `u32::MAX`.
    pub fn num_weeks(&self, bounds: SeasonBounds) -> u32 {
        match bounds {
            SeasonBounds::Inclusive => self
                .season_end_week
                .checked_sub(self.season_start_week)
                .map_or(0, |d| d.saturating_add(1)),
            SeasonBounds::Exclusive => self.season_end_week.saturating_sub(self.season_start_week),
        }
    }

    /// Last week of play, `None` when the season has no weeks.
    pub fn last_week(&self, bounds: SeasonBounds) -> Option<u32> {
        let last = match bounds {
            SeasonBounds::Inclusive => self.season_end_week,
            SeasonBounds::Exclusive => self.season_end_week.checked_sub(1)?,
        };
        (last >= self.season_start_week).then_some(last)
    }

    /// The weeks of play, ascending.
    pub fn weeks(&self, bounds: SeasonBounds) -> impl Iterator<Item = u32> {
        let start = self.season_start_week;
        self.last_week(bounds)
            .into_iter()
            .flat_map(move |last| start..=last)
    }

    /// Games per team per week, `round(target / num_weeks)` rounding half up.
    ///
    /// Zero when the season has no weeks.
    pub fn games_per_week(&self, bounds: SeasonBounds) -> u32 {
        let weeks = self.num_weeks(bounds);
        if weeks == 0 {
            return 0;
        }
        (f64::from(self.target_games_per_team) / f64::from(weeks) + 0.5).floor() as u32
    }
}
