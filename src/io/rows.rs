//! Flat CSV row types.
//!
//! Column names follow the tabular input format: camelCase identifiers and
//! one `d{day}Start` / `d{day}End` pair per weekday. Empty cells are
//! closed days.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{League, Team, Venue, WeeklyAvailability, DAYS_PER_WEEK};

type Bounds = [(Option<f64>, Option<f64>); DAYS_PER_WEEK as usize];

/// Defines a row struct with the given leading columns followed by the
/// fourteen weekday columns.
macro_rules! weekly_row {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $($(#[$fmeta])* pub $field: $ty,)*
            /// Day 1 opening hour; empty when closed.
            pub d1_start: Option<f64>,
            /// Day 1 closing hour; empty when closed.
            pub d1_end: Option<f64>,
            /// Day 2 opening hour; empty when closed.
            pub d2_start: Option<f64>,
            /// Day 2 closing hour; empty when closed.
            pub d2_end: Option<f64>,
            /// Day 3 opening hour; empty when closed.
            pub d3_start: Option<f64>,
            /// Day 3 closing hour; empty when closed.
            pub d3_end: Option<f64>,
            /// Day 4 opening hour; empty when closed.
            pub d4_start: Option<f64>,
            /// Day 4 closing hour; empty when closed.
            pub d4_end: Option<f64>,
            /// Day 5 opening hour; empty when closed.
            pub d5_start: Option<f64>,
            /// Day 5 closing hour; empty when closed.
            pub d5_end: Option<f64>,
            /// Day 6 opening hour; empty when closed.
            pub d6_start: Option<f64>,
            /// Day 6 closing hour; empty when closed.
            pub d6_end: Option<f64>,
            /// Day 7 opening hour; empty when closed.
            pub d7_start: Option<f64>,
            /// Day 7 closing hour; empty when closed.
            pub d7_end: Option<f64>,
        }

        impl $name {
            fn bounds(&self) -> Bounds {
                [
                    (self.d1_start, self.d1_end),
                    (self.d2_start, self.d2_end),
                    (self.d3_start, self.d3_end),
                    (self.d4_start, self.d4_end),
                    (self.d5_start, self.d5_end),
                    (self.d6_start, self.d6_end),
                    (self.d7_start, self.d7_end),
                ]
            }

            fn set_bounds(&mut self, b: Bounds) {
                (self.d1_start, self.d1_end) = b[0];
                (self.d2_start, self.d2_end) = b[1];
                (self.d3_start, self.d3_end) = b[2];
                (self.d4_start, self.d4_end) = b[3];
                (self.d5_start, self.d5_end) = b[4];
                (self.d6_start, self.d6_end) = b[5];
                (self.d7_start, self.d7_end) = b[6];
            }
        }
    };
}

weekly_row! {
    /// One line of `team.csv`.
    TeamRow {
        /// Team identifier.
        team_id: u32,
        /// League the team plays in.
        league_id: u32,
        /// Team display name.
        name: String,
    }
}

weekly_row! {
    /// One line of `venue.csv`.
    VenueRow {
        /// Venue identifier.
        venue_id: u32,
        /// Site name.
        name: String,
        /// Field label within the site.
        field: String,
    }
}

/// One line of `league.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRow {
    /// League identifier.
    pub league_id: u32,
    /// League display name.
    pub league_name: String,
    /// Season label.
    pub season: String,
    /// First week of play.
    pub season_start: u32,
    /// Last week of play.
    pub season_end: u32,
    /// Games each team should play.
    pub number_of_games: u32,
}

fn to_bounds(availability: &WeeklyAvailability) -> Bounds {
    let mut bounds: Bounds = [(None, None); DAYS_PER_WEEK as usize];
    for day in availability.open_days() {
        if let Some(w) = availability.window(day) {
            bounds[usize::from(day) - 1] = (Some(w.start), Some(w.end));
        }
    }
    bounds
}

impl TeamRow {
    /// Converts to a validated team.
    pub fn into_team(self) -> Result<Team> {
        let availability = WeeklyAvailability::from_bounds(self.bounds())?;
        Ok(Team::new(self.team_id, self.league_id)
            .with_name(self.name)
            .with_availability(availability))
    }
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        let mut row = Self {
            team_id: team.id,
            league_id: team.league_id,
            name: team.name.clone(),
            d1_start: None,
            d1_end: None,
            d2_start: None,
            d2_end: None,
            d3_start: None,
            d3_end: None,
            d4_start: None,
            d4_end: None,
            d5_start: None,
            d5_end: None,
            d6_start: None,
            d6_end: None,
            d7_start: None,
            d7_end: None,
        };
        row.set_bounds(to_bounds(&team.availability));
        row
    }
}

impl VenueRow {
    /// Converts to a validated venue.
    pub fn into_venue(self) -> Result<Venue> {
        let availability = WeeklyAvailability::from_bounds(self.bounds())?;
        Ok(Venue::new(self.venue_id)
            .with_name(self.name)
            .with_field(self.field)
            .with_availability(availability))
    }
}

impl From<&Venue> for VenueRow {
    fn from(venue: &Venue) -> Self {
        let mut row = Self {
            venue_id: venue.id,
            name: venue.name.clone(),
            field: venue.field.clone(),
            d1_start: None,
            d1_end: None,
            d2_start: None,
            d2_end: None,
            d3_start: None,
            d3_end: None,
            d4_start: None,
            d4_end: None,
            d5_start: None,
            d5_end: None,
            d6_start: None,
            d6_end: None,
            d7_start: None,
            d7_end: None,
        };
        row.set_bounds(to_bounds(&venue.availability));
        row
    }
}

impl From<LeagueRow> for League {
    fn from(row: LeagueRow) -> Self {
        League::new(row.league_id, row.season_start, row.season_end, row.number_of_games)
            .with_name(row.league_name)
            .with_season(row.season)
    }
}

impl From<&League> for LeagueRow {
    fn from(league: &League) -> Self {
        Self {
            league_id: league.id,
            league_name: league.name.clone(),
            season: league.season.clone(),
            season_start: league.season_start_week,
            season_end: league.season_end_week,
            number_of_games: league.target_games_per_team,
        }
    }
}
