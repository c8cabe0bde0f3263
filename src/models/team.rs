//! Team model.

use serde::Serialize;

use super::{LeagueId, WeeklyAvailability};

/// Team identifier.
pub type TeamId = u32;

/// A team competing in one league.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: TeamId,
    /// League the team plays in.
    pub league_id: LeagueId,
    /// Display name.
    pub name: String,
    /// Weekly recurring availability.
    pub availability: WeeklyAvailability,
}

impl Team {
    /// Creates a team with no availability.
    pub fn new(id: TeamId, league_id: LeagueId) -> Self {
        Self {
            id,
            league_id,
            name: String::new(),
            availability: WeeklyAvailability::closed(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the availability table.
    pub fn with_availability(mut self, availability: WeeklyAvailability) -> Self {
        self.availability = availability;
        self
    }
}
