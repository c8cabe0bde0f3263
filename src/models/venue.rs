//! Venue model.
//!
//! A venue is one bookable field. Several venues may share a `name`
//! (a park) and differ by `field` label.

use serde::Serialize;

use super::WeeklyAvailability;

/// Venue identifier.
pub type VenueId = u32;

/// A physical field where games are played.
#[derive(Debug, Clone, Serialize)]
pub struct Venue {
    /// Unique venue identifier.
    pub id: VenueId,
    /// Site name.
    pub name: String,
    /// Field label within the site.
    pub field: String,
    /// Weekly opening hours.
    pub availability: WeeklyAvailability,
}

impl Venue {
    /// Creates a venue that is never open.
    pub fn new(id: VenueId) -> Self {
        Self {
            id,
            name: String::new(),
            field: String::new(),
            availability: WeeklyAvailability::closed(),
        }
    }

    /// Sets the site name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the field label.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Sets the opening hours.
    pub fn with_availability(mut self, availability: WeeklyAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Human-readable location, e.g. `"Riverside Park Field #2"`.
    pub fn location(&self) -> String {
        format!("{} Field #{}", self.name, self.field)
    }
}
