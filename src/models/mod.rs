//! Scheduling domain models.
//!
//! Provides the record types the scheduler consumes and produces.
//!
//! # Domain Mappings
//!
//! | league-schedule | Meaning |
//! |-----------------|---------|
//! | Team | Roster entry of one league, with weekly availability |
//! | Venue | One bookable field, with weekly opening hours |
//! | League | Season bounds and target number of games |
//! | Game | Committed booking of two teams at a venue |
//! | Instance | Leagues, teams and venues of one run |
//! | Interval | Time range on one day of one week |

mod availability;
mod game;
mod instance;
mod interval;
mod league;
mod team;
mod venue;

pub use availability::{DayWindow, WeeklyAvailability};
pub use game::Game;
pub use instance::Instance;
pub use interval::{Interval, DAYS_PER_WEEK, HOURS_PER_DAY};
pub use league::{League, LeagueId};
pub use team::{Team, TeamId};
pub use venue::{Venue, VenueId};
