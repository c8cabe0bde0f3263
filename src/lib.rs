//! Fixture scheduling for recreational sports leagues.
//!
//! Turns leagues, teams and venues with weekly recurring availability into a
//! season of games: every pair of teams is matched by round-robin rotation,
//! and each fixture is greedily placed in the earliest slot that fits both
//! teams' windows and a free venue field.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Interval`, `WeeklyAvailability`, `Team`,
//!   `Venue`, `League`, `Game`, `Instance`
//! - **`index`**: Interval index over (day, week) buckets for venue occupancy
//! - **`pairing`**: Circle-method round-robin pairing with byes
//! - **`scheduler`**: Slot search, season driver and schedule KPIs
//! - **`validation`**: Input integrity checks (duplicate IDs, orphan teams,
//!   unschedulable leagues)
//! - **`config`**: Scheduler parameters, loadable from TOML
//! - **`io`**: CSV case tables in, CSV/JSON schedules out
//! - **`generator`**: Seeded synthetic instances
//!
//! # Example
//!
//! ```
//! use league_schedule::models::{League, Team, Venue, WeeklyAvailability};
//! use league_schedule::build_schedule;
//!
//! let hours = WeeklyAvailability::closed().with_day(2, 18.0, 22.0).unwrap();
//! let leagues = vec![League::new(1, 1, 2, 2).with_season("Fall")];
//! let teams = vec![
//!     Team::new(1, 1).with_availability(hours.clone()),
//!     Team::new(2, 1).with_availability(hours.clone()),
//! ];
//! let venues = vec![Venue::new(1).with_availability(hours)];
//!
//! let games = build_schedule(&leagues, &teams, &venues);
//! assert_eq!(games.len(), 2);
//! assert!(games.iter().all(|g| g.day() == 2 && g.start() == 18.0));
//! ```
//!
//! # References
//!
//! - Kirkman (1847), circle method for round-robin tournaments
//! - Cormen et al. (2009), "Introduction to Algorithms", §14.3 Interval trees

pub mod config;
pub mod error;
pub mod generator;
pub mod index;
pub mod io;
pub mod models;
pub mod pairing;
pub mod scheduler;
pub mod validation;

pub use config::{SchedulerConfig, SeasonBounds};
pub use error::{Result, ScheduleError};
pub use scheduler::{build_schedule, Scheduler};
