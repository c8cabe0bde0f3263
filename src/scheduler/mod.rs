//! Greedy season scheduling and schedule metrics.
//!
//! # Algorithm
//!
//! `Scheduler` walks leagues, weeks, rounds and round-robin pairs in a fixed
//! order and hands each pair to `SlotFinder`, which books the first
//! feasible day, venue and start time. The result depends on that order;
//! it is greedy first-fit with no backtracking, so it is fast and
//! deterministic but not optimal.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes how well the schedule met each league's game
//! target and how heavily each venue is used.

mod driver;
mod kpi;
mod slot;

pub use driver::{build_schedule, LeagueState, Scheduler};
pub use kpi::{LeagueKpi, ScheduleKpi};
pub use slot::{SlotFinder, VenueBook};
