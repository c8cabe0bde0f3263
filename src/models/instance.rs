//! Complete scheduling input.

use serde::Serialize;

use super::{League, Team, Venue};

/// Leagues, teams and venues of one scheduling run.
///
/// Loaded from a case directory by `io::load_case` or produced by
/// `generator::InstanceGenerator`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Instance {
    /// League records.
    pub leagues: Vec<League>,
    /// Team records (all leagues).
    pub teams: Vec<Team>,
    /// Venue records.
    pub venues: Vec<Venue>,
}
