//! Seeded synthetic instance generator.
//!
//! Produces leagues, teams and venues with plausible weekly availability
//! for demos, load tests and property tests. The same seed always yields
//! the same instance.
//!
//! # Shape
//! - Teams are available on 3 to 6 random weekdays, in evening windows
//!   starting between 16:00 and 19:00 and lasting 3 to 5 hours.
//! - Venues are open six days a week, opening between 07:00 and 09:00
//!   and closing between 20:00 and 22:00.
//! - Leagues run 8 to 12 weeks from a start week in 1..=20 and target one
//!   to two games per week.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{League, Team, Venue, WeeklyAvailability, DAYS_PER_WEEK};

pub use crate::models::Instance;

const SEASONS: [&str; 4] = ["Spring", "Summer", "Fall", "Winter"];
const SITES: [&str; 5] = ["Riverside", "Oak Hill", "Lakeview", "Cedar", "Northgate"];

/// Builder-style generator for [`Instance`]s.
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    seed: u64,
    leagues: usize,
    teams_per_league: usize,
    venues: usize,
}

impl InstanceGenerator {
    /// Creates a generator with 2 leagues of 6 teams and 3 venues.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            leagues: 2,
            teams_per_league: 6,
            venues: 3,
        }
    }

    /// Sets the number of leagues.
    pub fn with_leagues(mut self, leagues: usize) -> Self {
        self.leagues = leagues;
        self
    }

    /// Sets the roster size of every league.
    pub fn with_teams_per_league(mut self, teams: usize) -> Self {
        self.teams_per_league = teams;
        self
    }

    /// Sets the number of venues.
    pub fn with_venues(mut self, venues: usize) -> Self {
        self.venues = venues;
        self
    }

    /// Generates the instance.
    pub fn generate(&self) -> Instance {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut instance = Instance::default();

        for v in 0..self.venues {
            let id = v as u32 + 1;
            instance.venues.push(
                Venue::new(id)
                    .with_name(SITES[v % SITES.len()])
                    .with_field((v / SITES.len() + 1).to_string())
                    .with_availability(venue_hours(&mut rng)),
            );
        }

        let mut next_team = 1u32;
        for l in 0..self.leagues {
            let id = l as u32 + 1;
            let start = rng.random_range(1..=20u32);
            let weeks = rng.random_range(8..=12u32);
            let target = rng.random_range(weeks..=2 * weeks);
            instance.leagues.push(
                League::new(id, start, start + weeks - 1, target)
                    .with_name(format!("League {id}"))
                    .with_season(SEASONS[rng.random_range(0..SEASONS.len())]),
            );
            for _ in 0..self.teams_per_league {
                instance.teams.push(
                    Team::new(next_team, id)
                        .with_name(format!("Team {next_team}"))
                        .with_availability(team_hours(&mut rng)),
                );
                next_team += 1;
            }
        }

        instance
    }
}

fn half_hours<R: Rng>(rng: &mut R, lo: u32, hi: u32) -> f64 {
    f64::from(rng.random_range(lo..=hi)) * 0.5
}

fn team_hours<R: Rng>(rng: &mut R) -> WeeklyAvailability {
    let open_days = rng.random_range(3..=6usize);
    let mut days: Vec<u8> = (1..=DAYS_PER_WEEK).collect();
    // Partial Fisher-Yates: the first `open_days` entries are a random subset.
    for i in 0..open_days {
        let j = rng.random_range(i..days.len());
        days.swap(i, j);
    }
    let mut availability = WeeklyAvailability::closed();
    for &day in &days[..open_days] {
        let start = half_hours(rng, 32, 38);
        let end = start + half_hours(rng, 6, 10);
        let set = availability.set_day(day, start, end.min(24.0));
        debug_assert!(set.is_ok(), "generated team window out of range: {set:?}");
    }
    availability
}

fn venue_hours<R: Rng>(rng: &mut R) -> WeeklyAvailability {
    let closed = rng.random_range(1..=DAYS_PER_WEEK);
    let mut availability = WeeklyAvailability::closed();
    for day in (1..=DAYS_PER_WEEK).filter(|&d| d != closed) {
        let start = half_hours(rng, 14, 18);
        let end = half_hours(rng, 40, 44);
        let set = availability.set_day(day, start, end);
        debug_assert!(set.is_ok(), "generated venue window out of range: {set:?}");
    }
    availability
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sizes() {
        let inst = InstanceGenerator::new(7)
            .with_leagues(3)
            .with_teams_per_league(4)
            .with_venues(6)
            .generate();
        assert_eq!(inst.leagues.len(), 3);
        assert_eq!(inst.teams.len(), 12);
        assert_eq!(inst.venues.len(), 6);
        assert_eq!(inst.venues[5].location(), "Riverside Field #2");
        for league in &inst.leagues {
            assert_eq!(inst.teams.iter().filter(|t| t.league_id == league.id).count(), 4);
            assert!(league.season_end_week >= league.season_start_week);
            assert!(league.target_games_per_team > 0);
        }
    }

    #[test]
    fn test_generated_instance_feeds_io_layer() {
        let inst: crate::models::Instance = InstanceGenerator::new(5).with_leagues(1).generate();
        let dir = tempfile::tempdir().unwrap();
        crate::io::write_instance(dir.path(), &inst).unwrap();
        let loaded: Instance = crate::io::load_case(dir.path()).unwrap();
        assert_eq!(loaded.leagues.len(), 1);
        assert_eq!(loaded.teams.len(), inst.teams.len());
    }

    #[test]
    fn test_same_seed_same_instance() {
        let a = InstanceGenerator::new(42).generate();
        let b = InstanceGenerator::new(42).generate();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_availability_shape() {
        let inst = InstanceGenerator::new(3).generate();
        for team in &inst.teams {
            let open = team.availability.open_days().count();
            assert!((3..=6).contains(&open), "team open {open} days");
        }
        for venue in &inst.venues {
            assert_eq!(venue.availability.open_days().count(), 6);
        }
    }
}
