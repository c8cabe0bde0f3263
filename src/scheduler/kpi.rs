//! Schedule quality metrics (KPIs).
//!
//! Computes how far a schedule got towards each league's game target and
//! how heavily venues are booked.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Games per team | Games in which the team plays |
//! | Fulfilment rate | Σ min(played, target) / Σ target over rostered teams |
//! | Min / max games | Fewest and most games of any rostered team |
//! | Booked hours | Σ game duration per venue |

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Game, League, LeagueId, Team, TeamId, VenueId};

/// Per-league summary.
#[derive(Debug, Clone, Serialize)]
pub struct LeagueKpi {
    /// League identifier.
    pub league_id: LeagueId,
    /// Rostered teams.
    pub teams: usize,
    /// Games requested per team.
    pub target_games_per_team: u32,
    /// Games booked for the league.
    pub scheduled_games: usize,
    /// Fewest games of any rostered team.
    pub min_games_per_team: usize,
    /// Most games of any rostered team.
    pub max_games_per_team: usize,
    /// Fraction of requested team-games booked (0.0..=1.0).
    pub fulfilment_rate: f64,
}

/// Schedule performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleKpi {
    /// Total booked games.
    pub total_games: usize,
    /// Games per team (teams without games are listed with 0).
    pub games_by_team: HashMap<TeamId, usize>,
    /// Booked hours per venue.
    pub booked_hours_by_venue: HashMap<VenueId, f64>,
    /// Per-league summaries, in league input order.
    pub leagues: Vec<LeagueKpi>,
    /// Fraction of requested team-games booked across all leagues.
    pub fulfilment_rate: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from booked games and the scheduling input.
    pub fn calculate(games: &[Game], leagues: &[League], teams: &[Team]) -> Self {
        let mut games_by_team: HashMap<TeamId, usize> =
            teams.iter().map(|t| (t.id, 0)).collect();
        let mut booked_hours_by_venue: HashMap<VenueId, f64> = HashMap::new();
        let mut games_by_league: HashMap<LeagueId, usize> = HashMap::new();

        for game in games {
            *games_by_team.entry(game.team1_id()).or_default() += 1;
            *games_by_team.entry(game.team2_id()).or_default() += 1;
            *booked_hours_by_venue.entry(game.venue_id()).or_default() += game.duration();
            *games_by_league.entry(game.league_id()).or_default() += 1;
        }

        let mut requested: u64 = 0;
        let mut fulfilled: u64 = 0;
        let league_kpis = leagues
            .iter()
            .map(|league| {
                let played: Vec<usize> = teams
                    .iter()
                    .filter(|t| t.league_id == league.id)
                    .map(|t| games_by_team.get(&t.id).copied().unwrap_or(0))
                    .collect();
                let target = league.target_games_per_team as usize;
                let league_requested = (played.len() * target) as u64;
                let league_fulfilled: u64 = played.iter().map(|&p| p.min(target) as u64).sum();
                requested += league_requested;
                fulfilled += league_fulfilled;

                LeagueKpi {
                    league_id: league.id,
                    teams: played.len(),
                    target_games_per_team: league.target_games_per_team,
                    scheduled_games: games_by_league.get(&league.id).copied().unwrap_or(0),
                    min_games_per_team: played.iter().copied().min().unwrap_or(0),
                    max_games_per_team: played.iter().copied().max().unwrap_or(0),
                    fulfilment_rate: rate(league_fulfilled, league_requested),
                }
            })
            .collect();

        Self {
            total_games: games.len(),
            games_by_team,
            booked_hours_by_venue,
            leagues: league_kpis,
            fulfilment_rate: rate(fulfilled, requested),
        }
    }

    /// Whether every league reaches `min_rate` fulfilment.
    pub fn meets_threshold(&self, min_rate: f64) -> bool {
        self.leagues.iter().all(|l| l.fulfilment_rate >= min_rate)
    }
}

/// `done / requested`, or 1.0 when nothing was requested.
fn rate(done: u64, requested: u64) -> f64 {
    if requested == 0 {
        1.0
    } else {
        done as f64 / requested as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Venue, WeeklyAvailability};
    use crate::scheduler::build_schedule;

    fn setup(narrow: bool) -> (Vec<League>, Vec<Team>, Vec<Venue>) {
        let hours = if narrow {
            WeeklyAvailability::closed().with_day(1, 18.0, 20.0).unwrap()
        } else {
            WeeklyAvailability::every_day(18.0, 22.0).unwrap()
        };
        let leagues = vec![League::new(1, 1, 3, 3), League::new(2, 1, 3, 0)];
        let mut teams: Vec<Team> = (1..=4)
            .map(|id| Team::new(id, 1).with_availability(hours.clone()))
            .collect();
        teams.push(Team::new(9, 2));
        let venues = vec![Venue::new(5).with_availability(hours)];
        (leagues, teams, venues)
    }

    #[test]
    fn test_full_fulfilment() {
        let (leagues, teams, venues) = setup(false);
        let games = build_schedule(&leagues, &teams, &venues);
        let kpi = ScheduleKpi::calculate(&games, &leagues, &teams);

        assert_eq!(kpi.total_games, 6);
        assert_eq!(kpi.games_by_team[&1], 3);
        assert_eq!(kpi.games_by_team[&9], 0);
        assert!((kpi.booked_hours_by_venue[&5] - 12.0).abs() < 1e-10);
        assert!((kpi.fulfilment_rate - 1.0).abs() < 1e-10);

        let l1 = &kpi.leagues[0];
        assert_eq!(l1.teams, 4);
        assert_eq!(l1.scheduled_games, 6);
        assert_eq!((l1.min_games_per_team, l1.max_games_per_team), (3, 3));

        // Zero target counts as fulfilled.
        assert!((kpi.leagues[1].fulfilment_rate - 1.0).abs() < 1e-10);
        assert!(kpi.meets_threshold(1.0));
    }

    #[test]
    fn test_partial_fulfilment() {
        // One 2h slot per week: one game of two teams per week.
        let (leagues, teams, venues) = setup(true);
        let games = build_schedule(&leagues, &teams, &venues);
        let kpi = ScheduleKpi::calculate(&games, &leagues, &teams);

        assert_eq!(kpi.total_games, 3);
        // 6 team-games of 12 requested
        assert!((kpi.leagues[0].fulfilment_rate - 0.5).abs() < 1e-10);
        assert!(!kpi.meets_threshold(0.9));
    }

    #[test]
    fn test_empty_schedule() {
        let kpi = ScheduleKpi::calculate(&[], &[], &[]);
        assert_eq!(kpi.total_games, 0);
        assert!(kpi.leagues.is_empty());
        assert!((kpi.fulfilment_rate - 1.0).abs() < 1e-10);
    }
}
