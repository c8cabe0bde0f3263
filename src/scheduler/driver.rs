//! Season driver: leagues → weeks → rounds → pairs.
//!
//! # Algorithm
//!
//! 1. Index every venue's opening hours for the configured year.
//! 2. For each league in input order, gather its roster (teams in input
//!    order) and build the initial pairing. Invalid leagues are skipped.
//! 3. For each week of the season, run `games_per_week` rounds over the
//!    current pairing, sending every non-bye pair to the slot finder.
//! 4. Rotate the pairing once per week.
//!
//! Venue occupancy is shared across leagues, so earlier leagues get first
//! pick of the fields.

use tracing::{debug, info, info_span, trace, warn};

use crate::config::{SchedulerConfig, SeasonBounds};
use crate::error::Result;
use crate::models::{Game, League, Team, Venue};
use crate::pairing::PairingState;

use super::slot::{SlotFinder, VenueBook};

/// Run-time scheduling state of one league.
#[derive(Debug, Clone)]
pub struct LeagueState<'a> {
    league: &'a League,
    roster: Vec<&'a Team>,
    pairing: PairingState<&'a Team>,
    num_weeks: u32,
    games_per_week: u32,
    bounds: SeasonBounds,
}

impl<'a> LeagueState<'a> {
    /// Collects the league's roster from `teams` and builds its pairing.
    pub fn new(league: &'a League, teams: &'a [Team], bounds: SeasonBounds) -> Self {
        let roster: Vec<&Team> = teams.iter().filter(|t| t.league_id == league.id).collect();
        let pairing = PairingState::create_pairs(roster.iter().copied());
        Self {
            league,
            roster,
            pairing,
            num_weeks: league.num_weeks(bounds),
            games_per_week: league.games_per_week(bounds),
            bounds,
        }
    }

    /// The league record.
    pub fn league(&self) -> &'a League {
        self.league
    }

    /// Teams of the league, in input order.
    pub fn roster(&self) -> &[&'a Team] {
        &self.roster
    }

    /// Current round's pairing.
    pub fn pairing(&self) -> &PairingState<&'a Team> {
        &self.pairing
    }

    /// Weeks of play.
    pub fn num_weeks(&self) -> u32 {
        self.num_weeks
    }

    /// Rounds played per week.
    pub fn games_per_week(&self) -> u32 {
        self.games_per_week
    }

    /// At least two teams, one week, and a positive game target.
    pub fn is_valid(&self) -> bool {
        self.roster.len() >= 2 && self.num_weeks >= 1 && self.league.target_games_per_team > 0
    }

    /// Weeks of play, ascending.
    pub fn weeks(&self) -> impl Iterator<Item = u32> {
        self.league.weeks(self.bounds)
    }

    /// Advances the pairing to the next round-robin round.
    pub fn rotate(&mut self) {
        self.pairing.rotate();
    }
}

/// Builds a season schedule for many leagues sharing the same venues.
///
/// # Example
///
/// ```
/// use league_schedule::models::{League, Team, Venue, WeeklyAvailability};
/// use league_schedule::scheduler::Scheduler;
///
/// let evenings = WeeklyAvailability::every_day(18.0, 22.0).unwrap();
/// let leagues = vec![League::new(1, 1, 3, 3).with_season("Summer")];
/// let teams: Vec<Team> = (1..=4)
///     .map(|id| Team::new(id, 1).with_availability(evenings.clone()))
///     .collect();
/// let venues = vec![Venue::new(1).with_availability(evenings)];
///
/// let games = Scheduler::new().build_schedule(&leagues, &teams, &venues);
/// // 3 weeks × 1 round × 2 pairs
/// assert_eq!(games.len(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with a validated configuration.
    pub fn with_config(config: SchedulerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Schedules every valid league and returns the committed games in
    /// booking order.
    pub fn build_schedule(
        &self,
        leagues: &[League],
        teams: &[Team],
        venues: &[Venue],
    ) -> Vec<Game> {
        let mut books: Vec<VenueBook> = venues
            .iter()
            .map(|v| VenueBook::new(v, self.config.weeks_per_year))
            .collect();
        let finder = SlotFinder::new(&self.config);
        let mut games = Vec::new();

        for league in leagues {
            let mut state = LeagueState::new(league, teams, self.config.season_bounds);
            if !state.is_valid() {
                warn!(
                    league_id = league.id,
                    teams = state.roster().len(),
                    weeks = state.num_weeks(),
                    game_target = league.target_games_per_team,
                    "Skipping league: needs two teams, one week and a positive game target"
                );
                continue;
            }
            schedule_league(
                &mut state,
                &finder,
                &mut books,
                self.config.weeks_per_year,
                &mut games,
            );
        }

        info!(
            leagues = leagues.len(),
            venues = venues.len(),
            games = games.len(),
            "Schedule built"
        );
        games
    }
}

fn schedule_league(
    state: &mut LeagueState<'_>,
    finder: &SlotFinder,
    books: &mut [VenueBook],
    weeks_per_year: u32,
    games: &mut Vec<Game>,
) {
    let league = state.league();
    let _span = info_span!("league", league_id = league.id).entered();
    if state.games_per_week() == 0 {
        warn!(
            game_target = league.target_games_per_team,
            weeks = state.num_weeks(),
            "Target rounds to zero games per week"
        );
    }

    let before = games.len();
    let mut dropped = 0usize;
    if league
        .last_week(state.bounds)
        .is_some_and(|last| last > weeks_per_year)
    {
        warn!(
            start_week = league.season_start_week,
            end_week = league.season_end_week,
            weeks_per_year,
            "Season runs past the indexed year; later weeks are not scheduled"
        );
    }

    // Venue hours exist only up to `weeks_per_year`.
    let weeks: Vec<u32> = state
        .weeks()
        .take_while(|&week| week <= weeks_per_year)
        .collect();
    for week in weeks {
        for round in 0..state.games_per_week() {
            for (&home, &away) in state.pairing().fixtures() {
                match finder.schedule_game(home, away, week, league, books) {
                    Some(game) => {
                        debug!(
                            week,
                            round,
                            home = home.id,
                            away = away.id,
                            day = game.day(),
                            start = game.start(),
                            venue = game.venue_id(),
                            "Game booked"
                        );
                        games.push(game);
                    }
                    None => {
                        dropped += 1;
                        trace!(week, round, home = home.id, away = away.id, "No feasible slot");
                    }
                }
            }
        }
        state.rotate();
    }

    info!(
        teams = state.roster().len(),
        weeks = state.num_weeks(),
        games_per_week = state.games_per_week(),
        scheduled = games.len() - before,
        dropped,
        "League scheduled"
    );
}

/// Schedules with the default configuration.
pub fn build_schedule(leagues: &[League], teams: &[Team], venues: &[Venue]) -> Vec<Game> {
    Scheduler::new().build_schedule(leagues, teams, venues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::InstanceGenerator;
    use crate::models::{Interval, WeeklyAvailability};
    use std::collections::HashSet;

    fn evenings() -> WeeklyAvailability {
        WeeklyAvailability::every_day(18.0, 22.0).unwrap()
    }

    fn teams_for(league_id: u32, ids: std::ops::RangeInclusive<u32>) -> Vec<Team> {
        ids.map(|id| Team::new(id, league_id).with_availability(evenings()))
            .collect()
    }

    #[test]
    fn test_league_state_validity() {
        let teams = teams_for(1, 1..=1);
        let single = League::new(1, 1, 4, 4);
        assert!(!LeagueState::new(&single, &teams, SeasonBounds::Inclusive).is_valid());

        let teams = teams_for(1, 1..=4);
        let no_target = League::new(1, 1, 4, 0);
        assert!(!LeagueState::new(&no_target, &teams, SeasonBounds::Inclusive).is_valid());

        let no_weeks = League::new(1, 4, 4, 4);
        assert!(LeagueState::new(&no_weeks, &teams, SeasonBounds::Inclusive).is_valid());
        assert!(!LeagueState::new(&no_weeks, &teams, SeasonBounds::Exclusive).is_valid());
    }

    #[test]
    fn test_roster_filters_by_league() {
        let mut teams = teams_for(1, 1..=3);
        teams.extend(teams_for(2, 4..=5));
        let league = League::new(2, 1, 2, 2);
        let state = LeagueState::new(&league, &teams, SeasonBounds::Inclusive);
        let ids: Vec<u32> = state.roster().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_invalid_leagues_produce_nothing() {
        let leagues = vec![League::new(1, 1, 5, 5), League::new(2, 1, 5, 0)];
        let mut teams = teams_for(1, 1..=1);
        teams.extend(teams_for(2, 2..=5));
        let venues = vec![Venue::new(1).with_availability(evenings())];
        assert!(build_schedule(&leagues, &teams, &venues).is_empty());
    }

    #[test]
    fn test_round_robin_across_weeks() {
        // 4 teams, 3 weeks, 1 game per week: every pair meets exactly once.
        let leagues = vec![League::new(1, 1, 3, 3)];
        let teams = teams_for(1, 1..=4);
        let venues = vec![Venue::new(1).with_availability(evenings())];
        let games = build_schedule(&leagues, &teams, &venues);
        assert_eq!(games.len(), 6);

        let pairs: HashSet<(u32, u32)> = games
            .iter()
            .map(|g| (g.team1_id().min(g.team2_id()), g.team1_id().max(g.team2_id())))
            .collect();
        assert_eq!(pairs.len(), 6);
        for t in 1..=4 {
            assert_eq!(games.iter().filter(|g| g.involves(t)).count(), 3);
        }
    }

    #[test]
    fn test_odd_roster_skips_bye() {
        let leagues = vec![League::new(1, 1, 5, 5)];
        let teams = teams_for(1, 1..=5);
        let venues = vec![Venue::new(1).with_availability(evenings())];
        let games = build_schedule(&leagues, &teams, &venues);
        // 2 real pairs per week over 5 weeks
        assert_eq!(games.len(), 10);
        for t in 1..=5 {
            assert_eq!(games.iter().filter(|g| g.involves(t)).count(), 4);
        }
    }

    #[test]
    fn test_multiple_rounds_reuse_week_pairing() {
        // target 4 over 2 weeks -> 2 rounds per week with the same pairing
        let leagues = vec![League::new(1, 1, 2, 4)];
        let teams = teams_for(1, 1..=2);
        let venues = vec![Venue::new(1).with_availability(evenings())];
        let games = build_schedule(&leagues, &teams, &venues);
        assert_eq!(games.len(), 4);
        let week1: Vec<&Game> = games.iter().filter(|g| g.week() == 1).collect();
        assert_eq!(week1.len(), 2);
        assert_eq!((week1[0].day(), week1[0].start()), (1, 18.0));
        assert_eq!((week1[1].day(), week1[1].start()), (1, 20.0));
    }

    #[test]
    fn test_exclusive_bounds_skip_final_week() {
        let config = SchedulerConfig::new().with_season_bounds(SeasonBounds::Exclusive);
        let scheduler = Scheduler::with_config(config).unwrap();
        let leagues = vec![League::new(1, 1, 3, 2)];
        let teams = teams_for(1, 1..=2);
        let venues = vec![Venue::new(1).with_availability(evenings())];
        let games = scheduler.build_schedule(&leagues, &teams, &venues);
        assert_eq!(games.iter().map(Game::week).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_leagues_compete_for_venue() {
        let narrow = WeeklyAvailability::closed().with_day(1, 18.0, 20.0).unwrap();
        let leagues = vec![League::new(1, 1, 1, 1), League::new(2, 1, 1, 1)];
        let teams: Vec<Team> = (1..=4)
            .map(|id| Team::new(id, if id <= 2 { 1 } else { 2 }).with_availability(narrow.clone()))
            .collect();
        let venues = vec![Venue::new(1).with_availability(narrow)];
        let games = build_schedule(&leagues, &teams, &venues);
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].league_id(), 1);
    }

    #[test]
    fn test_season_past_indexed_year_is_clamped() {
        let teams = teams_for(1, 1..=2);
        let venues = vec![Venue::new(1).with_availability(evenings())];

        // Ends at u32::MAX: no overflow, games only in weeks 1..=52.
        let open_ended = vec![League::new(1, 1, u32::MAX, u32::MAX)];
        let games = build_schedule(&open_ended, &teams, &venues);
        assert_eq!(games.len(), 52);
        assert_eq!(games.last().map(Game::week), Some(52));

        // Huge end week terminates promptly.
        let late = vec![League::new(1, 50, 4_000_000_000, 4_000_000_000)];
        let games = build_schedule(&late, &teams, &venues);
        assert_eq!(games.iter().map(Game::week).collect::<Vec<_>>(), vec![50, 51, 52]);

        let from_zero = vec![League::new(1, 0, u32::MAX, u32::MAX)];
        let games = build_schedule(&from_zero, &teams, &venues);
        assert!(games.iter().all(|g| (1..=52).contains(&g.week())));
    }

    #[test]
    fn test_with_config_rejects_zero_step() {
        let config = SchedulerConfig::new().with_time_step(0.0);
        assert!(Scheduler::with_config(config).is_err());
    }

    #[test]
    fn test_generated_instances_respect_constraints() {
        for seed in 0..8 {
            let instance = InstanceGenerator::new(seed)
                .with_leagues(3)
                .with_teams_per_league(5)
                .with_venues(2)
                .generate();
            let games = build_schedule(&instance.leagues, &instance.teams, &instance.venues);
            assert!(!games.is_empty(), "seed {seed} scheduled nothing");

            for (i, a) in games.iter().enumerate() {
                for b in &games[i + 1..] {
                    if a.venue_id() == b.venue_id() {
                        assert!(
                            !a.slot().intersects(&b.slot()),
                            "seed {seed}: double booking {a:?} / {b:?}"
                        );
                    }
                }
            }

            for g in &games {
                let slot: Interval = g.slot();
                let within = |a: &WeeklyAvailability| {
                    a.interval(g.day(), g.week()).is_some_and(|w| w.contains(&slot))
                };
                let t1 = instance.teams.iter().find(|t| t.id == g.team1_id()).unwrap();
                let t2 = instance.teams.iter().find(|t| t.id == g.team2_id()).unwrap();
                let v = instance.venues.iter().find(|v| v.id == g.venue_id()).unwrap();
                assert!(within(&t1.availability));
                assert!(within(&t2.availability));
                assert!(within(&v.availability));
                assert!((g.duration() - 2.0).abs() < 1e-10);
            }
        }
    }
}
