//! Input validation for league scheduling.
//!
//! Checks structural integrity of teams, venues and leagues before
//! scheduling. Detects:
//! - Duplicate IDs
//! - Teams referencing unknown leagues
//! - Leagues the scheduler will skip (too few teams, empty season,
//!   zero game target)
//! - Seasons reaching outside the indexed weeks `1..=weeks_per_year`
//! - Teams and venues that are never available
//!
//! The scheduler itself tolerates all of these (skipped leagues simply get
//! no games); validation lets callers surface them instead.

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::models::{League, Team, Venue};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A team references a league that doesn't exist.
    UnknownLeague,
    /// A league has fewer than two teams.
    TooFewTeams,
    /// A league's season contains no weeks.
    EmptySeason,
    /// A league requests zero games per team.
    NoGamesRequested,
    /// A league's season has weeks outside `1..=weeks_per_year`.
    SeasonOutsideYear,
    /// A team or venue has no open day.
    NeverAvailable,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a scheduling run.
///
/// Checks:
/// 1. No duplicate team, venue or league IDs
/// 2. Every team's league exists
/// 3. Every league has at least two teams, one week and a positive target
/// 4. Every league's season lies within the indexed weeks
/// 5. Every team and venue is open on at least one day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teams: &[Team],
    venues: &[Venue],
    leagues: &[League],
    config: &SchedulerConfig,
) -> ValidationResult {
    let bounds = config.season_bounds;
    let mut errors = Vec::new();

    let mut league_ids = HashSet::new();
    for league in leagues {
        if !league_ids.insert(league.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate league ID: {}", league.id),
            ));
        }
    }

    let mut venue_ids = HashSet::new();
    for venue in venues {
        if !venue_ids.insert(venue.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate venue ID: {}", venue.id),
            ));
        }
        if venue.availability.is_never_open() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverAvailable,
                format!("Venue {} ('{}') is never open", venue.id, venue.location()),
            ));
        }
    }

    let mut team_ids = HashSet::new();
    for team in teams {
        if !team_ids.insert(team.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }
        if !league_ids.contains(&team.league_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLeague,
                format!("Team {} references unknown league {}", team.id, team.league_id),
            ));
        }
        if team.availability.is_never_open() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverAvailable,
                format!("Team {} ('{}') is never available", team.id, team.name),
            ));
        }
    }

    for league in leagues {
        let roster = teams.iter().filter(|t| t.league_id == league.id).count();
        if roster < 2 {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooFewTeams,
                format!("League {} has {roster} team(s); at least 2 required", league.id),
            ));
        }
        if league.num_weeks(bounds) == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySeason,
                format!(
                    "League {} season weeks {}..{} contain no weeks",
                    league.id, league.season_start_week, league.season_end_week
                ),
            ));
        }
        if let Some(last) = league.last_week(bounds) {
            if league.season_start_week < 1 || last > config.weeks_per_year {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SeasonOutsideYear,
                    format!(
                        "League {} plays weeks {}..={last}, outside 1..={}",
                        league.id, league.season_start_week, config.weeks_per_year
                    ),
                ));
            }
        }
        if league.target_games_per_team == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoGamesRequested,
                format!("League {} requests zero games per team", league.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
