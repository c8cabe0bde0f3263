//! Tabular input and schedule export.
//!
//! A case directory holds three CSV tables:
//!
//! | File | Columns |
//! |------|---------|
//! | `team.csv` | `teamId, leagueId, name, d1Start, d1End, …, d7End` |
//! | `venue.csv` | `venueId, name, field, d1Start, d1End, …, d7End` |
//! | `league.csv` | `leagueId, leagueName, season, seasonStart, seasonEnd, numberOfGames` |
//!
//! Schedules are written as `schedule.csv` and `schedule.json`, one
//! [`ScheduleRecord`] per game, with ids resolved to display names.

mod rows;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Game, Instance, League, Team, Venue};

pub use rows::{LeagueRow, TeamRow, VenueRow};

/// Team table file name.
pub const TEAM_FILE: &str = "team.csv";
/// Venue table file name.
pub const VENUE_FILE: &str = "venue.csv";
/// League table file name.
pub const LEAGUE_FILE: &str = "league.csv";
/// Schedule CSV file name.
pub const SCHEDULE_CSV: &str = "schedule.csv";
/// Schedule JSON file name.
pub const SCHEDULE_JSON: &str = "schedule.json";

/// One exported game with names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// Home team name.
    pub team1_name: String,
    /// Away team name.
    pub team2_name: String,
    /// Week of play.
    pub week: u32,
    /// Day of week (1..=7).
    pub day: u8,
    /// Start time (hours).
    pub start: f64,
    /// End time (hours).
    pub end: f64,
    /// Season label.
    pub season: String,
    /// League display name.
    pub league: String,
    /// Venue label, `"{name} Field #{field}"`.
    pub location: String,
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize::<T>() {
        rows.push(row?);
    }
    Ok(rows)
}

fn write_rows<T: Serialize, W: Write>(writer: W, rows: impl IntoIterator<Item = T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads a team table.
pub fn read_teams<R: Read>(reader: R) -> Result<Vec<Team>> {
    read_rows::<TeamRow, _>(reader)?
        .into_iter()
        .map(TeamRow::into_team)
        .collect()
}

/// Reads a venue table.
pub fn read_venues<R: Read>(reader: R) -> Result<Vec<Venue>> {
    read_rows::<VenueRow, _>(reader)?
        .into_iter()
        .map(VenueRow::into_venue)
        .collect()
}

/// Reads a league table.
pub fn read_leagues<R: Read>(reader: R) -> Result<Vec<League>> {
    Ok(read_rows::<LeagueRow, _>(reader)?
        .into_iter()
        .map(League::from)
        .collect())
}

/// Loads the three input tables from a case directory.
pub fn load_case(dir: impl AsRef<Path>) -> Result<Instance> {
    let dir = dir.as_ref();
    let teams = read_teams(File::open(dir.join(TEAM_FILE))?)?;
    let venues = read_venues(File::open(dir.join(VENUE_FILE))?)?;
    let leagues = read_leagues(File::open(dir.join(LEAGUE_FILE))?)?;
    tracing::debug!(
        dir = %dir.display(),
        teams = teams.len(),
        venues = venues.len(),
        leagues = leagues.len(),
        "Case loaded"
    );
    Ok(Instance {
        leagues,
        teams,
        venues,
    })
}

/// Writes the three input tables of `instance` into `dir`, creating it.
pub fn write_instance(dir: impl AsRef<Path>, instance: &Instance) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    write_rows(
        BufWriter::new(File::create(dir.join(TEAM_FILE))?),
        instance.teams.iter().map(TeamRow::from),
    )?;
    write_rows(
        BufWriter::new(File::create(dir.join(VENUE_FILE))?),
        instance.venues.iter().map(VenueRow::from),
    )?;
    write_rows(
        BufWriter::new(File::create(dir.join(LEAGUE_FILE))?),
        instance.leagues.iter().map(LeagueRow::from),
    )?;
    Ok(())
}

/// Resolves team, league and venue ids of `games` to display names.
///
/// Games referencing ids absent from `instance` are skipped.
pub fn resolve_records(games: &[Game], instance: &Instance) -> Vec<ScheduleRecord> {
    let teams: HashMap<_, _> = instance.teams.iter().map(|t| (t.id, t)).collect();
    let leagues: HashMap<_, _> = instance.leagues.iter().map(|l| (l.id, l)).collect();
    let venues: HashMap<_, _> = instance.venues.iter().map(|v| (v.id, v)).collect();

    games
        .iter()
        .filter_map(|g| {
            let team1 = teams.get(&g.team1_id())?;
            let team2 = teams.get(&g.team2_id())?;
            let league = leagues.get(&g.league_id())?;
            let venue = venues.get(&g.venue_id())?;
            Some(ScheduleRecord {
                team1_name: team1.name.clone(),
                team2_name: team2.name.clone(),
                week: g.week(),
                day: g.day(),
                start: g.start(),
                end: g.end(),
                season: g.season().to_string(),
                league: league.name.clone(),
                location: venue.location(),
            })
        })
        .collect()
}

/// Writes records as CSV.
pub fn write_csv<W: Write>(writer: W, records: &[ScheduleRecord]) -> Result<()> {
    write_rows(writer, records)
}

/// Writes records as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, records: &[ScheduleRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Writes `schedule.csv` and `schedule.json` into `dir`, creating it.
pub fn write_schedule(dir: impl AsRef<Path>, records: &[ScheduleRecord]) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    write_csv(BufWriter::new(File::create(dir.join(SCHEDULE_CSV))?), records)?;
    write_json(BufWriter::new(File::create(dir.join(SCHEDULE_JSON))?), records)?;
    Ok(())
}
