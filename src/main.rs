//! League scheduling CLI.
//!
//! `run` schedules a case directory of CSV tables and exports the result;
//! `generate` writes a synthetic case.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use league_schedule::generator::InstanceGenerator;
use league_schedule::io;
use league_schedule::scheduler::{ScheduleKpi, Scheduler};
use league_schedule::validation::validate_input;
use league_schedule::SchedulerConfig;

#[derive(Parser)]
#[command(name = "league-schedule")]
#[command(about = "Round-robin fixture scheduling for sports leagues", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a case directory (team.csv, venue.csv, league.csv)
    Run {
        /// Directory holding the input tables
        case_dir: PathBuf,
        /// Scheduler configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory for schedule.csv / schedule.json (default: CASE_DIR)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Abort when input validation reports problems
        #[arg(long)]
        strict: bool,
    },
    /// Write a synthetic case directory
    Generate {
        /// Directory to write the input tables into
        out_dir: PathBuf,
        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Number of leagues
        #[arg(long, default_value = "2")]
        leagues: usize,
        /// Teams per league
        #[arg(long, default_value = "6")]
        teams_per_league: usize,
        /// Number of venues
        #[arg(long, default_value = "3")]
        venues: usize,
    },
}

fn enable_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    enable_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            case_dir,
            config,
            out_dir,
            strict,
        } => run(case_dir, config, out_dir, strict),
        Commands::Generate {
            out_dir,
            seed,
            leagues,
            teams_per_league,
            venues,
        } => {
            let instance = InstanceGenerator::new(seed)
                .with_leagues(leagues)
                .with_teams_per_league(teams_per_league)
                .with_venues(venues)
                .generate();
            io::write_instance(&out_dir, &instance)
                .with_context(|| format!("writing case to {}", out_dir.display()))?;
            info!(
                dir = %out_dir.display(),
                seed,
                leagues = instance.leagues.len(),
                teams = instance.teams.len(),
                venues = instance.venues.len(),
                "Case generated"
            );
            Ok(())
        }
    }
}

fn run(
    case_dir: PathBuf,
    config: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    strict: bool,
) -> Result<()> {
    let config = match config {
        Some(path) => SchedulerConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    let instance = io::load_case(&case_dir)
        .with_context(|| format!("loading case {}", case_dir.display()))?;

    if let Err(errors) =
        validate_input(&instance.teams, &instance.venues, &instance.leagues, &config)
    {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
        if strict {
            bail!("input validation failed with {} problem(s)", errors.len());
        }
    }

    let scheduler = Scheduler::with_config(config)?;
    let games = scheduler.build_schedule(&instance.leagues, &instance.teams, &instance.venues);
    let kpi = ScheduleKpi::calculate(&games, &instance.leagues, &instance.teams);
    print_summary(&kpi);

    let out_dir = out_dir.unwrap_or(case_dir);
    let records = io::resolve_records(&games, &instance);
    io::write_schedule(&out_dir, &records)
        .with_context(|| format!("writing schedule to {}", out_dir.display()))?;
    info!(dir = %out_dir.display(), games = records.len(), "Schedule written");
    Ok(())
}

fn print_summary(kpi: &ScheduleKpi) {
    println!(
        "{:>8} {:>6} {:>7} {:>7} {:>9} {:>8}",
        "league", "teams", "target", "games", "min/max", "filled"
    );
    for l in &kpi.leagues {
        println!(
            "{:>8} {:>6} {:>7} {:>7} {:>9} {:>7.1}%",
            l.league_id,
            l.teams,
            l.target_games_per_team,
            l.scheduled_games,
            format!("{}/{}", l.min_games_per_team, l.max_games_per_team),
            l.fulfilment_rate * 100.0
        );
    }
    let booked: f64 = kpi.booked_hours_by_venue.values().sum();
    println!(
        "total: {} games, {:.1} venue hours booked, {:.1}% of requested team-games",
        kpi.total_games,
        booked,
        kpi.fulfilment_rate * 100.0
    );
}
