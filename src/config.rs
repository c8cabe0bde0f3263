//! Scheduler configuration.
//!
//! All fields have defaults, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! game_duration = 2.0
//! time_step = 0.5
//! weeks_per_year = 52
//! season_bounds = "inclusive"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::models::HOURS_PER_DAY;

/// Smallest accepted `time_step` (one minute).
pub const MIN_TIME_STEP: f64 = 1.0 / 60.0;

/// How a league's `season_end_week` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonBounds {
    /// Play runs through `season_end_week`.
    #[default]
    Inclusive,
    /// Play stops before `season_end_week`.
    Exclusive,
}

/// Parameters of the greedy slot search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Length of every game (hours).
    pub game_duration: f64,
    /// Increment between candidate start times (hours).
    pub time_step: f64,
    /// Weeks for which venue availability is indexed.
    pub weeks_per_year: u32,
    /// Season end-week semantics.
    pub season_bounds: SeasonBounds,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            game_duration: 2.0,
            time_step: 0.5,
            weeks_per_year: 52,
            season_bounds: SeasonBounds::Inclusive,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the game duration.
    pub fn with_game_duration(mut self, hours: f64) -> Self {
        self.game_duration = hours;
        self
    }

    /// Sets the candidate start increment.
    pub fn with_time_step(mut self, hours: f64) -> Self {
        self.time_step = hours;
        self
    }

    /// Sets the number of indexed weeks.
    pub fn with_weeks_per_year(mut self, weeks: u32) -> Self {
        self.weeks_per_year = weeks;
        self
    }

    /// Sets the season end-week semantics.
    pub fn with_season_bounds(mut self, bounds: SeasonBounds) -> Self {
        self.season_bounds = bounds;
        self
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks that the slot search terminates and games fit in a day.
    pub fn validate(&self) -> Result<()> {
        if !(self.game_duration > 0.0 && self.game_duration <= HOURS_PER_DAY) {
            return Err(ScheduleError::InvalidConfig(format!(
                "game_duration must be in (0, 24], got {}",
                self.game_duration
            )));
        }
        if !(self.time_step >= MIN_TIME_STEP && self.time_step.is_finite()) {
            return Err(ScheduleError::InvalidConfig(format!(
                "time_step must be at least {MIN_TIME_STEP} (one minute), got {}",
                self.time_step
            )));
        }
        Ok(())
    }
}
