//! Error types.
//!
//! Scheduling conflicts are not errors: an unschedulable pair is dropped and
//! an invalid league is skipped. `ScheduleError` covers precondition
//! violations (malformed intervals and windows, bad configuration) and the
//! I/O layer.

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised by the scheduling engine and its I/O glue.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Interval bounds violate `0 <= start < end <= 24`.
    #[error("malformed interval [{start}, {end}): bounds must satisfy 0 <= start < end <= 24")]
    MalformedInterval {
        /// Offending start bound.
        start: f64,
        /// Offending end bound.
        end: f64,
    },

    /// Day-of-week outside `1..=7`.
    #[error("invalid day of week {0}: expected 1..=7")]
    InvalidDay(u8),

    /// A weekly availability window whose start lies after its end.
    #[error("malformed availability window on day {day}: start {start} is after end {end}")]
    MalformedWindow {
        /// Day-of-week of the window.
        day: u8,
        /// Window start.
        start: f64,
        /// Window end.
        end: f64,
    },

    /// Scheduler configuration rejected by `SchedulerConfig::validate`.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parse error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
