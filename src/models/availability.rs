//! Weekly recurring availability.
//!
//! Teams and venues each carry one `(start, end)` window per weekday. The
//! same window repeats every week of the year.
//!
//! # Closed Days
//! A day whose bounds are equal (or absent from the input) is closed. A
//! day whose start lies after its end is malformed and rejected.

use serde::Serialize;

use super::interval::{check_day, Interval, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::error::{Result, ScheduleError};

/// An open window `[start, end)` on one weekday, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayWindow {
    /// Opening time (hours, inclusive).
    pub start: f64,
    /// Closing time (hours, exclusive).
    pub end: f64,
}

impl DayWindow {
    /// Validates raw bounds for `day`.
    ///
    /// Returns `Ok(None)` for a closed day (equal bounds).
    pub fn new(day: u8, start: f64, end: f64) -> Result<Option<Self>> {
        check_day(day)?;
        if !start.is_finite() || !end.is_finite() {
            return Err(ScheduleError::MalformedInterval { start, end });
        }
        if start > end {
            return Err(ScheduleError::MalformedWindow { day, start, end });
        }
        if start == end {
            return Ok(None);
        }
        if start < 0.0 || end > HOURS_PER_DAY {
            return Err(ScheduleError::MalformedInterval { start, end });
        }
        Ok(Some(Self { start, end }))
    }

    /// Window length in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Per-weekday availability table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklyAvailability {
    days: [Option<DayWindow>; DAYS_PER_WEEK as usize],
}

impl WeeklyAvailability {
    /// Availability closed on every day.
    pub fn closed() -> Self {
        Self::default()
    }

    /// The same window on all seven days.
    pub fn every_day(start: f64, end: f64) -> Result<Self> {
        (1..=DAYS_PER_WEEK).try_fold(Self::closed(), |acc, day| acc.with_day(day, start, end))
    }

    /// Builds a table from optional per-day bounds, index 0 = day 1.
    ///
    /// A day with either bound missing is treated as closed.
    pub fn from_bounds(
        bounds: [(Option<f64>, Option<f64>); DAYS_PER_WEEK as usize],
    ) -> Result<Self> {
        let mut availability = Self::closed();
        for (idx, bound) in bounds.into_iter().enumerate() {
            if let (Some(start), Some(end)) = bound {
                availability = availability.with_day(idx as u8 + 1, start, end)?;
            }
        }
        Ok(availability)
    }

    /// Sets the window for one day.
    pub fn with_day(mut self, day: u8, start: f64, end: f64) -> Result<Self> {
        self.set_day(day, start, end)?;
        Ok(self)
    }

    /// Replaces the window for one day in place.
    pub fn set_day(&mut self, day: u8, start: f64, end: f64) -> Result<()> {
        let window = DayWindow::new(day, start, end)?;
        self.days[usize::from(day) - 1] = window;
        Ok(())
    }

    /// Window for `day` (1..=7), `None` when closed or out of range.
    pub fn window(&self, day: u8) -> Option<DayWindow> {
        let idx = usize::from(day).checked_sub(1)?;
        self.days.get(idx).copied().flatten()
    }

    /// The day's window as an interval in `week`.
    pub fn interval(&self, day: u8, week: u32) -> Option<Interval> {
        self.window(day)
            .map(|w| Interval::from_parts(w.start, w.end, day, week))
    }

    /// Days with an open window, ascending.
    pub fn open_days(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=DAYS_PER_WEEK).filter(move |&d| self.window(d).is_some())
    }

    /// Whether no day has an open window.
    pub fn is_never_open(&self) -> bool {
        self.days.iter().all(Option::is_none)
    }

    /// Total open hours per week.
    pub fn weekly_hours(&self) -> f64 {
        self.days.iter().flatten().map(DayWindow::duration).sum()
    }
}
