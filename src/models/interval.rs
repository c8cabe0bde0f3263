//! Day-scoped time intervals.
//!
//! # Time Model
//! Times are fractional hours since midnight (`13.5` = 13:30). Every
//! interval lives on one day-of-week (`1..=7`) of one week-of-season and may
//! not cross midnight.
//!
//! # Overlap
//! Two intervals overlap iff they share `(day, week)` and their ranges
//! intersect with positive length. Touching intervals (`[10, 12)` and
//! `[12, 14)`) do not overlap, so back-to-back bookings are allowed.

use serde::Serialize;

use crate::error::{Result, ScheduleError};

/// Length of a day in hours; upper bound of every interval.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Number of days in a scheduling week.
pub const DAYS_PER_WEEK: u8 = 7;

/// A time range `[start, end)` on a given day of a given week.
///
/// Invariant: `0 <= start < end <= 24` and `1 <= day <= 7`, enforced by
/// [`Interval::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    start: f64,
    end: f64,
    day: u8,
    week: u32,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    /// `MalformedInterval` if the bounds are not finite or violate
    /// `0 <= start < end <= 24`; `InvalidDay` if `day` is outside `1..=7`.
    pub fn new(start: f64, end: f64, day: u8, week: u32) -> Result<Self> {
        check_day(day)?;
        check_bounds(start, end)?;
        Ok(Self::from_parts(start, end, day, week))
    }

    /// Builds an interval whose invariant the caller has already checked.
    pub(crate) fn from_parts(start: f64, end: f64, day: u8, week: u32) -> Self {
        debug_assert!(start < end, "interval start {start} must precede end {end}");
        Self {
            start,
            end,
            day,
            week,
        }
    }

    /// Interval start (hours, inclusive).
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Interval end (hours, exclusive).
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Day of week (1..=7).
    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Week of the year.
    #[inline]
    pub fn week(&self) -> u32 {
        self.week
    }

    /// Duration in hours.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether both intervals sit on the same day of the same week.
    #[inline]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.day == other.day && self.week == other.week
    }

    /// Whether the two intervals overlap with positive length.
    pub fn intersects(&self, other: &Self) -> bool {
        self.same_slot(other) && self.start < other.end && other.start < self.end
    }

    /// The intersection of two intervals, if they overlap.
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        if !self.same_slot(other) {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Self::from_parts(start, end, self.day, self.week))
        } else {
            None
        }
    }

    /// Whether `other` lies entirely within this interval (inclusive bounds).
    pub fn contains(&self, other: &Self) -> bool {
        self.same_slot(other) && self.start <= other.start && other.end <= self.end
    }

    /// The sub-interval `[start, start + length)` if it fits inside this one.
    ///
    /// Fit is inclusive at both ends, so a span exactly filling the
    /// remainder of the interval is returned.
    pub fn span_from(&self, start: f64, length: f64) -> Option<Self> {
        let end = start + length;
        if length > 0.0 && start >= self.start && end <= self.end {
            Some(Self::from_parts(start, end, self.day, self.week))
        } else {
            None
        }
    }
}

pub(crate) fn check_day(day: u8) -> Result<()> {
    if (1..=DAYS_PER_WEEK).contains(&day) {
        Ok(())
    } else {
        Err(ScheduleError::InvalidDay(day))
    }
}

fn check_bounds(start: f64, end: f64) -> Result<()> {
    let in_day = |t: f64| t.is_finite() && (0.0..=HOURS_PER_DAY).contains(&t);
    if in_day(start) && in_day(end) && start < end {
        Ok(())
    } else {
        Err(ScheduleError::MalformedInterval { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: f64, end: f64, day: u8, week: u32) -> Interval {
        Interval::new(start, end, day, week).unwrap()
    }

    #[test]
    fn test_interval_accessors() {
        let i = iv(9.0, 17.5, 3, 12);
        assert_eq!(i.start(), 9.0);
        assert_eq!(i.end(), 17.5);
        assert_eq!(i.day(), 3);
        assert_eq!(i.week(), 12);
        assert!((i.duration() - 8.5).abs() < 1e-10);
    }

    #[test]
    fn test_malformed_interval_rejected() {
        assert!(matches!(
            Interval::new(12.0, 12.0, 1, 1),
            Err(ScheduleError::MalformedInterval { .. })
        ));
        assert!(matches!(
            Interval::new(14.0, 10.0, 1, 1),
            Err(ScheduleError::MalformedInterval { .. })
        ));
        assert!(matches!(
            Interval::new(22.0, 25.0, 1, 1),
            Err(ScheduleError::MalformedInterval { .. })
        ));
        assert!(matches!(
            Interval::new(f64::NAN, 10.0, 1, 1),
            Err(ScheduleError::MalformedInterval { .. })
        ));
    }

    #[test]
    fn test_invalid_day_rejected() {
        assert!(matches!(
            Interval::new(9.0, 10.0, 0, 1),
            Err(ScheduleError::InvalidDay(0))
        ));
        assert!(matches!(
            Interval::new(9.0, 10.0, 8, 1),
            Err(ScheduleError::InvalidDay(8))
        ));
    }

    #[test]
    fn test_overlap() {
        let a = iv(9.0, 17.0, 3, 1);
        let b = iv(10.0, 20.0, 3, 1);
        let o = a.overlap(&b).unwrap();
        assert_eq!(o.start(), 10.0);
        assert_eq!(o.end(), 17.0);
        assert_eq!(o.day(), 3);
        assert_eq!(o.week(), 1);
        assert_eq!(b.overlap(&a), Some(o));
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let a = iv(10.0, 12.0, 3, 1);
        let b = iv(12.0, 14.0, 3, 1);
        assert!(a.overlap(&b).is_none());
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_different_slot_never_overlaps() {
        let a = iv(9.0, 17.0, 3, 1);
        assert!(a.overlap(&iv(9.0, 17.0, 4, 1)).is_none());
        assert!(a.overlap(&iv(9.0, 17.0, 3, 2)).is_none());
    }

    #[test]
    fn test_contains_inclusive() {
        let w = iv(10.0, 20.0, 1, 1);
        assert!(w.contains(&iv(10.0, 12.0, 1, 1)));
        assert!(w.contains(&iv(18.0, 20.0, 1, 1)));
        assert!(!w.contains(&iv(19.0, 21.0, 1, 1)));
        assert!(!w.contains(&iv(10.0, 12.0, 2, 1)));
    }

    #[test]
    fn test_span_from() {
        let w = iv(10.0, 13.0, 5, 2);
        let s = w.span_from(11.0, 2.0).unwrap();
        assert_eq!((s.start(), s.end(), s.day(), s.week()), (11.0, 13.0, 5, 2));
        assert!(w.span_from(11.5, 2.0).is_none());
        assert!(w.span_from(9.5, 2.0).is_none());
    }
}
