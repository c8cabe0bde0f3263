//! Interval index bucketed by `(day, week)`.
//!
//! Every query in the scheduler names exactly one day of one week, so the
//! index keeps an independent [`IntervalTree`] per `(day, week)` bucket.
//! Intervals in different buckets never overlap.
//!
//! Each venue owns two indices: *availability* (opening hours, filled once
//! at startup) and *occupancy* (committed games, one insert per booking).
//!
//! # Example
//!
//! ```
//! use league_schedule::index::IntervalIndex;
//! use league_schedule::models::Interval;
//!
//! let mut occupancy = IntervalIndex::new();
//! occupancy.insert(Interval::new(10.0, 12.0, 3, 1).unwrap());
//!
//! let query = Interval::new(11.0, 13.0, 3, 1).unwrap();
//! let hits = occupancy.query_overlap(&query);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].start(), 11.0);
//! assert_eq!(hits[0].end(), 12.0);
//!
//! // Same hours, different week: no conflict.
//! let next_week = Interval::new(11.0, 13.0, 3, 2).unwrap();
//! assert!(!occupancy.any_overlap(&next_week));
//! ```

mod tree;

pub use tree::{IntervalTree, Iter};

use std::collections::BTreeMap;

use crate::models::Interval;

/// Bucket key: `(day, week)`.
type SlotKey = (u8, u32);

/// Interval store answering overlap queries within one day of one week.
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    buckets: BTreeMap<SlotKey, IntervalTree>,
    len: usize,
}

impl IntervalIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an interval to its `(day, week)` bucket.
    pub fn insert(&mut self, interval: Interval) {
        self.buckets
            .entry((interval.day(), interval.week()))
            .or_default()
            .insert(interval);
        self.len += 1;
    }

    /// Stored intervals overlapping `query` with positive length, each
    /// truncated to the intersection.
    ///
    /// Results are ordered by stored start, ties in insertion order.
    pub fn query_overlap(&self, query: &Interval) -> Vec<Interval> {
        self.bucket(query)
            .map(|tree| tree.query_overlap(query))
            .unwrap_or_default()
    }

    /// Whether any stored interval overlaps `query`.
    pub fn any_overlap(&self, query: &Interval) -> bool {
        self.bucket(query).is_some_and(|tree| tree.any_overlap(query))
    }

    /// Total number of stored intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of non-empty `(day, week)` buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// All stored intervals, by week, then day, then start.
    pub fn iter(&self) -> impl Iterator<Item = &Interval> {
        let mut keys: Vec<&SlotKey> = self.buckets.keys().collect();
        keys.sort_by_key(|(day, week)| (*week, *day));
        keys.into_iter()
            .filter_map(|k| self.buckets.get(k))
            .flat_map(IntervalTree::iter)
    }

    /// Sum of stored durations (hours).
    pub fn total_duration(&self) -> f64 {
        self.buckets
            .values()
            .flat_map(IntervalTree::iter)
            .map(Interval::duration)
            .sum()
    }

    fn bucket(&self, query: &Interval) -> Option<&IntervalTree> {
        self.buckets.get(&(query.day(), query.week()))
    }
}

impl Extend<Interval> for IntervalIndex {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        for interval in iter {
            self.insert(interval);
        }
    }
}

impl FromIterator<Interval> for IntervalIndex {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn iv(start: f64, end: f64, day: u8, week: u32) -> Interval {
        Interval::new(start, end, day, week).unwrap()
    }

    #[test]
    fn test_buckets_are_isolated() {
        let mut idx = IntervalIndex::new();
        idx.insert(iv(9.0, 17.0, 1, 1));
        idx.insert(iv(9.0, 17.0, 2, 1));
        idx.insert(iv(9.0, 17.0, 1, 2));
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.bucket_count(), 3);

        let hits = idx.query_overlap(&iv(10.0, 11.0, 1, 1));
        assert_eq!(hits, vec![iv(10.0, 11.0, 1, 1)]);
        assert!(idx.query_overlap(&iv(10.0, 11.0, 3, 1)).is_empty());
    }

    #[test]
    fn test_venue_availability_query() {
        // Team overlap [9, 17] against venue hours [10, 20] on day 3.
        let idx: IntervalIndex = std::iter::once(iv(10.0, 20.0, 3, 1)).collect();
        let hits = idx.query_overlap(&iv(9.0, 17.0, 3, 1));
        assert_eq!(hits, vec![iv(10.0, 17.0, 3, 1)]);
    }

    #[test]
    fn test_iter_and_total_duration() {
        let mut idx = IntervalIndex::new();
        idx.insert(iv(12.0, 14.0, 2, 2));
        idx.insert(iv(10.0, 12.0, 5, 1));
        idx.insert(iv(8.0, 9.0, 2, 1));
        let order: Vec<(u32, u8, f64)> =
            idx.iter().map(|i| (i.week(), i.day(), i.start())).collect();
        assert_eq!(order, vec![(1, 2, 8.0), (1, 5, 10.0), (2, 2, 12.0)]);
        assert!((idx.total_duration() - 5.0).abs() < 1e-10);
    }

    fn arb_interval() -> impl Strategy<Value = Interval> {
        (0u32..47, 1u32..8, 1u8..=3, 1u32..=2).prop_map(|(s, len, day, week)| {
            let start = f64::from(s) * 0.5;
            let end = (start + f64::from(len) * 0.5).min(24.0);
            Interval::new(start, end, day, week).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_inserted_interval_is_found(
            stored in prop::collection::vec(arb_interval(), 1..60),
            pick in any::<prop::sample::Index>(),
        ) {
            let idx: IntervalIndex = stored.iter().copied().collect();
            let picked = stored[pick.index(stored.len())];
            prop_assert!(idx.query_overlap(&picked).contains(&picked));
            prop_assert!(idx.any_overlap(&picked));
        }

        #[test]
        fn prop_matches_linear_scan(
            stored in prop::collection::vec(arb_interval(), 0..60),
            query in arb_interval(),
        ) {
            let idx: IntervalIndex = stored.iter().copied().collect();
            let mut expected: Vec<Interval> =
                stored.iter().filter_map(|s| s.overlap(&query)).collect();
            let mut actual = idx.query_overlap(&query);
            let key = |i: &Interval| (i.start(), i.end());
            expected.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
            actual.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
            prop_assert_eq!(&actual, &expected);
            prop_assert_eq!(idx.any_overlap(&query), !expected.is_empty());
        }

        #[test]
        fn prop_disjoint_slots_never_overlap(
            a in arb_interval(),
            b in arb_interval(),
        ) {
            prop_assume!(a.day() != b.day() || a.week() != b.week());
            prop_assert!(a.overlap(&b).is_none());
            let idx: IntervalIndex = std::iter::once(a).collect();
            prop_assert!(idx.query_overlap(&b).is_empty());
        }
    }
}
