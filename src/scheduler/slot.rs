//! Greedy first-fit slot assignment.
//!
//! # Algorithm
//!
//! For two teams and one week:
//! 1. Try days 1..=7 in ascending order.
//! 2. Intersect both teams' windows for the day; skip the day if the
//!    overlap is missing or shorter than the game duration.
//! 3. Try venues in input order; query the venue's availability index with
//!    the team overlap.
//! 4. Within each team×venue window, try starts `window.start + k * step`
//!    while the game still fits; a start is free if the venue's occupancy
//!    index reports no overlap.
//! 5. The first free start is booked and returned as a [`Game`].
//!
//! No backtracking: an earlier booking is never moved to make room for a
//! later pair.
//!
//! # Complexity
//! O(7 · v · (s · log b)) per pair, where v = venues, s = candidate starts
//! per window and b = bookings in the queried bucket.

use crate::config::{SchedulerConfig, MIN_TIME_STEP};
use crate::index::IntervalIndex;
use crate::models::{Game, Interval, League, Team, Venue, VenueId, DAYS_PER_WEEK};

/// Availability and occupancy indices of one venue.
#[derive(Debug, Clone)]
pub struct VenueBook {
    venue_id: VenueId,
    availability: IntervalIndex,
    occupancy: IntervalIndex,
}

impl VenueBook {
    /// Indexes the venue's weekly hours for weeks `1..=weeks_per_year`,
    /// with no bookings.
    pub fn new(venue: &Venue, weeks_per_year: u32) -> Self {
        let availability = (1..=weeks_per_year)
            .flat_map(move |week| {
                venue
                    .availability
                    .open_days()
                    .filter_map(move |day| venue.availability.interval(day, week))
            })
            .collect();
        Self::from_indices(venue.id, availability, IntervalIndex::new())
    }

    /// Assembles a book from prebuilt indices.
    pub fn from_indices(
        venue_id: VenueId,
        availability: IntervalIndex,
        occupancy: IntervalIndex,
    ) -> Self {
        Self {
            venue_id,
            availability,
            occupancy,
        }
    }

    /// Venue this book belongs to.
    pub fn venue_id(&self) -> VenueId {
        self.venue_id
    }

    /// Opening hours index.
    pub fn availability(&self) -> &IntervalIndex {
        &self.availability
    }

    /// Committed bookings index.
    pub fn occupancy(&self) -> &IntervalIndex {
        &self.occupancy
    }

    /// Whether `slot` conflicts with no booking.
    pub fn is_free(&self, slot: &Interval) -> bool {
        !self.occupancy.any_overlap(slot)
    }

    /// Records a booking.
    pub fn book(&mut self, slot: Interval) {
        self.occupancy.insert(slot);
    }
}

/// Finds and commits game slots.
#[derive(Debug, Clone)]
pub struct SlotFinder {
    game_duration: f64,
    time_step: f64,
}

impl SlotFinder {
    /// Creates a finder using the configured duration and step.
    ///
    /// Steps below [`MIN_TIME_STEP`] (or NaN) are raised to it, bounding
    /// the candidate starts per window.
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            game_duration: config.game_duration,
            time_step: config.time_step.max(MIN_TIME_STEP),
        }
    }

    /// Finds the first feasible slot for `team1` vs `team2` in `week`,
    /// books it, and returns the game.
    ///
    /// Returns `None` when no day, venue, and start satisfy every window
    /// and the occupancy check; nothing is booked in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use league_schedule::config::SchedulerConfig;
    /// use league_schedule::models::{League, Team, Venue, WeeklyAvailability};
    /// use league_schedule::scheduler::{SlotFinder, VenueBook};
    ///
    /// let day3 = |s, e| WeeklyAvailability::closed().with_day(3, s, e).unwrap();
    /// let league = League::new(1, 1, 10, 10);
    /// let home = Team::new(1, 1).with_availability(day3(9.0, 17.0));
    /// let away = Team::new(2, 1).with_availability(day3(9.0, 17.0));
    /// let venue = Venue::new(1).with_availability(day3(10.0, 20.0));
    ///
    /// let mut venues = vec![VenueBook::new(&venue, 52)];
    /// let finder = SlotFinder::new(&SchedulerConfig::default());
    ///
    /// let game = finder.schedule_game(&home, &away, 1, &league, &mut venues).unwrap();
    /// assert_eq!((game.day(), game.start(), game.end()), (3, 10.0, 12.0));
    ///
    /// let next = finder.schedule_game(&home, &away, 1, &league, &mut venues).unwrap();
    /// assert_eq!(next.start(), 12.0);
    /// ```
    pub fn schedule_game(
        &self,
        team1: &Team,
        team2: &Team,
        week: u32,
        league: &League,
        venues: &mut [VenueBook],
    ) -> Option<Game> {
        let (idx, slot) = self.find_slot(team1, team2, week, venues)?;
        let book = &mut venues[idx];
        book.book(slot);
        Some(Game::new(
            team1.id,
            team2.id,
            league.id,
            league.season.as_str(),
            slot,
            book.venue_id(),
        ))
    }

    /// Finds the first feasible `(venue index, slot)` without booking it.
    pub fn find_slot(
        &self,
        team1: &Team,
        team2: &Team,
        week: u32,
        venues: &[VenueBook],
    ) -> Option<(usize, Interval)> {
        for day in 1..=DAYS_PER_WEEK {
            let Some(teams) = self.team_overlap(team1, team2, day, week) else {
                continue;
            };
            for (idx, venue) in venues.iter().enumerate() {
                for window in venue.availability.query_overlap(&teams) {
                    if let Some(slot) = self.first_free_start(&window, venue) {
                        return Some((idx, slot));
                    }
                }
            }
        }
        None
    }

    /// Both teams' common window on `day`, if long enough for a game.
    fn team_overlap(&self, team1: &Team, team2: &Team, day: u8, week: u32) -> Option<Interval> {
        let a = team1.availability.interval(day, week)?;
        let b = team2.availability.interval(day, week)?;
        a.overlap(&b).filter(|o| o.duration() >= self.game_duration)
    }

    /// Earliest step-aligned start in `window` not conflicting with `venue`.
    fn first_free_start(&self, window: &Interval, venue: &VenueBook) -> Option<Interval> {
        if window.duration() < self.game_duration {
            return None;
        }
        (0u32..)
            .map(|k| window.start() + f64::from(k) * self.time_step)
            .map_while(|start| window.span_from(start, self.game_duration))
            .find(|slot| venue.is_free(slot))
    }
}
