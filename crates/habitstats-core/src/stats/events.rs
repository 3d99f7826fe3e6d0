//! Habit event records and calendar bucketing.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::grid::BucketBy;

/// Synthetic week bucket for the days of January that still belong to the
/// last ISO week of the previous year.
pub const PRIOR_YEAR_WEEK: u32 = 0;

/// One habit completion on one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub habit: String,
}

impl EventRecord {
    pub fn new(date: NaiveDate, habit: impl Into<String>) -> Self {
        Self {
            date,
            habit: habit.into(),
        }
    }
}

/// An event with its month and week buckets attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BucketedEvent {
    pub date: NaiveDate,
    pub habit: String,
    /// Calendar month (1-12)
    pub month: u32,
    /// ISO week with the January correction applied (0-53)
    pub week: u32,
}

impl BucketedEvent {
    /// Bucket of this event under the given grouping.
    pub fn bucket(&self, by: BucketBy) -> u32 {
        match by {
            BucketBy::Week => self.week,
            BucketBy::Month => self.month,
        }
    }
}

impl From<&EventRecord> for BucketedEvent {
    fn from(event: &EventRecord) -> Self {
        Self {
            date: event.date,
            habit: event.habit.clone(),
            month: month_of(event.date),
            week: iso_week_with_year_boundary_fix(event.date),
        }
    }
}

/// Calendar month of `date` (1-12).
pub fn month_of(date: NaiveDate) -> u32 {
    date.month()
}

/// ISO week of `date`, except that week 52 falling in January becomes
/// [`PRIOR_YEAR_WEEK`] so it does not merge with the same year's week 52.
pub fn iso_week_with_year_boundary_fix(date: NaiveDate) -> u32 {
    let week = date.iso_week().week();
    if week == 52 && date.month() == 1 {
        PRIOR_YEAR_WEEK
    } else {
        week
    }
}

/// Drop duplicate (date, habit) pairs, order by date, and attach buckets.
///
/// The first occurrence of a duplicate is kept; events on the same date keep
/// their input order.
pub fn process_data(events: &[EventRecord]) -> Vec<BucketedEvent> {
    let mut seen = HashSet::with_capacity(events.len());
    let mut processed: Vec<BucketedEvent> = events
        .iter()
        .filter(|event| seen.insert((event.date, event.habit.as_str())))
        .map(BucketedEvent::from)
        .collect();
    processed.sort_by_key(|event| event.date);

    let duplicates = events.len() - processed.len();
    if duplicates > 0 {
        tracing::debug!(duplicates, kept = processed.len(), "collapsed duplicate habit events");
    }

    processed
}
