//! Per-habit daily presence series.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::events::BucketedEvent;
use crate::color::{BinaryColormap, ColorValue};
use crate::config::StyleConfig;

/// Every day from the first to the last logged event, with a parallel flag
/// for whether the habit was done that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    pub habit: String,
    pub dates: Vec<NaiveDate>,
    pub present: Vec<bool>,
}

impl DailySeries {
    /// Presence as 0/1 values, for renderers that take numeric arrays.
    pub fn values(&self) -> Vec<u8> {
        self.present.iter().map(|p| u8::from(*p)).collect()
    }

    /// Number of days the habit was done.
    pub fn completed_days(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Binary colormap for this series with the configured background.
    pub fn colormap(&self, color: &ColorValue, config: &StyleConfig) -> BinaryColormap {
        config.binary_cmap(color)
    }
}

/// Build the daily series for `habit`.
///
/// The date range spans the whole log, not just this habit's events, so
/// series for different habits line up day by day.
pub fn daily_series(events: &[BucketedEvent], habit: &str) -> DailySeries {
    let (Some(first), Some(last)) = (
        events.iter().map(|e| e.date).min(),
        events.iter().map(|e| e.date).max(),
    ) else {
        return DailySeries {
            habit: habit.to_string(),
            ..DailySeries::default()
        };
    };

    let done: HashSet<NaiveDate> = events
        .iter()
        .filter(|e| e.habit == habit)
        .map(|e| e.date)
        .collect();

    let dates: Vec<NaiveDate> = first.iter_days().take_while(|d| *d <= last).collect();
    let present = dates.iter().map(|d| done.contains(d)).collect();

    DailySeries {
        habit: habit.to_string(),
        dates,
        present,
    }
}
