//! Dense, calendar-complete count grids.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::events::BucketedEvent;
use crate::error::ValidationError;

/// Calendar bucket a grid is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketBy {
    Week,
    Month,
}

impl BucketBy {
    /// Canonical bucket domain: weeks 0-52 or months 1-12.
    pub fn domain(self) -> RangeInclusive<u32> {
        match self {
            BucketBy::Week => 0..=52,
            BucketBy::Month => 1..=12,
        }
    }

    /// Number of rows in a grid grouped this way.
    pub fn row_count(self) -> usize {
        match self {
            BucketBy::Week => 53,
            BucketBy::Month => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BucketBy::Week => "week",
            BucketBy::Month => "month",
        }
    }

    fn index_of(self, bucket: u32) -> Option<usize> {
        let domain = self.domain();
        if domain.contains(&bucket) {
            usize::try_from(bucket - domain.start()).ok()
        } else {
            None
        }
    }
}

impl fmt::Display for BucketBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BucketBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(BucketBy::Week),
            "month" => Ok(BucketBy::Month),
            _ => Err(ValidationError::UnknownGrouping(s.to_string())),
        }
    }
}

/// Count table with one row per canonical bucket and one column per habit.
///
/// A cell is `None` when the habit has no events in that bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    by: BucketBy,
    buckets: Vec<u32>,
    columns: IndexMap<String, Vec<Option<u32>>>,
}

impl Grid {
    /// Grid with every bucket of the domain and no habits.
    pub fn empty(by: BucketBy) -> Self {
        Self {
            by,
            buckets: by.domain().collect(),
            columns: IndexMap::new(),
        }
    }

    pub fn by(&self) -> BucketBy {
        self.by
    }

    /// Row labels, in domain order.
    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    pub fn n_rows(&self) -> usize {
        self.buckets.len()
    }

    /// Habit labels, sorted.
    pub fn habits(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn n_habits(&self) -> usize {
        self.columns.len()
    }

    /// Count for one cell; `None` for "no data", an unknown habit, or a
    /// bucket outside the domain.
    pub fn count(&self, bucket: u32, habit: &str) -> Option<u32> {
        let index = self.by.index_of(bucket)?;
        self.columns.get(habit)?.get(index).copied().flatten()
    }

    /// One habit's cells in bucket order.
    pub fn column(&self, habit: &str) -> Option<&[Option<u32>]> {
        self.columns.get(habit).map(Vec::as_slice)
    }

    /// One habit's counts with "no data" read as zero.
    pub fn column_filled(&self, habit: &str) -> Option<Vec<u32>> {
        self.column(habit)
            .map(|cells| cells.iter().map(|c| c.unwrap_or(0)).collect())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<u32>])> {
        self.columns
            .iter()
            .map(|(habit, cells)| (habit.as_str(), cells.as_slice()))
    }

    /// Sum across habits for each bucket.
    pub fn bucket_totals(&self) -> Vec<u32> {
        let mut totals = vec![0u32; self.buckets.len()];
        for cells in self.columns.values() {
            for (total, cell) in totals.iter_mut().zip(cells) {
                *total += cell.unwrap_or(0);
            }
        }
        totals
    }
}

/// Count events per (bucket, habit) and reindex onto the full bucket domain.
///
/// Habits are sorted by label. Events whose bucket lies outside the domain
/// (ISO week 53) still create their habit's column but are not counted.
pub fn get_grid(events: &[BucketedEvent], by: BucketBy) -> Grid {
    let mut counts: BTreeMap<&str, BTreeMap<u32, u32>> = BTreeMap::new();
    for event in events {
        *counts
            .entry(event.habit.as_str())
            .or_default()
            .entry(event.bucket(by))
            .or_insert(0) += 1;
    }

    let mut grid = Grid::empty(by);
    let mut dropped = 0u32;
    for (habit, per_bucket) in counts {
        let mut cells = vec![None; grid.n_rows()];
        for (bucket, count) in per_bucket {
            match by.index_of(bucket) {
                Some(index) => cells[index] = Some(count),
                None => dropped += count,
            }
        }
        grid.columns.insert(habit.to_string(), cells);
    }

    if dropped > 0 {
        tracing::debug!(dropped, %by, "events outside the bucket domain left out of grid");
    }

    grid
}
