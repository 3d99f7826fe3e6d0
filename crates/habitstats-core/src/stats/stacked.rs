//! Stacked bar data: long-form bucket counts, their wide pivot, and segment
//! label placement.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::events::BucketedEvent;
use super::grid::BucketBy;
use crate::config::StackedConfig;
use crate::error::ValidationError;

/// One row of the long-form count table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCount {
    pub bucket: u32,
    pub habit: String,
    pub count: u32,
}

/// Count processed events per (bucket, habit), sorted by bucket then habit.
///
/// Unlike [`get_grid`](super::get_grid) this keeps only buckets that have
/// events, including ISO week 53.
pub fn bucket_counts(events: &[BucketedEvent], by: BucketBy) -> Vec<BucketCount> {
    let mut counts: BTreeMap<(u32, &str), u32> = BTreeMap::new();
    for event in events {
        *counts
            .entry((event.bucket(by), event.habit.as_str()))
            .or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((bucket, habit), count)| BucketCount {
            bucket,
            habit: habit.to_string(),
            count,
        })
        .collect()
}

/// Bar direction; segments stack along the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

impl FromStr for Orientation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "v" | "vertical" => Ok(Orientation::Vertical),
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            other => Err(ValidationError::UnknownOrientation(other.to_string())),
        }
    }
}

/// One habit's slice of one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub bucket: u32,
    /// Index of the bar along the category axis
    pub position: usize,
    pub habit: String,
    /// Offset along the value axis where this segment starts
    pub base: f64,
    pub height: f64,
}

impl Segment {
    /// Center of the segment in (x, y) chart coordinates.
    pub fn center(&self, orientation: Orientation) -> (f64, f64) {
        let along = self.base + self.height / 2.0;
        let across = self.position as f64;
        match orientation {
            Orientation::Vertical => (across, along),
            Orientation::Horizontal => (along, across),
        }
    }
}

/// A centered numeric label for one segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentLabel {
    pub bucket: u32,
    pub habit: String,
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub text: String,
}

/// Wide table: one row per bucket, one column per habit, missing pairs as 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBars {
    orientation: Orientation,
    buckets: Vec<u32>,
    habits: Vec<String>,
    /// `values[row][column]`
    values: Vec<Vec<u32>>,
}

impl StackedBars {
    /// Pivot a long-form table. Buckets and habits are sorted; repeated
    /// (bucket, habit) rows are summed, saturating at `u32::MAX`.
    pub fn pivot(rows: &[BucketCount], orientation: Orientation) -> Self {
        let buckets: Vec<u32> = rows
            .iter()
            .map(|r| r.bucket)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let habits: Vec<String> = rows
            .iter()
            .map(|r| r.habit.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut values = vec![vec![0u32; habits.len()]; buckets.len()];
        for row in rows {
            // both searches succeed: the axes were built from these rows
            if let (Ok(r), Ok(c)) = (
                buckets.binary_search(&row.bucket),
                habits.binary_search_by(|h| h.as_str().cmp(row.habit.as_str())),
            ) {
                values[r][c] = values[r][c].saturating_add(row.count);
            }
        }

        Self {
            orientation,
            buckets,
            habits,
            values,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn buckets(&self) -> &[u32] {
        &self.buckets
    }

    pub fn habits(&self) -> &[String] {
        &self.habits
    }

    /// Value at one (bucket, habit) cell, if both exist.
    pub fn value(&self, bucket: u32, habit: &str) -> Option<u32> {
        let r = self.buckets.binary_search(&bucket).ok()?;
        let c = self.habits.iter().position(|h| h == habit)?;
        Some(self.values[r][c])
    }

    /// One habit's values across buckets.
    pub fn column(&self, habit: &str) -> Option<Vec<u32>> {
        let c = self.habits.iter().position(|h| h == habit)?;
        Some(self.values.iter().map(|row| row[c]).collect())
    }

    /// Height of each stacked bar. Summed in `u64` so wide bars of large
    /// counts cannot overflow.
    pub fn bucket_totals(&self) -> Vec<u64> {
        self.values
            .iter()
            .map(|row| row.iter().map(|v| u64::from(*v)).sum())
            .collect()
    }

    /// Tallest bar.
    pub fn max_total(&self) -> u64 {
        self.bucket_totals().into_iter().max().unwrap_or(0)
    }

    /// Upper end of the value axis: the tallest bar plus `headroom` slack.
    pub fn value_axis_max(&self, headroom: f64) -> f64 {
        self.max_total() as f64 * headroom
    }

    /// All segments, habit by habit, stacked in habit order within each bar.
    pub fn segments(&self) -> Vec<Segment> {
        let mut bases = vec![0.0f64; self.buckets.len()];
        let mut segments = Vec::with_capacity(self.buckets.len() * self.habits.len());
        for (c, habit) in self.habits.iter().enumerate() {
            for (r, bucket) in self.buckets.iter().enumerate() {
                let height = f64::from(self.values[r][c]);
                segments.push(Segment {
                    bucket: *bucket,
                    position: r,
                    habit: habit.clone(),
                    base: bases[r],
                    height,
                });
                bases[r] += height;
            }
        }
        segments
    }

    /// Labels for segments tall enough to carry one.
    ///
    /// A segment is labeled when its height is at least
    /// `label_threshold_ratio` of the tallest bar; empty segments never are.
    pub fn annotate(&self, config: &StackedConfig) -> Vec<SegmentLabel> {
        let threshold = label_threshold(self.max_total(), config.label_threshold_ratio);
        let decimals = usize::from(config.label_decimals);

        self.segments()
            .into_iter()
            .filter(|segment| segment.height > 0.0 && segment.height >= threshold)
            .map(|segment| {
                let (x, y) = segment.center(self.orientation);
                SegmentLabel {
                    bucket: segment.bucket,
                    text: format!("{:.*}", decimals, segment.height),
                    value: segment.height,
                    habit: segment.habit,
                    x,
                    y,
                }
            })
            .collect()
    }
}

/// Minimum labeled segment height for a chart whose tallest bar is
/// `max_total`.
pub fn label_threshold(max_total: u64, ratio: f64) -> f64 {
    max_total as f64 * ratio
}
