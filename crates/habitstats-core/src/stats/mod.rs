//! Statistics module for habitstats
//!
//! This module turns a habit event log into calendar-aligned count data:
//! bucketed events, dense week/month grids, per-habit daily series, the
//! all-habits heatmap, and stacked bar tables with segment labels.

mod daily;
mod events;
mod grid;
mod heatmap;
mod stacked;

pub use events::{
    iso_week_with_year_boundary_fix, month_of, process_data, BucketedEvent, EventRecord,
    PRIOR_YEAR_WEEK,
};

pub use grid::{get_grid, BucketBy, Grid};

pub use daily::{daily_series, DailySeries};

pub use heatmap::{heatmap_from_grid, prepare_grid_heatmap, CellLabel, GridHeatmap, HeatmapRow};

pub use stacked::{
    bucket_counts, label_threshold, BucketCount, Orientation, Segment, SegmentLabel, StackedBars,
};
