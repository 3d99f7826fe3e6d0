//! # Habitstats Core Library
//!
//! This library turns a log of dated habit completions into the data behind
//! calendar-aligned habit charts. It produces colors and grids; drawing them
//! is left to whatever charting backend the caller uses.
//!
//! ## Architecture
//!
//! - **Color**: format-preserving color classification and opacity blending,
//!   deterministic palettes, and binary/graded colormaps
//! - **Stats**: event deduplication and calendar bucketing, dense week/month
//!   grids, daily presence series, and stacked bar tables
//! - **Config**: TOML-backed style defaults for all of the above
//!
//! ## Key Components
//!
//! - [`ColorValue`]: a hex or RGB color whose format is inferred once
//! - [`make_opaque`]: fade a color toward white, keeping its format
//! - [`get_linear_cmap`] / [`get_binary_cmap`]: colormaps from one base color
//! - [`process_data`] / [`get_grid`]: event log to calendar-complete grid
//! - [`StackedBars`]: wide stacked-bar table with segment label placement
//! - [`StyleConfig`]: named defaults for colors and thresholds

pub mod color;
pub mod config;
pub mod error;
pub mod stats;

pub use color::{
    generate_color_dict, get_binary_cmap, get_linear_cmap, make_opaque, make_opaque_over,
    BinaryColormap, ColorFormat, ColorValue, LinearColormap, Opacity, PaletteMapping, RawColor,
};
pub use config::{ColorsConfig, ColormapConfig, StackedConfig, StyleConfig};
pub use error::{ColorError, ConfigError, CoreError, Result, ValidationError};
pub use stats::{
    bucket_counts, daily_series, get_grid, iso_week_with_year_boundary_fix, month_of,
    prepare_grid_heatmap, process_data, BucketBy, BucketCount, BucketedEvent, DailySeries,
    EventRecord, Grid, GridHeatmap, Orientation, StackedBars,
};
