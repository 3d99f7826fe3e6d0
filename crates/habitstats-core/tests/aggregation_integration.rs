//! Integration tests for event aggregation.
//!
//! This test file verifies:
//! - Deduplication and date ordering
//! - The week 0 correction at the year boundary
//! - Calendar-complete week and month grids

use chrono::NaiveDate;
use habitstats_core::{
    daily_series, get_grid, iso_week_with_year_boundary_fix, month_of, process_data, BucketBy,
    EventRecord,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_log() -> Vec<EventRecord> {
    vec![
        EventRecord::new(date(2022, 1, 1), "run"),
        EventRecord::new(date(2022, 1, 2), "run"),
        EventRecord::new(date(2022, 1, 4), "read"),
        EventRecord::new(date(2022, 1, 4), "read"),
        EventRecord::new(date(2022, 2, 14), "run"),
        EventRecord::new(date(2022, 12, 27), "read"),
    ]
}

#[test]
fn test_bucket_functions() {
    assert_eq!(month_of(date(2022, 2, 14)), 2);
    assert_eq!(iso_week_with_year_boundary_fix(date(2022, 1, 1)), 0);
    assert_eq!(iso_week_with_year_boundary_fix(date(2022, 12, 27)), 52);
}

#[test]
fn test_january_week_52_lands_in_week_zero() {
    let data = process_data(&sample_log());
    let grid = get_grid(&data, BucketBy::Week);

    assert_eq!(grid.count(0, "run"), Some(2));
    assert_eq!(grid.count(52, "run"), None);
    assert_eq!(grid.count(52, "read"), Some(1));
}

#[test]
fn test_grid_shapes_are_fixed() {
    let data = process_data(&sample_log());
    assert_eq!(get_grid(&data, BucketBy::Week).n_rows(), 53);
    assert_eq!(get_grid(&data, BucketBy::Month).n_rows(), 12);

    let single = process_data(&[EventRecord::new(date(2023, 7, 1), "swim")]);
    assert_eq!(get_grid(&single, BucketBy::Week).n_rows(), 53);
    assert_eq!(get_grid(&single, BucketBy::Month).n_rows(), 12);
}

#[test]
fn test_duplicate_pairs_count_once() {
    init_tracing();
    let log = vec![
        EventRecord::new(date(2023, 1, 2), "run"),
        EventRecord::new(date(2023, 1, 2), "run"),
    ];
    let data = process_data(&log);
    assert_eq!(data.len(), 1);

    let grid = get_grid(&data, BucketBy::Week);
    assert_eq!(grid.count(1, "run"), Some(1));
    let grid = get_grid(&data, BucketBy::Month);
    assert_eq!(grid.count(1, "run"), Some(1));
}

#[test]
fn test_month_grid_counts_and_no_data() {
    let data = process_data(&sample_log());
    let grid = get_grid(&data, BucketBy::Month);

    assert_eq!(grid.habits().collect::<Vec<_>>(), vec!["read", "run"]);
    assert_eq!(grid.count(1, "read"), Some(1));
    assert_eq!(grid.count(1, "run"), Some(2));
    assert_eq!(grid.count(2, "run"), Some(1));
    assert_eq!(grid.count(12, "read"), Some(1));
    assert_eq!(grid.column("run").unwrap()[11], None);
    assert_eq!(grid.column_filled("run").unwrap()[11], 0);
}

#[test]
fn test_week_53_is_dropped_from_grid() {
    init_tracing();
    // 2020-12-31 and 2021-01-01 both sit in ISO week 53 of 2020
    let data = process_data(&[
        EventRecord::new(date(2020, 12, 31), "run"),
        EventRecord::new(date(2021, 1, 1), "run"),
        EventRecord::new(date(2021, 1, 4), "run"),
    ]);
    let grid = get_grid(&data, BucketBy::Week);
    assert_eq!(grid.bucket_totals().iter().sum::<u32>(), 1);
    assert_eq!(grid.count(1, "run"), Some(1));
}

#[test]
fn test_processed_events_are_sorted() {
    let data = process_data(&sample_log());
    assert!(data.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_daily_series_aligns_habits() {
    let data = process_data(&sample_log());
    let run = daily_series(&data, "run");
    let read = daily_series(&data, "read");

    assert_eq!(run.dates, read.dates);
    assert_eq!(run.dates.first(), Some(&date(2022, 1, 1)));
    assert_eq!(run.dates.last(), Some(&date(2022, 12, 27)));
    assert_eq!(run.completed_days(), 3);
    assert_eq!(read.completed_days(), 2);
}
