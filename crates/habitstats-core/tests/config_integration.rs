//! Integration tests for style configuration files.

use std::io::Write;

use habitstats_core::{
    prepare_grid_heatmap, process_data, BucketBy, ColorValue, ConfigError, EventRecord,
    StyleConfig,
};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
[colors]
zero_color = "#f0f0f0"
five_item_palette = ["#111111", "#222222", "#333333", "#444444", "#555555"]

[colormap]
week_levels = 4
"##
    )
    .unwrap();

    let cfg = StyleConfig::load(file.path()).unwrap();
    assert_eq!(cfg.colors.zero_color, ColorValue::Hex([0xf0, 0xf0, 0xf0]));
    assert_eq!(cfg.colormap.week_levels, 4);
    assert_eq!(cfg.colormap.month_levels, 31);

    let palette = cfg.palette(&["a", "b", "c", "d", "e"]);
    assert_eq!(palette.get("e").unwrap().to_hex(), "#555555");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = StyleConfig::load(&dir.path().join("style.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::LoadFailed { .. }));
}

#[test]
fn test_config_drives_heatmap() {
    let cfg = StyleConfig::from_toml_str(
        r##"
[colors]
zero_color = "#000000"

[colormap]
week_levels = 3
"##,
    )
    .unwrap();

    let date = chrono::NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
    let data = process_data(&[EventRecord::new(date, "run")]);
    let heatmap = prepare_grid_heatmap(&data, BucketBy::Week, None, &cfg);

    let row = heatmap.row("run").unwrap();
    assert_eq!(row.colormap.stops().len(), 4);
    assert_eq!(row.colormap.zero_color().to_hex(), "#000000");
}
