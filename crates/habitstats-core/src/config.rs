//! TOML-based style configuration.
//!
//! Holds every default color and threshold used when building palettes,
//! colormaps, and stacked bar labels:
//! - Background and zero-stop colors
//! - The hand-tuned five item palette
//! - Colormap level counts per grouping
//! - Stacked bar label threshold and formatting
//!
//! Every field has a named default, so a partial (or empty) TOML file is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::{
    build_linear, generate_color_dict_with, BinaryColormap, ColorValue, LinearColormap,
    PaletteMapping, DEFAULT_LINEAR_LEVELS, FIVE_ITEM_PALETTE, GAINSBORO, WHITE,
};
use crate::error::ConfigError;
use crate::stats::BucketBy;

/// Color defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorsConfig {
    /// Binary colormap color for days without the habit.
    #[serde(default = "default_absent_background")]
    pub absent_background: ColorValue,
    /// First stop of linear colormaps.
    #[serde(default = "default_white")]
    pub zero_color: ColorValue,
    /// Color that opacity blending fades toward.
    #[serde(default = "default_white")]
    pub blend_background: ColorValue,
    /// Colors used when exactly five items are colored.
    #[serde(default = "default_five_item_palette")]
    pub five_item_palette: [ColorValue; 5],
}

/// Colormap level counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColormapConfig {
    /// Levels of a stand-alone linear colormap.
    #[serde(default = "default_n_colors")]
    pub n_colors: usize,
    /// Levels of weekly grid rows (one per weekday).
    #[serde(default = "default_week_levels")]
    pub week_levels: usize,
    /// Levels of monthly grid rows (one per day of the longest month).
    #[serde(default = "default_month_levels")]
    pub month_levels: usize,
}

/// Stacked bar labeling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedConfig {
    /// Fraction of the tallest bar a segment must reach to be labeled.
    #[serde(default = "default_label_threshold_ratio")]
    pub label_threshold_ratio: f64,
    /// Decimal places in segment labels.
    #[serde(default = "default_label_decimals")]
    pub label_decimals: u8,
    /// Value axis extent as a multiple of the tallest bar.
    #[serde(default = "default_axis_headroom")]
    pub axis_headroom: f64,
}

/// Style configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub colormap: ColormapConfig,
    #[serde(default)]
    pub stacked: StackedConfig,
}

// Default functions
fn default_absent_background() -> ColorValue {
    GAINSBORO
}
fn default_white() -> ColorValue {
    WHITE
}
fn default_five_item_palette() -> [ColorValue; 5] {
    FIVE_ITEM_PALETTE
}
fn default_n_colors() -> usize {
    DEFAULT_LINEAR_LEVELS
}
fn default_week_levels() -> usize {
    7
}
fn default_month_levels() -> usize {
    31
}
fn default_label_threshold_ratio() -> f64 {
    0.05
}
fn default_label_decimals() -> u8 {
    1
}
fn default_axis_headroom() -> f64 {
    1.1
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            absent_background: default_absent_background(),
            zero_color: default_white(),
            blend_background: default_white(),
            five_item_palette: default_five_item_palette(),
        }
    }
}

impl Default for ColormapConfig {
    fn default() -> Self {
        Self {
            n_colors: default_n_colors(),
            week_levels: default_week_levels(),
            month_levels: default_month_levels(),
        }
    }
}

impl Default for StackedConfig {
    fn default() -> Self {
        Self {
            label_threshold_ratio: default_label_threshold_ratio(),
            label_decimals: default_label_decimals(),
            axis_headroom: default_axis_headroom(),
        }
    }
}

impl ColormapConfig {
    /// Level count for grid rows grouped by `by`.
    pub fn levels_for(&self, by: BucketBy) -> usize {
        match by {
            BucketBy::Week => self.week_levels,
            BucketBy::Month => self.month_levels,
        }
    }
}

impl StyleConfig {
    /// Parse from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, a color does not
    /// classify, or a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let cfg: StyleConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded style configuration");
        Ok(cfg)
    }

    /// Serialize to pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges that the types alone do not enforce.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio = self.stacked.label_threshold_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::InvalidValue {
                key: "stacked.label_threshold_ratio".into(),
                message: format!("{ratio} is not within [0, 1]"),
            });
        }

        let headroom = self.stacked.axis_headroom;
        if !headroom.is_finite() || headroom < 1.0 {
            return Err(ConfigError::InvalidValue {
                key: "stacked.axis_headroom".into(),
                message: format!("{headroom} must be at least 1"),
            });
        }

        Ok(())
    }

    /// Binary colormap over the configured absent background.
    pub fn binary_cmap(&self, color: &ColorValue) -> BinaryColormap {
        BinaryColormap::new(color.clone(), self.colors.absent_background.clone())
    }

    /// Linear colormap with `levels` shades, using the configured zero color
    /// and blend background.
    pub fn linear_cmap(&self, color: &ColorValue, levels: usize) -> LinearColormap {
        build_linear(
            color,
            levels,
            &self.colors.zero_color,
            &self.colors.blend_background,
        )
    }

    /// Linear colormap with the configured default level count.
    pub fn default_linear_cmap(&self, color: &ColorValue) -> LinearColormap {
        self.linear_cmap(color, self.colormap.n_colors)
    }

    /// Palette for `items` using the configured five item palette.
    pub fn palette<S: AsRef<str>>(&self, items: &[S]) -> PaletteMapping {
        generate_color_dict_with(items, &self.colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorFormat;

    #[test]
    fn test_default_config_roundtrip() {
        let cfg = StyleConfig::default();
        let toml_str = cfg.to_toml_string().unwrap();
        let parsed = StyleConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(StyleConfig::from_toml_str("").unwrap(), StyleConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let cfg = StyleConfig::from_toml_str(
            r#"
            [colors]
            absent_background = [0.5, 0.5, 0.5]

            [stacked]
            label_decimals = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.colors.absent_background.format(), ColorFormat::Rgb01);
        assert_eq!(cfg.colors.zero_color, WHITE);
        assert_eq!(cfg.stacked.label_decimals, 0);
        assert_eq!(cfg.colormap.week_levels, 7);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = StyleConfig::from_toml_str(
            r##"
            [colors]
            zero_color = "#12"
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let err = StyleConfig::from_toml_str("[stacked]\nlabel_threshold_ratio = 2.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_stacked_labels_default_to_one_decimal() {
        let cfg = StyleConfig::from_toml_str("[stacked]\nlabel_threshold_ratio = 0.1\n").unwrap();
        assert_eq!(cfg.stacked.label_decimals, 1);
        assert_eq!(StackedConfig::default().label_decimals, 1);
    }

    #[test]
    fn test_levels_for_grouping() {
        let cfg = ColormapConfig::default();
        assert_eq!(cfg.levels_for(BucketBy::Week), 7);
        assert_eq!(cfg.levels_for(BucketBy::Month), 31);
    }

    #[test]
    fn test_linear_cmap_uses_configured_zero_color() {
        let mut cfg = StyleConfig::default();
        cfg.colors.zero_color = GAINSBORO;
        let color: ColorValue = "#fa8879".parse().unwrap();
        let cmap = cfg.default_linear_cmap(&color);
        assert_eq!(cmap.stops().len(), 8);
        assert_eq!(cmap.zero_color(), &GAINSBORO);
    }
}
