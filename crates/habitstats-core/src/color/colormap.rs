//! Binary and graded colormaps derived from a single base color.

use serde::{Deserialize, Serialize};

use super::opacity::Opacity;
use super::value::{ColorValue, GAINSBORO, WHITE};

/// Default number of graded levels in a linear colormap.
pub const DEFAULT_LINEAR_LEVELS: usize = 7;

/// Lowest opacity used for the first graded level.
pub const MIN_LEVEL_OPACITY: f64 = 0.1;

/// Two-stop discrete map for presence/absence data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryColormap {
    present: ColorValue,
    absent: ColorValue,
}

impl BinaryColormap {
    pub fn new(present: ColorValue, absent: ColorValue) -> Self {
        Self { present, absent }
    }

    pub fn present(&self) -> &ColorValue {
        &self.present
    }

    pub fn absent(&self) -> &ColorValue {
        &self.absent
    }

    /// Color for one day's state.
    pub fn color_for(&self, present: bool) -> &ColorValue {
        if present {
            &self.present
        } else {
            &self.absent
        }
    }

    /// Stops in `[present, absent]` order.
    pub fn stops(&self) -> [&ColorValue; 2] {
        [&self.present, &self.absent]
    }
}

/// Build a binary colormap; `background` defaults to light gray (`#dcdcdc`).
pub fn get_binary_cmap(color: &ColorValue, background: Option<&ColorValue>) -> BinaryColormap {
    BinaryColormap::new(color.clone(), background.unwrap_or(&GAINSBORO).clone())
}

/// Graded map: a zero stop followed by `n` shades of increasing opacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearColormap {
    stops: Vec<ColorValue>,
}

impl LinearColormap {
    /// All stops, zero stop first.
    pub fn stops(&self) -> &[ColorValue] {
        &self.stops
    }

    /// Number of graded (non-zero) levels.
    pub fn levels(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn zero_color(&self) -> &ColorValue {
        &self.stops[0]
    }

    /// Color for a cell count. "No data" and zero map to the zero stop;
    /// counts above the level count saturate at the last stop.
    pub fn color_for(&self, count: Option<u32>) -> &ColorValue {
        let index = match count {
            None | Some(0) => 0,
            Some(n) => usize::try_from(n)
                .unwrap_or(usize::MAX)
                .min(self.levels()),
        };
        &self.stops[index]
    }
}

/// `n` opacities evenly spaced over `[0.1, 1.0]`, both ends included.
pub fn opacity_levels(n: usize) -> Vec<Opacity> {
    match n {
        0 => Vec::new(),
        1 => vec![Opacity::from_fraction(MIN_LEVEL_OPACITY)],
        _ => {
            let step = (1.0 - MIN_LEVEL_OPACITY) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        Opacity::OPAQUE
                    } else {
                        Opacity::from_fraction(MIN_LEVEL_OPACITY + step * i as f64)
                    }
                })
                .collect()
        }
    }
}

/// Build a graded colormap with `n_colors` shades of `color` (default 7)
/// behind a zero stop (`zero_color`, default white).
pub fn get_linear_cmap(
    color: &ColorValue,
    n_colors: Option<usize>,
    zero_color: Option<&ColorValue>,
) -> LinearColormap {
    build_linear(
        color,
        n_colors.unwrap_or(DEFAULT_LINEAR_LEVELS),
        zero_color.unwrap_or(&WHITE),
        &WHITE,
    )
}

pub(crate) fn build_linear(
    color: &ColorValue,
    n_colors: usize,
    zero_color: &ColorValue,
    background: &ColorValue,
) -> LinearColormap {
    let levels = opacity_levels(n_colors);
    let mut stops = Vec::with_capacity(levels.len() + 1);
    stops.push(zero_color.clone());
    stops.extend(levels.into_iter().map(|opacity| color.blend(opacity, background)));
    LinearColormap { stops }
}
