//! Opacity blending.
//!
//! Blending is a per-channel linear interpolation between a color and a
//! background, evaluated on gamma-encoded channels. It is not perceptually
//! exact (no linear-light conversion), which is fine for generating graded
//! shades of one base color.

use serde::{Deserialize, Serialize};

use super::value::{ColorValue, WHITE};
use crate::error::ColorError;

/// Opacity normalized to a fraction in `[0, 1]`.
///
/// `0` yields the background, `1` yields the original color.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Opacity(f64);

impl Opacity {
    pub const TRANSPARENT: Opacity = Opacity(0.0);
    pub const OPAQUE: Opacity = Opacity(1.0);

    /// Accept a fraction in `[0, 1]` or a percentage in `[0, 100]`.
    ///
    /// Values in `[0, 1]` are always read as fractions, so `1` means fully
    /// opaque rather than one percent.
    pub fn new(value: f64) -> Result<Self, ColorError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Opacity(value))
        } else if (0.0..=100.0).contains(&value) {
            Ok(Opacity(value / 100.0))
        } else {
            Err(ColorError::InvalidOpacity(value))
        }
    }

    /// Caller guarantees `fraction` is within `[0, 1]`.
    pub(crate) fn from_fraction(fraction: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&fraction));
        Opacity(fraction)
    }

    /// The normalized fraction.
    pub fn fraction(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Opacity {
    type Error = ColorError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Opacity::new(value)
    }
}

impl From<Opacity> for f64 {
    fn from(value: Opacity) -> Self {
        value.0
    }
}

impl ColorValue {
    /// Blend toward `background`, returning a color in this color's format.
    ///
    /// `background` may be in any format; it is rescaled to this color's
    /// channel range before interpolating.
    pub fn blend(&self, opacity: Opacity, background: &ColorValue) -> ColorValue {
        let format = self.format();
        let fg = self.channels_in(format);
        let bg = background.channels_in(format);
        let alpha = opacity.fraction();

        let mut out = [0.0; 3];
        for (channel, (f, b)) in out.iter_mut().zip(fg.iter().zip(bg.iter())) {
            *channel = alpha * f + (1.0 - alpha) * b;
        }
        ColorValue::from_channels(out, format)
    }
}

/// Lighten `color` toward white by `opacity` (fraction or percentage).
///
/// ```
/// use habitstats_core::{make_opaque, ColorValue};
///
/// let color: ColorValue = "#c3d3d1".parse().unwrap();
/// assert_eq!(make_opaque(&color, 0.5).unwrap().to_hex(), "#e1e9e8");
/// ```
pub fn make_opaque(color: &ColorValue, opacity: f64) -> Result<ColorValue, ColorError> {
    make_opaque_over(color, opacity, &WHITE)
}

/// Like [`make_opaque`], blending toward an explicit background.
pub fn make_opaque_over(
    color: &ColorValue,
    opacity: f64,
    background: &ColorValue,
) -> Result<ColorValue, ColorError> {
    let opacity = Opacity::new(opacity)?;
    Ok(color.blend(opacity, background))
}
