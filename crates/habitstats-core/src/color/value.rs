//! Color values and format classification.
//!
//! A color arrives either as a hex string or as a numeric triple. The format
//! is never declared by the caller; it is inferred once, at classification
//! time, and carried by the [`ColorValue`] variant from then on.
//!
//! # Known limitation
//!
//! Classification of triples is purely range based: a triple whose every
//! component is `<= 1` is read as RGB in `[0, 1]`. A 0-255 color that happens
//! to be that dark (for example `(1, 0, 1)`) is therefore read as a
//! near-white-intensity 0-1 color. This is inherited behavior and is kept
//! as-is, since changing it would change output colors for such inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Representation format of a [`ColorValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// RGB triple with channels in `[0, 1]`
    Rgb01,
    /// RGB triple with channels in `[0, 255]`
    Rgb255,
}

impl ColorFormat {
    /// Full-intensity value of one channel in this format.
    pub fn channel_max(self) -> f64 {
        match self {
            ColorFormat::Rgb01 => 1.0,
            ColorFormat::Hex | ColorFormat::Rgb255 => 255.0,
        }
    }
}

/// Untyped color input, as it appears in configuration files or other
/// loosely-typed sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    Text(String),
    Components(Vec<f64>),
}

/// A color in one of the three supported formats.
///
/// Hex colors are stored as their three decoded bytes and always render as
/// lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColor", into = "RawColor")]
pub enum ColorValue {
    Hex([u8; 3]),
    Rgb01([f64; 3]),
    Rgb255([f64; 3]),
}

/// Neutral white, used for the zero stop of linear colormaps and as the
/// default blend background.
pub const WHITE: ColorValue = ColorValue::Hex([0xff, 0xff, 0xff]);

/// Light gray used for "absent" days in binary colormaps.
pub const GAINSBORO: ColorValue = ColorValue::Hex([0xdc, 0xdc, 0xdc]);

impl ColorValue {
    /// Classify an untyped color.
    ///
    /// Strings are hex; triples are RGB `[0, 1]` if every component is
    /// `<= 1`, otherwise RGB `[0, 255]` if every component is `<= 255`.
    pub fn classify(raw: RawColor) -> Result<Self, ColorError> {
        match raw {
            RawColor::Text(text) => Self::parse_hex(&text),
            RawColor::Components(components) => Self::from_components(&components),
        }
    }

    /// Parse a hex color: six hex digits with an optional leading `#`.
    ///
    /// The name `white` is accepted as an alias for `#ffffff`.
    pub fn parse_hex(text: &str) -> Result<Self, ColorError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("white") {
            return Ok(WHITE);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ColorError::format(
                text,
                "it should be a 7 digit string like \"#rrggbb\"",
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::format(text, "invalid hex digits"));
        }

        let mut bytes = [0u8; 3];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| ColorError::format(text, "invalid hex digits"))?;
        }
        Ok(ColorValue::Hex(bytes))
    }

    /// Classify a numeric sequence as an RGB triple.
    pub fn from_components(components: &[f64]) -> Result<Self, ColorError> {
        let input = format!("{components:?}");
        let rgb: [f64; 3] = components.try_into().map_err(|_| {
            ColorError::format(
                &input,
                format!("expected 3 RGB components, got {}", components.len()),
            )
        })?;

        if rgb.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(ColorError::format(
                input,
                "components must be finite and non-negative",
            ));
        }

        if rgb.iter().all(|c| *c <= 1.0) {
            Ok(ColorValue::Rgb01(rgb))
        } else if rgb.iter().all(|c| *c <= 255.0) {
            Ok(ColorValue::Rgb255(rgb))
        } else {
            Err(ColorError::format(
                input,
                "components are outside both [0, 1] and [0, 255]",
            ))
        }
    }

    /// Format this color is expressed in.
    pub fn format(&self) -> ColorFormat {
        match self {
            ColorValue::Hex(_) => ColorFormat::Hex,
            ColorValue::Rgb01(_) => ColorFormat::Rgb01,
            ColorValue::Rgb255(_) => ColorFormat::Rgb255,
        }
    }

    /// Channels rescaled to the range used by `format`.
    ///
    /// Converting into the color's own format returns its channels untouched.
    pub fn channels_in(&self, format: ColorFormat) -> [f64; 3] {
        let (channels, own_max) = match self {
            ColorValue::Hex(bytes) => (bytes.map(f64::from), 255.0),
            ColorValue::Rgb01(rgb) => (*rgb, 1.0),
            ColorValue::Rgb255(rgb) => (*rgb, 255.0),
        };

        let target_max = format.channel_max();
        if own_max == target_max {
            channels
        } else if target_max == 1.0 {
            channels.map(|c| c / own_max)
        } else {
            channels.map(|c| c * target_max / own_max)
        }
    }

    /// Channels in `[0, 255]`.
    pub fn to_rgb255(&self) -> [f64; 3] {
        self.channels_in(ColorFormat::Rgb255)
    }

    /// Channels in `[0, 1]`.
    pub fn to_rgb01(&self) -> [f64; 3] {
        self.channels_in(ColorFormat::Rgb01)
    }

    /// Lowercase `#rrggbb` string, rounding each channel half to even.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = match self {
            ColorValue::Hex(bytes) => *bytes,
            _ => encode_bytes(self.to_rgb255()),
        };
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Build a color in `format` from channels already expressed in that
    /// format's range.
    pub fn from_channels(channels: [f64; 3], format: ColorFormat) -> Self {
        match format {
            ColorFormat::Hex => ColorValue::Hex(encode_bytes(channels)),
            ColorFormat::Rgb01 => ColorValue::Rgb01(channels),
            ColorFormat::Rgb255 => ColorValue::Rgb255(channels),
        }
    }
}

fn encode_bytes(rgb255: [f64; 3]) -> [u8; 3] {
    // clamped to [0, 255] so the cast cannot truncate
    rgb255.map(|c| c.round_ties_even().clamp(0.0, 255.0) as u8)
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(_) => f.write_str(&self.to_hex()),
            ColorValue::Rgb01([r, g, b]) | ColorValue::Rgb255([r, g, b]) => {
                write!(f, "({r}, {g}, {b})")
            }
        }
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_hex(value)
    }
}

impl TryFrom<[f64; 3]> for ColorValue {
    type Error = ColorError;

    fn try_from(value: [f64; 3]) -> Result<Self, Self::Error> {
        Self::from_components(&value)
    }
}

impl TryFrom<RawColor> for ColorValue {
    type Error = ColorError;

    fn try_from(value: RawColor) -> Result<Self, Self::Error> {
        Self::classify(value)
    }
}

impl From<ColorValue> for RawColor {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Hex(_) => RawColor::Text(value.to_hex()),
            ColorValue::Rgb01(rgb) | ColorValue::Rgb255(rgb) => RawColor::Components(rgb.to_vec()),
        }
    }
}
