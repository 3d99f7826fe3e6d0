//! Deterministic per-item palettes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::ColorValue;
use crate::config::ColorsConfig;

/// ColorBrewer "Set3" qualitative palette.
pub const SET3: [[u8; 3]; 12] = [
    [0x8d, 0xd3, 0xc7],
    [0xff, 0xff, 0xb3],
    [0xbe, 0xba, 0xda],
    [0xfb, 0x80, 0x72],
    [0x80, 0xb1, 0xd3],
    [0xfd, 0xb4, 0x62],
    [0xb3, 0xde, 0x69],
    [0xfc, 0xcd, 0xe5],
    [0xd9, 0xd9, 0xd9],
    [0xbc, 0x80, 0xbd],
    [0xcc, 0xeb, 0xc5],
    [0xff, 0xed, 0x6f],
];

/// Hand-tuned colors used when exactly five items are colored.
pub const FIVE_ITEM_PALETTE: [ColorValue; 5] = [
    ColorValue::Hex([0xfa, 0x88, 0x79]),
    ColorValue::Hex([0x96, 0xc8, 0xdf]),
    ColorValue::Hex([0xbc, 0xe4, 0xcf]),
    ColorValue::Hex([0xf9, 0xe0, 0x31]),
    ColorValue::Hex([0xc3, 0xd3, 0xd1]),
];

/// First `n` Set3 colors, cycling when `n` exceeds the palette size.
pub fn qualitative_palette(n: usize) -> Vec<ColorValue> {
    SET3.iter()
        .cycle()
        .take(n)
        .map(|rgb| ColorValue::Hex(*rgb))
        .collect()
}

/// Order-preserving label-to-color mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteMapping {
    colors: IndexMap<String, ColorValue>,
}

impl PaletteMapping {
    /// Color assigned to `label`.
    pub fn get(&self, label: &str) -> Option<&ColorValue> {
        self.colors.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.colors.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Labels in assignment order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.colors.iter().map(|(label, color)| (label.as_str(), color))
    }

    /// Assign or replace a color for `label`, keeping its original position.
    pub fn insert(&mut self, label: impl Into<String>, color: ColorValue) {
        self.colors.insert(label.into(), color);
    }
}

impl FromIterator<(String, ColorValue)> for PaletteMapping {
    fn from_iter<T: IntoIterator<Item = (String, ColorValue)>>(iter: T) -> Self {
        let mut colors = IndexMap::new();
        for (label, color) in iter {
            colors.insert(label, color);
        }
        Self { colors }
    }
}

/// Assign a color to each item using the default style colors.
///
/// Exactly five items get the hand-tuned palette; any other count draws from
/// Set3. A repeated label keeps the position of its first occurrence and
/// the color of its last.
pub fn generate_color_dict<S: AsRef<str>>(items: &[S]) -> PaletteMapping {
    generate_color_dict_with(items, &ColorsConfig::default())
}

/// Like [`generate_color_dict`], with the five-item palette taken from
/// `colors`.
pub fn generate_color_dict_with<S: AsRef<str>>(items: &[S], colors: &ColorsConfig) -> PaletteMapping {
    let palette = if items.len() == colors.five_item_palette.len() {
        tracing::trace!(count = items.len(), "using hand-tuned five item palette");
        colors.five_item_palette.to_vec()
    } else {
        tracing::trace!(count = items.len(), "using qualitative palette");
        qualitative_palette(items.len())
    };

    items
        .iter()
        .map(|item| item.as_ref().to_string())
        .zip(palette)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_items_use_fixed_palette() {
        let items = ["run", "read", "meditate", "stretch", "journal"];
        let mapping = generate_color_dict(&items);

        let hexes: Vec<String> = mapping.iter().map(|(_, c)| c.to_hex()).collect();
        assert_eq!(
            hexes,
            vec!["#fa8879", "#96c8df", "#bce4cf", "#f9e031", "#c3d3d1"]
        );
        assert_eq!(mapping.labels().collect::<Vec<_>>(), items);
    }

    #[test]
    fn test_other_counts_use_set3() {
        let mapping = generate_color_dict(&["a", "b", "c"]);
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get("a").unwrap().to_hex(), "#8dd3c7");
        assert_eq!(mapping.get("b").unwrap().to_hex(), "#ffffb3");
        assert_eq!(mapping.get("c").unwrap().to_hex(), "#bebada");
    }

    #[test]
    fn test_set3_cycles_past_twelve() {
        let palette = qualitative_palette(14);
        assert_eq!(palette.len(), 14);
        assert_eq!(palette[12], palette[0]);
        assert_eq!(palette[13], palette[1]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let items: Vec<String> = (0..8).map(|i| format!("habit-{i}")).collect();
        assert_eq!(generate_color_dict(&items), generate_color_dict(&items));
    }

    #[test]
    fn test_duplicate_label_takes_last_color() {
        let mapping = generate_color_dict(&["run", "read", "run"]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.labels().next(), Some("run"));
        assert_eq!(mapping.get("run").unwrap().to_hex(), "#bebada");
        assert_eq!(mapping.get("read").unwrap().to_hex(), "#ffffb3");
    }

    #[test]
    fn test_empty_items() {
        let items: [&str; 0] = [];
        assert!(generate_color_dict(&items).is_empty());
    }
}
