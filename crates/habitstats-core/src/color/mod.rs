//! Color handling: format classification, opacity blending, palettes, and
//! colormaps.
//!
//! Every derived color keeps the format of the color it was derived from, so
//! a caller working with hex strings only ever sees hex strings back.

mod colormap;
mod opacity;
mod palette;
mod value;

pub(crate) use colormap::build_linear;

pub use colormap::{
    get_binary_cmap, get_linear_cmap, opacity_levels, BinaryColormap, LinearColormap,
    DEFAULT_LINEAR_LEVELS, MIN_LEVEL_OPACITY,
};
pub use opacity::{make_opaque, make_opaque_over, Opacity};
pub use palette::{
    generate_color_dict, generate_color_dict_with, qualitative_palette, PaletteMapping,
    FIVE_ITEM_PALETTE, SET3,
};
pub use value::{ColorFormat, ColorValue, RawColor, GAINSBORO, WHITE};
