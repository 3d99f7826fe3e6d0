//! Integration tests for color shading and colormaps.
//!
//! This test file verifies:
//! - Format-preserving opacity blending
//! - Palette generation for five and other item counts
//! - Linear and binary colormap construction from a palette color

use habitstats_core::{
    generate_color_dict, get_binary_cmap, get_linear_cmap, make_opaque, ColorError, ColorFormat,
    ColorValue, RawColor,
};

#[test]
fn test_regression_blend() {
    let color: ColorValue = "#c3d3d1".parse().unwrap();
    assert_eq!(make_opaque(&color, 0.5).unwrap().to_hex(), "#e1e9e8");
}

#[test]
fn test_blend_keeps_each_format() {
    let inputs = [
        RawColor::Text("#FA8879".to_string()),
        RawColor::Components(vec![0.98, 0.53, 0.47]),
        RawColor::Components(vec![250.0, 136.0, 121.0]),
    ];
    let expected = [ColorFormat::Hex, ColorFormat::Rgb01, ColorFormat::Rgb255];

    for (raw, format) in inputs.into_iter().zip(expected) {
        let color = ColorValue::classify(raw).unwrap();
        assert_eq!(color.format(), format);
        for opacity in [0.0, 0.3, 1.0, 42.0, 100.0] {
            assert_eq!(make_opaque(&color, opacity).unwrap().format(), format);
        }
    }
}

#[test]
fn test_full_and_zero_opacity() {
    let color = ColorValue::from_components(&[12.0, 200.0, 99.0]).unwrap();
    assert_eq!(make_opaque(&color, 1.0).unwrap(), color);
    assert_eq!(
        make_opaque(&color, 0.0).unwrap(),
        ColorValue::Rgb255([255.0, 255.0, 255.0])
    );
}

#[test]
fn test_errors_propagate() {
    assert!(matches!(
        ColorValue::from_components(&[256.0, 0.0, 0.0]),
        Err(ColorError::InvalidColorFormat { .. })
    ));

    let color: ColorValue = "#000000".parse().unwrap();
    assert!(matches!(
        make_opaque(&color, 101.0),
        Err(ColorError::InvalidOpacity(_))
    ));
}

#[test]
fn test_five_item_palette_feeds_colormaps() {
    let habits = ["run", "read", "meditate", "stretch", "journal"];
    let palette = generate_color_dict(&habits);

    let expected = ["#FA8879", "#96C8DF", "#BCE4CF", "#F9E031", "#C3D3D1"];
    for (habit, hex) in habits.iter().zip(expected) {
        let color = palette.get(habit).unwrap();
        assert_eq!(color, &hex.parse::<ColorValue>().unwrap());

        let linear = get_linear_cmap(color, Some(7), None);
        assert_eq!(linear.stops().len(), 8);
        assert_eq!(linear.zero_color().to_hex(), "#ffffff");
        assert_eq!(linear.stops().last(), Some(color));

        let binary = get_binary_cmap(color, None);
        assert_eq!(binary.stops(), [color, &"#DCDCDC".parse::<ColorValue>().unwrap()]);
    }
}

#[test]
fn test_linear_shades_get_darker() {
    let color: ColorValue = "#96c8df".parse().unwrap();
    let cmap = get_linear_cmap(&color, None, None);

    // lighter shades have larger channel sums when fading toward white
    let sums: Vec<f64> = cmap.stops().iter().map(|c| c.to_rgb255().iter().sum()).collect();
    assert!(sums.windows(2).all(|w| w[0] >= w[1]));
}
