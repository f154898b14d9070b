use std::sync::Arc;

use ledcolor_core::color::{add, blend};
use ledcolor_core::conversion::{hue_sat_to_rgb, kelvin_from_rgb, kelvin_to_rgb};
use ledcolor_core::parse::{fill_from_dec_or_hex, fill_from_hex};
use ledcolor_core::{
    Color, ColorConfig, ColorCorrector, GammaSource, GammaTable8, HexLiteral, SharedGammaTable,
    parse_dec_or_hex, parse_hex_strict,
};

/// A spread of colors covering channel extremes and mid values.
fn sample_colors() -> Vec<Color> {
    let levels = [0u8, 1, 64, 127, 128, 200, 254, 255];
    let mut colors = Vec::new();
    for (i, &r) in levels.iter().enumerate() {
        for &g in &levels {
            let b = levels[(i + 3) % levels.len()];
            let w = levels[(i + 5) % levels.len()];
            colors.push(Color::rgbw(r, g, b, w));
        }
    }
    colors
}

#[test]
fn blend_endpoints_hold_for_all_samples() {
    let colors = sample_colors();
    for &a in &colors {
        for &b in colors.iter().step_by(7) {
            assert_eq!(blend(a, b, 0, false), a);
            assert_eq!(blend(a, b, 255, false), b);
            assert_eq!(blend(a, b, 0, true), a);
            assert_eq!(blend(a, b, 65535, true), b);
        }
    }
}

#[test]
fn additive_mix_never_exceeds_a_byte_and_keeps_small_sums() {
    let colors = sample_colors();
    for &a in &colors {
        for &b in &colors {
            let sums = [
                u32::from(a.r()) + u32::from(b.r()),
                u32::from(a.g()) + u32::from(b.g()),
                u32::from(a.b()) + u32::from(b.b()),
                u32::from(a.w()) + u32::from(b.w()),
            ];
            let mixed = add(a, b);
            if sums.iter().all(|&s| s < 256) {
                assert_eq!(
                    mixed.to_rgbw_bytes(),
                    sums.map(|s| s as u8),
                    "{a} + {b} should not be rescaled"
                );
            } else {
                assert_eq!(
                    mixed.to_rgbw_bytes().into_iter().max(),
                    Some(255),
                    "{a} + {b} should saturate its brightest channel"
                );
            }
        }
    }
}

#[test]
fn hue_wheel_primaries() {
    assert_eq!(hue_sat_to_rgb(0, 255), [255, 0, 0]);
    let green = hue_sat_to_rgb(65535 / 3, 255);
    assert!(green[0] <= 1 && green[1] >= 254 && green[2] <= 1, "{green:?}");
}

#[test]
fn kelvin_estimates_bracket_the_ladder() {
    assert_eq!(kelvin_from_rgb(Color::rgbw(255, 0, 0, 0)), 1900);
    assert_eq!(kelvin_from_rgb(Color::rgbw(80, 200, 80, 9)), 6550);
    assert_eq!(kelvin_from_rgb(Color::BLACK), 6550);
}

#[test]
fn kelvin_round_trip_is_close_in_calibrated_range() {
    for kelvin in [3000u16, 4000, 5000, 6000] {
        let rgb = kelvin_to_rgb(kelvin);
        let estimate = kelvin_from_rgb(Color::from(rgb));
        assert!(
            estimate.abs_diff(kelvin) <= 300,
            "{kelvin}K -> {rgb:?} -> {estimate}K"
        );
    }
}

#[test]
fn strict_hex_fills_buffers() {
    let mut buf = [0u8; 4];
    assert!(fill_from_hex(&mut buf, "FF8800"));
    assert_eq!(&buf[..3], &[0xFF, 0x88, 0x00]);

    let before = buf;
    assert!(!fill_from_hex(&mut buf, "FF88"));
    assert_eq!(buf, before);

    assert!(fill_from_hex(&mut buf, "FF8800CC"));
    assert_eq!(buf, [0xFF, 0x88, 0x00, 0xCC]);
}

#[test]
fn the_two_hex_orders_stay_distinct() {
    let packed = parse_dec_or_hex("#CCFF8800").expect("non-empty");
    let literal = parse_hex_strict("FF8800CC").expect("valid literal");
    assert_eq!(literal, HexLiteral::Rgbw([0xFF, 0x88, 0x00, 0xCC]));
    assert_eq!(packed, literal.to_color());

    let mut buf = [7u8; 4];
    assert!(!fill_from_dec_or_hex(&mut buf, ""));
    assert_eq!(buf, [7; 4]);
    assert_eq!("".parse::<Color>().ok(), None);
    assert_eq!("#CCFF8800".parse::<Color>().ok(), Some(packed));
}

#[test]
fn identity_gamma_and_disabled_gamma() {
    let shared = SharedGammaTable::default();
    shared.rebuild(1.0);
    for v in 0..=255u8 {
        assert_eq!(shared.gamma8(v), v);
    }

    let table = GammaTable8::default();
    for color in sample_colors() {
        assert_eq!(table.gamma32(color, false), color);
    }
}

#[test]
fn corrector_from_json_config() {
    let config = ColorConfig::from_json_str(
        r#"{"gamma_correct_color": true, "gamma": 1.0, "white_balance_kelvin": 6600}"#,
    )
    .expect("valid config");
    let mut corrector = ColorCorrector::new(config).expect("valid config");

    let mut frame = vec![Color::rgbw(255, 255, 255, 255), Color::rgbw(0, 0, 0, 42)];
    corrector.correct_frame(&mut frame);
    assert_eq!(frame[0], Color::from_rgbw_bytes([255, 255, 253, 255]));
    assert_eq!(frame[1], Color::rgbw(0, 0, 0, 42));
}

#[test]
fn correctors_on_one_table_apply_their_latest_gamma() {
    let shared = Arc::new(SharedGammaTable::default());
    let linear = ColorConfig {
        gamma: Some(1.0),
        ..ColorConfig::default()
    };
    let color = Color::rgbw(64, 128, 192, 32);
    let cie = GammaTable8::cie1931().gamma32(color, true);

    let mut a = ColorCorrector::with_shared_table(linear.clone(), Arc::clone(&shared))
        .expect("valid config");
    assert_eq!(a.correct(color), color);

    let mut b = ColorCorrector::with_shared_table(ColorConfig::default(), Arc::clone(&shared))
        .expect("valid config");
    assert_eq!(b.correct(color), cie);

    a.set_config(linear).expect("valid config");
    b.set_config(ColorConfig::default()).expect("valid config");
    assert_eq!(shared.source(), GammaSource::Cie1931);
    assert_eq!(b.correct(color), cie);
}

#[cfg(feature = "chromaticity")]
#[test]
fn chromaticity_round_trip_keeps_hue_family() {
    use ledcolor_core::conversion::{rgb_to_xy, xy_to_rgb};

    let xy = rgb_to_xy([255, 0, 0]);
    let rgb = xy_to_rgb(xy);
    assert_eq!(rgb[0], 255, "{rgb:?}");
    assert!(rgb[1] < 128 && rgb[2] < 128, "{rgb:?}");

    let black = rgb_to_xy([0, 0, 0]);
    assert!(black.x.is_finite() && black.y.is_finite());
}
