//! Color temperature conversions — Kelvin, mired, and RGB.
//!
//! # Reference
//! - Tanner Helland (2012) — "How to Convert Temperature (K) to RGB"
//! - Mitchell Charity — blackbody color datafile (10° CMFs), source of the
//!   inverse ladder breakpoints

/// Convert a color temperature in Kelvin to an RGB white point.
///
/// Empirical fit to the blackbody locus, accurate enough for LED white
/// balancing between roughly 2800K and 10200K. `temp` is the Kelvin value
/// divided by 100 (integer division).
///
/// ```text
/// temp <= 66: R = 255
///             G = 99.4708025861 × ln(temp) − 161.1195681661
///             B = temp <= 19 ? 0 : 138.5177312231 × ln(temp − 10) − 305.0447927307
/// temp >  66: R = 329.698727446 × (temp − 60)^−0.1332047592
///             G = 288.1221695283 × (temp − 60)^−0.0755148492
///             B = 255
/// ```
///
/// Each channel is rounded and clamped to `[0, 255]`; degenerate inputs
/// (e.g. 0K) clamp rather than fail.
#[allow(clippy::excessive_precision)]
pub fn kelvin_to_rgb(kelvin: u16) -> [u8; 3] {
    let temp = f32::from(kelvin / 100);

    let (r, g, b) = if temp <= 66.0 {
        let g = (99.470_802_586_1 * temp.ln() - 161.119_568_166_1).round();
        let b = if temp <= 19.0 {
            0.0
        } else {
            (138.517_731_223_1 * (temp - 10.0).ln() - 305.044_792_730_7).round()
        };
        (255.0, g, b)
    } else {
        let r = (329.698_727_446 * (temp - 60.0).powf(-0.133_204_759_2)).round();
        let g = (288.122_169_528_3 * (temp - 60.0).powf(-0.075_514_849_2)).round();
        (r, g, 255.0)
    };

    [clamp_channel(r), clamp_channel(g), clamp_channel(b)]
}

/// Approximate a mired value with one of eight calibrated RGB presets.
///
/// The presets were tuned by eye on WS2812B strips with gamma correction
/// enabled; there is no interpolation between buckets.
pub fn mired_to_rgb_bins(mired: u16) -> [u8; 3] {
    match mired {
        476.. => [255, 199, 92],
        426..=475 => [255, 213, 118],
        376..=425 => [255, 216, 118],
        326..=375 => [255, 234, 140],
        276..=325 => [255, 243, 160],
        226..=275 => [250, 255, 188],
        176..=225 => [247, 255, 215],
        _ => [237, 255, 239],
    }
}

/// Estimate the color temperature of an RGB color.
///
/// Only the red/blue balance is considered, so the result is meaningless for
/// saturated colors; pair it with a whiteness check. The smaller of R and B is
/// first rescaled as if the larger were at 255, then looked up on a
/// piecewise-linear fit of the blackbody curve:
///
/// - R > B: nine segments on scaled blue, 1900K to 6600K
/// - B > R: two segments on scaled red, 6600K to 10091K
/// - R == B: 6550K (also covers black)
///
/// Accuracy is about ±50K between 1900K and 8000K. Output is always within
/// `1900..=10091`.
pub fn kelvin_from_rgb(color: crate::Color) -> u16 {
    const MAX_KELVIN: u16 = 10091;

    let (r, b) = (color.r(), color.b());
    if r == b {
        return 6550;
    }

    if r > b {
        let b = scale_to_full(b, r);
        return match b {
            0..33 => 1900 + b * 6,
            33..72 => 2100 + (b - 33) * 10,
            72..101 => 2492 + (b - 72) * 14,
            101..132 => 2900 + (b - 101) * 16,
            132..159 => 3398 + (b - 132) * 19,
            159..186 => 3906 + (b - 159) * 22,
            186..210 => 4500 + (b - 186) * 25,
            210..230 => 5100 + (b - 210) * 30,
            _ => 5700 + (b - 230) * 34,
        };
    }

    let r = scale_to_full(r, b);
    if r > 225 {
        6600 + (254 - r) * 50
    } else {
        (8080 + (225 - r) * 86).min(MAX_KELVIN)
    }
}

/// Mired (reciprocal megakelvin) for a Kelvin value. 0K maps to 0.
pub fn kelvin_to_mired(kelvin: u16) -> u16 {
    reciprocal_mega(kelvin)
}

/// Kelvin for a mired value. 0 mired maps to 0.
pub fn mired_to_kelvin(mired: u16) -> u16 {
    reciprocal_mega(mired)
}

fn reciprocal_mega(value: u16) -> u16 {
    if value == 0 {
        return 0;
    }
    (1_000_000 / u32::from(value)).min(u32::from(u16::MAX)) as u16
}

/// Rescale `small` by the factor that would bring `large` up to 255.
fn scale_to_full(small: u8, large: u8) -> u16 {
    let scale = 0xFFFF / u32::from(large);
    ((u32::from(small) * scale) >> 8) as u16
}

fn clamp_channel(v: f32) -> u8 {
    // NaN compares false on both sides and falls through to 0.
    if v >= 255.0 {
        255
    } else if v > 0.0 {
        v as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_kelvin_to_rgb_warm_has_full_red() {
        assert_eq!(kelvin_to_rgb(1000), [255, 68, 0]);
        let rgb = kelvin_to_rgb(2000);
        assert_eq!(rgb[0], 255);
        assert!(rgb[2] < rgb[1] && rgb[1] < 255);
    }

    #[test]
    fn test_kelvin_to_rgb_6600_is_near_white() {
        assert_eq!(kelvin_to_rgb(6600), [255, 255, 253]);
    }

    #[test]
    fn test_kelvin_to_rgb_cool_has_full_blue() {
        let rgb = kelvin_to_rgb(10000);
        assert_eq!(rgb[2], 255);
        assert!(rgb[0] < rgb[1] && rgb[1] < 255);
    }

    #[test]
    fn test_kelvin_to_rgb_uses_whole_hectokelvin() {
        assert_eq!(kelvin_to_rgb(4000), kelvin_to_rgb(4099));
    }

    #[test]
    fn test_kelvin_to_rgb_zero_clamps() {
        assert_eq!(kelvin_to_rgb(0), [255, 0, 0]);
    }

    #[test]
    fn test_kelvin_to_rgb_blue_rises_with_temperature() {
        let mut last = 0;
        for kelvin in (2000..=6600).step_by(100) {
            let b = kelvin_to_rgb(kelvin)[2];
            assert!(b >= last, "{kelvin}K: blue {b} < {last}");
            last = b;
        }
    }

    #[test]
    fn test_mired_bins_boundaries() {
        assert_eq!(mired_to_rgb_bins(500), [255, 199, 92]);
        assert_eq!(mired_to_rgb_bins(476), [255, 199, 92]);
        assert_eq!(mired_to_rgb_bins(475), [255, 213, 118]);
        assert_eq!(mired_to_rgb_bins(376), [255, 216, 118]);
        assert_eq!(mired_to_rgb_bins(326), [255, 234, 140]);
        assert_eq!(mired_to_rgb_bins(300), [255, 243, 160]);
        assert_eq!(mired_to_rgb_bins(250), [250, 255, 188]);
        assert_eq!(mired_to_rgb_bins(176), [247, 255, 215]);
        assert_eq!(mired_to_rgb_bins(175), [237, 255, 239]);
        assert_eq!(mired_to_rgb_bins(0), [237, 255, 239]);
    }

    #[test]
    fn test_kelvin_from_rgb_pure_red_is_minimum() {
        assert_eq!(kelvin_from_rgb(Color::rgb(255, 0, 0)), 1900);
    }

    #[test]
    fn test_kelvin_from_rgb_equal_red_blue_is_neutral() {
        for v in [0u8, 1, 100, 255] {
            assert_eq!(kelvin_from_rgb(Color::rgbw(v, 17, v, 200)), 6550);
        }
    }

    #[test]
    fn test_kelvin_from_rgb_scales_dimmed_colors() {
        // same red/blue ratio at half brightness
        let full = kelvin_from_rgb(Color::rgb(255, 0, 160));
        let dim = kelvin_from_rgb(Color::rgb(128, 0, 80));
        assert!(full.abs_diff(dim) <= 50, "{full} vs {dim}");
    }

    #[test]
    fn test_kelvin_from_rgb_ladder_segments() {
        // scale = 257 at r = 255, so b' == b
        assert_eq!(kelvin_from_rgb(Color::rgb(255, 0, 33)), 2100);
        assert_eq!(kelvin_from_rgb(Color::rgb(255, 0, 72)), 2492);
        assert_eq!(kelvin_from_rgb(Color::rgb(255, 0, 230)), 5700);
        assert_eq!(kelvin_from_rgb(Color::rgb(255, 0, 254)), 5700 + 24 * 34);
    }

    #[test]
    fn test_kelvin_from_rgb_cool_side_clamps() {
        assert_eq!(kelvin_from_rgb(Color::rgb(254, 0, 255)), 6600);
        assert_eq!(kelvin_from_rgb(Color::rgb(226, 0, 255)), 6600 + 28 * 50);
        assert_eq!(kelvin_from_rgb(Color::rgb(225, 0, 255)), 8080);
        assert_eq!(kelvin_from_rgb(Color::rgb(0, 0, 255)), 10091);
    }

    #[test]
    fn test_kelvin_from_rgb_stays_in_range() {
        for r in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let k = kelvin_from_rgb(Color::rgb(r, 0, b));
                assert!((1900..=10091).contains(&k), "r={r} b={b} -> {k}");
            }
        }
    }

    #[test]
    fn test_mired_kelvin_helpers() {
        assert_eq!(kelvin_to_mired(2700), 370);
        assert_eq!(mired_to_kelvin(370), 2702);
        assert_eq!(mired_to_kelvin(0), 0);
        assert_eq!(kelvin_to_mired(0), 0);
        assert_eq!(mired_to_kelvin(1), u16::MAX);
    }
}
