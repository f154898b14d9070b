//! CIE 1931 xy chromaticity ↔ RGB for color-sync bridges.
//!
//! Only compiled with the `chromaticity` feature. The matrices are the
//! wide-gamut transforms published for Philips Hue bulbs, so colors exchanged
//! with a Hue bridge round-trip close to what the bridge displays.
//!
//! # Reference
//! - Philips Hue developer documentation — "RGB to xy Color conversion"

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// A point in the CIE 1931 xy plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    pub x: f32,
    pub y: f32,
}

impl Chromaticity {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// XYZ (with Y = 1) to linear wide-gamut RGB. Columns are X, Y, Z.
const XYZ_TO_RGB: Mat3 = Mat3::from_cols(
    Vec3::new(1.656_492, -0.707_196, 0.051_713),
    Vec3::new(-0.354_851, 1.655_397, -0.121_364),
    Vec3::new(-0.255_038, 0.036_152, 1.011_530),
);

/// Linear wide-gamut RGB to XYZ. Columns are R, G, B.
const RGB_TO_XYZ: Mat3 = Mat3::from_cols(
    Vec3::new(0.664_511, 0.283_881, 0.000_088),
    Vec3::new(0.154_324, 0.668_433, 0.072_310),
    Vec3::new(0.162_028, 0.047_685, 0.986_039),
);

/// Tolerance below 1.0 still treated as a full channel.
const FULL_SCALE_EPSILON: f32 = 4.0 * f32::EPSILON;

/// Convert a chromaticity to full-brightness RGB.
///
/// # Algorithm
/// 1. Lift xy to XYZ with Y = 1 and transform to linear RGB
/// 2. If the strictly largest channel exceeds 1.0, divide every channel by it
/// 3. sRGB-encode each channel
/// 4. Repeat step 2, since encoding can push a channel back over 1.0
/// 5. Scale to bytes by truncation, clamping negatives (out-of-gamut) to 0
///
/// A channel that step 4 normalized to 1.0 can land a few ulps short of it in
/// `f32`; anything within a few `f32::EPSILON` of 1.0 maps to 255 instead of
/// truncating to 254.
///
/// Points with `y <= 0` or non-finite coordinates have no defined luminance
/// and produce black.
pub fn xy_to_rgb(xy: Chromaticity) -> [u8; 3] {
    let Chromaticity { x, y } = xy;
    if !(x.is_finite() && y.is_finite()) || y <= 0.0 {
        return [0, 0, 0];
    }

    let xyz = Vec3::new(x / y, 1.0, (1.0 - x - y) / y);
    let linear = normalize_dominant(XYZ_TO_RGB * xyz);
    let encoded = normalize_dominant(Vec3::new(
        srgb_encode(linear.x),
        srgb_encode(linear.y),
        srgb_encode(linear.z),
    ));

    let to_byte = |v: f32| {
        if v >= 1.0 - FULL_SCALE_EPSILON {
            255
        } else {
            (255.0 * v).clamp(0.0, 255.0) as u8
        }
    };
    [to_byte(encoded.x), to_byte(encoded.y), to_byte(encoded.z)]
}

/// Convert an RGB color to its chromaticity.
///
/// Black has no chromaticity of its own; it is reported at the neutral point,
/// the same xy every gray (R = G = B) maps to.
pub fn rgb_to_xy(rgb: [u8; 3]) -> Chromaticity {
    let mut input = Vec3::new(f32::from(rgb[0]), f32::from(rgb[1]), f32::from(rgb[2]));
    if input == Vec3::ZERO {
        input = Vec3::ONE;
    }

    let xyz = RGB_TO_XYZ * input;
    let sum = xyz.element_sum();
    Chromaticity::new(xyz.x / sum, xyz.y / sum)
}

/// sRGB OETF (IEC 61966-2-1).
fn srgb_encode(linear: f32) -> f32 {
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Pull an over-range dominant channel back to 1.0, keeping channel ratios.
///
/// Only a channel strictly greater than both others counts as dominant; ties
/// are left alone.
fn normalize_dominant(rgb: Vec3) -> Vec3 {
    let Vec3 { x: r, y: g, z: b } = rgb;
    let dominant = if r > g && r > b {
        r
    } else if g > r && g > b {
        g
    } else if b > r && b > g {
        b
    } else {
        return rgb;
    };

    if dominant > 1.0 { rgb / dominant } else { rgb }
}
