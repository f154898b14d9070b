//! Colorspace conversions — hue/saturation, color temperature, and CIE xy.

#[cfg(feature = "chromaticity")]
pub mod chromaticity;
pub mod hsv;
pub mod temperature;

#[cfg(feature = "chromaticity")]
pub use chromaticity::{Chromaticity, rgb_to_xy, xy_to_rgb};
pub use hsv::hue_sat_to_rgb;
pub use temperature::{
    kelvin_from_rgb, kelvin_to_mired, kelvin_to_rgb, mired_to_kelvin, mired_to_rgb_bins,
};
