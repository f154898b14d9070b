//! White balance correction from a color temperature.
//!
//! The LED's native white is pulled towards a target temperature by scaling
//! R, G and B with the RGB white point of that temperature. Computing the
//! white point takes logarithms and powers, too slow to repeat per pixel, so
//! the last result is memoized in a caller-owned [`WhiteBalance`].
//!
//! # Reference
//! - Wikipedia — "Color balance", scaling monitor R, G, and B

use crate::color::Color;
use crate::conversion::temperature::kelvin_to_rgb;

/// Memoized Kelvin → per-channel correction factors.
///
/// A fresh cache holds no temperature, so the first [`apply`] always
/// computes. After that the factors are reused until a different Kelvin
/// value is requested.
///
/// [`apply`]: WhiteBalance::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhiteBalance {
    kelvin: Option<u16>,
    correction: [u8; 3],
}

impl WhiteBalance {
    pub const fn new() -> Self {
        Self {
            kelvin: None,
            correction: [0; 3],
        }
    }

    /// Temperature the cached factors belong to, if any.
    pub fn kelvin(&self) -> Option<u16> {
        self.kelvin
    }

    /// Cached R, G, B factors (255 = unchanged).
    pub fn correction(&self) -> [u8; 3] {
        self.correction
    }

    /// Scale a color's R, G and B channels towards `kelvin`.
    ///
    /// Each channel becomes `channel × factor / 255` (truncating). White is
    /// passed through untouched.
    pub fn apply(&mut self, kelvin: u16, color: Color) -> Color {
        if self.kelvin != Some(kelvin) {
            self.correction = kelvin_to_rgb(kelvin);
            self.kelvin = Some(kelvin);
            tracing::debug!(
                "White balance recomputed for {kelvin}K: {:?}",
                self.correction
            );
        }

        let [cr, cg, cb] = self.correction;
        let scale = |channel: u8, factor: u8| (u16::from(factor) * u16::from(channel) / 255) as u8;
        color.with_rgb([
            scale(color.r(), cr),
            scale(color.g(), cg),
            scale(color.b(), cb),
        ])
    }
}

/// Apply white balance for `kelvin` through `cache`. See [`WhiteBalance::apply`].
pub fn balance_from_kelvin(kelvin: u16, color: Color, cache: &mut WhiteBalance) -> Color {
    cache.apply(kelvin, color)
}
