//! Packed RGBW color value and channel algebra.
//!
//! A [`Color`] stores four 8-bit channels in one `u32`:
//!
//! ```text
//! bits 31..24  23..16  15..8  7..0
//!        W       R       G     B
//! ```
//!
//! White is the most significant byte. This layout is part of the type's
//! contract: the raw value is what the strip drivers and the dec/hex literal
//! parser exchange.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// A packed W-R-G-B color, one byte per channel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// All channels off.
    pub const BLACK: Self = Self(0);

    /// Build a color from its four channels.
    pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self(((w as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build a color with the white channel off.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgbw(r, g, b, 0)
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// White channel.
    pub const fn w(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Raw packed value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Channels in `[R, G, B, W]` order, the order per-pixel byte buffers use.
    pub const fn to_rgbw_bytes(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.w()]
    }

    /// Inverse of [`Color::to_rgbw_bytes`].
    pub const fn from_rgbw_bytes(bytes: [u8; 4]) -> Self {
        Self::rgbw(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Red, green and blue channels, dropping white.
    pub const fn to_rgb_bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Replace the red, green and blue channels, keeping white.
    pub const fn with_rgb(self, rgb: [u8; 3]) -> Self {
        Self::rgbw(rgb[0], rgb[1], rgb[2], self.w())
    }

    /// Linear interpolation towards `other`. See [`blend`].
    pub fn blend(self, other: Self, factor: u16, wide: bool) -> Self {
        blend(self, other, factor, wide)
    }

    /// Hue-preserving additive mix. See [`add`].
    pub fn additive_mix(self, other: Self) -> Self {
        add(self, other)
    }
}

impl From<u32> for Color {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<[u8; 4]> for Color {
    fn from(rgbw: [u8; 4]) -> Self {
        Self::from_rgbw_bytes(rgbw)
    }
}

impl fmt::Display for Color {
    /// Formats as `#WWRRGGBB`, the same W-major layout the dec/hex parser reads.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Parses with [`parse_dec_or_hex`](crate::parse::parse_dec_or_hex).
///
/// This is not a validating parser. Like C `strtoul`, digits are read up to
/// the first invalid character, so `"xyz"` yields `Color(0)` and `"#12zz"`
/// yields `Color(0x12)`. Only an empty string is an error. Use
/// [`parse_hex_strict`](crate::parse::parse_hex_strict) to reject malformed input.
impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_dec_or_hex(s).ok_or(ColorParseError::Empty)
    }
}

/// Linear interpolation between two packed colors.
///
/// `factor` runs from 0 to 255, or to 65535 when `wide` is set. The endpoints
/// return the inputs untouched; every other factor computes, per channel,
///
/// ```text
/// (c2 × factor + c1 × (max − factor)) >> shift
/// ```
///
/// with `shift` 8 or 16. Division truncates. Factors above 255 in 8-bit mode
/// are treated as 255.
pub fn blend(c1: Color, c2: Color, factor: u16, wide: bool) -> Color {
    if factor == 0 {
        return c1;
    }
    let (max, shift) = if wide { (0xFFFF_u32, 16) } else { (0xFF_u32, 8) };
    let factor = u32::from(factor);
    if factor >= max {
        return c2;
    }

    let mix = |a: u8, b: u8| -> u8 {
        ((u32::from(b) * factor + u32::from(a) * (max - factor)) >> shift) as u8
    };

    Color::rgbw(
        mix(c1.r(), c2.r()),
        mix(c1.g(), c2.g()),
        mix(c1.b(), c2.b()),
        mix(c1.w(), c2.w()),
    )
}

/// Channel-wise sum that saturates without shifting hue.
///
/// If every channel sum fits in a byte the raw sums are returned. Otherwise
/// all four channels are scaled by `255 / max_sum` so the brightest channel
/// lands on 255 and the ratios between channels survive.
pub fn add(c1: Color, c2: Color) -> Color {
    let r = u32::from(c1.r()) + u32::from(c2.r());
    let g = u32::from(c1.g()) + u32::from(c2.g());
    let b = u32::from(c1.b()) + u32::from(c2.b());
    let w = u32::from(c1.w()) + u32::from(c2.w());
    let max = r.max(g).max(b).max(w);

    if max < 256 {
        return Color::rgbw(r as u8, g as u8, b as u8, w as u8);
    }

    let scale = |v: u32| (v * 255 / max) as u8;
    Color::rgbw(scale(r), scale(g), scale(b), scale(w))
}
