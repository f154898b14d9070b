//! ledcolor Core — colorimetry layer for addressable RGBW LEDs.
//!
//! This crate contains packed-color algebra, colorspace conversions, color
//! literal parsing, and gamma / white-balance correction. No hardware,
//! buffer, or protocol dependencies: everything here is synchronous math
//! invoked from a single render loop.

pub mod color;
pub mod config;
pub mod conversion;
pub mod correction;
pub mod error;
pub mod parse;
pub mod random;

// Re-exports for convenience.
pub use color::Color;
pub use config::ColorConfig;
pub use correction::gamma::{GammaSource, GammaTable8, SharedGammaTable, gamma10};
pub use correction::pipeline::ColorCorrector;
pub use correction::white_balance::WhiteBalance;
pub use error::{ColorParseError, ConfigError};
pub use parse::{HexLiteral, parse_dec_or_hex, parse_hex_strict};
