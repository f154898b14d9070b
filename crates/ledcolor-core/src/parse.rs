//! Color literal parsing.
//!
//! Two parsers with deliberately different channel orders:
//!
//! | Parser | Accepts | 8-digit hex order |
//! |---|---|---|
//! | [`parse_dec_or_hex`] | decimal, `#hex`, `hhex`, `Hhex` | `WWRRGGBB` (packed, W-major) |
//! | [`parse_hex_strict`] | bare 6 or 8 hex digits | `RRGGBBWW` (literal, W-minor) |
//!
//! The first reads the literal as a raw [`Color`] value, the second reads it
//! the way color pickers write RGBW. Callers must not swap one for the other:
//! `"#11223344"` and `"11223344"` name different colors.

use crate::color::Color;
use crate::error::ColorParseError;

/// A successfully parsed `RRGGBB` or `RRGGBBWW` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexLiteral {
    /// Six digits: red, green, blue.
    Rgb([u8; 3]),
    /// Eight digits: red, green, blue, white.
    Rgbw([u8; 4]),
}

impl HexLiteral {
    /// Write the parsed channels into an `[R, G, B, W]` buffer.
    ///
    /// A six-digit literal writes only the first three bytes; the white
    /// byte keeps whatever the buffer held.
    pub fn write_to(&self, out: &mut [u8; 4]) {
        match *self {
            Self::Rgb(rgb) => out[..3].copy_from_slice(&rgb),
            Self::Rgbw(rgbw) => *out = rgbw,
        }
    }

    /// The literal as a packed color. Six-digit literals get white = 0.
    pub fn to_color(&self) -> Color {
        match *self {
            Self::Rgb([r, g, b]) => Color::rgb(r, g, b),
            Self::Rgbw(rgbw) => Color::from_rgbw_bytes(rgbw),
        }
    }
}

/// Parse a decimal or prefixed-hex literal as a packed W-major color.
///
/// A leading `#`, `h` or `H` selects hexadecimal for the rest of the string
/// (`#RRGGBB` or `#WWRRGGBB`); anything else is read as decimal. Digits are
/// consumed like C `strtoul`: leading whitespace and a sign are accepted,
/// parsing stops at the first invalid digit, no digits yields 0, and values
/// beyond `u32::MAX` saturate.
///
/// Returns `None` for an empty string.
pub fn parse_dec_or_hex(text: &str) -> Option<Color> {
    let first = text.chars().next()?;
    let raw = match first {
        '#' | 'h' | 'H' => strtoul(&text[1..], 16),
        _ => strtoul(text, 10),
    };
    Some(Color(raw))
}

/// Parse `text` with [`parse_dec_or_hex`] into an `[R, G, B, W]` buffer.
///
/// Empty input leaves `out` untouched and returns `false`.
pub fn fill_from_dec_or_hex(out: &mut [u8; 4], text: &str) -> bool {
    match parse_dec_or_hex(text) {
        Some(color) => {
            *out = color.to_rgbw_bytes();
            true
        }
        None => false,
    }
}

/// Parse a bare `RRGGBB` or `RRGGBBWW` hex literal.
///
/// Exactly six or eight hex digits are accepted, in either case. Unlike
/// [`parse_dec_or_hex`], the white byte comes last.
pub fn parse_hex_strict(text: &str) -> Result<HexLiteral, ColorParseError> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if bytes.len() != 6 && bytes.len() != 8 {
        return Err(ColorParseError::InvalidLength { len: bytes.len() });
    }

    let mut value = 0u32;
    for (position, &byte) in bytes.iter().enumerate() {
        let digit = (byte as char)
            .to_digit(16)
            .ok_or(ColorParseError::InvalidHex { position })?;
        value = (value << 4) | digit;
    }

    let [b0, b1, b2, b3] = value.to_be_bytes();
    Ok(if bytes.len() == 6 {
        HexLiteral::Rgb([b1, b2, b3])
    } else {
        HexLiteral::Rgbw([b0, b1, b2, b3])
    })
}

/// Parse `text` with [`parse_hex_strict`] into an `[R, G, B, W]` buffer.
///
/// Returns `false` and leaves `out` unchanged when the literal is rejected.
pub fn fill_from_hex(out: &mut [u8; 4], text: &str) -> bool {
    match parse_hex_strict(text) {
        Ok(literal) => {
            literal.write_to(out);
            true
        }
        Err(_) => false,
    }
}

/// Unsigned integer prefix parse with 32-bit `strtoul` semantics.
fn strtoul(text: &str, radix: u32) -> u32 {
    let mut rest = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');

    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    if radix == 16 {
        let b = rest.as_bytes();
        if b.len() > 2 && b[0] == b'0' && (b[1] | 0x20) == b'x' && (b[2] as char).is_ascii_hexdigit()
        {
            rest = &rest[2..];
        }
    }

    let mut value = 0u32;
    let mut overflow = false;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        match value.checked_mul(radix).and_then(|v| v.checked_add(digit)) {
            Some(v) => value = v,
            None => overflow = true,
        }
    }

    if overflow {
        u32::MAX
    } else if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dec_or_hex_hash_prefix_is_w_major() {
        let c = parse_dec_or_hex("#11223344").unwrap();
        assert_eq!(c.to_rgbw_bytes(), [0x22, 0x33, 0x44, 0x11]);
    }

    #[test]
    fn test_dec_or_hex_h_prefix_either_case() {
        assert_eq!(parse_dec_or_hex("hFF8800"), Some(Color::rgb(0xFF, 0x88, 0x00)));
        assert_eq!(parse_dec_or_hex("Hff8800"), Some(Color::rgb(0xFF, 0x88, 0x00)));
    }

    #[test]
    fn test_dec_or_hex_decimal() {
        assert_eq!(parse_dec_or_hex("16711680"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(parse_dec_or_hex("4278190080"), Some(Color::rgbw(0, 0, 0, 255)));
    }

    #[test]
    fn test_dec_or_hex_empty_leaves_buffer() {
        let mut buf = [1, 2, 3, 4];
        assert!(!fill_from_dec_or_hex(&mut buf, ""));
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(parse_dec_or_hex(""), None);
    }

    #[test]
    fn test_dec_or_hex_fills_rgbw_order() {
        let mut buf = [0; 4];
        assert!(fill_from_dec_or_hex(&mut buf, "#FF00A0B0"));
        assert_eq!(buf, [0x00, 0xA0, 0xB0, 0xFF]);
    }

    #[test]
    fn test_strtoul_stops_at_invalid_digit() {
        assert_eq!(strtoul("123abc", 10), 123);
        assert_eq!(strtoul("FFzz", 16), 0xFF);
        assert_eq!(strtoul("zz", 16), 0);
        assert_eq!(strtoul("", 10), 0);
    }

    #[test]
    fn test_strtoul_prefix_whitespace_and_sign() {
        assert_eq!(strtoul("  42", 10), 42);
        assert_eq!(strtoul("+42", 10), 42);
        assert_eq!(strtoul("-1", 10), u32::MAX);
        assert_eq!(strtoul("0x1F", 16), 0x1F);
        assert_eq!(strtoul("0xg", 16), 0);
    }

    #[test]
    fn test_strtoul_overflow_saturates() {
        assert_eq!(strtoul("99999999999", 10), u32::MAX);
        assert_eq!(strtoul("1FFFFFFFF", 16), u32::MAX);
    }

    #[test]
    fn test_hex_strict_six_digits() {
        assert_eq!(parse_hex_strict("FF8800"), Ok(HexLiteral::Rgb([0xFF, 0x88, 0x00])));
        assert_eq!(parse_hex_strict("ff8800"), Ok(HexLiteral::Rgb([0xFF, 0x88, 0x00])));
    }

    #[test]
    fn test_hex_strict_eight_digits_is_w_minor() {
        assert_eq!(
            parse_hex_strict("FF8800CC"),
            Ok(HexLiteral::Rgbw([0xFF, 0x88, 0x00, 0xCC]))
        );
        assert_eq!(
            parse_hex_strict("FF8800CC").unwrap().to_color(),
            Color::rgbw(0xFF, 0x88, 0x00, 0xCC)
        );
    }

    #[test]
    fn test_hex_strict_rejects_other_lengths() {
        assert_eq!(parse_hex_strict("FF88"), Err(ColorParseError::InvalidLength { len: 4 }));
        assert_eq!(
            parse_hex_strict("FF8800CC0"),
            Err(ColorParseError::InvalidLength { len: 9 })
        );
        assert_eq!(parse_hex_strict("#FF8800"), Err(ColorParseError::InvalidLength { len: 7 }));
        assert_eq!(parse_hex_strict(""), Err(ColorParseError::Empty));
    }

    #[test]
    fn test_hex_strict_rejects_non_hex() {
        assert_eq!(
            parse_hex_strict("FF88ZZ"),
            Err(ColorParseError::InvalidHex { position: 4 })
        );
    }

    #[test]
    fn test_fill_from_hex_failure_keeps_buffer() {
        let mut buf = [9, 9, 9, 9];
        assert!(!fill_from_hex(&mut buf, "FF88"));
        assert_eq!(buf, [9, 9, 9, 9]);
    }

    #[test]
    fn test_fill_from_hex_six_digits_keeps_white() {
        let mut buf = [0, 0, 0, 77];
        assert!(fill_from_hex(&mut buf, "010203"));
        assert_eq!(buf, [1, 2, 3, 77]);
    }

    #[test]
    fn test_orders_differ_for_same_digits() {
        let packed = parse_dec_or_hex("#11223344").unwrap();
        let literal = parse_hex_strict("11223344").unwrap().to_color();
        assert_ne!(packed, literal);
    }
}
