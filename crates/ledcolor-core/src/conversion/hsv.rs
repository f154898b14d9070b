//! Hue/saturation to RGB.

/// Convert a hue/saturation pair to full-brightness RGB.
///
/// `hue` spans one revolution of the color wheel over `0..=65535`; `sat` runs
/// from 0 (white) to 255 (fully saturated). Value is fixed at maximum.
///
/// # Algorithm
/// Standard six-sector HSV with `v = 255`:
/// ```text
/// i = floor(h × 6) mod 6,  f = h × 6 − floor(h × 6)
/// p = 255(1 − s),  q = 255(1 − f·s),  t = 255(1 − (1 − f)·s)
///
/// sector: 0 → (255, t, p)   1 → (q, 255, p)   2 → (p, 255, t)
///         3 → (p, q, 255)   4 → (t, p, 255)   5 → (255, p, q)
/// ```
/// Intermediate values are truncated to bytes.
pub fn hue_sat_to_rgb(hue: u16, sat: u8) -> [u8; 3] {
    let h = f32::from(hue) / 65535.0;
    let s = f32::from(sat) / 255.0;
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = (255.0 * (1.0 - s)) as u8;
    let q = (255.0 * (1.0 - f * s)) as u8;
    let t = (255.0 * (1.0 - (1.0 - f) * s)) as u8;

    match sector as u8 % 6 {
        0 => [255, t, p],
        1 => [q, 255, p],
        2 => [p, 255, t],
        3 => [p, q, 255],
        4 => [t, p, 255],
        _ => [255, p, q],
    }
}
