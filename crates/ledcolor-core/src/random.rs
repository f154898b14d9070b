//! Random color-wheel picks that never land close to the previous one.

use crate::conversion::hsv::hue_sat_to_rgb;

/// Minimum distance between consecutive picks on the 256-step wheel.
const MIN_WHEEL_DISTANCE: u8 = 42;

/// Draws before giving up on the RNG and stepping half a turn instead.
const MAX_DRAWS: usize = 256;

/// Source of uniformly distributed bytes.
///
/// Implemented for any `FnMut() -> u8`, so a closure over the host RNG works.
pub trait WheelRng {
    fn next_u8(&mut self) -> u8;
}

impl<F: FnMut() -> u8> WheelRng for F {
    fn next_u8(&mut self) -> u8 {
        self()
    }
}

/// Pick a wheel index at least 42 steps away from `last`, either direction.
///
/// Candidates closer than that are redrawn. A source that keeps returning
/// nearby values (e.g. a stuck RNG) falls back to the opposite side of the
/// wheel after a bounded number of draws.
pub fn random_wheel_index(last: u8, rng: &mut impl WheelRng) -> u8 {
    for _ in 0..MAX_DRAWS {
        let candidate = rng.next_u8();
        let forward = last.abs_diff(candidate);
        if forward.min(255 - forward) >= MIN_WHEEL_DISTANCE {
            return candidate;
        }
    }
    last.wrapping_add(128)
}

/// Random fully saturated colors, each visibly different from the last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomColor {
    last_index: u8,
}

impl RandomColor {
    pub const fn new() -> Self {
        Self { last_index: 0 }
    }

    /// The wheel index of the previous pick.
    pub fn last_index(&self) -> u8 {
        self.last_index
    }

    /// Draw the next color.
    pub fn next_rgb(&mut self, rng: &mut impl WheelRng) -> [u8; 3] {
        self.last_index = random_wheel_index(self.last_index, rng);
        hue_sat_to_rgb(u16::from(self.last_index) * 256, 255)
    }
}
