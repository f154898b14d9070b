//! Correction settings shared by the render loop.
//!
//! `ColorConfig` is the single source of truth for which corrections run on
//! output colors. It is typically the `"light"` section of a device's JSON
//! settings.

use serde::{Deserialize, Serialize};

use crate::correction::gamma::{GammaSource, GammaTable8};
use crate::error::ConfigError;

/// Kelvin range the temperature fit is calibrated for.
const CALIBRATED_KELVIN: std::ops::RangeInclusive<u16> = 2800..=10200;

/// Which corrections are applied to output colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Apply the 8-bit gamma table to color channels. Default: `true`.
    pub gamma_correct_color: bool,
    /// Apply the 8-bit gamma table to global brightness. Default: `false`.
    pub gamma_correct_brightness: bool,
    /// Power-curve exponent for the 8-bit table. `None` keeps the built-in
    /// CIE 1931 table. Default: `None`.
    pub gamma: Option<f32>,
    /// Target white temperature for white balance. `None` disables it.
    pub white_balance_kelvin: Option<u16>,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            gamma_correct_color: true,
            gamma_correct_brightness: false,
            gamma: None,
            white_balance_kelvin: None,
        }
    }
}

impl ColorConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce a table; warn on odd ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(gamma) = self.gamma {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(ConfigError::InvalidGamma(gamma));
            }
            if !(1.0..=3.0).contains(&gamma) {
                tracing::warn!("Gamma {gamma} is outside the usual 1.0-3.0 range");
            }
        }
        if let Some(kelvin) = self.white_balance_kelvin {
            if !CALIBRATED_KELVIN.contains(&kelvin) {
                tracing::warn!(
                    "White balance {kelvin}K is outside the calibrated {}-{}K range",
                    CALIBRATED_KELVIN.start(),
                    CALIBRATED_KELVIN.end()
                );
            }
        }
        Ok(())
    }

    /// The 8-bit table these settings call for.
    pub fn gamma_table(&self) -> GammaTable8 {
        GammaTable8::from_source(GammaSource::from_gamma(self.gamma))
    }
}
