//! Per-pixel output correction chain.

use std::sync::Arc;

use crate::color::Color;
use crate::config::ColorConfig;
use crate::correction::gamma::{GammaSource, SharedGammaTable};
use crate::correction::white_balance::WhiteBalance;
use crate::error::ConfigError;

/// Applies the configured corrections to colors on their way to the strip.
///
/// Order per pixel:
/// 1. White balance, if `white_balance_kelvin` is set
/// 2. Gamma on all four channels, if `gamma_correct_color` is set
///
/// The gamma table may be shared with other correctors. Building a corrector
/// or calling [`ColorCorrector::set_config`] installs the table its `gamma`
/// selects, for every corrector on that table; the most recent install wins.
/// [`ColorCorrector::gamma_source`] reports what is actually in effect.
#[derive(Debug)]
pub struct ColorCorrector {
    config: ColorConfig,
    table: Arc<SharedGammaTable>,
    white_balance: WhiteBalance,
}

impl ColorCorrector {
    /// Build a corrector with its own gamma table.
    pub fn new(config: ColorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = Arc::new(SharedGammaTable::for_gamma(config.gamma));
        Ok(Self {
            config,
            table,
            white_balance: WhiteBalance::new(),
        })
    }

    /// Build a corrector on an existing shared table, installing the table
    /// `config.gamma` selects if a different one is in effect.
    pub fn with_shared_table(
        config: ColorConfig,
        table: Arc<SharedGammaTable>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if table.configure(config.gamma) {
            tracing::debug!("Installed gamma {:?} on shared table", config.gamma);
        }
        Ok(Self {
            config,
            table,
            white_balance: WhiteBalance::new(),
        })
    }

    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// Handle to the gamma table this corrector reads.
    pub fn table(&self) -> &Arc<SharedGammaTable> {
        &self.table
    }

    /// What the table this corrector reads was built from.
    pub fn gamma_source(&self) -> GammaSource {
        self.table.source()
    }

    /// Swap settings, rebuilding the gamma table unless the one in effect
    /// already matches `config.gamma`.
    pub fn set_config(&mut self, config: ColorConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let previous = self.table.source();
        if self.table.configure(config.gamma) {
            tracing::debug!(
                "Gamma changed from {previous:?} to {:?}, rebuilding table",
                config.gamma
            );
        }
        self.config = config;
        Ok(())
    }

    /// Correct a single color.
    pub fn correct(&mut self, color: Color) -> Color {
        let color = self.balance(color);
        self.table.gamma32(color, self.config.gamma_correct_color)
    }

    /// Correct a whole frame in place against one table snapshot.
    pub fn correct_frame(&mut self, pixels: &mut [Color]) {
        let table = self.table.snapshot();
        let enabled = self.config.gamma_correct_color;
        for pixel in pixels.iter_mut() {
            *pixel = table.gamma32(self.balance(*pixel), enabled);
        }
    }

    /// Correct a frame of raw packed `u32` pixels in place.
    pub fn correct_raw(&mut self, pixels: &mut [u32]) {
        self.correct_frame(bytemuck::cast_slice_mut(pixels));
    }

    /// Map a global brightness value through the gamma table when
    /// `gamma_correct_brightness` is set.
    pub fn brightness(&self, brightness: u8) -> u8 {
        if self.config.gamma_correct_brightness {
            self.table.gamma8(brightness)
        } else {
            brightness
        }
    }

    fn balance(&mut self, color: Color) -> Color {
        match self.config.white_balance_kelvin {
            Some(kelvin) => self.white_balance.apply(kelvin, color),
            None => color,
        }
    }
}
