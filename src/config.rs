//! Picker configuration.
//!
//! The defaults reproduce the canonical widget: 30 Hz repaint, black outer
//! ring at `min(w, h) / 20`, color dot at `min(w, h) / 32`. Hosts may load
//! overrides from their own settings through serde.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::constants;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Repaint ticks per second.
    pub frame_rate: f64,
    /// Resource identifier of the background bitmap.
    pub background: String,
    pub outer_radius_divisor: f64,
    pub inner_radius_divisor: f64,
    /// Fill of the outer marker ring.
    pub outer_color: Rgba,
    /// Anti-alias hint passed to the marker styles. Only honored by
    /// [`Surface`](crate::Surface) implementations that can toggle it; the
    /// Floem view always anti-aliases.
    pub antialias: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            frame_rate: constants::FRAME_RATE,
            background: constants::SPECTRUM_RESOURCE.to_string(),
            outer_radius_divisor: constants::OUTER_RADIUS_DIVISOR,
            inner_radius_divisor: constants::INNER_RADIUS_DIVISOR,
            outer_color: Rgba::BLACK,
            antialias: true,
        }
    }
}

impl PickerConfig {
    /// Check that the values describe a drawable, correctly nested marker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        let outer = self.outer_radius_divisor;
        let inner = self.inner_radius_divisor;
        if !(outer.is_finite() && inner.is_finite() && outer > 0.0 && outer < inner) {
            return Err(ConfigError::InvalidRadiusDivisors { outer, inner });
        }
        if self.background.trim().is_empty() {
            return Err(ConfigError::EmptyResourceId);
        }
        Ok(())
    }

    /// Delay between two repaint ticks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate)
    }
}
