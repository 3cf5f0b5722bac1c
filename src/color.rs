//! `Rgba` and `Hsl`: the two color representations the picker keeps in sync.
//!
//! `Rgba` is what the bound property carries; `Hsl` is what the picker
//! edits. Components are f64 in the 0.0–1.0 range.

use serde::{Deserialize, Serialize};

use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Rgba {
    /// Opaque pure red, the default picker color.
    pub const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    /// Opaque color from f64 RGB.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from f64 RGBA. Components are clamped to 0.0–1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// 0–255 RGB tuple, channels truncated.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            math::channel_to_u8(self.r),
            math::channel_to_u8(self.g),
            math::channel_to_u8(self.b),
        )
    }

    /// Opaque color from an HSL triple.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let (r, g, b) = math::hsl_to_rgb(hsl.hue, hsl.saturation, hsl.luminosity);
        Self::new(r, g, b, 1.0)
    }

    /// Decompose to HSL. Alpha is dropped.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, saturation, luminosity) = math::rgb_to_hsl(self.r, self.g, self.b);
        Hsl {
            hue,
            saturation,
            luminosity,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::RED
    }
}

/// Hue (fractional turn, 0 = red), saturation, luminosity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub luminosity: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, luminosity: f64) -> Self {
        Self {
            hue,
            saturation,
            luminosity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_red() {
        let c = Rgba::default();
        assert_eq!(c, Rgba::RED);
        assert_eq!(c.a(), 1.0);
    }

    #[test]
    fn red_decomposes_exactly() {
        let hsl = Rgba::RED.to_hsl();
        assert_eq!(hsl, Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(Rgba::from_hsl(hsl), Rgba::RED);
    }

    #[test]
    fn new_clamps_components() {
        let c = Rgba::new(1.5, -0.5, 0.25, 2.0);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 0.0, 0.25, 1.0));
    }

    #[test]
    fn from_hsl_is_opaque() {
        let c = Rgba::from_hsl(Hsl::new(0.6, 0.4, 0.3));
        assert_eq!(c.a(), 1.0);
    }

    #[test]
    fn rgb8_round_trip_for_byte_values() {
        let c = Rgba::from_rgb8(255, 0, 255);
        assert_eq!(c.to_rgb8(), (255, 0, 255));
    }
}
