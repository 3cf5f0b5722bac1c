//! Sizing, timing, and styling constants for the picker.

/// Repaint cadence of the frame ticker, in frames per second.
pub const FRAME_RATE: f64 = 30.0;

/// Resource identifier of the hue/luminosity background bitmap.
pub const SPECTRUM_RESOURCE: &str = "spectrum.png";

/// Outer ring radius is `min(width, height) / OUTER_RADIUS_DIVISOR`.
pub const OUTER_RADIUS_DIVISOR: f64 = 20.0;

/// Inner dot radius is `min(width, height) / INNER_RADIUS_DIVISOR`.
pub const INNER_RADIUS_DIVISOR: f64 = 32.0;

/// Luminosity at the top edge of the spectrum.
pub const LUMINOSITY_TOP: f64 = 1.0;

/// Luminosity span covered from top to bottom edge (1.0 → 0.5).
pub const LUMINOSITY_SPAN: f64 = 0.5;

/// Resolution of the rasterized fallback spectrum.
pub const SPECTRUM_RASTER_WIDTH: u32 = 360;
pub const SPECTRUM_RASTER_HEIGHT: u32 = 180;

/// Minimum widget height so the marker stays visible.
pub const MIN_HEIGHT: f32 = 100.0;
