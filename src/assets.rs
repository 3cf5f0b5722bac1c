//! Background bitmap loading.
//!
//! The picker asks an [`AssetSource`] for its background once, at
//! construction. [`EmbeddedAssets`] decodes packaged image bytes;
//! [`SpectrumAssets`] rasterizes the gradient directly so no image file
//! is needed.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::constants;
use crate::error::AssetError;
use crate::math;

/// Decoded RGBA8 pixel buffer, row-major, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Arc<Vec<u8>>,
}

impl Bitmap {
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, AssetError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(AssetError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Shared handle to the pixel data, for handing to a renderer.
    pub fn shared_pixels(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.pixels)
    }

    /// RGBA of the pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y as usize * self.width as usize) + x as usize) * 4;
        let px = &self.pixels[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Resolves a resource identifier to a decoded bitmap.
pub trait AssetSource {
    fn load(&self, id: &str) -> Result<Bitmap, AssetError>;
}

/// Encoded images (PNG, ...) keyed by resource identifier.
#[derive(Debug, Default, Clone)]
pub struct EmbeddedAssets {
    entries: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register encoded image bytes under `id`, replacing any previous entry.
    pub fn with(mut self, id: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.entries.insert(id.into(), bytes.into());
        self
    }
}

impl AssetSource for EmbeddedAssets {
    fn load(&self, id: &str) -> Result<Bitmap, AssetError> {
        let bytes = self
            .entries
            .get(id)
            .ok_or_else(|| AssetError::NotFound(id.to_string()))?;
        let decoded = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Decode {
                id: id.to_string(),
                source,
            })?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty(id.to_string()));
        }
        debug!(id, width, height, "decoded embedded asset");
        Bitmap::from_rgba8(width, height, decoded.into_raw())
    }
}

/// Serves a rasterized hue × luminosity spectrum under one identifier.
#[derive(Debug, Clone)]
pub struct SpectrumAssets {
    id: String,
    width: u32,
    height: u32,
}

impl Default for SpectrumAssets {
    fn default() -> Self {
        Self::new(
            constants::SPECTRUM_RESOURCE,
            constants::SPECTRUM_RASTER_WIDTH,
            constants::SPECTRUM_RASTER_HEIGHT,
        )
    }
}

impl SpectrumAssets {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

impl AssetSource for SpectrumAssets {
    fn load(&self, id: &str) -> Result<Bitmap, AssetError> {
        if id != self.id {
            return Err(AssetError::NotFound(id.to_string()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AssetError::Empty(id.to_string()));
        }
        debug!(id, width = self.width, height = self.height, "rasterizing spectrum");
        Bitmap::from_rgba8(
            self.width,
            self.height,
            rasterize_spectrum(self.width, self.height),
        )
    }
}

/// Rasterize the full-saturation spectrum to an RGBA8 buffer.
///
/// Each pixel takes the color the forward touch mapping assigns to its
/// center: hue left → right, luminosity 1.0 at the top to 0.5 at the bottom.
fn rasterize_spectrum(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; width as usize * height as usize * 4];

    for py in 0..height {
        let l = constants::LUMINOSITY_TOP
            - constants::LUMINOSITY_SPAN * ((py as f64 + 0.5) / height as f64);
        let row_offset = py as usize * width as usize * 4;

        for px in 0..width {
            let hue = (px as f64 + 0.5) / width as f64;
            let (r, g, b) = math::hsl_to_rgb(hue, 1.0, l);
            let offset = row_offset + px as usize * 4;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }

    buf
}
