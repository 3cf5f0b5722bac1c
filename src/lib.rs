//! # floem-hsl
//!
//! A touch-driven HSL color picker for [Floem](https://github.com/lapce/floem).
//!
//! The picker shows a hue × luminosity spectrum at full saturation with a
//! two-circle marker over the selection. Horizontal position picks the hue,
//! vertical position the luminosity (1.0 at the top, 0.5 at the bottom).
//!
//! The core, [`HslPicker`], has no GUI dependency beyond geometry types: a
//! host feeds it [`TouchEvent`]s and calls [`HslPicker::render`] with a
//! [`Surface`] on every frame. [`color_picker`] wraps it in a Floem view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsl::{color_picker, Rgba};
//!
//! let color = RwSignal::new(Rgba::RED);
//! // Use `color_picker(color)?` in your Floem view tree.
//! ```

mod assets;
mod binding;
mod color;
mod config;
mod constants;
mod convert;
mod error;
mod mapping;
mod math;
mod picker;
mod property;
mod surface;
mod ticker;
mod touch;
mod view;

pub use assets::{AssetSource, Bitmap, EmbeddedAssets, SpectrumAssets};
pub use color::{Hsl, Rgba};
pub use config::PickerConfig;
pub use constants::{FRAME_RATE, SPECTRUM_RESOURCE};
pub use convert::{HexConverter, NegativeConverter, ValueConverter};
pub use error::{AssetError, ConfigError, ConvertError, PickerError};
pub use mapping::{Geometry, MarkerRadii};
pub use picker::{HslPicker, PickerEvent, SelectionState};
pub use property::{ColorProperty, ObserverId};
pub use surface::{PaintStyle, Surface};
pub use touch::{DeviceKind, PointerButton, TouchEvent, TouchKind, TouchResponse};
pub use view::{ColorPicker, color_picker, color_picker_with};
