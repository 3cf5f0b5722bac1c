//! Error types for the picker.

use thiserror::Error;

/// Failures while loading the background bitmap.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No resource is registered under the requested identifier.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The resource bytes could not be decoded as an image.
    #[error("failed to decode asset '{id}': {source}")]
    Decode {
        id: String,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image has zero width or height.
    #[error("asset '{0}' has no pixels")]
    Empty(String),

    /// A pixel buffer does not match its declared dimensions.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Failures of the one-way binding converters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The converter only works in the forward direction.
    #[error("converting {from} back to {to} is not implemented")]
    NotImplemented {
        from: &'static str,
        to: &'static str,
    },
}

/// Invalid [`PickerConfig`](crate::PickerConfig) values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("frame rate must be positive and finite, got {0}")]
    InvalidFrameRate(f64),

    /// Divisors must be positive and the outer ring larger than the inner dot.
    #[error("radius divisors must satisfy 0 < outer ({outer}) < inner ({inner})")]
    InvalidRadiusDivisors { outer: f64, inner: f64 },

    #[error("background resource id is empty")]
    EmptyResourceId,
}

/// Errors produced while constructing a picker.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_includes_id() {
        let msg = AssetError::NotFound("spectrum.png".into()).to_string();
        assert!(msg.contains("spectrum.png"), "missing id in: {msg}");
    }

    #[test]
    fn buffer_size_includes_both_lengths() {
        let msg = AssetError::BufferSize {
            expected: 16,
            actual: 12,
        }
        .to_string();
        assert!(msg.contains("16"), "missing expected in: {msg}");
        assert!(msg.contains("12"), "missing actual in: {msg}");
    }

    #[test]
    fn not_implemented_names_both_types() {
        let msg = ConvertError::NotImplemented {
            from: "String",
            to: "Rgba",
        }
        .to_string();
        assert!(msg.contains("String") && msg.contains("Rgba"), "got: {msg}");
    }

    #[test]
    fn picker_error_wraps_asset_error_transparently() {
        let err = PickerError::from(AssetError::Empty("x.png".into()));
        assert_eq!(err.to_string(), "asset 'x.png' has no pixels");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<AssetError>();
        assert_send_sync::<ConvertError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<PickerError>();
    }
}
