//! One-way converters for binding the picker color to display values.

use crate::color::Rgba;
use crate::error::ConvertError;

/// A binding-layer value converter. `convert_back` exists so two-way
/// bindings can be wired, but converters here only go forward.
pub trait ValueConverter {
    type Source;
    type Target;

    fn convert(&self, value: &Self::Source) -> Self::Target;

    fn convert_back(&self, value: &Self::Target) -> Result<Self::Source, ConvertError>;
}

/// Formats a color as `#RRGGBB`, each channel truncated to a byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexConverter;

impl ValueConverter for HexConverter {
    type Source = Rgba;
    type Target = String;

    fn convert(&self, value: &Rgba) -> String {
        let (r, g, b) = value.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    fn convert_back(&self, _value: &String) -> Result<Rgba, ConvertError> {
        Err(ConvertError::NotImplemented {
            from: "hex string",
            to: "Rgba",
        })
    }
}

/// Photographic negative: every channel becomes `1 - c`. Output is opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeConverter;

impl ValueConverter for NegativeConverter {
    type Source = Rgba;
    type Target = Rgba;

    fn convert(&self, value: &Rgba) -> Rgba {
        Rgba::rgb(1.0 - value.r(), 1.0 - value.g(), 1.0 - value.b())
    }

    fn convert_back(&self, _value: &Rgba) -> Result<Rgba, ConvertError> {
        Err(ConvertError::NotImplemented {
            from: "negative",
            to: "Rgba",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orange_formats_with_truncation() {
        assert_eq!(HexConverter.convert(&Rgba::rgb(1.0, 0.5, 0.0)), "#FF7F00");
    }

    #[test]
    fn hex_ignores_alpha() {
        let c = Rgba::new(0.0, 0.0, 1.0, 0.25);
        assert_eq!(HexConverter.convert(&c), "#0000FF");
    }

    #[test]
    fn negative_of_orange_is_azure() {
        let n = NegativeConverter.convert(&Rgba::rgb(1.0, 0.5, 0.0));
        assert_eq!((n.r(), n.g(), n.b(), n.a()), (0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn negative_of_translucent_is_opaque() {
        let n = NegativeConverter.convert(&Rgba::new(0.2, 0.2, 0.2, 0.1));
        assert_eq!(n.a(), 1.0);
    }

    #[test]
    fn reverse_directions_fail_loudly() {
        assert!(matches!(
            HexConverter.convert_back(&"#FF0000".to_string()),
            Err(ConvertError::NotImplemented { .. })
        ));
        assert!(matches!(
            NegativeConverter.convert_back(&Rgba::RED),
            Err(ConvertError::NotImplemented { .. })
        ));
    }
}
