//! Pointer input as seen by the picker core.

use floem::kurbo::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchKind {
    Pressed,
    Moved,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Touch,
    Mouse,
    Pen,
}

/// Button reported with the event. Only meaningful for mice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    None,
}

impl PointerButton {
    /// Classify a host button from its primary/secondary/auxiliary flags.
    pub fn from_flags(primary: bool, secondary: bool, auxiliary: bool) -> Self {
        if primary {
            PointerButton::Primary
        } else if secondary {
            PointerButton::Secondary
        } else if auxiliary {
            PointerButton::Middle
        } else {
            PointerButton::None
        }
    }
}

/// A single pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchKind,
    pub location: Point,
    pub device: DeviceKind,
    pub button: PointerButton,
}

impl TouchEvent {
    /// Finger contact at `(x, y)`.
    pub fn touch(kind: TouchKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            location: Point::new(x, y),
            device: DeviceKind::Touch,
            button: PointerButton::Primary,
        }
    }

    pub fn mouse(kind: TouchKind, x: f64, y: f64, button: PointerButton) -> Self {
        Self {
            kind,
            location: Point::new(x, y),
            device: DeviceKind::Mouse,
            button,
        }
    }

    /// Mice must use their primary button; touch and pen always qualify.
    pub fn is_primary_input(&self) -> bool {
        self.device != DeviceKind::Mouse || self.button == PointerButton::Primary
    }
}

/// Whether the event was consumed by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResponse {
    Handled,
    Ignored,
}

impl TouchResponse {
    pub fn is_handled(self) -> bool {
        self == TouchResponse::Handled
    }
}
