//! Drawing target the picker renders into.

use floem::kurbo::{Point, Rect};

use crate::assets::Bitmap;
use crate::color::Rgba;

/// Fill style for a marker circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintStyle {
    pub color: Rgba,
    /// Hint for surfaces that can switch anti-aliasing; others ignore it.
    pub antialias: bool,
}

impl PaintStyle {
    pub fn fill(color: Rgba, antialias: bool) -> Self {
        Self { color, antialias }
    }
}

/// Minimal set of draw calls one paint pass issues, in order.
pub trait Surface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw `bitmap` stretched to fill `dest`.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect);

    fn fill_circle(&mut self, center: Point, radius: f64, style: &PaintStyle);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DrawCall {
        Clear,
        Bitmap { width: u32, height: u32, dest: Rect },
        Circle {
            center: Point,
            radius: f64,
            style: PaintStyle,
        },
    }

    /// Captures draw calls so tests can inspect a frame.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) {
            self.calls.push(DrawCall::Bitmap {
                width: bitmap.width(),
                height: bitmap.height(),
                dest,
            });
        }

        fn fill_circle(&mut self, center: Point, radius: f64, style: &PaintStyle) {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                style: *style,
            });
        }
    }
}
