//! Drawable geometry and the coordinate ↔ HSL mapping.
//!
//! The background bitmap encodes hue left → right and luminosity top (1.0)
//! → bottom (0.5) at full saturation. The forward and inverse mappings here
//! mirror that layout exactly, so the marker sits on the pixel whose color
//! it reports.

use floem::kurbo::{Point, Rect};

use crate::color::Hsl;
use crate::constants::{LUMINOSITY_SPAN, LUMINOSITY_TOP};

/// Size of the drawable area, refreshed on every paint.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    width: f64,
    height: f64,
}

/// Radii of the two concentric marker circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRadii {
    pub outer: f64,
    pub inner: f64,
}

impl Geometry {
    /// Negative or non-finite sizes collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// No area to map into; mapping functions return `None`.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Snap a point onto the drawable rectangle.
    pub fn clamp(&self, location: Point) -> Point {
        Point::new(
            location.x.clamp(0.0, self.width),
            location.y.clamp(0.0, self.height),
        )
    }

    /// Touch location → fully saturated HSL.
    pub fn location_to_hsl(&self, location: Point) -> Option<Hsl> {
        if self.is_empty() {
            return None;
        }
        let p = self.clamp(location);
        Some(Hsl {
            hue: p.x / self.width,
            saturation: 1.0,
            luminosity: LUMINOSITY_TOP - LUMINOSITY_SPAN * (p.y / self.height),
        })
    }

    /// HSL → marker location, clamped onto the drawable rectangle.
    /// Saturation does not affect the position.
    pub fn hsl_to_location(&self, hsl: &Hsl) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        let x = self.width * hsl.hue;
        let y = self.height * (LUMINOSITY_TOP - hsl.luminosity) / LUMINOSITY_SPAN;
        Some(self.clamp(Point::new(x, y)))
    }

    pub fn marker_radii(&self, outer_divisor: f64, inner_divisor: f64) -> MarkerRadii {
        let smallest = self.width.min(self.height);
        MarkerRadii {
            outer: smallest / outer_divisor,
            inner: smallest / inner_divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{INNER_RADIUS_DIVISOR, OUTER_RADIUS_DIVISOR};

    #[test]
    fn quarter_width_half_height() {
        let geometry = Geometry::new(100.0, 100.0);
        let hsl = geometry.location_to_hsl(Point::new(25.0, 50.0)).unwrap();
        assert_eq!(hsl, Hsl::new(0.25, 1.0, 0.75));
        let back = geometry.hsl_to_location(&hsl).unwrap();
        assert_eq!(back, Point::new(25.0, 50.0));
    }

    #[test]
    fn corners_map_to_extremes() {
        let geometry = Geometry::new(200.0, 80.0);
        let top_left = geometry.location_to_hsl(Point::ZERO).unwrap();
        assert_eq!((top_left.hue, top_left.luminosity), (0.0, 1.0));
        let bottom_right = geometry.location_to_hsl(Point::new(200.0, 80.0)).unwrap();
        assert_eq!((bottom_right.hue, bottom_right.luminosity), (1.0, 0.5));
    }

    #[test]
    fn empty_geometry_maps_nothing() {
        for geometry in [Geometry::new(0.0, 50.0), Geometry::new(50.0, 0.0)] {
            assert!(geometry.is_empty());
            assert_eq!(geometry.location_to_hsl(Point::new(1.0, 1.0)), None);
            assert_eq!(geometry.hsl_to_location(&Hsl::new(0.5, 1.0, 0.75)), None);
        }
    }

    #[test]
    fn invalid_sizes_collapse_to_zero() {
        assert!(Geometry::new(f64::NAN, 10.0).is_empty());
        assert!(Geometry::new(-3.0, 10.0).is_empty());
        assert!(Geometry::new(10.0, f64::INFINITY).is_empty());
    }

    #[test]
    fn dark_external_color_is_pinned_to_bottom_edge() {
        let geometry = Geometry::new(100.0, 100.0);
        let p = geometry.hsl_to_location(&Hsl::new(0.5, 0.2, 0.1)).unwrap();
        assert_eq!(p, Point::new(50.0, 100.0));
    }

    #[test]
    fn default_radii() {
        let radii = Geometry::new(640.0, 320.0)
            .marker_radii(OUTER_RADIUS_DIVISOR, INNER_RADIUS_DIVISOR);
        assert_eq!(radii.outer, 16.0);
        assert_eq!(radii.inner, 10.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn size() -> impl Strategy<Value = f64> {
            1.0_f64..4096.0
        }

        proptest! {
            #[test]
            fn inverse_undoes_forward(w in size(), h in size(), fx in 0.0_f64..=1.0, fy in 0.0_f64..=1.0) {
                let geometry = Geometry::new(w, h);
                let p = Point::new(fx * w, fy * h);
                let hsl = geometry.location_to_hsl(p).unwrap();
                let back = geometry.hsl_to_location(&hsl).unwrap();
                prop_assert!((back.x - p.x).abs() < 1e-6, "x: {} vs {}", back.x, p.x);
                prop_assert!((back.y - p.y).abs() < 1e-6, "y: {} vs {}", back.y, p.y);
            }

            #[test]
            fn out_of_bounds_behaves_like_clamped(
                w in size(),
                h in size(),
                x in -10_000.0_f64..10_000.0,
                y in -10_000.0_f64..10_000.0,
            ) {
                let geometry = Geometry::new(w, h);
                let raw = geometry.location_to_hsl(Point::new(x, y)).unwrap();
                let clamped = geometry
                    .location_to_hsl(Point::new(x.clamp(0.0, w), y.clamp(0.0, h)))
                    .unwrap();
                prop_assert_eq!(raw, clamped);
                prop_assert!((0.0..=1.0).contains(&raw.hue));
                prop_assert!((0.5..=1.0).contains(&raw.luminosity));
            }

            #[test]
            fn touch_saturation_is_pinned(w in size(), h in size(), x in -50.0_f64..5000.0, y in -50.0_f64..5000.0) {
                let hsl = Geometry::new(w, h).location_to_hsl(Point::new(x, y)).unwrap();
                prop_assert_eq!(hsl.saturation, 1.0);
            }

            #[test]
            fn outer_ring_encloses_inner_dot(w in size(), h in size()) {
                let radii = Geometry::new(w, h).marker_radii(OUTER_RADIUS_DIVISOR, INNER_RADIUS_DIVISOR);
                prop_assert!(radii.outer > radii.inner);
            }
        }
    }
}
