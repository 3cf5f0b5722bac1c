//! Floem view hosting the picker core.
//!
//! Translates Floem pointer events into [`TouchEvent`]s, paints through
//! Floem's renderer, and keeps an `RwSignal<Rgba>` and the core's bound
//! property in step in both directions.

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use floem::kurbo::{BezPath, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::assets::{AssetSource, Bitmap, SpectrumAssets};
use crate::binding;
use crate::color::Rgba;
use crate::config::PickerConfig;
use crate::constants;
use crate::error::PickerError;
use crate::picker::{HslPicker, PickerEvent};
use crate::property::ColorProperty;
use crate::surface::{PaintStyle, Surface};
use crate::ticker;
use crate::touch::{PointerButton, TouchEvent, TouchKind};

/// Build a closed `BezPath` circle from line segments (no cubic curves).
fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..64 {
        let angle = TAU * i as f64 / 64.0;
        let pt = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

fn to_peniko(c: Rgba) -> Color {
    Color::rgba(c.r(), c.g(), c.b(), c.a())
}

fn pointer_button(button: floem::pointer::PointerButton) -> PointerButton {
    PointerButton::from_flags(
        button.is_primary(),
        button.is_secondary(),
        button.is_auxiliary(),
    )
}

/// [`Surface`] over a Floem paint context. The background is drawn from
/// the image the view cached for it.
struct PaintSurface<'a, 'b> {
    cx: &'a mut PaintCx<'b>,
    background: Option<&'a peniko::Image>,
    hash: &'a [u8],
}

impl Surface for PaintSurface<'_, '_> {
    fn clear(&mut self) {
        // Floem repaints the view region from scratch each frame.
    }

    fn draw_bitmap(&mut self, _bitmap: &Bitmap, dest: Rect) {
        if let Some(img) = self.background {
            self.cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: self.hash,
                },
                dest,
            );
        }
    }

    /// Floem's renderers always anti-alias, so `style.antialias` has no
    /// effect here.
    fn fill_circle(&mut self, center: Point, radius: f64, style: &PaintStyle) {
        let path = circle_path(center, radius);
        self.cx.fill(&path, to_peniko(style.color), 0.0);
    }
}

enum PickerUpdate {
    Color(Rgba),
}

pub struct ColorPicker {
    id: ViewId,
    core: HslPicker,
    size: floem::taffy::prelude::Size<f32>,
    /// Background bitmap uploaded once as a renderer image.
    background_img: Option<peniko::Image>,
    background_hash: Vec<u8>,
    ticking: Rc<Cell<bool>>,
}

/// Creates an HSL picker over the rasterized spectrum, bound to `color`.
pub fn color_picker(color: RwSignal<Rgba>) -> Result<ColorPicker, PickerError> {
    color_picker_with(color, PickerConfig::default(), &SpectrumAssets::default())
}

/// Creates an HSL picker with an explicit configuration and asset source.
///
/// External writes to `color` move the marker; drags write back to it.
pub fn color_picker_with(
    color: RwSignal<Rgba>,
    config: PickerConfig,
    assets: &dyn AssetSource,
) -> Result<ColorPicker, PickerError> {
    let id = ViewId::new();
    let interval = config.frame_interval();

    let property = ColorProperty::new(color.get_untracked());
    let core = HslPicker::with_config(config, assets, property.clone())?;
    binding::bind_signal(color, &property, move |c| {
        id.update_state(PickerUpdate::Color(c));
    });

    let ticking = Rc::new(Cell::new(true));
    ticker::start_repaint_ticker(id, interval, ticking.clone());

    Ok(ColorPicker {
        id,
        core,
        size: Default::default(),
        background_img: None,
        background_hash: Vec::new(),
        ticking,
    }
    .style(|s| {
        s.flex_grow(1.0)
            .min_height(constants::MIN_HEIGHT)
            .cursor(floem::style::CursorStyle::Default)
    }))
}

impl ColorPicker {
    fn listen(mut self, wanted: PickerEvent, action: impl Fn() + 'static) -> Self {
        self.core.on_event(move |event| {
            if event == wanted {
                action();
            }
        });
        self
    }

    pub fn on_start_selecting(self, action: impl Fn() + 'static) -> Self {
        self.listen(PickerEvent::StartSelecting, action)
    }

    pub fn on_stop_selecting(self, action: impl Fn() + 'static) -> Self {
        self.listen(PickerEvent::StopSelecting, action)
    }

    pub fn on_color_changed(self, action: impl Fn() + 'static) -> Self {
        self.listen(PickerEvent::ColorChanged, action)
    }

    fn ensure_background_image(&mut self) {
        if self.background_img.is_some() {
            return;
        }

        let bitmap = self.core.background();
        let blob = Blob::new(bitmap.shared_pixels());
        let img = peniko::Image::new(
            blob.clone(),
            peniko::Format::Rgba8,
            bitmap.width(),
            bitmap.height(),
        );

        self.background_hash = blob.id().to_le_bytes().to_vec();
        self.background_img = Some(img);
    }
}

impl Drop for ColorPicker {
    fn drop(&mut self) {
        self.ticking.set(false);
    }
}

impl View for ColorPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<PickerUpdate>() {
            match *update {
                PickerUpdate::Color(c) => self.core.set_color(c),
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let touch = match event {
            Event::PointerDown(e) => {
                TouchEvent::mouse(TouchKind::Pressed, e.pos.x, e.pos.y, pointer_button(e.button))
            }
            // Floem reports no button on moves; an active drag is primary.
            Event::PointerMove(e) => {
                TouchEvent::mouse(TouchKind::Moved, e.pos.x, e.pos.y, PointerButton::Primary)
            }
            Event::PointerUp(e) => {
                TouchEvent::mouse(TouchKind::Released, e.pos.x, e.pos.y, pointer_button(e.button))
            }
            Event::FocusLost => {
                self.core.cancel_selection();
                return EventPropagation::Continue;
            }
            _ => return EventPropagation::Continue,
        };

        if !self.core.handle_touch(&touch).is_handled() {
            return EventPropagation::Continue;
        }
        if touch.kind == TouchKind::Pressed {
            cx.update_active(self.id());
        }
        self.id.request_paint();
        EventPropagation::Stop
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;

        self.ensure_background_image();
        let mut surface = PaintSurface {
            cx,
            background: self.background_img.as_ref(),
            hash: &self.background_hash,
        };
        self.core.render(w, h, &mut surface);
    }
}
