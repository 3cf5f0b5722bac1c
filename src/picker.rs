//! The picker core: HSL selection state, touch state machine, and the paint
//! routine, independent of any GUI runtime.
//!
//! The host drives it through two callbacks: [`HslPicker::handle_touch`] for
//! pointer samples and [`HslPicker::render`] on every frame tick.

use floem::kurbo::Point;
use tracing::{debug, trace, warn};

use crate::assets::{AssetSource, Bitmap};
use crate::color::{Hsl, Rgba};
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::mapping::Geometry;
use crate::property::ColorProperty;
use crate::surface::{PaintStyle, Surface};
use crate::touch::{TouchEvent, TouchKind, TouchResponse};

/// Notifications raised by the picker. Consumers re-read the bound
/// property for the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// A press started a selection.
    StartSelecting,
    /// The press ended.
    StopSelecting,
    /// The selection moved while pressed.
    ColorChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Pressed,
}

type Listener = Box<dyn FnMut(PickerEvent)>;

pub struct HslPicker {
    config: PickerConfig,
    background: Bitmap,
    hsl: Hsl,
    geometry: Geometry,
    state: SelectionState,
    outer_style: PaintStyle,
    inner_style: PaintStyle,
    property: ColorProperty,
    listeners: Vec<Listener>,
}

impl HslPicker {
    /// Picker with the default configuration, bound to `property`.
    pub fn new(assets: &dyn AssetSource, property: ColorProperty) -> Result<Self, PickerError> {
        Self::with_config(PickerConfig::default(), assets, property)
    }

    /// Validates `config` and loads the background bitmap it names.
    ///
    /// The initial selection is taken from the property's current value.
    pub fn with_config(
        config: PickerConfig,
        assets: &dyn AssetSource,
        property: ColorProperty,
    ) -> Result<Self, PickerError> {
        config.validate()?;
        let background = assets.load(&config.background)?;
        debug!(
            id = %config.background,
            width = background.width(),
            height = background.height(),
            "loaded picker background"
        );

        let hsl = property.get().to_hsl();
        Ok(Self {
            outer_style: PaintStyle::fill(config.outer_color, config.antialias),
            inner_style: PaintStyle::fill(Rgba::from_hsl(hsl), config.antialias),
            config,
            background,
            hsl,
            geometry: Geometry::default(),
            state: SelectionState::Idle,
            property,
            listeners: Vec::new(),
        })
    }

    /// Current selection as an opaque color.
    pub fn color(&self) -> Rgba {
        Rgba::from_hsl(self.hsl)
    }

    /// Assign a color from outside. Does not raise [`PickerEvent::ColorChanged`].
    pub fn set_color(&mut self, color: Rgba) {
        self.apply(color.to_hsl());
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Drawable size seen by the last paint.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn property(&self) -> &ColorProperty {
        &self.property
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn background(&self) -> &Bitmap {
        &self.background
    }

    pub fn outer_style(&self) -> &PaintStyle {
        &self.outer_style
    }

    pub fn inner_style(&self) -> &PaintStyle {
        &self.inner_style
    }

    /// Register a listener for every [`PickerEvent`].
    pub fn on_event(&mut self, listener: impl FnMut(PickerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Marker center for the current selection, `None` before the first
    /// non-empty paint.
    pub fn marker_location(&self) -> Option<Point> {
        self.geometry.hsl_to_location(&self.hsl)
    }

    /// Feed one pointer sample through the state machine.
    ///
    /// Non-primary mouse buttons are ignored, as are moves and releases
    /// while idle. A press while already pressed starts a new selection,
    /// since the release of the previous one was lost.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> TouchResponse {
        if !event.is_primary_input() {
            trace!(button = ?event.button, "ignoring non-primary pointer");
            return TouchResponse::Ignored;
        }

        let notification = match (self.state, event.kind) {
            (_, TouchKind::Pressed) => {
                self.state = SelectionState::Pressed;
                debug!(location = ?event.location, "selection started");
                PickerEvent::StartSelecting
            }
            (SelectionState::Pressed, TouchKind::Moved) => PickerEvent::ColorChanged,
            (SelectionState::Pressed, TouchKind::Released) => {
                self.state = SelectionState::Idle;
                debug!(location = ?event.location, "selection stopped");
                PickerEvent::StopSelecting
            }
            (SelectionState::Idle, TouchKind::Moved | TouchKind::Released) => {
                return TouchResponse::Ignored;
            }
        };

        self.update_from_location(event.location);
        self.emit(notification);
        TouchResponse::Handled
    }

    /// Drop an in-progress selection without a notification, e.g. when
    /// the host loses pointer focus mid-drag. The color stays where it is.
    pub fn cancel_selection(&mut self) {
        if self.state == SelectionState::Pressed {
            debug!("selection cancelled");
            self.state = SelectionState::Idle;
        }
    }

    /// Paint one frame into `surface` at the given drawable size.
    ///
    /// Order: clear, background stretched to the full rect, black ring,
    /// color dot. An empty drawable is only cleared.
    pub fn render<S: Surface + ?Sized>(&mut self, width: f64, height: f64, surface: &mut S) {
        surface.clear();
        self.geometry = Geometry::new(width, height);

        let Some(marker) = self.geometry.hsl_to_location(&self.hsl) else {
            trace!(width, height, "skipping paint of empty drawable");
            return;
        };

        let radii = self.geometry.marker_radii(
            self.config.outer_radius_divisor,
            self.config.inner_radius_divisor,
        );

        surface.draw_bitmap(&self.background, self.geometry.rect());
        surface.fill_circle(marker, radii.outer, &self.outer_style);
        surface.fill_circle(marker, radii.inner, &self.inner_style);
    }

    fn update_from_location(&mut self, location: Point) {
        match self.geometry.location_to_hsl(location) {
            Some(hsl) => {
                trace!(?location, ?hsl, "selection moved");
                self.apply(hsl);
            }
            None => warn!(?location, "no drawable area yet, selection unchanged"),
        }
    }

    /// Single mutation path: keeps HSL, the dot style, and the bound
    /// property consistent.
    fn apply(&mut self, hsl: Hsl) {
        self.hsl = hsl;
        let color = Rgba::from_hsl(hsl);
        self.inner_style.color = color;
        self.property.set(color);
    }

    fn emit(&mut self, event: PickerEvent) {
        for listener in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for HslPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HslPicker")
            .field("hsl", &self.hsl)
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
