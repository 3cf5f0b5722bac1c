//! Two-way link between a Floem `RwSignal<Rgba>` and a [`ColorProperty`].
//!
//! Picker writes land in the property and are mirrored into the signal.
//! Outside writes to the signal are handed to `on_external`; writes that
//! came from the property are recognized and not echoed back.

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};

use crate::color::Rgba;
use crate::property::{ColorProperty, ObserverId};

pub(crate) fn bind_signal(
    color: RwSignal<Rgba>,
    property: &ColorProperty,
    on_external: impl Fn(Rgba) + 'static,
) -> ObserverId {
    let observer = property.subscribe(move |c| {
        if color.get_untracked() != c {
            color.set(c);
        }
    });

    let property = property.clone();
    create_effect(move |_| {
        let c = color.get();
        if c != property.get() {
            on_external(c);
        }
    });

    observer
}
