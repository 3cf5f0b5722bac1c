//! Standalone demo: the picker with a hex readout and a negative swatch.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsl::{HexConverter, NegativeConverter, Rgba, ValueConverter, color_picker};

fn main() {
    tracing_subscriber::fmt::init();

    let color = RwSignal::new(Rgba::RED);

    floem::Application::new()
        .window(
            move |_| {
                let picker = color_picker(color)
                    .expect("built-in spectrum always loads")
                    .on_start_selecting(|| tracing::info!("start selecting"))
                    .on_stop_selecting(move || {
                        tracing::info!(hex = %HexConverter.convert(&color.get_untracked()), "picked")
                    });

                v_stack((
                    picker.style(|s| s.width_full().height(240.0)),
                    label(move || HexConverter.convert(&color.get())).style(move |s| {
                        let c = NegativeConverter.convert(&color.get());
                        s.padding(8.0)
                            .font_size(16.0)
                            .color(Color::rgba(c.r(), c.g(), c.b(), c.a()))
                    }),
                    empty().style(move |s| {
                        let c = color.get();
                        s.width_full()
                            .height(48.0)
                            .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
                    }),
                ))
                .style(|s| s.size_full().gap(8.0).padding(8.0))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 400.0))
                    .title("floem-hsl"),
            ),
        )
        .run();
}
