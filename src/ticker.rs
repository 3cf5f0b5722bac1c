//! Fixed-cadence repaint driver.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use floem::ViewId;
use floem::action::exec_after;
use tracing::debug;

/// Requests a repaint of `id` every `interval` until `alive` is cleared.
pub(crate) fn start_repaint_ticker(id: ViewId, interval: Duration, alive: Rc<Cell<bool>>) {
    debug!(?interval, "starting repaint ticker");
    schedule(id, interval, alive);
}

fn schedule(id: ViewId, interval: Duration, alive: Rc<Cell<bool>>) {
    exec_after(interval, move |_| {
        if !alive.get() {
            debug!("repaint ticker stopped");
            return;
        }
        id.request_paint();
        schedule(id, interval, alive);
    });
}
