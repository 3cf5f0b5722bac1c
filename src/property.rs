//! Observable color cell shared between the picker and its bindings.
//!
//! A `ColorProperty` is a cheap-to-clone handle; all clones see the same
//! value and the same observer list. Observers run synchronously on `set`,
//! and only when the value actually changes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::color::Rgba;

type Observer = Box<dyn Fn(Rgba)>;

/// Handle returned by [`ColorProperty::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
struct Shared {
    value: Cell<Rgba>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_id: Cell<u64>,
}

#[derive(Clone, Default)]
pub struct ColorProperty {
    shared: Rc<Shared>,
}

impl ColorProperty {
    pub fn new(initial: Rgba) -> Self {
        let property = Self::default();
        property.shared.value.set(initial);
        property
    }

    pub fn get(&self) -> Rgba {
        self.shared.value.get()
    }

    /// Store `value` and notify every observer if it differs from the
    /// current one.
    ///
    /// Observers may call `set` again, but must not subscribe or unsubscribe
    /// while being notified.
    pub fn set(&self, value: Rgba) {
        if self.shared.value.replace(value) == value {
            return;
        }
        let observers = self.shared.observers.borrow();
        for (_, observer) in observers.iter() {
            observer(value);
        }
    }

    pub fn subscribe(&self, observer: impl Fn(Rgba) + 'static) -> ObserverId {
        let id = ObserverId(self.shared.next_id.get());
        self.shared.next_id.set(id.0 + 1);
        self.shared
            .observers
            .borrow_mut()
            .push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut observers = self.shared.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(oid, _)| *oid != id);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.shared.observers.borrow().len()
    }
}

impl std::fmt::Debug for ColorProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorProperty")
            .field("value", &self.get())
            .field("observers", &self.observer_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_holds_red() {
        assert_eq!(ColorProperty::default().get(), Rgba::RED);
    }

    #[test]
    fn clones_share_value() {
        let a = ColorProperty::new(Rgba::BLACK);
        let b = a.clone();
        a.set(Rgba::WHITE);
        assert_eq!(b.get(), Rgba::WHITE);
    }

    #[test]
    fn set_notifies_all_observers() {
        let property = ColorProperty::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..2 {
            let seen = seen.clone();
            property.subscribe(move |c| seen.borrow_mut().push((tag, c)));
        }
        property.set(Rgba::WHITE);
        assert_eq!(*seen.borrow(), vec![(0, Rgba::WHITE), (1, Rgba::WHITE)]);
    }

    #[test]
    fn unchanged_value_does_not_notify() {
        let property = ColorProperty::new(Rgba::BLACK);
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        property.subscribe(move |_| c.set(c.get() + 1));
        property.set(Rgba::BLACK);
        assert_eq!(count.get(), 0);
        property.set(Rgba::WHITE);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let property = ColorProperty::default();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let id = property.subscribe(move |_| c.set(c.get() + 1));
        assert!(property.unsubscribe(id));
        assert!(!property.unsubscribe(id));
        property.set(Rgba::WHITE);
        assert_eq!(count.get(), 0);
        assert_eq!(property.observer_count(), 0);
    }

    #[test]
    fn observer_may_write_back() {
        let property = ColorProperty::default();
        let handle = property.clone();
        property.subscribe(move |c| {
            if c == Rgba::WHITE {
                handle.set(Rgba::BLACK);
            }
        });
        property.set(Rgba::WHITE);
        assert_eq!(property.get(), Rgba::BLACK);
    }
}
