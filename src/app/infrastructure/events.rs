//! Scroll event source with scoped listener registration.
//!
//! A view registers a listener with [`ScrollEvents::subscribe`] and keeps
//! the returned [`ScrollSubscription`]; dropping it removes the listener so
//! no callback outlives the view that installed it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    /// Removals requested while an emit was running.
    pending_removals: Vec<u64>,
}

#[derive(Clone, Default)]
pub struct ScrollEvents {
    registry: Rc<RefCell<Registry>>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> ScrollSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Box::new(listener)));

        ScrollSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a scroll position to every live listener.
    pub fn emit(&self, scroll_y: f64) {
        // Listeners run without the registry borrowed so they may drop
        // their own subscription.
        let mut listeners = std::mem::take(&mut self.registry.borrow_mut().listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(scroll_y);
        }

        let mut registry = self.registry.borrow_mut();
        // Keep anything subscribed during the emit
        listeners.append(&mut registry.listeners);
        let removed = std::mem::take(&mut registry.pending_removals);
        let (kept, dropped): (Vec<_>, Vec<_>) = listeners
            .into_iter()
            .partition(|(id, _)| !removed.contains(id));
        registry.listeners = kept;
        drop(registry);

        // A dropped listener may own a subscription whose Drop needs the registry
        drop(dropped);
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle for one registered listener.
#[must_use = "dropping the subscription immediately unregisters the listener"]
pub struct ScrollSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl ScrollSubscription {
    pub fn unsubscribe(self) {}
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(id, _)| *id != self.id);
        if registry.listeners.len() == before {
            // Either mid-emit or already gone; the emit sweeps it up
            registry.pending_removals.push(self.id);
        }
    }
}
