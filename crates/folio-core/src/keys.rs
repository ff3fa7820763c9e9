//! Dismissal-key source.
//!
//! The lightbox does not reach for a global keyboard hook. It is handed a
//! [`KeySource`] and subscribes to it; the returned [`Subscription`]
//! removes the listener when dropped, so a listener can never outlive the
//! component that owns the guard.
//!
//! Everything here runs on the UI thread, hence `Rc`/`RefCell` rather than
//! locks.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Key name that closes an open lightbox
pub const DISMISS_KEY: &str = "Escape";

type Listener = Rc<dyn Fn(&str)>;

/// Something that delivers key presses to subscribers
pub trait KeySource {
    /// Register `listener` until the returned guard is dropped
    fn subscribe(&self, listener: Box<dyn Fn(&str)>) -> Subscription;
}

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// In-process key broadcaster.
///
/// The UI shell feeds it from the webview's `keydown` events; tests feed
/// it directly with [`KeyBus::publish`].
#[derive(Clone, Default)]
pub struct KeyBus {
    registry: Rc<Registry>,
}

impl KeyBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `key` to every current listener
    pub fn publish(&self, key: &str) {
        // Snapshot so listeners may subscribe or unsubscribe while running
        let listeners: Vec<Listener> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        tracing::trace!(key, listeners = listeners.len(), "Key published");
        for listener in listeners {
            listener(key);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

impl KeySource for KeyBus {
    fn subscribe(&self, listener: Box<dyn Fn(&str)>) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::from(listener)));

        tracing::debug!(id, "Key listener subscribed");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

impl std::fmt::Debug for KeyBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl PartialEq for KeyBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

/// Guard for one registered listener
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
            tracing::debug!(id = self.id, "Key listener unsubscribed");
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
