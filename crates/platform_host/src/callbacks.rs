//! Observer registry used by host services to push snapshots to bound widgets.
//!
//! Services keep the latest snapshot and a [`Callbacks`] list. Widgets subscribe when they are
//! constructed and unsubscribe with the returned [`CallbackId`] when they are torn down.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CALLBACK_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Subscription handle returned by [`Callbacks::register`].
pub struct CallbackId(u64);

impl CallbackId {
    pub(crate) fn next() -> Self {
        Self(NEXT_CALLBACK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

struct Subscriber<T> {
    id: CallbackId,
    callback: Rc<dyn Fn(&T)>,
}

/// Single-threaded list of snapshot subscribers.
pub struct Callbacks<T> {
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

impl<T> Callbacks<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Registers a subscriber and returns its handle.
    pub fn register<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&T) + 'static,
    {
        let id = CallbackId::next();
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(callback),
        });
        id
    }

    /// Removes a subscriber. Returns `false` when the handle was already gone.
    pub fn unregister(&self, id: CallbackId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|entry| entry.id != id);
        subscribers.len() < before
    }

    /// Invokes every subscriber with `snapshot`.
    ///
    /// The list is cloned before dispatch so subscribers may re-enter the owning service.
    pub fn notify(&self, snapshot: &T) {
        let callbacks: Vec<_> = self
            .subscribers
            .borrow()
            .iter()
            .map(|entry| Rc::clone(&entry.callback))
            .collect();
        for callback in callbacks {
            callback(snapshot);
        }
    }

    /// Invokes one subscriber, typically right after it registered.
    pub fn notify_single(&self, id: CallbackId, snapshot: &T) -> bool {
        let callback = self
            .subscribers
            .borrow()
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| Rc::clone(&entry.callback));
        match callback {
            Some(callback) => {
                callback(snapshot);
                true
            }
            None => false,
        }
    }

    /// Number of live subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Returns `true` when nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscribers.borrow().is_empty()
    }
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn notify_reaches_every_subscriber_in_registration_order() {
        let callbacks: Callbacks<u32> = Callbacks::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        callbacks.register(move |value| first.borrow_mut().push(format!("a:{value}")));
        let second = Rc::clone(&seen);
        callbacks.register(move |value| second.borrow_mut().push(format!("b:{value}")));

        callbacks.notify(&7);

        assert_eq!(*seen.borrow(), vec!["a:7".to_string(), "b:7".to_string()]);
    }

    #[test]
    fn unregister_stops_delivery() {
        let callbacks: Callbacks<u32> = Callbacks::new();
        let total = Rc::new(Cell::new(0));

        let sink = Rc::clone(&total);
        let id = callbacks.register(move |value| sink.set(sink.get() + value));
        callbacks.notify(&2);
        assert!(callbacks.unregister(id));
        callbacks.notify(&5);

        assert_eq!(total.get(), 2);
        assert!(callbacks.is_empty());
        assert!(!callbacks.unregister(id));
    }

    #[test]
    fn notify_single_targets_one_subscriber() {
        let callbacks: Callbacks<u32> = Callbacks::new();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));

        let sink_a = Rc::clone(&a);
        let id_a = callbacks.register(move |value| sink_a.set(*value));
        let sink_b = Rc::clone(&b);
        callbacks.register(move |value| sink_b.set(*value));

        assert!(callbacks.notify_single(id_a, &9));
        assert_eq!((a.get(), b.get()), (9, 0));
        assert_eq!(callbacks.len(), 2);
    }

    #[test]
    fn subscribers_may_unregister_themselves_during_notify() {
        let callbacks: Rc<Callbacks<()>> = Rc::new(Callbacks::new());
        let own_id = Rc::new(Cell::new(None));

        let registry = Rc::clone(&callbacks);
        let slot = Rc::clone(&own_id);
        let id = callbacks.register(move |_| {
            if let Some(id) = slot.get() {
                registry.unregister(id);
            }
        });
        own_id.set(Some(id));

        callbacks.notify(&());
        assert!(callbacks.is_empty());
    }
}
