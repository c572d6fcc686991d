use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, Weak},
};

use tracing::{debug, error};

type Observer<S> = Box<dyn Fn(&S) + Send>;

struct Registry<S> {
    next_id: u64,
    observers: BTreeMap<u64, Observer<S>>,
}

/// State observers registered on a store.
pub(crate) struct Observers<S> {
    registry: Arc<Mutex<Registry<S>>>,
}

impl<S: 'static> Observers<S> {
    pub(crate) fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                next_id: 0,
                observers: BTreeMap::new(),
            })),
        }
    }

    pub(crate) fn subscribe(&self, observer: Observer<S>) -> Subscription {
        let mut registry = self.registry.lock().unwrap_or_else(|e| {
            error!("Observer registry lock poisoned, recovering: {}", e);
            e.into_inner()
        });
        let id = registry.next_id;
        registry.next_id += 1;
        registry.observers.insert(id, observer);
        debug!(observer_id = id, "Observer subscribed");

        let weak: Weak<Mutex<Registry<S>>> = Arc::downgrade(&self.registry);
        Subscription {
            id,
            remove: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry
                        .lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .observers
                        .remove(&id);
                }
            })),
        }
    }

    /// Observers must not subscribe or unsubscribe from inside the callback.
    pub(crate) fn notify(&self, state: &S) {
        let registry = self.registry.lock().unwrap_or_else(|e| {
            error!("Observer registry lock poisoned, recovering: {}", e);
            e.into_inner()
        });
        for observer in registry.observers.values() {
            observer(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .observers
            .len()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// The observer stays registered until the handle is dropped or
/// [`unsubscribe`](Subscription::unsubscribe) is called. Outliving the
/// store is fine.
#[must_use = "dropping a Subscription unsubscribes the observer immediately"]
pub struct Subscription {
    id: u64,
    remove: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Stop receiving notifications.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
            debug!(observer_id = self.id, "Observer unsubscribed");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
