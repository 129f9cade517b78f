//! Navigation dispatcher.
//!
//! A synchronous publish/subscribe channel that lets the search results panel
//! request a section change without holding a reference to whoever owns the
//! view state. The root app creates one [`NavigationDispatcher`] and hands
//! clones of it to the components that need to publish.
//!
//! # Semantics
//!
//! - [`publish`](NavigationDispatcher::publish) calls every handler once, in
//!   subscription order, before returning.
//! - Publishing with no subscribers does nothing.
//! - Handlers run over a snapshot of the subscriber list, so a handler may
//!   publish again or unsubscribe itself without panicking. Subscribers added
//!   during a publish first see the next one.
//!
//! The dispatcher is single-threaded (`Rc`), matching the event-loop model.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The only cross-component message shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub section_id: String,
}

type Handler = Rc<RefCell<dyn FnMut(&NavigationEvent)>>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Cloneable handle to a shared navigation channel.
#[derive(Clone, Default)]
pub struct NavigationDispatcher {
    inner: Rc<RefCell<Subscribers>>,
}

impl NavigationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`. Keep the returned [`Subscription`] to deregister.
    #[must_use = "dropping the Subscription leaves the handler registered with no way to remove it"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&NavigationEvent) + 'static,
    {
        let handler: Handler = Rc::new(RefCell::new(handler));
        let mut subs = self.inner.borrow_mut();
        let id = subs.next_id;
        subs.next_id += 1;
        subs.handlers.push((id, handler));
        Subscription {
            id,
            subscribers: Rc::downgrade(&self.inner),
        }
    }

    /// Broadcast a navigation intent to every current subscriber.
    pub fn publish(&self, section_id: &str) {
        let snapshot: Vec<Handler> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        let event = NavigationEvent {
            section_id: section_id.to_string(),
        };
        for handler in snapshot {
            // A handler that re-publishes to itself would need a second
            // mutable borrow; skip that nested call instead of panicking.
            if let Ok(mut f) = handler.try_borrow_mut() {
                f(&event);
            }
        }
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl std::fmt::Debug for NavigationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Deregistration capability returned by [`NavigationDispatcher::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<RefCell<Subscribers>>,
}

impl Subscription {
    /// Remove the handler. A no-op if the dispatcher is already gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.subscribers.upgrade() {
            inner.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
        }
    }
}
