//! Single-threaded drag event source with scoped subscriptions.
//!
//! Every live [`Subscription`] owns a mailbox the source appends to on
//! [`EventSource::emit`]. Dropping the subscription removes its mailbox, so
//! nothing is ever delivered to a subscriber that has been torn down.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use super::event::InputEvent;

type Mailbox = Rc<RefCell<VecDeque<InputEvent>>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    mailboxes: FxHashMap<u64, Mailbox>,
}

/// Broadcasts [`InputEvent`]s to every active subscription.
///
/// Cloning yields another handle to the same source.
#[derive(Clone, Default)]
pub struct EventSource {
    registry: Rc<RefCell<Registry>>,
}

impl EventSource {
    /// Create a source with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. Events emitted from now on are queued for
    /// it until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self) -> Subscription {
        let mailbox = Mailbox::default();
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let _ = registry.mailboxes.insert(id, Rc::clone(&mailbox));
        log::debug!("event source: subscriber {id} registered");

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
            mailbox,
        }
    }

    /// Queue `event` for every live subscriber.
    pub fn emit(&self, event: InputEvent) {
        for mailbox in self.registry.borrow().mailboxes.values() {
            mailbox.borrow_mut().push_back(event);
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().mailboxes.len()
    }
}

/// RAII registration with an [`EventSource`].
///
/// Unsubscribes on drop. Outliving the source is fine; the subscription
/// then just stops receiving events.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
    mailbox: Mailbox,
}

impl Subscription {
    /// Take every event queued since the last drain, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<InputEvent> {
        self.mailbox.borrow_mut().drain(..).collect()
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.mailbox.borrow().len()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let _ = registry.borrow_mut().mailboxes.remove(&self.id);
            log::debug!("event source: subscriber {} unregistered", self.id);
        }
    }
}
