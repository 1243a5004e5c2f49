//! Publish/subscribe notification hub
//!
//! A [`NotificationHub`] keeps the latest published message and an ordered
//! list of [`Subscriber`] handles. Publishing stores the message and then
//! calls every subscriber synchronously, in subscription order.
//!
//! # Ownership
//!
//! Subscribers are shared through `Rc<dyn Subscriber>`: the hub holds a
//! handle but the caller keeps its own, and [`NotificationHub::unsubscribe`]
//! matches by allocation identity rather than by value.
//!
//! # Re-entrancy
//!
//! [`NotificationHub::publish`] borrows the hub mutably for the whole
//! broadcast, so the subscriber list cannot change mid-delivery. A subscriber
//! that reaches back into a hub wrapped in `RefCell` will panic on the borrow;
//! that pattern is not supported.

pub mod channel;

pub use channel::{Channel, Inbox, Transcript};

use std::rc::Rc;
use tracing::{debug, trace};

/// Anything that can receive broadcast messages
pub trait Subscriber {
    fn receive(&self, message: &str);

    /// Label used in log output
    fn name(&self) -> &str {
        "subscriber"
    }
}

/// Broadcasts messages to an ordered list of subscribers
#[derive(Default)]
pub struct NotificationHub {
    latest: Option<String>,
    subscribers: Vec<Rc<dyn Subscriber>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        NotificationHub {
            latest: None,
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber. The same handle may be added more than once and
    /// will then be notified once per entry.
    pub fn subscribe(&mut self, subscriber: Rc<dyn Subscriber>) {
        trace!(name = subscriber.name(), "subscribed");
        self.subscribers.push(subscriber);
    }

    /// Remove the first entry sharing `subscriber`'s allocation.
    ///
    /// Returns `false`, leaving the list untouched, if it was not subscribed.
    pub fn unsubscribe<S: Subscriber + ?Sized>(&mut self, subscriber: &Rc<S>) -> bool {
        let target = Rc::as_ptr(subscriber);
        match self
            .subscribers
            .iter()
            .position(|s| std::ptr::addr_eq(Rc::as_ptr(s), target))
        {
            Some(index) => {
                let removed = self.subscribers.remove(index);
                trace!(name = removed.name(), index, "unsubscribed");
                true
            }
            None => false,
        }
    }

    /// Store `message` as the latest and deliver it to every subscriber
    pub fn publish(&mut self, message: impl Into<String>) {
        let message: &str = self.latest.insert(message.into());
        debug!(
            subscribers = self.subscribers.len(),
            message = %message,
            "publishing"
        );
        for subscriber in &self.subscribers {
            subscriber.receive(message);
        }
    }

    /// Last published message, `None` before the first publish
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("latest", &self.latest)
            .field(
                "subscribers",
                &self.subscribers.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
