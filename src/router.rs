//! In-process route event bus.
//!
//! [`RouterEvents`] is a single-threaded publish/subscribe channel for
//! route-change-complete events. Hosts that own a real router forward its
//! completion events here; boundaries subscribe to it through
//! [`NavigationSource`].
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use render_boundary::router::RouterEvents;
//!
//! let router = RouterEvents::new();
//! let seen = Rc::new(Cell::new(0));
//!
//! let counter = seen.clone();
//! let subscription = router.on_route_change_complete(move |_| counter.set(counter.get() + 1));
//!
//! router.navigate("/settings");
//! drop(subscription);
//! router.navigate("/profile");
//!
//! assert_eq!(seen.get(), 1);
//! ```
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::traits::{NavigationSource, RouteChange, RouteListener, Subscription};

type ListenerId = u64;

#[derive(Default)]
struct Listeners {
    next_id: ListenerId,
    entries: SmallVec<[(ListenerId, RouteListener); 2]>,
}

impl Listeners {
    fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }
}

/// Publishes route-change-complete events to registered listeners.
///
/// Clones share the same listener set.
#[derive(Clone, Default)]
pub struct RouterEvents {
    inner: Rc<RefCell<Listeners>>,
}

impl RouterEvents {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a closure until the returned subscription is dropped.
    pub fn on_route_change_complete<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&RouteChange) + 'static,
    {
        self.subscribe_route_change_complete(Rc::new(listener))
    }

    /// Notifies every listener registered at the time of the call.
    ///
    /// Listeners removed by an earlier listener during the same emit are
    /// skipped. Returns how many listeners were invoked.
    pub fn emit_route_change_complete(&self, change: &RouteChange) -> usize {
        let snapshot: SmallVec<[(ListenerId, RouteListener); 2]> =
            self.inner.borrow().entries.iter().cloned().collect();

        let mut notified = 0;
        for (id, listener) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            listener(change);
            notified += 1;
        }
        notified
    }

    /// Shorthand for a full (non-shallow) navigation to `url`.
    #[inline]
    pub fn navigate<S: Into<String>>(&self, url: S) -> usize {
        self.emit_route_change_complete(&RouteChange::new(url))
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl NavigationSource for RouterEvents {
    fn subscribe_route_change_complete(&self, listener: RouteListener) -> Subscription {
        let id = {
            let mut listeners = self.inner.borrow_mut();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.push((id, listener));
            id
        };

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }
}

impl fmt::Debug for RouterEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterEvents").field("listeners", &self.listener_count()).finish()
    }
}
