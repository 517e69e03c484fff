//! Navigation signal source used by the route-change reset policy.
use std::fmt;
use std::rc::Rc;

/// Payload of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteChange {
    pub url: String,
    /// `true` when only the query or hash changed.
    pub shallow: bool,
}

impl RouteChange {
    #[inline]
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self { url: url.into(), shallow: false }
    }

    #[inline]
    pub fn shallow<S: Into<String>>(url: S) -> Self {
        Self { url: url.into(), shallow: true }
    }
}

/// Callback registered for route-change-complete events.
pub type RouteListener = Rc<dyn Fn(&RouteChange)>;

/// A publish/subscribe source of route-change-complete events.
pub trait NavigationSource {
    /// Registers `listener` until the returned [`Subscription`] is dropped.
    fn subscribe_route_change_complete(&self, listener: RouteListener) -> Subscription;
}

impl<S: NavigationSource + ?Sized> NavigationSource for &S {
    #[inline]
    fn subscribe_route_change_complete(&self, listener: RouteListener) -> Subscription {
        (**self).subscribe_route_change_complete(listener)
    }
}

impl<S: NavigationSource + ?Sized> NavigationSource for Rc<S> {
    #[inline]
    fn subscribe_route_change_complete(&self, listener: RouteListener) -> Subscription {
        (**self).subscribe_route_change_complete(listener)
    }
}

/// Releases a listener registration when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    #[inline]
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release.
    #[inline]
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Releases the registration now.
    #[inline]
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.release.is_some()).finish()
    }
}
