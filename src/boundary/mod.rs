//! The error boundary state machine.
//!
//! An [`ErrorBoundary`] wraps the render step of a subtree. While `Idle` it
//! passes the subtree's output through. When the subtree fails, by returning
//! `Err` or by panicking, the boundary captures the failure, enters `Errored`,
//! notifies `on_error` and renders its fallback instead. The failure never
//! escapes the boundary.
//!
//! Three policies bring it back to `Idle`:
//!
//! 1. an explicit reset through a [`BoundaryHandle`] or [`ErrorBoundary::reset`];
//! 2. a change in the reset keys passed to [`ErrorBoundary::render_with_keys`];
//! 3. a route-change-complete signal while mounted on a [`NavigationSource`].
//!
//! # Examples
//!
//! ```
//! use render_boundary::{ErrorBoundary, RenderError};
//!
//! let mut boundary = ErrorBoundary::<String>::builder()
//!     .fallback_render(|props| props.error.to_string())
//!     .build();
//!
//! assert_eq!(boundary.render(|| Ok("<h1>Test</h1>".to_string())), "<h1>Test</h1>");
//!
//! let out = boundary.render(|| Err(RenderError::msg("Something went wrong!")));
//! assert_eq!(out, "Something went wrong!");
//!
//! assert!(boundary.reset());
//! assert_eq!(boundary.render(|| Ok("<h1>Test</h1>".to_string())), "<h1>Test</h1>");
//! ```
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::component;
use crate::config::BoundaryConfig;
use crate::context::FallbackProps;
use crate::macros::boundary_event;
use crate::traits::{ErrorPageProps, NavigationSource, RouteChange, RouteListener, Subscription, View};
use crate::types::{BoundaryState, CaptureOrigin, ErrorInfo, RenderError, ResetKeys};

mod builder;
mod fallback;
mod handle;

pub use builder::ErrorBoundaryBuilder;
pub use fallback::Fallback;
pub use handle::BoundaryHandle;

use handle::Core;

pub(crate) type ErrorPageFn<N> = Rc<dyn Fn(&ErrorPageProps<'_>) -> N>;

/// Captures one pass may go through when `on_error` keeps resetting the boundary.
const MAX_CAPTURES_PER_PASS: usize = 50;

/// Contains render failures of a subtree behind a resettable fallback.
///
/// See the [module documentation](self) for the lifecycle.
pub struct ErrorBoundary<N> {
    core: Rc<RefCell<Core>>,
    fallback: Option<Fallback<N>>,
    error_page: Option<ErrorPageFn<N>>,
    config: BoundaryConfig,
    reset_keys: ResetKeys,
    /// The error the previous pass rendered, if it rendered the errored branch.
    last_shown: Option<RenderError>,
    mounted: bool,
    subscription: Option<Subscription>,
}

impl<N: View> ErrorBoundary<N> {
    #[inline]
    pub fn builder() -> ErrorBoundaryBuilder<N> {
        ErrorBoundaryBuilder::new()
    }

    /// Runs one render pass with the reset keys left unchanged.
    ///
    /// `children` runs again within the same pass only when `on_error`
    /// resets the boundary it just put into `Errored`.
    pub fn render<F>(&mut self, children: F) -> N
    where
        F: FnMut() -> Result<N, RenderError>,
    {
        self.render_pass(children)
    }

    /// Runs one render pass with a new set of reset keys.
    ///
    /// If the keys differ from the previous pass and that pass already showed
    /// the current error, the boundary resets before rendering. An error that
    /// entered the boundary since the previous pass, whether captured in this
    /// pass or pushed through [`BoundaryHandle::show_error`], is never reset
    /// by a key change in the same cycle.
    pub fn render_with_keys<K, F>(&mut self, keys: K, children: F) -> N
    where
        K: Into<ResetKeys>,
        F: FnMut() -> Result<N, RenderError>,
    {
        let keys = keys.into();
        let changed = self.reset_keys.has_changed(&keys);
        self.reset_keys = keys;

        if let Some(current) = self.error().filter(|_| changed) {
            let shown =
                self.last_shown.as_ref().is_some_and(|shown| RenderError::ptr_eq(shown, &current));
            if shown {
                boundary_event!(debug, boundary = self.name(), "reset keys changed");
                Core::reset(&self.core);
            } else {
                boundary_event!(
                    trace,
                    boundary = self.name(),
                    "reset keys changed in the cycle that raised the error; reset deferred"
                );
            }
        }

        self.render_pass(children)
    }

    fn render_pass<F>(&mut self, mut children: F) -> N
    where
        F: FnMut() -> Result<N, RenderError>,
    {
        let mut captures = 0;
        loop {
            if let Some(error) = self.error() {
                self.last_shown = Some(error.clone());
                return self.render_errored(error);
            }

            let (error, info) = match self.run_children(&mut children) {
                Ok(node) => {
                    self.last_shown = None;
                    return node;
                },
                Err(captured) => captured,
            };

            Core::capture(&self.core, error.clone(), info);
            captures += 1;

            if captures >= MAX_CAPTURES_PER_PASS && !self.is_errored() {
                boundary_event!(
                    warn,
                    boundary = self.name(),
                    captures,
                    "on_error keeps resetting a failing subtree; keeping the error"
                );
                self.core.borrow_mut().state = BoundaryState::Errored(error);
            }
        }
    }

    /// Runs `children` once, turning a returned `Err` or a panic into a capture.
    fn run_children<F>(&self, children: &mut F) -> Result<N, (RenderError, ErrorInfo)>
    where
        F: FnMut() -> Result<N, RenderError>,
    {
        let pass = component::enter_pass();
        let (error, origin) = match panic::catch_unwind(AssertUnwindSafe(|| children())) {
            Ok(Ok(node)) => return Ok(node),
            Ok(Err(error)) => (error, CaptureOrigin::Returned),
            Err(payload) => (RenderError::from_panic(payload), CaptureOrigin::Panicked),
        };

        let mut info = ErrorInfo::new(origin);
        info.component_stack = pass.drain(&error, origin);
        Err((error, info))
    }

    fn render_errored(&self, error: RenderError) -> N {
        if let Some(fallback) = &self.fallback {
            return fallback.render(FallbackProps { error, on_reset: self.handle() });
        }

        let page = &self.config.error_page;
        let props = ErrorPageProps { status_code: page.status_code, title: &page.title, error: &error };
        match &self.error_page {
            Some(error_page) => error_page(&props),
            None => N::error_page(&props),
        }
    }

    /// Subscribes the route-change reset policy to `source`.
    ///
    /// Mounting again first releases the previous subscription. When
    /// `reset_on_route_change` is disabled nothing is subscribed.
    pub fn mount<S>(&mut self, source: &S)
    where
        S: NavigationSource + ?Sized,
    {
        self.unmount();
        self.mounted = true;
        boundary_event!(trace, boundary = self.name(), "boundary mounted");

        if !self.config.reset_on_route_change {
            return;
        }

        let handle = self.handle();
        let listener: RouteListener = Rc::new(move |_change: &RouteChange| {
            if handle.reset() {
                boundary_event!(debug, url = %_change.url, "route change reset");
            }
        });
        self.subscription = Some(source.subscribe_route_change_complete(listener));
    }

    /// Releases the navigation subscription, if any.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        if self.mounted {
            self.mounted = false;
            boundary_event!(trace, boundary = self.name(), "boundary unmounted");
        }
    }
}

impl<N> ErrorBoundary<N> {
    /// Returns a snapshot of the current state.
    #[inline]
    pub fn state(&self) -> BoundaryState {
        self.core.borrow().state.clone()
    }

    #[inline]
    pub fn error(&self) -> Option<RenderError> {
        self.core.borrow().state.error().cloned()
    }

    #[inline]
    pub fn is_errored(&self) -> bool {
        self.core.borrow().state.is_errored()
    }

    /// Returns a weak handle for resetting or erroring this boundary from elsewhere.
    #[inline]
    pub fn handle(&self) -> BoundaryHandle {
        BoundaryHandle::new(&self.core)
    }

    /// See [`BoundaryHandle::reset`].
    #[inline]
    pub fn reset(&self) -> bool {
        Core::reset(&self.core)
    }

    /// See [`BoundaryHandle::show_error`].
    #[inline]
    pub fn show_error<E>(&self, error: E)
    where
        E: Into<RenderError>,
    {
        Core::capture(&self.core, error.into(), ErrorInfo::new(CaptureOrigin::Manual));
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Keys of the most recent pass.
    #[inline]
    pub fn reset_keys(&self) -> &ResetKeys {
        &self.reset_keys
    }

    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    #[inline]
    fn name(&self) -> &str {
        self.config.name.as_deref().unwrap_or("anonymous")
    }
}

impl<N: View> Default for ErrorBoundary<N> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<N: fmt::Debug> fmt::Debug for ErrorBoundary<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBoundary")
            .field("state", &self.core.borrow().state)
            .field("fallback", &self.fallback)
            .field("config", &self.config)
            .field("reset_keys", &self.reset_keys)
            .field("mounted", &self.mounted)
            .finish()
    }
}
