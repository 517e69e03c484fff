use std::cell::RefCell;
use std::rc::Rc;

use crate::boundary::fallback::Fallback;
use crate::boundary::handle::{Core, ErrorCallback, ResetCallback};
use crate::boundary::{ErrorBoundary, ErrorPageFn};
use crate::config::BoundaryConfig;
use crate::context::FallbackProps;
use crate::traits::{ErrorPageProps, View};
use crate::types::{ErrorInfo, RenderError, ResetKeys};

/// Builder for [`ErrorBoundary`].
///
/// # Examples
///
/// ```
/// use render_boundary::{reset_keys, ErrorBoundary, RenderError};
///
/// let mut boundary = ErrorBoundary::<String>::builder()
///     .name("sidebar")
///     .fallback_render(|props| format!("{} (retry?)", props.error))
///     .reset_on_change(reset_keys!["inbox"])
///     .reset_on_route_change(false)
///     .build();
///
/// let out = boundary.render(|| Err(RenderError::msg("feed unavailable")));
/// assert_eq!(out, "feed unavailable (retry?)");
/// ```
#[must_use]
pub struct ErrorBoundaryBuilder<N> {
    fallback: Option<Fallback<N>>,
    on_error: Option<ErrorCallback>,
    on_reset: Option<ResetCallback>,
    error_page: Option<ErrorPageFn<N>>,
    reset_keys: ResetKeys,
    config: BoundaryConfig,
}

impl<N: View> ErrorBoundaryBuilder<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            fallback: None,
            on_error: None,
            on_reset: None,
            error_page: None,
            reset_keys: ResetKeys::new(),
            config: BoundaryConfig::default(),
        }
    }

    /// Renders `node` verbatim while errored.
    #[inline]
    pub fn fallback(self, node: N) -> Self {
        self.with_fallback(Fallback::Element(node))
    }

    /// Renders a component that reads the error through [`use_error`](crate::use_error).
    #[inline]
    pub fn fallback_component<F>(self, component: F) -> Self
    where
        F: Fn() -> N + 'static,
    {
        self.with_fallback(Fallback::component(component))
    }

    /// Renders the result of `render` called with the error and reset trigger.
    #[inline]
    pub fn fallback_render<F>(self, render: F) -> Self
    where
        F: Fn(&FallbackProps) -> N + 'static,
    {
        self.with_fallback(Fallback::render_with(render))
    }

    #[inline]
    pub fn with_fallback(mut self, fallback: Fallback<N>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Called once per capture, after the boundary entered `Errored`.
    #[inline]
    pub fn on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(&RenderError, &ErrorInfo) + 'static,
    {
        self.on_error = Some(Rc::new(on_error));
        self
    }

    /// Called on every reset out of `Errored`, before the error is cleared.
    #[inline]
    pub fn on_reset<F>(mut self, on_reset: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_reset = Some(Rc::new(on_reset));
        self
    }

    /// Keys the first [`ErrorBoundary::render_with_keys`] pass is compared against.
    #[inline]
    pub fn reset_on_change<K: Into<ResetKeys>>(mut self, keys: K) -> Self {
        self.reset_keys = keys.into();
        self
    }

    #[inline]
    pub fn reset_on_route_change(mut self, enabled: bool) -> Self {
        self.config.reset_on_route_change = enabled;
        self
    }

    #[inline]
    pub fn status_code(mut self, status_code: u16) -> Self {
        self.config.error_page.status_code = status_code;
        self
    }

    #[inline]
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.config.error_page.title = title.into();
        self
    }

    /// Replaces [`View::error_page`] for this boundary.
    #[inline]
    pub fn error_page<F>(mut self, error_page: F) -> Self
    where
        F: Fn(&ErrorPageProps<'_>) -> N + 'static,
    {
        self.error_page = Some(Rc::new(error_page));
        self
    }

    #[inline]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Replaces all plain-data settings at once.
    #[inline]
    pub fn config(mut self, config: BoundaryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ErrorBoundary<N> {
        let core = Core::new(self.on_error, self.on_reset, self.config.name.clone());
        ErrorBoundary {
            core: Rc::new(RefCell::new(core)),
            fallback: self.fallback,
            error_page: self.error_page,
            config: self.config,
            reset_keys: self.reset_keys,
            last_shown: None,
            mounted: false,
            subscription: None,
        }
    }
}

impl<N: View> Default for ErrorBoundaryBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}
