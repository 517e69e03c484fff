//! Ambient access to the captured error from inside a fallback.
//!
//! While an errored boundary renders its fallback, it publishes a
//! [`FallbackProps`] value on a thread-local scope stack. Code running inside
//! that fallback reads the nearest value with [`use_error`]. Outside a fallback
//! nothing is published, and calling [`use_error`] is a usage error.
//!
//! # Examples
//!
//! ```
//! use render_boundary::{try_use_error, ErrorBoundary, RenderError};
//!
//! let mut boundary = ErrorBoundary::<String>::builder()
//!     .fallback_component(|| {
//!         let props = render_boundary::use_error();
//!         format!("failed: {}", props.error)
//!     })
//!     .build();
//!
//! let out = boundary.render(|| Err(RenderError::msg("no data")));
//! assert_eq!(out, "failed: no data");
//! assert!(try_use_error().is_err());
//! ```
use std::cell::RefCell;
use std::error::Error as StdError;
use std::fmt;

use crate::boundary::BoundaryHandle;
use crate::types::RenderError;

/// The value a fallback sees: the captured error and a reset trigger.
#[derive(Debug, Clone)]
pub struct FallbackProps {
    pub error: RenderError,
    pub on_reset: BoundaryHandle,
}

impl FallbackProps {
    /// Resets the boundary that published these props.
    #[inline]
    pub fn reset(&self) -> bool {
        self.on_reset.reset()
    }
}

/// Returned by [`try_use_error`] outside any fallback scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutsideFallback;

impl fmt::Display for OutsideFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("`use_error` must be called while an `ErrorBoundary` renders its fallback")
    }
}

impl StdError for OutsideFallback {}

thread_local! {
    static SCOPES: RefCell<Vec<FallbackProps>> = const { RefCell::new(Vec::new()) };
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let _ = SCOPES.try_with(|scopes| scopes.borrow_mut().pop());
    }
}

/// Runs `render` with `props` published as the nearest ambient value.
pub(crate) fn provide<R>(props: FallbackProps, render: impl FnOnce() -> R) -> R {
    SCOPES.with(|scopes| scopes.borrow_mut().push(props));
    let _guard = ScopeGuard;
    render()
}

/// Resolves the nearest published [`FallbackProps`].
///
/// # Panics
///
/// Panics if no boundary is rendering a fallback on this thread.
#[track_caller]
pub fn use_error() -> FallbackProps {
    match try_use_error() {
        Ok(props) => props,
        Err(misuse) => panic!("{misuse}"),
    }
}

/// Non-panicking form of [`use_error`].
pub fn try_use_error() -> Result<FallbackProps, OutsideFallback> {
    SCOPES.with(|scopes| scopes.borrow().last().cloned()).ok_or(OutsideFallback)
}
