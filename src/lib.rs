//! Render-time error containment for component trees.
//!
//! An [`ErrorBoundary`] runs the render step of a subtree, captures any failure
//! raised while it runs (a returned `Err` or a panic), and renders a fallback in
//! its place. The fallback reaches the captured error and a reset trigger through
//! [`use_error`] or through the props handed to [`Fallback::Render`]. The
//! boundary returns to rendering its children on an explicit reset, when its
//! reset keys change, or when the router reports a completed navigation.
//!
//! # Examples
//!
//! ## Fallback with reset
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use render_boundary::{ErrorBoundary, RenderError};
//!
//! let broken = Rc::new(Cell::new(true));
//! let fix = broken.clone();
//!
//! let mut boundary = ErrorBoundary::<String>::builder()
//!     .fallback_render(|props| format!("<p role=\"alert\">{}</p>", props.error))
//!     .on_reset(move || fix.set(false))
//!     .build();
//!
//! let app = |broken: bool| -> Result<String, RenderError> {
//!     if broken {
//!         return Err(RenderError::msg("Something went wrong!"));
//!     }
//!     Ok("<h1>Test</h1>".to_string())
//! };
//!
//! let out = boundary.render(|| app(broken.get()));
//! assert_eq!(out, "<p role=\"alert\">Something went wrong!</p>");
//!
//! boundary.handle().reset();
//! assert_eq!(boundary.render(|| app(broken.get())), "<h1>Test</h1>");
//! ```
//!
//! ## Generic error page
//!
//! ```
//! use render_boundary::{ErrorBoundary, RenderError};
//!
//! let mut boundary = ErrorBoundary::<String>::builder().status_code(400).build();
//! let out = boundary.render(|| Err(RenderError::msg("bad input")));
//! assert_eq!(out, "400 | An unexpected error has occurred");
//! ```

/// Error boundary state machine, builder, handles and fallbacks
pub mod boundary;
/// Named component frames for failure diagnostics
pub mod component;
/// Plain-data boundary configuration
pub mod config;
/// Ambient fallback scope and the `use_error` accessor
pub mod context;
/// Macros for building reset keys
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// In-process route event bus
pub mod router;
/// Host seams: node type and navigation source
pub mod traits;
/// Captured error, diagnostics, state and reset keys
pub mod types;

pub use boundary::{BoundaryHandle, ErrorBoundary, ErrorBoundaryBuilder, Fallback};
pub use component::component;
pub use config::{BoundaryConfig, ErrorPageConfig};
pub use context::{try_use_error, use_error, FallbackProps, OutsideFallback};
pub use traits::{
    ErrorPageProps, NavigationSource, RouteChange, RouteListener, Subscription, View,
};
pub use types::{
    keys_changed, BoundaryState, CaptureOrigin, ComponentFrame, ErrorInfo, ErrorVec, RenderError,
    ResetKey, ResetKeys, SourceLocation,
};
