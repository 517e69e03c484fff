//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use render_boundary::prelude::*;
//!
//! let mut boundary = ErrorBoundary::<String>::builder()
//!     .fallback_component(|| format!("oops: {}", use_error().error))
//!     .build();
//!
//! let out = boundary.render(|| component("Feed", || Err(RenderError::msg("timeout"))));
//! assert_eq!(out, "oops: timeout");
//! ```

// Macros
pub use crate::reset_keys;

// Core types
pub use crate::boundary::{BoundaryHandle, ErrorBoundary, Fallback};
pub use crate::context::FallbackProps;
pub use crate::types::{ErrorInfo, RenderError, ResetKey, ResetKeys};

// Functions
pub use crate::component::component;
pub use crate::context::{try_use_error, use_error};

// Traits
pub use crate::traits::{NavigationSource, View};
