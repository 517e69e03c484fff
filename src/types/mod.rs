//! Value types shared by the boundary, its handles and its fallbacks.
//!
//! # Examples
//!
//! ```
//! use render_boundary::{BoundaryState, RenderError};
//!
//! let state = BoundaryState::Errored(RenderError::msg("Something went wrong!"));
//! assert!(state.is_errored());
//! assert_eq!(state.error().map(ToString::to_string).as_deref(), Some("Something went wrong!"));
//! ```
use smallvec::SmallVec;

pub mod error_info;
pub mod render_error;
pub mod reset_keys;
pub mod state;

pub use error_info::*;
pub use render_error::*;
pub use reset_keys::*;
pub use state::*;

/// SmallVec-backed collection used for component frames.
///
/// Uses inline storage for up to 4 elements, which covers typical nesting
/// depth below a boundary without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
