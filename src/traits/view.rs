//! The host node type rendered by a boundary.
//!
//! A boundary is generic over the node type `N` its children produce. The only
//! thing it needs from that type, besides cloning a fallback element, is a way
//! to build the generic error page shown when no fallback is configured.
//!
//! # Examples
//!
//! ```
//! use render_boundary::{ErrorPageProps, RenderError, View};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Node {
//!     Text(String),
//!     Page { status: u16 },
//! }
//!
//! impl View for Node {
//!     fn error_page(props: &ErrorPageProps<'_>) -> Self {
//!         Node::Page { status: props.status_code }
//!     }
//! }
//!
//! let error = RenderError::msg("boom");
//! let page = Node::error_page(&ErrorPageProps { status_code: 500, title: "oops", error: &error });
//! assert_eq!(page, Node::Page { status: 500 });
//! ```
use crate::types::RenderError;

/// Inputs of the generic full-page error display.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPageProps<'a> {
    pub status_code: u16,
    pub title: &'a str,
    pub error: &'a RenderError,
}

/// A renderable node type.
pub trait View: Clone + 'static {
    /// Builds the generic failure page.
    fn error_page(props: &ErrorPageProps<'_>) -> Self;
}

impl View for String {
    fn error_page(props: &ErrorPageProps<'_>) -> Self {
        format!("{} | {}", props.status_code, props.title)
    }
}
