//! Construction-time configuration of a boundary.
//!
//! Everything that is plain data lives here so it can be loaded from a
//! settings file when the `serde` feature is enabled. Callbacks and fallbacks
//! are attached through [`ErrorBoundaryBuilder`](crate::ErrorBoundaryBuilder).
//!
//! # Examples
//!
//! ```
//! use render_boundary::BoundaryConfig;
//!
//! let config = BoundaryConfig::default();
//! assert!(config.reset_on_route_change);
//! assert_eq!(config.error_page.status_code, 500);
//! assert_eq!(config.error_page.title, "An unexpected error has occurred");
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status code shown by the generic error page unless configured otherwise.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// Title shown by the generic error page unless configured otherwise.
pub const DEFAULT_TITLE: &str = "An unexpected error has occurred";

/// Generic error page settings, used when no fallback is configured.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPageConfig {
    pub status_code: u16,
    pub title: String,
}

impl Default for ErrorPageConfig {
    fn default() -> Self {
        Self { status_code: DEFAULT_STATUS_CODE, title: DEFAULT_TITLE.to_string() }
    }
}

/// Plain-data settings of a boundary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Reported in [`ErrorInfo::boundary`](crate::ErrorInfo::boundary) and log events.
    pub name: Option<String>,
    /// Reset on every route-change-complete signal while mounted.
    pub reset_on_route_change: bool,
    pub error_page: ErrorPageConfig,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { name: None, reset_on_route_change: true, error_page: ErrorPageConfig::default() }
    }
}
