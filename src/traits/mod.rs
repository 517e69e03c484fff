//! Seams between a boundary and its host.
//!
//! - [`View`]: the node type a boundary renders, including its generic error page
//! - [`NavigationSource`]: where route-change-complete events come from
pub mod navigation;
pub mod view;

pub use navigation::{NavigationSource, RouteChange, RouteListener, Subscription};
pub use view::{ErrorPageProps, View};
