//! Ergonomic macros for building boundary inputs.
//!
//! - [`macro@crate::reset_keys`] - Builds a [`ResetKeys`](crate::ResetKeys) list from
//!   heterogeneous values, converting each through `ResetKey::from`.
//!
//! # Examples
//!
//! ```
//! use render_boundary::reset_keys;
//!
//! let keys = reset_keys![true, 42u32, "user-7"];
//! assert_eq!(keys.len(), 3);
//! assert!(reset_keys![].is_empty());
//! ```

/// Builds a [`ResetKeys`](crate::ResetKeys) list.
///
/// Every argument must implement `Into<ResetKey>`; pass
/// [`ResetKey::by_ref`](crate::ResetKey::by_ref) for pointer-identity keys.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use render_boundary::{reset_keys, ResetKey};
///
/// let filters = Rc::new(vec!["open", "mine"]);
/// let before = reset_keys![1, ResetKey::by_ref(filters.clone())];
/// let after = reset_keys![2, ResetKey::by_ref(filters)];
///
/// assert!(before.has_changed(&after));
/// ```
#[macro_export]
macro_rules! reset_keys {
    () => {
        $crate::ResetKeys::new()
    };
    ($($key:expr),+ $(,)?) => {
        <$crate::ResetKeys as ::core::iter::FromIterator<$crate::ResetKey>>::from_iter([
            $($crate::ResetKey::from($key)),+
        ])
    };
}

/// Forwards to `tracing` when the `tracing` feature is enabled.
macro_rules! boundary_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use boundary_event;
