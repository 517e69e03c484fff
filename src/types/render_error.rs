//! The captured render-time failure.
//!
//! [`RenderError`] is a cheap, reference-counted handle around whatever the
//! subtree failed with: a returned [`std::error::Error`], the payload of a panic
//! that unwound out of the render closure, or a bare message. Cloning the handle
//! never clones the underlying value, so every clone handed to a fallback or an
//! `on_error` callback refers to the exact same capture.
//!
//! # Examples
//!
//! ```
//! use render_boundary::RenderError;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk unplugged");
//! let err = RenderError::from(io);
//! let copy = err.clone();
//!
//! assert_eq!(err.to_string(), "disk unplugged");
//! assert!(RenderError::ptr_eq(&err, &copy));
//! assert!(err.downcast_ref::<std::io::Error>().is_some());
//! ```
use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;

/// Handle to a value captured while rendering a protected subtree.
///
/// `RenderError` intentionally does not implement [`std::error::Error`]; instead
/// every `E: std::error::Error + 'static` converts into it, which lets render
/// closures use `?` directly.
#[must_use]
#[derive(Clone)]
pub struct RenderError {
    inner: Rc<Thrown>,
}

enum Thrown {
    Error(Box<dyn StdError + 'static>),
    Panic(Cow<'static, str>),
    Message(Cow<'static, str>),
}

impl RenderError {
    /// Wraps a concrete error value.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Wraps an already boxed error value.
    #[inline]
    pub fn from_boxed(error: Box<dyn StdError + 'static>) -> Self {
        Self { inner: Rc::new(Thrown::Error(error)) }
    }

    /// Creates an error from a bare message, for failures that carry no typed value.
    #[inline]
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { inner: Rc::new(Thrown::Message(message.into())) }
    }

    /// Converts a payload obtained from [`std::panic::catch_unwind`].
    ///
    /// `&'static str` and `String` payloads keep their message; anything else is
    /// recorded as an opaque panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = match payload.downcast::<&'static str>() {
            Ok(text) => Cow::Borrowed(*text),
            Err(payload) => match payload.downcast::<String>() {
                Ok(text) => Cow::Owned(*text),
                Err(_) => Cow::Borrowed("Box<dyn Any>"),
            },
        };
        Self { inner: Rc::new(Thrown::Panic(message)) }
    }

    /// Returns `true` if the failure was a panic rather than a returned error.
    #[inline]
    pub fn is_panic(&self) -> bool {
        matches!(*self.inner, Thrown::Panic(_))
    }

    /// Returns the wrapped error value, if the failure carried one.
    #[inline]
    pub fn as_error(&self) -> Option<&(dyn StdError + 'static)> {
        match &*self.inner {
            Thrown::Error(error) => Some(error.as_ref()),
            Thrown::Panic(_) | Thrown::Message(_) => None,
        }
    }

    /// Attempts to view the wrapped error as a concrete type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.as_error().and_then(|error| error.downcast_ref::<E>())
    }

    /// Returns `true` if both handles refer to the same captured value.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }
}

impl<E> From<E> for RenderError
where
    E: StdError + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner {
            Thrown::Error(error) => fmt::Display::fmt(error, f),
            Thrown::Panic(message) | Thrown::Message(message) => f.write_str(message),
        }
    }
}

impl fmt::Debug for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.inner {
            Thrown::Error(error) => f.debug_tuple("RenderError").field(error).finish(),
            Thrown::Panic(message) => f.debug_tuple("RenderError::Panic").field(message).finish(),
            Thrown::Message(message) => {
                f.debug_tuple("RenderError::Message").field(message).finish()
            },
        }
    }
}
