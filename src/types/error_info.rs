use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::ErrorVec;

/// How a failure reached the boundary.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureOrigin {
    /// The render closure returned `Err`.
    Returned,
    /// The render closure panicked.
    Panicked,
    /// The error was pushed through [`BoundaryHandle::show_error`](crate::BoundaryHandle::show_error).
    Manual,
}

/// Source position of a component frame.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for SourceLocation {
    #[inline]
    fn from(location: &'static Location<'static>) -> Self {
        Self { file: location.file(), line: location.line(), column: location.column() }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One named component that was unwinding when the failure occurred.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentFrame {
    pub name: Cow<'static, str>,
    pub location: Option<SourceLocation>,
}

impl ComponentFrame {
    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(name: S) -> Self {
        Self { name: name.into(), location: None }
    }

    #[inline]
    pub fn at(mut self, location: impl Into<SourceLocation>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for ComponentFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "in {} (at {})", self.name, location),
            None => write!(f, "in {}", self.name),
        }
    }
}

/// Diagnostics handed to `on_error` next to the captured error.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Failing components, innermost first.
    pub component_stack: ErrorVec<ComponentFrame>,
    pub origin: CaptureOrigin,
    /// Name of the capturing boundary, if one was configured.
    pub boundary: Option<String>,
}

impl ErrorInfo {
    #[inline]
    pub fn new(origin: CaptureOrigin) -> Self {
        Self { component_stack: ErrorVec::new(), origin, boundary: None }
    }

    /// Returns the innermost failing component, if any frame was recorded.
    #[inline]
    pub fn source_component(&self) -> Option<&ComponentFrame> {
        self.component_stack.first()
    }

    /// Formats the component stack one frame per line.
    ///
    /// ```
    /// use render_boundary::{CaptureOrigin, ComponentFrame, ErrorInfo};
    ///
    /// let mut info = ErrorInfo::new(CaptureOrigin::Returned);
    /// info.component_stack.push(ComponentFrame::new("Avatar"));
    /// info.component_stack.push(ComponentFrame::new("Profile"));
    ///
    /// assert_eq!(info.component_stack_string(), "\n    in Avatar\n    in Profile");
    /// ```
    pub fn component_stack_string(&self) -> String {
        let mut out = String::new();
        for frame in &self.component_stack {
            out.push_str("\n    ");
            out.push_str(&frame.to_string());
        }
        out
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.boundary {
            Some(name) => write!(f, "captured by '{}' ({:?})", name, self.origin)?,
            None => write!(f, "captured ({:?})", self.origin)?,
        }
        f.write_str(&self.component_stack_string())
    }
}
