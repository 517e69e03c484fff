use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::macros::boundary_event;
use crate::types::{BoundaryState, CaptureOrigin, ErrorInfo, RenderError};

pub(crate) type ErrorCallback = Rc<dyn Fn(&RenderError, &ErrorInfo)>;
pub(crate) type ResetCallback = Rc<dyn Fn()>;

/// State shared between a boundary and its handles.
pub(crate) struct Core {
    pub(crate) state: BoundaryState,
    resetting: bool,
    on_error: Option<ErrorCallback>,
    on_reset: Option<ResetCallback>,
    name: Option<String>,
}

impl Core {
    pub(crate) fn new(
        on_error: Option<ErrorCallback>,
        on_reset: Option<ResetCallback>,
        name: Option<String>,
    ) -> Self {
        Self { state: BoundaryState::Idle, resetting: false, on_error, on_reset, name }
    }

    /// Enters `Errored`, then notifies `on_error`.
    pub(crate) fn capture(cell: &RefCell<Core>, error: RenderError, mut info: ErrorInfo) {
        let on_error = {
            let mut core = cell.borrow_mut();
            core.state = BoundaryState::Errored(error.clone());
            info.boundary = core.name.clone();
            core.on_error.clone()
        };

        boundary_event!(
            warn,
            boundary = info.boundary.as_deref().unwrap_or("anonymous"),
            origin = ?info.origin,
            error = %error,
            "render error captured"
        );

        if let Some(on_error) = on_error {
            on_error(&error, &info);
        }
    }

    /// Notifies `on_reset`, then returns to `Idle`.
    ///
    /// Returns `false` without side effects when not errored or when called
    /// from inside `on_reset`. An error that `on_reset` itself raises through
    /// [`BoundaryHandle::show_error`] replaces the one being reset, and the
    /// boundary stays `Errored` with it.
    pub(crate) fn reset(cell: &RefCell<Core>) -> bool {
        let (cleared, on_reset) = {
            let mut core = cell.borrow_mut();
            let cleared = match core.state.error() {
                Some(error) if !core.resetting => error.clone(),
                _ => return false,
            };
            core.resetting = true;
            (cleared, core.on_reset.clone())
        };

        let guard = ResetGuard { cell };
        if let Some(on_reset) = on_reset {
            on_reset();
        }
        drop(guard);

        let mut core = cell.borrow_mut();
        let raised = core.state.error().is_some_and(|error| !RenderError::ptr_eq(error, &cleared));
        if raised {
            boundary_event!(
                debug,
                boundary = core.name.as_deref().unwrap_or("anonymous"),
                "on_reset raised a new error; staying errored"
            );
        } else {
            core.state = BoundaryState::Idle;
            boundary_event!(debug, boundary = core.name.as_deref().unwrap_or("anonymous"), "boundary reset");
        }
        true
    }
}

/// Clears the re-entrancy flag even if `on_reset` unwinds.
struct ResetGuard<'a> {
    cell: &'a RefCell<Core>,
}

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut core) = self.cell.try_borrow_mut() {
            core.resetting = false;
        }
    }
}

/// A weak reference to a boundary's state.
///
/// Fallbacks receive one as [`FallbackProps::on_reset`](crate::FallbackProps::on_reset);
/// any other owner may get one from [`ErrorBoundary::handle`](crate::ErrorBoundary::handle).
/// Every operation becomes a no-op once the boundary is dropped.
#[derive(Clone)]
pub struct BoundaryHandle {
    core: Weak<RefCell<Core>>,
}

impl BoundaryHandle {
    #[inline]
    pub(crate) fn new(core: &Rc<RefCell<Core>>) -> Self {
        Self { core: Rc::downgrade(core) }
    }

    /// Runs `on_reset` and clears the error.
    ///
    /// Returns `true` if the current error was reset. The boundary stays
    /// `Errored` only when `on_reset` raised a new error.
    #[inline]
    pub fn reset(&self) -> bool {
        self.core.upgrade().is_some_and(|core| Core::reset(&core))
    }

    /// Puts the boundary into `Errored` from outside a render pass.
    ///
    /// Use this for failures in event handlers or timers, which are never
    /// captured automatically. `on_error` fires with [`CaptureOrigin::Manual`].
    /// Returns `false` if the boundary is gone.
    pub fn show_error<E>(&self, error: E) -> bool
    where
        E: Into<RenderError>,
    {
        match self.core.upgrade() {
            Some(core) => {
                Core::capture(&core, error.into(), ErrorInfo::new(CaptureOrigin::Manual));
                true
            },
            None => false,
        }
    }

    #[inline]
    pub fn is_errored(&self) -> bool {
        self.core.upgrade().is_some_and(|core| core.borrow().state.is_errored())
    }

    #[inline]
    pub fn error(&self) -> Option<RenderError> {
        self.core.upgrade().and_then(|core| core.borrow().state.error().cloned())
    }

    /// Returns `true` while the boundary this handle points to still exists.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.core.strong_count() > 0
    }
}

impl fmt::Debug for BoundaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryHandle")
            .field("alive", &self.is_alive())
            .field("errored", &self.is_errored())
            .finish()
    }
}
