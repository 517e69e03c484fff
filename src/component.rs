//! Named component frames for failure diagnostics.
//!
//! Wrapping a component's render closure in [`component`] records a
//! [`ComponentFrame`] whenever that closure fails, either by returning `Err` or
//! by unwinding. The capturing boundary drains the recorded frames into
//! [`ErrorInfo::component_stack`](crate::ErrorInfo::component_stack), innermost first.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use render_boundary::{component, ErrorBoundary, RenderError};
//!
//! let stack = Rc::new(RefCell::new(Vec::new()));
//! let sink = stack.clone();
//!
//! let mut boundary = ErrorBoundary::<String>::builder()
//!     .fallback("offline".to_string())
//!     .on_error(move |_, info| {
//!         sink.borrow_mut().extend(info.component_stack.iter().map(|f| f.name.to_string()));
//!     })
//!     .build();
//!
//! boundary.render(|| {
//!     component("Page", || {
//!         let avatar: String = component("Avatar", || Err(RenderError::msg("no image")))?;
//!         Ok(avatar)
//!     })
//! });
//!
//! assert_eq!(*stack.borrow(), ["Avatar", "Page"]);
//! ```
use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::panic::Location;

use crate::types::{CaptureOrigin, ComponentFrame, ErrorVec, RenderError};

/// A frame plus the returned error it failed with; `None` while unwinding.
struct TraceEntry {
    frame: ComponentFrame,
    error: Option<RenderError>,
}

thread_local! {
    static TRACE: RefCell<Vec<TraceEntry>> = const { RefCell::new(Vec::new()) };
    /// Number of boundary passes currently running on this thread.
    static PASS_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Records its frame if dropped while the thread is unwinding.
struct FrameGuard {
    frame: Option<ComponentFrame>,
}

impl FrameGuard {
    fn record(&mut self, error: Option<RenderError>) {
        let Some(frame) = self.frame.take() else {
            return;
        };
        // Outside a boundary pass nobody drains the trace.
        if PASS_DEPTH.try_with(Cell::get).unwrap_or(0) == 0 {
            return;
        }
        let _ = TRACE.try_with(|trace| trace.borrow_mut().push(TraceEntry { frame, error }));
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.record(None);
        }
    }
}

/// Renders a named component, recording a frame if it fails.
///
/// Frames recorded by nested components whose failures this closure handled
/// itself never reach the boundary's component stack.
#[track_caller]
pub fn component<N, S, F>(name: S, render: F) -> Result<N, RenderError>
where
    S: Into<Cow<'static, str>>,
    F: FnOnce() -> Result<N, RenderError>,
{
    let mut guard =
        FrameGuard { frame: Some(ComponentFrame::new(name).at(Location::caller())) };
    let mark = trace_len();

    let result = render();
    match &result {
        Ok(_) => {
            guard.frame = None;
            truncate_trace(mark);
        },
        Err(error) => guard.record(Some(error.clone())),
    }
    result
}

fn trace_len() -> usize {
    TRACE.with(|trace| trace.borrow().len())
}

fn truncate_trace(len: usize) {
    TRACE.with(|trace| trace.borrow_mut().truncate(len));
}

/// Marks one boundary pass as running; frames are recorded only while one is.
///
/// Dropping the guard discards whatever the pass left in the trace.
pub(crate) struct PassGuard {
    mark: usize,
}

pub(crate) fn enter_pass() -> PassGuard {
    PASS_DEPTH.with(|depth| depth.set(depth.get() + 1));
    PassGuard { mark: trace_len() }
}

impl PassGuard {
    /// Removes every frame recorded during this pass and keeps those that
    /// belong to `error`: frames that returned that exact error, or frames
    /// that unwound.
    pub(crate) fn drain(&self, error: &RenderError, origin: CaptureOrigin) -> ErrorVec<ComponentFrame> {
        TRACE.with(|trace| {
            let mut trace = trace.borrow_mut();
            let start = self.mark.min(trace.len());
            trace
                .drain(start..)
                .filter(|entry| match (&entry.error, origin) {
                    (Some(returned), CaptureOrigin::Returned) => RenderError::ptr_eq(returned, error),
                    (None, CaptureOrigin::Panicked) => true,
                    _ => false,
                })
                .map(|entry| entry.frame)
                .collect()
        })
    }
}

impl Drop for PassGuard {
    fn drop(&mut self) {
        let _ = TRACE.try_with(|trace| {
            if let Ok(mut trace) = trace.try_borrow_mut() {
                trace.truncate(self.mark);
            }
        });
        let _ = PASS_DEPTH.try_with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
