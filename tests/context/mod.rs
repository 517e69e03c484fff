use std::panic::{self, AssertUnwindSafe};

use render_boundary::{try_use_error, use_error, ErrorBoundary, OutsideFallback, RenderError};

use crate::common::component_that_throws;

#[test]
fn try_use_error_outside_fallback_fails() {
    let err = try_use_error().unwrap_err();

    assert_eq!(err, OutsideFallback);
    assert!(err.to_string().contains("use_error"));
}

#[test]
#[should_panic(expected = "must be called while an `ErrorBoundary` renders its fallback")]
fn use_error_outside_fallback_panics() {
    let _ = use_error();
}

#[test]
fn use_error_from_children_is_captured_as_a_panic() {
    let mut boundary = ErrorBoundary::<String>::builder()
        .fallback_render(|props| props.error.to_string())
        .build();

    let out = boundary.render(|| Ok(use_error().error.to_string()));

    assert!(out.contains("must be called"));
}

#[test]
fn nearest_fallback_wins() {
    let mut boundary = ErrorBoundary::<String>::builder()
        .fallback_component(|| {
            let outer = use_error().error.to_string();
            let mut inner = ErrorBoundary::<String>::builder()
                .fallback_component(|| use_error().error.to_string())
                .build();
            let nested = inner.render(|| Err(RenderError::msg("inner")));
            let after = use_error().error.to_string();
            format!("{outer}/{nested}/{after}")
        })
        .build();

    let out = boundary.render(|| Err(RenderError::msg("outer")));

    assert_eq!(out, "outer/inner/outer");
    assert!(try_use_error().is_err());
}

#[test]
fn scope_is_popped_when_fallback_panics() {
    let mut boundary = ErrorBoundary::<String>::builder()
        .fallback_component(|| panic!("fallback is broken"))
        .build();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        boundary.render(|| component_that_throws(true))
    }));

    assert!(result.is_err());
    assert!(try_use_error().is_err());
}

#[test]
fn fallback_props_reset_clears_the_boundary() {
    let mut boundary = ErrorBoundary::<String>::builder()
        .fallback_render(|props| {
            assert!(props.on_reset.is_errored());
            String::new()
        })
        .build();

    boundary.render(|| component_that_throws(true));
    let props = {
        let handle = boundary.handle();
        render_boundary::FallbackProps { error: boundary.error().expect("errored"), on_reset: handle }
    };

    assert!(props.reset());
    assert!(!boundary.is_errored());
}
