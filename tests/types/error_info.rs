use render_boundary::{CaptureOrigin, ComponentFrame, ErrorInfo, SourceLocation};

#[test]
fn frames_render_with_locations() {
    let frame = ComponentFrame::new("Avatar").at(SourceLocation {
        file: "src/profile.rs",
        line: 12,
        column: 5,
    });

    assert_eq!(frame.to_string(), "in Avatar (at src/profile.rs:12)");
    assert_eq!(ComponentFrame::new("Page").to_string(), "in Page");
}

#[test]
fn display_names_the_boundary() {
    let mut info = ErrorInfo::new(CaptureOrigin::Panicked);
    info.boundary = Some("sidebar".to_string());
    info.component_stack.push(ComponentFrame::new("Feed"));

    assert_eq!(info.to_string(), "captured by 'sidebar' (Panicked)\n    in Feed");
    assert_eq!(info.source_component(), Some(&ComponentFrame::new("Feed")));
}

#[test]
fn empty_stack_has_no_source_component() {
    let info = ErrorInfo::new(CaptureOrigin::Manual);

    assert!(info.source_component().is_none());
    assert_eq!(info.component_stack_string(), "");
    assert_eq!(info.to_string(), "captured (Manual)");
}
