use std::fmt;

use render_boundary::RenderError;

#[derive(Debug)]
struct QuotaExceeded {
    limit: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quota of {} exceeded", self.limit)
    }
}

impl std::error::Error for QuotaExceeded {}

#[test]
fn wraps_typed_errors_for_downcasting() {
    let err = RenderError::from(QuotaExceeded { limit: 5 });

    assert_eq!(err.to_string(), "quota of 5 exceeded");
    assert_eq!(err.downcast_ref::<QuotaExceeded>().map(|e| e.limit), Some(5));
    assert!(err.downcast_ref::<std::io::Error>().is_none());
    assert!(!err.is_panic());
}

#[test]
fn message_errors_carry_no_typed_value() {
    let err = RenderError::msg("plain");

    assert!(err.as_error().is_none());
    assert_eq!(format!("{err:?}"), "RenderError::Message(\"plain\")");
}

#[test]
fn panic_payloads_keep_their_message() {
    let from_str = RenderError::from_panic(Box::new("static message"));
    let from_string = RenderError::from_panic(Box::new(format!("row {}", 7)));
    let opaque = RenderError::from_panic(Box::new(42u8));

    assert!(from_str.is_panic());
    assert_eq!(from_str.to_string(), "static message");
    assert_eq!(from_string.to_string(), "row 7");
    assert_eq!(opaque.to_string(), "Box<dyn Any>");
}

#[test]
fn clones_share_identity() {
    let original = RenderError::msg("same");
    let clone = original.clone();
    let lookalike = RenderError::msg("same");

    assert!(RenderError::ptr_eq(&original, &clone));
    assert!(!RenderError::ptr_eq(&original, &lookalike));
}
