use std::rc::Rc;

use render_boundary::{keys_changed, reset_keys, ResetKey, ResetKeys};

#[test]
fn primitives_compare_by_value() {
    assert!(ResetKey::from("tab").same(&ResetKey::from(String::from("tab"))));
    assert!(ResetKey::from(3i32).same(&ResetKey::from(3i64)));
    assert!(ResetKey::from(true).same(&ResetKey::from(true)));
    assert!(ResetKey::from(()).same(&ResetKey::Unit));
    assert!(!ResetKey::from(3i32).same(&ResetKey::from(3u32)));
}

#[test]
fn floats_follow_object_is() {
    assert!(ResetKey::from(f64::NAN).same(&ResetKey::from(f64::NAN)));
    assert!(!ResetKey::from(0.0).same(&ResetKey::from(-0.0)));
    assert!(ResetKey::from(1.5f32).same(&ResetKey::from(1.5f64)));
}

#[test]
fn refs_compare_by_allocation() {
    let shared = Rc::new(String::from("filters"));
    let a = ResetKey::by_ref(shared.clone());
    let b = ResetKey::by_ref(shared);
    let c = ResetKey::by_ref(Rc::new(String::from("filters")));

    assert!(a.same(&b));
    assert!(!a.same(&c));
}

#[test]
fn has_changed_checks_length_then_positions() {
    let base = reset_keys!["a", "b"];

    assert!(!base.has_changed(&reset_keys!["a", "b"]));
    assert!(base.has_changed(&reset_keys!["a", "c"]));
    assert!(base.has_changed(&reset_keys!["b", "a"]));
    assert!(base.has_changed(&reset_keys!["a"]));
    assert!(ResetKeys::new().has_changed(&reset_keys![0]));
    assert!(!ResetKeys::default().has_changed(&reset_keys![]));
}

#[test]
fn builders_agree() {
    let pushed = ResetKeys::new().with(1u8).with('x');
    let from_vec = ResetKeys::from(vec![ResetKey::from(1u8), ResetKey::from('x')]);
    let from_array = ResetKeys::from([ResetKey::UInt(1), ResetKey::Char('x')]);

    assert!(!keys_changed(pushed.as_slice(), from_vec.as_slice()));
    assert!(!from_vec.has_changed(&from_array));
    assert_eq!((&pushed).into_iter().count(), 2);
}
