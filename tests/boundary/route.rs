use std::rc::Rc;

use render_boundary::router::RouterEvents;
use render_boundary::{BoundaryConfig, ErrorBoundary, NavigationSource};

use crate::common::{alert, component_that_throws, heading, Calls};

fn errored_boundary(router: &RouterEvents, on_reset: &Calls, enabled: bool) -> ErrorBoundary<String> {
    let counter = on_reset.clone();
    let mut boundary = ErrorBoundary::<String>::builder()
        .fallback(alert("down"))
        .on_reset(move || counter.hit())
        .reset_on_route_change(enabled)
        .build();
    boundary.mount(router);
    boundary.render(|| component_that_throws(true));
    boundary
}

#[test]
fn navigation_resets_by_default() {
    let router = RouterEvents::new();
    let on_reset = Calls::default();
    let mut boundary = errored_boundary(&router, &on_reset, true);

    assert_eq!(router.navigate("/home"), 1);

    assert!(!boundary.is_errored());
    assert_eq!(on_reset.count(), 1);
    assert_eq!(boundary.render(|| Ok(heading("Home"))), heading("Home"));
}

#[test]
fn navigation_is_ignored_when_disabled() {
    let router = RouterEvents::new();
    let on_reset = Calls::default();
    let boundary = errored_boundary(&router, &on_reset, false);

    assert_eq!(router.listener_count(), 0);
    router.navigate("/home");

    assert!(boundary.is_errored());
    assert!(boundary.is_mounted());
    assert_eq!(on_reset.count(), 0);
}

#[test]
fn navigation_while_idle_does_not_fire_on_reset() {
    let router = RouterEvents::new();
    let on_reset = Calls::default();
    let counter = on_reset.clone();
    let mut boundary = ErrorBoundary::<String>::builder().on_reset(move || counter.hit()).build();
    boundary.mount(&router);

    router.navigate("/a");

    assert_eq!(on_reset.count(), 0);
}

#[test]
fn unmount_releases_the_subscription() {
    let router = RouterEvents::new();
    let on_reset = Calls::default();
    let mut boundary = errored_boundary(&router, &on_reset, true);
    assert_eq!(router.listener_count(), 1);

    boundary.unmount();
    assert!(!boundary.is_mounted());
    assert_eq!(router.listener_count(), 0);

    assert_eq!(router.navigate("/after"), 0);
    assert!(boundary.is_errored());
}

#[test]
fn dropping_the_boundary_unsubscribes() {
    let router = RouterEvents::new();
    let on_reset = Calls::default();
    let boundary = errored_boundary(&router, &on_reset, true);

    drop(boundary);

    assert_eq!(router.listener_count(), 0);
    assert_eq!(router.navigate("/after"), 0);
    assert_eq!(on_reset.count(), 0);
}

#[test]
fn remounting_replaces_the_subscription() {
    let router = RouterEvents::new();
    let on_reset = Calls::default();
    let mut boundary = errored_boundary(&router, &on_reset, true);

    boundary.mount(&router);
    assert_eq!(router.listener_count(), 1);

    router.navigate("/again");
    assert_eq!(on_reset.count(), 1);
}

#[test]
fn config_controls_the_route_policy() {
    let router: Rc<dyn NavigationSource> = Rc::new(RouterEvents::new());
    let config = BoundaryConfig { reset_on_route_change: false, ..BoundaryConfig::default() };
    let mut boundary = ErrorBoundary::<String>::builder().config(config).build();

    boundary.mount(&router);

    assert!(boundary.is_mounted());
    assert!(!boundary.config().reset_on_route_change);
}
