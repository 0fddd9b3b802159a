//! Gateway event resolution vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use visicount_core::event::{resolve_method, GatewayEvent};

use vector_loader::load;

fn shape_name(ev: &GatewayEvent) -> &'static str {
    match ev {
        GatewayEvent::Rest { .. } => "rest",
        GatewayEvent::Http { .. } => "http",
        GatewayEvent::Unrecognized => "unrecognized",
    }
}

#[test]
fn event_vectors() {
    let files = [
        "event_rest_post.json",
        "event_http_put_lowercase.json",
        "event_conflicting_shapes.json",
        "event_empty.json",
        "event_truncated_context.json",
        "event_unknown_method.json",
    ];

    for f in files {
        let v = load(f);
        let classified = GatewayEvent::classify(&v.event);
        assert_eq!(shape_name(&classified), v.expect_shape, "vector={}", v.description);
        assert_eq!(resolve_method(&v.event), v.expect_method, "vector={}", v.description);
    }
}

#[test]
fn flat_field_wins_over_nested() {
    let v = load("event_conflicting_shapes.json");
    assert_eq!(
        GatewayEvent::classify(&v.event),
        GatewayEvent::Rest { http_method: "POST".into() }
    );
}
