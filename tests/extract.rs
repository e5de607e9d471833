//! End-to-end extraction over assembled handles and captured snapshots.

use std::collections::BTreeMap;

use routelens::{
    AppHandle, LegacyRoute, RouteEntry, RouterHandle, StackFrame, extract_routes, is_router,
};

fn records(app: &AppHandle) -> Vec<String> {
    extract_routes(app).iter().map(|r| r.to_string()).collect()
}

#[test]
fn empty_handle_exposes_nothing() {
    let app = AppHandle::default();
    assert!(extract_routes(&app).is_empty());
    assert!(!is_router(&app));
}

#[test]
fn matched_but_empty_shape_still_wins() {
    // An empty router is a recognized shape with zero routes, not a
    // fall-through to the next probe.
    let app = AppHandle {
        router: Some(RouterHandle::new()),
        ..AppHandle::default()
    };
    assert!(extract_routes(&app).is_empty());
    assert!(!is_router(&app));
}

#[test]
fn legacy_method_map_orders_by_key_then_declaration() {
    let mut map = BTreeMap::new();
    map.insert("post".to_owned(), vec![LegacyRoute::new("post", "/users")]);
    map.insert(
        "get".to_owned(),
        vec![LegacyRoute::new("get", "/users"), LegacyRoute::new("get", "/orders")],
    );
    let app = AppHandle::from_method_map(map);
    assert_eq!(records(&app), ["GET /users", "GET /orders", "POST /users"]);
    assert!(is_router(&app));
}

#[test]
fn legacy_map_outranks_the_router_field() {
    let mut map = BTreeMap::new();
    map.insert("get".to_owned(), vec![LegacyRoute::new("get", "/legacy")]);
    let app = AppHandle {
        routes: Some(map),
        router: Some(RouterHandle::new().route(RouteEntry::new("/modern").method("get"))),
        ..AppHandle::default()
    };
    assert_eq!(records(&app), ["GET /legacy"]);
}

#[test]
fn mounted_group_inherits_its_prefix() {
    let app = AppHandle::from_router(
        RouterHandle::new().mount(
            "/api",
            RouterHandle::new().route(RouteEntry::new("/users").method("get")),
        ),
    );
    assert_eq!(records(&app), ["GET /api/users"]);
}

#[test]
fn deeply_nested_mounts_compose() {
    let app = AppHandle::from_router(
        RouterHandle::new().mount(
            "/api",
            RouterHandle::new().mount(
                "/v1",
                RouterHandle::new().route(RouteEntry::new("/users").method("get")),
            ),
        ),
    );
    assert_eq!(records(&app), ["GET /api/v1/users"]);
}

#[test]
fn one_declaration_many_methods_yields_one_record_each() {
    let app = AppHandle::from_router(
        RouterHandle::new().route(RouteEntry::new("/users").method("get").method("post")),
    );
    assert_eq!(records(&app), ["GET /users", "POST /users"]);
}

#[test]
fn duplicate_declarations_collapse_to_first_seen() {
    let app = AppHandle::from_router(
        RouterHandle::new()
            .route(RouteEntry::new("/users").method("get"))
            .route(RouteEntry::new("/orders").method("get"))
            .route(RouteEntry::new("/users").method("get")),
    );
    assert_eq!(records(&app), ["GET /users", "GET /orders"]);
}

#[test]
fn double_registration_on_one_declaration_records_once() {
    let app = AppHandle::from_router(
        RouterHandle::new().route(RouteEntry::new("/users").method("get").method("get")),
    );
    assert_eq!(records(&app), ["GET /users"]);
}

#[test]
fn bare_stack_shape_extracts() {
    let app = AppHandle::from_stack(vec![StackFrame::endpoint(
        RouteEntry::new("/users").method("get"),
    )]);
    assert_eq!(records(&app), ["GET /users"]);
}

#[test]
fn embedded_router_shape_extracts() {
    let app = AppHandle::from_embedded_router(
        RouterHandle::new().route(RouteEntry::new("/users").method("get")),
    );
    assert_eq!(records(&app), ["GET /users"]);
}

#[test]
fn snapshot_with_unknown_fields_loads_leniently() {
    let app = AppHandle::from_json(
        r#"{
            "name": "orders-service",
            "settings": { "env": "production" },
            "_router": { "stack": [
                { "name": "logger", "handle": {} },
                { "route": { "path": "/orders", "stack": [
                    { "method": "get" }, { "method": "delete" }
                ] } },
                { "matcher": "^\\/admin\\/?(?=\\/|$)", "handle": { "stack": [
                    { "route": { "path": "/stats", "stack": [ { "method": "get" } ] } }
                ] } }
            ] }
        }"#,
    )
    .unwrap();
    assert_eq!(records(&app), ["GET /orders", "DELETE /orders", "GET /admin/stats"]);
}

#[test]
fn legacy_snapshot_loads_and_extracts() {
    let app = AppHandle::from_json(
        r#"{ "routes": {
            "get": [
                { "method": "get", "path": "/users" },
                { "method": "get", "path": "/orders" }
            ],
            "delete": [ { "method": "delete", "path": "/users/:id" } ]
        } }"#,
    )
    .unwrap();
    assert_eq!(records(&app), ["DELETE /users/:id", "GET /users", "GET /orders"]);
}

#[test]
fn snapshot_accepts_the_historical_matcher_field_name() {
    let app = AppHandle::from_json(
        r#"{ "stack": [
            { "regexp": "^\\/api\\/?(?=\\/|$)", "handle": { "stack": [
                { "route": { "path": "/users", "stack": [ { "method": "get" } ] } }
            ] } }
        ] }"#,
    )
    .unwrap();
    assert_eq!(records(&app), ["GET /api/users"]);
}

#[test]
fn exotic_mount_pattern_degrades_to_an_empty_prefix() {
    // A parameterized mount is outside the known compiler family: its
    // children still surface, under no prefix, and nothing panics.
    let app = AppHandle::from_json(
        r#"{ "stack": [
            { "regexp": "^\\/tenant\\/(?:([^\\/]+?))\\/?(?=\\/|$)", "handle": { "stack": [
                { "route": { "path": "/users", "stack": [ { "method": "get" } ] } }
            ] } }
        ] }"#,
    )
    .unwrap();
    assert_eq!(records(&app), ["GET /users"]);
}

#[test]
fn alien_snapshot_fails_construction_not_extraction() {
    assert!(AppHandle::from_json("[1, 2, 3]").is_err());
    assert!(AppHandle::from_json("not json at all").is_err());
    // A handle that parsed but matches no shape extracts to nothing.
    let app = AppHandle::from_json(r#"{ "listen": 3000 }"#).unwrap();
    assert!(extract_routes(&app).is_empty());
    assert!(!is_router(&app));
}
