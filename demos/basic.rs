//! Minimal routelens example — discover an application's endpoints.
//!
//! Run with:
//!   RUST_LOG=warn cargo run --example basic
//!
//! Prints every (method, path) pair the application exposes: first from a
//! handle assembled in place, then from a JSON snapshot of the same kind of
//! routing table as capture tooling would dump it.

use routelens::{AppHandle, RouteEntry, RouterHandle, extract_routes, is_router};

fn main() {
    tracing_subscriber::fmt::init();

    // CRUD-style endpoints plus a sub-router mounted under /admin.
    let app = AppHandle::from_router(
        RouterHandle::new()
            .route(RouteEntry::new("/users").method("get").method("post"))
            .route(RouteEntry::new("/users/:id").method("get").method("delete"))
            .mount(
                "/admin",
                RouterHandle::new().route(RouteEntry::new("/stats").method("get")),
            ),
    );

    println!("routable: {}", is_router(&app));
    for route in extract_routes(&app) {
        println!("{route}");
    }

    // The same discovery over a captured snapshot. Unknown fields are
    // ignored; the embedded-router shape is probed automatically.
    let snapshot = r#"{
        "name": "payments-service",
        "_router": { "stack": [
            { "route": { "path": "/health", "stack": [ { "method": "get" } ] } },
            { "route": { "path": "/charges", "stack": [
                { "method": "get" }, { "method": "post" }
            ] } }
        ] }
    }"#;
    let captured = AppHandle::from_json(snapshot).expect("unreadable snapshot");
    for route in extract_routes(&captured) {
        println!("{route}");
    }
}
