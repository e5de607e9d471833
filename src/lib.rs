//! # routelens
//!
//! Route introspection for web-application router snapshots.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your application serves traffic; routelens reads the map. Given a handle
//! onto an application's routing internals — assembled in place or re-typed
//! from a captured JSON snapshot — it reconstructs the flat list of
//! `(method, path)` pairs the application actually exposes, so documentation
//! generators and monitoring agents never depend on a hand-maintained route
//! manifest.
//!
//! The internals routelens reads are version-dependent and recursively
//! nested. It compensates:
//!
//! - **Four historical shapes** — the legacy method map, the router embedded
//!   under a private field, bare sub-routers, and the public router field of
//!   the newest line, probed in fixed priority order
//! - **Nested mounts** — sub-routers flatten depth-first, every endpoint
//!   inheriting the prefixes of the mounts above it
//! - **Matcher artifacts** — compiled mount patterns strip back to plain
//!   prefixes; paths come out normalized and deduplicated
//!
//! One synchronous pass, no I/O, no state kept between calls. Extraction
//! never fails outward: a malformed corner of the table degrades to fewer
//! routes, logged stage-by-stage via [`tracing`], and the worst case is an
//! empty list.
//!
//! ## Quick start
//!
//! ```rust
//! use routelens::{AppHandle, RouteEntry, RouterHandle, extract_routes};
//!
//! let app = AppHandle::from_router(
//!     RouterHandle::new()
//!         .route(RouteEntry::new("/users").method("get").method("post"))
//!         .mount("/admin", RouterHandle::new()
//!             .route(RouteEntry::new("/stats").method("get"))),
//! );
//!
//! let routes = extract_routes(&app);
//! assert_eq!(routes.len(), 3);
//! assert_eq!(routes[2].to_string(), "GET /admin/stats");
//! ```
//!
//! Snapshots captured from a running process load the same way:
//!
//! ```rust
//! use routelens::{AppHandle, extract_routes};
//!
//! let app = AppHandle::from_json(r#"{
//!     "router": { "stack": [
//!         { "route": { "path": "/health", "stack": [ { "method": "get" } ] } }
//!     ] }
//! }"#).unwrap();
//!
//! assert_eq!(extract_routes(&app)[0].to_string(), "GET /health");
//! ```

mod error;
mod extract;
mod frame;
mod handle;
mod matcher;
mod path;
mod record;
mod stack;

pub use error::Error;
pub use extract::{extract_routes, is_router};
pub use frame::{MethodEntry, RouteEntry, StackFrame, SubRouter};
pub use handle::{AppHandle, LegacyRoute, RouterHandle};
pub use matcher::PathMatcher;
pub use record::RouteRecord;
