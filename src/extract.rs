//! The extraction pipeline: locate, flatten, collect, deduplicate.

use std::collections::HashSet;

use crate::handle::AppHandle;
use crate::path;
use crate::record::RouteRecord;
use crate::stack::{self, FlatFrame};

/// Reconstructs the flat endpoint list from `app`'s routing internals.
///
/// Runs the whole pipeline in one synchronous pass. Never fails outward:
/// an unrecognized handle or a malformed corner of the table degrades to
/// fewer (at worst zero) records, with the failing stage logged.
///
/// ```rust
/// use routelens::{AppHandle, RouteEntry, RouterHandle, extract_routes};
///
/// let app = AppHandle::from_router(
///     RouterHandle::new().route(RouteEntry::new("/users").method("get")),
/// );
/// assert_eq!(extract_routes(&app)[0].to_string(), "GET /users");
/// ```
pub fn extract_routes(app: &AppHandle) -> Vec<RouteRecord> {
    let frames = stack::stacks_from_handle(app);
    let mut records = Vec::new();
    for frame in &frames {
        // Handles describe whole applications; the outermost prefix is "".
        collect(frame, "", &mut records);
    }
    dedup(records)
}

/// True iff `app` exposes at least one route. Purely derived from
/// [`extract_routes`].
pub fn is_router(app: &AppHandle) -> bool {
    !extract_routes(app).is_empty()
}

/// Collection pass over one flattened entry.
///
/// Appends one record per distinct method registered on the entry's route
/// payload. The per-entry guard drops a method registered twice on the same
/// declaration; identical pairs arising from *different* declarations are
/// left for [`dedup`].
fn collect(frame: &FlatFrame, prefix: &str, out: &mut Vec<RouteRecord>) {
    let Some(route) = &frame.route else { return };
    let mut recorded: HashSet<String> = HashSet::new();
    for entry in &route.stack {
        if entry.method.is_empty() {
            continue;
        }
        let method = entry.method.to_ascii_uppercase();
        if !recorded.insert(method.clone()) {
            continue;
        }
        let full = path::normalize(&[prefix, &frame.router_path, &route.path, &entry.path]);
        out.push(RouteRecord { method, path: full });
    }
}

/// Drops every record whose `(method, path)` pair has been seen before,
/// preserving first occurrences in order.
fn dedup(records: Vec<RouteRecord>) -> Vec<RouteRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert((r.method.clone(), r.path.clone())))
        .collect()
}
