//! Locating and flattening router stacks.
//!
//! Two of the four pipeline stages live here: the locator, which pulls the
//! top-level stack out of whichever shape the handle presents, and the
//! flattener, which recursively expands mounted groups into one flat,
//! declaration-ordered sequence.

use tracing::warn;

use crate::frame::{MethodEntry, RouteEntry, StackFrame};
use crate::handle::{AppHandle, Shape};

/// A routing entry after flattening: the endpoint payload (if any) plus the
/// mount prefix accumulated from the groups above it.
#[derive(Clone, Debug)]
pub(crate) struct FlatFrame {
    pub router_path: String,
    pub route: Option<RouteEntry>,
}

/// Locates `app`'s routing entries and returns them flattened, in original
/// declaration order. An unrecognized handle yields an empty sequence;
/// this never fails.
pub(crate) fn stacks_from_handle(app: &AppHandle) -> Vec<FlatFrame> {
    match app.shape() {
        Some(Shape::MethodMap(map)) => map
            .values()
            .flatten()
            .map(|def| FlatFrame {
                router_path: String::new(),
                // One single-entry group per definition. The map's key order
                // drives method order; each list keeps declaration order.
                route: Some(RouteEntry {
                    path: String::new(),
                    stack: vec![MethodEntry {
                        method: def.method.clone(),
                        path: def.path.clone(),
                    }],
                }),
            })
            .collect(),
        Some(Shape::Embedded(router)) | Some(Shape::Router(router)) => flatten(&router.stack),
        Some(Shape::Bare(frames)) => flatten(frames),
        None => Vec::new(),
    }
}

/// Recursively expands mounted groups, depth-first and order-preserving.
///
/// Children replace their group at the group's position, annotated with the
/// prefix of every mount above them. A group whose matcher is missing or
/// unreadable still contributes its children — the prefix degrades to `""`
/// and the failure is logged, never raised.
pub(crate) fn flatten(frames: &[StackFrame]) -> Vec<FlatFrame> {
    let mut flat = Vec::new();
    flatten_into(frames, "", &mut flat);
    flat
}

fn flatten_into(frames: &[StackFrame], prefix: &str, out: &mut Vec<FlatFrame>) {
    for frame in frames {
        match frame.handle.as_ref().and_then(|h| h.stack.as_deref()) {
            Some(children) => {
                let mount = match &frame.matcher {
                    Some(matcher) => matcher.prefix().unwrap_or_else(|e| {
                        warn!(stage = "flatten", "{e}");
                        String::new()
                    }),
                    None => {
                        warn!(stage = "flatten", "mounted group without a matcher");
                        String::new()
                    }
                };
                // Segments own their separators, so composition is plain
                // concatenation; normalization collapses the seams later.
                let prefix = format!("{prefix}{mount}");
                flatten_into(children, &prefix, out);
            }
            None => out.push(FlatFrame {
                router_path: prefix.to_owned(),
                route: frame.route.clone(),
            }),
        }
    }
}
