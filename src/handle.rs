//! Application handles and the shape probe.
//!
//! The routing internals have worn four different shapes across the
//! framework family's major versions, and external capture tooling hands us
//! whichever one the running process had. All four are modelled here as
//! optional fields; [`AppHandle::shape`] probes them in fixed priority
//! order and the first one *present* wins — presence, not non-emptiness,
//! so an empty router is a matched shape with zero routes rather than a
//! fall-through to the next probe.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Error;
use crate::frame::{RouteEntry, StackFrame};
use crate::matcher::PathMatcher;

/// A captured application or sub-router handle.
///
/// Build one in place with the `from_*` constructors, or re-type a JSON
/// snapshot of a running application's routing internals with
/// [`from_json`](AppHandle::from_json). The handle is read-only input to
/// [`extract_routes`](crate::extract_routes); nothing here is mutated.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppHandle {
    /// Legacy flat map from method name to route definitions (oldest line).
    #[serde(default)]
    pub routes: Option<BTreeMap<String, Vec<LegacyRoute>>>,
    /// Router embedded under the historical private `_router` field.
    #[serde(default, rename = "_router")]
    pub embedded: Option<RouterHandle>,
    /// The handle itself is a bare sub-router.
    #[serde(default)]
    pub stack: Option<Vec<StackFrame>>,
    /// Public router field (newest line).
    #[serde(default)]
    pub router: Option<RouterHandle>,
}

impl AppHandle {
    /// Re-types a captured JSON snapshot of an application's routing
    /// internals.
    ///
    /// Deserialization is lenient the way capture output demands: absent
    /// fields default, unknown fields are ignored. A structurally alien
    /// document is a construction error — extraction itself never fails.
    pub fn from_json(snapshot: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(snapshot)?)
    }

    /// Handle in the legacy method-map shape.
    pub fn from_method_map(routes: BTreeMap<String, Vec<LegacyRoute>>) -> Self {
        Self { routes: Some(routes), ..Self::default() }
    }

    /// Handle with the router embedded under the private field.
    pub fn from_embedded_router(router: RouterHandle) -> Self {
        Self { embedded: Some(router), ..Self::default() }
    }

    /// Handle that is itself a bare sub-router.
    pub fn from_stack(stack: Vec<StackFrame>) -> Self {
        Self { stack: Some(stack), ..Self::default() }
    }

    /// Handle exposing the router through the public field.
    pub fn from_router(router: RouterHandle) -> Self {
        Self { router: Some(router), ..Self::default() }
    }

    /// Probes the four recognized shapes in priority order.
    pub(crate) fn shape(&self) -> Option<Shape<'_>> {
        if let Some(map) = &self.routes {
            return Some(Shape::MethodMap(map));
        }
        if let Some(router) = &self.embedded {
            return Some(Shape::Embedded(router));
        }
        if let Some(stack) = &self.stack {
            return Some(Shape::Bare(stack));
        }
        if let Some(router) = &self.router {
            return Some(Shape::Router(router));
        }
        None
    }
}

/// A recognized internal shape, borrowed out of a handle.
pub(crate) enum Shape<'a> {
    MethodMap(&'a BTreeMap<String, Vec<LegacyRoute>>),
    Embedded(&'a RouterHandle),
    Bare(&'a [StackFrame]),
    Router(&'a RouterHandle),
}

/// A router: an ordered stack of routing entries.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouterHandle {
    #[serde(default)]
    pub stack: Vec<StackFrame>,
}

impl RouterHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an endpoint declaration. Returns `self` for chaining.
    pub fn route(mut self, route: RouteEntry) -> Self {
        self.stack.push(StackFrame::endpoint(route));
        self
    }

    /// Mounts `child` under `prefix`, compiling the prefix the way the
    /// frameworks' own mount compiler does.
    pub fn mount(mut self, prefix: &str, child: RouterHandle) -> Self {
        self.stack
            .push(StackFrame::group(PathMatcher::for_prefix(prefix), child.stack));
        self
    }
}

/// One route definition from the legacy method map.
///
/// The definition's own `method` drives the record; the map key contributes
/// ordering only.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LegacyRoute {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
}

impl LegacyRoute {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{AppHandle, RouterHandle, Shape};

    #[test]
    fn probes_shapes_in_priority_order() {
        let app = AppHandle {
            routes: Some(BTreeMap::new()),
            router: Some(RouterHandle::new()),
            ..AppHandle::default()
        };
        assert!(matches!(app.shape(), Some(Shape::MethodMap(_))));

        let app = AppHandle {
            embedded: Some(RouterHandle::new()),
            stack: Some(Vec::new()),
            ..AppHandle::default()
        };
        assert!(matches!(app.shape(), Some(Shape::Embedded(_))));
    }

    #[test]
    fn a_bare_handle_has_no_shape() {
        assert!(AppHandle::default().shape().is_none());
    }
}
