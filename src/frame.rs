//! Routing entries — the nodes of a captured router stack.
//!
//! A stack is an ordered list of frames, and a frame is one of three things:
//! an endpoint declaration (`route` present), a mounted sub-router (`handle`
//! with a nested stack plus a `matcher` for the mount prefix), or an
//! interceptor layer (neither) that flattening passes through and collection
//! ignores.

use serde::Deserialize;

use crate::matcher::PathMatcher;

/// One node in a router's internal stack.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StackFrame {
    /// Endpoint payload, when this frame declares a route.
    #[serde(default)]
    pub route: Option<RouteEntry>,
    /// Whatever the application hung on the stack at this position — a
    /// sub-router if it carries a nested stack, an interceptor otherwise.
    #[serde(default)]
    pub handle: Option<SubRouter>,
    /// Compiled mount-prefix pattern for a sub-router.
    #[serde(default, alias = "regexp")]
    pub matcher: Option<PathMatcher>,
}

impl StackFrame {
    /// Frame declaring one endpoint.
    pub fn endpoint(route: RouteEntry) -> Self {
        Self { route: Some(route), ..Self::default() }
    }

    /// Frame mounting `stack` under the prefix `matcher` encodes.
    pub fn group(matcher: PathMatcher, stack: Vec<StackFrame>) -> Self {
        Self {
            route: None,
            handle: Some(SubRouter { stack: Some(stack) }),
            matcher: Some(matcher),
        }
    }
}

/// The `handle` side of a frame. Only a nested stack makes it a sub-router;
/// a bare handle is an interceptor and contributes no routes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SubRouter {
    #[serde(default)]
    pub stack: Option<Vec<StackFrame>>,
}

/// One endpoint declaration: a path plus the handlers registered under it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteEntry {
    #[serde(default)]
    pub path: String,
    /// Registered handlers, in registration order.
    #[serde(default)]
    pub stack: Vec<MethodEntry>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), stack: Vec::new() }
    }

    /// Registers a handler for `method`. Returns `self` for chaining.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.stack.push(MethodEntry { method: method.into(), path: String::new() });
        self
    }
}

/// One registered handler under a route: its method, plus the sub-path some
/// versions attach to the handler itself. Empty strings stand in for fields
/// a capture did not carry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MethodEntry {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub path: String,
}
