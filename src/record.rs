//! The externally visible unit: one method + path pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One discovered endpoint.
///
/// `method` is the upper-cased verb exactly as the application registered
/// it; `path` is normalized — collapsed separators, no matcher artifacts,
/// no trailing slash. The pair is the record's identity: extraction never
/// yields the same `(method, path)` twice.
///
/// Serializes to plain JSON for downstream tooling:
///
/// ```rust
/// use routelens::RouteRecord;
///
/// let record = RouteRecord::new("GET", "/users");
/// assert_eq!(record.to_string(), "GET /users");
/// assert_eq!(
///     serde_json::to_string(&record).unwrap(),
///     r#"{"method":"GET","path":"/users"}"#,
/// );
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct RouteRecord {
    pub method: String,
    pub path: String,
}

impl RouteRecord {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into() }
    }
}

impl fmt::Display for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
