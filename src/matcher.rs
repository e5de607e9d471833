//! Compiled mount-prefix matchers and the textual prefix extractor.
//!
//! When an application mounts a sub-router, the framework compiles the mount
//! prefix into an anchored matching pattern and stores only the compiled
//! form. Recovering the prefix means walking that road backwards: take the
//! pattern's source text, strip the decoration tokens the mount compiler
//! bolted on, and un-escape the separators. A textual substitution table,
//! not a pattern parser — it only understands the small family of patterns
//! the mount compilers actually emit, and anything else is reported as
//! malformed so the caller can degrade gracefully.

use serde::Deserialize;

use crate::error::Error;

/// Decoration tokens the mount compilers append, stripped in this order
/// after the leading `^` anchor, first occurrence only:
///
/// - `\/?(?=\/|$)` — optional slash + boundary assertion, older compiler
/// - `?(?=\/|$)` — the same assertion when optionality binds to a group
/// - `(?:\/(?=$))` — optional trailing-slash group, newer compiler
const DECORATIONS: [&str; 3] = [
    r"\/?(?=\/|$)",
    r"?(?=\/|$)",
    r"(?:\/(?=$))",
];

/// Characters that have no business in a plain mount prefix. Anything left
/// over after stripping means the pattern came from outside the known
/// compiler family.
const PATTERN_SYNTAX: [char; 6] = ['(', ')', '?', '*', '+', '$'];

/// A compiled mount-prefix pattern, held in its textual source form.
///
/// ```rust
/// use routelens::PathMatcher;
///
/// let matcher = PathMatcher::new(r"^\/admin\/?(?=\/|$)");
/// assert_eq!(matcher.prefix().unwrap(), "/admin");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct PathMatcher(String);

impl PathMatcher {
    /// Wraps a raw pattern source string.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Compiles `prefix` the way the frameworks' mount compiler does:
    /// anchor, escape the separators, assert the segment boundary.
    /// `"/api"` becomes `^\/api\/?(?=\/|$)`.
    pub fn for_prefix(prefix: &str) -> Self {
        let escaped = prefix.replace('/', r"\/");
        Self(format!(r"^{escaped}\/?(?=\/|$)"))
    }

    /// The textual source form.
    pub fn source(&self) -> &str {
        &self.0
    }

    /// Recovers the plain mount prefix this pattern was compiled from.
    ///
    /// A root mount extracts to `""`. Patterns outside the known compiler
    /// family (parameter captures, custom matchers) are `Malformed`; the
    /// pipeline folds that into an empty prefix rather than guessing.
    pub fn prefix(&self) -> Result<String, Error> {
        let mut text = self.0.strip_prefix('^').unwrap_or(&self.0).to_owned();
        for token in DECORATIONS {
            text = text.replacen(token, "", 1);
        }
        let text = text.replace(r"\/", "/");
        if text.contains(PATTERN_SYNTAX) {
            return Err(Error::Malformed {
                stage: "matcher",
                detail: format!("pattern `{}` is not a plain mount prefix", self.0),
            });
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::PathMatcher;

    #[test]
    fn strips_the_older_compiler_decorations() {
        let matcher = PathMatcher::new(r"^\/admin\/?(?=\/|$)");
        assert_eq!(matcher.prefix().unwrap(), "/admin");
    }

    #[test]
    fn strips_the_newer_compiler_decorations() {
        let matcher = PathMatcher::new(r"^\/api(?:\/(?=$))?(?=\/|$)");
        assert_eq!(matcher.prefix().unwrap(), "/api");
    }

    #[test]
    fn root_mount_extracts_to_the_empty_prefix() {
        let matcher = PathMatcher::new(r"^\/?(?=\/|$)");
        assert_eq!(matcher.prefix().unwrap(), "");
    }

    #[test]
    fn for_prefix_round_trips() {
        assert_eq!(PathMatcher::for_prefix("/admin").prefix().unwrap(), "/admin");
        assert_eq!(PathMatcher::for_prefix("/api/v1").prefix().unwrap(), "/api/v1");
    }

    #[test]
    fn rejects_patterns_outside_the_family() {
        let matcher = PathMatcher::new(r"^\/user\/(?:([^\/]+?))\/?(?=\/|$)");
        assert!(matcher.prefix().is_err());
    }
}
