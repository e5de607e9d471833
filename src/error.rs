//! Unified error type.

use std::fmt;

/// The error type returned by routelens's fallible operations.
///
/// Only snapshot construction surfaces errors to callers. The extraction
/// pipeline itself never fails outward: each stage folds its own failures
/// into empty values and emits a stage-tagged diagnostic instead, so a
/// malformed corner of a routing table costs routes, not the whole call.
#[derive(Debug)]
pub enum Error {
    /// A captured snapshot could not be re-typed.
    Snapshot(serde_json::Error),
    /// A routing structure fell outside the recognized shapes.
    Malformed {
        /// Pipeline stage that gave up (e.g. `"matcher"`).
        stage: &'static str,
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot(e) => write!(f, "snapshot: {e}"),
            Self::Malformed { stage, detail } => write!(f, "{stage}: {detail}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Snapshot(e) => Some(e),
            Self::Malformed { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Snapshot(e)
    }
}
