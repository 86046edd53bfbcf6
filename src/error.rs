//! Boundary errors.
//!
//! The planning core is total over its input domain: ranking, scoring,
//! scheduling, and stats never fail. Errors exist only at the snapshot
//! deserialization boundary, where the backend's JSON may be malformed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to parse task snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
