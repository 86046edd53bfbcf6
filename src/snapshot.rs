//! Deserialization boundary for backend snapshots.
//!
//! The `/api/tasks` and `/api/categories` payloads arrive as JSON arrays.
//! Structural problems (not an array, missing required fields) surface as
//! [`SnapshotError`]; a malformed due-date string inside an otherwise valid
//! record degrades to "no deadline" instead of failing the whole snapshot.

use crate::error::SnapshotError;
use crate::types::{Category, Task};

/// Parse the `/api/tasks` response body.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the `/api/categories` response body.
pub fn parse_categories(json: &str) -> Result<Vec<Category>, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
