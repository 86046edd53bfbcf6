//! Planning core for Smart Task Manager.
//!
//! Pure, synchronous transformations over in-memory task snapshots: pending-task
//! ranking, due-date urgency classification, daily schedule generation, and
//! productivity statistics. Fetching, storage, and rendering live elsewhere —
//! this crate consumes task records already deserialized from the backend API
//! plus a caller-supplied "now", and produces fresh output on every call.

pub mod dashboard;
mod error;
pub mod ranking;
pub mod schedule;
pub mod scoring;
pub mod snapshot;
pub mod stats;
pub mod types;
pub mod util;

pub use error::SnapshotError;
