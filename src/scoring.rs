//! Composite task scoring for schedule generation.
//!
//! Urgency and priority lift a task's score; long tasks carry a small
//! penalty so short high-value work packs earlier in the day.

use chrono::{DateTime, Utc};

use crate::types::Task;

const URGENCY_WEIGHT: f64 = 0.4;
const PRIORITY_WEIGHT: f64 = 0.5;
const DURATION_WEIGHT: f64 = 0.1;

/// Urgency points from due-date proximity, whole-day granularity.
pub fn urgency_score(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i32 {
    let Some(due) = due else {
        return 1;
    };

    let days = due.signed_duration_since(now).num_days();
    if days <= 0 {
        10
    } else if days == 1 {
        8
    } else if days <= 3 {
        6
    } else if days <= 7 {
        4
    } else {
        2
    }
}

/// Slight penalty for long tasks: over 4 hours costs 2, over 2 hours costs 1.
pub fn duration_penalty(minutes: u32) -> i32 {
    if minutes > 240 {
        2
    } else if minutes > 120 {
        1
    } else {
        0
    }
}

/// Weighted scheduling score. Higher schedules earlier.
pub fn task_score(task: &Task, now: DateTime<Utc>) -> f64 {
    let urgency = f64::from(urgency_score(task.due_date, now));
    let priority = f64::from(task.priority);
    let penalty = f64::from(duration_penalty(task.estimated_duration));

    urgency * URGENCY_WEIGHT + priority * PRIORITY_WEIGHT - penalty * DURATION_WEIGHT
}
