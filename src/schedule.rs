//! Daily schedule generation.
//!
//! Pending tasks are ordered by scheduling score and packed greedily into the
//! workday: the lunch window stays free, a buffer separates consecutive
//! blocks, and tasks that no longer fit before the end of the workday are
//! skipped so shorter candidates further down still get a slot.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use crate::scoring::task_score;
use crate::types::{Task, TaskStatus, WorkdayConfig};

const UNCATEGORIZED_NAME: &str = "Uncategorized";
const UNCATEGORIZED_COLOR: &str = "#6c757d";

/// One time-blocked entry of a generated schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItem {
    pub task_id: i64,
    pub task_title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    /// Minutes.
    pub duration: u32,
    pub category_name: String,
    pub category_color: String,
}

/// Priority-weighted efficiency metrics for a generated schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEfficiency {
    /// Average scheduled priority normalized to a percentage.
    pub efficiency: f64,
    pub total_tasks: u32,
    /// Minutes.
    pub total_duration: u32,
    pub avg_priority: f64,
}

struct WorkdayBounds {
    start: NaiveDateTime,
    end: NaiveDateTime,
    lunch_start: NaiveDateTime,
    lunch_end: NaiveDateTime,
}

/// Generate a time-blocked schedule for one day.
///
/// Only `todo` tasks are considered. A degenerate config (start at or past
/// end, or an hour out of range) yields an empty schedule rather than an
/// error.
pub fn generate_daily_schedule(
    tasks: &[Task],
    date: NaiveDate,
    config: &WorkdayConfig,
    now: DateTime<Utc>,
) -> Vec<ScheduleItem> {
    let Some(bounds) = workday_bounds(date, config) else {
        return Vec::new();
    };

    let mut scored: Vec<(f64, &Task)> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Todo)
        .map(|t| (task_score(t, now), t))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let buffer = Duration::minutes(i64::from(config.buffer_minutes));
    let mut items = Vec::new();
    let mut cursor = bounds.start;

    for (_, task) in scored {
        let duration = Duration::minutes(i64::from(task.estimated_duration));
        let mut start = cursor;
        let mut end = start + duration;

        // A block that would spill into lunch moves to the afternoon. The
        // cursor is never inside the lunch window (it gets pushed past it
        // below), so only blocks starting before lunch need the shift.
        if start < bounds.lunch_start && end > bounds.lunch_start {
            start = bounds.lunch_end;
            end = start + duration;
        }

        if end <= bounds.end {
            items.push(make_item(task, start.time(), end.time()));

            cursor = end + buffer;
            if cursor >= bounds.lunch_start && cursor < bounds.lunch_end {
                cursor = bounds.lunch_end;
            }
        }

        if cursor >= bounds.end {
            break;
        }
    }

    items
}

fn workday_bounds(date: NaiveDate, config: &WorkdayConfig) -> Option<WorkdayBounds> {
    let at_hour = |hour: u8| -> Option<NaiveDateTime> {
        NaiveTime::from_hms_opt(u32::from(hour), 0, 0).map(|t| date.and_time(t))
    };

    let start = at_hour(config.work_start_hour)?;
    let end = at_hour(config.work_end_hour)?;
    let lunch_start = at_hour(config.lunch_start_hour)?;
    let lunch_end = at_hour(config.lunch_end_hour)?;

    if start >= end {
        log::warn!(
            "workday config has no usable hours ({}:00-{}:00); returning empty schedule",
            config.work_start_hour,
            config.work_end_hour
        );
        return None;
    }

    Some(WorkdayBounds {
        start,
        end,
        lunch_start,
        lunch_end,
    })
}

fn make_item(task: &Task, start_time: NaiveTime, end_time: NaiveTime) -> ScheduleItem {
    ScheduleItem {
        task_id: task.id,
        task_title: task.title.clone(),
        start_time,
        end_time,
        duration: task.estimated_duration,
        category_name: task
            .category_name
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED_NAME.to_string()),
        category_color: task
            .category_color
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED_COLOR.to_string()),
    }
}

/// Break a long task into suggested focus chunks.
pub fn suggest_chunks(minutes: u32) -> Vec<u32> {
    if minutes > 240 {
        vec![120, 120, minutes - 240]
    } else if minutes > 120 {
        vec![90, minutes - 90]
    } else {
        vec![minutes]
    }
}

/// Compute priority-weighted efficiency for a generated schedule.
///
/// Priorities come from the authoritative task slice, never from display
/// state. Scheduled items whose task is missing from the slice are ignored.
pub fn schedule_efficiency(items: &[ScheduleItem], tasks: &[Task]) -> ScheduleEfficiency {
    if items.is_empty() {
        return ScheduleEfficiency {
            efficiency: 0.0,
            total_tasks: 0,
            total_duration: 0,
            avg_priority: 0.0,
        };
    }

    let total_duration: u32 = items.iter().map(|i| i.duration).sum();
    let priorities: Vec<i32> = items
        .iter()
        .filter_map(|item| {
            tasks
                .iter()
                .find(|t| t.id == item.task_id)
                .map(|t| t.priority)
        })
        .collect();

    let avg_priority = if priorities.is_empty() {
        0.0
    } else {
        f64::from(priorities.iter().sum::<i32>()) / priorities.len() as f64
    };

    ScheduleEfficiency {
        efficiency: round2(avg_priority / 5.0 * 100.0),
        total_tasks: items.len() as u32,
        total_duration,
        avg_priority: round2(avg_priority),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
