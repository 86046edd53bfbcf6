use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::types::{RankedTask, Task, UrgencyTier};
use crate::util::format_month_day;

/// The sidebar shows at most this many pending tasks.
pub const SIDEBAR_LIMIT: usize = 10;

const PRIORITY_MIN: i32 = 1;
const PRIORITY_MAX: i32 = 5;
/// Beyond this many days out, a due date renders as a plain calendar date.
const NEAR_WINDOW_DAYS: i64 = 7;

const SECS_PER_DAY: i64 = 86_400;

/// Rank pending tasks for sidebar display.
///
/// Priority descending, then earlier due date first; at equal priority a
/// deadline outranks no deadline. The sort is stable, so full ties keep
/// their input order. The caller filters to non-terminal statuses; this
/// function ranks whatever it is handed and never fails on malformed
/// records.
pub fn rank(tasks: &[Task], now: DateTime<Utc>) -> Vec<RankedTask> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| compare_tasks(a, b));

    ordered
        .into_iter()
        .map(|task| annotate(task.clone(), now))
        .collect()
}

/// Truncate a ranked list for display.
///
/// Ranking always runs over the full input first; truncation is a separate
/// step so callers can report how many tasks fell past the limit.
pub fn take(mut ranked: Vec<RankedTask>, n: usize) -> Vec<RankedTask> {
    ranked.truncate(n);
    ranked
}

fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    effective_priority(b.priority)
        .cmp(&effective_priority(a.priority))
        .then_with(|| compare_due_date(a.due_date, b.due_date))
}

/// Out-of-domain priority values tie with each other below the lowest real
/// priority.
fn effective_priority(priority: i32) -> i32 {
    if (PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
        priority
    } else {
        0
    }
}

fn compare_due_date(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    // Earlier dates rank higher. Missing dates rank last.
    match (a, b) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn annotate(task: Task, now: DateTime<Utc>) -> RankedTask {
    let (urgency_label, urgency_tier) = classify_due_date(task.due_date, now);
    RankedTask {
        task,
        urgency_label,
        urgency_tier,
    }
}

/// Classify a due date relative to `now` into a display label and tier.
///
/// The day difference is the ceiling of the exact time difference, so a task
/// overdue by half a day still reads "Due today" while one overdue by a day
/// and a half reads "Overdue 1 day".
pub fn classify_due_date(
    due: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> (String, UrgencyTier) {
    let Some(due) = due else {
        return (String::new(), UrgencyTier::None);
    };

    let diff_days = days_until(due, now);
    if diff_days < 0 {
        let overdue = -diff_days;
        let label = format!(
            "Overdue {} day{}",
            overdue,
            if overdue == 1 { "" } else { "s" }
        );
        (label, UrgencyTier::Danger)
    } else if diff_days == 0 {
        ("Due today".to_string(), UrgencyTier::Warning)
    } else if diff_days == 1 {
        ("Due tomorrow".to_string(), UrgencyTier::Warning)
    } else if diff_days <= NEAR_WINDOW_DAYS {
        (format!("Due in {} days", diff_days), UrgencyTier::Info)
    } else {
        (format_month_day(due.date_naive()), UrgencyTier::None)
    }
}

/// Whole days from `now` to `due`, rounding partial days up toward the
/// future.
fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = due.signed_duration_since(now).num_seconds();
    secs.div_euclid(SECS_PER_DAY) + i64::from(secs.rem_euclid(SECS_PER_DAY) > 0)
}

/// Fixed five-star display flags: the first `priority` stars are filled.
///
/// Out-of-range values clamp silently — this is a display affordance, not a
/// validated write path.
pub fn priority_stars(priority: i32) -> [bool; 5] {
    let filled = priority.clamp(0, 5);
    let mut stars = [false; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = (i as i32) < filled;
    }
    stars
}

pub fn priority_label(priority: i32) -> &'static str {
    match priority {
        1 => "Very Low",
        2 => "Low",
        3 => "Medium",
        4 => "High",
        5 => "Very High",
        _ => "Unknown",
    }
}

/// Badge variant for a priority value.
pub fn priority_badge_class(priority: i32) -> &'static str {
    match priority {
        1 => "secondary",
        2 => "info",
        3 => "primary",
        4 => "warning",
        5 => "danger",
        _ => "secondary",
    }
}
