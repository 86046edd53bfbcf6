//! Productivity statistics over task snapshots.
//!
//! The dashboard recomputes these on every refresh from the full task list;
//! nothing here caches or stores.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::ranking::priority_label;
use crate::types::{Category, Task, TaskStatus};
use crate::util::round1;

/// Six productive hours per day, in minutes.
const PRODUCTIVE_MINUTES_PER_DAY: f64 = 6.0 * 60.0;

const OVERDUE_PENALTY_PER_TASK: f64 = 5.0;
const OVERDUE_PENALTY_CAP: f64 = 30.0;
const WEEKLY_BONUS_PER_TASK: f64 = 2.0;
const WEEKLY_BONUS_CAP: f64 = 20.0;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub pending_tasks: u32,
    pub in_progress_tasks: u32,
    pub overdue_tasks: u32,
    pub due_today: u32,
    /// Percent, one decimal.
    pub completion_rate: f64,
    /// Mean estimated duration in minutes, rounded.
    pub avg_duration: f64,
    pub completed_this_week: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryStat {
    pub name: String,
    pub color: String,
    pub task_count: u32,
    /// Minutes.
    pub total_duration: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub completed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriorityBucket {
    pub priority: i32,
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionEstimate {
    pub total_tasks: u32,
    pub total_duration_minutes: u32,
    pub total_duration_hours: f64,
    pub estimated_days: f64,
}

/// Aggregate counters for the dashboard stat cards.
pub fn task_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let total = tasks.len() as u32;
    let completed = count_status(tasks, TaskStatus::Done);
    let pending = count_status(tasks, TaskStatus::Todo);
    let in_progress = count_status(tasks, TaskStatus::InProgress);

    let overdue = tasks
        .iter()
        .filter(|t| !t.status.is_terminal())
        .filter(|t| t.due_date.is_some_and(|due| due < now))
        .count() as u32;

    let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let day_end = day_start + Duration::days(1);
    let due_today = tasks
        .iter()
        .filter(|t| !t.status.is_terminal())
        .filter(|t| {
            t.due_date
                .is_some_and(|due| due >= day_start && due < day_end)
        })
        .count() as u32;

    let completion_rate = if total > 0 {
        round1(f64::from(completed) / f64::from(total) * 100.0)
    } else {
        0.0
    };

    let avg_duration = if total > 0 {
        let total_minutes: u64 = tasks.iter().map(|t| u64::from(t.estimated_duration)).sum();
        (total_minutes as f64 / f64::from(total)).round()
    } else {
        0.0
    };

    let week_start = start_of_week(now);
    let completed_this_week = tasks
        .iter()
        .filter(|t| t.status.is_terminal())
        .filter(|t| t.completed_at.is_some_and(|done| done >= week_start))
        .count() as u32;

    TaskStats {
        total_tasks: total,
        completed_tasks: completed,
        pending_tasks: pending,
        in_progress_tasks: in_progress,
        overdue_tasks: overdue,
        due_today,
        completion_rate,
        avg_duration,
        completed_this_week,
    }
}

/// Task distribution by category. Categories with no tasks still appear;
/// tasks without a category collect under an "Uncategorized" bucket.
pub fn category_stats(tasks: &[Task], categories: &[Category]) -> Vec<CategoryStat> {
    let mut result: Vec<CategoryStat> = categories
        .iter()
        .map(|cat| {
            let members: Vec<&Task> = tasks
                .iter()
                .filter(|t| t.category_id == Some(cat.id))
                .collect();
            CategoryStat {
                name: cat.name.clone(),
                color: cat.color.clone(),
                task_count: members.len() as u32,
                total_duration: members.iter().map(|t| t.estimated_duration).sum(),
            }
        })
        .collect();

    let uncategorized: Vec<&Task> = tasks.iter().filter(|t| t.category_id.is_none()).collect();
    if !uncategorized.is_empty() {
        result.push(CategoryStat {
            name: "Uncategorized".to_string(),
            color: "#6c757d".to_string(),
            task_count: uncategorized.len() as u32,
            total_duration: uncategorized.iter().map(|t| t.estimated_duration).sum(),
        });
    }

    result
}

/// Daily completion counts over the trailing window, zero-filled.
pub fn productivity_trend(tasks: &[Task], days: u32, now: DateTime<Utc>) -> Vec<TrendPoint> {
    let start = now - Duration::days(i64::from(days));

    let mut completions: HashMap<NaiveDate, u32> = HashMap::new();
    for task in tasks.iter().filter(|t| t.status.is_terminal()) {
        if let Some(done) = task.completed_at {
            if done >= start && done <= now {
                *completions.entry(done.date_naive()).or_insert(0) += 1;
            }
        }
    }

    let mut trend = Vec::new();
    let mut date = start.date_naive();
    while date <= now.date_naive() {
        trend.push(TrendPoint {
            date,
            completed: completions.get(&date).copied().unwrap_or(0),
        });
        date += Duration::days(1);
    }

    trend
}

/// Overall productivity score, 0-100.
///
/// Completion rate carries most of the weight; overdue tasks subtract up to
/// 30 points and completions this week add back up to 20.
pub fn productivity_score(stats: &TaskStats) -> f64 {
    let completion_component = stats.completion_rate * 0.4;
    let overdue_penalty =
        (f64::from(stats.overdue_tasks) * OVERDUE_PENALTY_PER_TASK).min(OVERDUE_PENALTY_CAP);
    let weekly_bonus =
        (f64::from(stats.completed_this_week) * WEEKLY_BONUS_PER_TASK).min(WEEKLY_BONUS_CAP);

    let score = completion_component - overdue_penalty + weekly_bonus;
    round1(score.clamp(0.0, 100.0))
}

/// Task counts per priority value, ascending, with display labels.
pub fn priority_distribution(tasks: &[Task]) -> Vec<PriorityBucket> {
    let mut counts: std::collections::BTreeMap<i32, u32> = std::collections::BTreeMap::new();
    for task in tasks {
        *counts.entry(task.priority).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(priority, count)| PriorityBucket {
            priority,
            label: priority_label(priority),
            count,
        })
        .collect()
}

/// Estimate wall-clock days to clear the todo backlog at six productive
/// hours per day.
pub fn estimate_completion(tasks: &[Task]) -> CompletionEstimate {
    let todo: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Todo)
        .collect();

    let total_minutes: u32 = todo.iter().map(|t| t.estimated_duration).sum();

    CompletionEstimate {
        total_tasks: todo.len() as u32,
        total_duration_minutes: total_minutes,
        total_duration_hours: round1(f64::from(total_minutes) / 60.0),
        estimated_days: round1(f64::from(total_minutes) / PRODUCTIVE_MINUTES_PER_DAY),
    }
}

fn count_status(tasks: &[Task], status: TaskStatus) -> u32 {
    tasks.iter().filter(|t| t.status == status).count() as u32
}

fn start_of_week(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    monday.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn task(id: i64, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            due_date: None,
            estimated_duration: 60,
            priority: 3,
            status,
            category_id: None,
            category_name: None,
            category_color: None,
            completed_at: None,
        }
    }

    fn now() -> DateTime<Utc> {
        // A Wednesday.
        Utc.with_ymd_and_hms(2024, 3, 13, 15, 0, 0).unwrap()
    }

    #[test]
    fn counts_by_status() {
        let tasks = vec![
            task(1, TaskStatus::Todo),
            task(2, TaskStatus::Todo),
            task(3, TaskStatus::InProgress),
            task(4, TaskStatus::Done),
        ];

        let stats = task_stats(&tasks, now());
        assert_eq!(stats.total_tasks, 4);
        assert_eq!(stats.pending_tasks, 2);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.completed_tasks, 1);
        assert_eq!(stats.completion_rate, 25.0);
        assert_eq!(stats.avg_duration, 60.0);
    }

    #[test]
    fn overdue_excludes_done_tasks() {
        let mut overdue = task(1, TaskStatus::Todo);
        overdue.due_date = Some(now() - Duration::days(2));
        let mut done_late = task(2, TaskStatus::Done);
        done_late.due_date = Some(now() - Duration::days(2));

        let stats = task_stats(&[overdue, done_late], now());
        assert_eq!(stats.overdue_tasks, 1);
    }

    #[test]
    fn due_today_uses_calendar_day_bounds() {
        let mut this_morning = task(1, TaskStatus::Todo);
        this_morning.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 13, 8, 0, 0).unwrap());
        let mut tomorrow = task(2, TaskStatus::Todo);
        tomorrow.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 14, 8, 0, 0).unwrap());

        let stats = task_stats(&[this_morning, tomorrow], now());
        assert_eq!(stats.due_today, 1);
    }

    #[test]
    fn completed_this_week_starts_monday() {
        let mut in_week = task(1, TaskStatus::Done);
        in_week.completed_at = Some(Utc.with_ymd_and_hms(2024, 3, 11, 10, 0, 0).unwrap());
        let mut last_week = task(2, TaskStatus::Done);
        last_week.completed_at = Some(Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap());

        let stats = task_stats(&[in_week, last_week], now());
        assert_eq!(stats.completed_this_week, 1);
    }

    #[test]
    fn empty_snapshot_is_all_zeros() {
        let stats = task_stats(&[], now());
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.avg_duration, 0.0);
    }

    #[test]
    fn category_stats_keep_empty_categories_and_bucket_uncategorized() {
        let categories = vec![
            Category {
                id: 1,
                name: "Work".to_string(),
                color: "#007bff".to_string(),
            },
            Category {
                id: 2,
                name: "Health".to_string(),
                color: "#dc3545".to_string(),
            },
        ];
        let mut categorized = task(1, TaskStatus::Todo);
        categorized.category_id = Some(1);
        let uncategorized = task(2, TaskStatus::Todo);

        let stats = category_stats(&[categorized, uncategorized], &categories);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].task_count, 1);
        assert_eq!(stats[1].task_count, 0);
        assert_eq!(stats[2].name, "Uncategorized");
        assert_eq!(stats[2].color, "#6c757d");
    }

    #[test]
    fn trend_zero_fills_missing_days() {
        let mut done = task(1, TaskStatus::Done);
        done.completed_at = Some(now() - Duration::days(2));

        let trend = productivity_trend(&[done], 7, now());
        assert_eq!(trend.len(), 8);
        assert_eq!(trend.iter().map(|p| p.completed).sum::<u32>(), 1);
        assert!(trend.iter().any(|p| p.completed == 1));
    }

    #[test]
    fn productivity_score_caps_penalty_and_bonus() {
        let stats = TaskStats {
            completion_rate: 100.0,
            overdue_tasks: 20,
            completed_this_week: 50,
            ..TaskStats::default()
        };
        // 40 - 30 + 20
        assert_eq!(productivity_score(&stats), 30.0);
    }

    #[test]
    fn productivity_score_clamps_to_zero() {
        let stats = TaskStats {
            completion_rate: 0.0,
            overdue_tasks: 10,
            completed_this_week: 0,
            ..TaskStats::default()
        };
        assert_eq!(productivity_score(&stats), 0.0);
    }

    #[test]
    fn priority_distribution_labels_unknown_values() {
        let mut odd = task(1, TaskStatus::Todo);
        odd.priority = 7;
        let normal = task(2, TaskStatus::Todo);

        let dist = priority_distribution(&[odd, normal]);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].priority, 3);
        assert_eq!(dist[0].label, "Medium");
        assert_eq!(dist[1].label, "Unknown");
    }

    #[test]
    fn completion_estimate_counts_todo_only() {
        let mut long = task(1, TaskStatus::Todo);
        long.estimated_duration = 300;
        let short = task(2, TaskStatus::Todo);
        let done = task(3, TaskStatus::Done);

        let estimate = estimate_completion(&[long, short, done]);
        assert_eq!(estimate.total_tasks, 2);
        assert_eq!(estimate.total_duration_minutes, 360);
        assert_eq!(estimate.total_duration_hours, 6.0);
        assert_eq!(estimate.estimated_days, 1.0);
    }
}
