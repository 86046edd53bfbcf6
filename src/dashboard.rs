//! Chart-ready dashboard data.
//!
//! The view layer once kept process-wide references to live chart widgets
//! and re-bound them on every data refresh. Here each chart's current data
//! lives in a [`ChartHandle`] owned by the [`DashboardModel`] that created
//! it; refreshes flow through `update` from the authoritative task snapshot,
//! never through module-level singletons or re-reads of rendered output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::stats::{self, CategoryStat, TaskStats};
use crate::types::{Category, Task};

/// Owns the current data for one chart.
#[derive(Debug, Clone, Default)]
pub struct ChartHandle<T> {
    data: T,
}

impl<T> ChartHandle<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Replace the chart's data wholesale; rendering reads the result.
    pub fn update(&mut self, data: T) {
        self.data = data;
    }
}

/// Series for the status doughnut: completed / in progress / pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressChartData {
    pub completed: u32,
    pub in_progress: u32,
    pub pending: u32,
}

impl ProgressChartData {
    pub fn from_stats(stats: &TaskStats) -> Self {
        Self {
            completed: stats.completed_tasks,
            in_progress: stats.in_progress_tasks,
            pending: stats.pending_tasks,
        }
    }
}

/// Parallel series for the category bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryChartData {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
    pub colors: Vec<String>,
}

impl CategoryChartData {
    pub fn from_stats(stats: &[CategoryStat]) -> Self {
        Self {
            labels: stats.iter().map(|s| s.name.clone()).collect(),
            counts: stats.iter().map(|s| s.task_count).collect(),
            colors: stats.iter().map(|s| s.color.clone()).collect(),
        }
    }
}

/// Dashboard state: the stat counters plus the chart handles they feed.
#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub stats: TaskStats,
    pub progress: ChartHandle<ProgressChartData>,
    pub categories: ChartHandle<CategoryChartData>,
}

impl DashboardModel {
    /// Recompute stats from the authoritative task snapshot and push the
    /// derived series into the chart handles.
    pub fn refresh(&mut self, tasks: &[Task], categories: &[Category], now: DateTime<Utc>) {
        self.stats = stats::task_stats(tasks, now);
        let category_stats = stats::category_stats(tasks, categories);

        self.progress.update(ProgressChartData::from_stats(&self.stats));
        self.categories
            .update(CategoryChartData::from_stats(&category_stats));
    }
}
