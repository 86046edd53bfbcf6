use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Task lifecycle status as emitted by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// A task snapshot from the backend's JSON representation.
///
/// Tasks are created, mutated, and destroyed entirely by the CRUD layer;
/// this crate only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// ISO-8601 or null. A string that fails to parse degrades to `None`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    /// Minutes.
    #[serde(default = "default_duration")]
    pub estimated_duration: u32,
    /// 1 (lowest) to 5 (highest). Out-of-range values are tolerated and
    /// rendered as "Unknown" rather than rejected.
    #[serde(default = "default_priority")]
    pub priority: i32,
    pub status: TaskStatus,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub category_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn default_duration() -> u32 {
    60
}

fn default_priority() -> i32 {
    3
}

/// A task category (Work, Personal, ...) with its badge color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_category_color")]
    pub color: String,
}

fn default_category_color() -> String {
    "#007bff".to_string()
}

/// Coarse severity of due-date proximity, driving display styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    None,
    Info,
    Warning,
    Danger,
}

impl UrgencyTier {
    /// Text color class applied to the due-date label.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Info => "text-info",
            Self::Warning => "text-warning",
            Self::Danger => "text-danger",
        }
    }
}

/// A task annotated for sidebar display. Ephemeral: rebuilt on every render.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTask {
    #[serde(flatten)]
    pub task: Task,
    pub urgency_label: String,
    pub urgency_tier: UrgencyTier,
}

/// Workday shape used by schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdayConfig {
    #[serde(default = "default_work_start")]
    pub work_start_hour: u8,
    #[serde(default = "default_work_end")]
    pub work_end_hour: u8,
    #[serde(default = "default_lunch_start")]
    pub lunch_start_hour: u8,
    #[serde(default = "default_lunch_end")]
    pub lunch_end_hour: u8,
    /// Minutes kept free between consecutive blocks.
    #[serde(default = "default_buffer")]
    pub buffer_minutes: u32,
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            work_start_hour: default_work_start(),
            work_end_hour: default_work_end(),
            lunch_start_hour: default_lunch_start(),
            lunch_end_hour: default_lunch_end(),
            buffer_minutes: default_buffer(),
        }
    }
}

fn default_work_start() -> u8 {
    9
}

fn default_work_end() -> u8 {
    17
}

fn default_lunch_start() -> u8 {
    12
}

fn default_lunch_end() -> u8 {
    13
}

fn default_buffer() -> u32 {
    15
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_datetime_lenient))
}

/// Parse the timestamp formats the backend has emitted over time.
///
/// Returns `None` rather than an error so malformed upstream data degrades
/// to "no deadline" instead of breaking the page.
pub fn parse_datetime_lenient(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    log::warn!("unparseable timestamp {:?}; treating as absent", value);
    None
}
