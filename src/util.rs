//! Display formatting helpers shared by the sidebar and dashboard.

use chrono::NaiveDate;

/// Format minutes as "2h 5m", or "45m" under an hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Abbreviated month + day, e.g. "Mar 5".
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Abbreviated month + day + year, e.g. "Mar 5, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Completed tasks as a whole percent of total; 0 when there are none.
pub fn completion_percentage(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
