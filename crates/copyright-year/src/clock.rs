use std::time::SystemTime;

use chrono::Datelike;

/// Returns the calendar year of the local system clock.
#[must_use]
pub fn current_year() -> i32 {
    let current_time = SystemTime::now();
    let datetime: chrono::DateTime<chrono::Local> = current_time.into();
    let year = datetime.year();
    tracing::debug!(year, "read current year from system clock");
    year
}
