// Date utility functions

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Monday of the week containing the given date.
///
/// School timetables run Monday through Sunday; this is the single place
/// encoding that convention.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Minutes between the given date's midnight and the timestamp.
///
/// Exceeds 1439 when the timestamp falls on a later day, which keeps
/// end-of-day arithmetic monotonic for events ending at the next midnight.
pub fn minutes_since(date: NaiveDate, at: NaiveDateTime) -> i64 {
    (at - date.and_time(NaiveTime::MIN)).num_minutes()
}
