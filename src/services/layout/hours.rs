use crate::models::event::ScheduleEvent;
use crate::models::settings::HoursConfig;
use crate::utils::date::minutes_since;

/// Resolve the inclusive hour rows to render for a week.
///
/// The window always covers the configured business hours and is widened
/// to admit any event starting earlier or ending later. Bounds are computed
/// in integer minutes: the lower bound floors to the hour, the upper bound
/// ceils to the next whole hour (a 18:00–19:00 meeting extends a 07–17
/// window through 19). With no events the default window comes back as is.
pub fn resolve_hours(events: &[ScheduleEvent], config: &HoursConfig) -> Vec<u32> {
    let mut lower = (config.day_start_hour * 60) as i64;
    let mut upper = (config.day_end_hour * 60) as i64;

    for event in events {
        let start = minutes_since(event.date(), event.start);
        lower = lower.min(start);
        // Point events bound the window by their start.
        let last = match event.end {
            Some(end) => minutes_since(event.date(), end),
            None => start,
        };
        upper = upper.max(last);
    }

    let first = (lower / 60) as u32;
    let last = ((upper + 59) / 60) as u32;
    (first..=last).collect()
}
