use chrono::NaiveDate;

use crate::models::event::ScheduleEvent;

/// An event occupying one (day, hour) cell, with its span flags for that row.
#[derive(Debug, Clone, Copy)]
pub struct ActiveEvent<'a> {
    pub event: &'a ScheduleEvent,
    /// This row contains the event's start.
    pub is_start: bool,
    /// This row is the last the event occupies.
    pub is_end: bool,
}

/// Events belonging to the given calendar day, in sequence order.
pub fn day_events<'a>(events: &'a [ScheduleEvent], date: NaiveDate) -> Vec<&'a ScheduleEvent> {
    events.iter().filter(|event| event.date() == date).collect()
}

/// Events from a day bucket that occupy the given hour row, in sequence
/// order, each with its start/end flags for that row.
pub fn active_at<'a>(day_bucket: &[&'a ScheduleEvent], date: NaiveDate, hour: u32) -> Vec<ActiveEvent<'a>> {
    day_bucket
        .iter()
        .copied()
        .filter(|event| event.occupies_row(date, hour))
        .map(|event| ActiveEvent {
            event,
            is_start: event.is_start_row(hour),
            is_end: event.is_end_row(hour),
        })
        .collect()
}
