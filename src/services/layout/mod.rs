//! Weekly timetable layout service.
//! Turns a week's lessons, exams and meetings into a column-stable grid of
//! (day, hour) render slots, organized across focused submodules.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::models::event::{EventValidationError, ScheduleEvent};
use crate::models::grid::{DayGrid, WeekGrid};
use crate::models::settings::{HoursConfig, HoursConfigError};
use crate::utils::date::week_start_of;

pub mod buckets;
pub mod columns;
pub mod hours;
pub mod normalize;

pub use normalize::normalize_events;

/// Precondition violations surfaced before the layout engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error(transparent)]
    InvalidEvent(#[from] EventValidationError),
    #[error("duplicate event id '{0}' in one layout computation")]
    DuplicateId(String),
    #[error(transparent)]
    InvalidHours(#[from] HoursConfigError),
}

/// Gate a working set before handing it to `compute_week_grid`.
///
/// The engine itself is total; malformed events and duplicate ids are
/// data-quality issues rejected here, at the boundary.
pub fn validate_events(events: &[ScheduleEvent]) -> Result<(), ScheduleError> {
    let mut seen = HashSet::with_capacity(events.len());
    for event in events {
        event.validate()?;
        if !seen.insert(event.id.as_str()) {
            return Err(ScheduleError::DuplicateId(event.id.clone()));
        }
    }
    Ok(())
}

/// Lay out one week of events into a render-ready grid.
///
/// A pure function of its arguments: resolves the shared hour window once,
/// then walks each of the seven days from the Monday of `week_start`'s
/// week. `today` only marks the matching day for the renderer; it never
/// influences layout. Call `validate_events` first; this function assumes
/// a well-formed working set and cannot fail.
pub fn compute_week_grid(
    events: &[ScheduleEvent],
    week_start: NaiveDate,
    today: NaiveDate,
    config: &HoursConfig,
) -> WeekGrid {
    let week_start = week_start_of(week_start);
    let hour_marks = hours::resolve_hours(events, config);
    log::debug!(
        "laying out week of {}: {} events, hour rows {}..={}",
        week_start,
        events.len(),
        hour_marks.first().copied().unwrap_or(config.day_start_hour),
        hour_marks.last().copied().unwrap_or(config.day_end_hour),
    );

    let days = (0..7)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            DayGrid {
                date,
                is_today: date == today,
                rows: columns::layout_day(events, date, &hour_marks),
            }
        })
        .collect();

    WeekGrid {
        week_start,
        hours: hour_marks,
        days,
    }
}
