//! Column-stable row layout for one day of the week view.
//!
//! Walks the resolved hours in ascending order and assigns every active
//! event a column that stays fixed for the whole span of the event, so a
//! two-hour exam renders as one continuous block instead of fragmenting
//! per hour. Per column the lifecycle is strictly
//! `Empty -> start -> mid-span -> end -> Empty`; a column never hosts two
//! different events without passing through `Empty`.

use chrono::NaiveDate;

use crate::models::event::ScheduleEvent;
use crate::models::grid::{HourRow, RenderSlot};

use super::buckets::{self, ActiveEvent};

/// Lay out all hour rows for a single calendar day.
///
/// Column rules, applied per hour row:
/// - retention: an event keeps the column it held in the previous row for
///   as long as it stays active; a column whose event ended is vacated;
/// - arrivals: an event not yet placed takes the lowest vacated column,
///   or opens a new trailing column when none is free;
/// - look-ahead: while some column is still mid-span, a row one narrower
///   than the next hour's need gets a single trailing gap so the next
///   row's columns do not shift under the continuing event;
/// - widths are never narrowed within a day, trailing gaps included.
pub fn layout_day(events: &[ScheduleEvent], date: NaiveDate, hours: &[u32]) -> Vec<HourRow> {
    let day_bucket = buckets::day_events(events, date);

    let mut rows = Vec::with_capacity(hours.len());
    let mut previous_columns: Vec<Option<&ScheduleEvent>> = Vec::new();

    for (index, &hour) in hours.iter().enumerate() {
        let active = buckets::active_at(&day_bucket, date, hour);

        // Retention: re-emit the previous row's columns, keeping events
        // that are still active and vacating those that ended.
        let mut columns: Vec<Option<ActiveEvent>> = previous_columns
            .iter()
            .map(|held| {
                held.and_then(|event| {
                    active
                        .iter()
                        .find(|candidate| candidate.event.id == event.id)
                        .copied()
                })
            })
            .collect();

        // Arrivals: recycle the lowest vacated column, else append.
        for candidate in &active {
            let placed = columns
                .iter()
                .flatten()
                .any(|held| held.event.id == candidate.event.id);
            if placed {
                continue;
            }
            match columns.iter_mut().find(|column| column.is_none()) {
                Some(vacant) => *vacant = Some(*candidate),
                None => columns.push(Some(*candidate)),
            }
        }

        // Look-ahead: keep this row as wide as the next one will need while
        // an unresolved span is crossing the boundary. One hour only.
        let unresolved = columns
            .iter()
            .flatten()
            .any(|held| held.is_start && !held.is_end);
        if unresolved {
            if let Some(&next_hour) = hours.get(index + 1) {
                let next_needed = buckets::active_at(&day_bucket, date, next_hour).len();
                if next_needed > columns.len() {
                    columns.push(None);
                }
            }
        }

        let slots = columns
            .iter()
            .map(|column| match column {
                Some(held) => RenderSlot::Occupied {
                    event_id: held.event.id.clone(),
                    is_span_start: held.is_start,
                    is_span_end: held.is_end,
                },
                None => RenderSlot::Empty,
            })
            .collect();
        rows.push(HourRow { hour, slots });

        previous_columns = columns
            .into_iter()
            .map(|column| column.map(|held| held.event))
            .collect();
    }

    rows
}
