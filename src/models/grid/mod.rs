//! Week grid model consumed by the rendering layer.
//!
//! The layout service produces these types; they carry no behavior beyond
//! lookup helpers used by renderers and tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One column cell of an hour row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderSlot {
    /// A gap: nothing rendered at this column for this hour.
    Empty,
    /// An event occupies this column for this hour.
    Occupied {
        event_id: String,
        /// True only in the hour row containing the event's start.
        is_span_start: bool,
        /// True only in the last hour row the event occupies.
        is_span_end: bool,
    },
}

impl RenderSlot {
    /// The occupying event's id, if any.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            RenderSlot::Empty => None,
            RenderSlot::Occupied { event_id, .. } => Some(event_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderSlot::Empty)
    }
}

/// One hour slice of one calendar day: an ordered list of column slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRow {
    pub hour: u32,
    pub slots: Vec<RenderSlot>,
}

impl HourRow {
    /// Column index of the given event in this row, if present.
    pub fn column_of(&self, event_id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.event_id() == Some(event_id))
    }

    /// Number of occupied slots in this row.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }
}

/// All hour rows of a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGrid {
    pub date: NaiveDate,
    /// Highlight hint for the renderer; never influences layout.
    pub is_today: bool,
    pub rows: Vec<HourRow>,
}

impl DayGrid {
    /// The row for the given hour, if it is inside the rendered window.
    pub fn row(&self, hour: u32) -> Option<&HourRow> {
        self.rows.iter().find(|row| row.hour == hour)
    }
}

/// The laid-out week: seven days sharing one resolved hour window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekGrid {
    pub week_start: NaiveDate,
    /// Ascending, inclusive hour marks shared by every day of the week.
    pub hours: Vec<u32>,
    /// Exactly seven entries, `week_start` first.
    pub days: Vec<DayGrid>,
}

impl WeekGrid {
    /// The grid for the given date, if it falls inside this week.
    pub fn day(&self, date: NaiveDate) -> Option<&DayGrid> {
        self.days.iter().find(|day| day.date == date)
    }
}
