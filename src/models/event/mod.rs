// Event module
// Tagged schedule event model shared by the week layout pipeline

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::minutes_since;

/// A lesson as delivered by the data-fetch layer.
///
/// Lessons are point-in-time: they occupy exactly the hour row containing
/// their start and carry no end timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSlot {
    pub id: String,
    pub start: NaiveDateTime,
}

/// An exam as delivered by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSlot {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A meeting as delivered by the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSlot {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// The kind of a schedule event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Lesson,
    Exam,
    Meeting,
}

/// A uniform, tagged schedule event.
///
/// The three raw slot shapes are collapsed into this single variant-tagged
/// struct before the layout engine ever sees them. `end` is present for
/// exams and meetings and absent for lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub kind: EventKind,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl ScheduleEvent {
    /// Create a lesson event (point-in-time, no end).
    pub fn lesson(id: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            kind: EventKind::Lesson,
            start,
            end: None,
        }
    }

    /// Create an exam event.
    pub fn exam(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            kind: EventKind::Exam,
            start,
            end: Some(end),
        }
    }

    /// Create a meeting event.
    pub fn meeting(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            kind: EventKind::Meeting,
            start,
            end: Some(end),
        }
    }

    /// The calendar day this event belongs to.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// First hour row the event occupies (floor of its start hour).
    pub fn start_row(&self) -> u32 {
        self.start.hour()
    }

    /// Last hour row the event occupies.
    ///
    /// Policy: an event ending exactly on an hour mark (e.g. 14:00 sharp)
    /// does not occupy that hour's row; its last row is the one before.
    /// This reproduces the shipped behavior and is pending product
    /// confirmation, so keep it in this one place.
    pub fn end_row(&self) -> u32 {
        match self.end {
            None => self.start_row(),
            Some(end) => {
                let minutes = minutes_since(self.date(), end);
                let row = if minutes % 60 == 0 {
                    minutes / 60 - 1
                } else {
                    minutes / 60
                };
                row.max(0) as u32
            }
        }
    }

    /// Whether this event occupies the given (day, hour) cell.
    pub fn occupies_row(&self, date: NaiveDate, hour: u32) -> bool {
        self.date() == date && self.start_row() <= hour && hour <= self.end_row()
    }

    /// Whether the given hour row contains this event's start.
    pub fn is_start_row(&self, hour: u32) -> bool {
        hour == self.start_row()
    }

    /// Whether the given hour row is the last one this event occupies.
    /// Always true for lessons, which span a single row.
    pub fn is_end_row(&self, hour: u32) -> bool {
        hour == self.end_row()
    }

    /// Validate the event.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.trim().is_empty() {
            return Err(EventValidationError::EmptyId);
        }
        if let Some(end) = self.end {
            if end <= self.start {
                return Err(EventValidationError::EndNotAfterStart {
                    id: self.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Validation errors for a single schedule event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("event id cannot be empty")]
    EmptyId,
    #[error("event '{id}' must end after it starts")]
    EndNotAfterStart { id: String },
}
