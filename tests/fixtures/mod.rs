// Test fixtures - reusable test data
// Provides consistent dates and schedule events across test files

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};

use timetable_grid::models::event::{ExamSlot, LessonSlot, MeetingSlot, ScheduleEvent};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, March 10, 2025 - the reference week start
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// A timestamp on the given day of the reference week (0 = Monday)
    pub fn week_time(day_offset: u64, hour: u32, minute: u32) -> NaiveDateTime {
        (monday() + Duration::days(day_offset as i64))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// Sample schedule events for testing
pub mod events {
    use super::*;

    /// Monday 09:00 lesson
    pub fn monday_lesson() -> ScheduleEvent {
        ScheduleEvent::lesson("lesson-mon-9", dates::week_time(0, 9, 0))
    }

    /// Tuesday 10:00-12:30 exam (partial-hour end, occupies rows 10-12)
    pub fn tuesday_exam() -> ScheduleEvent {
        ScheduleEvent::exam(
            "exam-tue-10",
            dates::week_time(1, 10, 0),
            dates::week_time(1, 12, 30),
        )
    }

    /// Wednesday 18:00-19:00 staff meeting, outside default business hours
    pub fn evening_meeting() -> ScheduleEvent {
        ScheduleEvent::meeting(
            "meeting-wed-18",
            dates::week_time(2, 18, 0),
            dates::week_time(2, 19, 0),
        )
    }
}

/// Raw boundary slots for normalizer tests
pub mod slots {
    use super::*;

    pub fn lesson(id: &str, day_offset: u64, hour: u32) -> LessonSlot {
        LessonSlot {
            id: id.to_string(),
            start: dates::week_time(day_offset, hour, 0),
        }
    }

    pub fn exam(id: &str, day_offset: u64, start_hour: u32, end_hour: u32) -> ExamSlot {
        ExamSlot {
            id: id.to_string(),
            start: dates::week_time(day_offset, start_hour, 0),
            end: dates::week_time(day_offset, end_hour, 0),
        }
    }

    pub fn meeting(id: &str, day_offset: u64, start_hour: u32, end_hour: u32) -> MeetingSlot {
        MeetingSlot {
            id: id.to_string(),
            start: dates::week_time(day_offset, start_hour, 0),
            end: dates::week_time(day_offset, end_hour, 0),
        }
    }
}
