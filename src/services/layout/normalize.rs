use crate::models::event::{ExamSlot, LessonSlot, MeetingSlot, ScheduleEvent};

/// Collapse the three raw slot collections into one flat, tagged sequence.
///
/// Order is stable: lessons first, then exams, then meetings, each in input
/// order. No filtering; empty inputs yield an empty sequence.
pub fn normalize_events(
    lessons: &[LessonSlot],
    exams: &[ExamSlot],
    meetings: &[MeetingSlot],
) -> Vec<ScheduleEvent> {
    let mut events = Vec::with_capacity(lessons.len() + exams.len() + meetings.len());

    for lesson in lessons {
        events.push(ScheduleEvent::lesson(lesson.id.clone(), lesson.start));
    }
    for exam in exams {
        events.push(ScheduleEvent::exam(exam.id.clone(), exam.start, exam.end));
    }
    for meeting in meetings {
        events.push(ScheduleEvent::meeting(
            meeting.id.clone(),
            meeting.start,
            meeting.end,
        ));
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventKind;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_inputs_yield_empty_sequence() {
        assert!(normalize_events(&[], &[], &[]).is_empty());
    }

    #[test]
    fn test_order_is_lessons_exams_meetings() {
        let lessons = vec![LessonSlot {
            id: "l1".into(),
            start: at(9),
        }];
        let exams = vec![ExamSlot {
            id: "e1".into(),
            start: at(10),
            end: at(12),
        }];
        let meetings = vec![MeetingSlot {
            id: "m1".into(),
            start: at(13),
            end: at(14),
        }];

        let events = normalize_events(&lessons, &exams, &meetings);
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Lesson, EventKind::Exam, EventKind::Meeting]
        );
        assert_eq!(events[0].id, "l1");
        assert_eq!(events[0].end, None);
        assert_eq!(events[1].end, Some(at(12)));
    }

    #[test]
    fn test_input_order_preserved_within_kind() {
        let lessons = vec![
            LessonSlot {
                id: "b".into(),
                start: at(9),
            },
            LessonSlot {
                id: "a".into(),
                start: at(8),
            },
        ];
        let events = normalize_events(&lessons, &[], &[]);
        assert_eq!(events[0].id, "b");
        assert_eq!(events[1].id, "a");
    }
}
