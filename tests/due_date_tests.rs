use chrono::NaiveDate;
use taskdeck::due::{due_status_on, relative_label, DueKind};

fn today() -> NaiveDate {
    // A Thursday
    NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_no_date_or_completed_has_no_status() {
    assert!(due_status_on(None, false, today()).is_none());
    assert!(due_status_on(Some(today()), true, today()).is_none());
}

#[test]
fn test_due_today_is_urgent() {
    let status = due_status_on(Some(today()), false, today()).unwrap();
    assert_eq!(status.kind, DueKind::Today);
    assert_eq!(status.text, "Due today");
    assert!(status.urgent);
}

#[test]
fn test_overdue_is_urgent_with_day_count() {
    let status = due_status_on(Some(date(2026, 8, 26)), false, today()).unwrap();
    assert_eq!(status.kind, DueKind::Overdue);
    assert_eq!(status.text, "1 day overdue");
    assert!(status.urgent);

    let status = due_status_on(Some(date(2026, 8, 24)), false, today()).unwrap();
    assert_eq!(status.text, "3 days overdue");
}

#[test]
fn test_due_tomorrow() {
    let status = due_status_on(Some(date(2026, 8, 28)), false, today()).unwrap();
    assert_eq!(status.kind, DueKind::Tomorrow);
    assert_eq!(status.text, "Due tomorrow");
    assert!(!status.urgent);
}

#[test]
fn test_due_within_week() {
    let status = due_status_on(Some(date(2026, 8, 29)), false, today()).unwrap();
    assert_eq!(status.kind, DueKind::Week);
    assert_eq!(status.text, "Due in 2 days");

    let status = due_status_on(Some(date(2026, 9, 3)), false, today()).unwrap();
    assert_eq!(status.kind, DueKind::Week);
    assert_eq!(status.text, "Due in 7 days");
}

#[test]
fn test_due_beyond_week_uses_absolute_label() {
    let status = due_status_on(Some(date(2026, 9, 6)), false, today()).unwrap();
    assert_eq!(status.kind, DueKind::Future);
    assert_eq!(status.text, "Sep 6, 2026");
    assert!(!status.urgent);
}

#[test]
fn test_relative_label_adjacent_days() {
    assert_eq!(relative_label(today(), today()), "Today");
    assert_eq!(relative_label(date(2026, 8, 28), today()), "Tomorrow");
    assert_eq!(relative_label(date(2026, 8, 26), today()), "Yesterday");
}

#[test]
fn test_relative_label_weekday_within_week() {
    // 2026-08-30 is the Sunday three days out
    assert_eq!(relative_label(date(2026, 8, 30), today()), "Sunday");
    assert_eq!(relative_label(date(2026, 8, 24), today()), "Monday");
}

#[test]
fn test_relative_label_absolute_beyond_week() {
    assert_eq!(relative_label(date(2026, 9, 26), today()), "Sep 26, 2026");
    assert_eq!(relative_label(date(2027, 1, 5), today()), "Jan 5, 2027");
}
