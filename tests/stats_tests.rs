use chrono::{NaiveDate, TimeZone, Utc};
use taskdeck::models::{Priority, Task};
use taskdeck::stats::{filter_counts, task_stats};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
}

fn task(id: u64, priority: Priority, completed: bool, due: Option<(i32, u32, u32)>) -> Task {
    Task {
        id,
        title: format!("task {}", id),
        completed,
        priority,
        category: "Work".into(),
        due_date: due.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
        completed_at: None,
    }
}

#[test]
fn test_empty_collection_has_zero_rate() {
    let stats = task_stats(&[], today());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate, 0);
    assert_eq!(stats.pending, 0);
}

#[test]
fn test_counts_and_rounded_rate() {
    let tasks = vec![
        task(1, Priority::High, true, None),
        task(2, Priority::Medium, false, None),
        task(3, Priority::Low, false, None),
    ];
    let stats = task_stats(&tasks, today());

    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
    // 1/3 rounds down to 33
    assert_eq!(stats.completion_rate, 33);

    let tasks = vec![
        task(1, Priority::High, true, None),
        task(2, Priority::Medium, true, None),
        task(3, Priority::Low, false, None),
    ];
    // 2/3 rounds up to 67
    assert_eq!(task_stats(&tasks, today()).completion_rate, 67);
}

#[test]
fn test_overdue_counts_incomplete_past_due_only() {
    let tasks = vec![
        task(1, Priority::Medium, false, Some((2026, 8, 25))), // overdue
        task(2, Priority::Medium, true, Some((2026, 8, 25))),  // completed, not counted
        task(3, Priority::Medium, false, Some((2026, 8, 27))), // due today, not overdue
        task(4, Priority::Medium, false, None),
    ];
    let stats = task_stats(&tasks, today());
    assert_eq!(stats.overdue, 1);
}

#[test]
fn test_priority_breakdown_counts_incomplete_only() {
    let tasks = vec![
        task(1, Priority::High, false, None),
        task(2, Priority::High, true, None),
        task(3, Priority::Medium, false, None),
        task(4, Priority::Medium, false, None),
        task(5, Priority::Low, true, None),
    ];
    let stats = task_stats(&tasks, today());
    assert_eq!(stats.priority_breakdown.high, 1);
    assert_eq!(stats.priority_breakdown.medium, 2);
    assert_eq!(stats.priority_breakdown.low, 0);
}

#[test]
fn test_filter_counts_per_status_tab() {
    let tasks = vec![
        task(1, Priority::Medium, false, Some((2026, 8, 25))), // pending, overdue
        task(2, Priority::Medium, false, Some((2026, 8, 27))), // pending, today
        task(3, Priority::Medium, true, Some((2026, 8, 27))),  // completed, today
        task(4, Priority::Medium, false, None),                // pending
    ];
    let counts = filter_counts(&tasks, today());

    assert_eq!(counts.all, 4);
    assert_eq!(counts.pending, 3);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.overdue, 1);
    // "today" counts by date alone, completion does not matter
    assert_eq!(counts.today, 2);
}
