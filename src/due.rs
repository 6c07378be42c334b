use chrono::{Local, NaiveDate};

/// Coarse classification of a task's due date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueKind {
    Overdue,
    Today,
    Tomorrow,
    /// Due within the next 2..=7 days.
    Week,
    /// Due beyond a week out.
    Future,
}

/// A classified due date with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueStatus {
    pub kind: DueKind,
    /// Display text, e.g. "Due today" or "3 days overdue".
    pub text: String,
    /// True for overdue and same-day deadlines.
    pub urgent: bool,
}

/// Classifies a due date against the local calendar date.
///
/// Returns `None` when the task has no due date or is already completed.
pub fn due_status(due: Option<NaiveDate>, completed: bool) -> Option<DueStatus> {
    due_status_on(due, completed, Local::now().date_naive())
}

/// Classifies a due date against an explicit `today`.
pub fn due_status_on(
    due: Option<NaiveDate>,
    completed: bool,
    today: NaiveDate,
) -> Option<DueStatus> {
    let due = due?;
    if completed {
        return None;
    }

    if due == today {
        return Some(DueStatus {
            kind: DueKind::Today,
            text: "Due today".to_string(),
            urgent: true,
        });
    }

    let days = (due - today).num_days();
    if days < 0 {
        let n = days.abs();
        return Some(DueStatus {
            kind: DueKind::Overdue,
            text: format!("{} day{} overdue", n, if n > 1 { "s" } else { "" }),
            urgent: true,
        });
    }
    if days == 1 {
        return Some(DueStatus {
            kind: DueKind::Tomorrow,
            text: "Due tomorrow".to_string(),
            urgent: false,
        });
    }
    if days <= 7 {
        return Some(DueStatus {
            kind: DueKind::Week,
            text: format!("Due in {} days", days),
            urgent: false,
        });
    }
    Some(DueStatus {
        kind: DueKind::Future,
        text: relative_label(due, today),
        urgent: false,
    })
}

/// Formats a date relative to `today`: "Today", "Tomorrow", "Yesterday",
/// the weekday name within a week, otherwise "Mon D, YYYY".
pub fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    let days = (date - today).num_days();
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ if days.abs() < 7 => date.format("%A").to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
