use chrono::NaiveDate;

use crate::filter::{is_due_today, is_overdue};
use crate::models::{Priority, Task};

/// Count of incomplete tasks per priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregate numbers for the whole task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Incomplete tasks due strictly before today.
    pub overdue: usize,
    /// Rounded percentage of completed tasks; 0 for an empty collection.
    pub completion_rate: u32,
    pub priority_breakdown: PriorityBreakdown,
}

/// Per-status-tab counts shown on the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
    pub today: usize,
}

/// Computes aggregate stats from the full task collection.
pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks.iter().filter(|t| is_overdue(t, today)).count();

    let completion_rate = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    let count_pending = |p: Priority| {
        tasks
            .iter()
            .filter(|t| t.priority == p && !t.completed)
            .count()
    };

    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
        completion_rate,
        priority_breakdown: PriorityBreakdown {
            high: count_pending(Priority::High),
            medium: count_pending(Priority::Medium),
            low: count_pending(Priority::Low),
        },
    }
}

/// Computes the count badge for each status tab.
pub fn filter_counts(tasks: &[Task], today: NaiveDate) -> FilterCounts {
    FilterCounts {
        all: tasks.len(),
        pending: tasks.iter().filter(|t| !t.completed).count(),
        completed: tasks.iter().filter(|t| t.completed).count(),
        overdue: tasks.iter().filter(|t| is_overdue(t, today)).count(),
        today: tasks.iter().filter(|t| is_due_today(t, today)).count(),
    }
}
