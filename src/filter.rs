use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::{Priority, Task};

/// Status tab applied to the task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
    Today,
}

impl StatusFilter {
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
            StatusFilter::Overdue => "overdue",
            StatusFilter::Today => "today",
        }
    }

    pub fn from_name(name: &str) -> Option<StatusFilter> {
        match name.to_lowercase().as_str() {
            "all" => Some(StatusFilter::All),
            "pending" => Some(StatusFilter::Pending),
            "completed" => Some(StatusFilter::Completed),
            "overdue" => Some(StatusFilter::Overdue),
            "today" => Some(StatusFilter::Today),
            _ => None,
        }
    }
}

/// Sort key for the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Priority,
    DueDate,
    Category,
    Created,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Priority => "priority",
            SortKey::DueDate => "due",
            SortKey::Category => "category",
            SortKey::Created => "created",
        }
    }

    pub fn from_name(name: &str) -> Option<SortKey> {
        match name.to_lowercase().as_str() {
            "priority" => Some(SortKey::Priority),
            "due" | "duedate" => Some(SortKey::DueDate),
            "category" => Some(SortKey::Category),
            "created" => Some(SortKey::Created),
            _ => None,
        }
    }
}

/// Filter criteria for the task list. All predicates are independent and
/// AND-combined; empty fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring match against title or category.
    pub search: String,
    /// Exact category name.
    pub category: Option<String>,
    pub status: StatusFilter,
    /// Priority inclusion list; empty means any priority.
    pub priority: Vec<Priority>,
}

/// True when the task is incomplete and due strictly before `today`.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    match task.due_date {
        Some(due) => !task.completed && due < today,
        None => false,
    }
}

/// True when the task is due exactly on `today`, regardless of completion.
pub fn is_due_today(task: &Task, today: NaiveDate) -> bool {
    task.due_date == Some(today)
}

/// Whether a single task passes every predicate of the filter spec.
pub fn matches(task: &Task, spec: &FilterSpec, today: NaiveDate) -> bool {
    if !spec.search.is_empty() {
        let needle = spec.search.to_lowercase();
        let in_title = task.title.to_lowercase().contains(&needle);
        let in_category = task.category.to_lowercase().contains(&needle);
        if !in_title && !in_category {
            return false;
        }
    }

    if let Some(category) = &spec.category {
        if task.category != *category {
            return false;
        }
    }

    match spec.status {
        StatusFilter::All => {}
        StatusFilter::Pending => {
            if task.completed {
                return false;
            }
        }
        StatusFilter::Completed => {
            if !task.completed {
                return false;
            }
        }
        StatusFilter::Overdue => {
            if !is_overdue(task, today) {
                return false;
            }
        }
        StatusFilter::Today => {
            if !is_due_today(task, today) {
                return false;
            }
        }
    }

    if !spec.priority.is_empty() && !spec.priority.contains(&task.priority) {
        return false;
    }

    true
}

/// Filters a task collection by the given spec.
pub fn filter_tasks(tasks: &[Task], spec: &FilterSpec, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| matches(t, spec, today))
        .cloned()
        .collect()
}

/// Total-order comparator for the task list.
///
/// Incomplete tasks always precede completed ones; within the same
/// completion state the requested key applies; every tie falls through to
/// creation time descending (newest first).
pub fn compare(a: &Task, b: &Task, key: SortKey) -> Ordering {
    // false < true, so incomplete sorts first
    let by_completed = a.completed.cmp(&b.completed);
    if by_completed != Ordering::Equal {
        return by_completed;
    }

    let by_key = match key {
        SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
        SortKey::DueDate => match (a.due_date, b.due_date) {
            (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Created => Ordering::Equal,
    };

    by_key.then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sorts tasks in place by the given key.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    tasks.sort_by(|a, b| compare(a, b, key));
}
