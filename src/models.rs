use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority level.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Numeric rank used for sorting: high(3) > medium(2) > low(1).
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parses a priority name as used on the CLI ("high", "medium", "low").
    pub fn from_name(name: &str) -> Option<Priority> {
        match name.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Represents a single to-do item on the dashboard.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned as max(existing ids) + 1.
    pub id: u64,
    /// The task title. Never empty.
    pub title: String,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Priority level, defaults to medium.
    #[serde(default)]
    pub priority: Priority,
    /// Name of the category this task belongs to (soft reference).
    pub category: String,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Timestamp when the task was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// Set when `completed` flips false -> true, cleared on true -> false.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Represents a named, colored grouping for tasks.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: u64,
    /// Category name, unique by convention.
    pub name: String,
    /// Hex color string, e.g. "#5B4FF7".
    pub color: String,
    /// Derived count of tasks in this category. Recomputed from the live
    /// task collection, never authoritative on its own.
    #[serde(default)]
    pub task_count: usize,
}

/// Fields accepted when creating a task. Everything except the title
/// falls back to a default.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Explicit partial update for a task. A `None` field is left untouched;
/// `due_date` uses a nested Option so the date can be cleared.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Patch that only flips the completion flag.
    pub fn completed(value: bool) -> TaskPatch {
        TaskPatch {
            completed: Some(value),
            ..TaskPatch::default()
        }
    }
}

/// Fields accepted when creating a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryDraft {
    pub name: String,
    pub color: Option<String>,
}

/// Explicit partial update for a category.
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}
