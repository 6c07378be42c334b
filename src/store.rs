use chrono::{Local, Utc};

use crate::error::StoreError;
use crate::models::{Category, CategoryDraft, CategoryPatch, Task, TaskDraft, TaskPatch};

/// Default category assigned to tasks created without one.
pub const DEFAULT_CATEGORY: &str = "Personal";
/// Default color assigned to categories created without one.
pub const DEFAULT_COLOR: &str = "#5B4FF7";

/// In-memory store owning the task collection.
///
/// Single-writer by design: ids are assigned as max(existing) + 1 and all
/// operations assume exclusive access. Every operation returns defensive
/// copies; callers never observe internal references.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> TaskStore {
        TaskStore::default()
    }

    /// Creates a store pre-populated with the bundled sample dataset.
    pub fn with_seed_data() -> TaskStore {
        let tasks = serde_json::from_str(include_str!("seed/tasks.json")).unwrap_or_default();
        TaskStore { tasks }
    }

    pub fn from_tasks(tasks: Vec<Task>) -> TaskStore {
        TaskStore { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns a copy of every task in the store.
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns a copy of the task with the given id.
    pub fn get(&self, id: u64) -> Result<Task, StoreError> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::task_not_found(id))
    }

    /// Creates a task from the draft, assigning the next id and filling
    /// defaults (medium priority, "Personal" category).
    pub fn create(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(StoreError::Validation("title must not be empty".into()));
        }
        if let Some(due) = draft.due_date {
            if due < Local::now().date_naive() {
                return Err(StoreError::Validation(
                    "due date must not be in the past".into(),
                ));
            }
        }

        let id = self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            title,
            completed: false,
            priority: draft.priority.unwrap_or_default(),
            category: draft.category.unwrap_or_else(|| DEFAULT_CATEGORY.into()),
            due_date: draft.due_date,
            created_at: Utc::now(),
            completed_at: None,
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Merges the patch into the task with the given id.
    ///
    /// Flipping `completed` recomputes `completed_at`: stamped on
    /// false -> true, cleared on true -> false.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<Task, StoreError> {
        validate_patch(&patch)?;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::task_not_found(id))?;
        apply_patch(task, &patch);
        Ok(task.clone())
    }

    /// Removes the task with the given id, returning it.
    pub fn delete(&mut self, id: u64) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::task_not_found(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Applies one patch to every listed id. Missing ids are skipped;
    /// the patch itself is validated once up front.
    pub fn bulk_update(&mut self, ids: &[u64], patch: &TaskPatch) -> Result<Vec<Task>, StoreError> {
        validate_patch(patch)?;
        let mut updated = Vec::new();
        for &id in ids {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                apply_patch(task, patch);
                updated.push(task.clone());
            }
        }
        Ok(updated)
    }

    /// Removes every listed id, skipping ids that do not exist.
    ///
    /// Removal proceeds from the highest collection index downwards so
    /// earlier positions never shift mid-operation; the returned records
    /// are in the collection's original relative order regardless of how
    /// the ids were ordered in the call.
    pub fn bulk_delete(&mut self, ids: &[u64]) -> Vec<Task> {
        let mut positions: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| ids.contains(&t.id))
            .map(|(i, _)| i)
            .collect();
        positions.sort_unstable_by(|a, b| b.cmp(a));

        let mut deleted: Vec<(usize, Task)> = positions
            .into_iter()
            .map(|i| (i, self.tasks.remove(i)))
            .collect();
        deleted.sort_unstable_by_key(|(i, _)| *i);
        deleted.into_iter().map(|(_, t)| t).collect()
    }
}

fn validate_patch(patch: &TaskPatch) -> Result<(), StoreError> {
    if let Some(title) = &patch.title {
        if title.trim().is_empty() {
            return Err(StoreError::Validation("title must not be empty".into()));
        }
    }
    if let Some(Some(due)) = patch.due_date {
        if due < Local::now().date_naive() {
            return Err(StoreError::Validation(
                "due date must not be in the past".into(),
            ));
        }
    }
    Ok(())
}

fn apply_patch(task: &mut Task, patch: &TaskPatch) {
    if let Some(title) = &patch.title {
        task.title = title.trim().to_string();
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(category) = &patch.category {
        task.category = category.clone();
    }
    if let Some(due) = patch.due_date {
        task.due_date = due;
    }
    if let Some(completed) = patch.completed {
        if completed && !task.completed {
            task.completed_at = Some(Utc::now());
        } else if !completed && task.completed {
            task.completed_at = None;
        }
        task.completed = completed;
    }
}

/// In-memory store owning the category collection. Mirrors the task
/// store's shape minus bulk operations.
#[derive(Debug, Default)]
pub struct CategoryStore {
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> CategoryStore {
        CategoryStore::default()
    }

    /// Creates a store pre-populated with the bundled sample categories.
    pub fn with_seed_data() -> CategoryStore {
        let categories =
            serde_json::from_str(include_str!("seed/categories.json")).unwrap_or_default();
        CategoryStore { categories }
    }

    pub fn from_categories(categories: Vec<Category>) -> CategoryStore {
        CategoryStore { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get_all(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn get(&self, id: u64) -> Result<Category, StoreError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::category_not_found(id))
    }

    pub fn create(&mut self, draft: CategoryDraft) -> Result<Category, StoreError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(StoreError::Validation("name must not be empty".into()));
        }

        let id = self.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category {
            id,
            name,
            color: draft.color.unwrap_or_else(|| DEFAULT_COLOR.into()),
            task_count: 0,
        };
        self.categories.push(category.clone());
        Ok(category)
    }

    pub fn update(&mut self, id: u64, patch: CategoryPatch) -> Result<Category, StoreError> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(StoreError::Validation("name must not be empty".into()));
            }
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::category_not_found(id))?;
        if let Some(name) = patch.name {
            category.name = name.trim().to_string();
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        Ok(category.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Category, StoreError> {
        let index = self
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::category_not_found(id))?;
        Ok(self.categories.remove(index))
    }

    /// Re-derives every `task_count` from the live task collection.
    /// Counts are never trusted from a stale snapshot.
    pub fn recount(&mut self, tasks: &[Task]) {
        for category in &mut self.categories {
            category.task_count = tasks.iter().filter(|t| t.category == category.name).count();
        }
    }
}
