use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use ratatui::widgets::TableState;

use crate::filter::{filter_tasks, sort_tasks, FilterSpec, SortKey, StatusFilter};
use crate::models::{Category, Priority, Task, TaskDraft, TaskPatch};
use crate::stats::{filter_counts, task_stats, FilterCounts, TaskStats};
use crate::store::{CategoryStore, TaskStore};

#[derive(PartialEq)]
pub enum InputMode {
    Normal,
    Search,
    Adding,
    Editing,
    Confirm,
}

pub enum InputField {
    None,
    Title,
    Due,
}

/// What a pending delete confirmation applies to.
pub enum DeleteTarget {
    One(u64),
    Selection,
}

/// State for the multi-step "Add Task" wizard.
#[derive(Default)]
pub struct AddState {
    pub title: String,
    pub category: Option<String>,
    pub due: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub step: usize, // 0: Title, 1: Category, 2: Due, 3: Priority
}

/// Dashboard state: owns both stores plus the UI-facing filter, search,
/// selection and input state. Every mutation goes through `refresh` so
/// derived views (visible tasks, counts, stats) never go stale.
pub struct App {
    pub tasks: TaskStore,
    pub categories: CategoryStore,
    /// Tasks passing the current filters, in sorted order.
    pub visible: Vec<Task>,
    /// Categories with task counts re-derived from the live collection.
    pub category_list: Vec<Category>,
    pub stats: TaskStats,
    pub counts: FilterCounts,
    pub state: TableState,
    pub input_mode: InputMode,
    pub input_field: InputField,
    pub input_buffer: String,
    pub target_id: Option<u64>,
    pub add_state: AddState,
    pub search: String,
    pub status_filter: StatusFilter,
    pub active_category: Option<String>,
    pub sort_key: SortKey,
    pub selection: HashSet<u64>,
    pub selection_mode: bool,
    pub delete_target: Option<DeleteTarget>,
    /// Last status or error message, shown on the footer line.
    pub message: Option<String>,
}

impl App {
    /// Creates a new App seeded with the sample dataset.
    pub fn new() -> App {
        let mut app = App {
            tasks: TaskStore::with_seed_data(),
            categories: CategoryStore::with_seed_data(),
            visible: Vec::new(),
            category_list: Vec::new(),
            stats: TaskStats::default(),
            counts: FilterCounts::default(),
            state: TableState::default(),
            input_mode: InputMode::Normal,
            input_field: InputField::None,
            input_buffer: String::new(),
            target_id: None,
            add_state: AddState::default(),
            search: String::new(),
            status_filter: StatusFilter::All,
            active_category: None,
            sort_key: SortKey::Priority,
            selection: HashSet::new(),
            selection_mode: false,
            delete_target: None,
            message: None,
        };
        app.refresh();
        app
    }

    fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            category: self.active_category.clone(),
            status: self.status_filter,
            priority: Vec::new(),
        }
    }

    /// Recomputes every derived view from the stores: visible tasks,
    /// category counts, filter-tab counts and stats.
    pub fn refresh(&mut self) {
        let today = Local::now().date_naive();
        let all = self.tasks.get_all();

        let mut visible = filter_tasks(&all, &self.filter_spec(), today);
        sort_tasks(&mut visible, self.sort_key);
        self.visible = visible;

        self.categories.recount(&all);
        self.category_list = self.categories.get_all();
        self.stats = task_stats(&all, today);
        self.counts = filter_counts(&all, today);

        // Drop selected ids that no longer exist; leaving selection mode
        // when nothing remains selected.
        let ids: HashSet<u64> = all.iter().map(|t| t.id).collect();
        self.selection.retain(|id| ids.contains(id));
        if self.selection.is_empty() {
            self.selection_mode = false;
        }

        if self.visible.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.visible.len() {
                self.state.select(Some(self.visible.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }

    /// Selects the next row, wrapping around.
    pub fn next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.visible.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous row, wrapping around.
    pub fn previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.visible.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn highlighted(&self) -> Option<&Task> {
        self.state.selected().and_then(|i| self.visible.get(i))
    }

    /// Toggles the completion flag of the highlighted task.
    pub fn toggle_complete(&mut self) {
        if let Some((id, completed)) = self.highlighted().map(|t| (t.id, t.completed)) {
            let flipped = !completed;
            match self.tasks.update(id, TaskPatch::completed(flipped)) {
                Ok(t) => {
                    self.message = Some(if t.completed {
                        format!("Task {} completed", t.id)
                    } else {
                        format!("Task {} back to pending", t.id)
                    });
                }
                Err(e) => self.message = Some(e.to_string()),
            }
            self.refresh();
        }
    }

    // --- filters ---

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            StatusFilter::All => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::Overdue,
            StatusFilter::Overdue => StatusFilter::Today,
            StatusFilter::Today => StatusFilter::All,
        };
        self.refresh();
    }

    pub fn cycle_sort_key(&mut self) {
        self.sort_key = match self.sort_key {
            SortKey::Priority => SortKey::DueDate,
            SortKey::DueDate => SortKey::Category,
            SortKey::Category => SortKey::Created,
            SortKey::Created => SortKey::Priority,
        };
        self.refresh();
    }

    /// Cycles the active category: all -> first -> ... -> last -> all.
    pub fn cycle_category(&mut self) {
        let names: Vec<String> = self.category_list.iter().map(|c| c.name.clone()).collect();
        self.active_category = match &self.active_category {
            None => names.first().cloned(),
            Some(current) => match names.iter().position(|n| n == current) {
                Some(i) if i + 1 < names.len() => Some(names[i + 1].clone()),
                _ => None,
            },
        };
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.status_filter = StatusFilter::All;
        self.active_category = None;
        self.refresh();
    }

    // --- search ---

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn search_push(&mut self, c: char) {
        self.search.push(c);
        self.refresh();
    }

    pub fn search_pop(&mut self) {
        self.search.pop();
        self.refresh();
    }

    pub fn search_accept(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn search_cancel(&mut self) {
        self.search.clear();
        self.input_mode = InputMode::Normal;
        self.refresh();
    }

    // --- selection ---

    /// Toggles selection of the highlighted task, entering selection mode
    /// on the first pick and leaving it when the selection empties.
    pub fn toggle_select(&mut self) {
        if let Some(id) = self.highlighted().map(|t| t.id) {
            if !self.selection.remove(&id) {
                self.selection.insert(id);
            }
            self.selection_mode = !self.selection.is_empty();
        }
    }

    /// Selects every visible task, or clears the selection when all of
    /// them are already selected.
    pub fn toggle_select_all(&mut self) {
        let visible: HashSet<u64> = self.visible.iter().map(|t| t.id).collect();
        if !visible.is_empty() && self.selection == visible {
            self.selection.clear();
        } else {
            self.selection = visible;
        }
        self.selection_mode = !self.selection.is_empty();
    }

    /// Marks every selected task completed in one bulk update.
    pub fn complete_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let ids: Vec<u64> = self.selection.iter().copied().collect();
        match self.tasks.bulk_update(&ids, &TaskPatch::completed(true)) {
            Ok(updated) => self.message = Some(format!("{} task(s) completed", updated.len())),
            Err(e) => self.message = Some(e.to_string()),
        }
        self.selection.clear();
        self.selection_mode = false;
        self.refresh();
    }

    // --- deletion (always behind a confirmation) ---

    /// Asks for confirmation before deleting the selection, or the
    /// highlighted task when nothing is selected.
    pub fn request_delete(&mut self) {
        if self.selection_mode && !self.selection.is_empty() {
            self.delete_target = Some(DeleteTarget::Selection);
            self.input_mode = InputMode::Confirm;
        } else if let Some(id) = self.highlighted().map(|t| t.id) {
            self.delete_target = Some(DeleteTarget::One(id));
            self.input_mode = InputMode::Confirm;
        }
    }

    pub fn confirm_delete(&mut self) {
        match self.delete_target.take() {
            Some(DeleteTarget::One(id)) => match self.tasks.delete(id) {
                Ok(t) => self.message = Some(format!("Deleted '{}'", t.title)),
                Err(e) => self.message = Some(e.to_string()),
            },
            Some(DeleteTarget::Selection) => {
                let ids: Vec<u64> = self.selection.iter().copied().collect();
                let deleted = self.tasks.bulk_delete(&ids);
                self.message = Some(format!("{} task(s) deleted", deleted.len()));
                self.selection.clear();
                self.selection_mode = false;
            }
            None => {}
        }
        self.input_mode = InputMode::Normal;
        self.refresh();
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
        self.input_mode = InputMode::Normal;
    }

    /// How many tasks the pending confirmation would delete.
    pub fn pending_delete_count(&self) -> usize {
        match self.delete_target {
            Some(DeleteTarget::One(_)) => 1,
            Some(DeleteTarget::Selection) => self.selection.len(),
            None => 0,
        }
    }

    // --- add wizard ---

    pub fn start_add(&mut self) {
        self.input_mode = InputMode::Adding;
        self.add_state = AddState::default();
        self.input_buffer.clear();
    }

    /// Initiates editing of a specific field for the highlighted task.
    pub fn start_edit(&mut self, field: InputField) {
        let target = self
            .highlighted()
            .map(|t| (t.id, t.title.clone(), t.due_date));
        if let Some((id, title, due_date)) = target {
            self.target_id = Some(id);
            self.input_buffer = match field {
                InputField::Title => title,
                InputField::Due => due_date.map(|d| d.to_string()).unwrap_or_default(),
                InputField::None => String::new(),
            };
            self.input_field = field;
            self.input_mode = InputMode::Editing;
        }
    }

    /// Cycles the highlighted task's priority low -> medium -> high.
    pub fn cycle_priority(&mut self) {
        if let Some((id, priority)) = self.highlighted().map(|t| (t.id, t.priority)) {
            let next = match priority {
                Priority::Low => Priority::Medium,
                Priority::Medium => Priority::High,
                Priority::High => Priority::Low,
            };
            let patch = TaskPatch {
                priority: Some(next),
                ..TaskPatch::default()
            };
            if let Err(e) = self.tasks.update(id, patch) {
                self.message = Some(e.to_string());
            }
            self.refresh();
        }
    }

    /// Handles an Enter press while adding or editing.
    pub fn handle_input(&mut self) {
        match self.input_mode {
            InputMode::Adding => self.handle_adding_input(),
            InputMode::Editing => self.handle_editing_input(),
            _ => {}
        }
    }

    fn handle_adding_input(&mut self) {
        match self.add_state.step {
            0 => {
                // Title is the only required field
                if !self.input_buffer.is_empty() {
                    self.add_state.title = self.input_buffer.clone();
                    self.add_state.step += 1;
                    self.input_buffer.clear();
                }
            }
            1 => {
                if !self.input_buffer.is_empty() {
                    self.add_state.category = Some(self.input_buffer.clone());
                }
                self.add_state.step += 1;
                self.input_buffer.clear();
            }
            2 => {
                if self.input_buffer.is_empty() {
                    self.add_state.due = None;
                } else {
                    match NaiveDate::parse_from_str(&self.input_buffer, "%Y-%m-%d") {
                        Ok(d) => self.add_state.due = Some(d),
                        Err(_) => {
                            self.message =
                                Some("Invalid date, use YYYY-MM-DD".to_string());
                            return;
                        }
                    }
                }
                self.add_state.step += 1;
                self.input_buffer.clear();
            }
            3 => {
                if !self.input_buffer.is_empty() {
                    match Priority::from_name(&self.input_buffer) {
                        Some(p) => self.add_state.priority = Some(p),
                        None => {
                            self.message =
                                Some("Unknown priority, use high/medium/low".to_string());
                            return;
                        }
                    }
                }
                let draft = TaskDraft {
                    title: self.add_state.title.clone(),
                    category: self.add_state.category.clone(),
                    due_date: self.add_state.due,
                    priority: self.add_state.priority,
                };
                match self.tasks.create(draft) {
                    Ok(t) => self.message = Some(format!("Task {} added", t.id)),
                    Err(e) => self.message = Some(e.to_string()),
                }
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.refresh();
            }
            _ => {}
        }
    }

    fn handle_editing_input(&mut self) {
        if let Some(id) = self.target_id {
            let patch = match self.input_field {
                InputField::Title => TaskPatch {
                    title: Some(self.input_buffer.clone()),
                    ..TaskPatch::default()
                },
                InputField::Due => {
                    if self.input_buffer.is_empty() {
                        // Empty input clears the due date
                        TaskPatch {
                            due_date: Some(None),
                            ..TaskPatch::default()
                        }
                    } else {
                        match NaiveDate::parse_from_str(&self.input_buffer, "%Y-%m-%d") {
                            Ok(d) => TaskPatch {
                                due_date: Some(Some(d)),
                                ..TaskPatch::default()
                            },
                            Err(_) => {
                                self.message =
                                    Some("Invalid date, use YYYY-MM-DD".to_string());
                                return;
                            }
                        }
                    }
                }
                InputField::None => return,
            };
            match self.tasks.update(id, patch) {
                Ok(t) => self.message = Some(format!("Task {} updated", t.id)),
                Err(e) => self.message = Some(e.to_string()),
            }
            self.input_mode = InputMode::Normal;
            self.input_buffer.clear();
            self.refresh();
        }
    }
}
