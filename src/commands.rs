use chrono::Local;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::due::due_status_on;
use crate::filter::{filter_tasks, sort_tasks, FilterSpec, SortKey, StatusFilter};
use crate::models::{Priority, Task};
use crate::stats::task_stats;
use crate::store::{CategoryStore, TaskStore};

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Lists tasks from the sample dataset in a formatted table, after
/// applying the requested filters and sort key.
pub fn cmd_list(
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    priority: Vec<String>,
    sort: Option<String>,
) {
    let status = match status {
        Some(s) => match StatusFilter::from_name(&s) {
            Some(f) => f,
            None => {
                eprintln!(
                    "Unknown status '{}'. Use all, pending, completed, overdue or today.",
                    s
                );
                return;
            }
        },
        None => StatusFilter::All,
    };

    let sort_key = match sort {
        Some(s) => match SortKey::from_name(&s) {
            Some(k) => k,
            None => {
                eprintln!("Unknown sort key '{}'. Use priority, due, category or created.", s);
                return;
            }
        },
        None => SortKey::default(),
    };

    let mut priorities = Vec::new();
    for name in priority {
        match Priority::from_name(&name) {
            Some(p) => priorities.push(p),
            None => {
                eprintln!("Unknown priority '{}'. Use high, medium or low.", name);
                return;
            }
        }
    }

    let spec = FilterSpec {
        search: search.unwrap_or_default(),
        category,
        status,
        priority: priorities,
    };

    let store = TaskStore::with_seed_data();
    let today = Local::now().date_naive();
    let mut tasks = filter_tasks(&store.get_all(), &spec, today);
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    sort_tasks(&mut tasks, sort_key);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
            Cell::new("Due").add_attribute(Attribute::Bold),
            Cell::new("When").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for t in tasks {
        table.add_row(task_row(&t, today));
    }

    println!("{table}");
}

fn task_row(t: &Task, today: chrono::NaiveDate) -> Vec<Cell> {
    let due = due_status_on(t.due_date, t.completed, today);
    let due_text = due.as_ref().map(|d| d.text.clone()).unwrap_or_default();
    let due_color = match &due {
        Some(d) if d.urgent => Color::Red,
        Some(_) => Color::Reset,
        None => Color::Grey,
    };

    let status = if t.completed { "Done" } else { "Pending" };
    let status_color = if t.completed { Color::Green } else { Color::Yellow };

    vec![
        Cell::new(t.id),
        Cell::new(&t.title),
        Cell::new(&t.category),
        Cell::new(t.priority.label()).fg(priority_color(t.priority)),
        Cell::new(t.due_date.map(|d| d.to_string()).unwrap_or_default()),
        Cell::new(due_text).fg(due_color),
        Cell::new(status).fg(status_color),
    ]
}

/// Prints the details of a single task by id.
pub fn cmd_show(id: u64) {
    let store = TaskStore::with_seed_data();
    let task = match store.get(id) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let today = Local::now().date_naive();
    let due = due_status_on(task.due_date, task.completed, today);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec![Cell::new("ID").add_attribute(Attribute::Bold), Cell::new(task.id)]);
    table.add_row(vec![
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new(&task.title),
    ]);
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new(&task.category),
    ]);
    table.add_row(vec![
        Cell::new("Priority").add_attribute(Attribute::Bold),
        Cell::new(task.priority.label()).fg(priority_color(task.priority)),
    ]);
    table.add_row(vec![
        Cell::new("Due").add_attribute(Attribute::Bold),
        Cell::new(
            task.due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".into()),
        ),
    ]);
    table.add_row(vec![
        Cell::new("When").add_attribute(Attribute::Bold),
        Cell::new(due.map(|d| d.text).unwrap_or_else(|| "-".into())),
    ]);
    table.add_row(vec![
        Cell::new("Created").add_attribute(Attribute::Bold),
        Cell::new(task.created_at.to_rfc3339()),
    ]);
    table.add_row(vec![
        Cell::new("Completed").add_attribute(Attribute::Bold),
        Cell::new(
            task.completed_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".into()),
        ),
    ]);
    println!("{table}");
}

/// Prints aggregate stats for the sample dataset.
pub fn cmd_stats() {
    let store = TaskStore::with_seed_data();
    let today = Local::now().date_naive();
    let stats = task_stats(&store.get_all(), today);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec![Cell::new("Total").add_attribute(Attribute::Bold), Cell::new(stats.total)]);
    table.add_row(vec![
        Cell::new("Completed").add_attribute(Attribute::Bold),
        Cell::new(stats.completed).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Pending").add_attribute(Attribute::Bold),
        Cell::new(stats.pending).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Overdue").add_attribute(Attribute::Bold),
        Cell::new(stats.overdue).fg(Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Completion").add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", stats.completion_rate)),
    ]);
    table.add_row(vec![
        Cell::new("Open high / medium / low").add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} / {} / {}",
            stats.priority_breakdown.high,
            stats.priority_breakdown.medium,
            stats.priority_breakdown.low
        )),
    ]);
    println!("{table}");
}

/// Lists categories with their derived task counts.
pub fn cmd_categories() {
    let tasks = TaskStore::with_seed_data();
    let mut categories = CategoryStore::with_seed_data();
    categories.recount(&tasks.get_all());

    let all = categories.get_all();
    if all.is_empty() {
        println!("No categories found.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "Name", "Color", "Tasks"]);
    for c in all {
        table.add_row(vec![
            c.id.to_string(),
            c.name,
            c.color,
            c.task_count.to_string(),
        ]);
    }
    println!("{table}");
}
