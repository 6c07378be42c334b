use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::due::due_status;
use crate::models::Priority;
use super::app::{App, InputField, InputMode};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3), // Search + filters
                Constraint::Min(0),    // Sidebar + table
                Constraint::Length(3), // Stats + message
                Constraint::Length(3), // Help
            ]
            .as_ref(),
        )
        .split(f.area());

    render_filter_bar(f, app, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)].as_ref())
        .split(chunks[1]);

    render_sidebar(f, app, main[0]);
    render_task_table(f, app, main[1]);
    render_status_line(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
    render_popups(f, app);
}

fn render_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let counts = app.counts;
    let search = if app.search.is_empty() && app.input_mode != InputMode::Search {
        "-".to_string()
    } else {
        format!("{}_", app.search)
    };
    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Cyan)),
        Span::raw(search),
        Span::raw("  "),
        Span::styled("Status: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!(
            "{} (all {} | pending {} | done {} | overdue {} | today {})",
            app.status_filter.label(),
            counts.all,
            counts.pending,
            counts.completed,
            counts.overdue,
            counts.today
        )),
        Span::raw("  "),
        Span::styled("Sort: ", Style::default().fg(Color::Cyan)),
        Span::raw(app.sort_key.label()),
    ]);
    let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    let all_style = if app.active_category.is_none() {
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
    } else {
        Style::default()
    };
    items.push(ListItem::new(format!("All ({})", app.counts.all)).style(all_style));

    for c in &app.category_list {
        let active = app.active_category.as_deref() == Some(c.name.as_str());
        let style = if active {
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
        } else {
            Style::default()
        };
        items.push(ListItem::new(format!("{} ({})", c.name, c.task_count)).style(style));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Categories"),
    );
    f.render_widget(list, area);
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

fn render_task_table(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|t| {
            let due = due_status(t.due_date, t.completed);
            let due_text = due.as_ref().map(|d| d.text.clone()).unwrap_or_default();
            let urgent = due.as_ref().map(|d| d.urgent).unwrap_or(false);

            let style = if t.completed {
                Style::default().fg(Color::DarkGray)
            } else if urgent {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(priority_color(t.priority))
            };

            let mark = if app.selection.contains(&t.id) { "x" } else { "" };

            Row::new(vec![
                Cell::from(mark),
                Cell::from(t.id.to_string()),
                Cell::from(t.title.clone()),
                Cell::from(t.category.clone()),
                Cell::from(t.priority.label()),
                Cell::from(
                    t.due_date
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                ),
                Cell::from(due_text),
                Cell::from(if t.completed { "Done" } else { "Pending" }),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(24),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(8),
    ];

    let title = if app.selection_mode {
        format!("Tasks ({} selected)", app.selection.len())
    } else {
        "Tasks".to_string()
    };

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "ID", "Title", "Category", "Pri", "Due", "When", "Status"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats;
    let mut text = format!(
        "{} tasks · {} done ({}%) · {} overdue · open high/med/low {}/{}/{}",
        stats.total,
        stats.completed,
        stats.completion_rate,
        stats.overdue,
        stats.priority_breakdown.high,
        stats.priority_breakdown.medium,
        stats.priority_breakdown.low
    );
    if let Some(message) = &app.message {
        text.push_str("  |  ");
        text.push_str(message);
    }
    let line = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(line, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Normal => {
            "q: Quit | a: Add | Space: Done | n: Title | t: Due | p: Priority | /: Search | f: Status | c: Category | o: Sort | x: Clear | s: Select | *: All | C: Complete Sel | d: Del"
        }
        InputMode::Search => "Type to search | Enter: Keep | Esc: Clear",
        InputMode::Adding => "Enter: Next Step | Esc: Cancel",
        InputMode::Editing => "Enter: Save | Esc: Cancel",
        InputMode::Confirm => "y/Enter: Delete | n/Esc: Cancel",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

fn render_popups(f: &mut Frame, app: &App) {
    match app.input_mode {
        InputMode::Adding | InputMode::Editing => {
            let area = centered_rect(60, 3, f.area());
            f.render_widget(Clear, area);

            let title = match app.input_mode {
                InputMode::Adding => match app.add_state.step {
                    0 => "Add Task: Enter Title",
                    1 => "Add Task: Enter Category (Optional)",
                    2 => "Add Task: Enter Due Date YYYY-MM-DD (Optional)",
                    3 => "Add Task: Enter Priority high/medium/low (Optional)",
                    _ => "Add Task",
                },
                InputMode::Editing => match app.input_field {
                    InputField::Title => "Edit Title",
                    InputField::Due => "Edit Due Date (YYYY-MM-DD, empty clears)",
                    InputField::None => "Edit",
                },
                _ => "",
            };

            let input = Paragraph::new(app.input_buffer.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(input, area);
        }
        InputMode::Confirm => {
            let area = centered_rect(50, 3, f.area());
            f.render_widget(Clear, area);

            let count = app.pending_delete_count();
            let text = format!(
                "Delete {} task{}? This cannot be undone. (y/n)",
                count,
                if count > 1 { "s" } else { "" }
            );
            let prompt = Paragraph::new(text)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Confirm Delete"));
            f.render_widget(prompt, area);
        }
        _ => {}
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(r.height.saturating_sub(height) / 2),
                Constraint::Length(height),
                Constraint::Length(r.height.saturating_sub(height) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
