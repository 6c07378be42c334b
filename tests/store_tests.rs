use chrono::{Duration, Local, TimeZone, Utc};
use taskdeck::models::{CategoryDraft, CategoryPatch, Priority, Task, TaskDraft, TaskPatch};
use taskdeck::store::{CategoryStore, TaskStore};
use taskdeck::StoreError;

fn task(id: u64, title: &str, category: &str) -> Task {
    Task {
        id,
        title: title.into(),
        completed: false,
        priority: Priority::Medium,
        category: category.into(),
        due_date: None,
        created_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        completed_at: None,
    }
}

#[test]
fn test_create_assigns_max_plus_one() {
    let mut store = TaskStore::from_tasks(vec![
        task(1, "a", "Work"),
        task(3, "b", "Work"),
        task(7, "c", "Work"),
    ]);

    let created = store
        .create(TaskDraft {
            title: "d".into(),
            ..TaskDraft::default()
        })
        .unwrap();

    assert_eq!(created.id, 8);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_create_fills_defaults() {
    let mut store = TaskStore::new();
    let created = store
        .create(TaskDraft {
            title: "  Buy milk  ".into(),
            ..TaskDraft::default()
        })
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.category, "Personal");
    assert_eq!(created.priority, Priority::Medium);
    assert!(!created.completed);
    assert!(created.completed_at.is_none());
    assert!(created.due_date.is_none());
}

#[test]
fn test_create_rejects_empty_title() {
    let mut store = TaskStore::new();
    let err = store
        .create(TaskDraft {
            title: "   ".into(),
            ..TaskDraft::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn test_create_rejects_past_due_date() {
    let mut store = TaskStore::new();
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let err = store
        .create(TaskDraft {
            title: "late".into(),
            due_date: Some(yesterday),
            ..TaskDraft::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn test_update_flip_sets_and_clears_completed_at() {
    let mut store = TaskStore::from_tasks(vec![task(1, "a", "Work")]);

    let done = store.update(1, TaskPatch::completed(true)).unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());

    // Updating an already-completed task without touching the flag keeps
    // the original completion timestamp.
    let stamped = done.completed_at;
    let renamed = store
        .update(
            1,
            TaskPatch {
                title: Some("b".into()),
                ..TaskPatch::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.completed_at, stamped);

    let reopened = store.update(1, TaskPatch::completed(false)).unwrap();
    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());
}

#[test]
fn test_update_rejects_past_due_date() {
    let mut store = TaskStore::from_tasks(vec![task(1, "a", "Work")]);
    let yesterday = Local::now().date_naive() - Duration::days(1);
    let err = store
        .update(
            1,
            TaskPatch {
                due_date: Some(Some(yesterday)),
                ..TaskPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn test_update_clears_due_date() {
    let mut store = TaskStore::from_tasks(vec![task(1, "a", "Work")]);
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    store
        .update(
            1,
            TaskPatch {
                due_date: Some(Some(tomorrow)),
                ..TaskPatch::default()
            },
        )
        .unwrap();

    let cleared = store
        .update(
            1,
            TaskPatch {
                due_date: Some(None),
                ..TaskPatch::default()
            },
        )
        .unwrap();
    assert!(cleared.due_date.is_none());
}

#[test]
fn test_not_found_errors() {
    let mut store = TaskStore::from_tasks(vec![task(1, "a", "Work")]);

    assert_eq!(store.get(9).unwrap_err(), StoreError::task_not_found(9));
    assert_eq!(
        store.update(9, TaskPatch::completed(true)).unwrap_err(),
        StoreError::task_not_found(9)
    );
    assert_eq!(store.delete(9).unwrap_err(), StoreError::task_not_found(9));
}

#[test]
fn test_delete_returns_removed_task() {
    let mut store = TaskStore::from_tasks(vec![task(1, "a", "Work"), task(2, "b", "Work")]);
    let removed = store.delete(1).unwrap();
    assert_eq!(removed.title, "a");
    assert_eq!(store.len(), 1);
    assert!(store.get(1).is_err());
}

#[test]
fn test_bulk_delete_preserves_collection_order() {
    let mut store = TaskStore::from_tasks(vec![
        task(1, "first", "Work"),
        task(2, "second", "Work"),
        task(3, "third", "Work"),
        task(4, "fourth", "Work"),
    ]);

    // Ids given out of order; deleted records come back in the order the
    // collection held them.
    let deleted = store.bulk_delete(&[4, 1, 3]);
    let ids: Vec<u64> = deleted.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);

    let remaining: Vec<u64> = store.get_all().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![2]);
}

#[test]
fn test_bulk_delete_skips_missing_ids() {
    let mut store = TaskStore::from_tasks(vec![task(1, "a", "Work"), task(2, "b", "Work")]);
    let deleted = store.bulk_delete(&[2, 99]);
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id, 2);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_bulk_update_applies_to_existing_ids_only() {
    let mut store = TaskStore::from_tasks(vec![
        task(1, "a", "Work"),
        task(2, "b", "Work"),
        task(3, "c", "Work"),
    ]);

    let updated = store
        .bulk_update(&[1, 3, 42], &TaskPatch::completed(true))
        .unwrap();
    assert_eq!(updated.len(), 2);
    assert!(updated.iter().all(|t| t.completed && t.completed_at.is_some()));
    assert!(!store.get(2).unwrap().completed);
}

#[test]
fn test_get_all_returns_defensive_copies() {
    let store = TaskStore::from_tasks(vec![task(1, "a", "Work")]);
    let mut copy = store.get_all();
    copy[0].title = "mutated".into();
    assert_eq!(store.get(1).unwrap().title, "a");
}

#[test]
fn test_category_create_defaults_and_ids() {
    let mut store = CategoryStore::new();
    let work = store
        .create(CategoryDraft {
            name: "Work".into(),
            color: Some("#112233".into()),
        })
        .unwrap();
    let other = store
        .create(CategoryDraft {
            name: "Other".into(),
            color: None,
        })
        .unwrap();

    assert_eq!(work.id, 1);
    assert_eq!(other.id, 2);
    assert_eq!(other.color, "#5B4FF7");
    assert_eq!(other.task_count, 0);
}

#[test]
fn test_category_update_and_not_found() {
    let mut store = CategoryStore::new();
    store
        .create(CategoryDraft {
            name: "Work".into(),
            color: None,
        })
        .unwrap();

    let updated = store
        .update(
            1,
            CategoryPatch {
                color: Some("#FF0000".into()),
                ..CategoryPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.color, "#FF0000");
    assert_eq!(updated.name, "Work");

    assert_eq!(
        store.get(9).unwrap_err(),
        StoreError::category_not_found(9)
    );
}

#[test]
fn test_category_recount_derives_from_tasks() {
    let mut categories = CategoryStore::new();
    categories
        .create(CategoryDraft {
            name: "Work".into(),
            color: None,
        })
        .unwrap();
    categories
        .create(CategoryDraft {
            name: "Health".into(),
            color: None,
        })
        .unwrap();

    let tasks = vec![
        task(1, "a", "Work"),
        task(2, "b", "Work"),
        task(3, "c", "Health"),
    ];
    categories.recount(&tasks);

    let all = categories.get_all();
    assert_eq!(all[0].task_count, 2);
    assert_eq!(all[1].task_count, 1);

    // A recount after deletions never trusts the previous numbers.
    categories.recount(&tasks[..1]);
    let all = categories.get_all();
    assert_eq!(all[0].task_count, 1);
    assert_eq!(all[1].task_count, 0);
}

#[test]
fn test_seed_data_loads() {
    let tasks = TaskStore::with_seed_data();
    let categories = CategoryStore::with_seed_data();
    assert!(!tasks.is_empty());
    assert!(!categories.is_empty());
}
