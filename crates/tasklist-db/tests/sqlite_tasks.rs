// Integration tests that exercise the Database trait against SQLite,
// both in memory and on disk.

use std::sync::Arc;

use chrono::Utc;
use tasklist_core::task::{NewTask, Task};
use tasklist_db::{Database, SqliteDatabase};

fn make_db() -> Arc<dyn Database> {
    Arc::new(SqliteDatabase::open_in_memory().unwrap())
}

fn seed_fixture() -> Vec<Task> {
    let now = Utc::now();
    vec![
        Task {
            id: Some(1),
            title: Some("Task 1".into()),
            note: Some("Do something nice for someone you care about".into()),
            created_at: Some(now),
            completed: Some(false),
        },
        Task {
            id: Some(2),
            title: Some("Task 2".into()),
            note: Some("Memorize a poem".into()),
            created_at: Some(now),
            completed: Some(true),
        },
    ]
}

#[tokio::test]
async fn add_then_fetch_all_returns_the_task() {
    let db = make_db();
    let task = NewTask {
        title: "Write report".into(),
        note: Some("quarterly numbers".into()),
    }
    .into_task(Utc::now());

    db.add(&task).await.unwrap();

    let all = db.fetch_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, task.id);
    assert_eq!(all[0].title.as_deref(), Some("Write report"));
    assert_eq!(all[0].note.as_deref(), Some("quarterly numbers"));
    assert_eq!(all[0].completed, Some(false));
}

#[tokio::test]
async fn update_existing_changes_fields_and_keeps_id() {
    let db = make_db();
    db.save_many(&seed_fixture()).await.unwrap();

    let updated = db
        .update(&Task {
            id: Some(1),
            title: Some("Renamed".into()),
            note: Some("new note".into()),
            created_at: None,
            completed: Some(true),
        })
        .await
        .unwrap()
        .expect("task 1 exists");

    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.title.as_deref(), Some("Renamed"));
    assert_eq!(updated.note.as_deref(), Some("new note"));
    assert_eq!(updated.created_at, None);
    assert_eq!(updated.completed, Some(true));

    // other rows untouched
    let other = db.get_task(2).await.unwrap().unwrap();
    assert_eq!(other.title.as_deref(), Some("Task 2"));
}

#[tokio::test]
async fn update_missing_id_leaves_store_unchanged() {
    let db = make_db();
    db.save_many(&seed_fixture()).await.unwrap();
    let before = db.fetch_all().await.unwrap();

    let result = db
        .update(&Task {
            id: Some(999),
            title: Some("ghost".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(db.fetch_all().await.unwrap(), before);
}

#[tokio::test]
async fn delete_existing_and_missing_ids() {
    let db = make_db();
    db.save_many(&seed_fixture()).await.unwrap();

    assert_eq!(db.delete(1).await.unwrap(), 1);
    assert!(db.get_task(1).await.unwrap().is_none());
    assert_eq!(db.count().await.unwrap(), 1);

    assert_eq!(db.delete(42).await.unwrap(), 0);
    assert_eq!(db.count().await.unwrap(), 1);
}

#[tokio::test]
async fn save_many_stores_seed_records() {
    let db = make_db();
    db.save_many(&seed_fixture()).await.unwrap();

    let all = db.fetch_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, Some(1));
    assert_eq!(all[0].title.as_deref(), Some("Task 1"));
    assert_eq!(all[0].completed, Some(false));
    assert_eq!(all[1].id, Some(2));
    assert_eq!(all[1].title.as_deref(), Some("Task 2"));
    assert_eq!(all[1].completed, Some(true));
}

#[tokio::test]
async fn fetch_all_on_empty_store_is_empty() {
    let db = make_db();
    assert!(db.fetch_all().await.unwrap().is_empty());
    assert_eq!(db.count().await.unwrap(), 0);
}

#[tokio::test]
async fn data_survives_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("tasks.db");

    {
        let db = SqliteDatabase::open_path(&path).unwrap();
        db.save_many(&seed_fixture()).await.unwrap();
    }

    let reopened = SqliteDatabase::open_path(&path).unwrap();
    let all = reopened.fetch_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].note.as_deref(), Some("Memorize a poem"));
}
