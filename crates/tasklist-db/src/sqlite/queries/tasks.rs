use rusqlite::{params, Connection, OptionalExtension, Row};
use tasklist_core::task::Task;

use super::super::{SqliteDatabase, SqliteResultExt};
use crate::DbError;

const UPSERT_TASK: &str = "INSERT INTO tasks (id, title, note, created_at, completed)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT(id) DO UPDATE SET
        title = excluded.title,
        note = excluded.note,
        created_at = excluded.created_at,
        completed = excluded.completed";

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: Some(row.get("id")?),
        title: row.get("title")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
        completed: Some(row.get("completed")?),
    })
}

fn upsert(conn: &Connection, task: &Task) -> Result<(), DbError> {
    conn.execute(
        UPSERT_TASK,
        params![
            task.key(),
            task.title,
            task.note,
            task.created_at,
            task.is_completed(),
        ],
    )
    .to_db()?;
    Ok(())
}

fn select_task(conn: &Connection, id: i64) -> Result<Option<Task>, DbError> {
    conn.query_row("SELECT * FROM tasks WHERE id = ?1", params![id], row_to_task)
        .optional()
        .to_db()
}

impl SqliteDatabase {
    pub fn fetch_all_sync(&self) -> Result<Vec<Task>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT * FROM tasks ORDER BY id ASC").to_db()?;
            let tasks = stmt
                .query_map([], row_to_task)
                .to_db()?
                .collect::<Result<Vec<_>, _>>()
                .to_db()?;
            Ok(tasks)
        })
    }

    pub fn get_task_sync(&self, id: i64) -> Result<Option<Task>, DbError> {
        self.with_conn(|conn| select_task(conn, id))
    }

    pub fn count_sync(&self) -> Result<usize, DbError> {
        self.with_conn(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
                .to_db()?;
            Ok(count as usize)
        })
    }

    pub fn add_sync(&self, task: &Task) -> Result<(), DbError> {
        self.with_conn(|conn| upsert(conn, task))
    }

    pub fn update_sync(&self, task: &Task) -> Result<Option<Task>, DbError> {
        self.with_conn(|conn| {
            let id = task.key();
            let changed = conn
                .execute(
                    "UPDATE tasks SET title = ?2, note = ?3, created_at = ?4, completed = ?5
                     WHERE id = ?1",
                    params![
                        id,
                        task.title,
                        task.note,
                        task.created_at,
                        task.is_completed(),
                    ],
                )
                .to_db()?;
            if changed == 0 {
                return Ok(None);
            }
            select_task(conn, id)
        })
    }

    pub fn delete_sync(&self, id: i64) -> Result<usize, DbError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])
                .to_db()
        })
    }

    pub fn save_many_sync(&self, tasks: &[Task]) -> Result<(), DbError> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction().to_db()?;
            for task in tasks {
                upsert(&tx, task)?;
            }
            tx.commit().to_db()?;
            Ok(())
        })
    }
}
