pub mod queries;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::Connection;
use tasklist_core::task::Task;

use crate::{migrations, Database, DbConfig, DbError};

/// Extension trait that converts `rusqlite::Result<T>` into `Result<T, DbError>`.
pub(crate) trait SqliteResultExt<T> {
    fn to_db(self) -> Result<T, DbError>;
}

impl<T> SqliteResultExt<T> for rusqlite::Result<T> {
    fn to_db(self) -> Result<T, DbError> {
        self.map_err(map_sqlite_err)
    }
}

/// SQLite-backed task store. Clones share one connection, so every
/// operation is serialized behind its mutex.
#[derive(Clone)]
pub struct SqliteDatabase {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDatabase {
    pub fn open(config: &DbConfig) -> Result<Self, DbError> {
        let path = config
            .sqlite_path
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| crate::data_dir().join("tasklist.db"));
        std::fs::create_dir_all(path.parent().unwrap_or(Path::new(".")))?;
        Self::open_path(&path)
    }

    pub fn open_path(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path).to_db()?;
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA busy_timeout=5000;",
        )
        .to_db()?;
        tracing::debug!("opened task store at {}", path.display());
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, DbError> {
        Self::from_connection(Connection::open_in_memory().to_db()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, DbError> {
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.with_conn(|conn| migrations::run(conn))?;
        Ok(db)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DbError> {
        self.conn
            .lock()
            .map_err(|_| DbError::Internal("lock poisoned".into()))
    }

    pub(crate) fn with_conn<F, T>(&self, f: F) -> Result<T, DbError>
    where
        F: FnOnce(&Connection) -> Result<T, DbError>,
    {
        let conn = self.lock()?;
        f(&conn)
    }

    pub(crate) fn with_conn_mut<F, T>(&self, f: F) -> Result<T, DbError>
    where
        F: FnOnce(&mut Connection) -> Result<T, DbError>,
    {
        let mut conn = self.lock()?;
        f(&mut conn)
    }
}

pub(crate) fn map_sqlite_err(e: rusqlite::Error) -> DbError {
    DbError::Internal(e.to_string())
}

fn join_err(e: tokio::task::JoinError) -> DbError {
    DbError::Internal(e.to_string())
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn fetch_all(&self) -> Result<Vec<Task>, DbError> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.fetch_all_sync())
            .await
            .map_err(join_err)?
    }

    async fn get_task(&self, id: i64) -> Result<Option<Task>, DbError> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.get_task_sync(id))
            .await
            .map_err(join_err)?
    }

    async fn count(&self) -> Result<usize, DbError> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.count_sync())
            .await
            .map_err(join_err)?
    }

    async fn add(&self, task: &Task) -> Result<(), DbError> {
        let db = self.clone();
        let task = task.clone();
        tokio::task::spawn_blocking(move || db.add_sync(&task))
            .await
            .map_err(join_err)?
    }

    async fn update(&self, task: &Task) -> Result<Option<Task>, DbError> {
        let db = self.clone();
        let task = task.clone();
        tokio::task::spawn_blocking(move || db.update_sync(&task))
            .await
            .map_err(join_err)?
    }

    async fn delete(&self, id: i64) -> Result<usize, DbError> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.delete_sync(id))
            .await
            .map_err(join_err)?
    }

    async fn save_many(&self, tasks: &[Task]) -> Result<(), DbError> {
        let db = self.clone();
        let tasks = tasks.to_vec();
        tokio::task::spawn_blocking(move || db.save_many_sync(&tasks))
            .await
            .map_err(join_err)?
    }
}
