mod migrations;
pub mod sqlite;

use std::path::PathBuf;

use async_trait::async_trait;
use tasklist_core::task::Task;
use thiserror::Error;

pub use sqlite::SqliteDatabase;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Internal(String),
}

/// Where the SQLite file lives. `None` means the per-user data directory.
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    pub sqlite_path: Option<String>,
}

/// Durable storage for tasks, keyed by id.
#[async_trait]
pub trait Database: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Task>, DbError>;
    async fn get_task(&self, id: i64) -> Result<Option<Task>, DbError>;
    async fn count(&self) -> Result<usize, DbError>;

    /// Insert or replace the row keyed by `task.id` (absent id is 0).
    async fn add(&self, task: &Task) -> Result<(), DbError>;

    /// Overwrite the mutable fields of an existing row.
    /// Returns `None` without touching the store when the id is unknown.
    async fn update(&self, task: &Task) -> Result<Option<Task>, DbError>;

    /// Remove every row with this id and return how many went away.
    async fn delete(&self, id: i64) -> Result<usize, DbError>;

    /// `add` for each task inside a single transaction.
    async fn save_many(&self, tasks: &[Task]) -> Result<(), DbError>;
}

pub fn open_database(config: &DbConfig) -> Result<SqliteDatabase, DbError> {
    SqliteDatabase::open(config)
}

pub(crate) fn data_dir() -> PathBuf {
    let base = if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local/share")
    } else {
        PathBuf::from(".")
    };
    base.join("tasklist")
}
