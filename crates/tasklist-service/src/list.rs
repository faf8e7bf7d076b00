use std::sync::Arc;

use chrono::Utc;
use tasklist_core::filter_tasks;
use tasklist_core::task::{NewTask, Task, TaskEdit};
use tasklist_db::Database;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{ServiceError, TaskSource};

/// Coordinates the local store and the seed source for a task list view.
///
/// Every mutation re-reads the store and returns the full list, so callers
/// never patch their copy by hand. Seeding and mutations share one writer
/// lock, held across each read-modify-write.
pub struct TaskList {
    db: Arc<dyn Database>,
    source: Arc<dyn TaskSource>,
    write_guard: Mutex<()>,
}

impl TaskList {
    pub fn new(db: Arc<dyn Database>, source: Arc<dyn TaskSource>) -> Self {
        Self {
            db,
            source,
            write_guard: Mutex::new(()),
        }
    }

    /// Return the stored tasks, seeding from the source first if the store
    /// is empty. Concurrent callers seed at most once.
    pub async fn load_initial(&self) -> Result<Vec<Task>, ServiceError> {
        let _guard = self.write_guard.lock().await;

        if self.db.count().await? > 0 {
            return self.refresh().await;
        }

        info!("task store is empty, seeding from remote source");
        let seed = self.source.fetch_tasks().await.map_err(|e| {
            warn!("seed fetch failed: {e}");
            e
        })?;
        self.db.save_many(&seed).await?;
        info!("seeded {} tasks", seed.len());
        self.refresh().await
    }

    pub async fn refresh(&self) -> Result<Vec<Task>, ServiceError> {
        Ok(self.db.fetch_all().await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Task>, ServiceError> {
        let tasks = self.refresh().await?;
        Ok(filter_tasks(&tasks, query))
    }

    pub async fn add(&self, input: NewTask) -> Result<Vec<Task>, ServiceError> {
        let _guard = self.write_guard.lock().await;
        let task = input.into_task(Utc::now());
        debug!("adding task {}", task.key());
        self.db.add(&task).await?;
        self.refresh().await
    }

    /// Overwrite a stored task. Unknown ids are left alone.
    pub async fn update(&self, task: &Task) -> Result<Vec<Task>, ServiceError> {
        let _guard = self.write_guard.lock().await;
        self.write(task).await?;
        self.refresh().await
    }

    pub async fn edit(&self, id: i64, edit: TaskEdit) -> Result<Vec<Task>, ServiceError> {
        let _guard = self.write_guard.lock().await;
        match self.db.get_task(id).await? {
            Some(existing) => self.write(&edit.apply(&existing, Utc::now())).await?,
            None => {
                debug!("edit skipped, no task {id}");
            }
        }
        self.refresh().await
    }

    pub async fn toggle_completed(&self, id: i64) -> Result<Vec<Task>, ServiceError> {
        let _guard = self.write_guard.lock().await;
        match self.db.get_task(id).await? {
            Some(mut task) => {
                task.completed = Some(!task.is_completed());
                self.write(&task).await?;
            }
            None => {
                debug!("toggle skipped, no task {id}");
            }
        }
        self.refresh().await
    }

    pub async fn delete(&self, id: i64) -> Result<Vec<Task>, ServiceError> {
        let _guard = self.write_guard.lock().await;
        let removed = self.db.delete(id).await?;
        debug!("deleted {removed} row(s) for task {id}");
        self.refresh().await
    }

    // Caller holds `write_guard`.
    async fn write(&self, task: &Task) -> Result<(), ServiceError> {
        if self.db.update(task).await?.is_none() {
            debug!("update skipped, no task {}", task.key());
        }
        Ok(())
    }
}
