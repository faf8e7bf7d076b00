use async_trait::async_trait;
use tasklist_core::task::Task;
use tasklist_db::DbError;
use thiserror::Error;

use crate::remote::RemoteError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("remote fetch failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("storage error: {0}")]
    Storage(#[from] DbError),
}

/// Where first-run seed data comes from.
///
/// `RemoteClient` fetches it over HTTP; tests supply fixed lists.
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn fetch_tasks(&self) -> Result<Vec<Task>, RemoteError>;
}
